use crate::constants::*;
use crate::core::{GlobeConfig, Spot};
use wasm_bindgen::JsCast;
use web_sys as web;

fn make(
    document: &web::Document,
    tag: &str,
    id: Option<&str>,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if let Some(id) = id {
        el.set_id(id);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Build the info panel, reset control and optional labels once per page.
/// Styling is left to the host page (elements are addressable by id).
pub fn inject(document: &web::Document, config: &GlobeConfig) -> anyhow::Result<()> {
    if document.get_element_by_id(UI_CONTAINER_ID).is_some() {
        return Ok(());
    }
    let root = make(document, "div", Some(UI_CONTAINER_ID), None)?;

    let info = make(document, "div", Some(INFO_BOX_ID), None)?;
    append(&info, &make(document, "div", Some(CLOSE_BUTTON_ID), Some("×"))?)?;
    append(&info, &make(document, "h3", Some(INFO_NAME_ID), None)?)?;
    let img = make(document, "img", Some(INFO_IMAGE_ID), None)?;
    _ = img.set_attribute("alt", "Location Image");
    append(&info, &img)?;
    append(&info, &make(document, "h4", None, Some("Description"))?)?;
    append(&info, &make(document, "p", Some(INFO_DESC_EN_ID), None)?)?;
    append(&info, &make(document, "h4", None, Some("介绍"))?)?;
    append(&info, &make(document, "p", Some(INFO_DESC_ZH_ID), None)?)?;
    append(&root, &info)?;

    append(&root, &make(document, "div", Some(RESET_BUTTON_ID), Some("⟲"))?)?;
    if !config.title.is_empty() {
        append(&root, &make(document, "div", Some(TITLE_ID), Some(config.title.as_str()))?)?;
    }
    if let Some(attribution) = config.attribution() {
        append(&root, &make(document, "div", Some(DEVELOPER_ID), Some(attribution.as_str()))?)?;
    }

    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&root)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    hide(document);
    Ok(())
}

fn set_display(document: &web::Document, display: &str) {
    if let Some(el) = document
        .get_element_by_id(INFO_BOX_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.style().set_property("display", display);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    set_display(document, "none");
}

/// Fill the panel from `spot` and show it. Missing fields render blank.
pub fn show_spot(document: &web::Document, spot: &Spot) {
    let set_text = |id: &str, text: &str| {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    };
    set_text(INFO_NAME_ID, &spot.name);
    set_text(INFO_DESC_EN_ID, &spot.desc_en);
    set_text(INFO_DESC_ZH_ID, &spot.desc_zh);
    if let Some(img) = document.get_element_by_id(INFO_IMAGE_ID) {
        _ = img.set_attribute("src", &spot.image_url);
    }
    set_display(document, "block");
}
