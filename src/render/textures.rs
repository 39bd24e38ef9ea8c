use crate::constants::{
    EARTH_BUMP_URL, EARTH_CLOUDS_URL, EARTH_DAY_URL, EARTH_SPECULAR_URL, FALLBACK_BUMP_RGBA,
    FALLBACK_CLOUDS_RGBA, FALLBACK_SPECULAR_RGBA, FALLBACK_SURFACE_RGBA,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Image-backed textures of the globe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    Surface,
    Specular,
    Clouds,
    Bump,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 4] = [
        TextureSlot::Surface,
        TextureSlot::Specular,
        TextureSlot::Clouds,
        TextureSlot::Bump,
    ];

    pub fn url(self) -> &'static str {
        match self {
            TextureSlot::Surface => EARTH_DAY_URL,
            TextureSlot::Specular => EARTH_SPECULAR_URL,
            TextureSlot::Clouds => EARTH_CLOUDS_URL,
            TextureSlot::Bump => EARTH_BUMP_URL,
        }
    }

    pub fn format(self) -> wgpu::TextureFormat {
        match self {
            // water mask and height map are data, not colour
            TextureSlot::Specular | TextureSlot::Bump => wgpu::TextureFormat::Rgba8Unorm,
            _ => wgpu::TextureFormat::Rgba8UnormSrgb,
        }
    }

    fn fallback_texel(self) -> [u8; 4] {
        match self {
            TextureSlot::Surface => FALLBACK_SURFACE_RGBA,
            TextureSlot::Specular => FALLBACK_SPECULAR_RGBA,
            TextureSlot::Clouds => FALLBACK_CLOUDS_RGBA,
            TextureSlot::Bump => FALLBACK_BUMP_RGBA,
        }
    }
}

/// Decoded images waiting for the next frame to upload them.
pub type PendingImages = Rc<RefCell<Vec<(TextureSlot, web::ImageBitmap)>>>;

/// 1x1 texture used until (or instead of) the real image.
pub fn create_fallback(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    slot: TextureSlot,
) -> (wgpu::Texture, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width: 1,
        height: 1,
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("fallback_tex"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: slot.format(),
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &slot.fallback_texel(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4),
            rows_per_image: Some(1),
        },
        size,
    );
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

/// Copy a decoded image into a new texture sized to it.
pub fn upload_bitmap(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    slot: TextureSlot,
    bitmap: web::ImageBitmap,
) -> (wgpu::Texture, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width: bitmap.width().max(1),
        height: bitmap.height().max(1),
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("image_tex"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: slot.format(),
        // external image copies require RENDER_ATTACHMENT on the destination
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::ImageBitmap(bitmap),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        size,
    );
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

async fn decode_image(url: &str) -> anyhow::Result<web::ImageBitmap> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
    let promise = window
        .create_image_bitmap_with_html_image_element(&img)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("createImageBitmap {}: {:?}", url, e))?;
    bitmap
        .dyn_into::<web::ImageBitmap>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Start loading every globe texture. Failures are logged and leave the
/// fallback texture in place.
pub fn spawn_loads(pending: PendingImages) {
    for slot in TextureSlot::ALL {
        let pending = pending.clone();
        spawn_local(async move {
            match decode_image(slot.url()).await {
                Ok(bitmap) => pending.borrow_mut().push((slot, bitmap)),
                Err(e) => log::warn!("[texture] {:?} unavailable: {:?}", slot, e),
            }
        });
    }
}
