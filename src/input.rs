use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    /// Normalized device coordinates; `None` while the pointer is off the canvas.
    pub ndc: Option<Vec2>,
}

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

/// Map a client-space position into NDC of `rect` (x right, y up).
#[inline]
pub fn client_to_ndc(client: Vec2, left: f32, top: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let x = (client.x - left) / width;
    let y = (client.y - top) / height;
    Some(Vec2::new(x * 2.0 - 1.0, -(y * 2.0 - 1.0)))
}

#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        pointer_client(ev),
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
