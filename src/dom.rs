use crate::core::{ControlRect, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a required element by id and cast it to `HtmlElement`.
pub fn html_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(element: &web::HtmlElement, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>
    );
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

#[inline]
pub fn bounding_rect(element: &web::Element) -> ControlRect {
    let rect = element.get_bounding_client_rect();
    ControlRect::from_ltwh(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Layout size in CSS pixels, `None` when not laid out.
#[inline]
pub fn offset_size(element: &web::HtmlElement) -> Option<Vec2> {
    let (w, h) = (element.offset_width(), element.offset_height());
    (w > 0 && h > 0).then(|| Vec2::new(w as f32, h as f32))
}

#[inline]
pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("style {}={} failed: {:?}", property, value, e);
    }
}

#[inline]
pub fn set_class(element: &web::Element, class: &str, on: bool) {
    _ = element.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_hidden(element: &web::Element, hidden: bool) {
    set_class(element, crate::constants::HIDDEN_CLASS, hidden);
}
