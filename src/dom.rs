use crate::core::{backing_size, BackingSize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Set one inline style property; failures are logged, never fatal.
#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {}={} failed: {:?}", property, value, e);
    }
}

#[inline]
pub fn set_px(el: &web::HtmlElement, property: &str, px: f32) {
    set_style(el, property, &format!("{}px", px));
}

/// Panels are the `img` descendants followed by the `video` descendants.
pub fn collect_panels(container: &web::HtmlElement) -> Vec<web::HtmlElement> {
    let mut panels = Vec::new();
    for tag in ["img", "video"] {
        let found = container.get_elements_by_tag_name(tag);
        for i in 0..found.length() {
            if let Some(el) = found.item(i) {
                if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                    panels.push(el);
                }
            }
        }
    }
    panels
}

/// Match the canvas to the window: CSS size in px, backing store scaled by
/// the device pixel ratio.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Option<BackingSize> {
    let w = web::window()?;
    let css_w = w.inner_width().ok()?.as_f64()?;
    let css_h = w.inner_height().ok()?.as_f64()?;
    let size = backing_size(css_w, css_h, w.device_pixel_ratio());
    canvas.set_width(size.width);
    canvas.set_height(size.height);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
    Some(size)
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = JsFuture::from(promise).await;
}
