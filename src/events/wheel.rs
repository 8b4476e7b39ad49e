use crate::carousel::Carousel;
use crate::core::CarouselEvent;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel changes the carousel radius. The listener is passive.
pub fn wire_wheel_zoom(carousel: &Rc<Carousel>) {
    let Some(window) = web::window() else {
        return;
    };
    let carousel = carousel.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // legacy DOMMouseScroll-style events only carry `detail`
        let delta_y = if ev.delta_y() != 0.0 {
            ev.delta_y()
        } else {
            ev.detail() as f64
        };
        carousel.dispatch(CarouselEvent::Wheel { delta_y });
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("wheel listener error: {:?}", e);
    }
    closure.forget();
}
