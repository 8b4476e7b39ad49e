use crate::carousel::Carousel;
use crate::core::CarouselEvent;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Drag anywhere on the page rotates the carousel.
pub fn wire_pointer_handlers(carousel: &Rc<Carousel>) {
    let Some(document) = crate::dom::window_document() else {
        return;
    };
    wire_pointerdown(&document, carousel.clone());
    wire_pointermove(&document, carousel.clone());
    wire_pointerup(&document, carousel.clone());
}

fn wire_pointerdown(document: &web::Document, carousel: Rc<Carousel>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        carousel.dispatch(CarouselEvent::PointerDown {
            pos: client_pos(&ev),
        });
        // no text selection or native image drag
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(document: &web::Document, carousel: Rc<Carousel>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        carousel.dispatch(CarouselEvent::PointerMove {
            pos: client_pos(&ev),
        });
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(document: &web::Document, carousel: Rc<Carousel>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        carousel.dispatch(CarouselEvent::PointerUp);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
