#![cfg(target_arch = "wasm32")]
use crate::carousel::Carousel;
use crate::config::Settings;
use crate::core::TransitionDelay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod carousel;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

pub const CANVAS_ID: &str = "canvas";

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    frame_ctx: &Rc<RefCell<frame::FrameContext>>,
) {
    let canvas_resize = canvas.clone();
    let ctx = frame_ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(size) = dom::sync_canvas_to_window(&canvas_resize) {
            ctx.borrow().renderer.resize(size);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn start_heart_shader(document: &web::Document) {
    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::warn!("#{} element not found, skipping WebGL part", CANVAS_ID);
        return;
    };
    dom::sync_canvas_to_window(&canvas);

    let renderer = match render::HeartRenderer::new(&canvas) {
        Ok(r) => r,
        Err(e) => {
            log::error!("[render] {}", e);
            return;
        }
    };
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(renderer)));
    wire_canvas_resize(&canvas, &frame_ctx);
    frame::start_loop(frame_ctx);
}

fn schedule_intro(carousel: &Rc<Carousel>) {
    let carousel = carousel.clone();
    spawn_local(async move {
        dom::sleep_ms(constants::INTRO_DELAY_MS).await;
        carousel.place_panels(TransitionDelay::Staggered);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-carousel starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let settings = Settings::default();

    let Some(carousel) = Carousel::mount(&document, &settings) else {
        return Ok(());
    };
    schedule_intro(&carousel);

    if let Err(e) = audio::attach_background_music(&document, &settings) {
        log::warn!("[audio] {:?}", e);
    }

    events::wire_input_handlers(&carousel);
    carousel.place_panels(TransitionDelay::Fixed(0.0));

    start_heart_shader(&document);
    Ok(())
}
