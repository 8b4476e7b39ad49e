use crate::core::ShaderClock;
use crate::render::HeartRenderer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Anything driven once per display refresh.
pub trait FrameTick {
    fn frame(&mut self);
}

pub struct FrameContext {
    pub renderer: HeartRenderer,
    pub clock: ShaderClock,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(renderer: HeartRenderer) -> Self {
        Self {
            renderer,
            clock: ShaderClock::default(),
            last_instant: Instant::now(),
        }
    }
}

impl FrameTick for FrameContext {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let t = self.clock.advance(dt.as_secs_f32());
        self.renderer.draw(t);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}

/// Run `frame_ctx` on every animation frame for the life of the page.
pub fn start_loop<T: FrameTick + 'static>(frame_ctx: Rc<RefCell<T>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
