use crate::config::Settings;
use crate::constants::{GROUND_RADIUS_FACTOR, INERTIA_TICK_MS};
use crate::core::{
    layout, CarouselEvent, CarouselState, Effect, PanelPlacement, TransitionDelay,
};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const DRAG_CONTAINER_ID: &str = "drag-container";
pub const SPIN_CONTAINER_ID: &str = "spin-container";
pub const GROUND_ID: &str = "ground";

/// DOM side of the carousel. Owns the elements and the inertia timer and
/// applies the effects produced by [`CarouselState`].
pub struct Carousel {
    drag: web::HtmlElement,
    spin: web::HtmlElement,
    panels: Vec<web::HtmlElement>,
    state: RefCell<CarouselState>,
    // Created once; the interval only ever holds a reference to it.
    inertia_tick: Closure<dyn FnMut()>,
    inertia_timer: Cell<Option<i32>>,
}

impl Carousel {
    /// Look up the carousel elements and prepare them. Returns `None` when
    /// the drag/spin pair is missing.
    pub fn mount(document: &web::Document, settings: &Settings) -> Option<Rc<Self>> {
        let (drag, spin) = match (
            dom::html_element_by_id(document, DRAG_CONTAINER_ID),
            dom::html_element_by_id(document, SPIN_CONTAINER_ID),
        ) {
            (Some(d), Some(s)) => (d, s),
            _ => {
                log::warn!(
                    "required elements #{} or #{} missing from DOM",
                    DRAG_CONTAINER_ID,
                    SPIN_CONTAINER_ID
                );
                return None;
            }
        };

        let panels = dom::collect_panels(&spin);
        log::info!("[carousel] {} panels", panels.len());

        dom::set_px(&spin, "width", settings.panel_width);
        dom::set_px(&spin, "height", settings.panel_height);
        if let Some(ground) = dom::html_element_by_id(document, GROUND_ID) {
            let side = settings.ground_size(GROUND_RADIUS_FACTOR);
            dom::set_px(&ground, "width", side);
            dom::set_px(&ground, "height", side);
        }
        if let Some(animation) = settings.spin_animation() {
            dom::set_style(&spin, "animation", &animation);
        }

        let state = CarouselState::new(settings, panels.len());
        dom::set_style(&drag, "transform", &state.orientation().css_transform());

        Some(Rc::new_cyclic(|weak: &Weak<Carousel>| {
            let weak = weak.clone();
            let inertia_tick = Closure::wrap(Box::new(move || {
                if let Some(c) = weak.upgrade() {
                    c.dispatch(CarouselEvent::InertiaTick);
                }
            }) as Box<dyn FnMut()>);
            Carousel {
                drag,
                spin,
                panels,
                state: RefCell::new(state),
                inertia_tick,
                inertia_timer: Cell::new(None),
            }
        }))
    }

    /// Feed one event through the state machine and apply what it asks for.
    pub fn dispatch(&self, event: CarouselEvent) {
        let effects = self.state.borrow_mut().handle(event);
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Place panels at the current radius.
    pub fn place_panels(&self, delay: TransitionDelay) {
        let placements = self.state.borrow().layout(delay);
        self.apply_placements(&placements);
    }

    fn place_panels_at(&self, radius: f32, delay: TransitionDelay) {
        self.apply_placements(&layout(self.panels.len(), radius, delay));
    }

    fn apply_placements(&self, placements: &[PanelPlacement]) {
        for (el, p) in self.panels.iter().zip(placements) {
            dom::set_style(el, "transform", &p.transform);
            dom::set_style(el, "transition", &p.transition);
            dom::set_style(el, "transition-delay", &p.transition_delay);
        }
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::Orient(o) => dom::set_style(&self.drag, "transform", &o.css_transform()),
            Effect::Layout { radius, delay } => {
                log::debug!("[carousel] relayout at radius {}", radius);
                self.place_panels_at(radius, delay);
            }
            Effect::Spin(running) => dom::set_style(
                &self.spin,
                "animation-play-state",
                if running { "running" } else { "paused" },
            ),
            Effect::StartInertia => self.start_inertia(),
            Effect::StopInertia => self.stop_inertia(),
        }
    }

    fn start_inertia(&self) {
        self.stop_inertia();
        let Some(w) = web::window() else {
            return;
        };
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            self.inertia_tick.as_ref().unchecked_ref(),
            INERTIA_TICK_MS,
        ) {
            Ok(id) => self.inertia_timer.set(Some(id)),
            Err(e) => log::error!("[carousel] inertia timer error: {:?}", e),
        }
    }

    fn stop_inertia(&self) {
        if let Some(id) = self.inertia_timer.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}
