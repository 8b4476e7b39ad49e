use crate::config::Settings;
use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Camera orientation around the carousel, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub yaw: f32,
    pub tilt: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            yaw: INITIAL_YAW,
            tilt: INITIAL_TILT,
        }
    }
}

impl Orientation {
    /// Rotate by a pointer delta (px). Yaw wraps into `[0, 360)`; tilt is
    /// clamped after every update.
    #[inline]
    pub fn rotate_by(&mut self, delta: Vec2) {
        let yaw = (self.yaw + delta.x * DRAG_SENSITIVITY).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        self.yaw = if yaw >= 360.0 { 0.0 } else { yaw };
        self.tilt = (self.tilt + delta.y * DRAG_SENSITIVITY).clamp(TILT_MIN, TILT_MAX);
    }

    pub fn css_transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", -self.tilt, self.yaw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionDelay {
    /// Later panels start first: `(count - index) / STAGGER_DIVISOR` seconds.
    Staggered,
    Fixed(f32),
}

impl TransitionDelay {
    fn seconds(self, index: usize, count: usize) -> f32 {
        match self {
            TransitionDelay::Staggered => (count - index) as f32 / STAGGER_DIVISOR,
            TransitionDelay::Fixed(s) => s,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelPlacement {
    pub angle: f32,
    pub transform: String,
    pub transition: String,
    pub transition_delay: String,
}

#[inline]
pub fn panel_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 * (360.0 / count as f32)
}

/// Place `count` panels evenly around a cylinder of `radius` px.
pub fn layout(count: usize, radius: f32, delay: TransitionDelay) -> Vec<PanelPlacement> {
    let transition = format!("transform {}s", PANEL_TRANSITION_SEC);
    (0..count)
        .map(|i| {
            let angle = panel_angle(i, count);
            PanelPlacement {
                angle,
                transform: format!("rotateY({}deg) translateZ({}px)", angle, radius),
                transition: transition.clone(),
                transition_delay: format!("{}s", delay.seconds(i, count)),
            }
        })
        .collect()
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
    /// Last per-move delta; seeds the inertia after release.
    pub velocity: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    PointerDown { pos: Vec2 },
    PointerMove { pos: Vec2 },
    PointerUp,
    Wheel { delta_y: f64 },
    InertiaTick,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Apply this orientation to the drag container.
    Orient(Orientation),
    /// Re-place every panel at `radius`.
    Layout {
        radius: f32,
        delay: TransitionDelay,
    },
    /// Run (`true`) or pause the CSS auto-spin.
    Spin(bool),
    StartInertia,
    StopInertia,
}

pub type Effects = SmallVec<[Effect; 4]>;

/// Interaction state of the carousel. Pure: DOM events come in as
/// [`CarouselEvent`]s and the caller applies the returned [`Effect`]s.
#[derive(Clone, Debug)]
pub struct CarouselState {
    orientation: Orientation,
    drag: DragState,
    radius: f32,
    panel_count: usize,
    inertia_running: bool,
}

impl CarouselState {
    pub fn new(settings: &Settings, panel_count: usize) -> Self {
        Self {
            orientation: Orientation::default(),
            drag: DragState::default(),
            radius: settings.radius.clamp(RADIUS_MIN, RADIUS_MAX),
            panel_count,
            inertia_running: false,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[allow(dead_code)] // host tests
    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    #[allow(dead_code)] // host tests
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub fn inertia_running(&self) -> bool {
        self.inertia_running
    }

    #[allow(dead_code)] // host tests
    pub fn velocity(&self) -> Vec2 {
        self.drag.velocity
    }

    pub fn layout(&self, delay: TransitionDelay) -> Vec<PanelPlacement> {
        layout(self.panel_count, self.radius, delay)
    }

    pub fn handle(&mut self, event: CarouselEvent) -> Effects {
        let mut out = Effects::new();
        match event {
            CarouselEvent::PointerDown { pos } => {
                if self.inertia_running {
                    self.inertia_running = false;
                    out.push(Effect::StopInertia);
                }
                self.drag.active = true;
                self.drag.last = pos;
            }
            CarouselEvent::PointerMove { pos } => {
                if !self.drag.active {
                    return out;
                }
                let delta = pos - self.drag.last;
                self.drag.velocity = delta;
                self.drag.last = pos;
                self.orientation.rotate_by(delta);
                out.push(Effect::Orient(self.orientation));
            }
            CarouselEvent::PointerUp => {
                if !self.drag.active {
                    return out;
                }
                self.drag.active = false;
                self.inertia_running = true;
                out.push(Effect::StartInertia);
            }
            CarouselEvent::InertiaTick => {
                if !self.inertia_running {
                    return out;
                }
                self.drag.velocity *= INERTIA_DECAY;
                self.orientation.rotate_by(self.drag.velocity);
                out.push(Effect::Orient(self.orientation));
                out.push(Effect::Spin(false));
                let v = self.drag.velocity;
                if v.x.abs() < INERTIA_STOP_THRESHOLD && v.y.abs() < INERTIA_STOP_THRESHOLD {
                    self.inertia_running = false;
                    log::debug!("[carousel] inertia settled at {:?}", self.orientation);
                    out.push(Effect::StopInertia);
                    out.push(Effect::Spin(true));
                }
            }
            CarouselEvent::Wheel { delta_y } => {
                let step = if delta_y > 0.0 {
                    WHEEL_RADIUS_STEP
                } else {
                    -WHEEL_RADIUS_STEP
                };
                self.radius = (self.radius + step).clamp(RADIUS_MIN, RADIUS_MAX);
                log::debug!("[carousel] radius -> {}", self.radius);
                out.push(Effect::Layout {
                    radius: self.radius,
                    delay: TransitionDelay::Fixed(ZOOM_RELAYOUT_DELAY_SEC),
                });
            }
        }
        out
    }
}
