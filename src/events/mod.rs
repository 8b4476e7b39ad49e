pub mod pointer;
pub mod wheel;

pub use pointer::wire_pointer_handlers;
pub use wheel::wire_wheel_zoom;

use crate::carousel::Carousel;
use std::rc::Rc;

pub fn wire_input_handlers(carousel: &Rc<Carousel>) {
    wire_pointer_handlers(carousel);
    wire_wheel_zoom(carousel);
}
