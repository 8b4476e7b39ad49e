pub mod carousel;
pub mod clock;
pub mod viewport;

pub use carousel::*;
pub use clock::ShaderClock;
pub use viewport::{backing_size, BackingSize};

// Shaders bundled as string constants
pub static QUAD_VERT: &str = include_str!("../../shaders/quad.vert");
pub static HEART_FRAG: &str = include_str!("../../shaders/heart.frag");
