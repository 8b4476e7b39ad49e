/// Canvas backing-store size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

/// Backing size for a canvas shown at `css_width` x `css_height` CSS px.
///
/// A missing or zero device pixel ratio counts as 1. Both sides are at
/// least one pixel so the shader never divides by zero.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> BackingSize {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (css_width.max(0.0) * dpr).floor() as u32;
    let h = (css_height.max(0.0) * dpr).floor() as u32;
    BackingSize {
        width: w.max(1),
        height: h.max(1),
    }
}
