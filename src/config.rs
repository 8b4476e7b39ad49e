/// Page-level settings for the carousel and its background music.
///
/// Built once at startup and handed to constructors by reference; nothing
/// mutates it afterwards. Runtime state such as the zoomed radius lives in
/// the carousel state, seeded from `radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Cylinder radius in px
    pub radius: f32,
    pub auto_rotate: bool,
    /// Seconds per full revolution; the sign picks the direction
    pub rotate_speed: f32,
    pub panel_width: f32,
    pub panel_height: f32,
    /// `None` disables background music
    pub music_url: Option<String>,
    pub music_controls: bool,
}

pub const DEFAULT_MUSIC_URL: &str =
    "https://api.soundcloud.com/tracks/143041228/stream?client_id=587aa2d384f7333a886010d5f52f302a";

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius: 240.0,
            auto_rotate: true,
            rotate_speed: -60.0,
            panel_width: 120.0,
            panel_height: 170.0,
            music_url: Some(DEFAULT_MUSIC_URL.to_string()),
            music_controls: true,
        }
    }
}

impl Settings {
    /// Side length of the square ground element, in px.
    pub fn ground_size(&self, factor: f32) -> f32 {
        self.radius * factor
    }

    /// CSS `animation` value for the spin container, or `None` when auto
    /// rotation is off.
    pub fn spin_animation(&self) -> Option<String> {
        if !self.auto_rotate {
            return None;
        }
        let name = if self.rotate_speed > 0.0 {
            "spin"
        } else {
            "spinRevert"
        };
        Some(format!(
            "{} {}s infinite linear",
            name,
            self.rotate_speed.abs()
        ))
    }
}
