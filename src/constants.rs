pub const RENDER_WIDTH: i32 = 1280;           // Width of the demo window
pub const RENDER_HEIGHT: i32 = 720;           // Height of the demo window
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const FONT_SIZE: i32 = 48;                // Label font size (pixels)

pub const DEFAULT_TIMEOUT_MS: i64 = 14_500;   // Configured hold time between text changes
pub const TRANSITION_FLOOR_MS: u64 = 500;     // Long animation time added to configured timeouts
pub const FADE_DURATION: f32 = 0.5;           // Duration of the fade-in and fade-out animations (seconds)

pub const CONFIG_FILE: &str = "fading_text.toml";
