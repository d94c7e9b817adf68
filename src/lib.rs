//! A text label that cycles through a list of strings, cross-fading between
//! them on a fixed timer.
//!
//! [`FadingText`] is the framework-free state machine; [`FadingLabel`] plays
//! it back with raylib.

pub mod config;
pub mod constants;
pub mod error;
pub mod fade;
pub mod fading_text;
pub mod label;
pub mod state;
pub mod text_loader;
pub mod timer;

pub use config::{DemoConfig, FadingTextConfig, WindowConfig};
pub use error::{FadingTextError, Result};
pub use fade::OpacityFade;
pub use fading_text::{FadingText, TimeUnit};
pub use label::FadingLabel;
pub use state::{Command, CyclePhase, Fade};
pub use text_loader::load_text_lines;
