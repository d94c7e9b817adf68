//! Declarative configuration for the fading label and the demo host.
//!
//! The widget section mirrors the attributes a layout would carry (`texts`,
//! `timeout`, `shuffle`). The demo reads everything from `fading_text.toml`
//! and lets a few environment variables override it.

use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{FadingTextError, Result};

/// Construction-time attributes of a fading label
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FadingTextConfig {
    /// Texts to cycle through, in display order
    pub texts: Vec<String>,
    /// Hold time between text changes in milliseconds, before the transition floor is added
    pub timeout: i64,
    /// Shuffle the texts once at construction
    pub shuffle: bool,
    /// Minimum transition time added to every configured timeout
    pub transition_floor_ms: u64,
}

/// Demo window settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub font_size: i32,
    /// Duration of each fade animation in seconds
    pub fade_duration: f32,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub widget: FadingTextConfig,
}

impl Default for FadingTextConfig {
    fn default() -> Self {
        Self {
            texts: Vec::new(),
            timeout: DEFAULT_TIMEOUT_MS,
            shuffle: false,
            transition_floor_ms: TRANSITION_FLOOR_MS,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
            title: "Fading Text".to_string(),
            font_size: FONT_SIZE,
            fade_duration: FADE_DURATION,
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FadingTextError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load `fading_text.toml` from the current directory, or defaults if it is missing or broken
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(FadingTextError::Io { .. }) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    /// Environment variables take precedence over file values
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("FADING_TEXT_TIMEOUT") {
            match val.parse::<i64>() {
                Ok(timeout) => self.widget.timeout = timeout,
                Err(_) => log::warn!("FADING_TEXT_TIMEOUT is not an integer: {:?}", val),
            }
        }
        if let Some(val) = lookup("FADING_TEXT_SHUFFLE") {
            self.widget.shuffle = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }
}
