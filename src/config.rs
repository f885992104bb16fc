//! Runtime configuration
//!
//! Window geometry, caption and player labels. Defaults come from
//! [`crate::consts`]; a `duo-pong.json` file in the working directory
//! overrides them when present.

use serde::{Deserialize, Serialize};

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Path checked for configuration overrides
const CONFIG_PATH: &str = "duo-pong.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Window caption
    pub caption: String,
    /// Label for the left paddle
    pub left_name: String,
    /// Label for the right paddle
    pub right_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH as u32,
            height: WINDOW_HEIGHT as u32,
            caption: "Duo Pong".to_string(),
            left_name: "left".to_string(),
            right_name: "right".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from [`CONFIG_PATH`] if present, else defaults.
    pub fn load() -> Self {
        match std::fs::read_to_string(CONFIG_PATH) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {CONFIG_PATH}");
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {CONFIG_PATH}: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default configuration");
                Self::default()
            }
        }
    }
}
