//! Duo Pong - a two-player keyboard Pong game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, input mapping)
//! - `renderer`: wgpu rendering pipeline
//! - `platform`: Native window creation
//! - `config`: Runtime configuration

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::Config;

/// Game configuration constants
pub mod consts {
    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: f32 = 1000.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Paddle extents as fractions of the window dimensions
    pub const PADDLE_WIDTH_FRAC: f32 = 0.01;
    pub const PADDLE_HEIGHT_FRAC: f32 = 0.1;

    /// Horizontal paddle anchors as fractions of the window width
    pub const LEFT_PADDLE_X_FRAC: f32 = 0.1;
    pub const RIGHT_PADDLE_X_FRAC: f32 = 0.9;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Serve speed per axis, pixels per tick
    pub const INITIAL_SPEED: f32 = 0.1;
}
