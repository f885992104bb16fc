//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module stays platform-free:
//! - One tick per rendered frame, no wall-clock time
//! - Stable entity order (registration order)
//! - No rendering or windowing dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{resolve_bounds, resolve_paddle, BoundsEvent};
pub use input::{key_down, key_up, Key};
pub use state::{Ball, GameState, Orientation, Paddle, StartupError};
pub use tick::tick;
