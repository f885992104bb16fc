//! Game entities and session state
//!
//! Everything the resolver and the input mapper mutate lives here, owned by
//! a single [`GameState`] that is passed down explicitly. Nothing is shared
//! outside the session.

use std::fmt;

use glam::Vec2;

use crate::consts::*;

/// Which side of the playfield a paddle defends, and therefore which
/// collision-resolution rule applies to it.
///
/// `Top` and `Bottom` are reserved: the resolver treats them as explicit
/// no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Top,
    Bottom,
}

/// A player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner, pixels
    pub pos: Vec2,
    /// Fixed extent, derived from the window dimensions at construction
    pub size: Vec2,
    /// Vertical velocity in pixels per tick, one of {-1, 0, 1}
    pub speed: i32,
    pub orientation: Orientation,
    /// Identifying label
    pub name: String,
}

impl Paddle {
    /// Create a paddle anchored at `pos`. Width and height are fixed
    /// fractions of the window bounds and never change afterwards.
    pub fn new(
        pos: Vec2,
        name: impl Into<String>,
        orientation: Orientation,
        bounds: Vec2,
    ) -> Self {
        Self {
            pos,
            size: Vec2::new(
                bounds.x * PADDLE_WIDTH_FRAC,
                bounds.y * PADDLE_HEIGHT_FRAC,
            ),
            speed: 0,
            orientation,
            name: name.into(),
        }
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    /// Inclusive rectangle-bounds test against a point.
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.x <= point.x
            && point.x <= self.pos.x + self.size.x
            && self.pos.y <= point.y
            && point.y <= self.pos.y + self.size.y
    }
}

/// The ball. Exactly one per session.
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center position, pixels
    pub pos: Vec2,
    pub radius: f32,
    /// Current velocity, pixels per tick
    pub vel: Vec2,
    /// Velocity assigned at the last scoring reset. Negated on every reset,
    /// so the serve direction alternates regardless of which side scored.
    pub serve: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        let serve = Vec2::splat(INITIAL_SPEED);
        Self {
            pos,
            radius: BALL_RADIUS,
            vel: serve,
            serve,
        }
    }
}

/// Startup precondition failures, the only error class in the game: the
/// frame loop refuses to start without two paddles and a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupError {
    /// Fewer than two paddles registered
    NotEnoughPlayers(usize),
    /// No ball set
    MissingBall,
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::NotEnoughPlayers(count) => {
                write!(f, "only {count} players connected, needs at least 2")
            }
            StartupError::MissingBall => write!(f, "there is no ball"),
        }
    }
}

impl std::error::Error for StartupError {}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield bounds (the window size as the simulation sees it)
    pub bounds: Vec2,
    /// Registered paddles, in registration order
    pub players: Vec<Paddle>,
    pub ball: Option<Ball>,
    /// Cleared by the quit keys or a window close request
    pub should_run: bool,
}

impl GameState {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            bounds,
            players: Vec::new(),
            ball: None,
            should_run: true,
        }
    }

    pub fn add_player(&mut self, paddle: Paddle) {
        self.players.push(paddle);
    }

    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = Some(ball);
    }

    /// Gate for entering the frame loop. A failure here is fatal: it is
    /// reported once and the loop never starts.
    pub fn ensure_ready(&self) -> Result<(), StartupError> {
        if self.players.len() < 2 {
            return Err(StartupError::NotEnoughPlayers(self.players.len()));
        }
        if self.ball.is_none() {
            return Err(StartupError::MissingBall);
        }
        Ok(())
    }
}
