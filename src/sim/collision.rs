//! Collision and reset primitives for the per-tick resolver
//!
//! All functions here are total: out-of-range positions are tolerated and
//! nothing clamps or fails. They mutate the ball in place and leave
//! integration to the tick.

use glam::Vec2;

use super::state::{Ball, Orientation, Paddle};

/// What the playfield-bounds check decided this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsEvent {
    None,
    WallBounce,
    Goal,
}

/// Vertical wall bounce, else horizontal goal.
///
/// The two checks are mutually exclusive on purpose: a ball in a corner
/// bounces off the wall and never scores that tick. A wall bounce only
/// flips the vertical velocity; the position is left untouched, so the ball
/// may visually overlap the wall near grazing angles.
pub fn resolve_bounds(ball: &mut Ball, bounds: Vec2) -> BoundsEvent {
    if ball.pos.y <= ball.radius || ball.pos.y >= bounds.y - ball.radius {
        ball.vel.y = -ball.vel.y;
        BoundsEvent::WallBounce
    } else if ball.pos.x >= bounds.x - ball.radius || ball.pos.x <= ball.radius {
        // A side was crossed: reset to center and flip the serve.
        ball.pos = bounds / 2.0 - Vec2::splat(ball.radius);
        ball.serve = -ball.serve;
        ball.vel = ball.serve;
        BoundsEvent::Goal
    } else {
        BoundsEvent::None
    }
}

/// Paddle collision for a single paddle: inclusive rectangle-bounds test on
/// the ball center, then an orientation-specific snap out of the paddle and
/// a horizontal velocity flip.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) {
    if !paddle.contains(ball.pos) {
        return;
    }
    match paddle.orientation {
        Orientation::Left => {
            ball.pos.x = paddle.pos.x + paddle.size.x;
            ball.vel.x = -ball.vel.x;
        }
        Orientation::Right => {
            ball.pos.x = paddle.pos.x;
            ball.vel.x = -ball.vel.x;
        }
        // Reserved orientations: nothing bounces off these.
        Orientation::Top | Orientation::Bottom => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::INITIAL_SPEED;
    use crate::sim::state::{Ball, Orientation, Paddle};

    const BOUNDS: Vec2 = Vec2::new(1000.0, 600.0);

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y))
    }

    #[test]
    fn test_wall_bounce_flips_y_only() {
        let mut ball = ball_at(500.0, 10.0);
        ball.vel = Vec2::new(1.5, -2.0);

        let event = resolve_bounds(&mut ball, BOUNDS);

        assert_eq!(event, BoundsEvent::WallBounce);
        assert_eq!(ball.vel, Vec2::new(1.5, 2.0));
        // The bounce never repositions the ball.
        assert_eq!(ball.pos, Vec2::new(500.0, 10.0));
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut ball = ball_at(500.0, 590.0);
        ball.vel = Vec2::new(0.5, 3.0);

        assert_eq!(resolve_bounds(&mut ball, BOUNDS), BoundsEvent::WallBounce);
        assert_eq!(ball.vel.y, -3.0);
    }

    #[test]
    fn test_mid_field_is_uneventful() {
        let mut ball = ball_at(500.0, 300.0);
        ball.vel = Vec2::new(2.0, 1.0);

        assert_eq!(resolve_bounds(&mut ball, BOUNDS), BoundsEvent::None);
        assert_eq!(ball.pos, Vec2::new(500.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_goal_resets_to_center() {
        let mut ball = ball_at(995.0, 300.0);
        ball.vel = Vec2::new(2.0, 1.0);

        let event = resolve_bounds(&mut ball, BOUNDS);

        assert_eq!(event, BoundsEvent::Goal);
        assert_eq!(ball.pos, Vec2::new(485.0, 285.0));
        assert_eq!(ball.vel, Vec2::splat(-INITIAL_SPEED));
    }

    #[test]
    fn test_serve_alternates_between_goals() {
        let mut ball = ball_at(995.0, 300.0);
        resolve_bounds(&mut ball, BOUNDS);
        assert_eq!(ball.vel, Vec2::splat(-INITIAL_SPEED));

        // Score on the other side; the serve flips back.
        ball.pos = Vec2::new(5.0, 300.0);
        resolve_bounds(&mut ball, BOUNDS);
        assert_eq!(ball.vel, Vec2::splat(INITIAL_SPEED));
    }

    #[test]
    fn test_corner_bounces_instead_of_scoring() {
        // Both conditions hold in a corner; the wall bounce wins and no
        // reset happens that tick.
        let mut ball = ball_at(995.0, 10.0);
        ball.vel = Vec2::new(2.0, -2.0);

        let event = resolve_bounds(&mut ball, BOUNDS);

        assert_eq!(event, BoundsEvent::WallBounce);
        assert_eq!(ball.pos, Vec2::new(995.0, 10.0));
        assert_eq!(ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_left_paddle_snaps_and_flips() {
        let paddle = Paddle::new(Vec2::new(100.0, 250.0), "left", Orientation::Left, BOUNDS);
        assert_eq!(paddle.size, Vec2::new(10.0, 60.0));

        let mut ball = ball_at(105.0, 260.0);
        ball.vel = Vec2::new(-2.0, 0.1);

        resolve_paddle(&mut ball, &paddle);

        assert_eq!(ball.pos.x, 110.0);
        assert_eq!(ball.vel.x, 2.0);
    }

    #[test]
    fn test_right_paddle_snaps_and_flips() {
        let paddle = Paddle::new(Vec2::new(900.0, 250.0), "right", Orientation::Right, BOUNDS);

        let mut ball = ball_at(905.0, 260.0);
        ball.vel = Vec2::new(2.0, 0.1);

        resolve_paddle(&mut ball, &paddle);

        assert_eq!(ball.pos.x, 900.0);
        assert_eq!(ball.vel.x, -2.0);
    }

    #[test]
    fn test_paddle_miss_leaves_ball_alone() {
        let paddle = Paddle::new(Vec2::new(100.0, 250.0), "left", Orientation::Left, BOUNDS);
        let mut ball = ball_at(500.0, 300.0);
        ball.vel = Vec2::new(-2.0, 0.1);

        resolve_paddle(&mut ball, &paddle);

        assert_eq!(ball.pos, Vec2::new(500.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(-2.0, 0.1));
    }

    #[test]
    fn test_reserved_orientations_are_no_ops() {
        for orientation in [Orientation::Top, Orientation::Bottom] {
            let paddle = Paddle::new(Vec2::new(100.0, 250.0), "spare", orientation, BOUNDS);
            let mut ball = ball_at(105.0, 260.0);
            ball.vel = Vec2::new(-2.0, 0.1);

            resolve_paddle(&mut ball, &paddle);

            assert_eq!(ball.pos, Vec2::new(105.0, 260.0));
            assert_eq!(ball.vel.x, -2.0);
        }
    }
}
