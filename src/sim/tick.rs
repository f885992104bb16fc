//! Per-tick state advancement
//!
//! One call to [`tick`] advances the session by exactly one frame, in a
//! fixed order: playfield bounds, paddle checks, ball integration, paddle
//! motion. Collisions are resolved before integration, so a just-resolved
//! bounce still takes one step in its new direction within the same tick.

use super::collision::{resolve_bounds, resolve_paddle};
use super::state::GameState;

/// Advance the session by one tick. Total: never fails, no matter how far
/// out of range any position has drifted.
pub fn tick(state: &mut GameState) {
    let Some(ball) = state.ball.as_mut() else {
        return;
    };

    resolve_bounds(ball, state.bounds);

    // Every paddle is checked every tick, even right after a wall bounce or
    // a goal reset.
    for paddle in &state.players {
        resolve_paddle(ball, paddle);
    }

    ball.pos += ball.vel;

    // Unbounded: paddles may run off-screen.
    for paddle in &mut state.players {
        paddle.pos.y += paddle.speed as f32;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::consts::INITIAL_SPEED;
    use crate::sim::state::{Ball, GameState, Orientation, Paddle};

    const BOUNDS: Vec2 = Vec2::new(1000.0, 600.0);

    fn session_with_ball(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new(BOUNDS);
        let mut ball = Ball::new(pos);
        ball.vel = vel;
        state.set_ball(ball);
        state
    }

    #[test]
    fn test_tick_integrates_after_wall_bounce() {
        // The bounce flips the velocity, then the same tick takes one step
        // in the new direction.
        let mut state = session_with_ball(Vec2::new(500.0, 10.0), Vec2::new(1.0, -2.0));

        tick(&mut state);

        let ball = state.ball.as_ref().unwrap();
        assert_eq!(ball.pos, Vec2::new(501.0, 12.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_tick_goal_then_one_step() {
        let mut state = session_with_ball(Vec2::new(995.0, 300.0), Vec2::new(2.0, 1.0));

        tick(&mut state);

        let ball = state.ball.as_ref().unwrap();
        assert_eq!(
            ball.pos,
            Vec2::new(485.0 - INITIAL_SPEED, 285.0 - INITIAL_SPEED)
        );
        assert_eq!(ball.vel, Vec2::splat(-INITIAL_SPEED));
    }

    #[test]
    fn test_tick_paddle_bounce_then_one_step() {
        let mut state = session_with_ball(Vec2::new(105.0, 260.0), Vec2::new(-2.0, 0.5));
        state.add_player(Paddle::new(
            Vec2::new(100.0, 250.0),
            "left",
            Orientation::Left,
            BOUNDS,
        ));

        tick(&mut state);

        let ball = state.ball.as_ref().unwrap();
        // Snapped to paddle.x + width = 110, then one step at the flipped
        // velocity.
        assert_eq!(ball.pos.x, 112.0);
        assert_eq!(ball.vel.x, 2.0);
    }

    #[test]
    fn test_tick_moves_paddles_by_speed() {
        let mut state = session_with_ball(Vec2::new(500.0, 300.0), Vec2::ZERO);
        state.add_player(Paddle::new(
            Vec2::new(100.0, 240.0),
            "left",
            Orientation::Left,
            BOUNDS,
        ));
        state.add_player(Paddle::new(
            Vec2::new(900.0, 240.0),
            "right",
            Orientation::Right,
            BOUNDS,
        ));
        state.players[0].set_speed(-1);
        state.players[1].set_speed(1);

        tick(&mut state);

        assert_eq!(state.players[0].pos.y, 239.0);
        assert_eq!(state.players[1].pos.y, 241.0);
    }

    #[test]
    fn test_paddles_may_leave_the_playfield() {
        let mut state = session_with_ball(Vec2::new(500.0, 300.0), Vec2::ZERO);
        state.add_player(Paddle::new(
            Vec2::new(100.0, 0.0),
            "left",
            Orientation::Left,
            BOUNDS,
        ));
        state.players[0].set_speed(-1);

        for _ in 0..10 {
            tick(&mut state);
        }

        // No clamping: the paddle keeps going past the top edge.
        assert_eq!(state.players[0].pos.y, -10.0);
    }

    #[test]
    fn test_tick_without_ball_is_total() {
        let mut state = GameState::new(BOUNDS);
        state.add_player(Paddle::new(
            Vec2::new(100.0, 240.0),
            "left",
            Orientation::Left,
            BOUNDS,
        ));
        state.players[0].set_speed(1);

        tick(&mut state);

        assert_eq!(state.players[0].pos.y, 240.0);
    }

    proptest! {
        #[test]
        fn wall_band_always_flips_y(
            y in prop_oneof![0.0f32..=15.0, 585.0f32..=600.0],
            x in 16.0f32..984.0,
            vy in -5.0f32..5.0,
        ) {
            let mut state = session_with_ball(Vec2::new(x, y), Vec2::new(1.0, vy));
            tick(&mut state);
            let ball = state.ball.as_ref().unwrap();
            prop_assert_eq!(ball.vel.y, -vy);
        }

        #[test]
        fn goal_band_resets_to_center(
            x in prop_oneof![0.0f32..=15.0, 985.0f32..=1000.0],
            y in 16.0f32..585.0,
        ) {
            let mut state = session_with_ball(Vec2::new(x, y), Vec2::new(2.0, 1.0));
            tick(&mut state);
            let ball = state.ball.as_ref().unwrap();
            prop_assert_eq!(ball.vel, Vec2::splat(-INITIAL_SPEED));
            prop_assert_eq!(
                ball.pos,
                Vec2::new(485.0 - INITIAL_SPEED, 285.0 - INITIAL_SPEED)
            );
        }
    }
}
