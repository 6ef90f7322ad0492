//! Fixed timestep simulation tick
//!
//! Core game loop step: move the ball, let each paddle try to return it,
//! reflect off the top/bottom walls, then score and re-serve on a side exit.

use super::collision::{SideExit, side_exit, touches_wall};
use super::state::{GameEvent, GameField, Side};
use crate::consts::{LEFT_EXIT_SERVE, RIGHT_EXIT_SERVE};

/// Advance the field by one fixed tick
///
/// `dt` is accepted so drivers can pass their timestep through, but motion is
/// measured in ticks and does not scale with it.
pub fn tick(field: &mut GameField, _dt: f32) {
    field.events.clear();
    field.time_ticks += 1;

    field.ball.advance();

    if field.player1.bounce_ball(&mut field.ball) {
        field.player2.has_turn = true;
        field.events.push(GameEvent::PaddleHit {
            side: Side::Left,
            speed: field.ball.vel.length(),
        });
    }
    if field.player2.bounce_ball(&mut field.ball) {
        field.player1.has_turn = true;
        field.events.push(GameEvent::PaddleHit {
            side: Side::Right,
            speed: field.ball.vel.length(),
        });
    }

    // No position clamping: an overshoot is corrected by the reflected motion
    if touches_wall(&field.ball.bounds(), field.height) {
        field.ball.vel.y = -field.ball.vel.y;
        field.events.push(GameEvent::WallBounce);
    }

    if let Some(exit) = side_exit(&field.ball.bounds(), field.width) {
        score_point(field, exit);
    }
}

/// Award the point, re-arm the conceding paddle and re-serve from center
fn score_point(field: &mut GameField, exit: SideExit) {
    let (conceding, (start, end)) = match exit {
        SideExit::Left => (Side::Left, LEFT_EXIT_SERVE),
        SideExit::Right => (Side::Right, RIGHT_EXIT_SERVE),
    };
    let scorer = conceding.opponent();

    // Overwritten by the serve below
    field.ball.vel.x = -field.ball.vel.x;

    let paddle = field.paddle_mut(scorer);
    paddle.score += 1;
    let score = paddle.score;
    field.paddle_mut(conceding).has_turn = true;

    field.serve(start, end);
    field.events.push(GameEvent::PointScored { scorer, score });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use glam::Vec2;
    use proptest::prelude::*;

    fn field_400x300(seed: u64) -> GameField {
        let settings = Settings {
            field_width: 400.0,
            field_height: 300.0,
            ..Default::default()
        };
        GameField::new(&settings, seed).unwrap()
    }

    /// Park both paddles far above the field so nothing collides
    fn park_paddles(field: &mut GameField) {
        field.on_pointer_move(Vec2::new(0.0, 10_000.0));
        field.on_pointer_move(Vec2::new(field.width, 10_000.0));
    }

    #[test]
    fn test_tick_free_motion() {
        let mut field = field_400x300(1);
        field.ball.pos = Vec2::new(200.0, 150.0);
        field.ball.vel = Vec2::new(4.0, 0.0);

        tick(&mut field, SIM_DT);

        assert_eq!(field.ball.pos, Vec2::new(204.0, 150.0));
        assert_eq!(field.ball.vel, Vec2::new(4.0, 0.0));
        assert!(field.events.is_empty());
        assert_eq!(field.time_ticks, 1);
    }

    #[test]
    fn test_tick_left_exit_scores_for_player2() {
        let mut field = field_400x300(1);
        park_paddles(&mut field);
        field.player1.has_turn = false;
        field.ball.pos = Vec2::new(1.0, 100.0);
        field.ball.vel = Vec2::new(-4.0, 0.0);

        tick(&mut field, SIM_DT);

        assert_eq!(field.player2.score, 1);
        assert_eq!(field.player1.score, 0);
        assert!(field.player1.has_turn);
        assert_eq!(field.ball.center(), Vec2::new(200.0, 150.0));
        assert!((field.ball.vel.length() - BALL_SERVE_SPEED).abs() < 1e-4);
        // Served back toward the left
        assert!(field.ball.vel.x < 0.0);
        assert_eq!(
            field.events,
            vec![GameEvent::PointScored {
                scorer: Side::Right,
                score: 1
            }]
        );
    }

    #[test]
    fn test_tick_right_exit_scores_for_player1() {
        let mut field = field_400x300(2);
        park_paddles(&mut field);
        field.player2.has_turn = false;
        field.ball.pos = Vec2::new(348.0, 100.0);
        field.ball.vel = Vec2::new(4.0, 0.0);

        tick(&mut field, SIM_DT);

        assert_eq!(field.player1.score, 1);
        assert_eq!(field.player2.score, 0);
        assert!(field.player2.has_turn);
        assert_eq!(field.ball.center(), Vec2::new(200.0, 150.0));
        assert!(field.ball.vel.x > 0.0);
    }

    #[test]
    fn test_tick_paddle_hit_rearms_opponent() {
        let mut field = field_400x300(3);
        field.player2.has_turn = false;
        // Ball just right of player 1, level with its center
        field.ball.set_center(Vec2::new(52.0, 150.0));
        field.ball.vel = Vec2::new(-4.0, 0.0);

        tick(&mut field, SIM_DT);

        assert!(!field.player1.has_turn);
        assert!(field.player2.has_turn);
        assert!((field.ball.vel.x - 4.4).abs() < 1e-5);
        assert!(matches!(
            field.events.as_slice(),
            [GameEvent::PaddleHit { side: Side::Left, .. }]
        ));

        // Still overlapping on the next tick: no second bounce
        let vel = field.ball.vel;
        tick(&mut field, SIM_DT);
        assert_eq!(field.ball.vel, vel);
        assert!(field.events.is_empty());
    }

    #[test]
    fn test_tick_both_paddles_overlap() {
        // Field barely wider than the ball: it touches both paddles at once
        let settings = Settings {
            field_width: 60.0,
            field_height: 300.0,
            ..Default::default()
        };
        let mut field = GameField::new(&settings, 8).unwrap();
        field.ball.set_center(Vec2::new(30.0, 150.0));
        field.ball.vel = Vec2::new(-2.0, 0.0);

        tick(&mut field, SIM_DT);

        // Player 1 returns it, then player 2 returns it straight back
        assert!(matches!(
            field.events.as_slice(),
            [
                GameEvent::PaddleHit { side: Side::Left, .. },
                GameEvent::PaddleHit { side: Side::Right, .. },
            ]
        ));
        assert!((field.ball.vel.x - (-2.42)).abs() < 1e-5);
        assert!(field.ball.vel.y.abs() < 1e-5);
        assert!(field.player1.has_turn);
        assert!(!field.player2.has_turn);
        assert_eq!(field.scores(), (0, 0));
    }

    #[test]
    fn test_tick_wall_bounce() {
        let mut field = field_400x300(4);
        field.ball.pos = Vec2::new(200.0, 2.0);
        field.ball.vel = Vec2::new(1.0, -3.0);

        tick(&mut field, SIM_DT);

        assert_eq!(field.ball.pos, Vec2::new(201.0, -1.0));
        assert_eq!(field.ball.vel, Vec2::new(1.0, 3.0));
        assert_eq!(field.events, vec![GameEvent::WallBounce]);

        // Top wall
        field.ball.pos = Vec2::new(200.0, 249.0);
        field.ball.vel = Vec2::new(0.0, 2.0);
        tick(&mut field, SIM_DT);
        assert_eq!(field.ball.vel, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_update_matches_tick() {
        let mut a = field_400x300(5);
        let mut b = field_400x300(5);
        for _ in 0..10 {
            a.update(SIM_DT);
            tick(&mut b, SIM_DT);
        }
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.time_ticks, b.time_ticks);
    }

    #[test]
    fn test_determinism() {
        // Two fields with the same seed should produce identical results
        let mut field1 = field_400x300(99999);
        let mut field2 = field_400x300(99999);

        for i in 0..2000 {
            if i % 90 == 0 {
                let y = (i % 300) as f32;
                field1.on_pointer_move(Vec2::new(10.0, y));
                field2.on_pointer_move(Vec2::new(10.0, y));
            }
            tick(&mut field1, SIM_DT);
            tick(&mut field2, SIM_DT);
        }

        assert_eq!(field1.time_ticks, field2.time_ticks);
        assert_eq!(field1.scores(), field2.scores());
        assert_eq!(field1.ball.pos, field2.ball.pos);
        assert_eq!(field1.ball.vel, field2.ball.vel);
    }

    #[test]
    fn test_session_produces_points() {
        // With paddles parked, every right-side serve leaves the field again
        let mut field = field_400x300(11);
        park_paddles(&mut field);
        field.ball.vel = Vec2::new(3.0, 1.0);

        let mut points = 0;
        for _ in 0..5000 {
            tick(&mut field, SIM_DT);
            points += field
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::PointScored { .. }))
                .count();
        }

        let (p1, p2) = field.scores();
        assert!(points > 0);
        assert_eq!(points as u32, p1 + p2);
    }

    proptest! {
        #[test]
        fn prop_free_motion_is_exact(
            x in 60.0f32..280.0,
            y in 10.0f32..230.0,
            vx in -4.0f32..4.0,
            vy in -4.0f32..4.0,
        ) {
            let mut field = field_400x300(1);
            field.ball.pos = Vec2::new(x, y);
            field.ball.vel = Vec2::new(vx, vy);
            let expected = field.ball.pos + field.ball.vel;

            tick(&mut field, SIM_DT);

            prop_assert_eq!(field.ball.pos, expected);
            prop_assert_eq!(field.ball.vel, Vec2::new(vx, vy));
            prop_assert_eq!(field.scores(), (0, 0));
        }

        #[test]
        fn prop_bottom_wall_flips_vertical(
            x in 60.0f32..280.0,
            y in -30.0f32..-5.0,
            vx in -4.0f32..4.0,
            vy in -4.0f32..4.0,
        ) {
            let mut field = field_400x300(1);
            field.ball.pos = Vec2::new(x, y);
            field.ball.vel = Vec2::new(vx, vy);

            tick(&mut field, SIM_DT);

            prop_assert_eq!(field.ball.vel, Vec2::new(vx, -vy));
        }

        #[test]
        fn prop_each_exit_scores_exactly_one(seed in any::<u64>(), y in 0.0f32..250.0, left in any::<bool>()) {
            let mut field = field_400x300(seed);
            park_paddles(&mut field);
            if left {
                field.ball.pos = Vec2::new(2.0, y);
                field.ball.vel = Vec2::new(-3.0, 0.0);
            } else {
                field.ball.pos = Vec2::new(348.0, y);
                field.ball.vel = Vec2::new(3.0, 0.0);
            }

            tick(&mut field, SIM_DT);

            let expected = if left { (0, 1) } else { (1, 0) };
            prop_assert_eq!(field.scores(), expected);
            prop_assert_eq!(field.ball.center(), field.center());
            prop_assert!((field.ball.vel.length() - BALL_SERVE_SPEED).abs() < 1e-4);
        }
    }
}
