//! Collision tests and responses for the rectangular field
//!
//! Everything here is a pure function of bounding boxes and velocities so the
//! bounce math can be checked without building a whole field.

use glam::Vec2;

use super::rect::Rect;
use super::vector;
use crate::consts::{PADDLE_EDGE_SPEEDUP, PADDLE_SPEEDUP};

/// Which side of the field the ball left through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideExit {
    /// Past the left edge (`x < 0`), player 2 scores
    Left,
    /// Past the right edge (`right > width`), player 1 scores
    Right,
}

/// Velocity after bouncing off a paddle, plus the speedup that was applied
///
/// The horizontal component is reflected and the whole vector scaled. A ball
/// whose center is above the paddle's top or below its bottom is clipping a
/// corner and gets the sharper edge speedup. The normalized impact offset
/// (roughly -1 at the bottom edge to 1 at the top) is added to the vertical
/// component afterwards.
pub fn paddle_bounce_velocity(velocity: Vec2, ball_center_y: f32, paddle: &Rect) -> (Vec2, f32) {
    let speedup = if ball_center_y > paddle.top() || ball_center_y < paddle.y() {
        PADDLE_EDGE_SPEEDUP
    } else {
        PADDLE_SPEEDUP
    };

    let half_height = paddle.size.y / 2.0;
    let offset = (ball_center_y - paddle.center().y) / half_height;

    let bounced = vector::scale(Vec2::new(-velocity.x, velocity.y), speedup);
    (Vec2::new(bounced.x, bounced.y + offset), speedup)
}

/// Check if the ball is past the bottom or top wall
#[inline]
pub fn touches_wall(ball: &Rect, field_height: f32) -> bool {
    ball.y() < 0.0 || ball.top() > field_height
}

/// Check if the ball has left the field through a scoring side
pub fn side_exit(ball: &Rect, field_width: f32) -> Option<SideExit> {
    if ball.x() < 0.0 {
        Some(SideExit::Left)
    } else if ball.right() > field_width {
        Some(SideExit::Right)
    } else {
        None
    }
}
