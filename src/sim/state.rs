//! Game state and core simulation types
//!
//! The field owns the ball and both paddles outright. Paddles only borrow the
//! ball for the duration of a bounce check.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::paddle_bounce_velocity;
use super::rect::Rect;
use super::vector;
use crate::consts::*;
use crate::settings::{Settings, SettingsError};

/// Names a paddle by the side of the field it defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Player 1, defends the left edge
    Left,
    /// Player 2, defends the right edge
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A paddle returned the ball; `speed` is the ball speed after the bounce
    PaddleHit { side: Side, speed: f32 },
    /// The ball reflected off the top or bottom wall
    WallBounce,
    /// `scorer` won a point and now has `score`
    PointScored { scorer: Side, score: u32 },
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Bottom-left corner of the bounding box
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Edge length of the square bounding box
    pub size: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bounds().top()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.bounds().right()
    }

    /// Move by one tick of velocity. Bounds are the field's business.
    pub fn advance(&mut self) {
        self.pos = vector::add(self.pos, self.vel);
    }

    /// Serve at the fixed speed in a random whole-degree direction from
    /// `start..=end`
    pub fn set_velocity<R: Rng + ?Sized>(&mut self, rng: &mut R, start: i32, end: i32) {
        let angle = rng.random_range(start..=end);
        self.vel = vector::rotate(Vec2::new(BALL_SERVE_SPEED, 0.0), angle as f32);
    }

    /// Reposition so the ball's center sits on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - Vec2::splat(self.size / 2.0);
    }
}

/// A player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub score: u32,
    /// Cleared on a bounce, re-armed when the opponent returns the ball or
    /// this paddle concedes. Stops one crossing from bouncing every tick.
    pub has_turn: bool,
}

impl Paddle {
    pub fn new(x: f32, center_y: f32, size: Vec2) -> Self {
        let mut paddle = Self {
            pos: Vec2::new(x, 0.0),
            size,
            score: 0,
            has_turn: true,
        };
        paddle.set_center_y(center_y);
        paddle
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bounds().top()
    }

    /// Move vertically so the paddle's center is at `y`. No clamping.
    pub fn set_center_y(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Bounce the ball if it overlaps this paddle and the paddle has the turn
    ///
    /// Returns true if the ball's velocity was changed.
    pub fn bounce_ball(&mut self, ball: &mut Ball) -> bool {
        if !self.has_turn || !self.bounds().intersects(&ball.bounds()) {
            return false;
        }

        self.has_turn = false;
        let (vel, _speedup) = paddle_bounce_velocity(ball.vel, ball.center().y, &self.bounds());
        ball.vel = vel;
        true
    }
}

/// The playfield: ball, both paddles and the serve RNG
#[derive(Debug, Clone)]
pub struct GameField {
    pub width: f32,
    pub height: f32,
    pub ball: Ball,
    /// Left paddle
    pub player1: Paddle,
    /// Right paddle
    pub player2: Paddle,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    seed: u64,
    rng: Pcg32,
}

impl GameField {
    /// Build a field from settings with the ball served from the center
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;

        let width = settings.field_width;
        let height = settings.field_height;
        let paddle_size = Vec2::new(settings.paddle_width, settings.paddle_height);
        let center_y = height / 2.0;

        let mut field = Self {
            width,
            height,
            ball: Ball::new(settings.ball_size),
            player1: Paddle::new(0.0, center_y, paddle_size),
            player2: Paddle::new(width - paddle_size.x, center_y, paddle_size),
            time_ticks: 0,
            events: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };

        let (start, end) = OPENING_SERVE;
        field.serve(start, end);
        Ok(field)
    }

    /// Seed the serve RNG was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Advance one tick (`dt` is accepted for the driver but not used)
    pub fn update(&mut self, dt: f32) {
        super::tick::tick(self, dt);
    }

    /// Recenter the ball and serve it toward `start..=end` degrees
    pub fn serve(&mut self, start: i32, end: i32) {
        self.ball.set_velocity(&mut self.rng, start, end);
        let center = self.center();
        self.ball.set_center(center);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player1,
            Side::Right => &self.player2,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.player1,
            Side::Right => &mut self.player2,
        }
    }

    /// Route a pointer move in field-local coordinates to a paddle
    ///
    /// The left third of the field drives player 1 and the right third drives
    /// player 2. The middle third is ignored.
    pub fn on_pointer_move(&mut self, point: Vec2) {
        let third = self.width / 3.0;
        if point.x < third {
            self.player1.set_center_y(point.y);
        }
        if point.x > self.width - third {
            self.player2.set_center_y(point.y);
        }
    }

    /// (player 1, player 2) scores
    pub fn scores(&self) -> (u32, u32) {
        (self.player1.score, self.player2.score)
    }

    /// Side currently ahead, if any
    pub fn leader(&self) -> Option<Side> {
        let (left, right) = self.scores();
        match left.cmp(&right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}
