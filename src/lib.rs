//! Duel Pong - A two-player touch Pong game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (ball, paddles, scoring, pointer routing)
//! - `driver`: Frame accumulator that feeds the simulation at a fixed rate
//! - `settings`: Field dimensions and session options, loaded from JSON

pub mod driver;
pub mod settings;
pub mod sim;

pub use driver::{FrameDriver, PointerEvent};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick is the unit of motion)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Default field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults (square bounding box)
    pub const BALL_SIZE: f32 = 50.0;
    /// Serve speed in units per tick
    pub const BALL_SERVE_SPEED: f32 = 4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;

    /// Speed multiplier for a square-on paddle hit
    pub const PADDLE_SPEEDUP: f32 = 1.1;
    /// Speed multiplier when the ball center is past the paddle's top or bottom edge
    pub const PADDLE_EDGE_SPEEDUP: f32 = 1.5;

    /// Serve angle ranges in degrees (inclusive)
    pub const OPENING_SERVE: (i32, i32) = (0, 360);
    pub const LEFT_EXIT_SERVE: (i32, i32) = (135, 225);
    pub const RIGHT_EXIT_SERVE: (i32, i32) = (-45, 45);
}
