//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick is the unit of motion (no dt scaling)
//! - Seeded RNG only
//! - No logging, rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{SideExit, paddle_bounce_velocity, side_exit, touches_wall};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GameField, Paddle, Side};
pub use tick::tick;
