//! Frame driver and pointer input adapter
//!
//! Turns variable wall-clock frame times into fixed simulation ticks and
//! forwards pointer moves to the field. This is the only place the
//! simulation's events are logged.

use glam::Vec2;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GameField, tick};

/// A pointer/touch move in field-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<PointerEvent> for Vec2 {
    fn from(event: PointerEvent) -> Self {
        Vec2::new(event.x, event.y)
    }
}

/// Fixed-rate tick scheduler
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    accumulator: f32,
    /// Ticks run since the driver was created
    pub total_ticks: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pointer move immediately; the next tick sees it
    pub fn pointer(&mut self, field: &mut GameField, event: PointerEvent) {
        field.on_pointer_move(event.into());
    }

    /// Account for `frame_dt` seconds of wall time and run the ticks it covers
    ///
    /// Returns the number of ticks run. Long frames are clamped, at most
    /// `MAX_SUBSTEPS` ticks run per frame, and time beyond the cap is dropped.
    pub fn advance(&mut self, field: &mut GameField, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(field, SIM_DT);
            log_events(field);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop whatever the substep cap left behind so slow frames can't pile up
        if self.accumulator >= SIM_DT {
            self.accumulator %= SIM_DT;
        }
        self.total_ticks += u64::from(substeps);

        substeps
    }

    /// Time carried over to the next frame
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}

fn log_events(field: &GameField) {
    for event in &field.events {
        match *event {
            GameEvent::PointScored { scorer, score } => {
                let (p1, p2) = field.scores();
                log::debug!("Point to {:?} ({}), score {}-{}", scorer, score, p1, p2);
            }
            GameEvent::PaddleHit { side, speed } => {
                log::trace!("{:?} paddle hit, speed {:.2}", side, speed);
            }
            GameEvent::WallBounce => log::trace!("Wall bounce at tick {}", field.time_ticks),
        }
    }
}
