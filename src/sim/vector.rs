//! 2D vector helpers
//!
//! Thin named operations over `glam::Vec2` used by ball serving and motion.

use glam::Vec2;

/// Component-wise sum
#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// Component-wise scalar multiply
#[inline]
pub fn scale(v: Vec2, s: f32) -> Vec2 {
    v * s
}

/// Rotate `v` counter-clockwise by `degrees`
#[inline]
pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
