//! Fundamental geometric and simulation types.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 2D vector in play-field units. x = right, y = up (the player sits at
/// the bottom of the field, enemies spawn above).
pub type Vec2 = DVec2;

/// An axis-aligned rectangle defined by two opposite corner points,
/// the way authored spawn/engagement areas are: two reference markers,
/// read once at initialization. Corner order does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub corner_a: Vec2,
    pub corner_b: Vec2,
}

impl Rect {
    pub fn new(corner_a: Vec2, corner_b: Vec2) -> Self {
        Self { corner_a, corner_b }
    }

    /// Lower-left corner (normalized).
    pub fn min(&self) -> Vec2 {
        self.corner_a.min(self.corner_b)
    }

    /// Upper-right corner (normalized).
    pub fn max(&self) -> Vec2 {
        self.corner_a.max(self.corner_b)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Uniformly random point inside the rectangle.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Vec2 {
        let min = self.min();
        let max = self.max();
        let x = if max.x > min.x {
            rng.gen_range(min.x..max.x)
        } else {
            min.x
        };
        let y = if max.y > min.y {
            rng.gen_range(min.y..max.y)
        } else {
            min.y
        };
        Vec2::new(x, y)
    }

    /// Clamp a point into the rectangle.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
