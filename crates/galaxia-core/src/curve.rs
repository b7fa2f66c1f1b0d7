//! Piecewise-linear keyframe curves.
//!
//! Authored tuning data sampled at runtime: wave number → spawn quota,
//! elapsed flight time → lateral offset, elapsed flight time → speed.
//! The core treats them as opaque pure functions.

use serde::{Deserialize, Serialize};

/// A single keyframe: input value → output value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub t: f64,
    pub value: f64,
}

/// Piecewise-linear curve over sorted keyframes, clamped at both ends.
///
/// An empty curve evaluates to 0.0 everywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    keys: Vec<Key>,
}

impl Curve {
    /// Build a curve from (input, output) pairs. Keys are sorted by input.
    pub fn from_keys(pairs: &[(f64, f64)]) -> Self {
        let mut keys: Vec<Key> = pairs.iter().map(|&(t, value)| Key { t, value }).collect();
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { keys }
    }

    /// A curve that evaluates to the same value everywhere.
    pub fn constant(value: f64) -> Self {
        Self {
            keys: vec![Key { t: 0.0, value }],
        }
    }

    /// Sample the curve at `t`, interpolating linearly between the two
    /// surrounding keys and clamping outside the keyed range.
    pub fn evaluate(&self, t: f64) -> f64 {
        let first = match self.keys.first() {
            Some(k) => k,
            None => return 0.0,
        };
        if t <= first.t {
            return first.value;
        }
        let last = self.keys.last().unwrap();
        if t >= last.t {
            return last.value;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                if b.t == a.t {
                    return b.value;
                }
                let frac = (t - a.t) / (b.t - a.t);
                return a.value + (b.value - a.value) * frac;
            }
        }
        last.value
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
