// Joust - Jerk Magnitude
//
// The game scores movement by how much the acceleration changed between two
// consecutive ticks, not by the acceleration itself, so holding the watch
// still at any orientation reads as zero.

use crate::events::AccelSample;

/// Per-axis change between two accelerometer frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JerkDelta {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
}

impl JerkDelta {
    pub fn between(prev: AccelSample, cur: AccelSample) -> Self {
        Self {
            dx: i32::from(cur.x) - i32::from(prev.x),
            dy: i32::from(cur.y) - i32::from(prev.y),
            dz: i32::from(cur.z) - i32::from(prev.z),
        }
    }

    /// Euclidean length of the delta, truncated.
    pub fn magnitude(&self) -> u32 {
        // Each axis is at most 65535 in size, so the sum of squares fits an i64
        // comfortably and the root fits a u32.
        let sq = i64::from(self.dx).pow(2) + i64::from(self.dy).pow(2) + i64::from(self.dz).pow(2);
        (sq as f64).sqrt() as u32
    }
}
