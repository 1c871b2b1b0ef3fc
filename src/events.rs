// Joust - Game Events & Data Types

use std::fmt;

use crate::config::DEBUG_LEN;
use crate::jerk::JerkDelta;

// ---------------------------------------------------------------------------
// Accelerometer frame (raw milli-g per axis, as peeked from the sensor)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

// ---------------------------------------------------------------------------
// Per-tick outcome - handed back to the host loop
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Tick the sample was taken on (0-based, counted in song units).
    pub tick: i32,
    pub delta: JerkDelta,
    pub magnitude: u32,
    /// Song threshold at this tick.
    pub threshold: i32,
    /// A round is in progress.
    pub testing: bool,
    pub round: u32,
    /// The host should buzz the wrist.
    pub alarm: bool,
}

impl TickReport {
    /// First debug line: per-axis jerk.
    pub fn delta_text(&self) -> String {
        clip(format!(
            "X:{} Y:{} Z:{}",
            self.delta.dx, self.delta.dy, self.delta.dz
        ))
    }

    /// Second debug line: round flag, round number, magnitude.
    pub fn status_text(&self) -> String {
        clip(format!(
            "a:{}, t:{}, M:{}",
            u8::from(self.testing),
            self.round,
            self.magnitude
        ))
    }
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.delta_text(), self.status_text())
    }
}

/// Keep a debug line within the text layer buffer.
fn clip(mut text: String) -> String {
    // Formatted output is ASCII, so byte length == char count.
    text.truncate(DEBUG_LEN - 1);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(delta: JerkDelta, magnitude: u32) -> TickReport {
        TickReport {
            tick: 3,
            delta,
            magnitude,
            threshold: 1600,
            testing: true,
            round: 2,
            alarm: false,
        }
    }

    #[test]
    fn test_debug_lines() {
        let r = report(JerkDelta { dx: 3, dy: -4, dz: 0 }, 5);
        assert_eq!(r.delta_text(), "X:3 Y:-4 Z:0");
        assert_eq!(r.status_text(), "a:1, t:2, M:5");
        assert_eq!(r.to_string(), "X:3 Y:-4 Z:0\na:1, t:2, M:5");
    }

    #[test]
    fn test_debug_lines_are_clipped() {
        let mut r = report(JerkDelta { dx: -65_535, dy: -65_535, dz: -65_535 }, u32::MAX);
        r.round = u32::MAX;
        assert_eq!(r.delta_text(), "X:-65535 Y:-65535 Z:-65535");
        assert_eq!(r.status_text().len(), DEBUG_LEN - 1);
        assert_eq!(r.status_text(), "a:1, t:4294967295, M:429496729");
    }
}
