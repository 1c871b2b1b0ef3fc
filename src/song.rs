// Joust - Song Envelope
//
// The threshold track for one two-minute round.  x is milliseconds since the
// round started, y is the jerk magnitude the player must stay under.

use crate::error::LineError;
use crate::line::Line;

/// Calm intro, a loud stretch from 31 s to 60 s, then a very quiet passage.
pub const SONG_MS: [(i32, i32); 6] = [
    (0, 1600),
    (30_000, 1600),
    (31_000, 3000),
    (60_000, 3000),
    (61_000, 1300),
    (120_000, 1600),
];

pub fn song() -> Result<Line, LineError> {
    Line::try_from(&SONG_MS[..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICK_INTERVAL_MS;

    #[test]
    fn test_song_midpoint_of_crescendo() {
        let s = song().unwrap();
        assert_eq!(s.evaluate(30_500), 2300);
    }

    #[test]
    fn test_song_knots_and_loop() {
        let s = song().unwrap();
        assert_eq!(s.evaluate(0), 1600);
        assert_eq!(s.evaluate(45_000), 3000);
        assert_eq!(s.evaluate(61_000), 1300);
        // One full period later the song starts over.
        assert_eq!(s.evaluate(120_000 + 30_500), 2300);
        assert_eq!(s.evaluate(-89_500), 2300);
    }

    #[test]
    fn test_song_in_ticks() {
        let mut s = song().unwrap();
        s.convert_units(TICK_INTERVAL_MS).unwrap();
        let xs: Vec<i32> = s.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 60, 62, 120, 122, 240]);
        assert_eq!(s.evaluate(61), 2300);
        assert_eq!(s.y_range(), Some((1300, 3000)));
    }
}
