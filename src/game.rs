// Joust - Game Context
//
// All mutable game state lives here and is passed by `&mut` into whatever
// drives the tick loop.  The context decides *whether* to buzz; actually
// buzzing, drawing and scheduling the next tick are the host's job.

use embedded_graphics::geometry::Size;

use crate::config::GameConfig;
use crate::error::LineError;
use crate::events::{AccelSample, TickReport};
use crate::jerk::JerkDelta;
use crate::line::{Line, Outline};

#[derive(Debug, Clone)]
pub struct GameContext {
    /// Song envelope, already in ticks.
    song: Line,
    tick: i32,
    prev_frame: AccelSample,
    testing: bool,
    round: u32,
}

impl GameContext {
    /// Take ownership of a millisecond song table and rescale it to ticks.
    pub fn new(mut song_ms: Line, config: GameConfig) -> Result<Self, LineError> {
        song_ms.convert_units(config.tick_interval_ms)?;
        log::info!(
            "Song loaded: {} points, {:?} ticks",
            song_ms.len(),
            song_ms.x_range()
        );
        Ok(Self {
            song: song_ms,
            tick: 0,
            prev_frame: AccelSample::default(),
            testing: false,
            round: 0,
        })
    }

    /// Seed the previous frame so the first tick does not read as a jolt.
    pub fn prime(&mut self, frame: AccelSample) {
        self.prev_frame = frame;
    }

    /// Start or stop a round.  Starting one bumps the round counter.
    pub fn toggle_testing(&mut self) {
        self.testing = !self.testing;
        if self.testing {
            self.round += 1;
        }
        log::info!("Round {} {}", self.round, if self.testing { "started" } else { "stopped" });
    }

    pub fn tick(&mut self, frame: AccelSample) -> TickReport {
        let delta = JerkDelta::between(self.prev_frame, frame);
        let magnitude = delta.magnitude();
        let threshold = self.song.evaluate(self.tick);
        // A negative threshold means any movement counts.
        let alarm = self.testing && i64::from(magnitude) > i64::from(threshold);

        let report = TickReport {
            tick: self.tick,
            delta,
            magnitude,
            threshold,
            testing: self.testing,
            round: self.round,
            alarm,
        };

        if self.testing {
            log::debug!("{}", report.status_text());
        }

        self.prev_frame = frame;
        self.tick = self.tick.wrapping_add(1);
        report
    }

    /// Song outline for the graph layer.
    pub fn graph(&self, bounds: Size, baseline: u32) -> Result<Outline, LineError> {
        self.song.project(bounds, baseline)
    }

    pub fn song(&self) -> &Line {
        &self.song
    }

    pub fn current_tick(&self) -> i32 {
        self.tick
    }

    pub fn is_testing(&self) -> bool {
        self.testing
    }

    pub fn round(&self) -> u32 {
        self.round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRAPH_BASELINE, GRAPH_HEIGHT, SCREEN_WIDTH};
    use crate::song::song;

    fn context() -> GameContext {
        GameContext::new(song().unwrap(), GameConfig::default()).unwrap()
    }

    #[test]
    fn test_new_converts_song_to_ticks() {
        let ctx = context();
        assert_eq!(ctx.song().x_range(), Some((0, 240)));
        assert_eq!(ctx.current_tick(), 0);
        assert!(!ctx.is_testing());
    }

    #[test]
    fn test_new_rejects_bad_interval() {
        let err = GameContext::new(song().unwrap(), GameConfig { tick_interval_ms: 0 }).unwrap_err();
        assert_eq!(err, LineError::InvalidDivisor(0));
    }

    #[test]
    fn test_toggle_counts_rounds() {
        let mut ctx = context();
        ctx.toggle_testing();
        assert!(ctx.is_testing());
        assert_eq!(ctx.round(), 1);
        ctx.toggle_testing();
        assert!(!ctx.is_testing());
        assert_eq!(ctx.round(), 1);
        ctx.toggle_testing();
        assert_eq!(ctx.round(), 2);
    }

    #[test]
    fn test_no_alarm_outside_round() {
        let mut ctx = context();
        ctx.prime(AccelSample::new(0, 0, 0));
        let r = ctx.tick(AccelSample::new(4000, 4000, 4000));
        assert!(r.magnitude > r.threshold as u32);
        assert!(!r.alarm);
    }

    #[test]
    fn test_alarm_follows_song_threshold() {
        let mut ctx = context();
        ctx.toggle_testing();

        // Tick 0: threshold 1600, jerk 2000 -> buzz.
        let r = ctx.tick(AccelSample::new(2000, 0, 0));
        assert_eq!(r.tick, 0);
        assert_eq!(r.threshold, 1600);
        assert_eq!(r.magnitude, 2000);
        assert!(r.alarm);

        // Skip ahead into the loud stretch (ticks 62..=120, threshold 3000).
        for _ in 1..70 {
            ctx.tick(AccelSample::new(2000, 0, 0));
        }
        let r = ctx.tick(AccelSample::new(0, 0, 0));
        assert_eq!(r.tick, 70);
        assert_eq!(r.threshold, 3000);
        assert_eq!(r.magnitude, 2000);
        assert!(!r.alarm);
    }

    #[test]
    fn test_threshold_loops_with_song() {
        let mut ctx = context();
        let mut thresholds = Vec::new();
        for _ in 0..=(240 + 61) {
            thresholds.push(ctx.tick(AccelSample::default()).threshold);
        }
        assert_eq!(thresholds[61], 2300);
        assert_eq!(thresholds[240 + 61], 2300);
    }

    #[test]
    fn test_graph_fits_screen() {
        let ctx = context();
        let outline = ctx
            .graph(Size::new(SCREEN_WIDTH, GRAPH_HEIGHT), GRAPH_BASELINE)
            .unwrap();
        assert_eq!(outline.len(), 8);
        assert_eq!(outline.vertices()[0].y, GRAPH_HEIGHT as i32);
        assert_eq!(outline.vertices()[7].x, SCREEN_WIDTH as i32);
    }
}
