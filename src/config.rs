// Joust - Game & Display Configuration
// Target: 144x168 monochrome watch face

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------
pub const TICK_INTERVAL_MS: i32 = 500; // accelerometer peek + threshold check

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------
pub const SCREEN_WIDTH: u32 = 144;
pub const GRAPH_HEIGHT: u32 = 60;   // song graph at the top of the face
pub const GRAPH_BASELINE: u32 = 10; // solid skirt under the graph
pub const DEBUG_LEN: usize = 31;    // per debug text line, including terminator

// ---------------------------------------------------------------------------
// Host driver
// ---------------------------------------------------------------------------
pub const DEMO_TICKS: i32 = 300; // a little over one song at 500 ms ticks

/// Runtime knobs for a [`GameContext`](crate::game::GameContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Song tables are written in milliseconds and divided by this once.
    pub tick_interval_ms: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}
