// Joust - Host Driver
//
// Runs the game logic off-device:
//   1. Build the song envelope and convert it to ticks.
//   2. Project it into the graph area of the watch face.
//   3. Replay a scripted accelerometer trace through the game context,
//      starting a round the way a select-button press would.
//   4. Log every tick that would have buzzed the wrist.
//
// Log level comes from RUST_LOG (e.g. `RUST_LOG=debug`).

use anyhow::Context;
use embedded_graphics::geometry::Size;

use joust::config::*;
use joust::events::AccelSample;
use joust::game::GameContext;
use joust::song;

// Ticks on which the scripted player presses select.
const ROUND_START_TICK: i32 = 10;
const ROUND_STOP_TICK: i32 = 250;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Joust starting…");

    let song_ms = song::song().context("song table is not a valid line")?;
    let mut game = GameContext::new(song_ms, GameConfig::default())
        .context("could not convert song to ticks")?;

    let graph = game
        .graph(Size::new(SCREEN_WIDTH, GRAPH_HEIGHT), GRAPH_BASELINE)
        .context("could not project song graph")?;
    log::info!("Song graph: {:?}", graph.vertices());

    game.prime(scripted_frame(-1));

    let mut alarms = 0u32;
    for tick in 0..DEMO_TICKS {
        if tick == ROUND_START_TICK || tick == ROUND_STOP_TICK {
            game.toggle_testing();
        }

        let report = game.tick(scripted_frame(tick));
        if report.alarm {
            alarms += 1;
            log::info!(
                "Tick {}: jerk {} over threshold {} - buzz",
                report.tick,
                report.magnitude,
                report.threshold
            );
        }
    }

    log::info!("Done: {} ticks, {} alarms", DEMO_TICKS, alarms);
    Ok(())
}

/// Deterministic wrist motion: a gentle sway with a hard flick every 23 ticks.
fn scripted_frame(tick: i32) -> AccelSample {
    let sway = ((tick.rem_euclid(40) - 20) * 15) as i16;
    if tick.rem_euclid(23) == 0 {
        AccelSample::new(sway + 1800, -1500, 1000)
    } else {
        AccelSample::new(sway, sway / 2, 1000)
    }
}
