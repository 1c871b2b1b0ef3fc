// Joust - Library Root
//
// Pure game logic for a wrist-worn "don't spill it" game: a song envelope
// sets how hard the player may move on each tick, and the jerk between two
// accelerometer frames is checked against it.  Sampling, drawing, buzzing
// and tick scheduling belong to the host.

pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod jerk;
pub mod line;
pub mod song;

pub use error::LineError;
pub use line::{Line, Outline, Point};
