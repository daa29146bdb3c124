#![warn(clippy::all)]

mod board;
mod config;
mod engines;
mod rule;
mod run;
mod utils;

pub use board::{advance, Board, CellState};
pub use config::{Config, EngineKind};
pub use engines::{NaiveEngine, PackedEngine};
pub use rule::{next_state, RULE_NUMBER};
pub use run::{run, RunReport, TIMING_LABEL};
pub use utils::Engine;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 100;
/// Number of generations produced by a default run.
pub const GENERATIONS: u64 = 100;
