#[macro_use]
mod logging;

pub mod board;
pub mod engine;
pub mod protocol;
pub mod timer;
pub mod tt;
mod zobrist;

pub use board::{Color, Grid, MoveSource, SearchParams, SearchResult, SearchState};
pub use engine::EngineController;
pub use tt::TranspositionTable;
