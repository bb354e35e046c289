//! A 3x3 sliding tile grid ordered by an injected scoring function.

pub mod board;
pub mod score;

pub use board::{BoardError, TileGrid};
pub use score::{Placeholder, Scorer};
