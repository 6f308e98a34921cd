mod bitboard;
mod piece;
mod square;

pub use bitboard::Bitboard;
pub use piece::{Color, Piece, Role};
pub use square::{Square, SquareParseError};

/// Number of squares on the board
pub const NUM_SQUARES: usize = 64;

/// Number of ranks (rows) on the board
pub const NUM_RANKS: usize = 8;

/// Number of files (columns) on the board
pub const NUM_FILES: usize = 8;
