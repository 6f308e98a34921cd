//! Translate the piece-placement field of a FEN string into per-piece
//! occupancy bitboards.
//!
//! The [`fen::Placement`] parser produces twelve [`board::Bitboard`]s,
//! one per (color, role) pair, with the white/black/all unions derived
//! by OR-reduction. [`fen::Fen`] wraps a placement together with the
//! rest of a FEN line, carried verbatim for round-tripping.

pub mod board;
pub mod fen;

pub use board::{Bitboard, Color, Piece, Role, Square};
pub use fen::{Fen, FenError, Placement, PlacementError};
