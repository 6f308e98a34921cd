use std::fmt;
use std::str::FromStr;

use crate::board::{Bitboard, Color, NUM_FILES, NUM_RANKS, Piece, Role, Square};

/// Error type for parsing a FEN piece-placement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The field does not split into exactly 8 ranks on '/'
    #[error("expected 8 ranks, found {found}")]
    RankCount { found: usize },
    /// A rank expands to more or fewer than 8 files
    #[error("rank {rank} covers {width} files, expected 8")]
    RankWidth { rank: u8, width: u8 },
    /// A character that is neither a digit 1-8 nor a piece letter
    #[error("unrecognized symbol '{symbol}' in rank {rank}")]
    UnrecognizedSymbol { rank: u8, symbol: char },
}

/// The parsed piece placement of a chess position: one occupancy
/// bitboard per (color, role) pair.
///
/// Built by parsing the first field of a FEN string; immutable once
/// built. The per-color and all-piece unions are recomputed on each
/// call, never stored.
///
/// # Examples
/// ```
/// use fen2bits::fen::Placement;
///
/// let start: Placement = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
///     .parse()
///     .unwrap();
/// assert_eq!(start.white_pawns().value(), 0xFF00);
/// assert_eq!(start.occupied().count(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    boards: [[Bitboard; Role::ALL.len()]; Color::ALL.len()],
}

impl Placement {
    /// Occupancy of one piece kind of one color.
    #[inline]
    pub fn pieces(&self, color: Color, role: Role) -> Bitboard {
        self.boards[color.index()][role.index()]
    }

    /// Union of all six bitboards of one color.
    pub fn by_color(&self, color: Color) -> Bitboard {
        self.boards[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, bb| acc | *bb)
    }

    /// Union of all white pieces.
    #[inline]
    pub fn white(&self) -> Bitboard {
        self.by_color(Color::White)
    }

    /// Union of all black pieces.
    #[inline]
    pub fn black(&self) -> Bitboard {
        self.by_color(Color::Black)
    }

    /// Union of all pieces of both colors.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white() | self.black()
    }

    /// The piece on the given square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        for color in Color::ALL {
            for role in Role::ALL {
                if self.pieces(color, role).contains(square) {
                    return Some(Piece { color, role });
                }
            }
        }
        None
    }

    #[inline]
    pub fn white_pawns(&self) -> Bitboard {
        self.pieces(Color::White, Role::Pawn)
    }

    #[inline]
    pub fn white_knights(&self) -> Bitboard {
        self.pieces(Color::White, Role::Knight)
    }

    #[inline]
    pub fn white_bishops(&self) -> Bitboard {
        self.pieces(Color::White, Role::Bishop)
    }

    #[inline]
    pub fn white_rooks(&self) -> Bitboard {
        self.pieces(Color::White, Role::Rook)
    }

    #[inline]
    pub fn white_queens(&self) -> Bitboard {
        self.pieces(Color::White, Role::Queen)
    }

    #[inline]
    pub fn white_king(&self) -> Bitboard {
        self.pieces(Color::White, Role::King)
    }

    #[inline]
    pub fn black_pawns(&self) -> Bitboard {
        self.pieces(Color::Black, Role::Pawn)
    }

    #[inline]
    pub fn black_knights(&self) -> Bitboard {
        self.pieces(Color::Black, Role::Knight)
    }

    #[inline]
    pub fn black_bishops(&self) -> Bitboard {
        self.pieces(Color::Black, Role::Bishop)
    }

    #[inline]
    pub fn black_rooks(&self) -> Bitboard {
        self.pieces(Color::Black, Role::Rook)
    }

    #[inline]
    pub fn black_queens(&self) -> Bitboard {
        self.pieces(Color::Black, Role::Queen)
    }

    #[inline]
    pub fn black_king(&self) -> Bitboard {
        self.pieces(Color::Black, Role::King)
    }
}

/// Parse the piece-placement field of a FEN string.
///
/// The field lists ranks 8 down to 1, separated by '/'. Within a rank,
/// a digit 1-8 skips that many empty files and a piece letter occupies
/// one file (uppercase white, lowercase black). Every rank must expand
/// to exactly 8 files.
impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('/').collect();
        if segments.len() != NUM_RANKS {
            return Err(PlacementError::RankCount {
                found: segments.len(),
            });
        }

        let mut placement = Placement::default();
        for (i, segment) in segments.iter().enumerate() {
            // Ranks are written top-down: first segment is rank 8
            let rank = (NUM_RANKS - 1 - i) as u8;
            let label = rank + 1;

            let mut file: u8 = 0;
            for symbol in segment.chars() {
                if let Some(run) = symbol.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as u8;
                    if file > NUM_FILES as u8 {
                        return Err(PlacementError::RankWidth { rank: label, width: file });
                    }
                } else if let Some(piece) = Piece::from_fen_char(symbol) {
                    let Some(square) = Square::from_coords(rank, file) else {
                        return Err(PlacementError::RankWidth {
                            rank: label,
                            width: file + 1,
                        });
                    };
                    placement.boards[piece.color.index()][piece.role.index()].set(square);
                    file += 1;
                } else {
                    return Err(PlacementError::UnrecognizedSymbol {
                        rank: label,
                        symbol,
                    });
                }
            }

            if file != NUM_FILES as u8 {
                return Err(PlacementError::RankWidth { rank: label, width: file });
            }
        }

        Ok(placement)
    }
}

/// Render back to a placement field with canonical digit-grouping
/// (a fully empty rank prints as "8", never "44" or "11111111").
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..NUM_RANKS as u8).rev() {
            let mut empty_run = 0;
            for file in 0..NUM_FILES as u8 {
                let square = Square::from_coords(rank, file).ok_or(fmt::Error)?;
                match self.piece_at(square) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
