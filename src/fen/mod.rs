mod placement;

pub use placement::{Placement, PlacementError};

use std::fmt;
use std::str::FromStr;

/// Error type for parsing a full FEN line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input contained no fields at all
    #[error("empty FEN string")]
    Empty,
    /// The piece-placement field was malformed
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A FEN line: the parsed piece placement plus the remaining fields
/// (side to move, castling rights, en passant square, move counters)
/// carried verbatim.
///
/// Only the placement field is interpreted; the remainder is opaque
/// pass-through data so a full line can be round-tripped.
///
/// # Examples
/// ```
/// use fen2bits::fen::Fen;
///
/// let fen: Fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
///     .parse()
///     .unwrap();
/// assert_eq!(fen.placement().occupied().count(), 32);
/// assert_eq!(fen.remainder(), Some("w KQkq - 0 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    placement: Placement,
    remainder: Option<String>,
}

impl Fen {
    /// The parsed piece placement.
    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// The unparsed fields after the placement, if any.
    #[inline]
    pub fn remainder(&self) -> Option<&str> {
        self.remainder.as_deref()
    }
}

impl From<Placement> for Fen {
    fn from(placement: Placement) -> Self {
        Self {
            placement,
            remainder: None,
        }
    }
}

impl FromStr for Fen {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FenError::Empty);
        }

        let (field, rest) = match s.split_once(char::is_whitespace) {
            Some((field, rest)) => (field, Some(rest.trim_start().to_owned())),
            None => (s, None),
        };

        Ok(Self {
            placement: field.parse()?,
            remainder: rest,
        })
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placement)?;
        if let Some(rest) = &self.remainder {
            write!(f, " {rest}")?;
        }
        Ok(())
    }
}
