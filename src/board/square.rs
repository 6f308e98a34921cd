use std::fmt;
use std::str::FromStr;

use super::NUM_SQUARES;

/// Represents a single square on the chess board (0-63).
///
/// Internally stores index 0-63 where:
/// - 0 = a1, 7 = h1
/// - 56 = a8, 63 = h8
///
/// The index is `rank * 8 + file` with rank 0 being the first rank
/// and file 0 being the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a new Square if the index is valid (0-63).
    pub const fn new(idx: u8) -> Option<Self> {
        if idx < NUM_SQUARES as u8 {
            Some(Square(idx))
        } else {
            None
        }
    }

    /// Creates a Square from zero-based rank and file coordinates,
    /// if both are in range (0-7).
    pub const fn from_coords(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Returns the internal index value (0-63).
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the file ('a'-'h') of this square.
    pub const fn file(self) -> char {
        (b'a' + (self.0 % 8)) as char
    }

    /// Returns the rank (1-8) of this square.
    pub const fn rank(self) -> u8 {
        (self.0 / 8) + 1
    }
}

/// Parse algebraic notation like "e4" into a Square.
///
/// # Examples
/// ```
/// # use fen2bits::board::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!(square.value(), 28);
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::WrongLength);
        };

        let file = file.to_ascii_lowercase();
        let rank = rank.to_digit(10).ok_or(SquareParseError::BadRank)?;

        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::BadFile);
        }
        if !(1..=8).contains(&rank) {
            return Err(SquareParseError::BadRank);
        }

        let idx = ((rank as u8 - 1) * 8) + (file as u8 - b'a');
        Ok(Square(idx))
    }
}

/// Display square in algebraic notation (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Error type for parsing square notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    /// Square notation must be exactly 2 characters
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    /// File must be a letter from a-h
    #[error("file must be a-h")]
    BadFile,
    /// Rank must be a digit from 1-8
    #[error("rank must be 1-8")]
    BadRank,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_creation() {
        assert!(Square::new(0).is_some());
        assert!(Square::new(63).is_some());
        assert!(Square::new(64).is_none());
        assert!(Square::new(255).is_none());
    }

    #[test]
    fn test_square_from_coords() {
        assert_eq!(Square::from_coords(0, 0), Square::new(0));
        assert_eq!(Square::from_coords(0, 7), Square::new(7));
        assert_eq!(Square::from_coords(7, 0), Square::new(56));
        assert_eq!(Square::from_coords(3, 4), Square::new(28));
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::from_coords(0, 8), None);
    }

    #[test]
    fn test_square_file_rank() {
        let a1 = Square::new(0).unwrap();
        assert_eq!(a1.file(), 'a');
        assert_eq!(a1.rank(), 1);

        let h8 = Square::new(63).unwrap();
        assert_eq!(h8.file(), 'h');
        assert_eq!(h8.rank(), 8);

        let e4 = Square::new(28).unwrap();
        assert_eq!(e4.file(), 'e');
        assert_eq!(e4.rank(), 4);
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>().unwrap().value(), 0);
        assert_eq!("h1".parse::<Square>().unwrap().value(), 7);
        assert_eq!("a8".parse::<Square>().unwrap().value(), 56);
        assert_eq!("h8".parse::<Square>().unwrap().value(), 63);
        assert_eq!("e4".parse::<Square>().unwrap().value(), 28);
    }

    #[test]
    fn test_square_from_str_invalid() {
        assert!("".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("i1".parse::<Square>().is_err());
        assert!("a0".parse::<Square>().is_err());
        assert!("abc".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_roundtrip() {
        for idx in 0..64 {
            let square = Square::new(idx).unwrap();
            let str_repr = square.to_string();
            let parsed: Square = str_repr.parse().unwrap();
            assert_eq!(square, parsed);
        }
    }
}
