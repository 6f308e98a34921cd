use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use super::Square;

/// A bitboard representing a set of board squares.
///
/// Each bit represents one square: bit 0 = a1, bit 63 = h8.
/// A set bit (1) indicates a piece is present on that square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// The empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Creates a new bitboard with the given value.
    pub const fn new(value: u64) -> Self {
        Bitboard(value)
    }

    /// Returns the underlying u64 value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Checks whether the bit at the given square is set.
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square.value()) != 0
    }

    /// Sets the bit at the given square.
    pub fn set(&mut self, square: Square) {
        self.0 |= 1 << square.value();
    }

    /// Toggles the bit at the given square.
    pub fn toggle(&mut self, square: Square) {
        self.0 ^= 1 << square.value();
    }

    /// Number of set bits (occupied squares).
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Hex rendering, fixed width (e.g. `0x000000000000FF00`).
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitboard_new() {
        let bb = Bitboard::new(0);
        assert_eq!(bb.value(), 0);
        assert!(bb.is_empty());

        let bb = Bitboard::new(0xFFFFFFFFFFFFFFFF);
        assert_eq!(bb.value(), 0xFFFFFFFFFFFFFFFF);
        assert_eq!(bb.count(), 64);
    }

    #[test]
    fn test_bitboard_set_contains() {
        let mut bb = Bitboard::EMPTY;
        let e4 = "e4".parse::<Square>().unwrap();

        assert!(!bb.contains(e4));
        bb.set(e4);
        assert!(bb.contains(e4));
        assert_eq!(bb.value(), 1 << 28);

        // Setting again is a no-op
        bb.set(e4);
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_bitboard_toggle() {
        let mut bb = Bitboard::EMPTY;
        let square = Square::new(0).unwrap();

        bb.toggle(square);
        assert_eq!(bb.value(), 1);

        bb.toggle(square);
        assert_eq!(bb.value(), 0);
    }

    #[test]
    fn test_bitboard_multiple_squares() {
        let mut bb = Bitboard::EMPTY;

        bb.set(Square::new(0).unwrap()); // a1
        bb.set(Square::new(7).unwrap()); // h1
        bb.set(Square::new(63).unwrap()); // h8

        assert_eq!(bb.value(), 0x8000000000000081);
        assert_eq!(bb.count(), 3);
    }

    #[test]
    fn test_bitboard_ops() {
        let a = Bitboard::new(0b1100);
        let b = Bitboard::new(0b1010);

        assert_eq!((a | b).value(), 0b1110);
        assert_eq!((a & b).value(), 0b1000);
        assert_eq!((!a).value(), !0b1100u64);

        let mut c = a;
        c |= b;
        assert_eq!(c.value(), 0b1110);
    }

    #[test]
    fn test_bitboard_display() {
        assert_eq!(Bitboard::new(0xFF00).to_string(), "0x000000000000FF00");
    }
}
