//! Newline insertion policy.

use std::ops::{BitOr, BitOrAssign};

/// Line terminator appended by [`Document::newline`](crate::Document::newline).
pub const NEWLINE: &str = "\r\n";

/// Bitmask selecting where a [`Document`](crate::Document) inserts newlines.
///
/// Combine flags with `|`:
///
/// ```
/// use quill_markup::NewlineMode;
///
/// let mode = NewlineMode::AFTER_CLOSE | NewlineMode::AFTER_OPEN;
/// assert_eq!(mode.bits(), 0x05);
/// assert!(mode.contains(NewlineMode::AFTER_OPEN));
/// assert!(!mode.contains(NewlineMode::AFTER_TAG));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NewlineMode(u8);

impl NewlineMode {
    /// No automatic newlines.
    pub const NONE: Self = Self(0x00);
    /// Newline after every closing tag.
    pub const AFTER_CLOSE: Self = Self(0x01);
    /// Newline after every complete tag.
    pub const AFTER_TAG: Self = Self(0x02);
    /// Newline after every opening tag.
    pub const AFTER_OPEN: Self = Self(0x04);
    /// All of the above.
    pub const ALL: Self = Self(0x07);

    /// Build a mode from raw bits; unknown bits are dropped.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw bit value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for NewlineMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for NewlineMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u8> for NewlineMode {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}
