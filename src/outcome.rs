//! Sets of possible truth values.
//!
//! An [`Outcome`] is a non-empty subset of `{true, false}`: the values an
//! expression may still take once a partial assignment is completed. The
//! operators lift `!`, `&&` and `||` element-wise over the sets.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Outcome(u8);

impl Outcome {
    const T: u8 = 0b01;
    const F: u8 = 0b10;

    pub const TRUE: Outcome = Outcome(Self::T);
    pub const FALSE: Outcome = Outcome(Self::F);
    pub const BOTH: Outcome = Outcome(Self::T | Self::F);

    pub const fn of(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    pub const fn contains(self, value: bool) -> bool {
        self.0 & Self::of(value).0 != 0
    }

    pub const fn can_be_true(self) -> bool {
        self.contains(true)
    }

    pub const fn can_be_false(self) -> bool {
        self.contains(false)
    }

    /// True if `value` is the only possible value.
    pub const fn is_exactly(self, value: bool) -> bool {
        self.0 == Self::of(value).0
    }

    pub fn values(self) -> impl Iterator<Item = bool> {
        [true, false].into_iter().filter(move |&v| self.contains(v))
    }

    /// `{ op(a, b) : a in self, b in rhs }`
    fn combine(self, rhs: Self, op: impl Fn(bool, bool) -> bool) -> Self {
        let mut bits = 0;
        for a in self.values() {
            for b in rhs.values() {
                bits |= Self::of(op(a, b)).0;
            }
        }
        Outcome(bits)
    }
}

impl Not for Outcome {
    type Output = Self;

    fn not(self) -> Self::Output {
        Outcome(((self.0 & Self::T) << 1) | ((self.0 & Self::F) >> 1))
    }
}

impl BitAnd for Outcome {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a && b)
    }
}

impl BitOr for Outcome {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a || b)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::TRUE => write!(f, "{{true}}"),
            Outcome::FALSE => write!(f, "{{false}}"),
            _ => write!(f, "{{true, false}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Outcome; 3] = [Outcome::TRUE, Outcome::FALSE, Outcome::BOTH];

    #[test]
    fn test_contains() {
        assert!(Outcome::TRUE.can_be_true());
        assert!(!Outcome::TRUE.can_be_false());
        assert!(Outcome::FALSE.can_be_false());
        assert!(!Outcome::FALSE.can_be_true());
        assert!(Outcome::BOTH.can_be_true() && Outcome::BOTH.can_be_false());
        assert!(Outcome::FALSE.is_exactly(false));
        assert!(!Outcome::BOTH.is_exactly(false));
    }

    #[test]
    fn test_not() {
        assert_eq!(!Outcome::TRUE, Outcome::FALSE);
        assert_eq!(!Outcome::FALSE, Outcome::TRUE);
        assert_eq!(!Outcome::BOTH, Outcome::BOTH);
    }

    #[test]
    fn test_and_or_tables() {
        assert_eq!(Outcome::BOTH & Outcome::FALSE, Outcome::FALSE);
        assert_eq!(Outcome::BOTH & Outcome::TRUE, Outcome::BOTH);
        assert_eq!(Outcome::TRUE & Outcome::TRUE, Outcome::TRUE);
        assert_eq!(Outcome::BOTH | Outcome::TRUE, Outcome::TRUE);
        assert_eq!(Outcome::BOTH | Outcome::FALSE, Outcome::BOTH);
        assert_eq!(Outcome::FALSE | Outcome::FALSE, Outcome::FALSE);
    }

    #[test]
    fn test_ops_are_sound_for_every_pair() {
        for x in ALL {
            for y in ALL {
                for a in x.values() {
                    for b in y.values() {
                        assert!((x & y).contains(a && b), "{} & {}", x, y);
                        assert!((x | y).contains(a || b), "{} | {}", x, y);
                    }
                    assert!((!x).contains(!a));
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::BOTH.to_string(), "{true, false}");
        assert_eq!(Outcome::of(true).to_string(), "{true}");
    }
}
