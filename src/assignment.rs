//! Packed assignments of the free variables.
//!
//! An [`Assignment`] binds a prefix of the free variables (in declaration
//! order) to boolean values. The enumeration engine extends and shrinks a
//! single buffer with [`push`](Assignment::push) and [`pop`](Assignment::pop);
//! a clone is an immutable snapshot that can be used as a cache key.

use std::fmt;

use num_bigint::BigUint;

/// A prefix assignment stored as packed bits.
///
/// Invariant: every bit at position `>= len` is zero and `words` holds
/// exactly `ceil(len / 64)` words, so the derived `Eq` and `Hash` compare
/// snapshots by their bound values only.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    words: Vec<u64>,
    len: usize,
}

impl Assignment {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty assignment with room for `vars` variables.
    pub fn with_capacity(vars: usize) -> Self {
        let num_words = (vars + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD;
        Self {
            words: Vec::with_capacity(num_words),
            len: 0,
        }
    }

    /// Number of bound variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Value of the variable at `index`, or `None` if it is not bound yet.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let (word, bit) = Self::word_and_bit(index);
        Some(self.words[word] & (1u64 << bit) != 0)
    }

    /// Bind the next variable.
    #[inline]
    pub fn push(&mut self, value: bool) {
        let (word, bit) = Self::word_and_bit(self.len);
        if bit == 0 {
            self.words.push(0);
        }
        if value {
            self.words[word] |= 1u64 << bit;
        }
        self.len += 1;
    }

    /// Unbind the last variable, returning its value.
    #[inline]
    pub fn pop(&mut self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let (word, bit) = Self::word_and_bit(self.len);
        let mask = 1u64 << bit;
        let value = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        if bit == 0 {
            self.words.pop();
        }
        Some(value)
    }

    /// Bound values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| {
            let (word, bit) = Self::word_and_bit(i);
            self.words[word] & (1u64 << bit) != 0
        })
    }

    /// The assignment read as a binary number, first variable most significant.
    pub fn key(&self) -> BigUint {
        self.iter().fold(BigUint::ZERO, |acc, bit| (acc << 1u32) + u32::from(bit))
    }
}

impl FromIterator<bool> for Assignment {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for value in iter {
            assignment.push(value);
        }
        assignment
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", u8::from(value))?;
        }
        write!(f, "]")
    }
}
