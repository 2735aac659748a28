//! Arity ranges.

use std::{fmt, ops::RangeInclusive};

use thiserror::Error;

/// Largest number of components `System.Tuple` takes without nesting.
pub const MAX_TUPLE_ARITY: u8 = 7;

/// Why an arity range was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("arity must be at least 1")]
    Zero,
    #[error("minimum arity {min} is greater than maximum arity {max}")]
    Inverted { min: u8, max: u8 },
    #[error("arity {max} exceeds the largest supported tuple arity {}", MAX_TUPLE_ARITY)]
    TooLarge { max: u8 },
}

/// A closed interval of key arities, `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityRange {
    min: u8,
    max: u8,
}

/// Smallest arity of the default range.
pub const DEFAULT_MIN_ARITY: u8 = 1;

/// Largest arity of the default range.
pub const DEFAULT_MAX_ARITY: u8 = 5;

impl ArityRange {
    /// Create a validated range.
    pub fn new(min: u8, max: u8) -> Result<Self, ArityError> {
        if min == 0 {
            return Err(ArityError::Zero);
        }
        if min > max {
            return Err(ArityError::Inverted { min, max });
        }
        if max > MAX_TUPLE_ARITY {
            return Err(ArityError::TooLarge { max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Replace either bound, revalidating the result.
    pub fn with_bounds(&self, min: Option<u8>, max: Option<u8>) -> Result<Self, ArityError> {
        Self::new(min.unwrap_or(self.min), max.unwrap_or(self.max))
    }

    pub fn contains(&self, n: u8) -> bool {
        self.as_range().contains(&n)
    }

    /// Number of arities in the range.
    pub fn len(&self) -> usize {
        usize::from(self.max - self.min) + 1
    }

    /// Always false: a valid range holds at least one arity.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> RangeInclusive<u8> {
        self.as_range()
    }

    fn as_range(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }
}

impl Default for ArityRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ARITY,
            max: DEFAULT_MAX_ARITY,
        }
    }
}

impl fmt::Display for ArityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}..={}", self.min, self.max)
        }
    }
}

impl IntoIterator for ArityRange {
    type Item = u8;
    type IntoIter = RangeInclusive<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_range()
    }
}
