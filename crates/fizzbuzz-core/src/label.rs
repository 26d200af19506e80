//! # Label Module
//!
//! Typed form of the Classifier's output.
//!
//! `Label` carries the decision, `LabelKind` drops the number so labels can
//! be counted under a deterministic key.

use crate::{BUZZ, FIZZ, FIZZBUZZ, is_divisible};
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// LABEL
// =============================================================================

/// The label assigned to a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Divisible by both 3 and 5.
    FizzBuzz,
    /// Divisible by 3 only.
    Fizz,
    /// Divisible by 5 only.
    Buzz,
    /// Divisible by neither; rendered as the number itself.
    Number(i64),
}

impl Label {
    /// Decide the label for `n`.
    ///
    /// The fifteen check comes first so common multiples never fall through
    /// to `Fizz` or `Buzz`.
    #[must_use]
    pub const fn of(n: i64) -> Self {
        if is_divisible(n, FIZZBUZZ) {
            Self::FizzBuzz
        } else if is_divisible(n, FIZZ) {
            Self::Fizz
        } else if is_divisible(n, BUZZ) {
            Self::Buzz
        } else {
            Self::Number(n)
        }
    }

    /// The payload-free category of this label.
    #[must_use]
    pub const fn kind(&self) -> LabelKind {
        match self {
            Self::FizzBuzz => LabelKind::FizzBuzz,
            Self::Fizz => LabelKind::Fizz,
            Self::Buzz => LabelKind::Buzz,
            Self::Number(_) => LabelKind::Number,
        }
    }

    /// The word for word labels, `None` for numbers.
    #[must_use]
    pub const fn as_word(&self) -> Option<&'static str> {
        match self {
            Self::FizzBuzz => Some("fizzbuzz"),
            Self::Fizz => Some("fizz"),
            Self::Buzz => Some("buzz"),
            Self::Number(_) => None,
        }
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Self::of(n)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FizzBuzz => f.write_str("fizzbuzz"),
            Self::Fizz => f.write_str("fizz"),
            Self::Buzz => f.write_str("buzz"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// LABEL KIND
// =============================================================================

/// Label category, ordered for use as a `BTreeMap` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    FizzBuzz,
    Fizz,
    Buzz,
    Number,
}

impl LabelKind {
    /// All kinds, in key order.
    pub const ALL: [LabelKind; 4] = [Self::FizzBuzz, Self::Fizz, Self::Buzz, Self::Number];

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FizzBuzz => "fizzbuzz",
            Self::Fizz => "fizz",
            Self::Buzz => "buzz",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
