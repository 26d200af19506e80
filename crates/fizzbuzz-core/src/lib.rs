//! # fizzbuzz-core
//!
//! The pure Classifier: maps an integer to `"fizzbuzz"`, `"fizz"`, `"buzz"`,
//! or its decimal string.
//!
//! This crate is THE LOGIC. It performs no I/O, does not log, and never
//! panics. Every `i64` has a defined label.
//!
//! ```
//! use fizzbuzz_core::classify;
//!
//! assert_eq!(classify(3), "fizz");
//! assert_eq!(classify(5), "buzz");
//! assert_eq!(classify(15), "fizzbuzz");
//! assert_eq!(classify(-7), "-7");
//! ```

mod error;
mod label;
mod sequence;

pub use error::{CoreError, Result};
pub use label::{Label, LabelKind};
pub use sequence::{MAX_SEQUENCE_LEN, Sequence, Tally};

// =============================================================================
// DIVISORS
// =============================================================================

/// Divisor that earns `"fizz"`.
pub const FIZZ: i64 = 3;

/// Divisor that earns `"buzz"`.
pub const BUZZ: i64 = 5;

/// Divisor that earns `"fizzbuzz"`. Must be checked before [`FIZZ`] and [`BUZZ`].
pub const FIZZBUZZ: i64 = FIZZ * BUZZ;

/// Returns `true` if `divisor` divides `n` exactly.
///
/// Holds for negative `n` as well: Rust's remainder truncates toward zero, so
/// it is zero exactly when `n` is a multiple of `divisor`.
///
/// Total over all inputs. A zero divisor divides nothing, and `-1` divides
/// everything, `i64::MIN` included.
#[inline]
#[must_use]
pub const fn is_divisible(n: i64, divisor: i64) -> bool {
    match n.checked_rem(divisor) {
        Some(rem) => rem == 0,
        // None only for divisor 0, or i64::MIN / -1 overflow.
        None => divisor == -1,
    }
}

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Classify `n` into its fizzbuzz label.
///
/// - `"fizzbuzz"` if `n` is divisible by 15,
/// - else `"fizz"` if divisible by 3,
/// - else `"buzz"` if divisible by 5,
/// - else the base-10 representation of `n`.
#[must_use]
pub fn classify(n: i64) -> String {
    Label::of(n).to_string()
}

// =============================================================================
// TESTS
// =============================================================================
