//! The three summation strategies.
//!
//! Each strategy computes the nth triangular number, the sum of the
//! integers from 1 to `n`, and exists to demonstrate a different
//! complexity class for the same result:
//!
//! - [`sum_closed_form`]: constant time, constant space
//! - [`sum_iterative`]: linear time, constant space
//! - [`sum_recursive`]: linear time, linear auxiliary space
//!
//! The functions are free and pure; [`Strategy`] only routes between them
//! for the CLI flag, the settings file, and the compare command.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Sum of `1..=n` by the triangular-number formula `n * (n + 1) / 2`.
///
/// Exact for `n <= u32::MAX`. Beyond that the intermediate product
/// `n * (n + 1)` no longer fits in a `u64` and the multiplication
/// overflows (panic in debug builds, wrap in release). The bound follows
/// from solving `n * (n + 1) <= u64::MAX` for `n`. Overflow is not
/// guarded; callers own the range of `n`.
pub fn sum_closed_form(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Sum of `1..=n` by loop accumulation. Linear time, constant space.
pub fn sum_iterative(n: u64) -> u64 {
    let mut total = 0u64;
    for i in 1..=n {
        total += i;
    }
    total
}

/// Sum of `1..=n` by the recursive definition
/// `sum(n) = n + sum(n - 1)` with base case `sum(0) = 0`.
///
/// The call stack is kept explicit on the heap: the descent pushes one
/// frame per pending addend, then the unwind pops them back into the
/// accumulator. This preserves the definition's O(n) auxiliary space
/// while an `n` of 100000 grows a `Vec` instead of overflowing the
/// machine stack.
pub fn sum_recursive(n: u64) -> u64 {
    let mut frames = Vec::new();
    let mut remaining = n;
    // Descent: each sum(k) suspends until sum(k - 1) is known.
    while remaining > 0 {
        frames.push(remaining);
        remaining -= 1;
    }
    // Base case reached: sum(0) = 0. Unwind the pending frames.
    let mut total = 0u64;
    while let Some(addend) = frames.pop() {
        total += addend;
    }
    total
}

/// The computing method, as named on the command line and in settings.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Triangular-number formula, constant time.
    #[default]
    ClosedForm,
    /// Loop accumulation, linear time, constant space.
    Iterative,
    /// Recursive definition on an explicit frame stack, linear space.
    Recursive,
}

/// Every strategy, in the order the compare command reports them.
pub const ALL_STRATEGIES: [Strategy; 3] =
    [Strategy::ClosedForm, Strategy::Iterative, Strategy::Recursive];

impl Strategy {
    /// Compute the sum of `1..=n` with this strategy.
    pub fn apply(self, n: u64) -> u64 {
        match self {
            Self::ClosedForm => sum_closed_form(n),
            Self::Iterative => sum_iterative(n),
            Self::Recursive => sum_recursive(n),
        }
    }

    /// The kebab-case name used by the CLI flag and the settings file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClosedForm => "closed-form",
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
