// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Results of comparisons that bounds alone might not decide.
//!
//! A comparison between two overlapping intervals cannot tell how the enclosed real numbers compare. Instead of answering anyway, it returns [`UnsafeComparison`](struct.UnsafeComparison.html) and increments the process-wide [failure counter](fn.failures.html). The caller is expected to recompute the same predicate with exact arithmetic.
//!
//! ```rust
//! use finterval::{RawInterval, UnsafeComparison};
//!
//! let a = RawInterval::new(1.0, 2.0);
//! let b = RawInterval::new(3.0, 4.0);
//! assert_eq!(a.try_lt(&b), Ok(true));
//! assert_eq!(b.try_lt(&a), Ok(false));
//! assert_eq!(a.try_lt(&RawInterval::new(1.5, 3.0)), Err(UnsafeComparison));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use trilean::SKleene;

/// The interval bounds overlap too much to decide a comparison.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Error)]
#[error("unsafe comparison: the interval bounds overlap")]
pub struct UnsafeComparison;

pub type Uncertain<T> = Result<T, UnsafeComparison>;

impl UnsafeComparison {
  /// Records an undecidable comparison on the process-wide counter and returns the signal.
  pub fn raise<T>() -> Uncertain<T> {
    let count = FAILURES.increment();
    log::trace!("undecidable interval comparison (failure #{})", count);
    Err(UnsafeComparison)
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Sign {
  Negative,
  Zero,
  Positive
}

impl Sign {
  pub fn is_positive(self) -> bool { self == Sign::Positive }
  pub fn is_negative(self) -> bool { self == Sign::Negative }
  pub fn is_zero(self) -> bool { self == Sign::Zero }
}

impl std::ops::Neg for Sign {
  type Output = Sign;
  fn neg(self) -> Sign {
    match self {
      Sign::Negative => Sign::Positive,
      Sign::Zero => Sign::Zero,
      Sign::Positive => Sign::Negative
    }
  }
}

impl std::ops::Mul for Sign {
  type Output = Sign;
  fn mul(self, rhs: Sign) -> Sign {
    match (self, rhs) {
      (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
      (a, b) if a == b => Sign::Positive,
      _ => Sign::Negative
    }
  }
}

impl From<std::cmp::Ordering> for Sign {
  fn from(ord: std::cmp::Ordering) -> Sign {
    match ord {
      std::cmp::Ordering::Less => Sign::Negative,
      std::cmp::Ordering::Equal => Sign::Zero,
      std::cmp::Ordering::Greater => Sign::Positive
    }
  }
}

/// Counts undecidable comparisons.
///
/// The increments are atomic so the count stays exact when several threads hit undecidable comparisons concurrently. The counter is never reset by this crate.
#[derive(Debug, Default)]
pub struct FailureCounter {
  count: AtomicUsize
}

impl FailureCounter {
  pub const fn new() -> FailureCounter {
    FailureCounter { count: AtomicUsize::new(0) }
  }

  pub fn get(&self) -> usize {
    self.count.load(Ordering::Relaxed)
  }

  /// Sets the counter back to zero and returns the count it had.
  pub fn reset(&self) -> usize {
    self.count.swap(0, Ordering::Relaxed)
  }

  /// Increments the counter and returns the new count.
  pub fn increment(&self) -> usize {
    self.count.fetch_add(1, Ordering::Relaxed) + 1
  }

  /// Increments this counter if `res` is undecided, and passes `res` through.
  ///
  /// Useful to keep a local tally for one kind of predicate alongside the process-wide one.
  pub fn record<T>(&self, res: Uncertain<T>) -> Uncertain<T> {
    if res.is_err() {
      self.increment();
    }
    res
  }
}

static FAILURES: FailureCounter = FailureCounter::new();

/// Process-wide count of undecidable comparisons, for diagnostics.
pub fn failures() -> &'static FailureCounter {
  &FAILURES
}

/// Three-valued view of an uncertain boolean.
pub trait Kleene {
  fn kleene(self) -> SKleene;
}

impl Kleene for Uncertain<bool> {
  fn kleene(self) -> SKleene {
    match self {
      Ok(true) => SKleene::True,
      Ok(false) => SKleene::False,
      Err(UnsafeComparison) => SKleene::Unknown
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn local_counter() {
    let counter = FailureCounter::new();
    assert_eq!(counter.get(), 0);
    assert_eq!(counter.record(Ok(true)), Ok(true));
    assert_eq!(counter.get(), 0);
    assert_eq!(counter.record::<bool>(Err(UnsafeComparison)), Err(UnsafeComparison));
    assert_eq!(counter.increment(), 2);
    assert_eq!(counter.reset(), 2);
    assert_eq!(counter.get(), 0);
  }

  #[test]
  fn raise_counts_globally() {
    let before = failures().get();
    let res: Uncertain<Sign> = UnsafeComparison::raise();
    assert_eq!(res, Err(UnsafeComparison));
    // Other tests may raise concurrently.
    assert!(failures().get() >= before + 1);
  }

  #[test]
  fn kleene_view() {
    let yes: Uncertain<bool> = Ok(true);
    let no: Uncertain<bool> = Ok(false);
    let unknown: Uncertain<bool> = Err(UnsafeComparison);
    assert_eq!(yes.kleene(), SKleene::True);
    assert_eq!(no.kleene(), SKleene::False);
    assert_eq!(unknown.kleene(), SKleene::Unknown);
  }

  #[test]
  fn sign_algebra() {
    assert_eq!(-Sign::Positive, Sign::Negative);
    assert_eq!(-Sign::Zero, Sign::Zero);
    assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
    assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
    assert_eq!(Sign::Zero * Sign::Positive, Sign::Zero);
    assert_eq!(Sign::from(std::cmp::Ordering::Less), Sign::Negative);
    assert!(Sign::Positive.is_positive() && Sign::Negative.is_negative() && Sign::Zero.is_zero());
  }

  #[test]
  fn error_message() {
    assert_eq!(UnsafeComparison.to_string(), "unsafe comparison: the interval bounds overlap");
  }
}
