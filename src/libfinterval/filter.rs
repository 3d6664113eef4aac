// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Filtered evaluation of predicates.
//!
//! A filtered predicate is evaluated first with raw intervals, all of it under one upward [rounding guard](../rounding/struct.RoundingGuard.html). Only when that evaluation hits an [`UnsafeComparison`](../uncertain/struct.UnsafeComparison.html) is the exact (and slower) evaluation run.
//!
//! ```rust
//! use finterval::filter::Filter;
//! use finterval::{RawInterval, Sign};
//!
//! static DET2: Filter = Filter::new("det2");
//!
//! fn det2_sign(a: f64, b: f64, c: f64, d: f64) -> Sign {
//!   DET2.eval(
//!     || (RawInterval::from(a) * RawInterval::from(d) - RawInterval::from(b) * RawInterval::from(c)).sign(),
//!     || Sign::from((a * d).partial_cmp(&(b * c)).unwrap()))
//! }
//!
//! assert_eq!(det2_sign(1.0, 2.0, 3.0, 4.0), Sign::Negative);
//! assert_eq!(DET2.calls(), 1);
//! assert_eq!(DET2.failures(), 0);
//! ```

use crate::rounding::RoundingGuard;
use crate::uncertain::{FailureCounter, Uncertain};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Runs `fast` under an upward rounding guard and returns its value, or the value of `exact` if `fast` could not decide.
pub fn filtered<T, F, E>(fast: F, exact: E) -> T where
 F: FnOnce() -> Uncertain<T>,
 E: FnOnce() -> T
{
  let res = {
    let _guard = RoundingGuard::upward();
    fast()
  };
  match res {
    Ok(value) => value,
    Err(_) => {
      log::debug!("interval filter undecided, falling back to the exact evaluation");
      exact()
    }
  }
}

/// A filtered predicate keeping its own statistics.
///
/// The failures are also counted on the process-wide counter by the comparison that raised them.
#[derive(Debug)]
pub struct Filter {
  name: &'static str,
  calls: AtomicUsize,
  failures: FailureCounter
}

impl Filter {
  pub const fn new(name: &'static str) -> Filter {
    Filter {
      name: name,
      calls: AtomicUsize::new(0),
      failures: FailureCounter::new()
    }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn eval<T, F, E>(&self, fast: F, exact: E) -> T where
   F: FnOnce() -> Uncertain<T>,
   E: FnOnce() -> T
  {
    self.calls.fetch_add(1, Ordering::Relaxed);
    let failures = &self.failures;
    let name = self.name;
    filtered(|| failures.record(fast()), || {
      log::debug!("filter `{}` falls back to its exact evaluation", name);
      exact()
    })
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::Relaxed)
  }

  /// Number of evaluations that needed the exact path.
  pub fn failures(&self) -> usize {
    self.failures.get()
  }

  /// Clears the statistics and returns `(calls, failures)` as they were.
  pub fn reset(&self) -> (usize, usize) {
    (self.calls.swap(0, Ordering::Relaxed), self.failures.reset())
  }
}
