// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rounding-mode control.
//!
//! The rounding mode is a per-thread state describing how the kernels of the [directed](../directed/index.html) module round their results. It starts as `ToNearest` on every thread. Nothing here touches the hardware control word: the compiler assumes round-to-nearest everywhere, so the directed rounding is emulated exactly in software.
//!
//! The raw interval operators expect the mode to be `Upward`. The usual way to provide it is a [`RoundingGuard`](struct.RoundingGuard.html) around the whole computation:
//!
//! ```rust
//! use finterval::rounding::{self, RoundingGuard, RoundingMode};
//! use finterval::RawInterval;
//!
//! let sum = {
//!   let _guard = RoundingGuard::upward();
//!   RawInterval::new(1.0, 2.0) + RawInterval::new(0.1, 0.2)
//! };
//! assert_eq!(rounding::get(), RoundingMode::ToNearest);
//! assert!(sum.inf() <= 1.1 && sum.sup() >= 2.2);
//! ```

use std::cell::Cell;
use std::marker::PhantomData;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum RoundingMode {
  ToNearest,
  /// Toward +infinity.
  Upward,
  /// Toward -infinity.
  Downward
}

impl Default for RoundingMode {
  fn default() -> RoundingMode {
    RoundingMode::ToNearest
  }
}

thread_local! {
  static MODE: Cell<RoundingMode> = Cell::new(RoundingMode::ToNearest);
}

/// Current rounding mode of the calling thread.
pub fn get() -> RoundingMode {
  MODE.with(|m| m.get())
}

pub fn set(mode: RoundingMode) {
  MODE.with(|m| m.set(mode));
}

/// Installs `mode` and returns the mode that was in effect before.
pub fn get_and_set(mode: RoundingMode) -> RoundingMode {
  MODE.with(|m| m.replace(mode))
}

/// Installs a rounding mode for the lifetime of the guard and restores the previous one when dropped.
///
/// The mode is thread-local, so the guard cannot be sent to another thread.
#[must_use = "the previous rounding mode is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct RoundingGuard {
  previous: RoundingMode,
  _not_send: PhantomData<*const ()>
}

impl RoundingGuard {
  pub fn new(mode: RoundingMode) -> RoundingGuard {
    RoundingGuard {
      previous: get_and_set(mode),
      _not_send: PhantomData
    }
  }

  pub fn upward() -> RoundingGuard {
    RoundingGuard::new(RoundingMode::Upward)
  }

  /// The mode that will be restored on drop.
  pub fn previous(&self) -> RoundingMode {
    self.previous
  }
}

impl Drop for RoundingGuard {
  fn drop(&mut self) {
    set(self.previous);
  }
}

/// Runs `f` with `mode` installed, restoring the previous mode afterwards.
pub fn with_rounding<F, R>(mode: RoundingMode, f: F) -> R where
 F: FnOnce() -> R
{
  let _guard = RoundingGuard::new(mode);
  f()
}

/// Checks the precondition of the raw interval operators.
#[inline]
pub(crate) fn assert_upward() {
  if cfg!(feature = "checked-rounding") {
    assert_eq!(get(), RoundingMode::Upward,
      "Raw interval operators require the rounding mode to be set toward +infinity.");
  }
  else {
    debug_assert_eq!(get(), RoundingMode::Upward,
      "Raw interval operators require the rounding mode to be set toward +infinity.");
  }
}
