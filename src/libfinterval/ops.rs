// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval specific operations.
//!
//! The set-like operations (`Union` as join, `Intersection` as meet, `Contains`, `Subset`, `Overlap`, ...) come from `gcollections` and are implemented by both interval types.

/// Smallest interval enclosing both operands.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Range
{
  /// Builds `[lb, ub]`; panics if `lb > ub`.
  fn new(lb: f64, ub: f64) -> Self;
}

/// `[-inf, +inf]`
pub trait Whole
{
  fn whole() -> Self;
}
