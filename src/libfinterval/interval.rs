// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed interval of doubles usable anywhere, whatever the current rounding mode.
//!
//! Each operator of [`Interval`](struct.Interval.html) installs the upward rounding mode, delegates to [`RawInterval`](../raw/struct.RawInterval.html) and restores the previous mode before returning. The bounds are identical to the ones of the raw type computed under a single guard; only the number of mode switches differs.
//!
//! # Examples
//!
//! ```rust
//! use finterval::{Interval, Sign, UnsafeComparison};
//!
//! let a = Interval::new(1.0, 2.0);
//! let b = Interval::new(3.0, 4.0);
//! assert_eq!(a + b, Interval::new(4.0, 6.0));
//! assert_eq!((a * b).sign(), Ok(Sign::Positive));
//! assert_eq!((a - b / 2.0).sign(), Err(UnsafeComparison));
//! ```
//!
//! # See also
//! [raw](../raw/index.html)

use crate::ops::{Hull, Range, Whole};
use crate::raw::{RawInterval, ToInterval};
use crate::rounding::RoundingGuard;
use crate::uncertain::*;
use gcollections::kind::Collection;
use gcollections::ops::{Bounded, Contains, Disjoint, Intersection, Overlap, Singleton, Subset, Union};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Interval {
  raw: RawInterval
}

impl Interval
{
  /// Smallest interval strictly containing zero.
  pub const SMALLEST: Interval = Interval { raw: RawInterval::SMALLEST };
  pub const LARGEST: Interval = Interval { raw: RawInterval::LARGEST };

  /// Panics if `lo > hi` or if a bound is NaN.
  pub fn new(lo: f64, hi: f64) -> Interval {
    Interval { raw: RawInterval::new(lo, hi) }
  }

  pub fn point(x: f64) -> Interval {
    Interval { raw: RawInterval::point(x) }
  }

  pub fn raw(&self) -> RawInterval {
    self.raw
  }

  pub fn inf(&self) -> f64 {
    self.raw.inf()
  }

  pub fn sup(&self) -> f64 {
    self.raw.sup()
  }

  pub fn is_point(&self) -> bool {
    self.raw.is_point()
  }

  pub fn is_same(&self, other: &Interval) -> bool {
    self.raw.is_same(&other.raw)
  }

  pub fn overlap(&self, other: &Interval) -> bool {
    self.raw.overlap(&other.raw)
  }

  pub fn is_valid(&self) -> bool {
    self.raw.is_valid()
  }

  pub fn is_finite(&self) -> bool {
    self.raw.is_finite()
  }

  /// Approximate midpoint, never to be used for decisions.
  pub fn to_f64(&self) -> f64 {
    self.raw.to_f64()
  }

  /// Comparisons accept an interval of either kind, a reference to one, or a `f64`.
  pub fn try_lt<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    self.raw.try_lt(other)
  }

  pub fn try_le<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    self.raw.try_le(other)
  }

  pub fn try_gt<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    self.raw.try_gt(other)
  }

  pub fn try_ge<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    self.raw.try_ge(other)
  }

  pub fn try_eq<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    self.raw.try_eq(other)
  }

  pub fn try_ne<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    self.raw.try_ne(other)
  }

  pub fn sign(&self) -> Uncertain<Sign> {
    self.raw.sign()
  }

  pub fn compare<T: ToInterval>(&self, other: T) -> Uncertain<Ordering> {
    self.raw.compare(other)
  }

  pub fn sqrt(&self) -> Interval {
    let _guard = RoundingGuard::upward();
    Interval::from(self.raw.sqrt())
  }

  pub fn square(&self) -> Interval {
    let _guard = RoundingGuard::upward();
    Interval::from(self.raw.square())
  }

  pub fn abs(&self) -> Interval {
    Interval::from(self.raw.abs())
  }

  pub fn min(&self, other: &Interval) -> Interval {
    Interval::from(self.raw.min(&other.raw))
  }

  pub fn max(&self, other: &Interval) -> Interval {
    Interval::from(self.raw.max(&other.raw))
  }

  pub fn join(&self, other: &Interval) -> Interval {
    Interval::from(self.raw.join(&other.raw))
  }

  pub fn meet(&self, other: &Interval) -> Interval {
    Interval::from(self.raw.meet(&other.raw))
  }
}

impl From<RawInterval> for Interval {
  fn from(raw: RawInterval) -> Interval {
    Interval { raw: raw }
  }
}

impl From<Interval> for RawInterval {
  fn from(i: Interval) -> RawInterval {
    i.raw
  }
}

impl ToInterval for Interval {
  fn to_interval(self) -> RawInterval {
    self.raw
  }
}

impl<'a> ToInterval for &'a Interval {
  fn to_interval(self) -> RawInterval {
    self.raw
  }
}

macro_rules! from_number_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl From<$t> for Interval {
      fn from(x: $t) -> Interval {
        Interval::from(RawInterval::from(x))
      }
    }
  )*}
}

from_number_impl!(f64, f32, i8, u8, i16, u16, i32, u32, i64, u64);

impl<'a> Neg for &'a Interval {
  type Output = Interval;

  fn neg(self) -> Interval {
    Interval::from(-self.raw)
  }
}

impl Neg for Interval {
  type Output = Interval;

  fn neg(self) -> Interval {
    -&self
  }
}

// Every rounded operation runs inside its own upward guard.
macro_rules! guarded_binop {
  ( $( $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident );* ) =>
  {$(
    impl<'a, 'b> $imp<&'b Interval> for &'a Interval {
      type Output = Interval;

      fn $method(self, other: &Interval) -> Interval {
        let _guard = RoundingGuard::upward();
        Interval::from(self.raw.$method(other.raw))
      }
    }

    forward_all_binop!(impl $imp for Interval, $method, $assign_imp, $assign_method);

    impl $imp<f64> for Interval {
      type Output = Interval;

      fn $method(self, d: f64) -> Interval {
        let _guard = RoundingGuard::upward();
        Interval::from(self.raw.$method(d))
      }
    }

    impl $imp<Interval> for f64 {
      type Output = Interval;

      fn $method(self, t: Interval) -> Interval {
        let _guard = RoundingGuard::upward();
        Interval::from(self.$method(t.raw))
      }
    }
  )*}
}

guarded_binop! {
  Add, add, AddAssign, add_assign;
  Sub, sub, SubAssign, sub_assign;
  Mul, mul, MulAssign, mul_assign;
  Div, div, DivAssign, div_assign
}

impl<'a, 'b> BitOr<&'b Interval> for &'a Interval {
  type Output = Interval;

  fn bitor(self, other: &Interval) -> Interval {
    self.join(other)
  }
}

impl<'a, 'b> BitAnd<&'b Interval> for &'a Interval {
  type Output = Interval;

  fn bitand(self, other: &Interval) -> Interval {
    self.meet(other)
  }
}

forward_all_binop!(impl BitOr for Interval, bitor);
forward_all_binop!(impl BitAnd for Interval, bitand);

impl Zero for Interval {
  fn zero() -> Interval {
    Interval::point(0.0)
  }

  fn is_zero(&self) -> bool {
    self.raw.is_zero()
  }
}

impl One for Interval {
  fn one() -> Interval {
    Interval::point(1.0)
  }
}

impl Collection for Interval {
  type Item = f64;
}

impl Bounded for Interval {
  fn lower(&self) -> f64 {
    self.inf()
  }

  fn upper(&self) -> f64 {
    self.sup()
  }
}

impl Singleton for Interval {
  fn singleton(x: f64) -> Interval {
    Interval::point(x)
  }
}

impl Contains for Interval {
  fn contains(&self, value: &f64) -> bool {
    self.raw.contains(value)
  }
}

impl Overlap for Interval {
  fn overlap(&self, other: &Interval) -> bool {
    self.raw.overlap(&other.raw)
  }
}

impl Disjoint for Interval {
  fn is_disjoint(&self, other: &Interval) -> bool {
    self.raw.is_disjoint(&other.raw)
  }
}

impl Subset for Interval {
  fn is_subset(&self, other: &Interval) -> bool {
    self.raw.is_subset(&other.raw)
  }
}

impl Union for Interval {
  type Output = Interval;

  fn union(&self, other: &Interval) -> Interval {
    self.join(other)
  }
}

impl Intersection for Interval {
  type Output = Interval;

  fn intersection(&self, other: &Interval) -> Interval {
    self.meet(other)
  }
}

impl Hull for Interval {
  type Output = Interval;

  fn hull(&self, other: &Interval) -> Interval {
    self.join(other)
  }
}

impl Whole for Interval {
  fn whole() -> Interval {
    Interval::LARGEST
  }
}

impl Range for Interval {
  fn new(lb: f64, ub: f64) -> Interval {
    Interval::new(lb, ub)
  }
}
