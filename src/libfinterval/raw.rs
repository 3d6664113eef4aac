// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed interval of doubles, for callers that manage the rounding mode themselves.
//!
//! Every arithmetic operator of [`RawInterval`](struct.RawInterval.html) expects the rounding mode to be [`Upward`](../rounding/enum.RoundingMode.html) and never changes it (except `sqrt` which temporarily rounds downward for its lower bound). Upper bounds are computed directly; a lower bound is the negation of the upper bound of the negated operands, which rounding toward +infinity turns into a bound rounded toward -infinity. Set the mode once around a whole computation:
//!
//! ```rust
//! use finterval::rounding::RoundingGuard;
//! use finterval::RawInterval;
//!
//! let x = RawInterval::new(0.1, 0.2);
//! let y = RawInterval::new(-3.0, 1.0);
//! let r = {
//!   let _guard = RoundingGuard::upward();
//!   (x * y + x.square()).sqrt()
//! };
//! assert_eq!(r.inf(), 0.0);
//! ```
//!
//! Arithmetic never fails: a divisor interval containing zero yields the whole real line. Comparisons answer only when the bounds decide them and otherwise return [`UnsafeComparison`](../uncertain/struct.UnsafeComparison.html).
//!
//! `==` on `RawInterval` is the structural identity of the bounds (`is_same`). The comparison of the enclosed numbers is `try_eq`.

use crate::directed;
use crate::ops::{Hull, Range, Whole};
use crate::rounding::{self, RoundingMode};
use crate::uncertain::*;
use gcollections::kind::Collection;
use gcollections::ops::{Bounded, Contains, Disjoint, Intersection, Overlap, Singleton, Subset, Union};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RawInterval {
  lo: f64,
  hi: f64
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Region {
  NonNegative,
  NonPositive,
  Straddling
}

impl RawInterval
{
  /// Smallest interval strictly containing zero.
  pub const SMALLEST: RawInterval = RawInterval { lo: -5e-324, hi: 5e-324 };
  /// `[-inf, +inf]`
  pub const LARGEST: RawInterval = RawInterval { lo: f64::NEG_INFINITY, hi: f64::INFINITY };

  /// Panics if `lo > hi` or if a bound is NaN.
  pub fn new(lo: f64, hi: f64) -> RawInterval {
    assert!(lo <= hi,
      "Cannot build an interval with the lower bound {} above the upper bound {} (variable used before being initialized?).", lo, hi);
    RawInterval::from_bounds(lo, hi)
  }

  pub fn point(x: f64) -> RawInterval {
    RawInterval::from_bounds(x, x)
  }

  pub(crate) const fn from_bounds(lo: f64, hi: f64) -> RawInterval {
    RawInterval { lo: lo, hi: hi }
  }

  pub fn inf(&self) -> f64 {
    self.lo
  }

  pub fn sup(&self) -> f64 {
    self.hi
  }

  pub fn is_point(&self) -> bool {
    self.hi == self.lo
  }

  pub fn is_same(&self, other: &RawInterval) -> bool {
    self.lo == other.lo && self.hi == other.hi
  }

  pub fn overlap(&self, other: &RawInterval) -> bool {
    !(other.lo > self.hi || other.hi < self.lo)
  }

  /// Both bounds are numbers and ordered.
  pub fn is_valid(&self) -> bool {
    !self.lo.is_nan() && !self.hi.is_nan() && self.lo <= self.hi
  }

  pub fn is_finite(&self) -> bool {
    self.lo.is_finite() && self.hi.is_finite()
  }

  /// Midpoint of the bounds. It is only an approximation and must not be used to take decisions.
  pub fn to_f64(&self) -> f64 {
    (self.hi + self.lo) * 0.5
  }

  fn region(&self) -> Region {
    if self.lo >= 0.0 { Region::NonNegative }
    else if self.hi <= 0.0 { Region::NonPositive }
    else { Region::Straddling }
  }

  /// The enclosed numbers of `self` are all smaller than those of `other`.
  ///
  /// `other` is an interval, a reference to one, or a `f64` taken as a point.
  pub fn try_lt<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    let other = other.to_interval();
    if self.hi < other.lo { Ok(true) }
    else if self.lo >= other.hi { Ok(false) }
    else { UnsafeComparison::raise() }
  }

  pub fn try_le<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    let other = other.to_interval();
    if self.hi <= other.lo { Ok(true) }
    else if self.lo > other.hi { Ok(false) }
    else { UnsafeComparison::raise() }
  }

  pub fn try_gt<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    other.to_interval().try_lt(self)
  }

  pub fn try_ge<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    other.to_interval().try_le(self)
  }

  /// Decides equality only for disjoint intervals (`false`) or the same point (`true`).
  pub fn try_eq<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    let other = other.to_interval();
    if other.lo > self.hi || other.hi < self.lo { Ok(false) }
    else if other.lo == self.hi && other.hi == self.lo { Ok(true) }
    else { UnsafeComparison::raise() }
  }

  pub fn try_ne<T: ToInterval>(&self, other: T) -> Uncertain<bool> {
    self.try_eq(other).map(|eq| !eq)
  }

  pub fn sign(&self) -> Uncertain<Sign> {
    if self.lo > 0.0 { Ok(Sign::Positive) }
    else if self.hi < 0.0 { Ok(Sign::Negative) }
    else if self.lo == self.hi { Ok(Sign::Zero) }
    else { UnsafeComparison::raise() }
  }

  /// Three-way comparison of the enclosed numbers.
  pub fn compare<T: ToInterval>(&self, other: T) -> Uncertain<Ordering> {
    let other = other.to_interval();
    if self.lo > other.hi { Ok(Ordering::Greater) }
    else if other.lo > self.hi { Ok(Ordering::Less) }
    else if other.lo == self.hi && self.lo == other.hi { Ok(Ordering::Equal) }
    else { UnsafeComparison::raise() }
  }

  /// Square root; the lower bound is 0 when `inf() <= 0`.
  ///
  /// A negative lower bound is taken as a roundoff error around zero. A wholly negative interval is a caller error and gives an invalid interval (NaN upper bound).
  pub fn sqrt(&self) -> RawInterval {
    rounding::assert_upward();
    let previous = rounding::get_and_set(RoundingMode::Downward);
    let lo = if self.lo > 0.0 { directed::sqrt(self.lo) } else { 0.0 };
    rounding::set(previous);
    RawInterval::from_bounds(lo, directed::sqrt(self.hi))
  }

  pub fn square(&self) -> RawInterval {
    rounding::assert_upward();
    match self.region() {
      Region::NonNegative => RawInterval::from_bounds(lo_mul(self.lo, self.lo), hi_mul(self.hi, self.hi)),
      Region::NonPositive => RawInterval::from_bounds(lo_mul(self.hi, self.hi), hi_mul(self.lo, self.lo)),
      Region::Straddling => {
        let m = (-self.lo).max(self.hi);
        RawInterval::from_bounds(0.0, hi_mul(m, m))
      }
    }
  }

  pub fn abs(&self) -> RawInterval {
    match self.region() {
      Region::NonNegative => *self,
      Region::NonPositive => -*self,
      Region::Straddling => RawInterval::from_bounds(0.0, (-self.lo).max(self.hi))
    }
  }

  /// Bound-wise minimum: encloses `min(x, y)` for `x` in `self` and `y` in `other`.
  pub fn min(&self, other: &RawInterval) -> RawInterval {
    RawInterval::from_bounds(self.lo.min(other.lo), self.hi.min(other.hi))
  }

  pub fn max(&self, other: &RawInterval) -> RawInterval {
    RawInterval::from_bounds(self.lo.max(other.lo), self.hi.max(other.hi))
  }

  /// Union of the two ranges, exact.
  pub fn join(&self, other: &RawInterval) -> RawInterval {
    RawInterval::from_bounds(self.lo.min(other.lo), self.hi.max(other.hi))
  }

  /// Intersection of the two ranges, exact. Only meaningful when they overlap.
  pub fn meet(&self, other: &RawInterval) -> RawInterval {
    debug_assert!(self.overlap(other), "Meet of the disjoint intervals {:?} and {:?}.", self, other);
    RawInterval::from_bounds(self.lo.max(other.lo), self.hi.min(other.hi))
  }
}

// With the rounding mode upward: `mul` rounds up, `-mul(-x, y)` rounds down.
fn hi_mul(x: f64, y: f64) -> f64 { directed::mul(x, y) }
fn lo_mul(x: f64, y: f64) -> f64 { -directed::mul(-x, y) }
fn hi_div(x: f64, y: f64) -> f64 { directed::div(x, y) }
fn lo_div(x: f64, y: f64) -> f64 { -directed::div(-x, y) }

impl<'a> Neg for &'a RawInterval {
  type Output = RawInterval;

  fn neg(self) -> RawInterval {
    RawInterval::from_bounds(-self.hi, -self.lo)
  }
}

impl Neg for RawInterval {
  type Output = RawInterval;

  fn neg(self) -> RawInterval {
    -&self
  }
}

impl<'a, 'b> Add<&'b RawInterval> for &'a RawInterval {
  type Output = RawInterval;

  fn add(self, other: &RawInterval) -> RawInterval {
    rounding::assert_upward();
    RawInterval::from_bounds(
      -directed::add(-self.lo, -other.lo),
      directed::add(self.hi, other.hi))
  }
}

impl<'a, 'b> Sub<&'b RawInterval> for &'a RawInterval {
  type Output = RawInterval;

  fn sub(self, other: &RawInterval) -> RawInterval {
    rounding::assert_upward();
    RawInterval::from_bounds(
      -directed::sub(other.hi, self.lo),
      directed::sub(self.hi, other.lo))
  }
}

impl<'a, 'b> Mul<&'b RawInterval> for &'a RawInterval {
  type Output = RawInterval;

  fn mul(self, other: &RawInterval) -> RawInterval {
    rounding::assert_upward();
    let (a, b) = (self, other);
    match (a.region(), b.region()) {
      (Region::NonNegative, Region::NonNegative) => RawInterval::from_bounds(lo_mul(a.lo, b.lo), hi_mul(a.hi, b.hi)),
      (Region::NonNegative, Region::NonPositive) => RawInterval::from_bounds(lo_mul(a.hi, b.lo), hi_mul(a.lo, b.hi)),
      (Region::NonNegative, Region::Straddling) => RawInterval::from_bounds(lo_mul(a.hi, b.lo), hi_mul(a.hi, b.hi)),
      (Region::NonPositive, Region::NonNegative) => RawInterval::from_bounds(lo_mul(a.lo, b.hi), hi_mul(a.hi, b.lo)),
      (Region::NonPositive, Region::NonPositive) => RawInterval::from_bounds(lo_mul(a.hi, b.hi), hi_mul(a.lo, b.lo)),
      (Region::NonPositive, Region::Straddling) => RawInterval::from_bounds(lo_mul(a.lo, b.hi), hi_mul(a.lo, b.lo)),
      (Region::Straddling, Region::NonNegative) => RawInterval::from_bounds(lo_mul(a.lo, b.hi), hi_mul(a.hi, b.hi)),
      (Region::Straddling, Region::NonPositive) => RawInterval::from_bounds(lo_mul(a.hi, b.lo), hi_mul(a.lo, b.lo)),
      (Region::Straddling, Region::Straddling) => {
        // Both contain zero: each bound has two candidates.
        let lo = lo_mul(a.lo, b.hi).min(lo_mul(a.hi, b.lo));
        let hi = hi_mul(a.lo, b.lo).max(hi_mul(a.hi, b.hi));
        RawInterval::from_bounds(lo, hi)
      }
    }
  }
}

impl<'a, 'b> Div<&'b RawInterval> for &'a RawInterval {
  type Output = RawInterval;

  fn div(self, other: &RawInterval) -> RawInterval {
    rounding::assert_upward();
    let (a, b) = (self, other);
    if b.lo > 0.0 {
      match a.region() {
        Region::NonNegative => RawInterval::from_bounds(lo_div(a.lo, b.hi), hi_div(a.hi, b.lo)),
        Region::NonPositive => RawInterval::from_bounds(lo_div(a.lo, b.lo), hi_div(a.hi, b.hi)),
        Region::Straddling => RawInterval::from_bounds(lo_div(a.lo, b.lo), hi_div(a.hi, b.lo))
      }
    }
    else if b.hi < 0.0 {
      match a.region() {
        Region::NonNegative => RawInterval::from_bounds(lo_div(a.hi, b.hi), hi_div(a.lo, b.lo)),
        Region::NonPositive => RawInterval::from_bounds(lo_div(a.hi, b.lo), hi_div(a.lo, b.hi)),
        Region::Straddling => RawInterval::from_bounds(lo_div(a.hi, b.hi), hi_div(a.lo, b.hi))
      }
    }
    else {
      // The divisor might be zero.
      RawInterval::LARGEST
    }
  }
}

forward_all_binop!(impl Add for RawInterval, add, AddAssign, add_assign);
forward_all_binop!(impl Sub for RawInterval, sub, SubAssign, sub_assign);
forward_all_binop!(impl Mul for RawInterval, mul, MulAssign, mul_assign);
forward_all_binop!(impl Div for RawInterval, div, DivAssign, div_assign);

scalar_binop_via_point!(impl Add for RawInterval, add);
scalar_binop_via_point!(impl Sub for RawInterval, sub);

impl Mul<f64> for RawInterval {
  type Output = RawInterval;

  fn mul(self, d: f64) -> RawInterval {
    rounding::assert_upward();
    if d >= 0.0 { RawInterval::from_bounds(lo_mul(self.lo, d), hi_mul(self.hi, d)) }
    else { RawInterval::from_bounds(lo_mul(self.hi, d), hi_mul(self.lo, d)) }
  }
}

impl Mul<RawInterval> for f64 {
  type Output = RawInterval;

  fn mul(self, t: RawInterval) -> RawInterval {
    t * self
  }
}

impl Div<f64> for RawInterval {
  type Output = RawInterval;

  fn div(self, d: f64) -> RawInterval {
    rounding::assert_upward();
    if d > 0.0 { RawInterval::from_bounds(lo_div(self.lo, d), hi_div(self.hi, d)) }
    else if d < 0.0 { RawInterval::from_bounds(lo_div(self.hi, d), hi_div(self.lo, d)) }
    else { RawInterval::LARGEST }
  }
}

impl Div<RawInterval> for f64 {
  type Output = RawInterval;

  fn div(self, t: RawInterval) -> RawInterval {
    rounding::assert_upward();
    if t.lo <= 0.0 && t.hi >= 0.0 {
      RawInterval::LARGEST
    }
    else if self >= 0.0 {
      RawInterval::from_bounds(lo_div(self, t.hi), hi_div(self, t.lo))
    }
    else {
      RawInterval::from_bounds(lo_div(self, t.lo), hi_div(self, t.hi))
    }
  }
}

impl<'a, 'b> BitOr<&'b RawInterval> for &'a RawInterval {
  type Output = RawInterval;

  fn bitor(self, other: &RawInterval) -> RawInterval {
    self.join(other)
  }
}

impl<'a, 'b> BitAnd<&'b RawInterval> for &'a RawInterval {
  type Output = RawInterval;

  fn bitand(self, other: &RawInterval) -> RawInterval {
    self.meet(other)
  }
}

forward_all_binop!(impl BitOr for RawInterval, bitor);
forward_all_binop!(impl BitAnd for RawInterval, bitand);

impl From<f64> for RawInterval {
  fn from(x: f64) -> RawInterval {
    RawInterval::point(x)
  }
}

macro_rules! exact_from_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl From<$t> for RawInterval {
      fn from(x: $t) -> RawInterval {
        RawInterval::point(f64::from(x))
      }
    }
  )*}
}

exact_from_impl!(f32, i8, u8, i16, u16, i32, u32);

// 64-bit integers are not all representable: enclose the ones that are not.
macro_rules! enclosing_from_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl From<$t> for RawInterval {
      fn from(x: $t) -> RawInterval {
        let f = x as f64;
        let exact = x as i128;
        let rounded = f as i128;
        if rounded == exact { RawInterval::point(f) }
        else if rounded > exact { RawInterval::from_bounds(f.next_down(), f) }
        else { RawInterval::from_bounds(f, f.next_up()) }
      }
    }
  )*}
}

enclosing_from_impl!(i64, u64);

pub trait ToInterval {
  fn to_interval(self) -> RawInterval;
}

impl ToInterval for RawInterval {
  fn to_interval(self) -> RawInterval { self }
}

impl<'a> ToInterval for &'a RawInterval {
  fn to_interval(self) -> RawInterval { *self }
}

impl ToInterval for (f64, f64) {
  fn to_interval(self) -> RawInterval {
    let (a, b) = self;
    RawInterval::new(a, b)
  }
}

impl ToInterval for f64 {
  fn to_interval(self) -> RawInterval {
    RawInterval::point(self)
  }
}

impl Zero for RawInterval {
  fn zero() -> RawInterval {
    RawInterval::point(0.0)
  }

  fn is_zero(&self) -> bool {
    self.lo == 0.0 && self.hi == 0.0
  }
}

impl One for RawInterval {
  fn one() -> RawInterval {
    RawInterval::point(1.0)
  }
}

impl Collection for RawInterval {
  type Item = f64;
}

impl Bounded for RawInterval {
  fn lower(&self) -> f64 {
    self.lo
  }

  fn upper(&self) -> f64 {
    self.hi
  }
}

impl Singleton for RawInterval {
  fn singleton(x: f64) -> RawInterval {
    RawInterval::point(x)
  }
}

impl Contains for RawInterval {
  fn contains(&self, value: &f64) -> bool {
    self.lo <= *value && *value <= self.hi
  }
}

impl Overlap for RawInterval {
  fn overlap(&self, other: &RawInterval) -> bool {
    RawInterval::overlap(self, other)
  }
}

impl Disjoint for RawInterval {
  fn is_disjoint(&self, other: &RawInterval) -> bool {
    !RawInterval::overlap(self, other)
  }
}

impl Subset for RawInterval {
  fn is_subset(&self, other: &RawInterval) -> bool {
    self.lo >= other.lo && self.hi <= other.hi
  }
}

impl Union for RawInterval {
  type Output = RawInterval;

  fn union(&self, other: &RawInterval) -> RawInterval {
    self.join(other)
  }
}

impl Intersection for RawInterval {
  type Output = RawInterval;

  fn intersection(&self, other: &RawInterval) -> RawInterval {
    self.meet(other)
  }
}

impl Hull for RawInterval {
  type Output = RawInterval;

  fn hull(&self, other: &RawInterval) -> RawInterval {
    self.join(other)
  }
}

impl Whole for RawInterval {
  fn whole() -> RawInterval {
    RawInterval::LARGEST
  }
}

impl Range for RawInterval {
  fn new(lb: f64, ub: f64) -> RawInterval {
    RawInterval::new(lb, ub)
  }
}
