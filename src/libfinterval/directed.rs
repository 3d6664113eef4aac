// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Floating-point kernels with directed rounding.
//!
//! `add`, `sub`, `mul`, `div` and `sqrt` round according to the [current rounding mode](../rounding/index.html). The `*_up` and `*_down` kernels round in a fixed direction.
//!
//! Every kernel first computes the round-to-nearest result and then recovers the exact error of that operation (TwoSum for addition, a fused multiply-add residual otherwise). The nearest result is kept when it is exact or already on the requested side, and moved by one ulp otherwise. The residuals are exact as long as no intermediate value underflows; below `UNDERFLOW_GUARD` the kernels step unconditionally, which is still a valid directed bound.

use crate::rounding::{self, RoundingMode};

/// Results (and dividends) smaller than this in magnitude may have inexact residuals.
const UNDERFLOW_GUARD: f64 = 1e-290;

pub fn add(a: f64, b: f64) -> f64 {
  match rounding::get() {
    RoundingMode::ToNearest => a + b,
    RoundingMode::Upward => add_up(a, b),
    RoundingMode::Downward => add_down(a, b)
  }
}

pub fn sub(a: f64, b: f64) -> f64 {
  add(a, -b)
}

pub fn mul(a: f64, b: f64) -> f64 {
  match rounding::get() {
    RoundingMode::ToNearest => a * b,
    RoundingMode::Upward => mul_up(a, b),
    RoundingMode::Downward => mul_down(a, b)
  }
}

pub fn div(a: f64, b: f64) -> f64 {
  match rounding::get() {
    RoundingMode::ToNearest => a / b,
    RoundingMode::Upward => div_up(a, b),
    RoundingMode::Downward => div_down(a, b)
  }
}

pub fn sqrt(a: f64) -> f64 {
  match rounding::get() {
    RoundingMode::ToNearest => a.sqrt(),
    RoundingMode::Upward => sqrt_up(a),
    RoundingMode::Downward => sqrt_down(a)
  }
}

// An overflow rounded upward stops at -MAX on the negative side.
fn overflow_up(res: f64, finite_operands: bool) -> f64 {
  if res == f64::NEG_INFINITY && finite_operands { f64::MIN }
  else { res }
}

pub fn add_up(a: f64, b: f64) -> f64 {
  let s = a + b;
  if !s.is_finite() {
    return overflow_up(s, a.is_finite() && b.is_finite());
  }
  let bb = s - a;
  let err = (a - (s - bb)) + (b - bb);
  if err > 0.0 { s.next_up() } else { s }
}

pub fn add_down(a: f64, b: f64) -> f64 {
  -add_up(-a, -b)
}

pub fn sub_up(a: f64, b: f64) -> f64 {
  add_up(a, -b)
}

pub fn sub_down(a: f64, b: f64) -> f64 {
  -add_up(b, -a)
}

pub fn mul_up(a: f64, b: f64) -> f64 {
  // Zero times an infinite bound is zero, not NaN.
  if (a == 0.0 && !b.is_nan()) || (b == 0.0 && !a.is_nan()) {
    return 0.0;
  }
  let p = a * b;
  if !p.is_finite() {
    return overflow_up(p, a.is_finite() && b.is_finite());
  }
  if a.is_infinite() || b.is_infinite() {
    return p;
  }
  if p.abs() < UNDERFLOW_GUARD {
    return p.next_up();
  }
  let err = a.mul_add(b, -p);
  if err > 0.0 { p.next_up() } else { p }
}

pub fn mul_down(a: f64, b: f64) -> f64 {
  -mul_up(-a, b)
}

pub fn div_up(a: f64, b: f64) -> f64 {
  let q = a / b;
  if !q.is_finite() {
    return overflow_up(q, a.is_finite() && b.is_finite() && b != 0.0);
  }
  if a == 0.0 || a.is_infinite() || b.is_infinite() {
    return q;
  }
  if q.abs() < UNDERFLOW_GUARD || a.abs() < UNDERFLOW_GUARD {
    return q.next_up();
  }
  // a == q * b + rem exactly.
  let rem = (-q).mul_add(b, a);
  if (rem > 0.0 && b > 0.0) || (rem < 0.0 && b < 0.0) { q.next_up() } else { q }
}

pub fn div_down(a: f64, b: f64) -> f64 {
  -div_up(-a, b)
}

pub fn sqrt_up(a: f64) -> f64 {
  let s = a.sqrt();
  if !(a > 0.0) || a.is_infinite() {
    return s;
  }
  if a < UNDERFLOW_GUARD {
    return s.next_up();
  }
  let rem = (-s).mul_add(s, a);
  if rem > 0.0 { s.next_up() } else { s }
}

pub fn sqrt_down(a: f64) -> f64 {
  let s = a.sqrt();
  if !(a > 0.0) || a.is_infinite() {
    return s;
  }
  if a < UNDERFLOW_GUARD {
    return s.next_down().max(0.0);
  }
  let rem = (-s).mul_add(s, a);
  if rem < 0.0 { s.next_down() } else { s }
}
