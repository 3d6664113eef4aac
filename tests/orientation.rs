// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// A filtered orientation predicate on integer coordinates stored in doubles.

use finterval::filter::{filtered, Filter};
use finterval::{Interval, Kleene, RawInterval, Sign, Uncertain};
use trilean::SKleene;

type Point = (f64, f64);

fn orient_raw(a: Point, b: Point, c: Point) -> Uncertain<Sign> {
  let (ax, ay) = (RawInterval::from(a.0), RawInterval::from(a.1));
  let (bx, by) = (RawInterval::from(b.0), RawInterval::from(b.1));
  let (cx, cy) = (RawInterval::from(c.0), RawInterval::from(c.1));
  ((bx - ax) * (cy - ay) - (by - ay) * (cx - ax)).sign()
}

fn orient_exact(a: Point, b: Point, c: Point) -> Sign {
  let i = |x: f64| x as i128;
  let det = (i(b.0) - i(a.0)) * (i(c.1) - i(a.1)) - (i(b.1) - i(a.1)) * (i(c.0) - i(a.0));
  Sign::from(det.cmp(&0))
}

fn orient(filter: &Filter, a: Point, b: Point, c: Point) -> Sign {
  filter.eval(|| orient_raw(a, b, c), || orient_exact(a, b, c))
}

const BIG: f64 = 4503599627370496.0; // 2^52

#[test]
fn easy_cases_stay_on_the_fast_path() {
  let f = Filter::new("orient2d");
  assert_eq!(orient(&f, (0.0, 0.0), (1.0, 0.0), (0.0, 1.0)), Sign::Positive);
  assert_eq!(orient(&f, (0.0, 0.0), (0.0, 1.0), (1.0, 0.0)), Sign::Negative);
  assert_eq!(orient(&f, (0.0, 0.0), (1.0, 1.0), (2.0, 2.0)), Sign::Zero);
  assert_eq!(f.calls(), 3);
  assert_eq!(f.failures(), 0);
}

#[test]
fn degenerate_large_coordinates_fall_back() {
  let f = Filter::new("orient2d");
  let (x, y) = (BIG + 1.0, BIG + 3.0);
  let a = (0.0, 0.0);
  let b = (x, y);
  let c = (2.0 * x, 2.0 * y);
  assert_eq!(orient(&f, a, b, c), Sign::Zero);
  assert_eq!(f.failures(), 1);

  // One unit off the line on either side.
  assert_eq!(orient(&f, a, b, (2.0 * x, 2.0 * y + 2.0)), Sign::Positive);
  assert_eq!(orient(&f, a, b, (2.0 * x, 2.0 * y - 2.0)), Sign::Negative);
  assert_eq!(f.calls(), 3);
}

#[test]
fn filtered_agrees_with_exact() {
  let f = Filter::new("orient2d");
  let base = BIG / 4.0;
  for i in 0..8 {
    for j in 0..8 {
      let a = (base + i as f64, base - j as f64);
      let b = (2.0 * base + 3.0, 2.0 * base + 1.0);
      let c = (3.0 * base - j as f64, 3.0 * base + i as f64);
      assert_eq!(orient(&f, a, b, c), orient_exact(a, b, c));
    }
  }
  assert_eq!(f.calls(), 64);
  assert!(f.failures() <= f.calls());
}

#[test]
fn safe_intervals_as_fast_path() {
  let sign = filtered(|| {
    let third = Interval::point(1.0) / Interval::point(3.0);
    (third * Interval::point(3.0) - Interval::point(1.0)).sign()
  }, || Sign::Zero);
  assert_eq!(sign, Sign::Zero);

  let third = Interval::point(1.0) / Interval::point(3.0);
  assert_eq!(third.try_lt(&Interval::point(0.5)).kleene(), SKleene::True);
  assert_eq!(third.try_lt(&third).kleene(), SKleene::Unknown);
}
