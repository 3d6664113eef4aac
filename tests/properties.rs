// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Enclosure and decidability properties checked against exact error terms.

use finterval::rounding::RoundingGuard;
use finterval::{Interval, RawInterval, Sign};
use gcollections::ops::Contains;
use proptest::prelude::*;

fn valid_interval() -> impl Strategy<Value = Interval> {
  (-1.0e3f64..1.0e3, -1.0e3f64..1.0e3)
    .prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)))
}

fn positive_interval() -> impl Strategy<Value = Interval> {
  (1.0e-3f64..1.0e3, 1.0e-3f64..1.0e3)
    .prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)))
}

fn extreme_bound() -> impl Strategy<Value = f64> {
  prop_oneof![
    -1.0e3f64..1.0e3,
    -1.0e308f64..1.0e308,
    -1.0e-300f64..1.0e-300,
    Just(0.0)
  ]
}

/// Intervals with huge, tiny or zero bounds, possibly unbounded on either side.
fn extended_interval() -> impl Strategy<Value = Interval> {
  (extreme_bound(), extreme_bound(), any::<bool>(), any::<bool>())
    .prop_map(|(a, b, open_lo, open_hi)| {
      let lo = if open_lo { f64::NEG_INFINITY } else { a.min(b) };
      let hi = if open_hi { f64::INFINITY } else { a.max(b) };
      Interval::new(lo, hi)
    })
}

fn finite_points(i: &Interval) -> Vec<f64> {
  vec![i.inf(), i.sup(), i.to_f64(), 0.0].into_iter()
    .filter(|x| x.is_finite() && i.contains(x))
    .collect()
}

/// The round-to-nearest result of finite operands lies between the directed bounds.
fn holds_nearest(i: &Interval, nearest: f64) -> bool {
  !nearest.is_finite() || i.contains(&nearest)
}

fn sample_points(i: &Interval) -> Vec<f64> {
  vec![i.inf(), i.sup(), i.to_f64()]
}

/// Does `i` contain `approx + err`, knowing only the sign of the tiny error `err`?
fn encloses(i: &Interval, approx: f64, err: f64) -> bool {
  let lower = i.inf() < approx || (i.inf() == approx && err >= 0.0);
  let upper = i.sup() > approx || (i.sup() == approx && err <= 0.0);
  lower && upper
}

fn two_sum(a: f64, b: f64) -> (f64, f64) {
  let s = a + b;
  let bb = s - a;
  (s, (a - (s - bb)) + (b - bb))
}

proptest! {
  #[test]
  fn add_encloses(x in valid_interval(), y in valid_interval()) {
    let z = x + y;
    for a in sample_points(&x) {
      for b in sample_points(&y) {
        let (s, e) = two_sum(a, b);
        prop_assert!(encloses(&z, s, e), "{} + {} = {} + {} not in {}", a, b, s, e, z);
      }
    }
  }

  #[test]
  fn sub_encloses(x in valid_interval(), y in valid_interval()) {
    let z = x - y;
    for a in sample_points(&x) {
      for b in sample_points(&y) {
        let (s, e) = two_sum(a, -b);
        prop_assert!(encloses(&z, s, e));
      }
    }
  }

  #[test]
  fn mul_encloses(x in valid_interval(), y in valid_interval()) {
    let z = x * y;
    for a in sample_points(&x) {
      for b in sample_points(&y) {
        let p = a * b;
        prop_assert!(encloses(&z, p, a.mul_add(b, -p)), "{} * {} not in {}", a, b, z);
      }
    }
  }

  #[test]
  fn div_encloses(x in valid_interval(), y in positive_interval(), negate in any::<bool>()) {
    let y = if negate { -y } else { y };
    let z = x / y;
    for a in sample_points(&x) {
      for b in sample_points(&y) {
        let q = a / b;
        let r = (-q).mul_add(b, a);
        prop_assert!(encloses(&z, q, r * b.signum()), "{} / {} not in {}", a, b, z);
      }
    }
  }

  #[test]
  fn sqrt_encloses(x in positive_interval()) {
    let z = x.sqrt();
    for a in sample_points(&x) {
      let s = a.sqrt();
      prop_assert!(encloses(&z, s, (-s).mul_add(s, a)));
    }
  }

  #[test]
  fn square_encloses(x in valid_interval()) {
    let z = x.square();
    prop_assert!(z.inf() >= 0.0);
    for a in sample_points(&x) {
      let p = a * a;
      prop_assert!(encloses(&z, p, a.mul_add(a, -p)));
    }
  }

  #[test]
  fn raw_under_one_guard_matches_safe(x in valid_interval(), y in valid_interval()) {
    let safe = (x * y - x) / (y.square() + Interval::point(1.0));
    let raw = {
      let _guard = RoundingGuard::upward();
      let (a, b) = (x.raw(), y.raw());
      (a * b - a) / (b.square() + RawInterval::point(1.0))
    };
    prop_assert!(safe.raw().is_same(&raw));
  }

  #[test]
  fn decided_comparisons_hold_pointwise(x in valid_interval(), y in valid_interval()) {
    for a in sample_points(&x) {
      for b in sample_points(&y) {
        if let Ok(lt) = x.try_lt(&y) {
          prop_assert_eq!(lt, a < b);
        }
        if let Ok(le) = x.try_le(&y) {
          prop_assert_eq!(le, a <= b);
        }
        if let Ok(eq) = x.try_eq(&y) {
          prop_assert_eq!(eq, a == b);
        }
      }
    }
    if let Ok(sign) = x.sign() {
      for a in sample_points(&x) {
        prop_assert_eq!(sign, Sign::from(a.partial_cmp(&0.0).unwrap()));
      }
    }
  }

  #[test]
  fn points_always_decide(a in -1.0e3f64..1.0e3, b in -1.0e3f64..1.0e3) {
    let (x, y) = (Interval::point(a), Interval::point(b));
    prop_assert_eq!(x.try_lt(&y), Ok(a < b));
    prop_assert_eq!(x.try_eq(&y), Ok(a == b));
    prop_assert_eq!(x.compare(&y), Ok(a.partial_cmp(&b).unwrap()));
  }

  #[test]
  fn join_meet(x in valid_interval(), y in valid_interval()) {
    let j = x.join(&y);
    prop_assert!(j.join(&x).is_same(&j));
    prop_assert!(x.join(&x).is_same(&x));
    prop_assert!(j.inf() <= x.inf() && x.sup() <= j.sup());
    prop_assert!(j.inf() <= y.inf() && y.sup() <= j.sup());
    if x.overlap(&y) {
      let m = x.meet(&y);
      prop_assert!(x.inf() <= m.inf() && m.sup() <= x.sup());
      prop_assert!(y.inf() <= m.inf() && m.sup() <= y.sup());
      prop_assert!(m.meet(&x).is_same(&m));
    }
  }

  #[test]
  fn unbounded_and_extreme_operands_stay_valid(x in extended_interval(), y in extended_interval()) {
    let results = [
      ("add", x + y),
      ("sub", x - y),
      ("mul", x * y),
      ("div", x / y),
      ("square", x.square())
    ];
    for (name, z) in results.iter() {
      prop_assert!(z.is_valid(), "{} of {} and {} gave {}", name, x, y, z);
    }
    for a in finite_points(&x) {
      prop_assert!(holds_nearest(&x.square(), a * a));
      for b in finite_points(&y) {
        prop_assert!(holds_nearest(&(x + y), a + b));
        prop_assert!(holds_nearest(&(x - y), a - b));
        prop_assert!(holds_nearest(&(x * y), a * b), "{} * {} not in {}", a, b, x * y);
        prop_assert!(holds_nearest(&(x / y), a / b), "{} / {} not in {}", a, b, x / y);
      }
    }
    if x.sup() >= 0.0 {
      prop_assert!(x.sqrt().is_valid());
    }
  }
}
