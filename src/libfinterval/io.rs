// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Text and serde representations.
//!
//! Both interval types print as `[inf;sup]` and parse from that form or from a single number (a point interval). With serde, an interval is the tuple `(inf, sup)`.

use crate::interval::Interval;
use crate::raw::RawInterval;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum ParseIntervalError {
  #[error("invalid interval bound: {0}")]
  Bound(#[from] ParseFloatError),
  #[error("expected `[inf;sup]` or a single number")]
  Syntax,
  #[error("NaN is not a valid interval bound")]
  NotANumber,
  #[error("the lower bound {lo} is above the upper bound {hi}")]
  Inverted { lo: f64, hi: f64 }
}

impl fmt::Display for RawInterval {
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    write!(formatter, "[{};{}]", self.inf(), self.sup())
  }
}

impl fmt::Display for Interval {
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.raw(), formatter)
  }
}

fn checked_bounds(lo: f64, hi: f64) -> Result<RawInterval, ParseIntervalError> {
  if lo.is_nan() || hi.is_nan() {
    Err(ParseIntervalError::NotANumber)
  }
  else if lo <= hi {
    Ok(RawInterval::new(lo, hi))
  }
  else {
    Err(ParseIntervalError::Inverted { lo: lo, hi: hi })
  }
}

impl FromStr for RawInterval {
  type Err = ParseIntervalError;

  fn from_str(s: &str) -> Result<RawInterval, ParseIntervalError> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('[') {
      let inner = inner.strip_suffix(']').ok_or(ParseIntervalError::Syntax)?;
      let mut bounds = inner.split(';');
      match (bounds.next(), bounds.next(), bounds.next()) {
        (Some(lo), Some(hi), None) => checked_bounds(lo.trim().parse()?, hi.trim().parse()?),
        _ => Err(ParseIntervalError::Syntax)
      }
    }
    else {
      let x: f64 = s.parse()?;
      checked_bounds(x, x)
    }
  }
}

impl FromStr for Interval {
  type Err = ParseIntervalError;

  fn from_str(s: &str) -> Result<Interval, ParseIntervalError> {
    s.parse::<RawInterval>().map(Interval::from)
  }
}

impl Serialize for RawInterval {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    (self.inf(), self.sup()).serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for RawInterval {
  fn deserialize<D>(deserializer: D) -> Result<RawInterval, D::Error> where
   D: Deserializer<'de>
  {
    let (lo, hi) = <(f64, f64)>::deserialize(deserializer)?;
    checked_bounds(lo, hi).map_err(D::Error::custom)
  }
}

impl Serialize for Interval {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    self.raw().serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for Interval {
  fn deserialize<D>(deserializer: D) -> Result<Interval, D::Error> where
   D: Deserializer<'de>
  {
    RawInterval::deserialize(deserializer).map(Interval::from)
  }
}
