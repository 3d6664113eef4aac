// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Filtered interval arithmetic on doubles.
//!
//! An interval `[inf, sup]` encloses the real result of a computation whose inputs are known up to rounding. The operators round every lower bound toward -infinity and every upper bound toward +infinity, so the enclosure survives any sequence of operations. Comparisons on intervals are only answered when the bounds decide them; otherwise they return [`UnsafeComparison`](uncertain/struct.UnsafeComparison.html) so that a geometric predicate can be recomputed exactly. This is the filter in front of the exact arithmetic of robust predicates.
//!
//! Two types share the same bounds:
//!
//! * [`Interval`](interval/struct.Interval.html) sets the rounding mode around each operation and can be used anywhere.
//! * [`RawInterval`](raw/struct.RawInterval.html) expects the caller to have set the rounding mode toward +infinity, typically once with a [`RoundingGuard`](rounding/struct.RoundingGuard.html) around a whole predicate.
//!
//! # Examples
//!
//! ```rust
//! use finterval::{Interval, Sign};
//!
//! // Orientation of (0.1, 0.1), (0.2, 0.2), (0.3, 0.3): collinear in the reals.
//! let (ax, ay) = (Interval::point(0.1), Interval::point(0.1));
//! let (bx, by) = (Interval::point(0.2), Interval::point(0.2));
//! let (cx, cy) = (Interval::point(0.3), Interval::point(0.3));
//! let det = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
//! assert!(det.sign().is_err());
//! ```
//!
//! # References
//! * Hervé Brönnimann, Christoph Burnikel, Sylvain Pion. Interval arithmetic yields efficient dynamic filters for computational geometry (1998).
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)

mod macros;
pub mod rounding;
pub mod directed;
pub mod uncertain;
pub mod ops;
pub mod raw;
pub mod interval;
pub mod io;
pub mod filter;

pub use crate::interval::Interval;
pub use crate::raw::{RawInterval, ToInterval};
pub use crate::uncertain::{failures, FailureCounter, Kleene, Sign, Uncertain, UnsafeComparison};
pub use crate::io::ParseIntervalError;
