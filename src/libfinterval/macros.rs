// Copyright 2026 The filtered-interval developers

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// The by-reference implementation `&a op &b` is written by hand; these macros derive the three other receiver combinations and the compound assignment from it.

macro_rules! forward_val_val_binop {
  (impl $imp:ident for $res:ty, $method:ident) => {
    impl $imp<$res> for $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl $imp:ident for $res:ty, $method:ident) => {
    impl<'a> $imp<$res> for &'a $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl $imp:ident for $res:ty, $method:ident) => {
    impl<'b> $imp<&'b $res> for $res {
      type Output = $res;

      fn $method(self, other: &$res) -> $res {
        (&self).$method(other)
      }
    }
  }
}

macro_rules! forward_binop_assign {
  (impl $imp:ident for $res:ty, $method:ident, $op:ident) => {
    impl $imp<$res> for $res {
      fn $method(&mut self, other: $res) {
        *self = (&*self).$op(&other);
      }
    }

    impl<'b> $imp<&'b $res> for $res {
      fn $method(&mut self, other: &$res) {
        *self = (&*self).$op(other);
      }
    }
  }
}

macro_rules! forward_all_binop {
  (impl $imp:ident for $res:ty, $method:ident) => {
    forward_val_val_binop!(impl $imp for $res, $method);
    forward_ref_val_binop!(impl $imp for $res, $method);
    forward_val_ref_binop!(impl $imp for $res, $method);
  };
  (impl $imp:ident for $res:ty, $method:ident, $assign_imp:ident, $assign_method:ident) => {
    forward_all_binop!(impl $imp for $res, $method);
    forward_binop_assign!(impl $assign_imp for $res, $assign_method, $method);
  };
}

// Mixed operations with a `f64` operand, both sides, by converting the scalar into a point interval.
macro_rules! scalar_binop_via_point {
  (impl $imp:ident for $res:ty, $method:ident) => {
    impl $imp<f64> for $res {
      type Output = $res;

      fn $method(self, other: f64) -> $res {
        (&self).$method(&<$res>::from(other))
      }
    }

    impl $imp<$res> for f64 {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        (&<$res>::from(self)).$method(&other)
      }
    }
  }
}
