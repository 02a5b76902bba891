// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Total orders used to sort and compare interval endpoints.
//!
//! Every [`Comparator`] must be a strict total order: exactly one of `Less`, `Equal` or `Greater` holds for any pair, the relation is transitive, and repeated calls with the same arguments give the same answer. None of this is checked at runtime; an inconsistent comparator makes every result of this library unspecified.
//!
//! Types with an `Ord` implementation (integers, strings, `std::time::SystemTime`, `chrono::DateTime`, ...) use [`Natural`]. Floating point numbers use [`FloatOrder`]. Anything else can be ordered by a closure.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use allen::ordering::Comparator;
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use num_traits::Float;
use std::cmp::Ordering;

pub trait Comparator<T: ?Sized>
{
  fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F where
 F: Fn(&T, &T) -> Ordering
{
  fn compare(&self, a: &T, b: &T) -> Ordering {
    self(a, b)
  }
}

/// The natural order of `T` given by its `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural
{
  fn compare(&self, a: &T, b: &T) -> Ordering {
    a.cmp(b)
  }
}

/// Reverses the order of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C>
{
  fn compare(&self, a: &T, b: &T) -> Ordering {
    self.0.compare(b, a)
  }
}

/// Total order over floating point numbers.
///
/// Numbers compare as usual with `-0.0 == 0.0`. NaN is greater than every number and equal to any other NaN, whatever its sign or payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloatOrder;

impl<F: Float> Comparator<F> for FloatOrder
{
  fn compare(&self, a: &F, b: &F) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
      (true, true) => Ordering::Equal,
      (true, false) => Ordering::Greater,
      (false, true) => Ordering::Less,
      // Both are numbers so `partial_cmp` always answers.
      (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
  }
}
