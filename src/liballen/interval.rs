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

//! Closed interval `[lesser, greater]` over a totally ordered type.
//!
//! The endpoints are sorted once, at construction, with the comparator bound to the interval. The same comparator is later used to relate the interval to another one.
//!
//! # Examples
//!
//! ```rust
//! use allen::{Interval, Relation};
//!
//! let morning = Interval::new(9, 12);
//! let lunch = Interval::new(13, 12);
//! assert_eq!(lunch.lesser(), &12);
//! assert_eq!(morning.relate(&lunch), Relation::Meets);
//! assert_eq!(lunch.relate(&morning), Relation::MetBy);
//! ```
//!
//! A point interval (both endpoints equal) is said to be *empty*:
//!
//! ```rust
//! use allen::{Interval, Relation};
//!
//! let noon = Interval::singleton(12);
//! assert!(noon.is_empty());
//! assert_eq!(noon.relate(&Interval::new(12, 17)), Relation::Overlaps);
//! ```
//!
//! # Comparators
//!
//! Intervals related to each other must share the same comparator semantics. The comparator of the receiver of [`relate`](struct.Interval.html#method.relate) is the one used, the other interval's comparator is ignored. Mixing different orders is a logic error that is not detected.

use crate::ordering::{Comparator, Natural};
use crate::relation::{self, Relation};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy)]
pub struct Interval<T, C = Natural> {
  lesser: T,
  greater: T,
  cmp: C
}

impl<T: Ord> Interval<T>
{
  /// Interval `[min(x, y), max(x, y)]` under the natural order of `T`.
  pub fn new(x: T, y: T) -> Interval<T> {
    Interval::with_comparator(x, y, Natural)
  }
}

impl<T: Clone, C: Comparator<T>> Interval<T, C>
{
  pub fn singleton_with(x: T, cmp: C) -> Interval<T, C> {
    Interval::with_comparator(x.clone(), x, cmp)
  }
}

impl<T: Clone + Ord> Interval<T>
{
  pub fn singleton(x: T) -> Interval<T> {
    Interval::singleton_with(x, Natural)
  }
}

impl<T, C: Comparator<T>> Interval<T, C>
{
  /// Sorts `x` and `y` with `cmp`. They are swapped only if `x` is strictly greater than `y`, so `x` is the lesser endpoint when they compare equal.
  pub fn with_comparator(x: T, y: T, cmp: C) -> Interval<T, C> {
    let (lesser, greater) = match cmp.compare(&x, &y) {
      Ordering::Greater => (y, x),
      Ordering::Less | Ordering::Equal => (x, y)
    };
    Interval { lesser, greater, cmp }
  }

  pub fn lesser(&self) -> &T {
    &self.lesser
  }

  pub fn greater(&self) -> &T {
    &self.greater
  }

  pub fn into_endpoints(self) -> (T, T) {
    (self.lesser, self.greater)
  }

  pub fn comparator(&self) -> &C {
    &self.cmp
  }

  /// `true` if the interval is a single point, that is `lesser == greater`.
  pub fn is_empty(&self) -> bool {
    self.cmp.compare(&self.lesser, &self.greater) == Ordering::Equal
  }

  pub fn is_non_empty(&self) -> bool {
    !self.is_empty()
  }

  /// How `self` relates to `other`, see [`Relation`](../relation/enum.Relation.html).
  pub fn relate(&self, other: &Interval<T, C>) -> Relation {
    relation::classify(&self.cmp, &self.lesser, &self.greater, &other.lesser, &other.greater)
  }
}

/// Free-function form of [`Interval::relate`](struct.Interval.html#method.relate).
pub fn relate<T, C: Comparator<T>>(x: &Interval<T, C>, y: &Interval<T, C>) -> Relation {
  x.relate(y)
}

impl<T: Ord> From<(T, T)> for Interval<T>
{
  fn from((x, y): (T, T)) -> Interval<T> {
    Interval::new(x, y)
  }
}

impl<T: PartialEq, C> PartialEq for Interval<T, C>
{
  fn eq(&self, other: &Interval<T, C>) -> bool {
    self.lesser == other.lesser && self.greater == other.greater
  }
}

impl<T: Eq, C> Eq for Interval<T, C> {}

impl<T: Hash, C> Hash for Interval<T, C>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.lesser.hash(state);
    self.greater.hash(state);
  }
}

impl<T: Debug, C> Debug for Interval<T, C>
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Interval")
      .field("lesser", &self.lesser)
      .field("greater", &self.greater)
      .finish()
  }
}

impl<T: Display, C> Display for Interval<T, C>
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "[{}, {}]", self.lesser, self.greater)
  }
}

impl<T: Serialize, C> Serialize for Interval<T, C>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    (&self.lesser, &self.greater).serialize(serializer)
  }
}

impl<'de, T, C> Deserialize<'de> for Interval<T, C> where
 T: Deserialize<'de>,
 C: Comparator<T> + Default
{
  fn deserialize<D>(deserializer: D) -> Result<Interval<T, C>, D::Error> where
   D: Deserializer<'de>
  {
    let (x, y) = <(T, T)>::deserialize(deserializer)?;
    let cmp = C::default();
    if cmp.compare(&x, &y) == Ordering::Greater {
      tracing::debug!("deserialized interval endpoints in decreasing order, swapping them");
    }
    Ok(Interval::with_comparator(x, y, cmp))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ordering::{FloatOrder, Reversed};
  use crate::relation::Relation::*;
  use chrono::{Duration, TimeZone, Utc};
  use serde_test::{assert_de_tokens, assert_tokens, Token};

  fn relate_pairs(x: (i32, i32), y: (i32, i32)) -> Relation {
    Interval::from(x).relate(&Interval::from(y))
  }

  #[test]
  fn sorts_endpoints() {
    let a = Interval::new("a", "b");
    let b = Interval::new("b", "a");
    assert_eq!(a.lesser(), b.lesser());
    assert_eq!(a.greater(), b.greater());
    assert_eq!(a.into_endpoints(), ("a", "b"));
  }

  #[test]
  fn lesser_and_greater() {
    let i = Interval::new(10, -3);
    assert_eq!(*i.lesser(), -3);
    assert_eq!(*i.greater(), 10);
  }

  #[test]
  fn tie_keeps_first_argument_as_lesser() {
    let case_insensitive = |a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase());
    let i = Interval::with_comparator("Abc", "aBC", case_insensitive);
    assert_eq!(*i.lesser(), "Abc");
    assert_eq!(*i.greater(), "aBC");
    assert!(i.is_empty());
  }

  #[test]
  fn emptiness() {
    assert!(Interval::new("a", "a").is_empty());
    assert!(!Interval::new("a", "a").is_non_empty());
    assert!(!Interval::new("a", "b").is_empty());
    assert!(Interval::new("a", "b").is_non_empty());
    assert!(Interval::singleton(4).is_empty());
  }

  #[test]
  fn equality_ignores_argument_order() {
    assert_eq!(Interval::new(3, 7), Interval::new(7, 3));
    assert_ne!(Interval::new(3, 7), Interval::new(3, 8));
  }

  #[test]
  fn relations_against_3_7() {
    let y = (3, 7);
    assert_eq!(relate_pairs((1, 2), y), Before);
    assert_eq!(relate_pairs((2, 3), y), Meets);
    assert_eq!(relate_pairs((2, 4), y), Overlaps);
    assert_eq!(relate_pairs((2, 7), y), FinishedBy);
    assert_eq!(relate_pairs((2, 8), y), Contains);
    assert_eq!(relate_pairs((3, 4), y), Starts);
    assert_eq!(relate_pairs((3, 7), y), Equal);
    assert_eq!(relate_pairs((3, 8), y), StartedBy);
    assert_eq!(relate_pairs((4, 6), y), During);
    assert_eq!(relate_pairs((6, 7), y), Finishes);
    assert_eq!(relate_pairs((6, 8), y), OverlappedBy);
    assert_eq!(relate_pairs((7, 8), y), MetBy);
    assert_eq!(relate_pairs((8, 9), y), After);
  }

  #[test]
  fn empty_left_interval() {
    let y = (3, 7);
    assert_eq!(relate_pairs((2, 2), y), Before);
    assert_eq!(relate_pairs((3, 3), y), Overlaps);
    assert_eq!(relate_pairs((5, 5), y), During);
    assert_eq!(relate_pairs((7, 7), y), OverlappedBy);
    assert_eq!(relate_pairs((8, 8), y), After);
  }

  #[test]
  fn empty_right_interval() {
    let x = (3, 7);
    assert_eq!(relate_pairs(x, (2, 2)), After);
    assert_eq!(relate_pairs(x, (3, 3)), OverlappedBy);
    assert_eq!(relate_pairs(x, (5, 5)), Contains);
    assert_eq!(relate_pairs(x, (7, 7)), Overlaps);
    assert_eq!(relate_pairs(x, (8, 8)), Before);
  }

  #[test]
  fn both_empty_intervals() {
    assert_eq!(relate_pairs((4, 4), (5, 5)), Before);
    assert_eq!(relate_pairs((5, 5), (5, 5)), Equal);
    assert_eq!(relate_pairs((6, 6), (5, 5)), After);
  }

  #[test]
  fn free_function_matches_method() {
    let x = Interval::new(2, 4);
    let y = Interval::new(3, 7);
    assert_eq!(relate(&x, &y), x.relate(&y));
    assert_eq!(relation::invert(relate(&y, &x)), Overlaps);
  }

  #[test]
  fn reversed_order_mirrors_relations() {
    let x = Interval::with_comparator(2, 4, Reversed(Natural));
    let y = Interval::with_comparator(3, 7, Reversed(Natural));
    assert_eq!(*x.lesser(), 4);
    assert_eq!(*y.lesser(), 7);
    assert_eq!(x.relate(&y), OverlappedBy);
  }

  #[test]
  fn float_intervals() {
    let x = Interval::with_comparator(2.5f64, -1.0, FloatOrder);
    let y = Interval::with_comparator(2.5, f64::NAN, FloatOrder);
    assert_eq!(*x.lesser(), -1.0);
    assert!(y.greater().is_nan());
    assert_eq!(x.relate(&y), Meets);
    assert!(Interval::with_comparator(-0.0f64, 0.0, FloatOrder).is_empty());
  }

  #[test]
  fn timestamp_intervals() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let shift = Interval::new(start + Duration::hours(8), start);
    let break_time = Interval::new(start + Duration::hours(4), start + Duration::minutes(270));
    assert_eq!(*shift.lesser(), start);
    assert_eq!(break_time.relate(&shift), During);
    assert_eq!(shift.relate(&Interval::singleton(start)), OverlappedBy);
  }

  #[test]
  fn display_and_debug() {
    assert_eq!(Interval::new(7, 3).to_string(), "[3, 7]");
    assert_eq!(format!("{:?}", Interval::new(1, 0)), "Interval { lesser: 0, greater: 1 }");
  }

  #[test]
  fn serde_tokens() {
    let i = Interval::new(3u32, 7);
    assert_tokens(&i, &[
      Token::Tuple { len: 2 },
      Token::U32(3),
      Token::U32(7),
      Token::TupleEnd
    ]);
    assert_de_tokens(&i, &[
      Token::Tuple { len: 2 },
      Token::U32(7),
      Token::U32(3),
      Token::TupleEnd
    ]);
  }

  #[quickcheck]
  fn qc_construction_is_order_independent(x: i8, y: i8) -> bool {
    Interval::new(x, y) == Interval::new(y, x)
      && Interval::new(x, y).lesser() <= Interval::new(x, y).greater()
  }

  #[quickcheck]
  fn qc_singleton_is_empty(v: i16) -> bool {
    let i = Interval::new(v, v);
    i.is_empty() && !i.is_non_empty()
  }

  #[quickcheck]
  fn qc_symmetry(a: Interval<i8>, b: Interval<i8>) -> bool {
    a.relate(&b) == b.relate(&a).invert()
  }

  #[quickcheck]
  fn qc_equal_iff_same_endpoints(a: Interval<i8>, b: Interval<i8>) -> bool {
    (a.relate(&b) == Equal) == (a == b)
  }

  #[quickcheck]
  fn qc_float_symmetry(a: (f64, f64), b: (f64, f64)) -> bool {
    let x = Interval::with_comparator(a.0, a.1, FloatOrder);
    let y = Interval::with_comparator(b.0, b.1, FloatOrder);
    x.relate(&y) == y.relate(&x).invert()
  }

  // Every pair of intervals over a small range gets exactly the relation
  // Allen's definitions give for non-empty intervals.
  #[test]
  fn agrees_with_allen_definitions() {
    let range = 0..6;
    for lx in range.clone() {
      for gx in lx + 1..6 {
        for ly in range.clone() {
          for gy in ly + 1..6 {
            let expected =
              if gx < ly { Before }
              else if gx == ly { Meets }
              else if gy < lx { After }
              else if gy == lx { MetBy }
              else if lx == ly && gx == gy { Equal }
              else if lx == ly { if gx < gy { Starts } else { StartedBy } }
              else if gx == gy { if lx > ly { Finishes } else { FinishedBy } }
              else if lx < ly && gy < gx { Contains }
              else if ly < lx && gx < gy { During }
              else if lx < ly { Overlaps }
              else { OverlappedBy };
            assert_eq!(relate_pairs((lx, gx), (ly, gy)), expected,
              "[{}, {}] vs [{}, {}]", lx, gx, ly, gy);
          }
        }
      }
    }
  }
}
