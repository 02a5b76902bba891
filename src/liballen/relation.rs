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

//! The thirteen relations of Allen's interval algebra.
//!
//! Each variant reads as "interval `x` *relation* interval `y`", where `x` is the receiver of [`Interval::relate`](../interval/struct.Interval.html#method.relate). In the diagrams below, time flows from left to right.
//!
//! Point intervals (where both endpoints are equal) are classified with the same table. A point lying on the lesser endpoint of `y` overlaps `y`, a point lying on its greater endpoint is overlapped by `y`, and a point strictly inside `y` is during `y`.

use crate::ordering::Comparator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::cmp::Ordering::{Equal as EQ, Greater as GT, Less as LT};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
  /// No classification. Never produced by [`relate`](../interval/fn.relate.html); it is its own inverse.
  Unknown,
  /// ```text
  /// [ x ]
  ///       [ y ]
  /// ```
  Before,
  /// ```text
  /// [ x ]
  ///     [ y ]
  /// ```
  Meets,
  /// ```text
  /// [ x ]
  ///   [ y ]
  /// ```
  Overlaps,
  /// ```text
  /// [  x  ]
  ///   [ y ]
  /// ```
  FinishedBy,
  /// ```text
  /// [   x   ]
  ///   [ y ]
  /// ```
  Contains,
  /// ```text
  /// [ x ]
  /// [  y  ]
  /// ```
  Starts,
  /// ```text
  /// [ x ]
  /// [ y ]
  /// ```
  Equal,
  /// ```text
  /// [  x  ]
  /// [ y ]
  /// ```
  StartedBy,
  /// ```text
  ///   [ x ]
  /// [   y   ]
  /// ```
  During,
  /// ```text
  ///   [ x ]
  /// [  y  ]
  /// ```
  Finishes,
  /// ```text
  ///   [ x ]
  /// [ y ]
  /// ```
  OverlappedBy,
  /// ```text
  ///     [ x ]
  /// [ y ]
  /// ```
  MetBy,
  /// ```text
  ///       [ x ]
  /// [ y ]
  /// ```
  After
}

use self::Relation::*;

impl Relation
{
  pub const ALL: [Relation; 14] = [
    Unknown, Before, Meets, Overlaps, FinishedBy, Contains, Starts,
    Equal, StartedBy, During, Finishes, OverlappedBy, MetBy, After
  ];

  /// The relation obtained by swapping the two intervals: `x.relate(y).invert() == y.relate(x)`.
  pub const fn invert(self) -> Relation {
    match self {
      Unknown => Unknown,
      Before => After,
      Meets => MetBy,
      Overlaps => OverlappedBy,
      FinishedBy => Finishes,
      Contains => During,
      Starts => StartedBy,
      Equal => Equal,
      StartedBy => Starts,
      During => Contains,
      Finishes => FinishedBy,
      OverlappedBy => Overlaps,
      MetBy => Meets,
      After => Before
    }
  }

  pub fn is_unknown(self) -> bool {
    self == Unknown
  }

  pub fn name(self) -> &'static str {
    match self {
      Unknown => "unknown",
      Before => "before",
      Meets => "meets",
      Overlaps => "overlaps",
      FinishedBy => "finished-by",
      Contains => "contains",
      Starts => "starts",
      Equal => "equal",
      StartedBy => "started-by",
      During => "during",
      Finishes => "finishes",
      OverlappedBy => "overlapped-by",
      MetBy => "met-by",
      After => "after"
    }
  }
}

pub fn invert(r: Relation) -> Relation {
  r.invert()
}

/// Classifies `[lx, gx]` against `[ly, gy]`. Both pairs must already be sorted by `cmp`.
pub(crate) fn classify<T, C>(cmp: &C, lx: &T, gx: &T, ly: &T, gy: &T) -> Relation where
 C: Comparator<T>
{
  let lxly = cmp.compare(lx, ly);
  let lxgy = cmp.compare(lx, gy);
  let gxly = cmp.compare(gx, ly);
  let gxgy = cmp.compare(gx, gy);
  let relation = decide(lxly, lxgy, gxly, gxgy);
  tracing::trace!(?lxly, ?lxgy, ?gxly, ?gxgy, ?relation, "classified interval pair");
  relation
}

// First match wins: the boundary rules must come before the general ones
// for point intervals to be classified correctly.
fn decide(lxly: Ordering, lxgy: Ordering, gxly: Ordering, gxgy: Ordering) -> Relation {
  match (lxly, lxgy, gxly, gxgy) {
    (EQ, _, _, EQ) => Equal,
    (_, _, LT, _) => Before,
    (LT, _, EQ, LT) => Meets,
    (_, _, EQ, _) => Overlaps,
    (GT, EQ, _, GT) => MetBy,
    (_, EQ, _, _) => OverlappedBy,
    (_, GT, _, _) => After,
    (LT, _, _, LT) => Overlaps,
    (LT, _, _, EQ) => FinishedBy,
    (LT, _, _, GT) => Contains,
    (EQ, _, _, LT) => Starts,
    (EQ, _, _, GT) => StartedBy,
    (GT, _, _, LT) => During,
    (GT, _, _, EQ) => Finishes,
    (GT, _, _, GT) => OverlappedBy
  }
}

impl fmt::Display for Relation
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Error returned when parsing a [`Relation`] from an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRelationError(pub String);

impl fmt::Display for ParseRelationError
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown interval relation `{}`", self.0)
  }
}

impl std::error::Error for ParseRelationError {}

impl FromStr for Relation
{
  type Err = ParseRelationError;

  /// Parses the names printed by `Display`, ignoring surrounding whitespace.
  fn from_str(s: &str) -> Result<Relation, ParseRelationError> {
    let name = s.trim();
    Relation::ALL.iter()
      .copied()
      .find(|r| r.name() == name)
      .ok_or_else(|| ParseRelationError(s.to_string()))
  }
}
