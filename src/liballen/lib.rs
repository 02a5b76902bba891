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

//! This library classifies how two intervals relate to each other following Allen's interval algebra. Intervals are generic over their bound type, which only needs a total order: the natural `Ord` of the type, or any [comparator](ordering/index.html).
//!
//! Point intervals (with equal endpoints) are supported and related consistently with the non-degenerate ones, so that `x.relate(&y) == y.relate(&x).invert()` always holds.
//!
//! # Examples
//!
//! ```rust
//! use allen::{Interval, Relation};
//!
//! let x = Interval::new(2, 4);
//! let y = Interval::new(7, 3);
//! assert_eq!(x.relate(&y), Relation::Overlaps);
//! assert_eq!(y.relate(&x), Relation::OverlappedBy);
//! assert_eq!(Relation::Overlaps.invert(), Relation::OverlappedBy);
//! ```
//!
//! # Features
//!
//! - `arbitrary`: implements `quickcheck::Arbitrary` for [`Relation`] and [`Interval`].
//!
//! # References
//! * [Maintaining Knowledge about Temporal Intervals](https://cse.unl.edu/~choueiry/Documents/Allen-CACM1983.pdf), James F. Allen, 1983.

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod interval;
pub mod ordering;
pub mod relation;
#[cfg(any(test, feature = "arbitrary"))]
mod arbitrary;

pub use crate::interval::{relate, Interval};
pub use crate::ordering::{Comparator, FloatOrder, Natural, Reversed};
pub use crate::relation::{invert, ParseRelationError, Relation};
