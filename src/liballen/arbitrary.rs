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

//! `quickcheck::Arbitrary` implementations for property-based testing.

use crate::interval::Interval;
use crate::relation::Relation;
use quickcheck::{Arbitrary, Gen};

impl Arbitrary for Relation
{
  fn arbitrary(g: &mut Gen) -> Relation {
    *g.choose(&Relation::ALL).unwrap_or(&Relation::Unknown)
  }
}

impl<T: Arbitrary + Ord> Arbitrary for Interval<T>
{
  fn arbitrary(g: &mut Gen) -> Interval<T> {
    let x = T::arbitrary(g);
    // Point intervals are rare under a uniform draw but sit on every
    // boundary case of the relation table.
    if u8::arbitrary(g) % 4 == 0 {
      Interval::singleton(x)
    } else {
      Interval::new(x, T::arbitrary(g))
    }
  }

  fn shrink(&self) -> Box<dyn Iterator<Item = Interval<T>>> {
    let endpoints = (self.lesser().clone(), self.greater().clone());
    Box::new(endpoints.shrink().map(Interval::from))
  }
}
