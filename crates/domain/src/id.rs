//! Typed identifier newtypes backed by integers.
//!
//! Identifiers are server-assigned sequential integers. Point-of-interest
//! ids are unique across *all* cities, not per city.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw integer identifier.
            #[must_use]
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub fn value(self) -> i32 {
                self.0
            }

            /// The identifier following this one in the sequence.
            #[must_use]
            pub fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`City`](crate::city::City).
    CityId
);

define_id!(
    /// Unique identifier for a
    /// [`PointOfInterest`](crate::point_of_interest::PointOfInterest).
    PoiId
);
