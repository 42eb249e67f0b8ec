//! Strongly-typed identifiers for domain entities
//!
//! Identities are assigned by the store on first persistence and never
//! reused. Wrapping the raw `i64` keeps a `ClientId` from being passed where a
//! `PolicyId` is expected, while still serializing as a plain JSON number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates from a raw store value
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw store value
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix accepted when parsing
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(ClientId, "CLI");
define_id!(PolicyId, "POL");
define_id!(ClaimId, "CLM");
