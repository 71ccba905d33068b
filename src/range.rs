// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Version ranges are intervals over version numbers, written in the
//! bracketed range syntax used by package dependency constraints.
//!
//! The textual forms are:
//!  - `1.2`: a bare version, meaning `1.2 <= v` (inclusive minimum only)
//!  - `[1.2]`: exactly the version 1.2
//!  - `[1.2,2.3]`: `1.2 <= v <= 2.3`
//!  - `(1.2,2.3)`: `1.2 < v < 2.3`
//!  - `[1.2,)`: `1.2 <= v`, and `(,2.3]`: `v <= 2.3`
//!
//! `[` and `]` make a bound inclusive, `(` and `)` exclusive. Either side
//! may be left empty for an unbounded range on that side.

use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;
use thiserror::Error;

use crate::version::Version;

/// An interval over [Version] values with independently inclusive or
/// exclusive, independently bounded or unbounded min and max sides.
///
/// A range is built once, by parsing or by one of the constructors, and is
/// immutable afterwards. Note that an absent bound keeps the inclusive flag
/// its bracket character spelled out: `"(,1.2]"` parses to a range with no
/// minimum whose `min_inclusive` flag is nonetheless `false`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct VersionRange {
    min: Option<Version>,
    min_inclusive: bool,
    max: Option<Version>,
    max_inclusive: bool,
}

/// Error creating a [VersionRange] from a string.
///
/// Carries no detail beyond the rejected input: every malformed range is the
/// same failure, whether the brackets, the commas or a version token were at
/// fault.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("'{full_range}' is not a valid version range")]
pub struct RangeParseError {
    full_range: String,
}

impl VersionRange {
    /// Parse a range specifier, returning `None` on any malformed input.
    ///
    /// A bare version string is accepted as an inclusive minimum with no
    /// upper bound, and that reading wins unconditionally: bracket
    /// interpretation is only attempted once plain-version parsing has
    /// failed.
    pub fn parse(raw: &str) -> Option<Self> {
        let spec = raw.trim();

        if let Ok(version) = Version::from_str(spec) {
            return Some(Self::at_least(version));
        }

        // Too short to be a bracket form.
        if spec.len() < 3 {
            return None;
        }

        let min_inclusive = match spec.chars().next()? {
            '[' => true,
            '(' => false,
            _ => return None,
        };
        let max_inclusive = match spec.chars().next_back()? {
            ']' => true,
            ')' => false,
            _ => return None,
        };

        // Both brackets are ASCII, so slicing them off stays on char
        // boundaries.
        let inner = &spec[1..spec.len() - 1];
        let mut tokens = inner.split(',');
        let min_token = tokens.next()?;
        // A single token stands for both bounds, as in `[1.2]`.
        let max_token = tokens.next().unwrap_or(min_token);
        if tokens.next().is_some() {
            return None;
        }

        Some(Self {
            min: parse_bound(min_token)?,
            min_inclusive,
            max: parse_bound(max_token)?,
            max_inclusive,
        })
    }

    /// Range accepting the given version and every higher one.
    ///
    /// This is the range a bare version string parses to.
    pub fn at_least(v: impl Into<Version>) -> Self {
        Self {
            min: Some(v.into()),
            min_inclusive: true,
            max: None,
            max_inclusive: false,
        }
    }

    /// Range accepting exactly one version.
    pub fn exact(v: impl Into<Version>) -> Self {
        let v = v.into();
        Self {
            min: Some(v.clone()),
            min_inclusive: true,
            max: Some(v),
            max_inclusive: true,
        }
    }
}

/// An empty or all-whitespace token is an absent bound; anything else must
/// be a version.
fn parse_bound(token: &str) -> Option<Option<Version>> {
    let token = token.trim();
    if token.is_empty() {
        return Some(None);
    }
    token.parse().ok().map(Some)
}

// Accessors.
impl VersionRange {
    /// The lower bound, if the range has one.
    pub fn min_version(&self) -> Option<&Version> {
        self.min.as_ref()
    }

    /// Whether the lower bracket was inclusive (`[`).
    pub fn is_min_inclusive(&self) -> bool {
        self.min_inclusive
    }

    /// The upper bound, if the range has one.
    pub fn max_version(&self) -> Option<&Version> {
        self.max.as_ref()
    }

    /// Whether the upper bracket was inclusive (`]`).
    pub fn is_max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    /// Check if the range contains a given version. An absent bound does not
    /// constrain.
    pub fn contains(&self, version: &Version) -> bool {
        let above_min = match &self.min {
            None => true,
            Some(min) if self.min_inclusive => min <= version,
            Some(min) => min < version,
        };
        let below_max = match &self.max {
            None => true,
            Some(max) if self.max_inclusive => version <= max,
            Some(max) => version < max,
        };
        above_min && below_max
    }
}

impl FromStr for VersionRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RangeParseError {
            full_range: s.to_string(),
        })
    }
}

impl Display for VersionRange {
    /// The canonical textual form: parsing it back yields an equal range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.min, &self.max) {
            (Some(min), None) if self.min_inclusive && !self.max_inclusive => {
                write!(f, "{}", min)
            }
            (Some(min), Some(max)) if min == max && self.min_inclusive && self.max_inclusive => {
                write!(f, "[{}]", min)
            }
            _ => {
                f.write_str(if self.min_inclusive { "[" } else { "(" })?;
                if let Some(min) = &self.min {
                    write!(f, "{}", min)?;
                }
                f.write_str(",")?;
                if let Some(max) = &self.max {
                    write!(f, "{}", max)?;
                }
                f.write_str(if self.max_inclusive { "]" } else { ")" })
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VersionRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VersionRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// A strategy for arbitrary versions, spread over all component counts.
#[cfg(any(feature = "proptest", test))]
pub fn version_strategy() -> impl Strategy<Value = Version> {
    prop_oneof![
        any::<(u8, u8)>().prop_map(|(a, b)| Version::from((a as u64, b as u64))),
        any::<(u8, u8, u8)>().prop_map(|(a, b, c)| Version::from((a as u64, b as u64, c as u64))),
        any::<(u8, u8, u8, u8)>().prop_map(|(a, b, c, d)| {
            Version::from((a as u64, b as u64, c as u64, d as u64))
        }),
    ]
}

/// A strategy for arbitrary ranges, covering every combination of present,
/// absent, inclusive and exclusive bounds.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl Strategy<Value = VersionRange> {
    (
        proptest::option::of(version_strategy()),
        any::<bool>(),
        proptest::option::of(version_strategy()),
        any::<bool>(),
    )
        .prop_map(|(min, min_inclusive, max, max_inclusive)| VersionRange {
            min,
            min_inclusive,
            max,
            max_inclusive,
        })
}
