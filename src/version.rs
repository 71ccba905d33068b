// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dotted-numeric version numbers, the values that range bounds are made of.

use std::fmt::{self, Display};
use std::str::FromStr;

use smallvec::SmallVec;
use thiserror::Error;

/// A version number with two to four dot-separated numeric components:
/// `major.minor`, `major.minor.build` or `major.minor.build.revision`.
///
/// Versions are ordered lexicographically by component, so `1.2 < 1.2.0`:
/// a missing component sorts below a present zero. The [Display] form is the
/// canonical dotted string, preserving the component count the version was
/// created with.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Version {
    components: SmallVec<[u64; 4]>,
}

/// Error creating a [Version] from a string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionParseError {
    /// A [Version] must contain 2 to 4 numbers separated by dots.
    #[error("version '{full_version}' must contain 2 to 4 numbers separated by dots")]
    WrongComponentCount {
        /// The string that was being parsed.
        full_version: String,
    },
    /// A component of the version is not a plain non-negative integer.
    #[error("cannot parse '{version_part}' in '{full_version}' as u64: {parse_error}")]
    ParseIntError {
        /// The string that was being parsed.
        full_version: String,
        /// The component where parsing failed.
        version_part: String,
        /// The error produced by integer parsing.
        parse_error: String,
    },
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parses the dotted form. Whitespace around each component is tolerated
    /// (`" 1 .2 "` is `1.2`), an explicit sign is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_component = |part: &str| {
            let digits = part.trim();
            // `u64::from_str` accepts a leading `+`, this grammar does not.
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Self::Err::ParseIntError {
                    full_version: s.to_string(),
                    version_part: part.to_string(),
                    parse_error: "invalid digit found in string".to_string(),
                });
            }
            digits.parse::<u64>().map_err(|e| Self::Err::ParseIntError {
                full_version: s.to_string(),
                version_part: part.to_string(),
                parse_error: e.to_string(),
            })
        };

        let parts: SmallVec<[&str; 4]> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(Self::Err::WrongComponentCount {
                full_version: s.to_string(),
            });
        }
        let mut components = SmallVec::new();
        for part in parts {
            components.push(parse_component(part)?);
        }
        Ok(Self { components })
    }
}

// Constructors
impl Version {
    /// Create a two-component version: `version = major.minor`.
    pub fn new(major: u64, minor: u64) -> Self {
        Self {
            components: SmallVec::from_slice(&[major, minor]),
        }
    }

    /// Version 0.0.
    pub fn zero() -> Self {
        Self::new(0, 0)
    }
}

// Convert tuples into versions.
impl From<(u64, u64)> for Version {
    fn from((major, minor): (u64, u64)) -> Self {
        Self::new(major, minor)
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((major, minor, build): (u64, u64, u64)) -> Self {
        Self {
            components: SmallVec::from_slice(&[major, minor, build]),
        }
    }
}

impl From<(u64, u64, u64, u64)> for Version {
    fn from((major, minor, build, revision): (u64, u64, u64, u64)) -> Self {
        Self {
            components: SmallVec::from_slice(&[major, minor, build, revision]),
        }
    }
}

// Component accessors.
impl Version {
    /// The first component.
    pub fn major(&self) -> u64 {
        self.components[0]
    }

    /// The second component.
    pub fn minor(&self) -> u64 {
        self.components[1]
    }

    /// The third component, if the version has one.
    pub fn build(&self) -> Option<u64> {
        self.components.get(2).copied()
    }

    /// The fourth component, if the version has one.
    pub fn revision(&self) -> Option<u64> {
        self.components.get(3).copied()
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}
