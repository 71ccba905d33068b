// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parser for bracketed version-range specifiers.
//!
//! A range specifier describes an interval over dotted-numeric version
//! numbers, in the syntax used by package dependency constraints:
//!
//! ```txt
//! 1.2        1.2 <= v          (bare version, inclusive minimum)
//! [1.2]      v == 1.2
//! [1.2,2.3]  1.2 <= v <= 2.3
//! (1.2,2.3)  1.2 < v < 2.3
//! [1.2,)     1.2 <= v
//! (,2.3]     v <= 2.3
//! ```
//!
//! Square brackets make a bound inclusive, parentheses exclusive, and an
//! empty side is unbounded. Whitespace around brackets, commas and version
//! components is ignored.
//!
//! # Parsing
//!
//! The entry point is [VersionRange::parse], which returns `None` for any
//! malformed specifier without distinguishing failure causes:
//!
//! ```
//! use version_range::{Version, VersionRange};
//!
//! let range = VersionRange::parse("(1.2,2.3]").unwrap();
//! assert_eq!(range.min_version(), Some(&Version::new(1, 2)));
//! assert!(!range.is_min_inclusive());
//! assert!(range.is_max_inclusive());
//!
//! assert!(range.contains(&Version::new(2, 0)));
//! assert!(!range.contains(&Version::new(1, 2)));
//!
//! assert_eq!(VersionRange::parse("[1.2,2.3,3.4]"), None);
//! ```
//!
//! `VersionRange` also implements [FromStr](std::str::FromStr) for use with
//! `str::parse`, and [Display](std::fmt::Display) rendering the canonical
//! textual form, which parses back to an equal range.
//!
//! # Version numbers
//!
//! Bounds are [Version] values with two to four dot-separated numeric
//! components, ordered lexicographically. Their grammar is independent of
//! the range syntax; see the [version] module.
//!
//! # Optional features
//!
//! * `serde`: serialization of [Version] and [VersionRange] as their
//!   canonical strings.
//! * `proptest`: exports proptest strategies for both types.

#![warn(missing_docs)]

pub mod range;
pub mod version;

pub use crate::range::{RangeParseError, VersionRange};
pub use crate::version::{Version, VersionParseError};
