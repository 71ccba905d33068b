// SPDX-License-Identifier: MPL-2.0

use version_range::{Version, VersionRange};

fn v(s: &str) -> Version {
    s.parse().unwrap()
}

#[test]
fn simple_version_no_brackets() {
    let range = VersionRange::parse("2.1").unwrap();
    assert_eq!(range.min_version(), Some(&v("2.1")));
    assert!(range.is_min_inclusive());
    assert_eq!(range.max_version(), None);
    assert!(!range.is_max_inclusive());
}

#[test]
fn simple_version_no_brackets_outer_spaces() {
    let range = VersionRange::parse(" 2.1 ").unwrap();
    assert_eq!(range.min_version(), Some(&v("2.1")));
    assert!(range.is_min_inclusive());
    assert_eq!(range.max_version(), None);
    assert!(!range.is_max_inclusive());
}

#[test]
fn simple_version_no_brackets_extra_spaces() {
    let range = VersionRange::parse("  1  .  2  ").unwrap();
    assert_eq!(range.min_version().unwrap().to_string(), "1.2");
    assert_eq!(range.max_version(), None);
    assert!(!range.is_max_inclusive());
}

#[test]
fn exact_version() {
    let range = VersionRange::parse("[1.2]").unwrap();
    assert_eq!(range.min_version(), Some(&v("1.2")));
    assert!(range.is_min_inclusive());
    assert_eq!(range.max_version(), Some(&v("1.2")));
    assert!(range.is_max_inclusive());
}

#[test]
fn min_only_exclusive() {
    let range = VersionRange::parse("(1.2,)").unwrap();
    assert_eq!(range.min_version(), Some(&v("1.2")));
    assert!(!range.is_min_inclusive());
    assert_eq!(range.max_version(), None);
    assert!(!range.is_max_inclusive());
}

#[test]
fn max_only_inclusive() {
    let range = VersionRange::parse("(,1.2]").unwrap();
    assert_eq!(range.min_version(), None);
    assert!(!range.is_min_inclusive());
    assert_eq!(range.max_version(), Some(&v("1.2")));
    assert!(range.is_max_inclusive());
}

#[test]
fn max_only_exclusive() {
    let range = VersionRange::parse("(,1.2)").unwrap();
    assert_eq!(range.min_version(), None);
    assert!(!range.is_min_inclusive());
    assert_eq!(range.max_version(), Some(&v("1.2")));
    assert!(!range.is_max_inclusive());
}

#[test]
fn range_exclusive_exclusive() {
    let range = VersionRange::parse("(1.2,2.3)").unwrap();
    assert_eq!(range.min_version(), Some(&v("1.2")));
    assert!(!range.is_min_inclusive());
    assert_eq!(range.max_version(), Some(&v("2.3")));
    assert!(!range.is_max_inclusive());
}

#[test]
fn range_exclusive_inclusive() {
    let range = VersionRange::parse("(1.2,2.3]").unwrap();
    assert_eq!(range.min_version(), Some(&v("1.2")));
    assert!(!range.is_min_inclusive());
    assert_eq!(range.max_version(), Some(&v("2.3")));
    assert!(range.is_max_inclusive());
}

#[test]
fn range_inclusive_exclusive() {
    let range = VersionRange::parse("[1.2,2.3)").unwrap();
    assert_eq!(range.min_version(), Some(&v("1.2")));
    assert!(range.is_min_inclusive());
    assert_eq!(range.max_version(), Some(&v("2.3")));
    assert!(!range.is_max_inclusive());
}

#[test]
fn range_inclusive_inclusive() {
    let range = VersionRange::parse("[1.2,2.3]").unwrap();
    assert_eq!(range.min_version(), Some(&v("1.2")));
    assert!(range.is_min_inclusive());
    assert_eq!(range.max_version(), Some(&v("2.3")));
    assert!(range.is_max_inclusive());
}

#[test]
fn range_inclusive_inclusive_extra_spaces() {
    let range = VersionRange::parse("   [  1 .2   , 2  .3   ]  ").unwrap();
    assert_eq!(range, VersionRange::parse("[1.2,2.3]").unwrap());
    assert_eq!(range.min_version().unwrap().to_string(), "1.2");
    assert!(range.is_min_inclusive());
    assert_eq!(range.max_version().unwrap().to_string(), "2.3");
    assert!(range.is_max_inclusive());
}

#[test]
fn too_short_fails() {
    assert_eq!(VersionRange::parse("2"), None);
    assert_eq!(VersionRange::parse(""), None);
    assert_eq!(VersionRange::parse("   "), None);
    assert_eq!(VersionRange::parse("[]"), None);
}

#[test]
fn bad_brackets_fail() {
    assert_eq!(VersionRange::parse("1.2]"), None);
    assert_eq!(VersionRange::parse("[1.2"), None);
    assert_eq!(VersionRange::parse("<1.2>"), None);
    assert_eq!(VersionRange::parse("{1.2,2.3}"), None);
    assert_eq!(VersionRange::parse("]1.2,2.3["), None);
}

#[test]
fn too_many_commas_fail() {
    assert_eq!(VersionRange::parse("[1.2,2.3,3.4]"), None);
    assert_eq!(VersionRange::parse("(,,)"), None);
}

#[test]
fn bad_version_token_fails_the_whole_range() {
    // A malformed bound is a parse failure, not an absent bound.
    assert_eq!(VersionRange::parse("[1.2,abc]"), None);
    assert_eq!(VersionRange::parse("[abc,2.3]"), None);
    assert_eq!(VersionRange::parse("[1,2.3]"), None);
    assert_eq!(VersionRange::parse("[1.2.3.4.5,)"), None);
}

#[test]
fn round_trip_is_canonical() {
    for spec in [
        "2.1",
        " 2.1 ",
        "[1.2]",
        "(1.2,)",
        "(,1.2]",
        "(1.2,2.3]",
        "   [  1 .2   , 2  .3   ]  ",
        "[,]",
    ] {
        let range = VersionRange::parse(spec).unwrap();
        assert_eq!(
            VersionRange::parse(&range.to_string()),
            Some(range),
            "round-tripping {:?}",
            spec
        );
    }
}
