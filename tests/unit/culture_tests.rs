/*!
 * Tests for the culture registry and culture-aware parsing
 */

#![allow(non_snake_case)]

use lineconv::culture::{format_date_time_invariant, format_f64_invariant, Culture};

/// Test that the empty culture name resolves to the invariant culture
#[test]
fn test_resolve_withEmptyName_shouldReturnInvariantCulture() {
    let culture = Culture::resolve("").expect("invariant culture should resolve");
    assert_eq!(culture.name(), "");
    assert_eq!(culture.decimal_separator(), '.');
}

/// Test that well-known culture tags resolve with their conventions
#[test]
fn test_resolve_withKnownTags_shouldReturnExpectedSeparators() {
    assert_eq!(Culture::resolve("en-US").unwrap().decimal_separator(), '.');
    assert_eq!(Culture::resolve("fr-FR").unwrap().decimal_separator(), ',');
    assert_eq!(Culture::resolve("de-DE").unwrap().decimal_separator(), ',');
    assert_eq!(Culture::resolve("ru-RU").unwrap().decimal_separator(), ',');
}

/// Test that an unknown culture name is rejected
#[test]
fn test_resolve_withUnknownName_shouldReturnError() {
    assert!(Culture::resolve("xx-YY").is_err());
    assert!(Culture::resolve("nonsense").is_err());
}

/// Test culture-aware floating point parsing under several cultures
#[test]
fn test_parse_f64_withCultureConventions_shouldHonorSeparators() {
    let en = Culture::resolve("en-US").unwrap();
    assert_eq!(en.parse_f64("123.45"), Some(123.45));
    assert_eq!(en.parse_f64("1,234.5"), Some(1234.5));
    assert_eq!(en.parse_f64("-0.5"), Some(-0.5));

    let fr = Culture::resolve("fr-FR").unwrap();
    assert_eq!(fr.parse_f64("123,45"), Some(123.45));
    assert_eq!(fr.parse_f64("1 234,5"), Some(1234.5));

    let de = Culture::resolve("de-DE").unwrap();
    assert_eq!(de.parse_f64("123,45"), Some(123.45));
    assert_eq!(de.parse_f64("1.234,5"), Some(1234.5));
}

/// Test that exponents and signs are accepted
#[test]
fn test_parse_f64_withExponent_shouldParse() {
    let en = Culture::resolve("en-US").unwrap();
    assert_eq!(en.parse_f64("1e3"), Some(1000.0));
    assert_eq!(en.parse_f64("1.5E-2"), Some(0.015));
    assert_eq!(en.parse_f64("+2"), Some(2.0));
}

/// Test that non-numeric strings are non-matches, not errors
#[test]
fn test_parse_f64_withInvalidInput_shouldReturnNone() {
    let en = Culture::resolve("en-US").unwrap();
    assert_eq!(en.parse_f64(""), None);
    assert_eq!(en.parse_f64("abc"), None);
    assert_eq!(en.parse_f64("1.2.3"), None);
    assert_eq!(en.parse_f64("-"), None);
    // a space is not a group separator for en-US
    assert_eq!(en.parse_f64("12 34"), None);
    // the textual special values of f64::from_str are not numbers here
    assert_eq!(en.parse_f64("inf"), None);
    assert_eq!(en.parse_f64("NaN"), None);
}

/// Test that ISO date forms are accepted under every culture
#[test]
fn test_parse_date_time_withIsoInput_shouldParseForAnyCulture() {
    for name in ["en-US", "fr-FR", "de-DE", "ja-JP"] {
        let culture = Culture::resolve(name).unwrap();
        let parsed = culture
            .parse_date_time("2009-06-15 13:45:30")
            .unwrap_or_else(|| panic!("ISO date should parse under {}", name));
        assert_eq!(format_date_time_invariant(&parsed), "06/15/2009 13:45:30");
    }
}

/// Test that the culture controls short date field order
#[test]
fn test_parse_date_time_withShortDate_shouldFollowCultureFieldOrder() {
    let en = Culture::resolve("en-US").unwrap();
    let parsed = en.parse_date_time("6/15/2009").unwrap();
    assert_eq!(format_date_time_invariant(&parsed), "06/15/2009 00:00:00");

    let fr = Culture::resolve("fr-FR").unwrap();
    let parsed = fr.parse_date_time("15/06/2009 13:45").unwrap();
    assert_eq!(format_date_time_invariant(&parsed), "06/15/2009 13:45:00");

    let ru = Culture::resolve("ru-RU").unwrap();
    let parsed = ru.parse_date_time("15.06.2009").unwrap();
    assert_eq!(format_date_time_invariant(&parsed), "06/15/2009 00:00:00");
}

/// Test that unparseable strings are date non-matches
#[test]
fn test_parse_date_time_withInvalidInput_shouldReturnNone() {
    let en = Culture::resolve("en-US").unwrap();
    assert!(en.parse_date_time("2017").is_none());
    assert!(en.parse_date_time("15/06/2009").is_none()); // month 15 does not exist
    assert!(en.parse_date_time("not a date").is_none());
}

/// Test the invariant number formatting is the shortest round-trip form
#[test]
fn test_format_f64_invariant_shouldUseShortestForm() {
    assert_eq!(format_f64_invariant(123.45), "123.45");
    assert_eq!(format_f64_invariant(1234.5), "1234.5");
    assert_eq!(format_f64_invariant(10.0), "10");
    assert_eq!(format_f64_invariant(-0.5), "-0.5");
}
