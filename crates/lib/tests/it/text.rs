//! Tests for the string helpers across their public surface.

use acorn::text::{
    self, POOL_DISTINCT, Pool, TextError, Transform, begins_with, camel, contains_str, ends_with,
    is_one_of, separated, studly,
};

#[test]
fn test_case_conversion_pipeline() {
    // Typical identifier rewrites as used for config keys
    assert_eq!(studly("http_client-timeout"), "HttpClientTimeout");
    assert_eq!(camel("http_client-timeout"), "httpClientTimeout");
    assert_eq!(
        separated("HttpClientTimeout", "_", Transform::Lower),
        "http_client_timeout"
    );
    assert_eq!(
        separated("httpClientTimeout", "-", Transform::Lower),
        "http-client-timeout"
    );
}

#[test]
fn test_studly_normalizes_mixed_case_words() {
    assert_eq!(studly("FOO-bAr"), "FooBar");
    assert_eq!(studly("a"), "A");
    assert_eq!(studly(""), "");
}

#[test]
fn test_separated_keeps_acronym_runs_together() {
    // Consecutive uppercase letters form a single word
    assert_eq!(separated("HTTPClient", "_", Transform::Lower), "httpclient");
    assert_eq!(separated("parseURL", "_", Transform::Lower), "parse_url");
}

#[test]
fn test_predicates_case_sensitivity() {
    assert!(begins_with("Config.toml", "config", false));
    assert!(!begins_with("Config.toml", "config", true));
    assert!(ends_with("Config.TOML", ".toml", false));
    assert!(contains_str("a needle here", "NEEDLE", false));
    assert!(is_one_of("YES", ["yes", "no"], false));
    assert!(!is_one_of("maybe", ["yes", "no"], false));
}

#[test]
fn test_random_strings_respect_pool() {
    for length in [1, 8, 64] {
        let s = text::random(length, Pool::Distinct);
        assert_eq!(s.chars().count(), length);
        assert!(s.chars().all(|c| POOL_DISTINCT.contains(c)));
    }
}

#[test]
fn test_random_from_custom_pool() {
    let s = text::random_from(16, "ab").unwrap();
    assert!(s.chars().all(|c| c == 'a' || c == 'b'));

    let err = text::random_from(1, "").unwrap_err();
    assert!(matches!(err, TextError::InvalidArgument { .. }));
}

#[test]
fn test_error_converts_to_crate_error() {
    fn helper() -> acorn::Result<String> {
        Ok(text::random_from(4, "")?)
    }

    let err = helper().unwrap_err();
    assert_eq!(err.module(), "text");
    assert!(err.is_invalid_argument());
}
