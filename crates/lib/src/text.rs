//! String inspection, case conversion, and random generation helpers.
//!
//! Everything here operates on `&str` and allocates only for results. Case
//! conversions are ASCII-oriented: non-ASCII characters pass through
//! untouched, which keeps the transforms cheap and predictable for the
//! identifier-style inputs they are meant for.

use rand::Rng;
use thiserror::Error;

/// Lowercase letters a-z
pub const POOL_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase letters A-Z
pub const POOL_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Decimal digits 0-9
pub const POOL_DIGITS: &str = "0123456789";
/// Decimal digits without 0 and 1, which read ambiguously in some fonts
pub const POOL_DIGITS_DISTINCT: &str = "2345679";
/// Letters and digits
pub const POOL_ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Letters and digits with visually ambiguous characters removed
pub const POOL_DISTINCT: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ2345679";

/// Errors from text helpers.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum TextError {
    /// A helper received an argument outside its accepted range
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },
}

impl From<TextError> for crate::Error {
    fn from(err: TextError) -> Self {
        crate::Error::Text(err)
    }
}

/// The character pool a random string is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pool {
    /// Lowercase letters only
    Lower,
    /// Uppercase letters only
    Upper,
    /// Decimal digits only
    Digits,
    /// Letters and digits
    #[default]
    Alphanumeric,
    /// Letters and digits excluding visually ambiguous characters
    Distinct,
}

impl Pool {
    fn chars(self) -> &'static str {
        match self {
            Pool::Lower => POOL_LOWERCASE,
            Pool::Upper => POOL_UPPERCASE,
            Pool::Digits => POOL_DIGITS,
            Pool::Alphanumeric => POOL_ALPHANUMERIC,
            Pool::Distinct => POOL_DISTINCT,
        }
    }
}

/// The casing style applied to each word during a separated-case
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Leave each word as-is
    #[default]
    None,
    /// Lowercase every word
    Lower,
    /// Uppercase every word
    Upper,
    /// Uppercase the first letter of each word, lowercase the rest
    UcWords,
    /// Lowercase the first letter of each word, leave the rest
    LcWords,
}

/// Returns a string of `length` characters drawn uniformly from `chars`.
///
/// Fails when `chars` is empty and `length` is non-zero.
pub fn random_from(length: usize, chars: &str) -> Result<String, TextError> {
    if length == 0 {
        return Ok(String::new());
    }
    let pool: Vec<char> = chars.chars().collect();
    if pool.is_empty() {
        return Err(TextError::InvalidArgument {
            reason: "random pool must not be empty".to_string(),
        });
    }

    let mut rng = rand::thread_rng();
    Ok((0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

/// Returns a random string of `length` characters from a named [`Pool`].
pub fn random(length: usize, pool: Pool) -> String {
    // A non-empty built-in pool cannot fail
    random_from(length, pool.chars()).unwrap_or_default()
}

/// Uppercases the first character, leaving the rest untouched
pub fn ucfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character, leaving the rest untouched
pub fn lcfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-cases every whitespace-separated word: the first character is
/// uppercased and the rest lowercased
pub fn ucwords(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Returns true when `haystack` starts with `needle`.
///
/// With `case_sensitive = false` the comparison ignores ASCII case.
pub fn begins_with(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        haystack.starts_with(needle)
    } else {
        haystack.len() >= needle.len()
            && haystack
                .get(..needle.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(needle))
    }
}

/// Returns true when `haystack` ends with `needle`.
///
/// With `case_sensitive = false` the comparison ignores ASCII case.
pub fn ends_with(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        haystack.ends_with(needle)
    } else {
        haystack.len() >= needle.len()
            && haystack
                .get(haystack.len() - needle.len()..)
                .is_some_and(|suffix| suffix.eq_ignore_ascii_case(needle))
    }
}

/// Returns true when `haystack` contains `needle`.
///
/// The empty needle is contained in every string. With
/// `case_sensitive = false` the comparison ignores ASCII case.
pub fn contains_str(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        haystack.contains(needle)
    } else {
        haystack
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
    }
}

/// Returns true when `value` equals one of `candidates`.
///
/// With `case_sensitive = false` the comparison ignores ASCII case.
pub fn is_one_of<I, S>(value: &str, candidates: I, case_sensitive: bool) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates.into_iter().any(|candidate| {
        let candidate = candidate.as_ref();
        if case_sensitive {
            value == candidate
        } else {
            value.eq_ignore_ascii_case(candidate)
        }
    })
}

/// Converts a separated or spaced string to StudlyCaps.
///
/// Words are split on ASCII `-`, `_`, and whitespace; each word is
/// capitalized and the separators are dropped.
///
/// ```
/// assert_eq!(acorn::text::studly("foo-bar_baz"), "FooBarBaz");
/// ```
pub fn studly(input: &str) -> String {
    input
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect()
}

/// Converts a separated or spaced string to camelCase.
///
/// Same word splitting as [`studly`], with the first word lowercased.
pub fn camel(input: &str) -> String {
    lcfirst(&studly(input))
}

/// Converts a StudlyCaps or camelCase string into words joined by
/// `separator`, applying `transform` to each word.
///
/// A word boundary sits before every uppercase ASCII letter that follows a
/// non-uppercase character.
///
/// ```
/// use acorn::text::{separated, Transform};
///
/// assert_eq!(separated("FooBarBaz", "-", Transform::Lower), "foo-bar-baz");
/// assert_eq!(separated("fooBar", "_", Transform::None), "foo_Bar");
/// ```
pub fn separated(input: &str, separator: &str, transform: Transform) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_upper = true;

    for c in input.chars() {
        let is_upper = c.is_ascii_uppercase();
        if is_upper && !prev_upper && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev_upper = is_upper;
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .into_iter()
        .map(|word| apply_transform(&word, transform))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Truncates to at most `limit` characters, appending `continuation` when
/// anything was cut off.
///
/// The continuation does not count against the limit.
pub fn truncate(input: &str, limit: usize, continuation: &str) -> String {
    let mut out: String = input.chars().take(limit).collect();
    if out.len() < input.len() {
        out.push_str(continuation);
    }
    out
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

fn apply_transform(word: &str, transform: Transform) -> String {
    match transform {
        Transform::None => word.to_string(),
        Transform::Lower => word.to_lowercase(),
        Transform::Upper => word.to_uppercase(),
        Transform::UcWords => capitalize_word(word),
        Transform::LcWords => lcfirst(word),
    }
}
