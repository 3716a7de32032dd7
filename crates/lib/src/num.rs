//! Numeric range tests and digit-string inspection.

/// How a range test treats each of its two limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limits {
    /// Both limits excluded: `low < x < high`
    #[default]
    Open,
    /// Both limits included: `low <= x <= high`
    Closed,
    /// Low limit included only: `low <= x < high`
    LowClosed,
    /// High limit included only: `low < x <= high`
    HighClosed,
}

/// Returns true when `value` lies between `low` and `high` under the given
/// [`Limits`].
///
/// The limits are ordered automatically: `between(5, 10, 1, Limits::Open)`
/// tests the same range as `between(5, 1, 10, Limits::Open)`.
///
/// ```
/// use acorn::num::{between, Limits};
///
/// assert!(between(5, 1, 10, Limits::Open));
/// assert!(!between(10, 1, 10, Limits::Open));
/// assert!(between(10, 1, 10, Limits::Closed));
/// ```
pub fn between<T: PartialOrd>(value: T, low: T, high: T, limits: Limits) -> bool {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    match limits {
        Limits::Open => low < value && value < high,
        Limits::Closed => low <= value && value <= high,
        Limits::LowClosed => low <= value && value < high,
        Limits::HighClosed => low < value && value <= high,
    }
}

/// Returns true when `input` is a non-empty run of ASCII digits, optionally
/// preceded by a single `-` sign.
///
/// This is a lexical test for integer-shaped strings; it does not check that
/// the digits fit in any machine integer type.
pub fn is_int_str(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true when a float holds an exact integer value
pub fn is_int(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
