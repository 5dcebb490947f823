//! Numeric coercion shared by the comparison atoms.

/// Converts a single operand into a number.
///
/// An empty operand counts as `0`. Anything that is not a plain decimal literal
/// (optionally signed, optionally with a fraction or exponent) becomes `NaN`,
/// which makes every later comparison against it false.
///
/// ```
/// use scene_syntax::numeric_value;
/// assert_eq!(numeric_value("42"), 42.0);
/// assert_eq!(numeric_value(""), 0.0);
/// assert!(numeric_value("lots").is_nan());
/// ```
pub fn numeric_value(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    // `str::parse::<f64>` also accepts `inf` and `NaN`; those are not numbers
    // a user can type into a filter box.
    if !raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    raw.parse().unwrap_or(f64::NAN)
}

/// Converts an `h:mm:ss` style duration into seconds.
///
/// Components are folded left to right (`result * 60 + component`), so any
/// number of components is accepted: `"90"` is ninety seconds, `"1:30"` is
/// ninety seconds as well and `"1:02:03"` is 3723 seconds.
///
/// ```
/// use scene_syntax::duration_to_seconds;
/// assert_eq!(duration_to_seconds("1:02:03"), 3723.0);
/// assert_eq!(duration_to_seconds("90"), 90.0);
/// assert_eq!(duration_to_seconds(""), 0.0);
/// assert!(duration_to_seconds("1:xx").is_nan());
/// ```
pub fn duration_to_seconds(text: &str) -> f64 {
    text.split(':')
        .fold(0.0, |seconds, component| seconds * 60.0 + numeric_value(component))
}
