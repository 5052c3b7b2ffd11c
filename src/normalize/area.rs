use once_cell::sync::Lazy;
use regex::Regex;

/// First `(number)(unit letters)` token in an area string.
static AREA_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*([a-zA-Z][a-zA-Z. ]*)?").expect("area token pattern is valid")
});

/// Default display unit when the string carries none.
const DEFAULT_UNIT: &str = "sq ft";

/// Parse a free-text area string into `(magnitude, display unit)`.
///
/// Only the magnitude participates in range filtering; the unit is carried
/// verbatim for display and never converted between unit systems. No match
/// yields `(0.0, "sq ft")`.
pub fn parse_area(raw: &str) -> (f64, String) {
    let captures = match AREA_TOKEN.captures(raw) {
        Some(c) => c,
        None => return (0.0, DEFAULT_UNIT.to_string()),
    };

    let value = captures
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0);

    let unit = captures
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_UNIT)
        .to_string();

    (value, unit)
}
