/// Rupees per crore.
const CRORE: f64 = 10_000_000.0;
/// Rupees per lakh.
const LAKH: f64 = 100_000.0;

/// Parse a free-text price string into a rupee magnitude.
///
/// The numeral is whatever survives stripping everything but digits and the
/// decimal point, so currency symbols and Indian digit grouping
/// (`"₹45,00,000"`) fall away. Unit keywords are detected anywhere in the
/// original string, case-insensitively: `cr` scales by crore, `lac`/`lakh`
/// by lakh, neither leaves the numeral in base units. When both keywords
/// appear, crore wins; a deliberate tie-break rather than an error.
///
/// Unparsable input yields `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    let numeral: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let magnitude: f64 = match numeral.parse() {
        Ok(v) => v,
        Err(_) => return 0.0,
    };

    let lower = raw.to_lowercase();
    if lower.contains("cr") {
        magnitude * CRORE
    } else if lower.contains("lac") || lower.contains("lakh") {
        magnitude * LAKH
    } else {
        magnitude
    }
}
