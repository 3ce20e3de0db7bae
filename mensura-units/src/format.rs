//! Canonical rendering of unit factor lists
//!
//! Positive-exponent factors are joined with the middle dot, negative ones
//! move behind a single slash, exponents above one are rendered as Unicode
//! superscripts: `[("m", 1), ("s", -2)]` becomes `m/s²`.

const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn superscript(value: u32) -> String {
    value
        .to_string()
        .chars()
        .map(|c| SUPERSCRIPTS[c.to_digit(10).unwrap_or(0) as usize])
        .collect()
}

fn render_factor(symbol: &str, magnitude: u32) -> String {
    if magnitude == 1 {
        symbol.to_string()
    } else {
        format!("{}{}", symbol, superscript(magnitude))
    }
}

/// Render a list of `(symbol, exponent)` factors as a canonical unit string.
///
/// An empty list (fully cancelled product) renders as the unit identity "1".
pub fn format_factors(factors: &[(String, i32)]) -> String {
    let numerator: Vec<String> = factors
        .iter()
        .filter(|(_, e)| *e > 0)
        .map(|(s, e)| render_factor(s, *e as u32))
        .collect();
    let denominator: Vec<String> = factors
        .iter()
        .filter(|(_, e)| *e < 0)
        .map(|(s, e)| render_factor(s, e.unsigned_abs()))
        .collect();

    let mut out = if numerator.is_empty() {
        "1".to_string()
    } else {
        numerator.join("·")
    };
    if !denominator.is_empty() {
        out.push('/');
        out.push_str(&denominator.join("·"));
    }
    out
}
