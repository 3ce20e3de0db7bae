//! Symbolic unit expression parsing
//!
//! Two grammars cover the split the normalizer needs: [`Profile::Strict`]
//! assumes well-formed SI notation and rejects anything ambiguous, while
//! [`Profile::Broad`] is the tolerant UCUM-flavoured grammar used for
//! unknown or non-SI symbols. The broad grammar accepts a superset of
//! malformed input that would silently misparse well-formed SI strings,
//! which is why the profiles are never merged.

use crate::error::{Result, UnitParseError};
use crate::expr::{UnitExpr, UnitFactor};
use crate::registry;

/// Which grammar to trust for a given symbol string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Well-formed SI notation only: `·`, `*`, `/` separators, caret or
    /// superscript exponents, no embedded whitespace
    Strict,
    /// Tolerant grammar: additionally `.` as a product separator, glued
    /// signed-digit exponents ("s-2"), whitespace tolerance, lowercase
    /// fallback lookup, leading `/`
    Broad,
}

struct RawFactor {
    text: String,
    denominator: bool,
}

const SUPERSCRIPT_MINUS: char = '⁻';

fn superscript_digit(ch: char) -> Option<u32> {
    match ch {
        '⁰' => Some(0),
        '¹' => Some(1),
        '²' => Some(2),
        '³' => Some(3),
        '⁴' => Some(4),
        '⁵' => Some(5),
        '⁶' => Some(6),
        '⁷' => Some(7),
        '⁸' => Some(8),
        '⁹' => Some(9),
        _ => None,
    }
}

fn malformed(input: &str, reason: &str) -> UnitParseError {
    UnitParseError::Malformed {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a symbolic unit expression under the given profile.
pub fn parse(input: &str, profile: Profile) -> Result<UnitExpr> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UnitParseError::Empty);
    }

    let normalized: String = match profile {
        Profile::Strict => {
            if trimmed.chars().any(char::is_whitespace) {
                return Err(malformed(input, "embedded whitespace"));
            }
            trimmed.to_string()
        }
        Profile::Broad => trimmed.chars().filter(|c| !c.is_whitespace()).collect(),
    };

    let raw_factors = tokenize(&normalized, profile)?;
    if raw_factors.is_empty() {
        return Err(malformed(input, "no unit factors"));
    }

    let mut factors: Vec<UnitFactor> = Vec::with_capacity(raw_factors.len());
    for raw in &raw_factors {
        let (symbol, mut exponent) = split_exponent(&raw.text, profile)
            .ok_or_else(|| malformed(input, "unparsable exponent"))?;
        if raw.denominator {
            exponent = -exponent;
        }
        let unit = resolve_symbol(&symbol, profile)
            .ok_or_else(|| UnitParseError::UnknownSymbol(symbol.clone()))?;
        // Identity factors ("1/s") carry no dimension of their own
        if unit.symbol() == Some("1") {
            continue;
        }
        factors.push(UnitFactor { unit, exponent });
    }

    match factors.len() {
        0 => Ok(UnitExpr::atomic("1")),
        1 if factors[0].exponent == 1 => Ok(factors.remove(0).unit),
        _ => Ok(UnitExpr::Product { factors }),
    }
}

fn tokenize(input: &str, profile: Profile) -> Result<Vec<RawFactor>> {
    let mut factors = Vec::new();
    let mut current = String::new();
    let mut denominator = false;
    let mut trailing_separator = false;

    for ch in input.chars() {
        let is_product_sep =
            matches!(ch, '·' | '⋅' | '*') || (profile == Profile::Broad && ch == '.');
        if is_product_sep || ch == '/' {
            if current.is_empty() {
                // A leading "/" (empty numerator) is tolerated by the broad
                // grammar only; everything else is a dangling separator.
                if profile == Profile::Strict {
                    return Err(malformed(input, "dangling separator"));
                }
            } else {
                factors.push(RawFactor {
                    text: std::mem::take(&mut current),
                    denominator,
                });
            }
            if ch == '/' {
                denominator = true;
            }
            trailing_separator = true;
        } else {
            current.push(ch);
            trailing_separator = false;
        }
    }

    if !current.is_empty() {
        factors.push(RawFactor {
            text: current,
            denominator,
        });
    } else if trailing_separator && profile == Profile::Strict {
        return Err(malformed(input, "dangling separator"));
    }

    Ok(factors)
}

/// Split a factor token into its symbol and exponent parts.
///
/// Returns `None` only for a structurally broken exponent (e.g. "m^").
fn split_exponent(token: &str, profile: Profile) -> Option<(String, i32)> {
    // Caret notation: "m^2", "s^-1"
    if let Some(pos) = token.find('^') {
        let symbol = &token[..pos];
        let exp = &token[pos + 1..];
        if symbol.is_empty() || exp.is_empty() {
            return None;
        }
        return exp.parse::<i32>().ok().map(|e| (symbol.to_string(), e));
    }

    // Superscript notation: "m²", "s⁻¹"
    let chars: Vec<char> = token.chars().collect();
    let digits_end = chars.len();
    let mut digits_start = digits_end;
    while digits_start > 0 && superscript_digit(chars[digits_start - 1]).is_some() {
        digits_start -= 1;
    }
    if digits_start < digits_end {
        let mut negative = false;
        let mut symbol_end = digits_start;
        if symbol_end > 0 && chars[symbol_end - 1] == SUPERSCRIPT_MINUS {
            negative = true;
            symbol_end -= 1;
        }
        if symbol_end > 0 {
            let mut value: i32 = 0;
            for &c in &chars[digits_start..digits_end] {
                value = value.checked_mul(10)?.checked_add(superscript_digit(c)? as i32)?;
            }
            let symbol: String = chars[..symbol_end].iter().collect();
            return Some((symbol, if negative { -value } else { value }));
        }
    }

    // Glued ASCII digits ("s-2", "m2"): broad grammar only
    if profile == Profile::Broad {
        let bytes = token.as_bytes();
        let mut start = bytes.len();
        while start > 0 && bytes[start - 1].is_ascii_digit() {
            start -= 1;
        }
        if start < bytes.len() && start > 0 {
            let mut symbol_end = start;
            if matches!(bytes[start - 1], b'-' | b'+') && start > 1 {
                symbol_end -= 1;
            }
            if symbol_end > 0 {
                let exp = token[symbol_end..].parse::<i32>().ok()?;
                return Some((token[..symbol_end].to_string(), exp));
            }
        }
    }

    Some((token.to_string(), 1))
}

fn resolve_symbol(symbol: &str, profile: Profile) -> Option<UnitExpr> {
    if let Some(expr) = registry::resolve(symbol) {
        return Some(expr);
    }
    if profile == Profile::Broad {
        return registry::resolve(&symbol.to_lowercase());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parses_plain_si_symbols() {
        assert_eq!(parse("m", Profile::Strict).unwrap(), UnitExpr::atomic("m"));
        assert!(matches!(
            parse("km", Profile::Strict).unwrap(),
            UnitExpr::LinearTransformed { .. }
        ));
        assert!(matches!(
            parse("°C", Profile::Strict).unwrap(),
            UnitExpr::LinearTransformed { .. }
        ));
    }

    #[test]
    fn strict_parses_quotients_and_products() {
        let expr = parse("km/h", Profile::Strict).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "m/s");

        let expr = parse("km·kg/h", Profile::Strict).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "m·kg/s");
    }

    #[test]
    fn strict_rejects_what_broad_accepts() {
        assert!(parse("m.s-2", Profile::Strict).is_err());
        let expr = parse("m.s-2", Profile::Broad).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "m/s²");
    }

    #[test]
    fn both_profiles_reject_garbage() {
        assert!(matches!(
            parse("xyzzy", Profile::Strict),
            Err(UnitParseError::UnknownSymbol(_))
        ));
        assert!(matches!(
            parse("xyzzy", Profile::Broad),
            Err(UnitParseError::UnknownSymbol(_))
        ));
        assert!(matches!(parse("  ", Profile::Broad), Err(UnitParseError::Empty)));
    }

    #[test]
    fn strict_rejects_dangling_separators_and_whitespace() {
        assert!(parse("km/", Profile::Strict).is_err());
        assert!(parse("/s", Profile::Strict).is_err());
        assert!(parse("k m", Profile::Strict).is_err());
    }

    #[test]
    fn broad_tolerates_whitespace_and_leading_slash() {
        let expr = parse("m / s", Profile::Broad).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "m/s");

        let expr = parse("/s", Profile::Broad).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "1/s");

        let expr = parse("1/s", Profile::Broad).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "1/s");
    }

    #[test]
    fn superscript_and_caret_exponents() {
        let expr = parse("m/s²", Profile::Strict).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "m/s²");

        let expr = parse("m/s^2", Profile::Strict).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "m/s²");

        let expr = parse("s⁻¹", Profile::Strict).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "1/s");
    }

    #[test]
    fn denominator_persists_after_slash() {
        // Mirrors the tagging state machine: once "/" is seen, every
        // following factor lives in the denominator.
        let expr = parse("m/s·kg", Profile::Strict).unwrap();
        assert_eq!(
            expr.base_factors(),
            vec![
                ("m".to_string(), 1),
                ("s".to_string(), -1),
                ("kg".to_string(), -1)
            ]
        );
    }

    #[test]
    fn broad_lowercase_fallback() {
        let expr = parse("KM/H", Profile::Broad).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "m/s");
    }

    #[test]
    fn identity_numerator_is_dropped() {
        assert_eq!(parse("1", Profile::Broad).unwrap(), UnitExpr::atomic("1"));
    }

    #[test]
    fn single_factor_with_exponent_stays_a_product() {
        let expr = parse("m²", Profile::Strict).unwrap();
        assert!(matches!(expr, UnitExpr::Product { .. }));
        assert_eq!(expr.canonical_base_symbol(), "m²");
    }

    #[test]
    fn prefixed_derived_unit() {
        let expr = parse("kN", Profile::Strict).unwrap();
        assert_eq!(expr.canonical_base_symbol(), "N");
        assert_eq!(expr.system_transform().convert(2.0), 2000.0);
    }
}
