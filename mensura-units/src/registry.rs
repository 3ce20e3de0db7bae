//! Built-in unit and prefix registry
//!
//! Maps known symbols to fully built [`UnitExpr`] values. The table is
//! constructed once behind a `OnceLock` and treated as immutable for the
//! rest of the process. Exact symbol matches always win over prefix
//! splitting, so "h" is an hour and never hecto, and "cd" is candela and
//! never centi-day.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::expr::{LinearTransform, UnitExpr, UnitFactor};

/// An SI prefix with its exact power-of-ten scale
pub struct Prefix {
    /// Prefix symbol as written ("k", "µ", "da")
    pub symbol: &'static str,
    /// Scale numerator
    pub dividend: f64,
    /// Scale denominator
    pub divisor: f64,
}

/// Recognized SI prefixes, multi-character entries first so that longest
/// match wins during splitting.
pub const PREFIXES: &[Prefix] = &[
    Prefix { symbol: "da", dividend: 10.0, divisor: 1.0 },
    Prefix { symbol: "Y", dividend: 1e24, divisor: 1.0 },
    Prefix { symbol: "Z", dividend: 1e21, divisor: 1.0 },
    Prefix { symbol: "E", dividend: 1e18, divisor: 1.0 },
    Prefix { symbol: "P", dividend: 1e15, divisor: 1.0 },
    Prefix { symbol: "T", dividend: 1e12, divisor: 1.0 },
    Prefix { symbol: "G", dividend: 1e9, divisor: 1.0 },
    Prefix { symbol: "M", dividend: 1e6, divisor: 1.0 },
    Prefix { symbol: "k", dividend: 1e3, divisor: 1.0 },
    Prefix { symbol: "h", dividend: 1e2, divisor: 1.0 },
    Prefix { symbol: "d", dividend: 1.0, divisor: 1e1 },
    Prefix { symbol: "c", dividend: 1.0, divisor: 1e2 },
    Prefix { symbol: "m", dividend: 1.0, divisor: 1e3 },
    Prefix { symbol: "µ", dividend: 1.0, divisor: 1e6 },
    Prefix { symbol: "μ", dividend: 1.0, divisor: 1e6 },
    Prefix { symbol: "u", dividend: 1.0, divisor: 1e6 },
    Prefix { symbol: "n", dividend: 1.0, divisor: 1e9 },
    Prefix { symbol: "p", dividend: 1.0, divisor: 1e12 },
    Prefix { symbol: "f", dividend: 1.0, divisor: 1e15 },
    Prefix { symbol: "a", dividend: 1.0, divisor: 1e18 },
];

/// SI base unit symbols
pub const BASE_SYMBOLS: &[&str] = &["m", "kg", "s", "A", "K", "mol", "cd"];

/// Named SI derived units kept atomic (their own symbol is canonical)
const DERIVED_SYMBOLS: &[&str] = &[
    "N", "Pa", "J", "W", "Hz", "V", "C", "F", "T", "Wb", "lm", "lx", "Bq", "rad", "sr",
];

fn transformed(
    symbol: &str,
    parent: UnitExpr,
    transform: LinearTransform,
) -> (String, UnitExpr) {
    (
        symbol.to_string(),
        UnitExpr::LinearTransformed {
            symbol: symbol.to_string(),
            parent: Box::new(parent),
            transform,
        },
    )
}

fn cubic_metre() -> UnitExpr {
    UnitExpr::Product {
        factors: vec![UnitFactor {
            unit: UnitExpr::atomic("m"),
            exponent: 3,
        }],
    }
}

fn builtin() -> HashMap<String, UnitExpr> {
    let mut map = HashMap::new();

    // Unit identity, usable as a numerator placeholder ("1/s")
    map.insert("1".to_string(), UnitExpr::atomic("1"));

    for symbol in BASE_SYMBOLS.iter().chain(DERIVED_SYMBOLS) {
        map.insert(symbol.to_string(), UnitExpr::atomic(*symbol));
    }

    let entries = [
        transformed("g", UnitExpr::atomic("kg"), LinearTransform::scaling(1.0, 1e3)),
        transformed("t", UnitExpr::atomic("kg"), LinearTransform::scaling(1e3, 1.0)),
        transformed("min", UnitExpr::atomic("s"), LinearTransform::scaling(60.0, 1.0)),
        transformed("h", UnitExpr::atomic("s"), LinearTransform::scaling(3600.0, 1.0)),
        transformed("d", UnitExpr::atomic("s"), LinearTransform::scaling(86400.0, 1.0)),
        transformed(
            "°C",
            UnitExpr::atomic("K"),
            LinearTransform::with_offset(1.0, 1.0, 273.15),
        ),
        transformed(
            "°F",
            UnitExpr::atomic("K"),
            LinearTransform::with_offset(5.0, 9.0, 255.37222222222223),
        ),
        transformed("L", cubic_metre(), LinearTransform::scaling(1.0, 1e3)),
        transformed("l", cubic_metre(), LinearTransform::scaling(1.0, 1e3)),
        transformed("%", UnitExpr::atomic("1"), LinearTransform::scaling(1.0, 1e2)),
        transformed("bar", UnitExpr::atomic("Pa"), LinearTransform::scaling(1e5, 1.0)),
        transformed("atm", UnitExpr::atomic("Pa"), LinearTransform::scaling(101325.0, 1.0)),
        transformed(
            "eV",
            UnitExpr::atomic("J"),
            LinearTransform::scaling(1.602176634e-19, 1.0),
        ),
    ];
    map.extend(entries);

    map
}

fn registry() -> &'static HashMap<String, UnitExpr> {
    static REGISTRY: OnceLock<HashMap<String, UnitExpr>> = OnceLock::new();
    REGISTRY.get_or_init(builtin)
}

/// Resolve a single unit symbol, trying an exact match before prefix
/// splitting ("km" = "k" + "m").
pub fn resolve(symbol: &str) -> Option<UnitExpr> {
    if let Some(expr) = registry().get(symbol) {
        return Some(expr.clone());
    }
    resolve_prefixed(symbol)
}

fn resolve_prefixed(symbol: &str) -> Option<UnitExpr> {
    for prefix in PREFIXES {
        let Some(rest) = symbol.strip_prefix(prefix.symbol) else {
            continue;
        };
        if rest.is_empty() || rest == "1" || rest == "%" {
            continue;
        }
        let Some(inner) = registry().get(rest) else {
            continue;
        };
        let scale = LinearTransform::scaling(prefix.dividend, prefix.divisor);
        match inner {
            UnitExpr::Atomic { .. } => {
                return Some(UnitExpr::LinearTransformed {
                    symbol: symbol.to_string(),
                    parent: Box::new(inner.clone()),
                    transform: scale,
                });
            }
            UnitExpr::LinearTransformed {
                parent, transform, ..
            } if transform.offset == 0.0 => {
                return Some(UnitExpr::LinearTransformed {
                    symbol: symbol.to_string(),
                    parent: parent.clone(),
                    transform: scale.scaled_by(transform),
                });
            }
            _ => continue,
        }
    }
    None
}

/// All registered unit symbols (no prefixed combinations)
pub fn unit_symbols() -> impl Iterator<Item = &'static str> {
    registry().keys().map(String::as_str)
}

/// All recognized prefix symbols
pub fn prefix_symbols() -> impl Iterator<Item = &'static str> {
    PREFIXES.iter().map(|p| p.symbol)
}
