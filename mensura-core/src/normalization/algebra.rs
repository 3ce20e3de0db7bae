//! Seam to the unit-algebra kernel

use mensura_units::{Profile, UnitExpr, UnitParseError};

/// Parsing and formatting capability required by the normalizers.
///
/// The default implementation delegates to `mensura-units`; the trait
/// exists so tests and embedders can substitute their own grammar.
pub trait UnitAlgebra: Send + Sync {
    /// Parse a unit symbol string under the given grammar profile
    fn parse(&self, symbol: &str, profile: Profile) -> Result<UnitExpr, UnitParseError>;

    /// Render a factor decomposition as a canonical symbol string
    fn format(&self, factors: &[(String, i32)]) -> String;
}

/// The built-in SI-aware algebra
#[derive(Debug, Clone, Copy, Default)]
pub struct SiAlgebra;

impl UnitAlgebra for SiAlgebra {
    fn parse(&self, symbol: &str, profile: Profile) -> Result<UnitExpr, UnitParseError> {
        mensura_units::parse(symbol, profile)
    }

    fn format(&self, factors: &[(String, i32)]) -> String {
        mensura_units::format_factors(factors)
    }
}
