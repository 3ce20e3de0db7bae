//! Algebraic representation of parsed units
//!
//! A parsed unit is one of three shapes: an irreducible atomic unit, a
//! linear transformation of a parent unit (prefixed units, °C, minutes),
//! or a product of factors raised to integer powers. The three-way split
//! is a closed union so every consumer matches exhaustively.

use serde::{Deserialize, Serialize};

use crate::format::format_factors;

/// Linear mapping from a unit to its parent: `value * dividend / divisor + offset`.
///
/// The scale is kept as an exact dividend/divisor pair rather than a single
/// precomputed ratio. Conversions multiply the value by the dividend before
/// dividing, which is what keeps chained decimal factors (1000, 3600, ...)
/// exact until the final division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTransform {
    /// Numerator of the scale factor
    pub dividend: f64,
    /// Denominator of the scale factor
    pub divisor: f64,
    /// Additive offset applied after scaling (°C -> K and friends)
    pub offset: f64,
}

impl LinearTransform {
    /// The identity transform
    pub const IDENTITY: LinearTransform = LinearTransform {
        dividend: 1.0,
        divisor: 1.0,
        offset: 0.0,
    };

    /// Pure scaling transform
    pub fn scaling(dividend: f64, divisor: f64) -> Self {
        Self {
            dividend,
            divisor,
            offset: 0.0,
        }
    }

    /// Scaling transform with an additive offset
    pub fn with_offset(dividend: f64, divisor: f64, offset: f64) -> Self {
        Self {
            dividend,
            divisor,
            offset,
        }
    }

    /// Apply the transform to a value
    pub fn convert(&self, value: f64) -> f64 {
        value * self.dividend / self.divisor + self.offset
    }

    /// Whether this transform is the identity
    pub fn is_identity(&self) -> bool {
        self.dividend == self.divisor && self.offset == 0.0
    }

    /// Compose two pure scalings (offsets do not compose linearly and are
    /// dropped; product accumulation only ever needs the scale part)
    pub fn scaled_by(&self, other: &LinearTransform) -> LinearTransform {
        LinearTransform::scaling(self.dividend * other.dividend, self.divisor * other.divisor)
    }
}

/// One multiplicative factor of a product unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitFactor {
    /// The factor itself (atomic or linearly transformed, never a product)
    pub unit: UnitExpr,
    /// Signed integer exponent
    pub exponent: i32,
}

/// A parsed unit expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnitExpr {
    /// An irreducible unit with its own canonical symbol ("m", "K", "N")
    Atomic {
        /// Canonical symbol
        symbol: String,
    },
    /// A unit expressible as `scale * x + offset` of a parent unit ("km", "°C")
    LinearTransformed {
        /// The symbol as written ("km")
        symbol: String,
        /// The parent unit the transform leads to
        parent: Box<UnitExpr>,
        /// The transform from this unit to the parent
        transform: LinearTransform,
    },
    /// A multiplicative composition of factors ("m/s", "km·kg/h")
    Product {
        /// Ordered factors, source order preserved
        factors: Vec<UnitFactor>,
    },
}

impl UnitExpr {
    /// Convenience constructor for atomic units
    pub fn atomic(symbol: impl Into<String>) -> Self {
        UnitExpr::Atomic {
            symbol: symbol.into(),
        }
    }

    /// The printable symbol of this unit, if it has one of its own
    pub fn symbol(&self) -> Option<&str> {
        match self {
            UnitExpr::Atomic { symbol } => Some(symbol),
            UnitExpr::LinearTransformed { symbol, .. } => Some(symbol),
            UnitExpr::Product { .. } => None,
        }
    }

    /// Decompose into irreducible base factors, merged by symbol.
    ///
    /// First-appearance order is preserved so that "km·g/h" decomposes to
    /// m, kg, s in that order.
    pub fn base_factors(&self) -> Vec<(String, i32)> {
        let mut out: Vec<(String, i32)> = Vec::new();
        self.collect_base_factors(1, &mut out);
        out.retain(|(_, exponent)| *exponent != 0);
        out
    }

    fn collect_base_factors(&self, exponent: i32, out: &mut Vec<(String, i32)>) {
        match self {
            UnitExpr::Atomic { symbol } => {
                if symbol != "1" {
                    match out.iter_mut().find(|(s, _)| s == symbol) {
                        Some((_, e)) => *e += exponent,
                        None => out.push((symbol.clone(), exponent)),
                    }
                }
            }
            UnitExpr::LinearTransformed { parent, .. } => {
                parent.collect_base_factors(exponent, out);
            }
            UnitExpr::Product { factors } => {
                for factor in factors {
                    factor.unit.collect_base_factors(exponent * factor.exponent, out);
                }
            }
        }
    }

    /// The transform from this unit to its SI-base (system) equivalent.
    ///
    /// Atomic units are already canonical; products accumulate the scale of
    /// every factor raised to its exponent. Offsets only survive on a
    /// top-level linearly transformed unit.
    pub fn system_transform(&self) -> LinearTransform {
        match self {
            UnitExpr::Atomic { .. } => LinearTransform::IDENTITY,
            UnitExpr::LinearTransformed { parent, transform, .. } => {
                let upstream = parent.system_transform();
                LinearTransform::with_offset(
                    transform.dividend * upstream.dividend,
                    transform.divisor * upstream.divisor,
                    transform.offset + upstream.offset,
                )
            }
            UnitExpr::Product { factors } => {
                let mut acc = LinearTransform::IDENTITY;
                for factor in factors {
                    let scale = factor.unit.system_transform();
                    for _ in 0..factor.exponent.unsigned_abs() {
                        if factor.exponent > 0 {
                            acc = acc.scaled_by(&scale);
                        } else {
                            acc = acc
                                .scaled_by(&LinearTransform::scaling(scale.divisor, scale.dividend));
                        }
                    }
                }
                acc
            }
        }
    }

    /// Canonical symbol of the SI-base equivalent of this unit
    pub fn canonical_base_symbol(&self) -> String {
        match self {
            UnitExpr::Atomic { symbol } => symbol.clone(),
            UnitExpr::LinearTransformed { parent, .. } => parent.canonical_base_symbol(),
            UnitExpr::Product { .. } => format_factors(&self.base_factors()),
        }
    }
}
