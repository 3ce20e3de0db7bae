//! Unit algebra kernel for mensura
//!
//! This crate turns symbolic unit expressions ("km/h", "m·kg/s²") into a
//! closed algebraic representation and computes their SI-base equivalents.
//! It is deliberately free of any pipeline orchestration: the extraction
//! and normalization layers live in `mensura-core` and consume this crate
//! through the [`parse`] / [`format_factors`] surface.
//!
//! # Example
//!
//! ```rust
//! use mensura_units::{parse, Profile};
//!
//! let expr = parse("km/h", Profile::Strict).unwrap();
//! assert_eq!(expr.canonical_base_symbol(), "m/s");
//! let to_base = expr.system_transform();
//! assert_eq!(to_base.convert(2.0).to_string(), "0.5555555555555556");
//! ```

pub mod error;
pub mod expr;
pub mod format;
pub mod parser;
pub mod registry;

pub use error::UnitParseError;
pub use expr::{LinearTransform, UnitExpr, UnitFactor};
pub use format::format_factors;
pub use parser::{parse, Profile};
