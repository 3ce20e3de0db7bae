//! Normalization failure modes

use std::num::ParseFloatError;

use mensura_units::UnitParseError;
use thiserror::Error;

/// Errors surfaced by quantity normalization.
///
/// A missing catalogue definition is not an error: normalization proceeds
/// with an unclassified unit. An empty quantity is a valid `None` result,
/// not a failure.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// The unit string was rejected by every grammar it was routed through
    #[error("unit {raw:?} is not recognized by any grammar")]
    UnparsableUnit {
        /// The unit string as written
        raw: String,
        #[source]
        source: UnitParseError,
    },
    /// The numeric value could not be interpreted or converted
    #[error("numeric value {raw:?} cannot be converted")]
    UnconvertibleValue {
        /// The value string as written
        raw: String,
        #[source]
        source: Option<ParseFloatError>,
    },
}
