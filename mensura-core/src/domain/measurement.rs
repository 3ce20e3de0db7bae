//! Measurement variants
//!
//! A measurement groups one or more quantities into the shape they take in
//! the text: a single value, an interval (min/max or base±range), or a
//! conjunction/list. Each variant may point at the text span of the thing
//! being measured.

use serde::{Deserialize, Serialize};

use crate::domain::{Quantity, Span};

/// A measurement as expressed in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    /// A single value: "10 °C"
    Value {
        /// The quantity
        quantity: Quantity,
        /// Span of the measured object, when identified
        quantified_object: Option<Span>,
    },
    /// An interval given by its bounds: "between 2 and 5 km"
    IntervalMinMax {
        /// Lower bound
        least: Quantity,
        /// Upper bound
        most: Quantity,
        /// Span of the measured object, when identified
        quantified_object: Option<Span>,
    },
    /// An interval given by a base value and a range: "5 ± 0.2 km"
    IntervalBaseRange {
        /// Central value
        base: Quantity,
        /// Range around the central value
        range: Quantity,
        /// Span of the measured object, when identified
        quantified_object: Option<Span>,
    },
    /// A list of values sharing one measured object: "5, 6 and 8 m"
    Conjunction {
        /// The listed quantities, in source order
        quantities: Vec<Quantity>,
        /// Span of the measured object, when identified
        quantified_object: Option<Span>,
    },
}

impl Measurement {
    /// All quantities contained in this measurement, in source order
    pub fn quantities(&self) -> Vec<&Quantity> {
        match self {
            Measurement::Value { quantity, .. } => vec![quantity],
            Measurement::IntervalMinMax { least, most, .. } => vec![least, most],
            Measurement::IntervalBaseRange { base, range, .. } => vec![base, range],
            Measurement::Conjunction { quantities, .. } => quantities.iter().collect(),
        }
    }

    /// Span of the measured object, when identified
    pub fn quantified_object(&self) -> Option<Span> {
        match self {
            Measurement::Value {
                quantified_object, ..
            }
            | Measurement::IntervalMinMax {
                quantified_object, ..
            }
            | Measurement::IntervalBaseRange {
                quantified_object, ..
            }
            | Measurement::Conjunction {
                quantified_object, ..
            } => *quantified_object,
        }
    }

    /// Smallest span covering every contained quantity
    pub fn span(&self) -> Option<Span> {
        self.quantities()
            .iter()
            .map(|q| q.span)
            .reduce(|a, b| a.cover(&b))
    }

    /// Offsets of sibling quantities must be non-decreasing and disjoint.
    pub fn has_consistent_offsets(&self) -> bool {
        let quantities = self.quantities();
        quantities
            .windows(2)
            .all(|pair| pair[0].span.end <= pair[1].span.start)
    }
}
