//! Scientific-quantity extraction and unit normalization pipeline.
//!
//! Two coupled stages: structural extraction turns a per-character
//! sequence-labeling output into [`UnitBlock`] records (one per
//! multiplicative factor of a composite unit), and normalization converts
//! a quantity's parsed unit to its SI-base-equivalent value and symbol.
//!
//! The sequence labeler itself is a collaborator behind the
//! [`Tagger`](features::Tagger) trait; the unit algebra lives in the
//! `mensura-units` kernel crate behind
//! [`UnitAlgebra`](normalization::UnitAlgebra).
//!
//! ```
//! use mensura_core::context::PipelineContext;
//! use mensura_core::domain::{Quantity, Unit};
//!
//! let context = PipelineContext::with_defaults();
//! let mut quantity = Quantity::from_raw_value("2");
//! quantity.raw_unit = Some(Unit::new("km/h"));
//!
//! let normalized = context.normalizer().normalize(&mut quantity)?.unwrap();
//! assert_eq!(normalized.unit.raw_name, "m/s");
//! assert_eq!(normalized.value.to_string(), "0.5555555555555556");
//! # Ok::<(), mensura_core::normalization::NormalizationError>(())
//! ```

pub mod catalogue;
pub mod context;
pub mod domain;
pub mod extraction;
pub mod features;
pub mod normalization;

pub use catalogue::{Catalogue, CatalogueError, SystemType, UnitDefinition, UnitType};
pub use context::PipelineContext;
pub use domain::{Measurement, NormalizedQuantity, Quantity, Span, Unit, UnitBlock};
pub use extraction::{TagCluster, UnitBlockExtractor, UnitLabel, UnitTagParser};
pub use features::{FeatureExtractor, FeatureVector, Lexicon, Tagger};
pub use normalization::{
    NormalizationError, NormalizationWrapper, QuantityNormalizer, UnitAlgebra,
};
