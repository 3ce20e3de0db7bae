//! Quantity normalization: unit algebra, grammar selection, composition

pub mod algebra;
pub mod error;
pub mod normalizer;
pub mod wrapper;

pub use algebra::{SiAlgebra, UnitAlgebra};
pub use error::NormalizationError;
pub use normalizer::QuantityNormalizer;
pub use wrapper::NormalizationWrapper;
