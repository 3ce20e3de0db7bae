//! Unit-definition catalogue
//!
//! Maps canonical unit notations to their physical dimension and unit
//! system. The system classification drives the choice between the strict
//! and broad unit grammars during normalization.

pub mod loader;
pub mod types;

pub use loader::{Catalogue, CatalogueError};
pub use types::{SystemType, UnitDefinition, UnitType};
