//! Data model shared across the extraction and normalization stages

pub mod measurement;
pub mod quantity;
pub mod span;
pub mod unit;
pub mod unit_block;

pub use measurement::Measurement;
pub use quantity::{NormalizedQuantity, Quantity};
pub use span::Span;
pub use unit::Unit;
pub use unit_block::UnitBlock;
