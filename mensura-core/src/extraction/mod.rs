//! Structural extraction: from labeled characters to unit blocks

pub mod cluster;
pub mod extractor;
pub mod label;
pub mod tag_parser;

pub use cluster::{cluster_tokens, TagCluster};
pub use extractor::UnitBlockExtractor;
pub use label::UnitLabel;
pub use tag_parser::UnitTagParser;
