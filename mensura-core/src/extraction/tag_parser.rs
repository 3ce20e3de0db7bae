//! End-to-end parsing of a raw unit run into unit blocks

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Span, UnitBlock};
use crate::extraction::{cluster_tokens, UnitBlockExtractor};
use crate::features::{FeatureExtractor, Lexicon, Tagger};

/// Drives the full structural pipeline for one unit run: feature
/// extraction, sequence labeling, clustering, block extraction.
pub struct UnitTagParser {
    features: FeatureExtractor,
    tagger: Arc<dyn Tagger>,
}

impl UnitTagParser {
    pub fn new(lexicon: Arc<dyn Lexicon>, tagger: Arc<dyn Tagger>) -> Self {
        Self {
            features: FeatureExtractor::new(lexicon),
            tagger,
        }
    }

    /// Parse one raw unit run into its multiplicative blocks.
    ///
    /// Blank input yields no blocks at all, so callers can distinguish
    /// "nothing tagged" from a degenerate single empty block. Newlines are
    /// treated as plain spaces before tokenization.
    pub fn parse(&self, raw: &str, unit_left: bool) -> Vec<UnitBlock> {
        if raw.trim().is_empty() {
            return Vec::new();
        }
        let cleaned = raw.replace('\n', " ");

        let features = self.features.extract(&cleaned, unit_left);
        let labels = self.tagger.tag(&features);

        let tokens: Vec<(char, Span)> = cleaned
            .chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .map(|(offset, ch)| (ch, Span::new(offset, offset + 1)))
            .collect();

        let clusters = cluster_tokens(&tokens, &labels);
        debug!(input = raw, clusters = clusters.len(), "clustered unit run");

        UnitBlockExtractor::extract(&clusters)
    }
}
