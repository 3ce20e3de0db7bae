//! Per-character feature extraction for the unit tagger

pub mod lexicon;
pub mod tagger;

pub use lexicon::{CatalogueLexicon, Lexicon};
pub use tagger::Tagger;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Feature vector for one input character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// The character, as a string token
    pub text: String,
    /// Character offset in the cleaned input
    pub position: usize,
    /// Whether the character is an ASCII digit
    pub is_digit: bool,
    /// Whether the character is alphabetic
    pub is_alpha: bool,
    /// Unit-dictionary membership
    pub in_unit_dictionary: bool,
    /// Prefix-dictionary membership
    pub in_prefix_dictionary: bool,
    /// Whether the unit appears before the value in the text ("pH 5.5")
    pub unit_left: bool,
}

/// Builds per-character feature vectors from raw text.
///
/// Whitespace characters carry no signal for unit tagging and are skipped,
/// so the output aligns with the non-blank characters of the input.
pub struct FeatureExtractor {
    lexicon: Arc<dyn Lexicon>,
}

impl FeatureExtractor {
    /// Create an extractor over the given lexicon
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Extract one feature vector per non-blank character
    pub fn extract(&self, text: &str, unit_left: bool) -> Vec<FeatureVector> {
        let mut features = Vec::new();
        for (position, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let token = ch.to_string();
            features.push(FeatureVector {
                is_digit: ch.is_ascii_digit(),
                is_alpha: ch.is_alphabetic(),
                in_unit_dictionary: self.lexicon.in_unit_dictionary(&token),
                in_prefix_dictionary: self.lexicon.in_prefix_dictionary(&token),
                unit_left,
                position,
                text: token,
            });
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;

    #[test]
    fn whitespace_is_skipped_and_positions_are_preserved() {
        let lexicon = Arc::new(CatalogueLexicon::new(&Catalogue::global()));
        let extractor = FeatureExtractor::new(lexicon);
        let features = extractor.extract("k m", false);

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].text, "k");
        assert_eq!(features[0].position, 0);
        assert!(features[0].in_prefix_dictionary);
        assert_eq!(features[1].text, "m");
        assert_eq!(features[1].position, 2);
        assert!(features[1].in_unit_dictionary);
    }

    #[test]
    fn orientation_flag_is_threaded_through() {
        let lexicon = Arc::new(CatalogueLexicon::new(&Catalogue::global()));
        let extractor = FeatureExtractor::new(lexicon);
        let features = extractor.extract("m", true);
        assert!(features[0].unit_left);
    }
}
