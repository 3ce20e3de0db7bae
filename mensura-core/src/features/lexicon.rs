//! Lexicon lookups for feature extraction

use std::collections::HashSet;

use crate::catalogue::Catalogue;

/// Dictionary membership queries used to build tagger features.
///
/// Implementations must be safe to share read-only across pipeline
/// instances.
pub trait Lexicon: Send + Sync {
    /// Whether the token appears in the unit dictionary
    fn in_unit_dictionary(&self, token: &str) -> bool;

    /// Whether the token appears in the prefix dictionary
    fn in_prefix_dictionary(&self, token: &str) -> bool;
}

/// Lexicon backed by the unit catalogue and the built-in symbol registry.
///
/// Features are per-character, so membership covers whole notations as
/// well as every character occurring in one.
#[derive(Debug)]
pub struct CatalogueLexicon {
    unit_tokens: HashSet<String>,
    prefix_tokens: HashSet<String>,
}

impl CatalogueLexicon {
    /// Build the lexicon from a catalogue plus the registry symbols
    pub fn new(catalogue: &Catalogue) -> Self {
        let mut unit_tokens = HashSet::new();
        for definition in catalogue.definitions() {
            for notation in &definition.notations {
                unit_tokens.insert(notation.clone());
                for ch in notation.chars() {
                    unit_tokens.insert(ch.to_string());
                }
            }
        }
        for symbol in mensura_units::registry::unit_symbols() {
            unit_tokens.insert(symbol.to_string());
            for ch in symbol.chars() {
                unit_tokens.insert(ch.to_string());
            }
        }

        let mut prefix_tokens = HashSet::new();
        for symbol in mensura_units::registry::prefix_symbols() {
            prefix_tokens.insert(symbol.to_string());
            for ch in symbol.chars() {
                prefix_tokens.insert(ch.to_string());
            }
        }

        Self {
            unit_tokens,
            prefix_tokens,
        }
    }
}

impl Lexicon for CatalogueLexicon {
    fn in_unit_dictionary(&self, token: &str) -> bool {
        self.unit_tokens.contains(token)
    }

    fn in_prefix_dictionary(&self, token: &str) -> bool {
        self.prefix_tokens.contains(token)
    }
}
