//! Shared read-only pipeline context

use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::extraction::UnitTagParser;
use crate::features::{CatalogueLexicon, Lexicon, Tagger};
use crate::normalization::{QuantityNormalizer, SiAlgebra, UnitAlgebra};

/// Explicitly constructed handles to the catalogue, lexicon and unit
/// algebra. Everything inside is read-only, so the context can be cloned
/// and shared freely across worker threads running independent pipelines.
#[derive(Clone)]
pub struct PipelineContext {
    catalogue: Arc<Catalogue>,
    lexicon: Arc<dyn Lexicon>,
    algebra: Arc<dyn UnitAlgebra>,
}

impl PipelineContext {
    pub fn new(
        catalogue: Arc<Catalogue>,
        lexicon: Arc<dyn Lexicon>,
        algebra: Arc<dyn UnitAlgebra>,
    ) -> Self {
        Self {
            catalogue,
            lexicon,
            algebra,
        }
    }

    /// Context over the embedded catalogue and the built-in SI algebra
    pub fn with_defaults() -> Self {
        let catalogue = Catalogue::global();
        let lexicon = Arc::new(CatalogueLexicon::new(&catalogue));
        Self::new(catalogue, lexicon, Arc::new(SiAlgebra))
    }

    pub fn catalogue(&self) -> Arc<Catalogue> {
        Arc::clone(&self.catalogue)
    }

    pub fn lexicon(&self) -> Arc<dyn Lexicon> {
        Arc::clone(&self.lexicon)
    }

    pub fn algebra(&self) -> Arc<dyn UnitAlgebra> {
        Arc::clone(&self.algebra)
    }

    /// Normalizer bound to this context's catalogue and algebra
    pub fn normalizer(&self) -> QuantityNormalizer {
        QuantityNormalizer::from_context(self)
    }

    /// Structural parser bound to this context's lexicon and the given tagger
    pub fn tag_parser(&self, tagger: Arc<dyn Tagger>) -> UnitTagParser {
        UnitTagParser::new(self.lexicon(), tagger)
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::with_defaults()
    }
}
