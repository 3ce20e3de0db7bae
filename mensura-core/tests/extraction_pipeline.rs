//! Structural extraction from labeled text to unit blocks

use std::sync::Arc;

use proptest::prelude::*;

use mensura_core::context::PipelineContext;
use mensura_core::domain::Span;
use mensura_core::extraction::{TagCluster, UnitBlockExtractor, UnitLabel};
use mensura_core::features::{FeatureVector, Tagger};

/// Tagger stub replaying a fixed label sequence
struct FixedTagger(Vec<UnitLabel>);

impl Tagger for FixedTagger {
    fn tag(&self, _features: &[FeatureVector]) -> Vec<UnitLabel> {
        self.0.clone()
    }
}

fn clusters(parts: &[(UnitLabel, &str)]) -> Vec<TagCluster> {
    let mut offset = 0;
    parts.iter()
        .map(|(label, text)| {
            let span = Span::new(offset, offset + text.chars().count());
            offset = span.end;
            TagCluster::new(*label, *text, span)
        })
        .collect()
}

#[test]
fn prefixed_quotient_splits_into_numerator_and_denominator_blocks() {
    use UnitLabel::*;
    let blocks = UnitBlockExtractor::extract(&clusters(&[
        (Prefix, "k"),
        (Base, "m"),
        (Pow, "/"),
        (Base, "s"),
    ]));

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].prefix.as_deref(), Some("k"));
    assert_eq!(blocks[0].base.as_deref(), Some("m"));
    assert_eq!(blocks[0].effective_pow(), "1");
    assert_eq!(blocks[1].base.as_deref(), Some("s"));
    assert_eq!(blocks[1].effective_pow(), "-1");
}

#[test]
fn full_pipeline_produces_blocks_and_notation() {
    use UnitLabel::*;
    let context = PipelineContext::with_defaults();
    let parser = context.tag_parser(Arc::new(FixedTagger(vec![Prefix, Base, Pow, Base])));

    let blocks = parser.parse("km/h", false);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].notation(), "km");
    assert_eq!(blocks[1].notation(), "h^-1");
}

#[test]
fn blank_text_produces_no_blocks_at_all() {
    let context = PipelineContext::with_defaults();
    let parser = context.tag_parser(Arc::new(FixedTagger(vec![])));
    assert!(parser.parse(" \n ", false).is_empty());
}

fn label_strategy() -> impl Strategy<Value = UnitLabel> {
    prop_oneof![
        Just(UnitLabel::Prefix),
        Just(UnitLabel::Base),
        Just(UnitLabel::Pow),
        Just(UnitLabel::Other),
        Just(UnitLabel::ValueOther),
    ]
}

proptest! {
    /// Extraction degrades gracefully: it never panics and always yields
    /// at least one block, whatever the cluster sequence looks like.
    #[test]
    fn extraction_never_fails_and_never_returns_an_empty_list(
        sequence in prop::collection::vec((label_strategy(), "[a-z0-9/*·°-]{0,3}"), 0..12)
    ) {
        let clusters: Vec<TagCluster> = {
            let mut offset = 0;
            sequence.iter()
                .map(|(label, text)| {
                    let span = Span::new(offset, offset + text.chars().count());
                    offset = span.end;
                    TagCluster::new(*label, text.clone(), span)
                })
                .collect()
        };

        let blocks = UnitBlockExtractor::extract(&clusters);
        prop_assert!(!blocks.is_empty());
    }
}
