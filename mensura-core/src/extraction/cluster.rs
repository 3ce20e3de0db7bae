//! Grouping of labeled tokens into contiguous same-label runs

use serde::{Deserialize, Serialize};

use crate::domain::Span;
use crate::extraction::UnitLabel;

/// A contiguous run of tokens sharing one label, with concatenated text
/// and merged source offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCluster {
    /// The shared label
    pub label: UnitLabel,
    /// Concatenated token text
    pub text: String,
    /// Merged source offsets
    pub span: Span,
}

impl TagCluster {
    /// Convenience constructor, mainly for tests and adapters
    pub fn new(label: UnitLabel, text: impl Into<String>, span: Span) -> Self {
        Self {
            label,
            text: text.into(),
            span,
        }
    }
}

/// Cluster a labeled token sequence into same-label runs.
///
/// Label sequences that do not line up with the tokens degrade gracefully:
/// missing labels count as [`UnitLabel::Other`], surplus labels are
/// ignored. Extraction must always receive a best-effort cluster list.
pub fn cluster_tokens(tokens: &[(char, Span)], labels: &[UnitLabel]) -> Vec<TagCluster> {
    let mut clusters: Vec<TagCluster> = Vec::new();

    for (index, (ch, span)) in tokens.iter().enumerate() {
        let label = labels.get(index).copied().unwrap_or(UnitLabel::Other);
        match clusters.last_mut() {
            Some(last) if last.label == label => {
                last.text.push(*ch);
                last.span = last.span.cover(span);
            }
            _ => clusters.push(TagCluster {
                label,
                text: ch.to_string(),
                span: *span,
            }),
        }
    }

    clusters
}
