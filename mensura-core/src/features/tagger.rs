//! Sequence-labeling seam

use crate::extraction::UnitLabel;
use crate::features::FeatureVector;

/// The external sequence labeler: one label per input feature vector.
///
/// The labeling engine itself (CRF or otherwise) is outside the pipeline;
/// implementations must be deterministic for a fixed feature sequence and
/// safe to share across threads.
pub trait Tagger: Send + Sync {
    /// Assign a label to every feature vector, in order
    fn tag(&self, features: &[FeatureVector]) -> Vec<UnitLabel>;
}
