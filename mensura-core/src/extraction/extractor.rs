//! Unit block extraction state machine
//!
//! Consumes tag clusters in source order and emits one [`UnitBlock`] per
//! multiplicative factor of the tagged unit expression. Extraction never
//! fails: unexpected sequences degrade to partially filled blocks, and the
//! trailing open block is always flushed, so the result list is never
//! empty once at least the machine has run.

use std::mem;

use tracing::debug;

use crate::domain::UnitBlock;
use crate::extraction::{TagCluster, UnitLabel};

/// Machine state between clusters.
///
/// `Idle` means no factor has been opened yet; it still carries a scratch
/// block so that an exponent tagged before the first PREFIX is not lost.
/// A BASE that opens the first factor starts from a fresh block instead,
/// discarding the scratch.
enum ExtractorState {
    Idle(UnitBlock),
    Open(UnitBlock),
}

/// The structural-extraction state machine.
pub struct UnitBlockExtractor {
    state: ExtractorState,
    denominator: bool,
    previous: Option<UnitLabel>,
    blocks: Vec<UnitBlock>,
    trace: String,
}

impl UnitBlockExtractor {
    /// Fresh machine with no factors opened
    pub fn new() -> Self {
        Self {
            state: ExtractorState::Idle(UnitBlock::default()),
            denominator: false,
            previous: None,
            blocks: Vec::new(),
            trace: String::new(),
        }
    }

    /// Run the machine over a full cluster sequence
    pub fn extract(clusters: &[TagCluster]) -> Vec<UnitBlock> {
        let mut machine = Self::new();
        for cluster in clusters {
            machine.step(cluster);
        }
        machine.finish()
    }

    /// Process one cluster
    pub fn step(&mut self, cluster: &TagCluster) {
        self.append_trace(cluster);
        let text = cluster.text.as_str();

        match cluster.label {
            UnitLabel::Prefix => {
                let mut block = match self.take_state() {
                    ExtractorState::Idle(scratch) => scratch,
                    ExtractorState::Open(open) => {
                        self.finalize(open);
                        UnitBlock::default()
                    }
                };
                block.prefix = Some(text.to_string());
                self.state = ExtractorState::Open(block);
                debug!(cluster = text, "prefix");
            }
            UnitLabel::Base => {
                let mut block = match self.take_state() {
                    ExtractorState::Idle(_) => UnitBlock::default(),
                    ExtractorState::Open(open) => {
                        let mut block = if self.previous == Some(UnitLabel::Prefix) {
                            open
                        } else {
                            self.finalize(open);
                            UnitBlock::default()
                        };
                        if self.denominator {
                            block.pow = Some("-1".to_string());
                        }
                        block
                    }
                };
                block.base = Some(text.to_string());
                self.state = ExtractorState::Open(block);
                debug!(cluster = text, "base");
            }
            UnitLabel::Pow => {
                if text == "/" {
                    self.denominator = true;
                } else if text.ends_with('/') {
                    self.denominator = true;
                    self.current_mut().pow = Some(text.replace('/', ""));
                } else if text == "*" {
                    // multiplication separator, no state change
                } else if self.denominator {
                    self.current_mut().pow = Some(format!("-{text}"));
                } else {
                    self.current_mut().pow = Some(text.to_string());
                }
                debug!(cluster = text, "pow");
            }
            UnitLabel::Other | UnitLabel::ValueOther => {
                debug!(cluster = text, "other");
            }
        }

        self.previous = Some(cluster.label);
    }

    /// Flush the remaining open (or scratch) block and return the result.
    ///
    /// The final block is always pushed, so the list holds at least one
    /// element, possibly fully empty for degenerate input.
    pub fn finish(mut self) -> Vec<UnitBlock> {
        let block = match self.take_state() {
            ExtractorState::Idle(block) | ExtractorState::Open(block) => block,
        };
        self.finalize(block);
        self.blocks
    }

    fn take_state(&mut self) -> ExtractorState {
        mem::replace(&mut self.state, ExtractorState::Idle(UnitBlock::default()))
    }

    fn current_mut(&mut self) -> &mut UnitBlock {
        match &mut self.state {
            ExtractorState::Idle(block) | ExtractorState::Open(block) => block,
        }
    }

    /// The single transition that moves a block into the result list.
    fn finalize(&mut self, mut block: UnitBlock) {
        block.raw_tagged_value = self.trace.clone();
        self.blocks.push(block);
    }

    fn append_trace(&mut self, cluster: &TagCluster) {
        if let Some(open) = cluster.label.opening_tag() {
            self.trace.push_str(open);
        }
        self.trace.push_str(&cluster.text);
        if let Some(close) = cluster.label.closing_tag() {
            self.trace.push_str(close);
        }
    }
}

impl Default for UnitBlockExtractor {
    fn default() -> Self {
        Self::new()
    }
}
