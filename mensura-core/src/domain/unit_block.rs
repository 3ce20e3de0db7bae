//! Structural extraction record for one multiplicative unit factor

use serde::{Deserialize, Serialize};

/// One multiplicative factor of a tagged unit expression, before any
/// normalization.
///
/// Blocks are transient: created per detected factor by the extraction
/// state machine and consumed when the unit notation is rebuilt. The
/// exponent is kept as the tagged text literal; absence means `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitBlock {
    /// SI prefix text ("k"), if tagged
    pub prefix: Option<String>,
    /// Base symbol text ("m"), if tagged
    pub base: Option<String>,
    /// Exponent literal as tagged ("2", "-1"), if any
    pub pow: Option<String>,
    /// Tagged-markup trace of the whole run, kept for training provenance
    pub raw_tagged_value: String,
}

impl UnitBlock {
    /// The exponent literal, defaulting to "1" when absent
    pub fn effective_pow(&self) -> &str {
        self.pow.as_deref().unwrap_or("1")
    }

    /// Whether no structural field was filled in
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.base.is_none() && self.pow.is_none()
    }

    /// Rebuild the symbolic notation of this factor ("km", "s^-1")
    pub fn notation(&self) -> String {
        let mut out = String::new();
        if let Some(prefix) = &self.prefix {
            out.push_str(prefix);
        }
        if let Some(base) = &self.base {
            out.push_str(base);
        }
        match &self.pow {
            Some(pow) if pow != "1" => {
                out.push('^');
                out.push_str(pow);
            }
            _ => {}
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_joins_prefix_base_and_exponent() {
        let block = UnitBlock {
            prefix: Some("k".into()),
            base: Some("m".into()),
            pow: None,
            raw_tagged_value: String::new(),
        };
        assert_eq!(block.notation(), "km");
        assert_eq!(block.effective_pow(), "1");

        let block = UnitBlock {
            prefix: None,
            base: Some("s".into()),
            pow: Some("-1".into()),
            raw_tagged_value: String::new(),
        };
        assert_eq!(block.notation(), "s^-1");
    }

    #[test]
    fn default_block_is_empty() {
        assert!(UnitBlock::default().is_empty());
    }
}
