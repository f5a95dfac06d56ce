//! Tagging transformer
//!
//! Stamps a configured tagging onto the comment block of passing sentences.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::config::TransformConfig;
use crate::errors::AisTaggingError;
use crate::models::{AisPacket, Sentence};
use crate::tagging::Tagging;

/// How the configured tagging is combined with existing tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Add only tags the sentence does not already carry, in its comment
    /// block or its proprietary source tags
    #[default]
    PrependMissing,
    /// Overwrite comment block values
    MergeOverride,
    /// Add keys missing from the comment block
    MergePreserve,
}

#[derive(Debug, Clone)]
pub struct TaggingTransformer {
    policy: Policy,
    tagging: Tagging,
}

impl TaggingTransformer {
    pub fn new(policy: Policy, tagging: Tagging) -> Self {
        Self { policy, tagging }
    }

    pub fn from_config(config: &TransformConfig) -> Result<Self, AisTaggingError> {
        config.validate()?;
        Ok(Self::new(config.policy, config.tagging.clone()))
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn tagging(&self) -> &Tagging {
        &self.tagging
    }

    /// Apply the tagging to the comment block of `sentence`, creating the
    /// block if needed.
    pub fn transform(&self, sentence: &mut Sentence) -> Result<(), AisTaggingError> {
        match self.policy {
            Policy::PrependMissing => {
                let current = Tagging::parse(Some(sentence))?;
                let added = current.merge_missing(&self.tagging);
                if added.is_empty() {
                    trace!("No missing tags for sentence: {}", current);
                    return Ok(());
                }
                debug!("Adding missing tags: {}", added);
                added.encode(sentence.comment_block_mut());
            }
            Policy::MergeOverride => {
                self.tagging.encode(sentence.comment_block_mut());
            }
            Policy::MergePreserve => {
                self.tagging.encode_preserve(sentence.comment_block_mut());
            }
        }
        Ok(())
    }

    /// Apply the tagging to the sentence of `packet`, if it has one
    pub fn transform_packet(&self, packet: &mut AisPacket) -> Result<(), AisTaggingError> {
        match packet.sentence_mut() {
            Some(sentence) => self.transform(sentence),
            None => {
                debug!("Packet without sentence left untagged");
                Ok(())
            }
        }
    }
}
