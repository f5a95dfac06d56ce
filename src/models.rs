//! Data models.
//!
//! Decoded AIS sentences as seen by the tagging layer: a reception
//! timestamp, an optional comment block and the proprietary tags that
//! preceded the sentence.

use chrono::{DateTime, Utc};

use crate::comment_block::CommentBlock;
use crate::country::Country;

/// Proprietary source tag, as emitted by base station vendors
///
/// Carries the MMSI of the receiving base station and its country when the
/// vendor supplies them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceTag {
    /// MMSI of the receiving base station
    pub base_mmsi: Option<i32>,
    pub country: Option<Country>,
}

impl SourceTag {
    pub fn new(base_mmsi: Option<i32>, country: Option<Country>) -> Self {
        Self { base_mmsi, country }
    }

    pub fn base_station_id(&self) -> Option<i32> {
        self.base_mmsi
    }

    pub fn country(&self) -> Option<Country> {
        self.country
    }
}

/// Proprietary tag preceding a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProprietaryTag {
    /// Tag carrying source information
    Source(SourceTag),
    /// Any other vendor tag, kept verbatim
    Other { raw: String },
}

impl ProprietaryTag {
    pub fn as_source_tag(&self) -> Option<&SourceTag> {
        match self {
            ProprietaryTag::Source(tag) => Some(tag),
            ProprietaryTag::Other { .. } => None,
        }
    }
}

impl From<SourceTag> for ProprietaryTag {
    fn from(tag: SourceTag) -> Self {
        ProprietaryTag::Source(tag)
    }
}

/// Decoded AIS sentence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    /// Reception time of the sentence
    pub timestamp: Option<DateTime<Utc>>,
    pub comment_block: Option<CommentBlock>,
    /// Proprietary tags in the order they were received
    pub tags: Vec<ProprietaryTag>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_comment_block(mut self, comment_block: CommentBlock) -> Self {
        self.comment_block = Some(comment_block);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<ProprietaryTag>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn comment_block(&self) -> Option<&CommentBlock> {
        self.comment_block.as_ref()
    }

    /// Comment block of the sentence, created empty if missing
    pub fn comment_block_mut(&mut self) -> &mut CommentBlock {
        self.comment_block.get_or_insert_with(CommentBlock::default)
    }

    pub fn proprietary_tags(&self) -> impl Iterator<Item = &ProprietaryTag> {
        self.tags.iter()
    }
}

/// AIS packet, possibly without a successfully decoded sentence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AisPacket {
    sentence: Option<Sentence>,
}

impl AisPacket {
    pub fn new(sentence: Option<Sentence>) -> Self {
        Self { sentence }
    }

    pub fn sentence(&self) -> Option<&Sentence> {
        self.sentence.as_ref()
    }

    pub fn sentence_mut(&mut self) -> Option<&mut Sentence> {
        self.sentence.as_mut()
    }
}

impl From<Sentence> for AisPacket {
    fn from(sentence: Sentence) -> Self {
        Self::new(Some(sentence))
    }
}
