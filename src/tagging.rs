//! Packet tagging
//!
//! Where and when a packet was received. Tags travel in the comment block of
//! the sentence; base station and country fall back to proprietary source
//! tags when the comment block lacks them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::comment_block::{CommentBlock, TIMESTAMP_KEY};
use crate::country::Country;
use crate::errors::AisTaggingError;
use crate::models::{AisPacket, Sentence};
use crate::source_type::SourceType;

pub const SOURCE_ID_KEY: &str = "si";
pub const SOURCE_BS_KEY: &str = "sb";
pub const SOURCE_COUNTRY_KEY: &str = "sc";
pub const SOURCE_TYPE_KEY: &str = "st";

/// Tags of an AIS packet
///
/// Every field is optional, `None` meaning unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tagging {
    /// Reception time (comment block key `c`, seconds since 1970)
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Source identifier (comment block key `si`)
    pub source_id: Option<String>,
    /// Source base station MMSI (comment block key `sb`)
    pub source_bs: Option<i32>,
    /// Source country as ISO 3166 three letter code (comment block key `sc`)
    pub source_country: Option<Country>,
    /// Source type (comment block key `st`, `LIVE` or `SAT`)
    pub source_type: Option<SourceType>,
}

impl Tagging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of `other` without its source type.
    ///
    /// Unlike `clone`, the source type is not carried over.
    pub fn copy_of(other: &Tagging) -> Self {
        Self {
            timestamp: other.timestamp,
            source_id: other.source_id.clone(),
            source_bs: other.source_bs,
            source_country: other.source_country,
            source_type: None,
        }
    }

    /// True if no tag is set
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_none()
            && self.source_id.is_none()
            && self.source_bs.is_none()
            && self.source_country.is_none()
            && self.source_type.is_none()
    }

    /// New comment block holding the tags
    pub fn to_comment_block(&self) -> CommentBlock {
        let mut cb = CommentBlock::new();
        self.encode(&mut cb);
        cb
    }

    /// Write the tags into `cb`, overriding existing values
    pub fn encode<'a>(&self, cb: &'a mut CommentBlock) -> &'a mut CommentBlock {
        if let Some(timestamp) = self.timestamp {
            cb.add_timestamp(timestamp);
        }
        if let Some(source_id) = &self.source_id {
            cb.add_string(SOURCE_ID_KEY, source_id.as_str());
        }
        if let Some(source_bs) = self.source_bs {
            cb.add_int(SOURCE_BS_KEY, source_bs);
        }
        if let Some(country) = self.source_country {
            cb.add_string(SOURCE_COUNTRY_KEY, country.three_letter());
        }
        if let Some(source_type) = self.source_type {
            cb.add_string(SOURCE_TYPE_KEY, source_type.encode());
        }
        cb
    }

    /// Write the tags into `cb`, leaving keys already present untouched
    pub fn encode_preserve<'a>(&self, cb: &'a mut CommentBlock) -> &'a mut CommentBlock {
        if let Some(timestamp) = self.timestamp.filter(|_| !cb.contains(TIMESTAMP_KEY)) {
            cb.add_timestamp(timestamp);
        }
        if let Some(source_id) = self.source_id.as_ref().filter(|_| !cb.contains(SOURCE_ID_KEY)) {
            cb.add_string(SOURCE_ID_KEY, source_id.as_str());
        }
        if let Some(source_bs) = self.source_bs.filter(|_| !cb.contains(SOURCE_BS_KEY)) {
            cb.add_int(SOURCE_BS_KEY, source_bs);
        }
        if let Some(country) = self.source_country.filter(|_| !cb.contains(SOURCE_COUNTRY_KEY)) {
            cb.add_string(SOURCE_COUNTRY_KEY, country.three_letter());
        }
        if let Some(source_type) = self.source_type.filter(|_| !cb.contains(SOURCE_TYPE_KEY)) {
            cb.add_string(SOURCE_TYPE_KEY, source_type.encode());
        }
        cb
    }

    /// Tags set in `proposed` but missing from `self`.
    ///
    /// The result holds only the additions, never the tags `self` already
    /// has. Timestamps are not merged.
    pub fn merge_missing(&self, proposed: &Tagging) -> Tagging {
        Tagging {
            source_id: missing(&self.source_id, &proposed.source_id),
            source_bs: missing(&self.source_bs, &proposed.source_bs),
            source_country: missing(&self.source_country, &proposed.source_country),
            source_type: missing(&self.source_type, &proposed.source_type),
            ..Tagging::default()
        }
    }

    /// Whether `candidate` has every tag set in this filter tagging, with
    /// equal values. Timestamps are ignored.
    pub fn filter_match(&self, candidate: &Tagging) -> bool {
        required(&self.source_id, &candidate.source_id)
            && required(&self.source_bs, &candidate.source_bs)
            && required(&self.source_country, &candidate.source_country)
            && required(&self.source_type, &candidate.source_type)
    }

    /// Parse tags from a sentence.
    ///
    /// The timestamp is the reception time of the sentence; the `c` key of
    /// the comment block is not read. Comment block values take precedence,
    /// and the first proprietary source tag supplying a missing base station
    /// or country fills it in.
    pub fn parse(sentence: Option<&Sentence>) -> Result<Self, AisTaggingError> {
        let Some(sentence) = sentence else {
            return Ok(Self::default());
        };

        let mut tags = Tagging {
            timestamp: sentence.timestamp(),
            ..Tagging::default()
        };

        if let Some(cb) = sentence.comment_block() {
            tags.source_id = cb.get_string(SOURCE_ID_KEY).map(str::to_string);
            tags.source_bs = cb.get_int(SOURCE_BS_KEY);
            tags.source_country = cb.get_string(SOURCE_COUNTRY_KEY).and_then(|code| {
                let country = Country::by_code(code);
                if country.is_none() {
                    debug!("Unresolved source country in comment block: {}", code);
                }
                country
            });
            tags.source_type = SourceType::decode(cb.get_string(SOURCE_TYPE_KEY))?;
        }

        for source_tag in sentence
            .proprietary_tags()
            .filter_map(|tag| tag.as_source_tag())
        {
            if tags.source_bs.is_none() {
                tags.source_bs = source_tag.base_station_id();
                if let Some(bs) = tags.source_bs {
                    trace!("Source base station {} from proprietary tag", bs);
                }
            }
            if tags.source_country.is_none() {
                tags.source_country = source_tag.country();
                if let Some(country) = tags.source_country {
                    trace!("Source country {} from proprietary tag", country);
                }
            }
        }

        Ok(tags)
    }

    /// Parse tags from the sentence of a packet. The packet itself is required.
    pub fn parse_packet(packet: Option<&AisPacket>) -> Result<Self, AisTaggingError> {
        let packet = packet.ok_or(AisTaggingError::NullInput("packet"))?;
        Self::parse(packet.sentence())
    }
}

fn missing<T: Clone>(current: &Option<T>, proposed: &Option<T>) -> Option<T> {
    match current {
        Some(_) => None,
        None => proposed.clone(),
    }
}

fn required<T: PartialEq>(filter: &Option<T>, candidate: &Option<T>) -> bool {
    match filter {
        Some(wanted) => candidate.as_ref() == Some(wanted),
        None => true,
    }
}

/// Displays as `Tagging [timestamp=.., sourceId=.., ...]`, `null` for unset tags
impl fmt::Display for Tagging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map_or_else(|| "null".to_string(), ToString::to_string)
        }
        write!(
            f,
            "Tagging [timestamp={}, sourceId={}, sourceBs={}, sourceCountry={}, sourceType={}]",
            field(&self.timestamp),
            field(&self.source_id),
            field(&self.source_bs),
            field(&self.source_country),
            field(&self.source_type),
        )
    }
}
