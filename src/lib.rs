//! AIS packet tagging
//!
//! Source and reception metadata of AIS packets, carried in sentence comment
//! blocks with fallback to proprietary source tags.

pub mod comment_block;
pub mod config;
pub mod country;
pub mod errors;
pub mod filter;
pub mod models;
pub mod source_type;
pub mod tagging;
pub mod transform;

pub use comment_block::CommentBlock;
pub use country::Country;
pub use errors::AisTaggingError;
pub use models::{AisPacket, ProprietaryTag, Sentence, SourceTag};
pub use source_type::SourceType;
pub use tagging::Tagging;
