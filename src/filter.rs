//! Filtering packets on their tagging

use tracing::warn;

use crate::errors::AisTaggingError;
use crate::models::AisPacket;
use crate::tagging::Tagging;

/// Accepts packets whose tagging carries every tag of the filter tagging
#[derive(Debug, Clone, Default)]
pub struct TaggingFilter {
    tagging: Tagging,
}

impl TaggingFilter {
    pub fn new(tagging: Tagging) -> Self {
        Self { tagging }
    }

    pub fn tagging(&self) -> &Tagging {
        &self.tagging
    }

    pub fn accepts(&self, packet: &AisPacket) -> Result<bool, AisTaggingError> {
        let candidate = Tagging::parse_packet(Some(packet))?;
        Ok(self.tagging.filter_match(&candidate))
    }

    /// Accepted packets of `packets`.
    ///
    /// Packets with unparsable tags are dropped.
    pub fn retain<'a, I>(&'a self, packets: I) -> impl Iterator<Item = &'a AisPacket> + 'a
    where
        I: IntoIterator<Item = &'a AisPacket>,
        I::IntoIter: 'a,
    {
        packets
            .into_iter()
            .filter(move |packet| match self.accepts(packet) {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Dropping packet with invalid tagging: {}", e);
                    false
                }
            })
    }
}
