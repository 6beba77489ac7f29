use core_types::{Channel, RangeSelector};
use serde::{Deserialize, Serialize};

/// The dashboard's filter state: which channels are active and which window is shown.
///
/// A `Selection` is an immutable value. Every change produces a new one, and the
/// caller recomputes the report from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub channels: Vec<Channel>,
    pub range: RangeSelector,
}

impl Selection {
    pub fn new(channels: Vec<Channel>, range: RangeSelector) -> Self {
        Self { channels, range }
    }

    /// Every given channel active, over the default 30-day window.
    pub fn all(channels: &[Channel]) -> Self {
        Self::new(channels.to_vec(), RangeSelector::default())
    }

    pub fn with_range(&self, range: RangeSelector) -> Self {
        Self {
            channels: self.channels.clone(),
            range,
        }
    }

    /// Deactivates `channel` if it is active, otherwise appends it to the active set.
    pub fn toggle_channel(&self, channel: &Channel) -> Self {
        let channels = if self.is_active(channel) {
            self.channels.iter().filter(|c| *c != channel).cloned().collect()
        } else {
            let mut channels = self.channels.clone();
            channels.push(channel.clone());
            channels
        };
        Self {
            channels,
            range: self.range,
        }
    }

    pub fn is_active(&self, channel: &Channel) -> bool {
        self.channels.contains(channel)
    }
}
