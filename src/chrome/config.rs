use serde::{Deserialize, Serialize};

use super::sections::{ObservationBand, Section};

/// Distance from the top, in pixels, within which the navbar always shows.
pub const NAV_REVEAL_OFFSET: f64 = 80.0;

/// Tunables for [`PageChromeController`](super::PageChromeController).
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub nav_reveal_offset: f64,
    pub band: ObservationBand,
    pub sections: Vec<Section>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            nav_reveal_offset: NAV_REVEAL_OFFSET,
            band: ObservationBand::default(),
            sections: Section::ALL.to_vec(),
        }
    }
}
