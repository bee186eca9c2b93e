use std::{fmt, str::FromStr};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A named, anchorable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// The element id used as the anchor for this section
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Text shown on the nav link
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// One record of an intersection batch delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub section: Section,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(section: Section, is_intersecting: bool) -> Self {
        Self {
            section,
            is_intersecting,
        }
    }
}

/// The horizontal band of the viewport a section has to reach to become active.
///
/// Margins are percentages of the viewport height, shrinking the viewport
/// from the top and from the bottom respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationBand {
    #[serde(deserialize_with = "percent")]
    pub top_margin_pct: u8,
    #[serde(deserialize_with = "percent")]
    pub bottom_margin_pct: u8,
    pub threshold: f64,
}

fn percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = u8::deserialize(deserializer)?;
    if value > 100 {
        return Err(D::Error::custom(format!(
            "margin of {value}% is more than the viewport"
        )));
    }
    Ok(value)
}

impl Default for ObservationBand {
    fn default() -> Self {
        Self {
            top_margin_pct: 30,
            bottom_margin_pct: 50,
            threshold: 0.0,
        }
    }
}

impl ObservationBand {
    /// CSS margin string understood by `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        let (top, bottom) = self.margins();
        format!("-{top}% 0px -{bottom}% 0px")
    }

    /// Margins capped at the full viewport
    fn margins(&self) -> (u8, u8) {
        (self.top_margin_pct.min(100), self.bottom_margin_pct.min(100))
    }

    /// Top and bottom of the band in viewport pixels.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        let (top_pct, bottom_pct) = self.margins();
        let top = viewport_height * f64::from(top_pct) / 100.0;
        let bottom = viewport_height - viewport_height * f64::from(bottom_pct) / 100.0;
        (top, bottom)
    }

    /// Whether the vertical span `[top, bottom]` (viewport coordinates) reaches the band.
    ///
    /// Touching an edge counts, matching a zero threshold. Margins adding up to more
    /// than the viewport leave an empty band that nothing intersects.
    pub fn intersects(&self, viewport_height: f64, top: f64, bottom: f64) -> bool {
        let (band_top, band_bottom) = self.bounds(viewport_height);
        if band_top > band_bottom || top > bottom {
            return false;
        }
        top <= band_bottom && bottom >= band_top
    }
}

/// Tracks which section is active for nav highlighting.
#[derive(Debug, Clone)]
pub struct SectionObserver {
    active: Section,
    observed: Vec<Section>,
}

impl Default for SectionObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionObserver {
    pub fn new() -> Self {
        Self {
            active: Section::Home,
            observed: Vec::new(),
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Sections whose elements were found when the watcher was registered
    pub fn observed(&self) -> &[Section] {
        &self.observed
    }

    pub fn set_observed(&mut self, observed: Vec<Section>) {
        self.observed = observed;
    }

    /// Applies one host batch, last intersecting entry wins.
    ///
    /// Returns the new active section if it changed.
    pub fn apply(&mut self, batch: &[IntersectionEntry]) -> Option<Section> {
        let previous = self.active;
        if let Some(entry) = batch.iter().rev().find(|entry| entry.is_intersecting) {
            self.active = entry.section;
        }
        (self.active != previous).then_some(self.active)
    }
}
