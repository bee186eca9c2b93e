use thiserror::Error;

use super::sections::{IntersectionEntry, ObservationBand, Section};

/// Called with the current vertical scroll offset on every scroll event
pub type ScrollHandler = Box<dyn FnMut(f64)>;
/// Called with each batch of intersection records
pub type IntersectionHandler = Box<dyn FnMut(&[IntersectionEntry])>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAlignment {
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: BlockAlignment,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: BlockAlignment::Start,
        }
    }
}

/// Result of registering an intersection watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub id: ObserverId,
    /// Sections that had an element in the document at registration time
    pub observed: Vec<Section>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("couldn't attach scroll listener: {0}")]
    Listener(String),
    #[error("couldn't create intersection observer: {0}")]
    Observer(String),
}

/// The slice of the DOM the page chrome depends on.
///
/// Methods take `&self`; implementations keep their registrations behind
/// interior mutability, the same way DOM handles do.
pub trait PageHost {
    fn listen_scroll(&self, handler: ScrollHandler) -> Result<ListenerId, HostError>;

    fn unlisten_scroll(&self, id: ListenerId);

    /// Watches every listed section that currently has an element.
    ///
    /// Missing elements are skipped, not an error. Elements added later are not picked up.
    fn observe_sections(
        &self,
        sections: &[Section],
        band: &ObservationBand,
        handler: IntersectionHandler,
    ) -> Result<Observation, HostError>;

    fn disconnect(&self, id: ObserverId);

    /// Scrolls the element with `id` into view, returning false if there is no such element.
    fn scroll_into_view(&self, id: &str, options: ScrollOptions) -> bool;
}
