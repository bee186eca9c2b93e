//! In-memory [`PageHost`] for tests: records registrations and lets tests fire events.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::{
    host::{
        HostError, IntersectionHandler, ListenerId, Observation, ObserverId, PageHost,
        ScrollHandler, ScrollOptions,
    },
    sections::{IntersectionEntry, ObservationBand, Section},
};

/// Height given to each element by [`MockHost::with_elements`]
const DEFAULT_ELEMENT_HEIGHT: f64 = 1000.0;
const DEFAULT_VIEWPORT_HEIGHT: f64 = 1000.0;

struct MockElement {
    id: String,
    /// Document coordinates, pixels from the top of the page
    top: f64,
    height: f64,
}

struct Watch {
    band: ObservationBand,
    sections: Vec<Section>,
    inside: HashMap<Section, bool>,
}

struct MockDom {
    elements: Vec<MockElement>,
    viewport_height: f64,
    next_id: u32,
    scroll_listeners: HashMap<ListenerId, ScrollHandler>,
    observers: HashMap<ObserverId, IntersectionHandler>,
    watches: HashMap<ObserverId, Watch>,
    attached: usize,
    detached: usize,
    scroll_calls: Vec<(String, ScrollOptions)>,
    root_margins: Vec<String>,
    fail_listener: bool,
    fail_observer: bool,
}

impl Default for MockDom {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            next_id: 0,
            scroll_listeners: HashMap::new(),
            observers: HashMap::new(),
            watches: HashMap::new(),
            attached: 0,
            detached: 0,
            scroll_calls: Vec::new(),
            root_margins: Vec::new(),
            fail_listener: false,
            fail_observer: false,
        }
    }
}

/// Cloning shares the same fake document.
#[derive(Clone, Default)]
pub struct MockHost {
    dom: Rc<RefCell<MockDom>>,
}

impl MockHost {
    /// Elements stacked one after another, each a viewport tall.
    pub fn with_elements(ids: &[&str]) -> Self {
        let layout = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i as f64 * DEFAULT_ELEMENT_HEIGHT, DEFAULT_ELEMENT_HEIGHT))
            .collect::<Vec<_>>();
        Self::with_layout(DEFAULT_VIEWPORT_HEIGHT, &layout)
    }

    pub fn with_all_sections() -> Self {
        Self::with_elements(&Section::ALL.map(Section::id))
    }

    /// Elements given as `(id, top, height)` in document pixels.
    pub fn with_layout(viewport_height: f64, layout: &[(&str, f64, f64)]) -> Self {
        let host = Self::default();
        {
            let mut dom = host.dom.borrow_mut();
            dom.viewport_height = viewport_height;
            dom.elements = layout
                .iter()
                .map(|(id, top, height)| MockElement {
                    id: id.to_string(),
                    top: *top,
                    height: *height,
                })
                .collect();
        }
        host
    }

    pub fn failing_listener(self) -> Self {
        self.dom.borrow_mut().fail_listener = true;
        self
    }

    pub fn failing_observer(self) -> Self {
        self.dom.borrow_mut().fail_observer = true;
        self
    }

    /// Delivers a scroll event to every registered listener.
    pub fn scroll(&self, offset: f64) {
        // handlers may call back into the host, so don't hold the borrow
        let mut listeners = std::mem::take(&mut self.dom.borrow_mut().scroll_listeners);
        for handler in listeners.values_mut() {
            handler(offset);
        }
        self.dom.borrow_mut().scroll_listeners.extend(listeners);
    }

    /// Delivers one intersection batch to every connected observer.
    pub fn intersect(&self, batch: &[IntersectionEntry]) {
        let ids = self.dom.borrow().observers.keys().copied().collect::<Vec<_>>();
        for id in ids {
            self.deliver(id, batch);
        }
    }

    /// Scrolls the page to `offset` the way a browser would: a scroll event, then
    /// one batch per observer holding every section whose overlap with the band changed.
    pub fn scroll_page(&self, offset: f64) {
        self.scroll(offset);
        let batches = {
            let mut dom = self.dom.borrow_mut();
            let MockDom {
                elements,
                viewport_height,
                watches,
                ..
            } = &mut *dom;
            watches
                .iter_mut()
                .map(|(id, watch)| {
                    let batch = watch
                        .sections
                        .iter()
                        .filter_map(|section| {
                            let element = elements.iter().find(|e| e.id == section.id())?;
                            let top = element.top - offset;
                            let is_intersecting =
                                watch
                                    .band
                                    .intersects(*viewport_height, top, top + element.height);
                            let previous = watch.inside.insert(*section, is_intersecting);
                            (previous != Some(is_intersecting))
                                .then(|| IntersectionEntry::new(*section, is_intersecting))
                        })
                        .collect::<Vec<_>>();
                    (*id, batch)
                })
                .collect::<Vec<_>>()
        };
        for (id, batch) in batches {
            if !batch.is_empty() {
                self.deliver(id, &batch);
            }
        }
    }

    fn deliver(&self, id: ObserverId, batch: &[IntersectionEntry]) {
        let handler = self.dom.borrow_mut().observers.remove(&id);
        if let Some(mut handler) = handler {
            handler(batch);
            self.dom.borrow_mut().observers.insert(id, handler);
        }
    }

    pub fn attached(&self) -> usize {
        self.dom.borrow().attached
    }

    pub fn detached(&self) -> usize {
        self.dom.borrow().detached
    }

    pub fn live_registrations(&self) -> usize {
        let dom = self.dom.borrow();
        dom.scroll_listeners.len() + dom.observers.len()
    }

    pub fn scroll_calls(&self) -> Vec<(String, ScrollOptions)> {
        self.dom.borrow().scroll_calls.clone()
    }

    pub fn root_margins(&self) -> Vec<String> {
        self.dom.borrow().root_margins.clone()
    }

    fn has_element(dom: &MockDom, id: &str) -> bool {
        dom.elements.iter().any(|element| element.id == id)
    }

    fn next_id(dom: &mut MockDom) -> u32 {
        dom.next_id += 1;
        dom.next_id
    }
}

impl PageHost for MockHost {
    fn listen_scroll(&self, handler: ScrollHandler) -> Result<ListenerId, HostError> {
        let mut dom = self.dom.borrow_mut();
        if dom.fail_listener {
            return Err(HostError::Listener("listener rejected".to_string()));
        }
        let id = ListenerId(Self::next_id(&mut dom));
        dom.scroll_listeners.insert(id, handler);
        dom.attached += 1;
        Ok(id)
    }

    fn unlisten_scroll(&self, id: ListenerId) {
        let mut dom = self.dom.borrow_mut();
        if dom.scroll_listeners.remove(&id).is_some() {
            dom.detached += 1;
        }
    }

    fn observe_sections(
        &self,
        sections: &[Section],
        band: &ObservationBand,
        handler: IntersectionHandler,
    ) -> Result<Observation, HostError> {
        let mut dom = self.dom.borrow_mut();
        if dom.fail_observer {
            return Err(HostError::Observer("observer rejected".to_string()));
        }
        let observed = sections
            .iter()
            .copied()
            .filter(|section| Self::has_element(&dom, section.id()))
            .collect::<Vec<_>>();
        let id = ObserverId(Self::next_id(&mut dom));
        dom.observers.insert(id, handler);
        dom.watches.insert(
            id,
            Watch {
                band: band.clone(),
                sections: observed.clone(),
                inside: HashMap::new(),
            },
        );
        dom.root_margins.push(band.root_margin());
        dom.attached += 1;
        Ok(Observation { id, observed })
    }

    fn disconnect(&self, id: ObserverId) {
        let mut dom = self.dom.borrow_mut();
        dom.watches.remove(&id);
        if dom.observers.remove(&id).is_some() {
            dom.detached += 1;
        }
    }

    fn scroll_into_view(&self, id: &str, options: ScrollOptions) -> bool {
        let mut dom = self.dom.borrow_mut();
        if !Self::has_element(&dom, id) {
            return false;
        }
        dom.scroll_calls.push((id.to_string(), options));
        true
    }
}
