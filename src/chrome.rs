//! Scroll-aware page chrome: navbar visibility, active section, and anchor navigation.

mod config;
mod host;
#[cfg(test)]
mod mock;
mod navigator;
mod reveal;
mod scroll;
mod sections;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::{ChromeConfig, NAV_REVEAL_OFFSET};
pub use host::{
    BlockAlignment, HostError, IntersectionHandler, ListenerId, Observation, ObserverId, PageHost,
    ScrollBehavior, ScrollHandler, ScrollOptions,
};
pub use navigator::Navigator;
pub use reveal::{RevealLatch, REVEAL_THRESHOLD};
pub use scroll::ScrollTracker;
pub use sections::{IntersectionEntry, ObservationBand, ParseSectionError, Section, SectionObserver};

use std::{cell::RefCell, rc::Rc};

use log::{debug, warn};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    #[error("page chrome is already mounted")]
    AlreadyMounted,
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Handle returned by the `on_*` subscription methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u32);

struct ChromeState {
    scroll: ScrollTracker,
    sections: SectionObserver,
}

impl ChromeState {
    fn new(config: &ChromeConfig) -> Self {
        Self {
            scroll: ScrollTracker::new(config.nav_reveal_offset),
            sections: SectionObserver::new(),
        }
    }
}

type Listener<T> = Rc<RefCell<dyn FnMut(T)>>;

struct Listeners<T> {
    entries: Vec<(Subscription, Listener<T>)>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Listeners<T> {
    fn contains(&self, subscription: Subscription) -> bool {
        self.entries.iter().any(|(id, _)| *id == subscription)
    }

    fn remove(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != subscription);
        before != self.entries.len()
    }
}

#[derive(Default)]
struct Subscribers {
    next_id: u32,
    scroll: Listeners<bool>,
    active: Listeners<Section>,
}

impl Subscribers {
    fn next(&mut self) -> Subscription {
        self.next_id += 1;
        Subscription(self.next_id)
    }

    fn remove(&mut self, subscription: Subscription) -> bool {
        // an id lives in at most one list
        self.scroll.remove(subscription) || self.active.remove(subscription)
    }

    fn clear(&mut self) {
        self.scroll.entries.clear();
        self.active.entries.clear();
    }

    fn scroll_listeners(&self) -> &Listeners<bool> {
        &self.scroll
    }

    fn active_listeners(&self) -> &Listeners<Section> {
        &self.active
    }
}

/// Calls every listener subscribed when dispatch started.
///
/// No borrow of `subscribers` is held across a callback, so callbacks may subscribe
/// or unsubscribe. Listeners removed mid-dispatch are skipped; ones added mid-dispatch
/// first fire on the next change.
fn dispatch<T: Copy>(
    subscribers: &RefCell<Subscribers>,
    select: fn(&Subscribers) -> &Listeners<T>,
    value: T,
) {
    let snapshot = select(&subscribers.borrow()).entries.clone();
    for (id, listener) in snapshot {
        if !select(&subscribers.borrow()).contains(id) {
            continue;
        }
        // a listener already running further up the stack is not re-entered
        if let Ok(mut callback) = listener.try_borrow_mut() {
            (&mut *callback)(value);
        };
    }
}

struct Registration {
    listener: ListenerId,
    observer: ObserverId,
}

/// Owns the scroll and section state for one mounted page.
///
/// `mount` attaches one scroll listener and one intersection watcher to the host;
/// `unmount` (or dropping the controller) releases both and drops every subscription.
pub struct PageChromeController<H: PageHost> {
    host: H,
    config: ChromeConfig,
    navigator: Navigator,
    state: Rc<RefCell<ChromeState>>,
    subscribers: Rc<RefCell<Subscribers>>,
    registration: Option<Registration>,
}

impl<H: PageHost> PageChromeController<H> {
    pub fn new(host: H, config: ChromeConfig) -> Self {
        let state = Rc::new(RefCell::new(ChromeState::new(&config)));
        Self {
            host,
            config,
            navigator: Navigator::default(),
            state,
            subscribers: Rc::new(RefCell::new(Subscribers::default())),
            registration: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.registration.is_some()
    }

    /// Whether the navbar should be shown
    pub fn visible(&self) -> bool {
        self.state.borrow().scroll.visible()
    }

    pub fn active(&self) -> Section {
        self.state.borrow().sections.active()
    }

    /// Sections that had an element when the watcher was registered
    pub fn observed(&self) -> Vec<Section> {
        self.state.borrow().sections.observed().to_vec()
    }

    pub fn mount(&mut self) -> Result<(), ChromeError> {
        if self.is_mounted() {
            return Err(ChromeError::AlreadyMounted);
        }
        *self.state.borrow_mut() = ChromeState::new(&self.config);

        let listener = self.host.listen_scroll(self.scroll_handler())?;
        let observation = match self.host.observe_sections(
            &self.config.sections,
            &self.config.band,
            self.intersection_handler(),
        ) {
            Ok(observation) => observation,
            Err(err) => {
                self.host.unlisten_scroll(listener);
                return Err(err.into());
            }
        };

        for section in &self.config.sections {
            if !observation.observed.contains(section) {
                warn!("section #{section} not in document, it won't be highlighted");
            }
        }
        self.state
            .borrow_mut()
            .sections
            .set_observed(observation.observed);
        self.registration = Some(Registration {
            listener,
            observer: observation.id,
        });
        debug!("page chrome mounted");
        Ok(())
    }

    /// Releases host registrations and subscriptions. No-op when not mounted.
    pub fn unmount(&mut self) {
        if let Some(Registration { listener, observer }) = self.registration.take() {
            self.host.unlisten_scroll(listener);
            self.host.disconnect(observer);
            self.subscribers.borrow_mut().clear();
            debug!("page chrome unmounted");
        }
    }

    /// Smooth-scrolls to the section element `id`. Unknown ids do nothing.
    pub fn navigate(&self, id: &str) {
        self.navigator.scroll_to(&self.host, id);
    }

    /// Calls `callback` with the new visibility each time the navbar shows or hides.
    pub fn on_scroll_change(&self, callback: impl FnMut(bool) + 'static) -> Subscription {
        let mut subscribers = self.subscribers.borrow_mut();
        let id = subscribers.next();
        let listener: Listener<bool> = Rc::new(RefCell::new(callback));
        subscribers.scroll.entries.push((id, listener));
        id
    }

    /// Calls `callback` each time a different section becomes active.
    pub fn on_active_section_change(
        &self,
        callback: impl FnMut(Section) + 'static,
    ) -> Subscription {
        let mut subscribers = self.subscribers.borrow_mut();
        let id = subscribers.next();
        let listener: Listener<Section> = Rc::new(RefCell::new(callback));
        subscribers.active.entries.push((id, listener));
        id
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.subscribers.borrow_mut().remove(subscription)
    }

    fn scroll_handler(&self) -> ScrollHandler {
        let state = Rc::clone(&self.state);
        let subscribers = Rc::clone(&self.subscribers);
        Box::new(move |offset| {
            let changed = {
                let mut state = state.borrow_mut();
                let flipped = state.scroll.observe(offset);
                flipped.then_some((state.scroll.visible(), state.scroll.last_offset()))
            };
            // state borrow is released so subscribers can read the controller
            if let Some((visible, at)) = changed {
                debug!("navbar visible: {visible} at {at}px");
                dispatch(&subscribers, Subscribers::scroll_listeners, visible);
            }
        })
    }

    fn intersection_handler(&self) -> IntersectionHandler {
        let state = Rc::clone(&self.state);
        let subscribers = Rc::clone(&self.subscribers);
        Box::new(move |batch| {
            let changed = state.borrow_mut().sections.apply(batch);
            if let Some(section) = changed {
                debug!("active section: {section}");
                dispatch(&subscribers, Subscribers::active_listeners, section);
            }
        })
    }
}

impl<H: PageHost> Drop for PageChromeController<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
