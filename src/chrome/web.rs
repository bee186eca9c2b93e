use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use js_sys::Array;
use log::warn;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::{
    host::{
        BlockAlignment, HostError, IntersectionHandler, ListenerId, Observation, ObserverId,
        PageHost, ScrollBehavior, ScrollHandler, ScrollOptions,
    },
    sections::{IntersectionEntry, ObservationBand, Section},
};

struct WatchedSections {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

/// [`PageHost`] backed by the browser window.
pub struct WebHost {
    window: Window,
    next_id: Cell<u32>,
    listeners: RefCell<HashMap<ListenerId, Closure<dyn FnMut()>>>,
    observers: RefCell<HashMap<ObserverId, WatchedSections>>,
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl WebHost {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        Ok(Self {
            window,
            next_id: Cell::new(0),
            listeners: RefCell::new(HashMap::new()),
            observers: RefCell::new(HashMap::new()),
        })
    }

    fn document(&self) -> Result<Document, HostError> {
        self.window.document().ok_or(HostError::NoDocument)
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl PageHost for WebHost {
    fn listen_scroll(&self, mut handler: ScrollHandler) -> Result<ListenerId, HostError> {
        let window = self.window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            handler(window.scroll_y().unwrap_or_default());
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| HostError::Listener(js_message(&e)))?;

        let id = ListenerId(self.next_id());
        self.listeners.borrow_mut().insert(id, callback);
        Ok(id)
    }

    fn unlisten_scroll(&self, id: ListenerId) {
        let Some(callback) = self.listeners.borrow_mut().remove(&id) else {
            return;
        };
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("couldn't remove scroll listener: {}", js_message(&e));
        }
    }

    fn observe_sections(
        &self,
        sections: &[Section],
        band: &ObservationBand,
        mut handler: IntersectionHandler,
    ) -> Result<Observation, HostError> {
        let document = self.document()?;

        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let batch = entries
                .iter()
                .filter_map(|value| {
                    let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
                    let section = entry.target().id().parse::<Section>().ok()?;
                    Some(IntersectionEntry::new(section, entry.is_intersecting()))
                })
                .collect::<Vec<_>>();
            handler(&batch);
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&band.root_margin());
        init.set_threshold(&JsValue::from_f64(band.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| HostError::Observer(js_message(&e)))?;

        let observed = sections
            .iter()
            .copied()
            .filter(|section| match document.get_element_by_id(section.id()) {
                Some(element) => {
                    observer.observe(&element);
                    true
                }
                None => false,
            })
            .collect();

        let id = ObserverId(self.next_id());
        self.observers.borrow_mut().insert(
            id,
            WatchedSections {
                observer,
                _callback: callback,
            },
        );
        Ok(Observation { id, observed })
    }

    fn disconnect(&self, id: ObserverId) {
        if let Some(watched) = self.observers.borrow_mut().remove(&id) {
            watched.observer.disconnect();
        }
    }

    fn scroll_into_view(&self, id: &str, options: ScrollOptions) -> bool {
        let Some(element) = self
            .window
            .document()
            .and_then(|document| document.get_element_by_id(id))
        else {
            return false;
        };
        let scroll_options = ScrollIntoViewOptions::new();
        scroll_options.set_behavior(match options.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        scroll_options.set_block(match options.block {
            BlockAlignment::Start => ScrollLogicalPosition::Start,
            BlockAlignment::Center => ScrollLogicalPosition::Center,
            BlockAlignment::End => ScrollLogicalPosition::End,
            BlockAlignment::Nearest => ScrollLogicalPosition::Nearest,
        });
        element.scroll_into_view_with_scroll_into_view_options(&scroll_options);
        true
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        let ids = self.listeners.borrow().keys().copied().collect::<Vec<_>>();
        for id in ids {
            self.unlisten_scroll(id);
        }
        for (_, watched) in self.observers.borrow_mut().drain() {
            watched.observer.disconnect();
        }
    }
}
