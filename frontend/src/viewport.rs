use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    window, AddEventListenerOptions, Document, Element, IntersectionObserver,
    IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::config;

#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches anchor `{0}`")]
    TargetNotFound(String),
}

/// The slice of the browser the scroll controllers need.
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    /// Top edge of the anchor's element relative to the visible viewport.
    fn element_top(&self, anchor: &str) -> Result<f64, LookupError>;

    fn smooth_scroll_to(&self, top: f64);

    fn scroll_into_view(&self, id: &str) -> Result<(), LookupError>;
}

/// Absolute page offset that puts an element just below the fixed header.
pub fn section_scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - config::HEADER_CLEARANCE
}

/// Smooth-scrolls to the anchor and returns the offset it aimed for.
/// A missing target is not an error for the caller, nothing happens.
pub fn scroll_to_section(viewport: &impl Viewport, anchor: &str) -> Option<f64> {
    match viewport.element_top(anchor) {
        Ok(top) => {
            let target = section_scroll_target(top, viewport.scroll_y());
            viewport.smooth_scroll_to(target);
            Some(target)
        }
        Err(err) => {
            debug!("Skipping scroll to `{}`: {}", anchor, err);
            None
        }
    }
}

/// Brings the section with the given id into view. Returns whether it scrolled.
pub fn reveal_section(viewport: &impl Viewport, id: &str) -> bool {
    match viewport.scroll_into_view(id) {
        Ok(()) => true,
        Err(err) => {
            debug!("Skipping scroll into view of `{}`: {}", id, err);
            false
        }
    }
}

pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn current() -> Result<Self, LookupError> {
        let window = window().ok_or(LookupError::NoWindow)?;
        let document = window.document().ok_or(LookupError::NoDocument)?;
        Ok(Self { window, document })
    }

    // Id first, then a class of the same name.
    fn find(&self, anchor: &str) -> Result<Element, LookupError> {
        if let Some(element) = self.document.get_element_by_id(anchor) {
            return Ok(element);
        }
        self.document
            .query_selector(&format!(".{}", anchor))
            .ok()
            .flatten()
            .ok_or_else(|| LookupError::TargetNotFound(anchor.to_string()))
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn element_top(&self, anchor: &str) -> Result<f64, LookupError> {
        Ok(self.find(anchor)?.get_bounding_client_rect().top())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, id: &str) -> Result<(), LookupError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| LookupError::TargetNotFound(id.to_string()))?;
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Scrolls the live page to an anchor, doing nothing outside a browser.
pub fn scroll_to_anchor(anchor: &str) {
    match BrowserViewport::current() {
        Ok(viewport) => {
            scroll_to_section(&viewport, anchor);
        }
        Err(err) => debug!("Skipping scroll to `{}`: {}", anchor, err),
    }
}

pub fn reveal_anchor(id: &str) {
    match BrowserViewport::current() {
        Ok(viewport) => {
            reveal_section(&viewport, id);
        }
        Err(err) => debug!("Skipping scroll into view of `{}`: {}", id, err),
    }
}

/// Location fragment without the leading `#`, empty when there is none.
pub fn location_fragment() -> String {
    window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

pub fn history_back() {
    if let Some(history) = window().and_then(|window| window.history().ok()) {
        if let Err(err) = history.back() {
            debug!("history.back() failed: {:?}", err);
        }
    }
}

/// Passive window scroll listener, detached when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = window()?;
        let scroll_window = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(scroll_window.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            debug!("Could not attach scroll listener: {:?}", err);
            return None;
        }
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

const VISIBLE_CLASS: &str = "visible";

fn mark_visible(element: &Element) {
    if let Err(err) = element.class_list().add_1(VISIBLE_CLASS) {
        debug!("Could not reveal element: {:?}", err);
    }
}

/// Adds `visible` to each matching element the first time it enters the
/// viewport. Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe_all(selector: &str) -> Option<Self> {
        let document = window()?.document()?;
        let nodes = document.query_selector_all(selector).ok()?;
        let targets: Vec<Element> = (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();

        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    mark_visible(&target);
                    // Once only
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                for target in &targets {
                    observer.observe(target);
                }
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                // Without an observer nothing would ever show
                debug!("IntersectionObserver unavailable, revealing all: {:?}", err);
                targets.iter().for_each(mark_visible);
                None
            }
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{LookupError, Viewport};

    /// In-memory page geometry that records every scroll request.
    #[derive(Default)]
    pub struct FakeViewport {
        pub scroll_y: f64,
        pub tops: HashMap<String, f64>,
        pub scrolled_to: RefCell<Vec<f64>>,
        pub revealed: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        pub fn with_element(mut self, anchor: &str, top: f64) -> Self {
            self.tops.insert(anchor.to_string(), top);
            self
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn element_top(&self, anchor: &str) -> Result<f64, LookupError> {
            self.tops
                .get(anchor)
                .copied()
                .ok_or_else(|| LookupError::TargetNotFound(anchor.to_string()))
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolled_to.borrow_mut().push(top);
        }

        fn scroll_into_view(&self, id: &str) -> Result<(), LookupError> {
            if !self.tops.contains_key(id) {
                return Err(LookupError::TargetNotFound(id.to_string()));
            }
            self.revealed.borrow_mut().push(id.to_string());
            Ok(())
        }
    }
}
