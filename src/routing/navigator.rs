//! Navigation controller shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs one `Navigator` and provides it to the whole view tree.
//! In the browser the URL fragment is the source of truth: `push` writes
//! `location.hash`, and a `hashchange` listener feeds every fragment change
//! (links, back/forward, bookmarks, manual edits) into the `path` signal.
//! Outside the browser a [`HistoryStack`](super::history::HistoryStack)
//! stands in for session history.
//!
//! ERROR HANDLING
//! ==============
//! Browser history calls can fail (sandboxed frames, detached documents).
//! Failures are logged and the current view stays in place.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use leptos::prelude::*;

use super::fragment;
#[cfg(not(feature = "csr"))]
use super::history::HistoryStack;

/// Reactive handle on the current route path.
#[derive(Clone, Copy)]
pub struct Navigator {
    path: RwSignal<String>,
    #[cfg(not(feature = "csr"))]
    history: StoredValue<HistoryStack>,
}

impl Navigator {
    /// Create the controller for this page.
    ///
    /// In the browser, a non-canonical fragment (for example an empty one)
    /// is rewritten in place to `#/...` and a `hashchange` listener is
    /// registered for the lifetime of the current reactive owner.
    pub fn install() -> Self {
        #[cfg(feature = "csr")]
        {
            let hash = current_hash();
            let navigator = Self {
                path: RwSignal::new(fragment::path_from_hash(&hash)),
            };
            if !fragment::is_canonical(&hash) {
                navigator.replace(&navigator.path_untracked());
            }

            let listener = window_event_listener(leptos::ev::hashchange, move |_| {
                let next = fragment::path_from_hash(&current_hash());
                log::debug!("hashchange -> {next}");
                navigator.set_path(next);
            });
            on_cleanup(move || listener.remove());
            navigator
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::in_memory("/")
        }
    }

    /// Controller backed only by an in-memory history stack.
    #[cfg(not(feature = "csr"))]
    pub fn in_memory(initial: &str) -> Self {
        let initial = fragment::normalize_path(initial);
        Self {
            path: RwSignal::new(initial.clone()),
            history: StoredValue::new(HistoryStack::new(initial)),
        }
    }

    /// Current route path (tracked).
    pub fn path(&self) -> String {
        self.path.get()
    }

    pub fn path_untracked(&self) -> String {
        self.path.get_untracked()
    }

    /// Navigate to `path`, adding a history entry.
    pub fn push(&self, path: &str) {
        let path = fragment::normalize_path(path);
        log::debug!("navigate -> {path}");
        #[cfg(feature = "csr")]
        {
            if let Err(err) = window().location().set_hash(&path) {
                log::warn!("navigation to {path} failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            self.history.update_value(|h| h.push(path.clone()));
            self.set_path(path);
        }
    }

    /// Navigate to `path`, rewriting the current history entry.
    pub fn replace(&self, path: &str) {
        let path = fragment::normalize_path(path);
        #[cfg(feature = "csr")]
        {
            let href = fragment::href_for(&path);
            let replaced = window().history().and_then(|history| {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&href))
            });
            if let Err(err) = replaced {
                log::warn!("replace with {href} failed: {err:?}");
                return;
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            self.history.update_value(|h| h.replace(path.clone()));
        }
        self.set_path(path);
    }

    pub fn back(&self) {
        #[cfg(feature = "csr")]
        {
            if let Err(err) = window().history().and_then(|history| history.back()) {
                log::warn!("history back failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            if self.history.try_update_value(HistoryStack::back).unwrap_or(false) {
                self.sync_from_history();
            }
        }
    }

    pub fn forward(&self) {
        #[cfg(feature = "csr")]
        {
            if let Err(err) = window().history().and_then(|history| history.forward()) {
                log::warn!("history forward failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            if self.history.try_update_value(HistoryStack::forward).unwrap_or(false) {
                self.sync_from_history();
            }
        }
    }

    #[cfg(not(feature = "csr"))]
    fn sync_from_history(&self) {
        if let Some(current) = self.history.try_with_value(|h| h.current().to_owned()) {
            self.set_path(current);
        }
    }

    fn set_path(&self, next: String) {
        if self.path.with_untracked(|current| *current != next) {
            self.path.set(next);
        }
    }
}

#[cfg(feature = "csr")]
fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}
