//! # circuit-trainer
//!
//! Leptos + WASM single-page shell for the circuit workout player. Routes are
//! carried in the URL fragment (`#/workout/42`), so the app is served as
//! static files with no server-side routing.
//!
//! | Module | Role |
//! |--------|------|
//! | [`routing`] | Patterns, route table, fragment parsing, navigator |
//! | [`components`] | Route outlet and fragment links |
//! | [`pages`] | The four route-level views |
//! | [`app`] | Root component and context providers |
//! | [`boot`] | Logging setup and the one-time mount |
//! | [`config`] | Mount anchor and log level |

pub mod app;
pub mod boot;
pub mod components;
pub mod config;
pub mod pages;
pub mod routing;

pub use boot::{BootError, boot};
