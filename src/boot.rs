//! Application bootstrap.
//!
//! ARCHITECTURE
//! ============
//! `boot` installs logging, compiles the route table, finds the host anchor
//! element, and mounts `App` into it. The mount is one-way and permanent for
//! the page lifetime: the handle is forgotten and a process-wide guard turns
//! any later `boot` into `BootError::AlreadyMounted`.
//!
//! ERROR HANDLING
//! ==============
//! A missing anchor is fatal. Nothing is mounted and the error is returned to
//! the entry point, which logs it.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::app::App;
use crate::config::AppConfig;
use crate::routing::{RouteError, RouteTable};

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no host document available")]
    NoDocument,
    #[error("mount anchor #{0} not found in host document")]
    AnchorMissing(String),
    #[error("mount anchor #{0} is not an HTML element")]
    AnchorNotHtml(String),
    #[error("application already mounted")]
    AlreadyMounted,
    #[error("route table error: {0}")]
    Routes(#[from] RouteError),
}

impl BootError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::AnchorMissing(_) => "E_ANCHOR_MISSING",
            Self::AnchorNotHtml(_) => "E_ANCHOR_NOT_HTML",
            Self::AlreadyMounted => "E_ALREADY_MOUNTED",
            Self::Routes(err) => err.error_code(),
        }
    }
}

/// One-shot flag recording that the application has been mounted.
#[derive(Debug, Default)]
pub struct MountGuard {
    mounted: AtomicBool,
}

impl MountGuard {
    pub const fn new() -> Self {
        Self {
            mounted: AtomicBool::new(false),
        }
    }

    /// Claim the single mount.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::AlreadyMounted`] if the guard was already claimed.
    pub fn claim(&self) -> Result<(), BootError> {
        self.mounted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| BootError::AlreadyMounted)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}

static MOUNT_GUARD: MountGuard = MountGuard::new();

/// Whether `boot` has mounted the application in this process.
pub fn is_mounted() -> bool {
    MOUNT_GUARD.is_mounted()
}

/// Mount the application into the element named by `config.mount_id`.
///
/// # Errors
///
/// Fails when the route table does not compile, when there is no host
/// document or anchor element, or when the application is already mounted.
pub fn boot(config: &AppConfig) -> Result<(), BootError> {
    init_logging(config.log_level);
    let routes = RouteTable::standard()?;
    log::debug!("compiled {} routes", routes.len());

    #[cfg(feature = "csr")]
    {
        let anchor = find_anchor(&config.mount_id)?;
        MOUNT_GUARD.claim()?;
        leptos::mount::mount_to(anchor, move || view! { <App routes=routes/> }).forget();
        log::info!("mounted on #{}", config.mount_id);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("cannot mount on #{} without a browser", config.mount_id);
        Err(BootError::NoDocument)
    }
}

#[cfg(feature = "csr")]
fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

#[cfg(not(feature = "csr"))]
fn init_logging(level: log::Level) {
    log::set_max_level(level.to_level_filter());
}

#[cfg(feature = "csr")]
fn find_anchor(id: &str) -> Result<web_sys::HtmlElement, BootError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BootError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| BootError::AnchorMissing(id.to_owned()))?;
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| BootError::AnchorNotHtml(id.to_owned()))
}
