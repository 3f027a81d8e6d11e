//! Hash routing core.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell navigates with fragment URLs (`#/workout/42`) so bookmarks and
//! browser back/forward work without server route support. Everything except
//! `navigator` is plain Rust with no browser types, so route resolution is
//! tested on the host.

pub mod fragment;
pub mod history;
pub mod navigator;
pub mod params;
pub mod pattern;
pub mod table;

pub use navigator::Navigator;
pub use params::Params;
pub use pattern::PathPattern;
pub use table::{ROUTES, RouteEntry, RouteMatch, RouteTable, ViewKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
    #[error("duplicate route pattern: {pattern}")]
    DuplicatePattern { pattern: String },
}

impl RouteError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "E_ROUTE_PATTERN",
            Self::DuplicatePattern { .. } => "E_ROUTE_DUPLICATE",
        }
    }
}
