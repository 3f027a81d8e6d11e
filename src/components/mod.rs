//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the `Navigator` from Leptos context; pages use them for
//! links and the app root uses the outlet to swap views.

pub mod hash_link;
pub mod route_outlet;
