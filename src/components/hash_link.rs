//! Anchor element targeting a route path.
//!
//! The browser updates `location.hash` on click, and the navigator's
//! `hashchange` listener picks it up, so no click handler is needed.

use leptos::prelude::*;

use crate::routing::fragment;

/// `<a href="#/path">` for the route path `to`.
#[component]
pub fn HashLink(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=fragment::href_for(&to) class=class>
            {children()}
        </a>
    }
}
