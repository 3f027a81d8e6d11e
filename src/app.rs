//! Root application component with hash routing and context providers.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::components::route_outlet::RouteOutlet;
use crate::routing::{Navigator, RouteTable};

/// Root application component.
///
/// Installs the fragment-based `Navigator`, provides it to every view, and
/// hosts the route outlet.
#[component]
pub fn App(routes: RouteTable) -> impl IntoView {
    provide_meta_context();

    let navigator = Navigator::install();
    provide_context(navigator);

    view! {
        <main class="app-shell">
            <RouteOutlet routes=routes/>
        </main>
    }
}
