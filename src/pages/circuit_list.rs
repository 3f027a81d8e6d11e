//! Circuit list page shown at `/7frog`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::hash_link::HashLink;
use crate::routing::ViewKind;

#[component]
pub fn CircuitListPage() -> impl IntoView {
    view! {
        <Title text=ViewKind::CircuitList.title()/>
        <section class="circuit-list">
            <header class="circuit-list__header">
                <h1>"Circuits"</h1>
                <HashLink to="/settings" class="circuit-list__settings">
                    "Settings"
                </HashLink>
            </header>
        </section>
    }
}
