//! Settings page shown at `/settings`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::hash_link::HashLink;
use crate::routing::ViewKind;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <Title text=ViewKind::Settings.title()/>
        <section class="settings">
            <header class="settings__header">
                <HashLink to="/7frog" class="settings__back">
                    "Circuits"
                </HashLink>
                <h1>"Settings"</h1>
            </header>
            <p class="settings__version">"Version " {env!("CARGO_PKG_VERSION")}</p>
        </section>
    }
}
