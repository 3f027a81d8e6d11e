//! Blank landing page shown at `/`.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routing::ViewKind;

#[component]
pub fn BlankPage() -> impl IntoView {
    view! {
        <Title text=ViewKind::Blank.title()/>
        <div class="blank-page"></div>
    }
}
