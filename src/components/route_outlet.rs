//! Route outlet: renders the view selected by the current fragment path.
//!
//! ARCHITECTURE
//! ============
//! The resolved match is memoized, so paths that resolve identically
//! (`/settings` and `/Settings/`) do not re-render the page. A path matching
//! no route renders nothing.

#[cfg(test)]
#[path = "route_outlet_test.rs"]
mod route_outlet_test;

use leptos::prelude::*;

use crate::pages::blank::BlankPage;
use crate::pages::circuit_list::CircuitListPage;
use crate::pages::settings::SettingsPage;
use crate::pages::workout_player::WorkoutPlayerPage;
use crate::routing::{Navigator, RouteMatch, RouteTable, ViewKind};

/// Workout id forwarded to the player. Empty when the route forwards nothing.
fn workout_id(matched: &RouteMatch) -> String {
    matched.props().get("id").unwrap_or_default().to_owned()
}

fn render_match(matched: RouteMatch) -> AnyView {
    match matched.view {
        ViewKind::Blank => view! { <BlankPage/> }.into_any(),
        ViewKind::CircuitList => view! { <CircuitListPage/> }.into_any(),
        ViewKind::WorkoutPlayer => {
            let id = workout_id(&matched);
            view! { <WorkoutPlayerPage id=id/> }.into_any()
        }
        ViewKind::Settings => view! { <SettingsPage/> }.into_any(),
    }
}

#[component]
pub fn RouteOutlet(routes: RouteTable) -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let current = Memo::new(move |_| routes.resolve(&navigator.path()));

    Effect::new(move || match current.get() {
        Some(matched) => log::debug!("route {} -> {:?}", matched.pattern, matched.view),
        None => log::warn!("no route matches {}", navigator.path_untracked()),
    });

    move || current.get().map(render_match)
}
