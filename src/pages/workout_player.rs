//! Workout player page shown at `/workout/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `id` property is the raw `:id` path segment. It is an opaque string:
//! `/workout/42` and `/workout/abc` are both valid and never parsed.

#[cfg(test)]
#[path = "workout_player_test.rs"]
mod workout_player_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routing::{Navigator, ViewKind};

fn workout_title(id: &str) -> String {
    format!("{} {id}", ViewKind::WorkoutPlayer.title())
}

/// Workout player for the workout named by `id`.
#[component]
pub fn WorkoutPlayerPage(#[prop(into)] id: String) -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let title = workout_title(&id);

    view! {
        <Title text=title.clone()/>
        <section class="workout-player" data-workout-id=id>
            <header class="workout-player__header">
                <button
                    class="workout-player__back"
                    type="button"
                    on:click=move |_| navigator.back()
                >
                    "Back"
                </button>
                <h1>{title}</h1>
            </header>
        </section>
    }
}
