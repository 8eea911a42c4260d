//! "What should I watch?" - genre selection and ranked picks

use leptos::prelude::*;

use crate::api::load_catalog;
use crate::components::StackedCards;
use crate::recommend::rank_by_genres;
use crate::state::AppState;

/// Selectable genres: display label + canonical tag
const GENRE_CHOICES: &[(&str, &str)] = &[
    ("Action", "action"),
    ("Comedy", "comedy"),
    ("Drama", "drama"),
    ("Sci-Fi", "sci-fi"),
    ("Horror", "horror"),
    ("Mystery", "mystery"),
    ("Romance", "romance"),
    ("Thriller", "thriller"),
];

#[component]
pub fn WhatToWatchPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // The ranking needs the full catalog, so fetch it on mount too
    Effect::new(move |_| {
        load_catalog(state);
    });

    let nothing_selected = Signal::derive(move || state.genres.selected.get().is_empty());
    let picks = Signal::derive(move || state.catalog.picks.get());

    let pick_movies = move |_| {
        let catalog = state.catalog.all_movies.get_untracked();
        let selected = state.genres.selected.get_untracked();
        state.catalog.picks.set(rank_by_genres(&catalog, &selected));
    };

    view! {
        <div class="text-white px-4 py-8">
            <h1 class="text-2xl font-bold mb-6">"🎯 What should I watch?"</h1>

            // Genre chips
            <div class="flex flex-wrap gap-3 mb-6">
                {GENRE_CHOICES
                    .iter()
                    .map(|(label, tag)| {
                        let label = *label;
                        let tag = *tag;
                        let is_selected = Signal::derive(move || state.genres.is_selected(tag));
                        view! {
                            <button
                                on:click=move |_| state.genres.toggle(tag)
                                class=move || format!(
                                    "px-4 py-2 rounded-full border transition {}",
                                    if is_selected.get() {
                                        "bg-blue-500 text-white border-blue-500"
                                    } else {
                                        "border-gray-600 hover:bg-gray-800"
                                    },
                                )
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            // Enabled only once at least one genre is selected
            <button
                on:click=pick_movies
                disabled=move || nothing_selected.get()
                class="mb-8 px-6 py-2 rounded-full bg-blue-600 hover:bg-blue-700 text-white font-semibold disabled:opacity-40"
            >
                "Pick movies 🎲"
            </button>

            <Show when=move || !picks.get().is_empty()>
                <div class="max-w-md mx-auto">
                    <StackedCards movies=picks />
                </div>
            </Show>
        </div>
    }
}
