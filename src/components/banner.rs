//! Rotating full-width highlight

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::state::AppState;
use crate::types::Movie;

const SLIDE_MILLIS: u32 = 6_000;

/// Auto-advancing banner over the recent slice, with dot pagination
#[component]
pub fn Banner(movies: Signal<Vec<Movie>>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let current = RwSignal::new(0usize);

    // Rotation pauses while a detail modal is on screen. The handle is
    // !Send, so it lives in an arena-local slot until cleanup.
    let interval = StoredValue::new_local(Some(Interval::new(SLIDE_MILLIS, move || {
        if state.ui.modal_open.get_untracked() {
            return;
        }
        let len = movies.get_untracked().len();
        if len > 0 {
            current.update(|i| *i = (*i + 1) % len);
        }
    })));
    on_cleanup(move || interval.update_value(|i| drop(i.take())));

    view! {
        <section class="relative w-full">
            {move || {
                let movies = movies.get();
                if movies.is_empty() {
                    return view! { <div></div> }.into_any();
                }
                let movie = movies[current.get() % movies.len()].clone();
                let year = movie.release_year();
                view! {
                    <div class="relative h-[70vh] w-full overflow-hidden flex items-center justify-center rounded-xl">
                        // Blurred, darkened backdrop
                        <img
                            src=movie.poster_url.clone()
                            alt=movie.title.clone()
                            class="absolute inset-0 w-full h-full object-cover opacity-30 blur-md scale-110"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/30 to-transparent z-10"></div>

                        <div class="relative z-20 flex items-center gap-8 px-16 max-w-7xl mx-auto">
                            <img
                                src=movie.poster_url.clone()
                                alt=movie.title.clone()
                                class="w-64 rounded-xl shadow-lg object-cover"
                            />
                            <div class="max-w-xl">
                                <h2 class="text-4xl font-bold text-white mb-4">{movie.title.clone()}</h2>
                                <p class="text-gray-300 mb-4">{movie.synopsis.clone()}</p>
                                <div class="flex gap-4 text-sm text-white">
                                    <span>{format!("⭐ {} IMDb", movie.user_rating)}</span>
                                    <span>{format!("🎯 {} Metascore", movie.critic_rating)}</span>
                                    <span>{format!("🎬 {}", movie.genres.join(", "))}</span>
                                    {year.map(|y| view! { <span>{format!("📅 {}", y)}</span> })}
                                </div>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }}

            // Clickable dot pagination
            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 z-30 flex gap-2">
                {move || {
                    (0..movies.get().len())
                        .map(|i| {
                            view! {
                                <button
                                    on:click=move |_| current.set(i)
                                    class=move || format!(
                                        "w-2.5 h-2.5 rounded-full transition {}",
                                        if current.get() == i {
                                            "bg-white"
                                        } else {
                                            "bg-white/40 hover:bg-white/70"
                                        },
                                    )
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
