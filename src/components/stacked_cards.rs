//! Deck of layered pick cards

use leptos::prelude::*;

use crate::types::Movie;

/// Stack where only the top card is interactive: clicking it advances
/// the deck, the details button expands the synopsis
#[component]
pub fn StackedCards(movies: Signal<Vec<Movie>>) -> impl IntoView {
    let current = RwSignal::new(0usize);
    let expanded = RwSignal::new(Option::<String>::None);

    // Reset the deck whenever a new set of picks arrives
    Effect::new(move |_| {
        movies.track();
        current.set(0);
        expanded.set(None);
    });

    view! {
        <div class="relative w-[300px] h-[480px] mx-auto">
            {move || {
                let list = movies.get();
                let len = list.len();
                let top = current.get();
                list.into_iter()
                    .enumerate()
                    .map(|(index, movie)| {
                        let active = index == top;
                        let flipped = index < top;
                        let offset = index.saturating_sub(top);

                        let advance = move |_| {
                            if active {
                                current.update(|i| {
                                    if *i + 1 < len {
                                        *i += 1;
                                    }
                                });
                                expanded.set(None);
                            }
                        };

                        let card_id = movie.id.clone();
                        let toggle_details = move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            expanded.update(|e| {
                                *e = if e.as_deref() == Some(card_id.as_str()) {
                                    None
                                } else {
                                    Some(card_id.clone())
                                };
                            });
                        };

                        let detail_id = movie.id.clone();
                        let is_expanded = Signal::derive(move || {
                            expanded.get().as_deref() == Some(detail_id.as_str())
                        });

                        let synopsis = movie.synopsis.clone();
                        view! {
                            <div
                                on:click=advance
                                class="absolute w-full h-full rounded-xl overflow-hidden shadow-lg cursor-pointer bg-zinc-900 transition-all duration-300"
                                style=format!(
                                    "z-index: {}; transform: scale({}) translateY({}px); opacity: {}; pointer-events: {};",
                                    len - index,
                                    if active { "1" } else { "0.95" },
                                    10 * offset,
                                    if flipped { "0" } else { "1" },
                                    if active { "auto" } else { "none" },
                                )
                            >
                                <img
                                    src=movie.poster_url.clone()
                                    alt=movie.title.clone()
                                    class="w-full h-2/3 object-cover"
                                />
                                <div class="p-4 text-white h-1/3 flex flex-col gap-2 overflow-y-auto">
                                    <div class="flex items-center justify-between">
                                        <h3 class="text-lg font-bold truncate">{movie.title.clone()}</h3>
                                        <button
                                            on:click=toggle_details
                                            class="text-xs text-blue-400 hover:underline shrink-0 ml-2"
                                        >
                                            "Details"
                                        </button>
                                    </div>
                                    <p class=move || format!(
                                        "text-sm text-gray-300 {}",
                                        if is_expanded.get() { "" } else { "hidden" },
                                    )>
                                        {synopsis}
                                    </p>
                                    <div class="flex justify-between text-xs mt-auto">
                                        <span class="text-yellow-400">
                                            {format!("⭐ {} IMDb", movie.user_rating)}
                                        </span>
                                        <span class="text-pink-400">
                                            {format!("🎯 {} Metascore", movie.critic_rating)}
                                        </span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
