//! Poster card with a detail modal

use leptos::prelude::*;

use crate::state::AppState;
use crate::types::Movie;

/// Compact poster card; clicking opens the detail modal
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let state = expect_context::<AppState>();
    let open = RwSignal::new(false);

    let open_modal = move |_| {
        open.set(true);
        state.ui.modal_open.set(true);
    };

    // A card can unmount while its modal is up (search re-filter);
    // release the global flag so the banner resumes rotating.
    let modal_flag = state.ui.modal_open;
    on_cleanup(move || release_modal(open, modal_flag));

    // Clones for the modal branch
    let modal_movie = movie.clone();

    view! {
        <div
            on:click=open_modal
            class="relative w-[170px] min-w-[170px] h-[300px] rounded-xl overflow-hidden bg-zinc-900 shadow-md cursor-pointer hover:scale-105 transition-transform"
        >
            <img
                src=movie.poster_url.clone()
                alt=movie.title.clone()
                class="w-full h-full object-cover"
            />
            // Dark footer with title and both ratings
            <div class="absolute bottom-0 w-full bg-black/70 px-3 py-2">
                <h3 class="text-sm font-semibold text-white truncate">{movie.title.clone()}</h3>
                <div class="flex items-center gap-3 mt-1 text-xs">
                    <span class="text-yellow-400">{format!("⭐ {}", movie.user_rating)}</span>
                    <span class="text-pink-400">{format!("🎯 {}", movie.critic_rating)}</span>
                </div>
            </div>
        </div>

        // Detail modal; the backdrop click closes it
        <Show when=move || open.get()>
            <div
                on:click=move |_| {
                    open.set(false);
                    state.ui.modal_open.set(false);
                }
                class="fixed inset-0 bg-black/70 z-50 flex items-center justify-center p-4"
            >
                <div
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                    class="bg-zinc-900 rounded-xl max-w-md w-full max-h-[90vh] overflow-y-auto shadow-lg"
                >
                    <img
                        src=modal_movie.poster_url.clone()
                        alt=modal_movie.title.clone()
                        class="w-full h-96 object-contain rounded-t-xl"
                    />
                    <div class="p-4 text-white">
                        <h2 class="text-lg font-bold mb-2">{modal_movie.title.clone()}</h2>
                        <p class="text-sm mb-4">{modal_movie.synopsis.clone()}</p>
                        <div class="flex justify-between text-sm">
                            <span class="text-yellow-400">
                                {format!("⭐ {} IMDb", modal_movie.user_rating)}
                            </span>
                            <span class="text-pink-400">
                                {format!("🎯 {} Metascore", modal_movie.critic_rating)}
                            </span>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Clear the global modal flag if this card's modal is the open one
fn release_modal(open: RwSignal<bool>, modal_open: RwSignal<bool>) {
    if open.get_untracked() {
        modal_open.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releasing_an_open_modal_clears_the_global_flag() {
        let open = RwSignal::new(true);
        let modal_open = RwSignal::new(true);
        release_modal(open, modal_open);
        assert!(!modal_open.get_untracked());
    }

    #[test]
    fn releasing_a_closed_card_leaves_another_modal_alone() {
        let open = RwSignal::new(false);
        let modal_open = RwSignal::new(true);
        release_modal(open, modal_open);
        assert!(modal_open.get_untracked());
    }
}
