//! Title search over the recent slice

use leptos::prelude::*;

use crate::components::MovieCard;
use crate::state::AppState;
use crate::types::Movie;

/// Case-insensitive title substring match
pub fn search_titles(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Toggleable search input with inline results
#[component]
pub fn SearchBar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let visible = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    // Results only kick in from two typed characters
    let active = Signal::derive(move || visible.get() && query.get().chars().count() > 1);
    let results = Signal::derive(move || search_titles(&state.catalog.recent.get(), &query.get()));

    view! {
        <div class="relative z-20 flex flex-col items-start w-full px-4">
            <div class="flex items-center gap-2">
                <button
                    on:click=move |_| visible.update(|v| *v = !*v)
                    class="text-white text-lg p-2 bg-zinc-800 rounded-full hover:bg-zinc-700 transition"
                >
                    "🔍"
                </button>

                <Show when=move || visible.get()>
                    <input
                        type="text"
                        placeholder="Search movies..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        class="max-w-md bg-zinc-900 text-white placeholder-zinc-400 rounded-lg px-4 py-2 outline-none border border-zinc-700 focus:border-blue-500"
                    />
                </Show>
            </div>

            <Show when=move || active.get()>
                <Show
                    when=move || !results.get().is_empty()
                    fallback=|| view! { <p class="mt-4 text-zinc-400">"No movies found."</p> }
                >
                    <div class="mt-4 flex gap-4 flex-wrap">
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .map(|movie| view! { <MovieCard movie=movie /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            id: title.to_string(),
            title: title.to_string(),
            synopsis: String::new(),
            poster_url: String::new(),
            released: String::new(),
            genres: vec![],
            user_rating: 0.0,
            critic_rating: 0,
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let movies = vec![movie("Inception"), movie("Interstellar"), movie("Up")];
        let hits = search_titles(&movies, "iNtEr");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Interstellar");
    }

    #[test]
    fn search_matches_substrings_anywhere() {
        let movies = vec![movie("The Dark Knight"), movie("Knight and Day")];
        let hits = search_titles(&movies, "knight");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn empty_query_matches_everything() {
        let movies = vec![movie("A"), movie("B")];
        assert_eq!(search_titles(&movies, "").len(), 2);
    }
}
