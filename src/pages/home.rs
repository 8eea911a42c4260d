//! Landing page: search, banner and the three catalog carousels

use leptos::prelude::*;

use crate::api::load_catalog;
use crate::components::{Banner, Carousel, SearchBar, Skeleton};
use crate::state::AppState;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Load the catalog on mount
    Effect::new(move |_| {
        load_catalog(state);
    });

    let recent = Signal::derive(move || state.catalog.recent.get());
    let top_users = Signal::derive(move || state.catalog.top_by_users.get());
    let top_critics = Signal::derive(move || state.catalog.top_by_critics.get());

    view! {
        <div class="flex flex-col gap-12 px-6 py-6">
            <SearchBar />

            // One-line fetch error, rendered verbatim
            <Show when=move || state.ui.error.get().is_some()>
                <div class="p-4 bg-red-500/10 border border-red-500/50 rounded-lg text-red-400 text-sm">
                    {move || state.ui.error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !state.catalog.loading.get()
                fallback=|| view! {
                    <div class="flex flex-col gap-12">
                        <Skeleton class="h-[70vh] w-full" />
                        <Skeleton class="h-[300px] w-full" />
                        <Skeleton class="h-[300px] w-full" />
                    </div>
                }
            >
                <Show when=move || !recent.get().is_empty()>
                    <Banner movies=recent />
                </Show>

                <Carousel title="Recent Releases" movies=recent />
                <Carousel title="Top Rated by Users" movies=top_users />
                <Carousel title="Top Rated by Critics" movies=top_critics />
            </Show>
        </div>
    }
}
