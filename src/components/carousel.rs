//! Horizontally scrolling strip of movie cards

use leptos::prelude::*;

use crate::components::MovieCard;
use crate::types::Movie;

/// Titled carousel with smooth scroll buttons
#[component]
pub fn Carousel(title: &'static str, movies: Signal<Vec<Movie>>) -> impl IntoView {
    let strip_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll by 80% of the visible width per step
    let scroll_step = move |direction: f64| {
        if let Some(strip) = strip_ref.get() {
            let el: &web_sys::HtmlElement = strip.as_ref();
            let step = f64::from(el.client_width()) * 0.8;
            let opts = web_sys::ScrollToOptions::new();
            opts.set_left(step * direction);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_by_with_scroll_to_options(&opts);
        }
    };

    view! {
        <section class="mb-12 relative">
            <h2 class="text-2xl font-bold text-white mb-4">{title}</h2>

            <div class="relative">
                <button
                    on:click=move |_| scroll_step(-1.0)
                    class="absolute z-10 left-0 top-1/2 -translate-y-1/2 bg-black/60 hover:bg-black text-white rounded-full px-3 py-1 text-xl"
                >
                    "‹"
                </button>

                <div
                    node_ref=strip_ref
                    class="flex gap-4 overflow-x-auto pb-4 pr-4"
                    style="scrollbar-width: none;"
                >
                    {move || {
                        movies
                            .get()
                            .into_iter()
                            .map(|movie| view! { <MovieCard movie=movie /> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <button
                    on:click=move |_| scroll_step(1.0)
                    class="absolute z-10 right-0 top-1/2 -translate-y-1/2 bg-black/60 hover:bg-black text-white rounded-full px-3 py-1 text-xl"
                >
                    "›"
                </button>
            </div>
        </section>
    }
}
