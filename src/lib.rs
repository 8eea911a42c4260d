//! CineBase - Leptos movie discovery frontend
//!
//! A browser-based client for the CineBase GraphQL endpoint: themed
//! catalog carousels, token-based login/signup, and genre-overlap
//! recommendations.

pub mod api;
pub mod components;
pub mod pages;
pub mod recommend;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::{SideMenu, UserAvatar};
use pages::{home::HomePage, login::LoginPage, what_to_watch::WhatToWatchPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state; the auth store restores any persisted session
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Title text="CineBase" />
        <Router>
            <div class="flex min-h-screen bg-neutral-950 text-white relative">
                <SideMenu />
                <UserAvatar />
                <main class="flex-1 p-6 overflow-y-auto ml-16">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/what-to-watch") view=WhatToWatchPage />
                        <Route path=path!("/login") view=LoginPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-neutral-500 mb-4">"404"</h1>
                <p class="text-xl text-neutral-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
