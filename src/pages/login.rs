//! Login/Signup page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{login, signup};
use crate::components::LoadingSpinner;
use crate::state::AppState;
use crate::types::Session;

/// Combined login/signup form toggling between the two modes
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Form state
    let is_signup = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    // Redirect home if already logged in
    let navigate_for_redirect = navigate.clone();
    Effect::new(move |_| {
        if state.auth.session.get().is_some() {
            navigate_for_redirect("/", Default::default());
        }
    });

    // Handle form submission
    let navigate_for_submit = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();
        let signup_mode = is_signup.get();
        let navigate = navigate_for_submit.clone();

        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let endpoint = state.endpoint.get_untracked();

            let result: Result<Session, String> = if signup_mode {
                signup(&endpoint, &name_val, &email_val, &password_val).await
            } else {
                login(&endpoint, &email_val, &password_val).await
            };

            is_loading.set(false);

            match result {
                Ok(session) => {
                    state.auth.log_in(session);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md">
                <div class="bg-zinc-800 rounded-2xl shadow-xl p-10">
                    // Header
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold mb-2">
                            {move || if is_signup.get() { "Create Account" } else { "Welcome Back" }}
                        </h1>
                        <p class="text-sm text-zinc-400">
                            {move || if is_signup.get() {
                                "Sign up to start discovering movies"
                            } else {
                                "Sign in to continue"
                            }}
                        </p>
                    </div>

                    // Error message
                    <Show when=move || error.get().is_some()>
                        <p class="mb-6 text-red-400 text-sm text-center">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>

                    // Form
                    <form on:submit=on_submit class="flex flex-col gap-6">
                        // Name field (signup only)
                        <Show when=move || is_signup.get()>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                placeholder="Your name"
                                required=true
                                class="w-full px-4 py-2 bg-zinc-700 rounded-md focus:outline-none"
                            />
                        </Show>

                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            placeholder="E-mail"
                            required=true
                            class="w-full px-4 py-2 bg-zinc-700 rounded-md focus:outline-none"
                        />

                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            placeholder="Password"
                            required=true
                            class="w-full px-4 py-2 bg-zinc-700 rounded-md focus:outline-none"
                        />

                        <button
                            type="submit"
                            disabled=move || is_loading.get()
                            class="w-full py-2 bg-gradient-to-r from-purple-500 to-blue-500 rounded-md hover:opacity-90 disabled:opacity-50 flex items-center justify-center gap-2"
                        >
                            <Show when=move || is_loading.get()>
                                <LoadingSpinner />
                            </Show>
                            {move || if is_signup.get() { "Sign Up" } else { "Sign In" }}
                        </button>
                    </form>

                    // Toggle login/signup
                    <div class="mt-6 text-sm text-center text-zinc-400">
                        {move || if is_signup.get() {
                            "Already have an account? "
                        } else {
                            "Don't have an account? "
                        }}
                        <button
                            on:click=move |_| {
                                is_signup.update(|v| *v = !*v);
                                error.set(None);
                            }
                            class="text-blue-400 hover:underline"
                        >
                            {move || if is_signup.get() { "Sign in" } else { "Sign up" }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
