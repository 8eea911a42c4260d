//! Avatar with the session dropdown

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::AppState;

/// Top-right avatar showing the session initials; hidden when signed out
#[component]
pub fn UserAvatar() -> impl IntoView {
    let state = expect_context::<AppState>();
    // Stored so the nested closures below can Copy it
    let navigate = StoredValue::new(use_navigate());
    let open = RwSignal::new(false);

    let initials = Signal::derive(move || {
        state
            .auth
            .session
            .get()
            .map(|s| s.initials())
            .unwrap_or_default()
    });
    let email = Signal::derive(move || {
        state
            .auth
            .session
            .get()
            .map(|s| s.email)
            .unwrap_or_default()
    });

    let sign_out = move |_| {
        open.set(false);
        state.auth.log_out();
        navigate.with_value(|nav| nav("/login", Default::default()));
    };

    view! {
        <Show when=move || state.auth.is_authenticated()>
            <div class="fixed top-4 right-4 z-50 flex flex-col items-end">
                // Round button with the initials
                <button
                    on:click=move |_| open.update(|v| *v = !*v)
                    title="Open menu"
                    class="w-10 h-10 rounded-full bg-blue-600 text-white font-bold flex items-center justify-center hover:opacity-90 transition"
                >
                    {move || initials.get()}
                </button>

                // Dropdown with the email and a sign-out action
                <Show when=move || open.get()>
                    <div class="mt-2 w-44 bg-zinc-800 text-white rounded-md shadow-lg p-2 text-sm">
                        <p class="mb-2 text-gray-300 truncate">{move || email.get()}</p>
                        <button
                            on:click=sign_out
                            class="w-full text-left px-3 py-2 rounded hover:bg-zinc-700 transition"
                        >
                            "Sign out"
                        </button>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
