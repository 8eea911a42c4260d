//! Collapsible side navigation

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Left menu that expands on hover
#[component]
pub fn SideMenu() -> impl IntoView {
    let pathname = use_location().pathname;

    let items = [
        ("/", "Home", "🏠"),
        ("/what-to-watch", "What should I watch?", "🎲"),
        ("/login", "Login", "🔑"),
    ];

    view! {
        <aside class="group bg-neutral-900 text-white w-16 hover:w-64 transition-all duration-300 min-h-screen p-4 flex flex-col gap-4 fixed left-0 top-0 z-50 overflow-hidden">
            // Title only shows once the menu is expanded
            <h1 class="text-xl font-bold mb-6 text-blue-400 whitespace-nowrap opacity-0 group-hover:opacity-100 transition">
                "🎬 CineBase"
            </h1>

            <nav class="flex flex-col gap-2">
                {items
                    .into_iter()
                    .map(|(path, label, icon)| {
                        let is_active = Signal::derive(move || pathname.get() == path);
                        view! {
                            <a
                                href=path
                                class=move || format!(
                                    "flex items-center gap-3 px-3 py-2 rounded-lg transition-all duration-300 {}",
                                    if is_active.get() {
                                        "bg-blue-500 text-white"
                                    } else {
                                        "hover:bg-neutral-800"
                                    },
                                )
                            >
                                <div class=move || format!(
                                    "w-8 h-8 flex items-center justify-center rounded-full transition {}",
                                    if is_active.get() { "bg-white/20" } else { "" },
                                )>
                                    {icon}
                                </div>
                                <span class="whitespace-nowrap opacity-0 group-hover:opacity-100 transition duration-300 text-sm">
                                    {label}
                                </span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
