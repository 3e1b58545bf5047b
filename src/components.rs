use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::use_shell_config;

#[component]
pub fn AppNavBar() -> impl IntoView {
    let app_name = use_shell_config().app_name;

    view! {
        <header class="sticky top-0 z-40 w-full bg-white/80 backdrop-blur dark:bg-boxdark">
            <nav class="flex justify-between items-center py-4 px-6 mx-auto max-w-7xl lg:px-8">
                <A href="/" {..} class="text-lg font-semibold text-gray-900 dark:text-white">
                    {app_name}
                </A>
                <div class="flex gap-x-6 text-sm font-medium">
                    <A href="/chat">"Chat"</A>
                    <A href="/account">"Account"</A>
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-gray-900/10 dark:border-gray-200/10">
            <div class="flex justify-center gap-x-8 text-sm leading-6 text-gray-600 dark:text-white">
                <a href="/#features">"Features"</a>
                <a href="/#pricing">"Pricing"</a>
                <a href="/#faq">"FAQ"</a>
            </div>
        </footer>
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-24" role="status">
            <div class="w-10 h-10 rounded-full border-4 border-gray-300 animate-spin border-t-transparent"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Banner shown while the auth query is failing.
#[component]
pub fn ServerUnreachable() -> impl IntoView {
    view! {
        <div class="py-2 px-4 text-sm text-center text-white bg-red-600" role="alert">
            "We can't reach the server right now. Some features may be unavailable."
        </div>
    }
}
