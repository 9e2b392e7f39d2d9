use crate::{router::paths, state::auth::use_auth};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let display_name = move || {
        auth.get()
            .user
            .map(|user| {
                if user.name.trim().is_empty() {
                    user.username
                } else {
                    user.name
                }
            })
            .unwrap_or_default()
    };
    let is_hod = move || auth.get().user.as_ref().map(|user| user.is_hod()).unwrap_or(false);

    view! {
        <header class="bg-slate-900 text-slate-100 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold">"Kollege"</h1>
                    <nav class="flex items-center space-x-4">
                        <a href=paths::DASHBOARD class="px-3 py-2 rounded-md text-sm font-medium hover:bg-violet-900">
                            "Dashboard"
                        </a>
                        <Show when=is_hod>
                            <a href=paths::TEACHER_APPROVAL class="px-3 py-2 rounded-md text-sm font-medium hover:bg-violet-900">
                                "Approve Teacher"
                            </a>
                        </Show>
                        <span class="text-sm text-slate-400">{display_name}</span>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 dark:bg-slate-800">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-label="Loading">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-violet-900"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-strip bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded my-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}
