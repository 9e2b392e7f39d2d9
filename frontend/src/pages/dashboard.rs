use crate::{
    components::layout::{Layout, LoadingSpinner},
    router::paths,
    state::auth::use_auth,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let loading = move || auth.with(|state| state.loading);
    let greeting = move || {
        auth.with(|state| match &state.user {
            Some(user) => format!("Welcome, {}", user.name),
            None => "Welcome".to_string(),
        })
    };
    let is_hod = move || {
        auth.with(|state| state.user.as_ref().map(|user| user.is_hod()).unwrap_or(false))
    };

    view! {
        <Title text="Dashboard" />
        <Layout>
            <Show when=move || !loading() fallback=|| view! { <LoadingSpinner /> }>
                <div class="space-y-6">
                    <h2 class="text-2xl font-bold">{greeting}</h2>
                    <Show when=is_hod>
                        <p class="text-sm">
                            "Review new teacher registrations for your department on the "
                            <a href=paths::TEACHER_APPROVAL class="underline">"Approve Teacher"</a>
                            " page."
                        </p>
                    </Show>
                </div>
            </Show>
        </Layout>
    }
}
