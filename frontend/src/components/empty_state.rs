use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state text-center py-12 px-4 rounded-md border-2 border-dashed border-slate-400">
            <h3 class="mt-2 text-sm font-semibold">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-slate-500">{desc}</p> })}
        </div>
    }
}
