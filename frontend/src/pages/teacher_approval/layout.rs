use leptos::*;

#[component]
pub fn TeacherApprovalFrame(
    #[prop(into)] department: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="teacher__approval space-y-4">
            <h2 class="mb-2 mt-3 text-4xl font-bold text-violet-950 underline decoration-2 underline-offset-4 dark:text-slate-400 md:text-6xl">
                "Approve Teacher"
            </h2>
            <h3 class="text-2xl font-semibold">
                "Department: " {move || department.get().unwrap_or_default()}
            </h3>
            {children()}
        </section>
    }
}
