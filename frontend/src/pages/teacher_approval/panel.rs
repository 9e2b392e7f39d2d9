use crate::{
    api::SessionUser,
    components::{empty_state::EmptyState, guard::RequireHod, layout::Layout},
    pages::teacher_approval::{
        components::table::PendingTeacherTable, layout::TeacherApprovalFrame,
        view_model::use_teacher_approval_view_model,
    },
    state::auth::use_auth,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn TeacherApprovalPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let session = Signal::derive(move || auth.with(|state| state.user.clone()));

    view! {
        <Title text="Approve Teacher" />
        <Layout>
            <RequireHod>
                <TeacherApprovalPanel session=session />
            </RequireHod>
        </Layout>
    }
}

#[component]
pub fn TeacherApprovalPanel(#[prop(into)] session: Signal<Option<SessionUser>>) -> impl IntoView {
    let vm = use_teacher_approval_view_model(session);
    let department = vm.department;
    let state = vm.state;
    let on_approve = vm.approve.clone();
    let on_delete = vm.delete.clone();

    view! {
        <TeacherApprovalFrame department=department>
            <Show
                when=move || department.with(Option::is_some)
                fallback=|| view! {
                    <EmptyState
                        title="No department is assigned to this account."
                        description="Pending teachers are listed per department."
                    />
                }
            >
                <PendingTeacherTable
                    state=state
                    on_approve=on_approve.clone()
                    on_delete=on_delete.clone()
                />
            </Show>
        </TeacherApprovalFrame>
    }
}
