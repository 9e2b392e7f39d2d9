use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::toast::{provide_toaster, ToastHost},
    pages::{DashboardPage, TeacherApprovalPage},
    state::auth::AuthProvider,
};

pub mod paths {
    pub const ROOT: &str = "/";
    pub const DASHBOARD: &str = "/dash";
    pub const TEACHER_APPROVAL: &str = "/teacher/approve";
}

pub const ROUTE_PATHS: &[&str] = &[paths::ROOT, paths::DASHBOARD, paths::TEACHER_APPROVAL];

/// Routes that render only for a head of department.
pub const PROTECTED_ROUTE_PATHS: &[&str] = &[paths::TEACHER_APPROVAL];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_toaster();
    view! {
        <Title formatter=|text: String| format!("{} | Kollege", text) />
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=paths::ROOT view=RootRedirect/>
                    <Route path=paths::DASHBOARD view=DashboardPage/>
                    <Route path=paths::TEACHER_APPROVAL view=TeacherApprovalPage/>
                </Routes>
            </Router>
            <ToastHost/>
        </AuthProvider>
    }
}

#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=paths::DASHBOARD/> }
}
