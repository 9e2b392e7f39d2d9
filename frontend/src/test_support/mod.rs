/// Host-side rendering for component tests.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr {
    use leptos::*;

    /// Runs `body` inside a fresh reactive runtime that is disposed afterwards.
    pub fn with_runtime<T>(body: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let output = body();
        runtime.dispose();
        output
    }

    /// Keeps resources from fetching while a view is rendered to HTML, and
    /// re-enables them on drop even if rendering panics.
    struct ResourceLoadPause;

    impl ResourceLoadPause {
        fn start() -> Self {
            leptos_reactive::suppress_resource_load(true);
            Self
        }
    }

    impl Drop for ResourceLoadPause {
        fn drop(&mut self) {
            leptos_reactive::suppress_resource_load(false);
        }
    }

    pub fn render_to_string<V>(build: impl FnOnce() -> V + 'static) -> String
    where
        V: IntoView + 'static,
    {
        let _pause = ResourceLoadPause::start();
        with_runtime(|| build().into_view().render_to_string().to_string())
    }
}

#[cfg(test)]
pub mod helpers {
    use crate::api::{PendingTeacher, SessionUser};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn hod_user(department: &str) -> SessionUser {
        SessionUser {
            id: "u-hod".into(),
            name: "Head Of Department".into(),
            username: "hod".into(),
            department: Some(department.into()),
            role: "HOD".into(),
        }
    }

    pub fn teacher_user() -> SessionUser {
        SessionUser {
            id: "u-teacher".into(),
            name: "Regular Teacher".into(),
            username: "teacher".into(),
            department: Some("CS".into()),
            role: "teacher".into(),
        }
    }

    pub fn pending_teacher(id: &str, name: &str) -> PendingTeacher {
        PendingTeacher {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", id),
            qualification: "MSc".into(),
            username: id.into(),
            role: String::new(),
        }
    }

    pub fn provide_auth(
        user: Option<SessionUser>,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState { user, loading });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
