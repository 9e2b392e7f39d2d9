use crate::api::SessionUser;
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Parses the session persisted by the login flow. Anything unreadable is
/// treated as "signed out".
pub fn parse_stored_user(raw: Option<&str>) -> Option<SessionUser> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<SessionUser>(raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("discarding unreadable stored session: {}", err);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn restore_session() -> Option<SessionUser> {
    use crate::utils::storage;
    parse_stored_user(storage::read_item(storage::CURRENT_USER_KEY).as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
fn restore_session() -> Option<SessionUser> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn clear_stored_session() {
    use crate::utils::storage;
    storage::remove_items(&[storage::ACCESS_TOKEN_KEY, storage::CURRENT_USER_KEY]);
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        user: None,
        loading: true,
    });

    // Storage is only reachable in the browser, where effects run.
    create_effect(move |_| {
        let user = restore_session();
        match &user {
            Some(user) => log::debug!("restored session for {}", user.username),
            None => log::debug!("no stored session"),
        }
        set_auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}
