use crate::{
    api::SessionUser,
    components::layout::LoadingSpinner,
    router::paths,
    state::auth::{use_auth, AuthState},
    utils::navigation,
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Wait,
    Redirect(&'static str),
}

pub fn hod_guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if is_hod_user(state.user.as_ref()) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(paths::DASHBOARD)
    }
}

fn is_hod_user(user: Option<&SessionUser>) -> bool {
    user.map(SessionUser::is_hod).unwrap_or(false)
}

/// Sends the user to the decision's target, if it has one. Returns whether a
/// redirect was issued.
pub fn enforce_guard_decision(
    decision: GuardDecision,
    redirect: impl FnOnce(&'static str),
) -> bool {
    let GuardDecision::Redirect(target) = decision else {
        return false;
    };
    log::info!("access to HOD-only page denied, redirecting to {}", target);
    redirect(target);
    true
}

/// Renders `children` only for a head of department. The decision tracks the
/// session signal, so losing the role later also sends the user away.
#[component]
pub fn RequireHod(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| hod_guard_decision(&auth.get()));

    let navigate = use_context::<RouterContext>().map(|_| use_navigate());
    create_effect(move |_| {
        enforce_guard_decision(decision.get(), |target| match &navigate {
            Some(navigate) => navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            ),
            None => navigation::replace_location(target),
        });
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Wait {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}
