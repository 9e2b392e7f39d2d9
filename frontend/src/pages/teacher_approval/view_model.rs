use super::{
    repository::TeacherApprovalRepository,
    state::{ActionKind, ActionOutcome, ApprovalListState, PendingAction},
};
use crate::{
    api::{ApiClient, SessionUser},
    components::toast::{use_toaster, Toaster},
    utils::tasks::TaskScope,
};
use leptos::*;
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct TeacherApprovalViewModel {
    pub department: Memo<Option<String>>,
    pub state: RwSignal<ApprovalListState>,
    pub approve: Callback<usize>,
    pub delete: Callback<usize>,
}

pub async fn load_pending_teachers(
    repo: &TeacherApprovalRepository,
    department: String,
    state: RwSignal<ApprovalListState>,
) {
    let Some(ticket) = state.try_update(|s| s.begin_load(&department)) else {
        return;
    };
    let result = repo.fetch_pending(&department).await;
    match &result {
        Ok(teachers) => log::debug!(
            "loaded {} pending teachers for {}",
            teachers.len(),
            department
        ),
        Err(err) => log::warn!("loading pending teachers for {} failed: {}", department, err),
    }
    if state.try_update(|s| s.finish_load(ticket, result)) == Some(false) {
        log::debug!("dropped superseded load for {}", department);
    }
}

/// Returns the load to run when the acting department moved away from
/// `last`. An unchanged or absent department needs no fetch.
pub fn load_on_department_change(
    last: Option<&str>,
    current: Option<&str>,
    repo: &TeacherApprovalRepository,
    state: RwSignal<ApprovalListState>,
) -> Option<impl Future<Output = ()> + 'static> {
    let department = current?;
    if last == Some(department) {
        return None;
    }
    let repo = repo.clone();
    let department = department.to_string();
    Some(async move { load_pending_teachers(&repo, department, state).await })
}

pub fn start_action(
    state: RwSignal<ApprovalListState>,
    index: usize,
    kind: ActionKind,
) -> Option<PendingAction> {
    state.try_update(|s| s.begin_action(index, kind)).flatten()
}

pub async fn complete_action(
    repo: &TeacherApprovalRepository,
    action: PendingAction,
    state: RwSignal<ApprovalListState>,
    toaster: Toaster,
) {
    let result = match action.kind {
        ActionKind::Approve => repo.approve(&action.teacher_id).await,
        ActionKind::Delete => repo.remove(&action.teacher_id).await,
    };
    if let Err(err) = &result {
        log::warn!("{:?} of teacher {} failed: {}", action.kind, action.teacher_id, err);
    }
    let Some(outcome) = state.try_update(|s| s.finish_action(&action, result)) else {
        return;
    };
    match outcome {
        ActionOutcome::Succeeded { message, teacher } => {
            if let Some(teacher) = teacher {
                log::info!("{:?} of {} ({}) confirmed", action.kind, teacher.username, teacher.id);
            }
            toaster.success(message);
        }
        ActionOutcome::Failed { message } => toaster.error(message),
    }
}

fn action_callback(
    kind: ActionKind,
    repository: TeacherApprovalRepository,
    state: RwSignal<ApprovalListState>,
    toaster: Toaster,
    tasks: TaskScope,
) -> Callback<usize> {
    Callback::new(move |index: usize| {
        let Some(action) = start_action(state, index, kind) else {
            log::debug!("ignored {:?} for row {}", kind, index);
            return;
        };
        let repo = repository.clone();
        tasks.spawn(async move { complete_action(&repo, action, state, toaster).await });
    })
}

pub fn use_teacher_approval_view_model(
    session: Signal<Option<SessionUser>>,
) -> TeacherApprovalViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = TeacherApprovalRepository::new_with_client(Rc::new(api));
    let toaster = use_toaster();
    let state = create_rw_signal(ApprovalListState::default());
    let department = create_memo(move |_| {
        session
            .get()
            .and_then(|user| user.active_department())
    });

    let tasks = TaskScope::new();
    {
        let tasks = tasks.clone();
        on_cleanup(move || tasks.cancel_all());
    }

    let repo_for_load = repository.clone();
    let tasks_for_load = tasks.clone();
    create_effect(move |last: Option<Option<String>>| {
        let current = department.get();
        let last = last.flatten();
        if let Some(load) =
            load_on_department_change(last.as_deref(), current.as_deref(), &repo_for_load, state)
        {
            tasks_for_load.spawn(load);
        }
        current
    });

    let approve = action_callback(
        ActionKind::Approve,
        repository.clone(),
        state,
        toaster,
        tasks.clone(),
    );
    let delete = action_callback(ActionKind::Delete, repository, state, toaster, tasks);

    TeacherApprovalViewModel {
        department,
        state,
        approve,
        delete,
    }
}
