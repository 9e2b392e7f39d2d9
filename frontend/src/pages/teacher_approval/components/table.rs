use crate::{
    api::PendingTeacher,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::teacher_approval::state::{ApprovalListState, LoadState},
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableView {
    Spinner,
    Empty,
    Rows,
    Hidden,
}

pub fn table_view(state: &ApprovalListState) -> TableView {
    if !state.teachers().is_empty() {
        return TableView::Rows;
    }
    match state.load_state() {
        LoadState::Idle | LoadState::Loading { .. } => TableView::Spinner,
        LoadState::Loaded(_) => TableView::Empty,
        LoadState::Failed { .. } => TableView::Hidden,
    }
}

const CELL: &str = "border-t-[1px] border-slate-400 p-2";
const ACTION_CELL: &str = "border-t-[1px] border-slate-400 p-0";

#[component]
pub fn PendingTeacherTable(
    state: RwSignal<ApprovalListState>,
    on_approve: Callback<usize>,
    on_delete: Callback<usize>,
) -> impl IntoView {
    let view_kind = create_memo(move |_| state.with(table_view));
    let teachers = create_memo(move |_| state.with(|s| s.teachers().to_vec()));
    let error = create_memo(move |_| state.with(|s| s.error().map(str::to_string)));

    let body = move || match view_kind.get() {
        TableView::Spinner => view! { <LoadingSpinner /> }.into_view(),
        TableView::Empty => view! {
            <EmptyState
                title="No teachers are awaiting approval."
                description="New teacher registrations for this department will appear here."
            />
        }
        .into_view(),
        TableView::Hidden => ().into_view(),
        TableView::Rows => {
            let on_approve = on_approve.clone();
            let on_delete = on_delete.clone();
            view! {
                <div class="my-4 w-full overflow-auto rounded-md border-2 border-slate-900 dark:border-slate-500">
                    <table class="w-full">
                        <thead>
                            <tr class="bg-slate-900 text-base text-slate-100">
                                <th class="p-2">"Name"</th>
                                <th class="p-2">"Email"</th>
                                <th class="p-2">"Qualification"</th>
                                <th class="p-2">"Username"</th>
                                <th class="p-2">"Approve"</th>
                                <th class="p-2">"Reject"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || teachers.get()
                                key=|teacher| teacher.id.clone()
                                children=move |teacher: PendingTeacher| {
                                    view! {
                                        <PendingTeacherRow
                                            teacher=teacher
                                            state=state
                                            on_approve=on_approve.clone()
                                            on_delete=on_delete.clone()
                                        />
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            }
            .into_view()
        }
    };

    view! {
        <div class="pending-teachers">
            {body}
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
        </div>
    }
}

/// One record with its approve/reject controls. Clicks resolve the row's
/// current position at click time, since earlier rows may have been removed.
#[component]
fn PendingTeacherRow(
    teacher: PendingTeacher,
    state: RwSignal<ApprovalListState>,
    on_approve: Callback<usize>,
    on_delete: Callback<usize>,
) -> impl IntoView {
    let id = teacher.id.clone();
    let in_flight = {
        let id = id.clone();
        move || state.with(|s| s.is_pending(&id))
    };
    let dispatch = move |callback: &Callback<usize>, id: &str| {
        if let Some(index) = state.with_untracked(|s| s.position_of(id)) {
            callback.call(index);
        }
    };
    let on_approve_click = {
        let id = id.clone();
        move |_| dispatch(&on_approve, &id)
    };
    let on_delete_click = move |_| dispatch(&on_delete, &id);

    view! {
        <tr data-teacher-id=teacher.id.clone()>
            <td class=CELL>{teacher.name.clone()}</td>
            <td class=CELL>{teacher.email.clone()}</td>
            <td class=CELL>{teacher.qualification.clone()}</td>
            <td class=CELL>{teacher.username.clone()}</td>
            <td class=ACTION_CELL>
                <button
                    type="button"
                    class="m-0 flex h-auto w-full justify-center bg-transparent py-3 text-xl hover:bg-violet-900 disabled:opacity-50"
                    aria-label=format!("Approve {}", teacher.name)
                    disabled=in_flight.clone()
                    on:click=on_approve_click
                >
                    "+"
                </button>
            </td>
            <td class=ACTION_CELL>
                <button
                    type="button"
                    class="m-0 flex h-auto w-full justify-center bg-transparent py-3 text-xl hover:bg-red-600 disabled:opacity-50"
                    aria-label=format!("Reject {}", teacher.name)
                    disabled=in_flight
                    on:click=on_delete_click
                >
                    "✕"
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::helpers::pending_teacher;

    #[test]
    fn table_view_follows_load_state() {
        let mut state = ApprovalListState::default();
        assert_eq!(table_view(&state), TableView::Spinner);

        let ticket = state.begin_load("CS");
        assert_eq!(table_view(&state), TableView::Spinner);
        state.finish_load(ticket, Ok(Vec::new()));
        assert_eq!(table_view(&state), TableView::Empty);

        let ticket = state.begin_load("CS");
        state.finish_load(ticket, Ok(vec![pending_teacher("a", "A")]));
        assert_eq!(table_view(&state), TableView::Rows);

        let ticket = state.begin_load("CS");
        state.finish_load(ticket, Err(ApiError::Status { status: 500 }));
        assert_eq!(table_view(&state), TableView::Rows);

        let ticket = state.begin_load("Physics");
        state.finish_load(ticket, Err(ApiError::Status { status: 500 }));
        assert_eq!(table_view(&state), TableView::Hidden);
    }
}
