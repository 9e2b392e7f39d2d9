use std::collections::HashSet;

use crate::api::{ApiError, PendingTeacher, TEACHER_ROLE};

pub const LOAD_FAILED_FALLBACK: &str = "Failed to fetch data";
pub const APPROVE_SUCCESS: &str = "Teacher approved successfully";
pub const APPROVE_FAILED_FALLBACK: &str = "Failed to approve teacher";
pub const DELETE_SUCCESS: &str = "Teacher deleted successfully";
pub const DELETE_FAILED_FALLBACK: &str = "Failed to delete teacher";

/// Where the list is in its fetch lifecycle. Records shown while loading or
/// after a failure are the ones from the last successful fetch for the same
/// department. A load error stays visible until a later load settles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        previous: Vec<PendingTeacher>,
        error: Option<String>,
    },
    Loaded(Vec<PendingTeacher>),
    Failed {
        message: String,
        previous: Vec<PendingTeacher>,
    },
}

impl LoadState {
    pub fn teachers(&self) -> &[PendingTeacher] {
        match self {
            LoadState::Idle => &[],
            LoadState::Loading { previous, .. } | LoadState::Failed { previous, .. } => previous,
            LoadState::Loaded(teachers) => teachers,
        }
    }

    fn teachers_mut(&mut self) -> Option<&mut Vec<PendingTeacher>> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { previous, .. } | LoadState::Failed { previous, .. } => {
                Some(previous)
            }
            LoadState::Loaded(teachers) => Some(teachers),
        }
    }

    fn take_teachers(&mut self) -> Vec<PendingTeacher> {
        self.teachers_mut().map(std::mem::take).unwrap_or_default()
    }

    fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message, .. } => Some(message),
            LoadState::Loading { error, .. } => error.as_deref(),
            LoadState::Idle | LoadState::Loaded(_) => None,
        }
    }

    fn take_error(&mut self) -> Option<String> {
        match self {
            LoadState::Failed { message, .. } => Some(std::mem::take(message)),
            LoadState::Loading { error, .. } => error.take(),
            LoadState::Idle | LoadState::Loaded(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Approve,
    Delete,
}

impl ActionKind {
    fn success_message(&self) -> &'static str {
        match self {
            ActionKind::Approve => APPROVE_SUCCESS,
            ActionKind::Delete => DELETE_SUCCESS,
        }
    }

    fn failure_fallback(&self) -> &'static str {
        match self {
            ActionKind::Approve => APPROVE_FAILED_FALLBACK,
            ActionKind::Delete => DELETE_FAILED_FALLBACK,
        }
    }
}

/// Proof that a load was started; only the newest ticket may apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAction {
    pub kind: ActionKind,
    pub teacher_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded {
        message: String,
        teacher: Option<PendingTeacher>,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalListState {
    load: LoadState,
    department: Option<String>,
    in_flight: HashSet<String>,
    generation: u64,
}

impl ApprovalListState {
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn teachers(&self) -> &[PendingTeacher] {
        self.load.teachers()
    }

    pub fn error(&self) -> Option<&str> {
        self.load.error()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Idle | LoadState::Loading { .. })
    }

    pub fn position_of(&self, teacher_id: &str) -> Option<usize> {
        self.teachers()
            .iter()
            .position(|teacher| teacher.id == teacher_id)
    }

    pub fn is_pending(&self, teacher_id: &str) -> bool {
        self.in_flight.contains(teacher_id)
    }

    /// Starts a fetch for `department`. Records already shown are kept only
    /// when the department is unchanged; a pending load error is carried
    /// until this fetch settles.
    pub fn begin_load(&mut self, department: &str) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        let error = self.load.take_error();
        let same_department = self.department.as_deref() == Some(department);
        let previous = if same_department {
            self.load.take_teachers()
        } else {
            self.in_flight.clear();
            Vec::new()
        };
        self.department = Some(department.to_string());
        self.load = LoadState::Loading { previous, error };
        LoadTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` when a newer load superseded it.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<PendingTeacher>, ApiError>,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.load = match result {
            Ok(teachers) => LoadState::Loaded(teachers),
            Err(err) => LoadState::Failed {
                message: err.message_or(LOAD_FAILED_FALLBACK),
                previous: self.load.take_teachers(),
            },
        };
        true
    }

    /// Resolves `index` to a record and marks it in flight. `None` when the
    /// index is out of range or the record already has a request outstanding.
    pub fn begin_action(&mut self, index: usize, kind: ActionKind) -> Option<PendingAction> {
        let teacher_id = self.teachers().get(index)?.id.clone();
        if !self.in_flight.insert(teacher_id.clone()) {
            return None;
        }
        Some(PendingAction { kind, teacher_id })
    }

    /// Settles an action. On success the record leaves the list; on failure
    /// nothing but the in-flight marker changes.
    pub fn finish_action(
        &mut self,
        action: &PendingAction,
        result: Result<(), ApiError>,
    ) -> ActionOutcome {
        self.in_flight.remove(&action.teacher_id);
        match result {
            Ok(()) => {
                let teacher = self.remove_teacher(&action.teacher_id).map(|mut teacher| {
                    if action.kind == ActionKind::Approve {
                        teacher.role = TEACHER_ROLE.to_string();
                    }
                    teacher
                });
                ActionOutcome::Succeeded {
                    message: action.kind.success_message().to_string(),
                    teacher,
                }
            }
            Err(err) => ActionOutcome::Failed {
                message: err.message_or(action.kind.failure_fallback()),
            },
        }
    }

    fn remove_teacher(&mut self, teacher_id: &str) -> Option<PendingTeacher> {
        let teachers = self.load.teachers_mut()?;
        let index = teachers.iter().position(|teacher| teacher.id == teacher_id)?;
        Some(teachers.remove(index))
    }
}
