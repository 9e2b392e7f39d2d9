use leptos::*;
use serde::{Deserialize, Serialize};

pub const HOD_ROLE: &str = "HOD";
pub const TEACHER_ROLE: &str = "teacher";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub department: Option<String>,
    pub role: String,
}

impl SessionUser {
    pub fn is_hod(&self) -> bool {
        self.role == HOD_ROLE
    }

    /// Department the user acts for, exactly as stored. Blank values count
    /// as absent.
    pub fn active_department(&self) -> Option<String> {
        self.department
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingTeacher {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTeacherRole {
    pub role: String,
}

impl UpdateTeacherRole {
    pub fn approve() -> Self {
        Self {
            role: TEACHER_ROLE.to_string(),
        }
    }
}

/// Body shape of non-2xx responses. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("request failed with status {status}")]
    Status { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_payload(status: u16, payload: ErrorPayload) -> Self {
        match payload.message {
            Some(message) if !message.trim().is_empty() => Self::Server { status, message },
            _ => Self::Status { status },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Status { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// The message the server sent, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_pending_teacher_from_mongo_style_id() {
        let raw = json!({
            "_id": "64f1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "qualification": "MSc",
            "username": "ada",
            "role": ""
        });
        let teacher: PendingTeacher = serde_json::from_value(raw).unwrap();
        assert_eq!(teacher.id, "64f1");
        assert_eq!(teacher.name, "Ada Lovelace");
        assert_eq!(teacher.qualification, "MSc");
    }

    #[test]
    fn deserialize_pending_teacher_accepts_plain_id_and_missing_fields() {
        let teacher: PendingTeacher =
            serde_json::from_value(json!({ "id": "t-1", "name": "Grace" })).unwrap();
        assert_eq!(teacher.id, "t-1");
        assert_eq!(teacher.email, "");
        assert_eq!(teacher.role, "");
    }

    #[test]
    fn session_user_role_and_department_helpers() {
        let mut user: SessionUser = serde_json::from_value(json!({
            "_id": "u1",
            "name": "Head",
            "username": "head",
            "department": "  Physics ",
            "role": "HOD"
        }))
        .unwrap();
        assert!(user.is_hod());
        assert_eq!(user.active_department().as_deref(), Some("  Physics "));

        user.department = Some("   ".into());
        assert_eq!(user.active_department(), None);

        user.role = "teacher".into();
        assert!(!user.is_hod());
    }

    #[test]
    fn approve_payload_serializes_teacher_role() {
        let body = serde_json::to_value(UpdateTeacherRole::approve()).unwrap();
        assert_eq!(body, json!({ "role": "teacher" }));
    }

    #[test]
    fn api_error_prefers_server_message() {
        let error = ApiError::from_payload(
            404,
            ErrorPayload {
                message: Some("Department not found".into()),
            },
        );
        assert_eq!(error.server_message(), Some("Department not found"));
        assert_eq!(error.message_or("fallback"), "Department not found");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn api_error_without_message_uses_fallback() {
        let blank = ApiError::from_payload(
            500,
            ErrorPayload {
                message: Some("  ".into()),
            },
        );
        assert_eq!(blank, ApiError::Status { status: 500 });
        assert_eq!(blank.message_or("Failed to fetch data"), "Failed to fetch data");

        let transport = ApiError::Transport("connection refused".into());
        assert_eq!(transport.status(), None);
        assert_eq!(transport.message_or("fallback"), "fallback");
        assert_eq!(
            String::from(transport),
            "request failed: connection refused"
        );
    }
}
