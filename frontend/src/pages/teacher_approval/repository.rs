use crate::api::{ApiClient, ApiError, PendingTeacher, UpdateTeacherRole};
use std::rc::Rc;

#[derive(Clone)]
pub struct TeacherApprovalRepository {
    client: Rc<ApiClient>,
}

impl Default for TeacherApprovalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TeacherApprovalRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_pending(&self, department: &str) -> Result<Vec<PendingTeacher>, ApiError> {
        self.client.list_pending_teachers(department).await
    }

    pub async fn approve(&self, teacher_id: &str) -> Result<(), ApiError> {
        self.client
            .update_teacher_role(teacher_id, &UpdateTeacherRole::approve())
            .await
    }

    pub async fn remove(&self, teacher_id: &str) -> Result<(), ApiError> {
        self.client.delete_teacher(teacher_id).await
    }
}
