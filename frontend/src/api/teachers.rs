use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, PendingTeacher, UpdateTeacherRole},
};

impl ApiClient {
    pub async fn list_pending_teachers(
        &self,
        department: &str,
    ) -> Result<Vec<PendingTeacher>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let department = utf8_percent_encode(department, NON_ALPHANUMERIC);
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/teacher/approve/{}", base_url, department)),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn update_teacher_role(
        &self,
        teacher_id: &str,
        payload: &UpdateTeacherRole,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .patch(teacher_url(&base_url, teacher_id))
                    .json(payload),
            )
            .await?;
        map_empty_response(response).await
    }

    pub async fn delete_teacher(&self, teacher_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().delete(teacher_url(&base_url, teacher_id)))
            .await?;
        map_empty_response(response).await
    }
}

fn teacher_url(base_url: &str, teacher_id: &str) -> String {
    format!(
        "{}/teacher/{}",
        base_url,
        utf8_percent_encode(teacher_id, NON_ALPHANUMERIC)
    )
}
