use reqwest::Method;

use crate::client::PortalClient;
use crate::error::ApiResult;
use crate::models::{ActivityEntry, UserAccount, UserFilter, VerifyRequest};
use crate::transport::{ApiRequest, Transport};

/// Endpoints for administrators.
pub struct AdminApi<'a, T> {
    pub(super) client: &'a PortalClient<T>,
}

impl<T: Transport> AdminApi<'_, T> {
    /// Accounts matching the filter's type and verification state.
    pub async fn users(&self, filter: &UserFilter) -> ApiResult<Vec<UserAccount>> {
        self.client.get_with("/admin/users", &filter.params()).await
    }

    pub async fn verify_user(&self, user_id: i64, validation: bool) -> ApiResult<()> {
        let body = VerifyRequest {
            id: user_id,
            validation,
        };
        self.client
            .put(&format!("/admin/verify/{user_id}"), &body)
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> ApiResult<()> {
        self.client
            .delete(&format!("/admin/delete/{user_id}"))
            .await
    }

    /// Ask the backend to record this year's census snapshot.
    pub async fn snapshot_census(&self) -> ApiResult<()> {
        self.client
            .mutate(ApiRequest::new(Method::POST, "/admin/census"))
            .await
    }

    pub async fn activity_log(&self) -> ApiResult<Vec<ActivityEntry>> {
        self.client.get("/admin/activity-log").await
    }
}
