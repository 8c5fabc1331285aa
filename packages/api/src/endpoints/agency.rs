use crate::client::PortalClient;
use crate::error::ApiResult;
use crate::models::{
    InfraRef, InfrastructureDraft, InfrastructureProject, SchemeDraft, SchemeRef, StaffProfile,
    WelfareScheme,
};
use crate::transport::Transport;

const SCHEMES: &str = "/government-agency/welfare-scheme";
const PROJECTS: &str = "/government-agency/infrastructure";

/// Endpoints for government agencies.
pub struct AgencyApi<'a, T> {
    pub(super) client: &'a PortalClient<T>,
}

impl<T: Transport> AgencyApi<'_, T> {
    pub async fn welfare_schemes(&self, scheme_name: &str) -> ApiResult<Vec<WelfareScheme>> {
        self.client
            .get_with(SCHEMES, &[("scheme_name", scheme_name.trim().to_string())])
            .await
    }

    pub async fn create_scheme(&self, draft: &SchemeDraft) -> ApiResult<()> {
        self.client.post(SCHEMES, draft).await
    }

    pub async fn delete_scheme(&self, scheme_id: i64) -> ApiResult<()> {
        self.client
            .delete_with(SCHEMES, &SchemeRef { id: scheme_id })
            .await
    }

    pub async fn infrastructure(&self, location: &str) -> ApiResult<Vec<InfrastructureProject>> {
        self.client
            .get_with(PROJECTS, &[("location", location.trim().to_string())])
            .await
    }

    pub async fn create_project(&self, draft: &InfrastructureDraft) -> ApiResult<()> {
        self.client.post(PROJECTS, draft).await
    }

    pub async fn delete_project(&self, infra_id: i64) -> ApiResult<()> {
        self.client
            .delete_with(PROJECTS, &InfraRef { id: infra_id })
            .await
    }

    pub async fn profile(&self) -> ApiResult<StaffProfile> {
        self.client.get("/government-agency/profile").await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::testing::client;

    use super::*;

    #[tokio::test]
    async fn test_repeated_location_filter_is_stable() {
        let (client, transport) = client();
        let rows = json!({"statusCode": 200, "data": [
            {"Infra_id": 1, "Description": "Road", "Location": "Village A", "Funding": 100, "Actual_cost": 90}
        ]});
        transport.respond_json(rows.clone()).respond_json(rows);

        let first = client.agency().infrastructure("Village A").await.unwrap();
        let second = client.agency().infrastructure("Village A").await.unwrap();

        assert_eq!(first, second);
        let requests = transport.requests();
        assert_eq!(requests[0], requests[1]);
        assert_eq!(
            requests[0].query,
            vec![("location".to_string(), "Village A".to_string())]
        );
    }

    #[tokio::test]
    async fn test_delete_scheme_body() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 200}));

        client.agency().delete_scheme(8).await.unwrap();

        assert_eq!(transport.last_request().body, Some(json!({"Scheme_id": 8})));
    }
}
