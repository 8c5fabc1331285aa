use reqwest::Method;

use crate::client::PortalClient;
use crate::error::ApiResult;
use crate::models::{
    Asset, CitizenProfile, Document, FamilyMember, FinancialRecord, InfrastructureProject, Issue,
    IssueDraft, WelfareScheme,
};
use crate::transport::{ApiRequest, Transport};

/// Endpoints for the logged-in citizen. The backend scopes every call to the
/// token's owner.
pub struct CitizenApi<'a, T> {
    pub(super) client: &'a PortalClient<T>,
}

impl<T: Transport> CitizenApi<'_, T> {
    pub async fn assets(&self) -> ApiResult<Vec<Asset>> {
        self.client.get("/citizen/assets").await
    }

    pub async fn family(&self) -> ApiResult<Vec<FamilyMember>> {
        self.client.get("/citizen/family").await
    }

    pub async fn documents(&self) -> ApiResult<Vec<Document>> {
        self.client.get("/citizen/document").await
    }

    pub async fn finances(&self) -> ApiResult<Vec<FinancialRecord>> {
        self.client.get("/citizen/financial-data").await
    }

    pub async fn welfare_schemes(&self) -> ApiResult<Vec<WelfareScheme>> {
        self.client.get("/citizen/welfare-scheme").await
    }

    /// Apply to a scheme. The id travels as a query parameter; there is no body.
    pub async fn enrol(&self, scheme_id: i64) -> ApiResult<()> {
        let request =
            ApiRequest::new(Method::POST, "/citizen/welfare-enrol").query("Scheme_id", scheme_id);
        self.client.mutate(request).await
    }

    pub async fn issues(&self) -> ApiResult<Vec<Issue>> {
        self.client.get("/citizen/issues").await
    }

    pub async fn report_issue(&self, draft: &IssueDraft) -> ApiResult<()> {
        self.client.post("/citizen/issues", draft).await
    }

    pub async fn withdraw_issue(&self, issue_id: i64) -> ApiResult<()> {
        let request =
            ApiRequest::new(Method::DELETE, "/citizen/issue/").query("Issue_id", issue_id);
        self.client.mutate(request).await
    }

    pub async fn infrastructure(&self) -> ApiResult<Vec<InfrastructureProject>> {
        self.client.get("/citizen/infrastructure").await
    }

    pub async fn profile(&self) -> ApiResult<CitizenProfile> {
        self.client.get("/citizen/profile").await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::testing::client;
    use crate::models::IssueStatus;

    use super::*;

    #[tokio::test]
    async fn test_create_then_refetch_shows_server_list() {
        let (client, transport) = client();
        let after = json!({"statusCode": 200, "message": "ok", "data": [
            {"Issue_id": 11, "description": "Streetlight broken", "status": "Pending"}
        ]});
        transport
            .respond_json(json!({"statusCode": 201, "message": "Issue created"}))
            .respond_json(after.clone());

        let draft = IssueDraft::new("Streetlight broken").unwrap();
        client.citizen().report_issue(&draft).await.unwrap();
        let issues = client.citizen().issues().await.unwrap();

        let expected: Vec<Issue> = serde_json::from_value(after["data"].clone()).unwrap();
        assert_eq!(issues, expected);
        assert_eq!(issues[0].status, IssueStatus::Open);

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].body, Some(json!({"description": "Streetlight broken"})));
        assert_eq!(requests[1].path, "/citizen/issues");
    }

    #[tokio::test]
    async fn test_withdraw_issue_uses_query() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 200, "message": "deleted"}));

        client.citizen().withdraw_issue(3).await.unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::DELETE);
        assert_eq!(sent.path, "/citizen/issue/");
        assert_eq!(sent.query, vec![("Issue_id".to_string(), "3".to_string())]);
    }

    #[tokio::test]
    async fn test_enrol_has_no_body() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 201, "message": "Applied"}));

        client.citizen().enrol(2).await.unwrap();

        let sent = transport.last_request();
        assert!(sent.body.is_none());
        assert_eq!(sent.query, vec![("Scheme_id".to_string(), "2".to_string())]);
    }

    #[tokio::test]
    async fn test_profile_from_envelope() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 200, "data": {
            "Date_of_birth": "1990-05-01", "Gender": "Female", "Address": "Ward 2",
            "Educational_qualification": "12th", "Occupation": "Teacher"
        }}));

        let profile = client.citizen().profile().await.unwrap();
        assert_eq!(profile.occupation, "Teacher");
    }
}
