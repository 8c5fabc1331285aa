use crate::client::PortalClient;
use crate::error::ApiResult;
use crate::models::{
    Asset, AssetDraft, CostUpdate, Document, DocumentDraft, EnrollmentDecision, EnrollmentStatus,
    EnvironmentalRecord, Family, FamilyRef, FinancialDraft, FinancialRecord, FinancialRef,
    HeadRef, InfrastructureProject, Issue, StaffProfile, StatusUpdate, WelfareEnrollment,
    WelfareScheme, YearKey,
};
use crate::transport::Transport;

use super::scoped_path;

const ASSETS: &str = "/panchayat-employee/assets";
const DOCUMENTS: &str = "/panchayat-employee/documents";
const FAMILY: &str = "/panchayat-employee/family";
const FINANCIAL: &str = "/panchayat-employee/financial-data";
const ENVIRONMENT: &str = "/panchayat-employee/environmental-data";
const ENROLMENT: &str = "/panchayat-employee/welfare-enrol";

/// Endpoints for panchayat employees. Which ones succeed depends on the role the
/// backend granted; the views gate on it too.
pub struct EmployeeApi<'a, T> {
    pub(super) client: &'a PortalClient<T>,
}

impl<T: Transport> EmployeeApi<'_, T> {
    // Assets

    /// Assets of one citizen, or every asset the employee can see when
    /// `citizen` is blank.
    pub async fn assets(&self, citizen: &str) -> ApiResult<Vec<Asset>> {
        self.client.get(&scoped_path(ASSETS, citizen)).await
    }

    pub async fn create_asset(&self, draft: &AssetDraft) -> ApiResult<()> {
        self.client.post(ASSETS, draft).await
    }

    pub async fn update_asset(&self, asset_id: i64, draft: &AssetDraft) -> ApiResult<()> {
        self.client.put(&format!("{ASSETS}/{asset_id}"), draft).await
    }

    pub async fn delete_asset(&self, asset_id: i64) -> ApiResult<()> {
        self.client.delete(&format!("{ASSETS}/{asset_id}")).await
    }

    // Documents

    pub async fn documents(&self, citizen: &str) -> ApiResult<Vec<Document>> {
        self.client.get(&scoped_path(DOCUMENTS, citizen)).await
    }

    pub async fn upload_document(&self, draft: &DocumentDraft) -> ApiResult<()> {
        self.client.post(DOCUMENTS, draft).await
    }

    pub async fn replace_document(&self, draft: &DocumentDraft) -> ApiResult<()> {
        self.client.put(DOCUMENTS, draft).await
    }

    pub async fn delete_document(&self, document_id: i64) -> ApiResult<()> {
        self.client
            .delete(&format!("{DOCUMENTS}/{document_id}"))
            .await
    }

    // Issues

    pub async fn issues(&self) -> ApiResult<Vec<Issue>> {
        self.client.get("/panchayat-employee/issues").await
    }

    pub async fn set_issue_status(&self, update: &StatusUpdate) -> ApiResult<()> {
        self.client.put("/panchayat-employee/issues", update).await
    }

    // Financial data

    pub async fn financial_data(
        &self,
        year: &str,
        citizen: &str,
    ) -> ApiResult<Vec<FinancialRecord>> {
        self.client
            .get_with(
                FINANCIAL,
                &[
                    ("year", year.trim().to_string()),
                    ("user_name", citizen.trim().to_string()),
                ],
            )
            .await
    }

    pub async fn create_financial(&self, draft: &FinancialDraft) -> ApiResult<()> {
        self.client.post(FINANCIAL, draft).await
    }

    pub async fn delete_financial(&self, financial_id: i64) -> ApiResult<()> {
        self.client
            .delete_with(FINANCIAL, &FinancialRef { id: financial_id })
            .await
    }

    // Infrastructure

    pub async fn infrastructure(&self) -> ApiResult<Vec<InfrastructureProject>> {
        self.client.get("/panchayat-employee/infrastructure").await
    }

    pub async fn update_actual_cost(&self, update: CostUpdate) -> ApiResult<()> {
        self.client
            .put("/panchayat-employee/infrastructure", &update)
            .await
    }

    // Welfare

    pub async fn welfare_schemes(&self, scheme_name: &str) -> ApiResult<Vec<WelfareScheme>> {
        self.client
            .get_with(
                "/panchayat-employee/welfare-schemes",
                &[("scheme_name", scheme_name.trim().to_string())],
            )
            .await
    }

    pub async fn enrollments(
        &self,
        scheme_name: &str,
        status: Option<EnrollmentStatus>,
    ) -> ApiResult<Vec<WelfareEnrollment>> {
        let status = status.map(|s| s.as_str().to_string()).unwrap_or_default();
        self.client
            .get_with(
                ENROLMENT,
                &[
                    ("scheme_name", scheme_name.trim().to_string()),
                    ("status", status),
                ],
            )
            .await
    }

    pub async fn decide_enrollment(&self, decision: &EnrollmentDecision) -> ApiResult<()> {
        self.client.put(ENROLMENT, decision).await
    }

    // Environment

    pub async fn environmental_data(&self, year: &str) -> ApiResult<Vec<EnvironmentalRecord>> {
        self.client
            .get_with(ENVIRONMENT, &[("year", year.trim().to_string())])
            .await
    }

    pub async fn add_environmental(&self, record: &EnvironmentalRecord) -> ApiResult<()> {
        self.client.post(ENVIRONMENT, record).await
    }

    pub async fn delete_environmental(&self, year: i32) -> ApiResult<()> {
        self.client.delete_with(ENVIRONMENT, &YearKey { year }).await
    }

    // Families

    pub async fn families(&self, citizen: &str) -> ApiResult<Vec<Family>> {
        self.client.get(&scoped_path(FAMILY, citizen)).await
    }

    pub async fn create_family(&self, head_user_name: &str) -> ApiResult<()> {
        let body = HeadRef {
            head_user_name: head_user_name.trim().to_string(),
        };
        self.client.post(FAMILY, &body).await
    }

    pub async fn delete_family(&self, family_id: i64) -> ApiResult<()> {
        self.client.delete_with(FAMILY, &FamilyRef { family_id }).await
    }

    /// The employee's profile. The role it reports replaces the session role,
    /// so a role changed by an admin takes effect without logging in again.
    pub async fn profile(&self) -> ApiResult<StaffProfile> {
        let profile: StaffProfile = self.client.get("/panchayat-employee/profile").await?;
        let session = self.client.session();
        if !profile.role.is_empty() && session.identity().role != profile.role {
            tracing::info!("Employee role refreshed to {}", profile.role);
            session.set_role(&profile.role);
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use crate::client::testing::client;

    use super::*;

    #[tokio::test]
    async fn test_asset_list_by_citizen() {
        let (client, transport) = client();
        transport.respond_json(json!([
            {"Asset_id": 1, "Type": "Land", "Valuation": 50000, "User_name": "john_doe"}
        ]));

        let assets = client.employee().assets("john_doe").await.unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(transport.last_request().path, format!("{ASSETS}/john_doe"));
    }

    #[tokio::test]
    async fn test_blank_citizen_omits_segment() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 200, "data": []}));

        let docs = client.employee().documents("  ").await.unwrap();

        assert!(docs.is_empty());
        assert_eq!(transport.last_request().path, DOCUMENTS);
    }

    #[tokio::test]
    async fn test_update_and_delete_asset_paths() {
        let (client, transport) = client();
        transport.respond_json(json!({})).respond_json(json!({}));
        let draft = AssetDraft {
            kind: "House".into(),
            valuation: 10.0,
            owner: "john_doe".into(),
        };

        client.employee().update_asset(4, &draft).await.unwrap();
        client.employee().delete_asset(4).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].path, format!("{ASSETS}/4"));
        assert_eq!(requests[1].method, Method::DELETE);
        assert!(requests[1].body.is_none());
    }

    #[tokio::test]
    async fn test_environment_delete_sends_year_body() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 200}));

        client.employee().delete_environmental(2021).await.unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::DELETE);
        assert_eq!(sent.body, Some(json!({"Year": 2021})));
    }

    #[tokio::test]
    async fn test_enrollment_filters_become_query() {
        let (client, transport) = client();
        transport.respond_json(json!([]));

        client
            .employee()
            .enrollments("Health", Some(EnrollmentStatus::Pending))
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().query,
            vec![
                ("scheme_name".to_string(), "Health".to_string()),
                ("status".to_string(), "PENDING".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_financial_query_skips_blank_year() {
        let (client, transport) = client();
        transport.respond_json(json!([]));

        client.employee().financial_data("", "john_doe").await.unwrap();

        assert_eq!(
            transport.last_request().query,
            vec![("user_name".to_string(), "john_doe".to_string())]
        );
    }

    #[tokio::test]
    async fn test_profile_refreshes_session_role() {
        let (client, transport) = client();
        client.session().set_role("ASSET");
        transport.respond_json(json!({"statusCode": 200, "data": {
            "Name": "Ravi", "Role": "DOCUMENT"
        }}));

        let profile = client.employee().profile().await.unwrap();

        assert_eq!(profile.role, "DOCUMENT");
        assert_eq!(client.session().identity().role, "DOCUMENT");
    }
}
