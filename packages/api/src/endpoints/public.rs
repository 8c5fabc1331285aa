use crate::client::PortalClient;
use crate::error::ApiResult;
use crate::models::{CensusRecord, EnvironmentalRecord};
use crate::transport::Transport;

/// Read-only summaries any visitor can see.
pub struct PublicApi<'a, T> {
    pub(super) client: &'a PortalClient<T>,
}

impl<T: Transport> PublicApi<'_, T> {
    pub async fn census(&self) -> ApiResult<Vec<CensusRecord>> {
        self.client.get("/user/census").await
    }

    pub async fn environmental_data(&self) -> ApiResult<Vec<EnvironmentalRecord>> {
        self.client.get("/user/environmental-data").await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::testing::client;
    use crate::error::ApiError;

    #[tokio::test]
    async fn test_census_accepts_bare_array() {
        let (client, transport) = client();
        transport.respond_json(json!([
            {"year": 2010, "total": 65, "male": 33, "female": 32, "literacy": 70}
        ]));

        let census = client.public().census().await.unwrap();
        assert_eq!(census[0].total, 65);
    }

    #[tokio::test]
    async fn test_object_where_list_expected_is_malformed() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 200, "data": {"year": 2010}}));

        let err = client.public().environmental_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }
}
