//! # Portal client
//!
//! [`PortalClient`] is the one configured HTTP client of the application. It
//! owns a [`Transport`] and a [`SessionStore`] handle. The bearer token is read
//! from the session **on every request**, so a login or logout takes effect on
//! the very next call without rebuilding the client.
//!
//! Endpoint methods live next to their models (`crate::endpoints`); this file
//! only holds the generic verbs.

use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use store::PortalConfig;

use crate::envelope::decode_response;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// REST client bound to a session.
#[derive(Clone, Debug)]
pub struct PortalClient<T = HttpTransport> {
    transport: T,
    session: SessionStore,
}

/// The production client.
pub type Portal = PortalClient<HttpTransport>;

impl Portal {
    /// Build the production client from configuration.
    pub fn connect(config: &PortalConfig, session: SessionStore) -> ApiResult<Self> {
        let transport = HttpTransport::new(config)?;
        tracing::info!("Portal client targeting {}", transport.base_url());
        Ok(Self::new(transport, session))
    }
}

impl<T: Transport> PortalClient<T> {
    pub fn new(transport: T, session: SessionStore) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send a request, attaching the live token, and decode the reply.
    pub async fn send<R: DeserializeOwned>(&self, mut request: ApiRequest) -> ApiResult<R> {
        request.bearer = self.session.token();
        let method = request.method.clone();
        let path = request.path.clone();

        let response = self.transport.send(request).await?;
        let result = decode_response(response.status, &response.body);
        if let Err(e) = &result {
            tracing::warn!("{} {} failed: {}", method, path, e);
        }
        result
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.send(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn get_with<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<R> {
        let request = query
            .iter()
            .fold(ApiRequest::new(Method::GET, path), |request, (key, value)| {
                request.query(key, value)
            });
        self.send(request).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.mutate(ApiRequest::new(Method::POST, path).body(to_json(body)?))
            .await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.mutate(ApiRequest::new(Method::PUT, path).body(to_json(body)?))
            .await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.mutate(ApiRequest::new(Method::DELETE, path)).await
    }

    /// DELETE carrying a JSON body, as some backend routes expect.
    pub async fn delete_with<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.mutate(ApiRequest::new(Method::DELETE, path).body(to_json(body)?))
            .await
    }

    /// Send a mutation, ignoring whatever payload comes back.
    pub async fn mutate(&self, request: ApiRequest) -> ApiResult<()> {
        let _: IgnoredAny = self.send(request).await?;
        Ok(())
    }
}

fn to_json<B: Serialize>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Percent-encode one path segment.
pub(crate) fn segment(raw: &str) -> String {
    urlencoding::encode(raw.trim()).into_owned()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::transport::mock::MockTransport;

    /// A client over a recording transport and an in-memory session.
    pub fn client() -> (PortalClient<MockTransport>, MockTransport) {
        let transport = MockTransport::new();
        let client = PortalClient::new(transport.clone(), SessionStore::in_memory());
        (client, transport)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::testing::client;
    use super::*;
    use crate::transport::RawResponse;

    #[tokio::test]
    async fn test_token_read_per_request() {
        let (client, transport) = client();
        transport.respond_json(json!([])).respond_json(json!([]));

        let _: Vec<Value> = client.get("/citizen/assets").await.unwrap();
        assert!(transport.last_request().authorization().is_none());

        client.session().set_token(Some("later".into()));
        let _: Vec<Value> = client.get("/citizen/assets").await.unwrap();
        assert_eq!(
            transport.last_request().authorization().as_deref(),
            Some("Bearer later")
        );
    }

    #[tokio::test]
    async fn test_mutation_ignores_payload() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 201, "message": "created", "data": {"Issue_id": 9}}));

        client
            .post("/citizen/issues", &json!({"description": "x"}))
            .await
            .unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.body, Some(json!({"description": "x"})));
    }

    #[tokio::test]
    async fn test_server_error_surfaces() {
        let (client, transport) = client();
        transport.respond(RawResponse::new(403, r#"{"message":"forbidden"}"#));

        let err = client.get::<Vec<Value>>("/admin/users").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 403, .. }));
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("john doe"), "john%20doe");
        assert_eq!(segment(" a/b "), "a%2Fb");
    }
}
