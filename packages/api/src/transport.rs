//! # Transport seam
//!
//! [`PortalClient`](crate::PortalClient) never touches the network directly. It
//! builds an [`ApiRequest`] (method, path, query, JSON body, bearer token) and
//! hands it to a [`Transport`], which returns the raw status and body. Decoding
//! happens afterwards, in one place ([`crate::envelope`]).
//!
//! [`HttpTransport`] is the production implementation on `reqwest`. It works in
//! the browser (fetch with `credentials: include`) and natively (with the
//! configured timeout).

use std::future::Future;

use reqwest::{header, Client, Method};
use store::PortalConfig;

use crate::error::ApiResult;

/// A fully described request, token included.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Bearer token to send, if any.
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    /// Add a query parameter. Empty values are skipped.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.query.push((key.to_string(), value));
        }
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The `Authorization` header value this request carries.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Undecoded response.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: serde_json::Value) -> Self {
        Self::new(200, body.to_string())
    }
}

/// Async trait for sending requests to the backend.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = ApiResult<RawResponse>>;
}

/// `reqwest`-backed transport with a fixed base URL and JSON content type.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &PortalConfig) -> ApiResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        #[allow(unused_mut)]
        let mut builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        if config.api.request_timeout_secs > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(
                config.api.request_timeout_secs,
            ));
        }

        Ok(Self {
            base_url: config.base_url().to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(value) = request.authorization() {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording transport for tests.

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Replays queued responses in order and records every request.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        responses: Arc<Mutex<VecDeque<RawResponse>>>,
        requests: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, response: RawResponse) -> &Self {
            self.responses.lock().unwrap().push_back(response);
            self
        }

        pub fn respond_json(&self, body: serde_json::Value) -> &Self {
            self.respond(RawResponse::ok(body))
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn last_request(&self) -> ApiRequest {
            self.requests().last().cloned().expect("no request sent")
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
            self.requests.lock().unwrap().push(request);
            let response = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no response queued");
            Ok(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_empty_values() {
        let request = ApiRequest::new(Method::GET, "/panchayat-employee/environmental-data")
            .query("year", "")
            .query("location", "Village A");
        assert_eq!(
            request.query,
            vec![("location".to_string(), "Village A".to_string())]
        );
    }

    #[test]
    fn test_authorization_header_value() {
        let mut request = ApiRequest::new(Method::GET, "/citizen/assets");
        assert!(request.authorization().is_none());
        request.bearer = Some("abc".into());
        assert_eq!(request.authorization().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_http_transport_trims_base_url() {
        let config = PortalConfig::default().with_base_url("http://localhost:8000/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8000");
    }
}
