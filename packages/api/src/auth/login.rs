//! Sign-in, sign-up submission and sign-out.
//!
//! Login posts the credentials, reads the identity out of the response (the
//! backend has used several spellings for each field) and writes it into the
//! session in one step. Logout is purely local: the session is cleared and the
//! next request goes out without a token.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::registration::{FieldErrors, RegistrationPayload};
use crate::client::PortalClient;
use crate::error::{ApiError, ApiResult};
use crate::roles::UserType;
use crate::session::Identity;
use crate::transport::{ApiRequest, Transport};

/// Body for `POST /user/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Credentials {
    #[serde(rename = "User_name")]
    pub user_name: String,
    #[serde(rename = "Password")]
    pub password: String,
}

impl Credentials {
    pub fn new(user_name: &str, password: &str) -> Self {
        Self {
            user_name: user_name.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.user_name.is_empty() {
            errors.insert("User_name", "Username is required.".to_string());
        }
        if self.password.is_empty() {
            errors.insert("Password", "Password is required.".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LoginReply {
    #[serde(alias = "User_type", alias = "userType", default)]
    user_type: Option<String>,
    #[serde(rename = "Role", alias = "role", default)]
    role: Option<String>,
    #[serde(alias = "User_name", alias = "userName", default)]
    user_name: Option<String>,
    #[serde(alias = "User_id", alias = "userId", alias = "id", default)]
    user_id: Option<i64>,
    #[serde(
        alias = "access_token",
        alias = "jwt",
        alias = "jwtToken",
        default
    )]
    token: Option<String>,
}

impl LoginReply {
    fn into_identity(self, credentials: &Credentials) -> ApiResult<Identity> {
        let raw_type = self.user_type.unwrap_or_default();
        let user_type = raw_type
            .parse::<UserType>()
            .map_err(|_| ApiError::Malformed(format!("unknown user type {raw_type:?}")))?;
        Ok(Identity {
            user_type: Some(user_type),
            role: self.role.unwrap_or_default(),
            user_name: self
                .user_name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| credentials.user_name.clone()),
            user_id: self.user_id.unwrap_or(0),
            token: self.token.filter(|t| !t.is_empty()),
        })
    }
}

impl<T: Transport> PortalClient<T> {
    /// Authenticate and establish the session. Returns the new identity.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Identity> {
        let reply: LoginReply = self.send_login(credentials).await?;
        let identity = reply.into_identity(credentials)?;
        if identity.token.is_none() {
            tracing::warn!("Login for {} returned no token", identity.user_name);
        }
        self.session().establish(identity.clone());
        Ok(identity)
    }

    async fn send_login(&self, credentials: &Credentials) -> ApiResult<LoginReply> {
        let body = serde_json::to_value(credentials)
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        self.send(ApiRequest::new(Method::POST, "/user/login").body(body))
            .await
    }

    /// Create an account. Registration does not log the user in.
    pub async fn register(&self, payload: &RegistrationPayload) -> ApiResult<()> {
        tracing::info!("Registering {} as {}", payload.user_name, payload.user_type);
        self.post("/user/register", payload).await
    }

    /// Forget the session locally. The backend is not contacted.
    pub fn logout(&self) {
        self.session().clear();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::auth::registration::{Registration, RegistrationForm, Step};
    use crate::client::testing::client;
    use crate::roles::Role;
    use crate::transport::RawResponse;

    use super::*;

    #[tokio::test]
    async fn test_login_then_logout_controls_header() {
        let (client, transport) = client();
        transport
            .respond_json(json!({"user_type": "CITIZEN", "token": "t-123", "User_id": 42}))
            .respond_json(json!([]))
            .respond_json(json!([]));

        let identity = client
            .login(&Credentials::new("john_doe", "Passw0rd!"))
            .await
            .unwrap();
        assert_eq!(identity.user_name, "john_doe");
        assert_eq!(identity.user_id, 42);

        let _: Vec<Value> = client.get("/citizen/assets").await.unwrap();
        assert_eq!(
            transport.last_request().authorization().as_deref(),
            Some("Bearer t-123")
        );

        client.logout();
        let _: Vec<Value> = client.get("/citizen/assets").await.unwrap();
        assert!(transport.last_request().authorization().is_none());
        assert!(!client.session().identity().is_logged_in());
    }

    #[tokio::test]
    async fn test_login_request_has_no_token_and_backend_names() {
        let (client, transport) = client();
        transport.respond_json(json!({"statusCode": 200, "data": {
            "userType": "PANCHAYAT_EMPLOYEE", "Role": "ASSET", "jwt": "abc"
        }}));

        let identity = client
            .login(&Credentials::new(" emp_asset ", "Passw0rd!"))
            .await
            .unwrap();

        let sent = transport.last_request();
        assert!(sent.bearer.is_none());
        assert_eq!(
            sent.body,
            Some(json!({"User_name": "emp_asset", "Password": "Passw0rd!"}))
        );
        assert_eq!(identity.role(), Some(Role::Asset));
        assert_eq!(client.session().token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_empty() {
        let (client, transport) = client();
        transport.respond(RawResponse::new(401, r#"{"message":"Invalid credentials!"}"#));

        let err = client
            .login(&Credentials::new("john_doe", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 401, .. }));
        assert_eq!(client.session().identity(), Identity::default());
    }

    #[tokio::test]
    async fn test_login_without_user_type_is_malformed() {
        let (client, transport) = client();
        transport.respond_json(json!({"message": "ok"}));

        let err = client
            .login(&Credentials::new("john_doe", "Passw0rd!"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        assert!(!client.session().identity().is_logged_in());
    }

    #[test]
    fn test_credentials_required() {
        let errors = Credentials::new("  ", "").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[tokio::test]
    async fn test_registration_failure_stays_on_step_two() {
        let (client, transport) = client();
        transport.respond(RawResponse::new(
            400,
            r#"{"detail":"Username already exists"}"#,
        ));

        let mut registration = Registration::new();
        registration.form = RegistrationForm {
            user_name: "john_doe".into(),
            password: "Passw0rd!".into(),
            name: "John".into(),
            email: "john@example.com".into(),
            contact_number: "9876543210".into(),
            user_type: Some(UserType::GovernmentAgency),
            role: Some(Role::WelfareScheme),
            ..RegistrationForm::default()
        };
        assert!(registration.next());
        let payload = registration.payload().unwrap();

        let err = client.register(&payload).await.unwrap_err();

        assert_eq!(err.user_message(), "Username already exists");
        assert_eq!(registration.step(), Step::TypeSpecificInfo);
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(transport.last_request().path, "/user/register");
    }
}
