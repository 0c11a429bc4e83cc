//! Authentication endpoints

use super::{ApiClient, error::ClientError};
use crate::types::{
    LoginResponse, MessageResponse, ProfileResponse, RegisterRequest, TwoFactorLoginRequest,
    ValidateSessionRequest,
};
use rankboard_core::{AuthConfig, Credentials};
use reqwest::Method;

impl ApiClient {
    /// Exchange username and password for a session, or a 2FA challenge
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/login")
            .json(credentials);
        self.execute(request).await
    }

    /// Complete a login that required a second factor
    pub async fn verify_2fa_login(
        &self,
        username: &str,
        code: &str,
    ) -> Result<LoginResponse, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/2fa/login/verify")
            .json(&TwoFactorLoginRequest {
                username: username.to_string(),
                code: code.to_string(),
            });
        self.execute(request).await
    }

    /// Tell the backend a session is over
    pub async fn logout(&self, session_id: &str) -> Result<(), ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/logout")
            .header(AuthConfig::SESSION_HEADER, session_id);
        self.execute_empty(request).await
    }

    /// Check that a session identifier is still valid; 401 when it is not
    pub async fn validate_session(&self, session_id: &str) -> Result<(), ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/validate-session")
            .json(&ValidateSessionRequest {
                session_id: session_id.to_string(),
            });
        self.execute_empty(request).await
    }

    /// Create an account
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/register")
            .json(request);
        self.execute(request).await
    }

    /// Profile of the signed-in user (requires a bearer token)
    pub async fn profile(&self) -> Result<ProfileResponse, ClientError> {
        let request = self.request(Method::GET, "/api/profile");
        self.execute(request).await
    }
}
