//! Authentication API client methods

use super::{ApiClient, ApiRequest, ClientError};
use crate::types::{RefreshResponse, RegisterRequest, RegisterResponse, TokenResponse};
use keyhold_core::{TokenPair, User};

impl ApiClient {
    /// Exchange credentials for a token pair
    ///
    /// The backend expects an OAuth2 password form, not JSON.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ClientError> {
        let request = ApiRequest::post("/token").form([("username", username), ("password", password)]);
        let response: TokenResponse = self.execute_public(request).await?;
        Ok(TokenPair::new(response.access_token, response.refresh_token))
    }

    /// Create an account
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegisterResponse, ClientError> {
        let request = ApiRequest::post("/register").json(&RegisterRequest { username, password })?;
        self.execute_public(request).await
    }

    /// Request a new access token for `refresh_token`
    ///
    /// This is the raw endpoint call; it does not touch the token store.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<RefreshResponse, ClientError> {
        let request = ApiRequest::post("/token/refresh").query("refresh_token", refresh_token);
        self.execute_public(request).await
    }

    /// Get the signed-in user (requires authentication)
    pub async fn fetch_profile(&self) -> Result<User, ClientError> {
        self.execute(ApiRequest::get("/users/me")).await
    }
}
