//! Session lifecycle operations
//!
//! The controller performs the network and storage side effects of each session
//! operation and reports the result as a [`SessionEvent`]. It never returns an
//! error: failures become `Unauthenticated` or `Expired` events carrying a
//! display message.
//! Callers fold the events into a [`keyhold_core::SessionState`].

use crate::{ApiClient, ClientError};
pub use crate::client::error::SESSION_EXPIRED_MESSAGE;
use keyhold_core::{SessionEvent, TokenKind, TokenStore, User};
use std::sync::Arc;

/// Message shown when a login fails without a server-provided reason
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

#[derive(Debug, Clone)]
pub struct SessionController {
    client: ApiClient,
}

impl SessionController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn store(&self) -> &Arc<dyn TokenStore> {
        self.client.store()
    }

    /// Resolve the stored tokens into a session at startup
    ///
    /// A failed profile fetch gets one explicit refresh attempt before the
    /// tokens are discarded.
    pub async fn check(&self) -> SessionEvent {
        if self.store().token_pair().is_none() {
            debug!("no stored token pair, starting signed out");
            self.store().clear();
            return SessionEvent::Unauthenticated { error: None };
        }

        match self.client.fetch_profile().await {
            Ok(user) => authenticated(user),
            Err(err) => {
                warn!(error = %err, "stored access token rejected, attempting refresh");
                match self.refresh_session().await {
                    Ok(user) => authenticated(user),
                    Err(err) => {
                        warn!(error = %err, "could not restore session");
                        self.store().clear();
                        if err.requires_login() {
                            SessionEvent::Expired {
                                error: Some(err.user_message()),
                            }
                        } else {
                            SessionEvent::Unauthenticated { error: None }
                        }
                    }
                }
            }
        }
    }

    /// Sign in with a username and password
    pub async fn login(&self, username: &str, password: &str) -> SessionEvent {
        match self.try_login(username, password).await {
            Ok(user) => authenticated(user),
            Err(err) => {
                warn!(error = %err, "login failed");
                self.store().clear();
                SessionEvent::Unauthenticated {
                    error: Some(err.detail().unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string())),
                }
            }
        }
    }

    /// Forget the stored tokens and the current user
    pub fn logout(&self) -> SessionEvent {
        self.store().clear();
        info!("signed out");
        SessionEvent::LoggedOut
    }

    /// Obtain a new access token and reload the profile
    pub async fn refresh(&self) -> SessionEvent {
        match self.refresh_session().await {
            Ok(user) => authenticated(user),
            Err(err) => self.session_lost(&err),
        }
    }

    /// Reload the profile of the signed-in user
    pub async fn fetch_profile(&self) -> SessionEvent {
        match self.client.fetch_profile().await {
            Ok(user) => authenticated(user),
            Err(err) => self.session_lost(&err),
        }
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<User, ClientError> {
        let pair = self.client.login(username, password).await?;
        self.store()
            .set_pair(&pair.access_token, &pair.refresh_token)?;
        self.client.fetch_profile().await
    }

    async fn refresh_session(&self) -> Result<User, ClientError> {
        if self.store().get(TokenKind::Refresh).is_none() {
            return Err(ClientError::SessionExpired);
        }
        self.client.refresh_access_token().await?;
        self.client.fetch_profile().await
    }

    fn session_lost(&self, err: &ClientError) -> SessionEvent {
        warn!(error = %err, "session lost, clearing tokens");
        self.store().clear();
        let error = Some(err.user_message());
        if err.requires_login() {
            SessionEvent::Expired { error }
        } else {
            SessionEvent::Unauthenticated { error }
        }
    }
}

fn authenticated(user: User) -> SessionEvent {
    info!(user_id = user.id, username = %user.username, "session authenticated");
    SessionEvent::Authenticated(user)
}
