//! Session state and its transitions
//!
//! [`SessionState`] is a plain value. Every change goes through
//! [`SessionState::apply`], which maps the current state and a [`SessionEvent`]
//! to the next state without touching storage or the network. Side effects live
//! in the session controller that produces the events.

use crate::User;

/// Coarse lifecycle position of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Stored tokens have not been checked yet
    Initializing,
    Unauthenticated,
    Authenticated,
}

/// In-memory authentication state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    /// Message from the most recent failed operation
    pub error: Option<String>,
    checked: bool,
    expired: bool,
}

/// Outcome of a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An operation started and has not resolved yet
    Pending,
    /// A profile fetch succeeded
    Authenticated(User),
    /// The session could not be established or was lost
    Unauthenticated { error: Option<String> },
    /// Stored credentials stopped working; the user has to sign in again
    Expired { error: Option<String> },
    /// The user signed out
    LoggedOut,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true, // Start loading until the stored tokens are checked
            error: None,
            checked: false,
            expired: false,
        }
    }
}

impl SessionState {
    /// The state after a logout: no user, nothing pending
    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: false,
            error: None,
            checked: true,
            expired: false,
        }
    }

    /// Whether the last transition ended a session that needs a fresh login
    pub const fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.checked {
            SessionPhase::Initializing
        } else if self.is_authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }

    /// Compute the state that follows `event`
    #[must_use]
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::Pending => Self {
                loading: true,
                error: None,
                ..self
            },
            SessionEvent::Authenticated(user) => Self {
                user: Some(user),
                is_authenticated: true,
                loading: false,
                error: None,
                checked: true,
                expired: false,
            },
            SessionEvent::Unauthenticated { error } => Self {
                error,
                ..Self::signed_out()
            },
            SessionEvent::Expired { error } => Self {
                error,
                expired: true,
                ..Self::signed_out()
            },
            SessionEvent::LoggedOut => Self::signed_out(),
        }
    }
}
