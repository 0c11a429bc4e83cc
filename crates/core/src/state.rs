//! Session state and its reducer
//!
//! The state is a tagged variant so a token or session identifier can never
//! outlive the user it belongs to. Transitions go through [`SessionState::reduce`],
//! a pure function the controller and the UI share.

use crate::types::{Session, User};

/// Current authentication state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

/// Transitions accepted by [`SessionState::reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SignedIn(Session),
    SignedOut,
}

impl SessionState {
    #[must_use]
    pub fn reduce(self, action: SessionAction) -> Self {
        match action {
            SessionAction::SignedIn(session) => Self::Authenticated(session),
            SessionAction::SignedOut => Self::Anonymous,
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|session| &session.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|session| session.token.as_str())
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session().map(|session| session.session_id.as_str())
    }
}
