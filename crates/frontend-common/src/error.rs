use rankboard_http::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] rankboard_core::Error),

    #[error("Login response did not contain a complete session")]
    IncompleteSession,
}

impl SessionError {
    /// Message suitable for showing next to a form
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(error) => error.user_message(),
            Self::Core(_) => "Could not save your session in this browser.".to_string(),
            Self::IncompleteSession => "The server sent an incomplete login response.".to_string(),
        }
    }
}
