//! Request and response bodies of the auth API

use rankboard_core::{Session, User};
use serde::{Deserialize, Deserializer, Serialize};

/// Response of `/api/auth/login` and `/api/auth/2fa/login/verify`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default)]
    pub requires_2fa: bool,
    #[serde(
        rename = "sessionID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub session_id: Option<String>,
}

impl LoginResponse {
    /// The session carried by the response, if all of its parts are present
    pub fn into_session(self) -> Option<Session> {
        match (self.user, self.token, self.session_id) {
            (Some(user), Some(token), Some(session_id))
                if !token.is_empty() && !session_id.is_empty() =>
            {
                Some(Session {
                    user,
                    token,
                    session_id,
                })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorLoginRequest {
    pub username: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateSessionRequest {
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `GET /api/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub two_factor_enabled: bool,
}

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: i64,
    pub username: String,
    pub class_name: String,
    pub reward_score: i64,
}

/// Filters for `GET /api/rankings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingsQuery {
    pub page: u32,
    pub limit: u32,
    /// Username substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Class name; `None` means every class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl RankingsQuery {
    pub const DEFAULT_LIMIT: u32 = 10;

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

impl Default for RankingsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
            search: None,
            class: None,
        }
    }
}

/// A page of the overall leaderboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rankings: Vec<RankingEntry>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl RankingPage {
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// `GET /api/rankings/:class`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRankings {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rankings: Vec<RankingEntry>,
    #[serde(default)]
    pub total: i64,
}

/// A playable class from `GET /api/classes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub id: i64,
    #[serde(default)]
    pub race_id: i64,
    #[serde(default)]
    pub race_name: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub combat_type: String,
    #[serde(default)]
    pub damage: i32,
    #[serde(default)]
    pub defense: i32,
    #[serde(default)]
    pub difficulty: i32,
    #[serde(default)]
    pub speed: i32,
}

/// The backend encodes empty lists as `null`
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
