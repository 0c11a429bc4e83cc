//! Core domain types for the Rankboard frontend
//!
//! Everything in this crate is free of I/O: session state and its reducer,
//! the persisted storage layout, the route table with its guard, and the
//! notification model. The HTTP client and the session controller build on
//! top of these types.

pub mod config;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod notify;
pub mod routes;
pub mod state;
pub mod storage;
pub mod types;

pub use config::{ApiConfig, ApiEnvironment, AuthConfig, SessionConfig};
pub use error::{Error, Result};
pub use notify::{ExpiryNotice, Notification, NotificationLevel};
pub use routes::{Access, GuardDecision, Route, guard};
pub use state::{SessionAction, SessionState};
pub use storage::{KeyValueStore, MemoryStore};
pub use types::{Credentials, Session, User};
