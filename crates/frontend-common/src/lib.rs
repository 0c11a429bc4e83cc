//! Session management shared by the Rankboard frontends
//!
//! [`SessionController`] owns the session state machine: it signs users in
//! and out, persists the session, runs the liveness poll and reacts to
//! expiry. The UI reaches it through the [`Navigator`], [`Notifier`] and
//! [`SessionObserver`] seams.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod client;
pub mod error;
pub mod platform;
pub mod poller;
pub mod session;

pub use client::create_api_client;
pub use error::SessionError;
pub use platform::{Navigator, Notifier, SessionObserver};
pub use poller::PollHandle;
pub use session::{LoginOutcome, SessionController};
