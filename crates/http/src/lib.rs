//! Rankboard HTTP client
//!
//! A single [`ApiClient`] talks to the auth API. Every request picks up the
//! current bearer token from a [`TokenSource`] at send time, so signing in
//! or out never requires rebuilding the client.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, StoredToken, TokenSource, error::ClientError};
