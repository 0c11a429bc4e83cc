//! Session controller
//!
//! Owns the [`SessionState`] and drives every transition:
//!
//! ```text
//! Anonymous --(login / 2FA / restore)--> Authenticated + polling
//! Authenticated --(logout / liveness failure)--> Anonymous
//! ```
//!
//! Storage is updated before the in-memory state so a failed write never
//! leaves a half-committed session.

use crate::error::SessionError;
use crate::platform::{Navigator, Notifier, SessionObserver};
use crate::poller::{PollHandle, spawn_poller};
use rankboard_core::storage::{clear_persisted_session, load_persisted_session, persist_session};
use rankboard_core::{
    Credentials, KeyValueStore, Notification, Route, SessionAction, SessionConfig, SessionState,
    User,
};
use rankboard_http::ApiClient;
use rankboard_http::types::{LoginResponse, RegisterRequest};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::{debug, info, warn};

/// Result of a successful login call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session committed, poller running, navigated home
    SignedIn,
    /// Credentials accepted but a second factor is needed; nothing committed
    TwoFactorRequired,
}

struct Inner {
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    config: SessionConfig,
    state: Mutex<SessionState>,
    poller: Mutex<Option<PollHandle>>,
    observer: Mutex<Option<Arc<dyn SessionObserver>>>,
}

/// Cheap to clone; all clones share one session
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Inner>,
}

impl SessionController {
    pub fn new(
        api: ApiClient,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        config: SessionConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                store,
                navigator,
                notifier,
                config,
                state: Mutex::new(SessionState::Anonymous),
                poller: Mutex::new(None),
                observer: Mutex::new(None),
            }),
        }
    }

    /// The API client the controller talks through
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state().user().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.state().token().map(str::to_string)
    }

    pub fn session_id(&self) -> Option<String> {
        self.state().session_id().map(str::to_string)
    }

    /// Whether the liveness poller is running
    pub fn is_polling(&self) -> bool {
        self.inner
            .poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Register the observer told about state changes, replacing any previous one
    pub fn set_observer(&self, observer: Arc<dyn SessionObserver>) {
        *self
            .inner
            .observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(observer);
    }

    pub fn clear_observer(&self) {
        self.inner
            .observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Pick up a session persisted by an earlier page load.
    ///
    /// Incomplete or corrupt storage is wiped. Returns whether a session was
    /// restored.
    pub fn restore(&self) -> bool {
        match load_persisted_session(self.inner.store.as_ref()) {
            Some(session) => {
                info!(user = %session.user.username, "Restored persisted session");
                self.apply(SessionAction::SignedIn(session));
                self.start_session_check();
                true
            }
            None => false,
        }
    }

    /// Sign in with username and password.
    ///
    /// Errors are returned to the caller. A rejected login leaves the state
    /// untouched; a session that cannot be stored falls back to the previous
    /// one, or signs out if that cannot be stored either.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, SessionError> {
        let response = self.inner.api.login(credentials).await?;
        self.complete_sign_in(response)
    }

    /// Finish a login that asked for a second factor
    pub async fn verify_2fa_login(
        &self,
        username: &str,
        code: &str,
    ) -> Result<LoginOutcome, SessionError> {
        let response = self.inner.api.verify_2fa_login(username, code).await?;
        self.complete_sign_in(response)
    }

    fn complete_sign_in(&self, response: LoginResponse) -> Result<LoginOutcome, SessionError> {
        if response.requires_2fa {
            debug!("Login requires a second factor");
            return Ok(LoginOutcome::TwoFactorRequired);
        }

        let session = response
            .into_session()
            .ok_or(SessionError::IncompleteSession)?;
        if let Err(error) = persist_session(self.inner.store.as_ref(), &session) {
            // The failed write wiped storage; memory must follow
            self.recover_failed_persist();
            return Err(error.into());
        }

        info!(user = %session.user.username, "Signed in");
        self.apply(SessionAction::SignedIn(session));
        self.start_session_check();
        self.inner.navigator.navigate(Route::HOME);

        Ok(LoginOutcome::SignedIn)
    }

    /// Sign out. The backend is told on a best-effort basis; local state is
    /// always cleared and the app always lands on the login page.
    pub async fn logout(&self) {
        if let Some(session_id) = self.session_id() {
            if let Err(error) = self.inner.api.logout(&session_id).await {
                debug!(%error, "Logout notification failed, clearing local session anyway");
            }
        }

        self.clear_session();
        self.inner.navigator.navigate(Route::Login);
    }

    /// Ask the backend whether the current session is still valid.
    ///
    /// Does nothing while signed out. Any failure ends the session; only
    /// failures other than 401 are logged as unexpected.
    pub async fn check_session(&self) {
        let Some(session_id) = self.session_id() else {
            return;
        };

        let Err(error) = self.inner.api.validate_session(&session_id).await else {
            return;
        };

        if !error.is_unauthorized() {
            warn!(%error, "Unexpected session validation failure");
        }

        // Signed out or signed in again while the request was in flight
        if self.session_id().as_deref() != Some(session_id.as_str()) {
            debug!("Session changed during validation, ignoring result");
            return;
        }

        self.handle_session_expired().await;
    }

    /// (Re)start the liveness poller. At most one poller ever runs.
    pub fn start_session_check(&self) {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let handle = spawn_poller(self.inner.config.poll_interval, move || {
            let weak = weak.clone();
            async move {
                if let Some(inner) = weak.upgrade() {
                    SessionController { inner }.check_session().await;
                }
            }
        });

        // Replacing the slot drops, and so cancels, the previous poller
        let previous = self
            .inner
            .poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        drop(previous);
    }

    /// Stop the liveness poller if it is running
    pub fn stop_session_check(&self) {
        let previous = self
            .inner
            .poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = previous {
            handle.cancel();
        }
    }

    /// Log out and tell the user their session expired
    pub async fn handle_session_expired(&self) {
        info!("Session expired");
        self.logout().await;
        self.inner
            .notifier
            .notify(self.inner.config.expiry_notice.notification());
    }

    /// Create an account, then send the user to the login page
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), SessionError> {
        let response = self.inner.api.register(request).await?;

        let message = if response.message.is_empty() {
            "Account created. Please log in.".to_string()
        } else {
            response.message
        };
        self.inner.notifier.notify(Notification::success(message));
        self.inner.navigator.navigate(Route::Login);

        Ok(())
    }

    /// Write the session we still hold back to storage, or drop it when that
    /// fails too
    fn recover_failed_persist(&self) {
        let Some(previous) = self.state().session().cloned() else {
            return;
        };

        match persist_session(self.inner.store.as_ref(), &previous) {
            Ok(()) => debug!("Kept the existing session after a failed sign-in"),
            Err(error) => {
                warn!(%error, "Could not restore the existing session, signing out");
                self.clear_session();
            }
        }
    }

    fn clear_session(&self) {
        self.stop_session_check();
        clear_persisted_session(self.inner.store.as_ref());
        if self.is_authenticated() {
            info!("Signed out");
        }
        self.apply(SessionAction::SignedOut);
    }

    fn apply(&self, action: SessionAction) {
        let snapshot = {
            let mut state = self
                .inner
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *state = std::mem::take(&mut *state).reduce(action);
            state.clone()
        };

        let observer = self
            .inner
            .observer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(observer) = observer {
            observer.session_changed(&snapshot);
        }
    }
}
