//! Session controller behaviour against a stub backend

use mockall::mock;
use mockall::predicate::eq;
use rankboard_core::storage::persist_session;
use rankboard_core::{
    AuthConfig, Credentials, ExpiryNotice, KeyValueStore, MemoryStore, Notification,
    NotificationLevel, Route, Session, SessionConfig, SessionState, User,
};
use rankboard_frontend_common::{
    LoginOutcome, Navigator, Notifier, SessionController, SessionError, SessionObserver,
};
use rankboard_http::types::RegisterRequest;
use rankboard_http::{ApiClient, ClientError, StoredToken};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mock! {
    pub Nav {}

    impl Navigator for Nav {
        fn navigate(&self, route: Route);
    }
}

mock! {
    pub Toasts {}

    impl Notifier for Toasts {
        fn notify(&self, notification: Notification);
    }
}

#[derive(Default)]
struct RecordingObserver {
    states: Mutex<Vec<bool>>,
}

impl SessionObserver for RecordingObserver {
    fn session_changed(&self, state: &SessionState) {
        self.states.lock().unwrap().push(state.is_authenticated());
    }
}

/// Memory store whose writes can be made to fail
struct FlakyStore {
    inner: MemoryStore,
    reject: Mutex<Option<Box<dyn Fn(&str, &str) -> bool + Send>>>,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            reject: Mutex::new(None),
        }
    }

    fn reject_writes(&self, rule: impl Fn(&str, &str) -> bool + Send + 'static) {
        *self.reject.lock().unwrap() = Some(Box::new(rule));
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> rankboard_core::Result<()> {
        if let Some(rule) = self.reject.lock().unwrap().as_ref() {
            if rule(key, value) {
                return Err(rankboard_core::Error::Storage("quota exceeded".to_string()));
            }
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

fn stored(store: &dyn KeyValueStore) -> (Option<String>, Option<String>, Option<String>) {
    (
        store.get(AuthConfig::USER_KEY),
        store.get(AuthConfig::TOKEN_KEY),
        store.get(AuthConfig::SESSION_ID_KEY),
    )
}

struct Harness {
    server: MockServer,
    store: Arc<MemoryStore>,
}

impl Harness {
    async fn start() -> Self {
        let _ = rankboard_core::logging::init_tracing("debug");
        Self {
            server: MockServer::start().await,
            store: Arc::new(MemoryStore::new()),
        }
    }

    fn controller(&self, navigator: MockNav, notifier: MockToasts) -> SessionController {
        self.controller_with(navigator, notifier, SessionConfig::default())
    }

    fn controller_with(
        &self,
        navigator: MockNav,
        notifier: MockToasts,
        config: SessionConfig,
    ) -> SessionController {
        self.controller_over(self.store.clone(), navigator, notifier, config)
    }

    fn controller_over(
        &self,
        store: Arc<dyn KeyValueStore>,
        navigator: MockNav,
        notifier: MockToasts,
        config: SessionConfig,
    ) -> SessionController {
        let api = ApiClient::builder()
            .base_url(self.server.uri())
            .token_source(Arc::new(StoredToken::new(store.clone())))
            .build()
            .unwrap();
        SessionController::new(
            api,
            store,
            Arc::new(navigator),
            Arc::new(notifier),
            config,
        )
    }

    fn persisted(&self) -> (Option<String>, Option<String>, Option<String>) {
        stored(self.store.as_ref())
    }
}

fn alice_session() -> Session {
    Session {
        user: User {
            id: 1,
            username: "alice".to_string(),
            email: String::new(),
            two_factor_enabled: None,
        },
        token: "t1".to_string(),
        session_id: "s1".to_string(),
    }
}

fn navigator_expecting(route: Route) -> MockNav {
    let mut navigator = MockNav::new();
    navigator
        .expect_navigate()
        .with(eq(route))
        .times(1)
        .return_const(());
    navigator
}

async fn mount_login_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "alice", "password": "x" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": { "id": 1, "username": "alice" },
            "sessionID": "s1"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_commits_session_and_navigates_home() {
    let harness = Harness::start().await;
    mount_login_success(&harness.server).await;

    let controller = harness.controller(navigator_expecting(Route::Rankings), MockToasts::new());
    let outcome = controller
        .login(&Credentials::new("alice", "x"))
        .await
        .unwrap();

    assert_eq!(outcome, LoginOutcome::SignedIn);
    assert_eq!(controller.current_user().map(|u| u.id), Some(1));
    assert_eq!(controller.token().as_deref(), Some("t1"));
    assert_eq!(controller.session_id().as_deref(), Some("s1"));
    assert!(controller.is_polling());

    let (user, token, session_id) = harness.persisted();
    let user: User = serde_json::from_str(&user.unwrap()).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(token.as_deref(), Some("t1"));
    assert_eq!(session_id.as_deref(), Some("s1"));
}

#[tokio::test]
async fn failed_login_leaves_state_unchanged() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&harness.server)
        .await;

    // No navigation or notification expectations: any call would panic
    let controller = harness.controller(MockNav::new(), MockToasts::new());
    let result = controller.login(&Credentials::new("alice", "nope")).await;

    match result {
        Err(SessionError::Client(ClientError::Unauthorized(message))) => {
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected authentication failure, got {other:?}"),
    }
    assert_eq!(controller.state(), SessionState::Anonymous);
    assert!(!controller.is_polling());
    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn failed_login_keeps_an_existing_session() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&harness.server)
        .await;

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let controller = harness.controller(MockNav::new(), MockToasts::new());
    assert!(controller.restore());

    let result = controller.login(&Credentials::new("bob", "x")).await;
    assert!(matches!(
        result,
        Err(SessionError::Client(ClientError::ServerError { status: 500, .. }))
    ));
    assert_eq!(controller.state(), SessionState::Authenticated(alice_session()));
    assert_eq!(harness.persisted().1.as_deref(), Some("t1"));
}

async fn mount_bob_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t2",
            "user": { "id": 2, "username": "bob" },
            "sessionID": "s2"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn unwritable_new_session_falls_back_to_the_stored_one() {
    let harness = Harness::start().await;
    mount_bob_login(&harness.server).await;

    let store = Arc::new(FlakyStore::new());
    persist_session(store.as_ref(), &alice_session()).unwrap();
    let controller = harness.controller_over(
        store.clone(),
        MockNav::new(),
        MockToasts::new(),
        SessionConfig::default(),
    );
    assert!(controller.restore());

    store.reject_writes(|key, value| key == AuthConfig::SESSION_ID_KEY && value == "s2");
    let result = controller.login(&Credentials::new("bob", "x")).await;

    assert!(matches!(result, Err(SessionError::Core(_))));
    assert_eq!(controller.state(), SessionState::Authenticated(alice_session()));
    assert!(controller.is_polling());
    let (user, token, session_id) = stored(store.as_ref());
    assert!(user.unwrap().contains("alice"));
    assert_eq!(token.as_deref(), Some("t1"));
    assert_eq!(session_id.as_deref(), Some("s1"));
}

#[tokio::test]
async fn unwritable_storage_signs_out_instead_of_diverging() {
    let harness = Harness::start().await;
    mount_bob_login(&harness.server).await;

    let store = Arc::new(FlakyStore::new());
    persist_session(store.as_ref(), &alice_session()).unwrap();
    let controller = harness.controller_over(
        store.clone(),
        MockNav::new(),
        MockToasts::new(),
        SessionConfig::default(),
    );
    assert!(controller.restore());

    store.reject_writes(|key, _| key == AuthConfig::SESSION_ID_KEY);
    let result = controller.login(&Credentials::new("bob", "x")).await;

    assert!(matches!(result, Err(SessionError::Core(_))));
    assert_eq!(controller.state(), SessionState::Anonymous);
    assert_eq!(controller.token(), None);
    assert!(!controller.is_polling());
    assert_eq!(stored(store.as_ref()), (None, None, None));
}

#[tokio::test]
async fn incomplete_login_response_commits_nothing() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": { "id": 1, "username": "alice" }
        })))
        .mount(&harness.server)
        .await;

    let controller = harness.controller(MockNav::new(), MockToasts::new());
    let result = controller.login(&Credentials::new("alice", "x")).await;

    assert!(matches!(result, Err(SessionError::IncompleteSession)));
    assert!(!controller.is_authenticated());
    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn two_factor_login_completes_after_verification() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "requires_2fa": true })))
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/2fa/login/verify"))
        .and(body_json(json!({ "username": "alice", "code": "123456" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t2",
            "user": { "id": 1, "username": "alice" },
            "sessionID": "s2"
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let controller = harness.controller(navigator_expecting(Route::Rankings), MockToasts::new());

    let outcome = controller
        .login(&Credentials::new("alice", "x"))
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::TwoFactorRequired);
    assert!(!controller.is_authenticated());
    assert!(!controller.is_polling());
    assert!(harness.store.is_empty());

    let outcome = controller.verify_2fa_login("alice", "123456").await.unwrap();
    assert_eq!(outcome, LoginOutcome::SignedIn);
    assert_eq!(controller.session_id().as_deref(), Some("s2"));
    assert!(controller.is_polling());
}

#[tokio::test]
async fn logout_notifies_backend_and_clears_everything() {
    let harness = Harness::start().await;
    mount_login_success(&harness.server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("x-session-id", "s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut navigator = MockNav::new();
    navigator
        .expect_navigate()
        .with(eq(Route::Rankings))
        .times(1)
        .return_const(());
    navigator
        .expect_navigate()
        .with(eq(Route::Login))
        .times(1)
        .return_const(());

    let controller = harness.controller(navigator, MockToasts::new());
    controller
        .login(&Credentials::new("alice", "x"))
        .await
        .unwrap();
    controller.logout().await;

    assert_eq!(controller.state(), SessionState::Anonymous);
    assert!(!controller.is_polling());
    assert_eq!(harness.persisted(), (None, None, None));
}

#[tokio::test]
async fn logout_clears_state_even_when_backend_fails() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Failed to logout" })))
        .expect(1)
        .mount(&harness.server)
        .await;

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let controller = harness.controller(navigator_expecting(Route::Login), MockToasts::new());
    assert!(controller.restore());

    controller.logout().await;

    assert!(!controller.is_authenticated());
    assert!(!controller.is_polling());
    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn logout_while_anonymous_skips_backend() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.server)
        .await;

    let controller = harness.controller(navigator_expecting(Route::Login), MockToasts::new());
    controller.logout().await;
    assert!(!controller.is_authenticated());
}

#[tokio::test]
async fn expired_session_is_cleared_and_reported() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate-session"))
        .and(body_json(json!({ "sessionID": "s1" })))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "Invalid or expired session" })),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut notifier = MockToasts::new();
    notifier
        .expect_notify()
        .withf(|n: &Notification| {
            n.level == NotificationLevel::Warning
                && n.message == ExpiryNotice::MESSAGE
                && n.timeout == Some(Duration::from_secs(5))
        })
        .times(1)
        .return_const(());

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let controller = harness.controller(navigator_expecting(Route::Login), notifier);
    assert!(controller.restore());
    assert!(controller.is_polling());

    controller.check_session().await;

    assert!(!controller.is_polling());
    assert!(!controller.is_authenticated());
    assert_eq!(harness.persisted(), (None, None, None));
}

#[tokio::test]
async fn unexpected_validation_failure_also_expires_session() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate-session"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&harness.server)
        .await;

    let mut notifier = MockToasts::new();
    notifier.expect_notify().times(1).return_const(());

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let controller = harness.controller(navigator_expecting(Route::Login), notifier);
    controller.restore();

    controller.check_session().await;
    assert!(!controller.is_authenticated());
}

#[tokio::test]
async fn sticky_expiry_policy_shows_indefinite_warning() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate-session"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.server)
        .await;

    let mut notifier = MockToasts::new();
    notifier
        .expect_notify()
        .withf(|n: &Notification| n.timeout.is_none() && !n.dismiss_on_click)
        .times(1)
        .return_const(());

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let config = SessionConfig {
        expiry_notice: ExpiryNotice::Sticky,
        ..SessionConfig::default()
    };
    let controller = harness.controller_with(navigator_expecting(Route::Login), notifier, config);
    controller.restore();

    controller.check_session().await;
    assert!(!controller.is_authenticated());
}

#[tokio::test]
async fn valid_session_is_kept() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate-session"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "valid": true })))
        .expect(1)
        .mount(&harness.server)
        .await;

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let controller = harness.controller(MockNav::new(), MockToasts::new());
    controller.restore();

    controller.check_session().await;

    assert_eq!(controller.state(), SessionState::Authenticated(alice_session()));
    assert!(controller.is_polling());
}

#[tokio::test]
async fn check_session_while_anonymous_is_a_no_op() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate-session"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&harness.server)
        .await;

    let controller = harness.controller(MockNav::new(), MockToasts::new());
    controller.check_session().await;
    assert!(!controller.is_authenticated());
}

#[tokio::test]
async fn starting_the_check_twice_runs_one_poller() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate-session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "valid": true })))
        .mount(&harness.server)
        .await;

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let config = SessionConfig {
        poll_interval: Duration::from_secs(1),
        ..SessionConfig::default()
    };
    let controller = harness.controller_with(MockNav::new(), MockToasts::new(), config);
    controller.restore();
    controller.start_session_check();
    controller.start_session_check();

    // Halfway between the first and second tick
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(controller.is_polling());
    controller.stop_session_check();

    let checks = harness.server.received_requests().await.unwrap().len();
    assert_eq!(checks, 1, "expected a single poller, saw {checks} checks");
}

#[tokio::test]
async fn validation_finishing_after_logout_is_ignored() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate-session"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&harness.server)
        .await;

    // One navigation from the logout; the late 401 must not add a second
    // one or an expiry notice
    let mut notifier = MockToasts::new();
    notifier.expect_notify().times(0);

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let controller = harness.controller(navigator_expecting(Route::Login), notifier);
    controller.restore();

    let checking = tokio::spawn({
        let controller = controller.clone();
        async move { controller.check_session().await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    controller.logout().await;
    checking.await.unwrap();

    assert!(!controller.is_authenticated());
    assert!(!controller.is_polling());
    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn poller_expires_session_on_401() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate-session"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut notifier = MockToasts::new();
    notifier.expect_notify().times(1).return_const(());

    persist_session(harness.store.as_ref(), &alice_session()).unwrap();
    let config = SessionConfig {
        poll_interval: Duration::from_millis(100),
        ..SessionConfig::default()
    };
    let controller = harness.controller_with(navigator_expecting(Route::Login), notifier, config);
    controller.restore();

    tokio::time::sleep(Duration::from_millis(450)).await;

    assert!(!controller.is_authenticated());
    assert!(!controller.is_polling());
    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn restore_repairs_partial_storage() {
    let harness = Harness::start().await;
    harness.store.set(AuthConfig::TOKEN_KEY, "t1").unwrap();
    harness.store.set(AuthConfig::SESSION_ID_KEY, "s1").unwrap();

    let controller = harness.controller(MockNav::new(), MockToasts::new());
    assert!(!controller.restore());
    assert!(!controller.is_authenticated());
    assert!(!controller.is_polling());
    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn register_sends_user_to_login() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "username": "carol",
            "password": "secret",
            "email": "carol@example.com"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "message": "User created successfully" })),
        )
        .mount(&harness.server)
        .await;

    let mut notifier = MockToasts::new();
    notifier
        .expect_notify()
        .withf(|n: &Notification| {
            n.level == NotificationLevel::Success && n.message == "User created successfully"
        })
        .times(1)
        .return_const(());

    let controller = harness.controller(navigator_expecting(Route::Login), notifier);
    controller
        .register(&RegisterRequest {
            username: "carol".to_string(),
            password: "secret".to_string(),
            email: "carol@example.com".to_string(),
        })
        .await
        .unwrap();
    assert!(!controller.is_authenticated());
}

#[tokio::test]
async fn observer_sees_each_transition() {
    let harness = Harness::start().await;
    mount_login_success(&harness.server).await;

    let mut navigator = MockNav::new();
    navigator.expect_navigate().times(2).return_const(());

    let observer = Arc::new(RecordingObserver::default());
    let controller = harness.controller(navigator, MockToasts::new());
    controller.set_observer(observer.clone());

    controller
        .login(&Credentials::new("alice", "x"))
        .await
        .unwrap();
    controller.logout().await;

    assert_eq!(*observer.states.lock().unwrap(), vec![true, false]);
}
