//! Session context and provider
//!
//! The controller lives outside Yew's render cycle and talks back to the UI
//! through an unbounded channel: navigation requests, notifications and state
//! changes are queued by [`UiBus`] and drained by a local task owned by
//! [`SessionProvider`].

mod bus;

use crate::components::{LoadingSpinner, ToastAction, ToastContext, ToastHost, ToastList};
use crate::routes::AppRoute;
use bus::{UiBus, UiEvent};
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use gloo::timers::future::TimeoutFuture;
use rankboard_core::{ApiConfig, KeyValueStore, SessionConfig, SessionState, User};
use rankboard_frontend_common::browser::LocalStorageStore;
use rankboard_frontend_common::{SessionController, SessionError, create_api_client};
use std::cell::RefCell;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Session data handed to components
#[derive(Clone)]
pub struct SessionContext {
    pub controller: SessionController,
    /// `None` until the persisted session has been restored
    pub state: Option<SessionState>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(SessionState::is_authenticated)
    }

    pub fn user(&self) -> Option<&User> {
        self.state.as_ref().and_then(SessionState::user)
    }
}

/// Controller plus the receiving end of its UI channel, built once per app
struct SessionRuntime {
    controller: Result<SessionController, String>,
    events: RefCell<Option<UnboundedReceiver<UiEvent>>>,
}

impl SessionRuntime {
    fn new() -> Self {
        let (bus, events) = UiBus::new();
        let controller = build_controller(Arc::new(bus)).map_err(|e| {
            tracing::error!(error = %e, "Failed to start session controller");
            e.to_string()
        });

        Self {
            controller,
            events: RefCell::new(Some(events)),
        }
    }
}

fn build_controller(bus: Arc<UiBus>) -> Result<SessionController, SessionError> {
    let api_config = ApiConfig::from_build_env()?;
    let store: Arc<dyn KeyValueStore> = Arc::new(LocalStorageStore);
    let api = create_api_client(&api_config, store.clone())?;

    let controller = SessionController::new(
        api,
        store,
        bus.clone(),
        bus.clone(),
        SessionConfig::default(),
    );
    controller.set_observer(bus);
    Ok(controller)
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the session controller; must sit inside the router
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let navigator = use_navigator();
    let state = use_state(|| None::<SessionState>);
    let toasts = use_reducer(ToastList::default);
    let runtime = use_memo((), |_| SessionRuntime::new());

    {
        let runtime = runtime.clone();
        let state = state.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            if let Some(events) = runtime.events.borrow_mut().take() {
                spawn_local(drain_events(events, navigator, state.clone(), toasts));
            }

            if let Ok(controller) = &runtime.controller {
                controller.restore();
                state.set(Some(controller.state()));
            }

            move || {
                if let Ok(controller) = &runtime.controller {
                    controller.stop_session_check();
                    controller.clear_observer();
                }
            }
        });
    }

    let controller = match &runtime.controller {
        Ok(controller) => controller.clone(),
        Err(error) => {
            return html! {
                <div class="min-h-screen flex items-center justify-center bg-gray-900 text-red-300 p-6">
                    <p>{format!("The app is misconfigured: {error}")}</p>
                </div>
            };
        }
    };

    let context = SessionContext {
        controller,
        state: (*state).clone(),
    };

    html! {
        <ContextProvider<SessionContext> {context}>
            <ContextProvider<ToastContext> context={toasts}>
                <ToastHost />
                if state.is_some() {
                    {props.children.clone()}
                } else {
                    <LoadingSpinner text={Some("Loading...".to_string())} />
                }
            </ContextProvider<ToastContext>>
        </ContextProvider<SessionContext>>
    }
}

async fn drain_events(
    mut events: UnboundedReceiver<UiEvent>,
    navigator: Option<Navigator>,
    state: UseStateHandle<Option<SessionState>>,
    toasts: UseReducerHandle<ToastList>,
) {
    let mut next_id: u64 = 0;

    while let Some(event) = events.next().await {
        match event {
            UiEvent::Navigate(route) => match &navigator {
                Some(navigator) => navigator.push(&AppRoute::from(route)),
                None => tracing::warn!(?route, "No router available for navigation"),
            },
            UiEvent::Notify(notification) => {
                next_id += 1;
                let id = next_id;
                if let Some(timeout) = notification.timeout {
                    let toasts = toasts.clone();
                    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
                    spawn_local(async move {
                        TimeoutFuture::new(millis).await;
                        toasts.dispatch(ToastAction::Dismiss(id));
                    });
                }
                toasts.dispatch(ToastAction::Push { id, notification });
            }
            UiEvent::StateChanged(session) => state.set(Some(session)),
        }
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
