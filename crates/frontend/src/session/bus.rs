//! Channel carrying controller events into the Yew world

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use rankboard_core::{Notification, Route, SessionState};
use rankboard_frontend_common::{Navigator, Notifier, SessionObserver};

#[derive(Debug)]
pub enum UiEvent {
    Navigate(Route),
    Notify(Notification),
    StateChanged(SessionState),
}

/// Implements every controller seam by queueing a [`UiEvent`]
pub struct UiBus {
    tx: UnboundedSender<UiEvent>,
}

impl UiBus {
    pub fn new() -> (Self, UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded();
        (Self { tx }, rx)
    }

    fn send(&self, event: UiEvent) {
        if let Err(error) = self.tx.unbounded_send(event) {
            tracing::debug!(?error, "UI is gone, dropping event");
        }
    }
}

impl Navigator for UiBus {
    fn navigate(&self, route: Route) {
        self.send(UiEvent::Navigate(route));
    }
}

impl Notifier for UiBus {
    fn notify(&self, notification: Notification) {
        self.send(UiEvent::Notify(notification));
    }
}

impl SessionObserver for UiBus {
    fn session_changed(&self, state: &SessionState) {
        self.send(UiEvent::StateChanged(state.clone()));
    }
}
