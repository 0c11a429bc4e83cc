//! Seams between the session controller and the UI

use rankboard_core::{Notification, Route, SessionState};

/// Moves the app to another route
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Shows a notification to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Told about every session state transition
pub trait SessionObserver: Send + Sync {
    fn session_changed(&self, state: &SessionState);
}
