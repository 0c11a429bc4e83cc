//! Pages behind the router

mod classes;
mod login;
mod not_found;
mod profile;
mod rankings;
mod signup;

pub use classes::ClassesView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use profile::ProfileView;
pub use rankings::RankingsView;
pub use signup::SignupView;

use rankboard_frontend_common::SessionController;
use rankboard_http::ClientError;
use std::future::Future;
use yew::prelude::*;

/// Read the value of the input that fired `e`
pub(crate) fn input_value(e: &InputEvent) -> String {
    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// State of a page's data request
#[derive(Clone, PartialEq)]
pub(crate) enum Load<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Run an authenticated request for a page.
///
/// A 401 ends the session (the route guard then redirects) and yields `None`.
pub(crate) async fn fetch<T>(
    controller: &SessionController,
    request: impl Future<Output = Result<T, ClientError>>,
) -> Option<Load<T>> {
    match request.await {
        Ok(value) => Some(Load::Loaded(value)),
        Err(e) if e.is_unauthorized() => {
            // Another request on the page may have expired it already
            if controller.is_authenticated() {
                controller.handle_session_expired().await;
            }
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load page data");
            Some(Load::Failed(e.user_message()))
        }
    }
}
