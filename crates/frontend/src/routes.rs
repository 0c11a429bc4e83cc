//! Router table and the guard wrapped around every page

use crate::components::LoadingSpinner;
use crate::session::use_session;
use crate::views::{ClassesView, LoginView, NotFoundView, ProfileView, RankingsView, SignupView};
use rankboard_core::{GuardDecision, Route, guard};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum AppRoute {
    #[at("/")]
    Rankings,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/profile")]
    Profile,
    #[at("/classes")]
    Classes,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::Rankings => Self::Rankings,
            Route::Login => Self::Login,
            Route::Signup => Self::Signup,
            Route::Profile => Self::Profile,
            Route::Classes => Self::Classes,
            Route::NotFound => Self::NotFound,
        }
    }
}

impl From<&AppRoute> for Route {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Rankings => Self::Rankings,
            AppRoute::Login => Self::Login,
            AppRoute::Signup => Self::Signup,
            AppRoute::Profile => Self::Profile,
            AppRoute::Classes => Self::Classes,
            AppRoute::NotFound => Self::NotFound,
        }
    }
}

pub fn switch(route: AppRoute) -> Html {
    html! { <Guarded {route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    route: AppRoute,
}

/// Renders a page only if the guard allows it, redirecting otherwise
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let session = use_session();

    // Wait until the persisted session has been restored
    let Some(state) = session.state.as_ref() else {
        return html! {
            <LoadingSpinner text={Some("Checking your session...".to_string())} />
        };
    };

    let route = Route::from(&props.route);
    match guard(route.access(), state.is_authenticated()) {
        GuardDecision::Redirect(target) => html! {
            <Redirect<AppRoute> to={AppRoute::from(target)} />
        },
        GuardDecision::Allow => match route {
            Route::Rankings => html! { <RankingsView /> },
            Route::Login => html! { <LoginView /> },
            Route::Signup => html! { <SignupView /> },
            Route::Profile => html! { <ProfileView /> },
            Route::Classes => html! { <ClassesView /> },
            Route::NotFound => html! { <NotFoundView /> },
        },
    }
}
