use super::{Load, fetch};
use crate::components::{LoadingSpinner, NavBar};
use crate::session::use_session;
use rankboard_http::types::ProfileResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let session = use_session();
    let profile = use_state(|| Load::<ProfileResponse>::Loading);

    {
        let controller = session.controller.clone();
        let profile = profile.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Some(loaded) = fetch(&controller, controller.api().profile()).await {
                    profile.set(loaded);
                }
            });
            || ()
        });
    }

    let body = match &*profile {
        Load::Loading => html! {
            <LoadingSpinner inline={true} text={Some("Loading profile...".to_string())} />
        },
        Load::Failed(message) => html! {
            <div class="p-3 bg-red-900/30 text-red-300 rounded text-sm">{message}</div>
        },
        Load::Loaded(profile) => html! {
            <dl class="grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2">
                <dt class="text-ac-light/70">{"Username"}</dt>
                <dd>{&profile.username}</dd>
                <dt class="text-ac-light/70">{"Email"}</dt>
                <dd>{&profile.email}</dd>
                if let Some(created_at) = &profile.created_at {
                    <dt class="text-ac-light/70">{"Member since"}</dt>
                    <dd>{created_at}</dd>
                }
                <dt class="text-ac-light/70">{"Two-factor"}</dt>
                <dd>{ if profile.two_factor_enabled { "Enabled" } else { "Disabled" } }</dd>
            </dl>
        },
    };

    html! {
        <div class="min-h-screen bg-ac-dark text-ac-light">
            <NavBar />
            <main class="max-w-3xl mx-auto px-4 py-8">
                <h1 class="text-2xl font-bold text-ac-gold mb-6">{"Profile"}</h1>
                {body}
            </main>
        </div>
    }
}
