//! Top navigation for signed-in pages

use crate::routes::AppRoute;
use crate::session::use_session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let session = use_session();

    let on_logout = {
        let controller = session.controller.clone();
        Callback::from(move |_: MouseEvent| {
            if !gloo::dialogs::confirm("Are you sure you want to logout?") {
                return;
            }
            let controller = controller.clone();
            spawn_local(async move {
                controller.logout().await;
            });
        })
    };

    let username = session
        .user()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    html! {
        <nav class="bg-ac-gray border-b border-ac-gold/30">
            <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
                <div class="flex items-center gap-6">
                    <span class="text-xl font-bold text-ac-gold">{"Rankboard"}</span>
                    <Link<AppRoute> to={AppRoute::Rankings} classes="text-ac-light hover:text-ac-gold">{"Rankings"}</Link<AppRoute>>
                    <Link<AppRoute> to={AppRoute::Classes} classes="text-ac-light hover:text-ac-gold">{"Classes"}</Link<AppRoute>>
                    <Link<AppRoute> to={AppRoute::Profile} classes="text-ac-light hover:text-ac-gold">{"Profile"}</Link<AppRoute>>
                </div>
                <div class="flex items-center gap-3">
                    <span class="text-sm text-ac-light/70">{username}</span>
                    <button
                        onclick={on_logout}
                        class="px-4 py-2 text-sm font-medium text-ac-dark bg-ac-gold hover:bg-ac-gold/80 rounded-lg transition-colors"
                    >
                        {"Logout"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
