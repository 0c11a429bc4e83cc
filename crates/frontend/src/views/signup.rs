use super::input_value;
use crate::routes::AppRoute;
use crate::session::use_session;
use rankboard_http::types::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignupView)]
pub fn signup_view() -> Html {
    let session = use_session();
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| username.set(input_value(&e)))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(input_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };

    let on_submit = {
        let controller = session.controller.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);
            error.set(None);

            let controller = controller.clone();
            let request = RegisterRequest {
                username: (*username).clone(),
                password: (*password).clone(),
                email: (*email).clone(),
            };
            let error = error.clone();
            let busy = busy.clone();

            spawn_local(async move {
                if let Err(e) = controller.register(&request).await {
                    error.set(Some(e.user_message()));
                }
                busy.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 rounded-md bg-ac-dark border border-ac-gold/30 text-ac-light focus:outline-none focus:border-ac-gold";

    html! {
        <div class="min-h-screen flex items-center justify-center bg-ac-dark">
            <form onsubmit={on_submit} class="w-full max-w-sm bg-ac-gray border border-ac-gold/30 rounded-lg p-6 space-y-4">
                <h1 class="text-2xl font-bold text-ac-gold text-center">{"Create an account"}</h1>

                if let Some(message) = &*error {
                    <div class="p-3 bg-red-900/30 text-red-300 rounded text-sm">{message}</div>
                }

                <input class={input_class} type="text" placeholder="Username" autocomplete="username"
                    value={(*username).clone()} oninput={on_username} />
                <input class={input_class} type="email" placeholder="Email" autocomplete="email"
                    value={(*email).clone()} oninput={on_email} />
                <input class={input_class} type="password" placeholder="Password" autocomplete="new-password"
                    value={(*password).clone()} oninput={on_password} />

                <button
                    type="submit"
                    disabled={*busy}
                    class="w-full py-2 rounded-md bg-ac-gold text-ac-dark font-semibold hover:bg-ac-gold/80 disabled:opacity-50"
                >
                    {"Sign up"}
                </button>

                <p class="text-sm text-center text-ac-light/70">
                    {"Already registered? "}
                    <Link<AppRoute> to={AppRoute::Login} classes="text-ac-gold underline">{"Sign in"}</Link<AppRoute>>
                </p>
            </form>
        </div>
    }
}
