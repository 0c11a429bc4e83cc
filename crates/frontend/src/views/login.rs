//! Login form with the second-factor step

use super::input_value;
use crate::routes::AppRoute;
use crate::session::use_session;
use rankboard_core::Credentials;
use rankboard_frontend_common::LoginOutcome;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq)]
enum Step {
    Credentials,
    /// Password accepted, waiting for the code for this username
    TwoFactor(String),
}

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session();
    let step = use_state(|| Step::Credentials);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let code = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| username.set(input_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };
    let on_code = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| code.set(input_value(&e)))
    };

    let on_submit = {
        let controller = session.controller.clone();
        let step = step.clone();
        let username = username.clone();
        let password = password.clone();
        let code = code.clone();
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
            let current = (*step).clone();
            let credentials = Credentials::new((*username).clone(), (*password).clone());
            let code = (*code).clone();
            let step = step.clone();
            let error = error.clone();
            let busy = busy.clone();

            spawn_local(async move {
                let result = match &current {
                    Step::Credentials => controller.login(&credentials).await,
                    Step::TwoFactor(username) => controller.verify_2fa_login(username, &code).await,
                };

                match result {
                    // Navigation is done by the controller
                    Ok(LoginOutcome::SignedIn) => {}
                    Ok(LoginOutcome::TwoFactorRequired) => {
                        step.set(Step::TwoFactor(credentials.username.clone()));
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Login failed");
                        error.set(Some(e.user_message()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_back = {
        let step = step.clone();
        let code = code.clone();
        Callback::from(move |_: MouseEvent| {
            code.set(String::new());
            step.set(Step::Credentials);
        })
    };

    let input_class = "w-full px-3 py-2 rounded-md bg-ac-dark border border-ac-gold/30 text-ac-light focus:outline-none focus:border-ac-gold";

    html! {
        <div class="min-h-screen flex items-center justify-center bg-ac-dark">
            <form onsubmit={on_submit} class="w-full max-w-sm bg-ac-gray border border-ac-gold/30 rounded-lg p-6 space-y-4">
                <h1 class="text-2xl font-bold text-ac-gold text-center">{"Sign in"}</h1>

                if let Some(message) = &*error {
                    <div class="p-3 bg-red-900/30 text-red-300 rounded text-sm">{message}</div>
                }

                {
                    match &*step {
                        Step::Credentials => html! {
                            <>
                                <input
                                    class={input_class}
                                    type="text"
                                    placeholder="Username"
                                    autocomplete="username"
                                    value={(*username).clone()}
                                    oninput={on_username}
                                />
                                <input
                                    class={input_class}
                                    type="password"
                                    placeholder="Password"
                                    autocomplete="current-password"
                                    value={(*password).clone()}
                                    oninput={on_password}
                                />
                            </>
                        },
                        Step::TwoFactor(name) => html! {
                            <>
                                <p class="text-sm text-ac-light/70">
                                    {format!("Enter the code from your authenticator app for {name}.")}
                                </p>
                                <input
                                    class={input_class}
                                    type="text"
                                    inputmode="numeric"
                                    placeholder="123456"
                                    autocomplete="one-time-code"
                                    value={(*code).clone()}
                                    oninput={on_code}
                                />
                                <button type="button" onclick={on_back} class="text-sm text-ac-light/70 underline">
                                    {"Use a different account"}
                                </button>
                            </>
                        },
                    }
                }

                <button
                    type="submit"
                    disabled={*busy}
                    class="w-full py-2 rounded-md bg-ac-gold text-ac-dark font-semibold hover:bg-ac-gold/80 disabled:opacity-50"
                >
                    { if *busy { "Signing in..." } else { "Sign in" } }
                </button>

                <p class="text-sm text-center text-ac-light/70">
                    {"No account yet? "}
                    <Link<AppRoute> to={AppRoute::Signup} classes="text-ac-gold underline">{"Sign up"}</Link<AppRoute>>
                </p>
            </form>
        </div>
    }
}
