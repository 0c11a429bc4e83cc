use crate::routes::{AppRoute, switch};
use crate::session::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<AppRoute> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}
