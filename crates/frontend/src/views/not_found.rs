use crate::routes::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-ac-dark text-ac-light gap-4">
            <h1 class="text-3xl font-bold text-ac-gold">{"Page not found"}</h1>
            <Link<AppRoute> to={AppRoute::Rankings} classes="underline">{"Back to the rankings"}</Link<AppRoute>>
        </div>
    }
}
