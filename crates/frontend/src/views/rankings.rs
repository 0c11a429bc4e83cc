//! Overall leaderboard with search, class filter and paging

use super::{Load, fetch, input_value};
use crate::components::{LoadingSpinner, NavBar, RankingTable};
use crate::session::use_session;
use rankboard_http::types::{CharacterClass, RankingPage, RankingsQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(RankingsView)]
pub fn rankings_view() -> Html {
    let session = use_session();
    let query = use_state(RankingsQuery::default);
    let search = use_state(String::new);
    let page = use_state(|| Load::<RankingPage>::Loading);
    let classes = use_state(Vec::<CharacterClass>::new);

    // Class names for the filter; failure only leaves the filter empty
    {
        let controller = session.controller.clone();
        let classes = classes.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Some(Load::Loaded(list)) = fetch(&controller, controller.api().classes()).await {
                    classes.set(list);
                }
            });
            || ()
        });
    }

    {
        let controller = session.controller.clone();
        let page = page.clone();
        use_effect_with((*query).clone(), move |query| {
            let query = query.clone();
            page.set(Load::Loading);
            spawn_local(async move {
                if let Some(loaded) = fetch(&controller, controller.api().rankings(&query)).await {
                    page.set(loaded);
                }
            });
            || ()
        });
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| search.set(input_value(&e)))
    };

    let on_search = {
        let query = query.clone();
        let search = search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let term = search.trim().to_string();
            query.set(RankingsQuery {
                search: (!term.is_empty()).then_some(term),
                ..(*query).clone().page(1)
            });
        })
    };

    let on_class = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let class = select.value();
            query.set(RankingsQuery {
                class: (!class.is_empty()).then_some(class),
                ..(*query).clone().page(1)
            });
        })
    };

    let go_to = |target: u32| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set((*query).clone().page(target)))
    };

    let greeting = session
        .user()
        .map(|user| format!("Welcome back, {}!", user.username))
        .unwrap_or_default();

    let body = match &*page {
        Load::Loading => html! { <LoadingSpinner inline={true} text={Some("Loading rankings...".to_string())} /> },
        Load::Failed(message) => html! {
            <div class="p-3 bg-red-900/30 text-red-300 rounded text-sm">{message}</div>
        },
        Load::Loaded(page) => html! {
            <>
                <RankingTable entries={page.rankings.clone()} />
                <div class="flex items-center justify-between mt-4 text-sm">
                    <button
                        class="px-3 py-1 rounded border border-ac-gold/30 disabled:opacity-40"
                        disabled={!page.has_previous()}
                        onclick={go_to(page.current_page.saturating_sub(1))}
                    >
                        {"Previous"}
                    </button>
                    <span class="text-ac-light/70">
                        {format!("Page {} of {} ({} players)", page.current_page, page.total_pages.max(1), page.total)}
                    </span>
                    <button
                        class="px-3 py-1 rounded border border-ac-gold/30 disabled:opacity-40"
                        disabled={!page.has_next()}
                        onclick={go_to(page.current_page + 1)}
                    >
                        {"Next"}
                    </button>
                </div>
            </>
        },
    };

    let selected_class = query.class.clone().unwrap_or_default();

    html! {
        <div class="min-h-screen bg-ac-dark text-ac-light">
            <NavBar />
            <main class="max-w-6xl mx-auto px-4 py-8">
                <h1 class="text-2xl font-bold text-ac-gold mb-2">{"Rankings"}</h1>
                <p class="text-ac-light/70 mb-6">{greeting}</p>

                <div class="flex flex-wrap gap-3 mb-6">
                    <form onsubmit={on_search} class="flex gap-2">
                        <input
                            class="px-3 py-2 rounded-md bg-ac-gray border border-ac-gold/30 focus:outline-none focus:border-ac-gold"
                            type="search"
                            placeholder="Search players"
                            value={(*search).clone()}
                            oninput={on_search_input}
                        />
                        <button type="submit" class="px-4 py-2 rounded-md bg-ac-gold text-ac-dark font-semibold">
                            {"Search"}
                        </button>
                    </form>
                    <select
                        class="px-3 py-2 rounded-md bg-ac-gray border border-ac-gold/30"
                        onchange={on_class}
                    >
                        <option value="" selected={selected_class.is_empty()}>{"All classes"}</option>
                        { for classes.iter().map(|class| html! {
                            <option key={class.id} value={class.name.clone()} selected={class.name == selected_class}>
                                {&class.name}
                            </option>
                        }) }
                    </select>
                </div>

                {body}
            </main>
        </div>
    }
}
