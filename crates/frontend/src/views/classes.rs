//! Class catalogue; picking a class shows its leaderboard

use super::{Load, fetch};
use crate::components::{LoadingSpinner, NavBar, RankingTable};
use crate::session::use_session;
use rankboard_http::types::{CharacterClass, ClassRankings};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const CLASS_BOARD_LIMIT: u32 = 20;

#[function_component(ClassesView)]
pub fn classes_view() -> Html {
    let session = use_session();
    let classes = use_state(|| Load::<Vec<CharacterClass>>::Loading);
    let selected = use_state(|| None::<i64>);
    let board = use_state(|| None::<Load<ClassRankings>>);

    {
        let controller = session.controller.clone();
        let classes = classes.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Some(loaded) = fetch(&controller, controller.api().classes()).await {
                    classes.set(loaded);
                }
            });
            || ()
        });
    }

    {
        let controller = session.controller.clone();
        let board = board.clone();
        use_effect_with(*selected, move |selected| {
            if let Some(class_id) = *selected {
                board.set(Some(Load::Loading));
                spawn_local(async move {
                    let request = controller.api().class_rankings(class_id, CLASS_BOARD_LIMIT);
                    if let Some(loaded) = fetch(&controller, request).await {
                        board.set(Some(loaded));
                    }
                });
            }
            || ()
        });
    }

    let list = match &*classes {
        Load::Loading => html! { <LoadingSpinner inline={true} text={Some("Loading classes...".to_string())} /> },
        Load::Failed(message) => html! {
            <div class="p-3 bg-red-900/30 text-red-300 rounded text-sm">{message}</div>
        },
        Load::Loaded(list) => html! {
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                { for list.iter().map(|class| {
                    let onclick = {
                        let selected = selected.clone();
                        let id = class.id;
                        Callback::from(move |_: MouseEvent| selected.set(Some(id)))
                    };
                    let active = *selected == Some(class.id);
                    html! {
                        <button
                            key={class.id}
                            {onclick}
                            class={classes!(
                                "text-left", "p-4", "rounded-lg", "bg-ac-gray", "border",
                                if active { "border-ac-gold" } else { "border-ac-gold/30" },
                            )}
                        >
                            <h2 class="text-lg font-semibold text-ac-gold">{&class.name}</h2>
                            <p class="text-sm text-ac-light/70">{format!("{} · {}", class.race_name, class.combat_type)}</p>
                            <p class="text-sm mt-2">{&class.description}</p>
                            <p class="text-xs mt-2 text-ac-light/60">
                                {format!(
                                    "Damage {} · Defense {} · Speed {} · Difficulty {}",
                                    class.damage, class.defense, class.speed, class.difficulty
                                )}
                            </p>
                        </button>
                    }
                }) }
            </div>
        },
    };

    let board = match &*board {
        None => Html::default(),
        Some(Load::Loading) => html! { <LoadingSpinner inline={true} text={Some("Loading leaderboard...".to_string())} /> },
        Some(Load::Failed(message)) => html! {
            <div class="p-3 bg-red-900/30 text-red-300 rounded text-sm">{message}</div>
        },
        Some(Load::Loaded(rankings)) => html! {
            <section class="mt-8">
                <h2 class="text-xl font-bold text-ac-gold mb-3">
                    {format!("Top players ({} total)", rankings.total)}
                </h2>
                <RankingTable entries={rankings.rankings.clone()} show_class={false} />
            </section>
        },
    };

    html! {
        <div class="min-h-screen bg-ac-dark text-ac-light">
            <NavBar />
            <main class="max-w-6xl mx-auto px-4 py-8">
                <h1 class="text-2xl font-bold text-ac-gold mb-6">{"Classes"}</h1>
                {list}
                {board}
            </main>
        </div>
    }
}
