use rankboard_http::types::RankingEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RankingTableProps {
    pub entries: Vec<RankingEntry>,
    /// Hide the class column on single-class boards
    #[prop_or(true)]
    pub show_class: bool,
}

#[function_component(RankingTable)]
pub fn ranking_table(props: &RankingTableProps) -> Html {
    if props.entries.is_empty() {
        return html! { <p class="text-ac-light/70">{"No rankings yet."}</p> };
    }

    html! {
        <table class="w-full text-left border-collapse">
            <thead>
                <tr class="border-b border-ac-gold/30 text-ac-gold">
                    <th class="py-2 pr-4">{"#"}</th>
                    <th class="py-2 pr-4">{"Player"}</th>
                    if props.show_class {
                        <th class="py-2 pr-4">{"Class"}</th>
                    }
                    <th class="py-2 text-right">{"Score"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.entries.iter().map(|entry| html! {
                    <tr key={entry.rank} class="border-b border-ac-gray">
                        <td class="py-2 pr-4">{entry.rank}</td>
                        <td class="py-2 pr-4">{&entry.username}</td>
                        if props.show_class {
                            <td class="py-2 pr-4">{&entry.class_name}</td>
                        }
                        <td class="py-2 text-right">{entry.reward_score}</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
