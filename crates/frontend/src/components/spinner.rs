use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
    /// Render inside a page instead of covering the viewport
    #[prop_or_default]
    pub inline: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    let frame = if props.inline {
        "flex items-center gap-3 py-8"
    } else {
        "min-h-screen flex flex-col items-center justify-center gap-4 bg-ac-dark"
    };

    html! {
        <div class={frame} role="status">
            <span class="w-8 h-8 border-4 border-ac-gray border-t-ac-gold rounded-full animate-spin"></span>
            <span class="text-ac-light text-sm">
                { props.text.clone().unwrap_or_else(|| "Loading...".to_string()) }
            </span>
        </div>
    }
}
