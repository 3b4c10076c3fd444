// Status line shown after the host confirms a save

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub message: Option<String>,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    match &props.message {
        Some(message) if !message.is_empty() => html! {
            <div class="status" role="status">{ message.clone() }</div>
        },
        _ => html! {},
    }
}
