// Save / Run Now buttons

use yew::prelude::*;

use crate::messages::{RUN_NOW_BUTTON_LABEL, SAVE_BUTTON_LABEL};

#[derive(Properties, PartialEq)]
pub struct ActionButtonsProps {
    pub on_save: Callback<()>,
    pub on_run_now: Callback<()>,
}

#[function_component(ActionButtons)]
pub fn action_buttons(props: &ActionButtonsProps) -> Html {
    let on_save_click = props.on_save.reform(|_: MouseEvent| ());
    let on_run_now_click = props.on_run_now.reform(|_: MouseEvent| ());

    html! {
        <div class="buttons">
            <button
                type="button"
                id="save-config"
                data-commands="save-config"
                class={classes!("primary", "button")}
                onclick={on_save_click}
            >
                { SAVE_BUTTON_LABEL }
            </button>
            <button
                type="button"
                id="run-now"
                data-commands="run-now"
                class={classes!("secondary", "button")}
                onclick={on_run_now_click}
            >
                { RUN_NOW_BUTTON_LABEL }
            </button>
        </div>
    }
}
