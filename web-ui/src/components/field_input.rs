// Labeled input with inline validation message

use teametric_config_core::{Field, FieldStatus};
use yew::prelude::*;

use crate::messages::{error_dom_id, field_dom_id, field_input_type, field_label, input_class};

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub field: Field,
    pub value: String,
    /// Current validation message; the error text is rendered only when set
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub status: FieldStatus,
    pub on_change: Callback<String>,
}

#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let id = field_dom_id(props.field);
    let error_id = error_dom_id(props.field);
    let invalid = props.error.is_some();

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label for={id}>{ field_label(props.field) }</label>
            <input
                type={field_input_type(props.field)}
                id={id}
                data-route={(props.field == Field::EndpointUrl).then_some(id)}
                data-state={props.status.as_str()}
                value={props.value.clone()}
                oninput={on_input}
                aria-invalid={if invalid { "true" } else { "false" }}
                aria-describedby={invalid.then_some(error_id)}
                class={input_class(invalid)}
            />
            {
                if let Some(message) = &props.error {
                    html! {
                        <span
                            id={error_id}
                            class="error-message"
                            data-field={id}
                            aria-live="polite"
                        >
                            { message.clone() }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
