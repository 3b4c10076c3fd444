// Config panel component: renders a headless ConfigPanel and forwards DOM events to it

use std::rc::Rc;

use teametric_config_core::{
    ConfigPanel as PanelState, ConfigSavedCallback, Field, FieldStatus, FormState, OriginPolicy,
    PanelOptions, PanelPhase, ValidationErrors,
};
use yew::prelude::*;

use crate::channel::ChannelHandle;
use crate::components::{ActionButtons, FieldInput, StatusLine};
use crate::messages::REGION_LABEL;

#[derive(Properties, PartialEq)]
pub struct ConfigPanelProps {
    #[prop_or_default]
    pub initial_endpoint_url: String,
    #[prop_or_default]
    pub initial_schedule_interval: String,
    /// Invoked with the acknowledgement payload each time the host confirms a save
    #[prop_or_default]
    pub on_config_saved: Option<Callback<serde_json::Value>>,
    pub channel: ChannelHandle,
    #[prop_or_default]
    pub origin_policy: OriginPolicy,
}

/// What one render needs from the mounted panel
struct PanelView {
    form: FormState,
    errors: ValidationErrors,
    status_message: Option<String>,
    phase: PanelPhase,
    field_status: [FieldStatus; 2],
}

impl PanelView {
    fn of(panel: Option<&PanelState<ChannelHandle>>, fallback: &FormState) -> Self {
        match panel {
            Some(panel) => Self {
                form: panel.form().clone(),
                errors: panel.errors().clone(),
                status_message: panel.status_message(),
                phase: panel.phase(),
                field_status: Field::ALL.map(|field| panel.field_status(field)),
            },
            // Before the mount effect has run, or after a failed mount
            None => Self {
                form: fallback.clone(),
                errors: ValidationErrors::new(),
                status_message: None,
                phase: PanelPhase::default(),
                field_status: Default::default(),
            },
        }
    }

    fn status(&self, field: Field) -> FieldStatus {
        match field {
            Field::EndpointUrl => self.field_status[0],
            Field::ScheduleInterval => self.field_status[1],
        }
    }
}

#[function_component(ConfigPanel)]
pub fn config_panel(props: &ConfigPanelProps) -> Html {
    let panel = use_mut_ref(|| None::<PanelState<ChannelHandle>>);
    // Form text to mount with; refreshed on teardown so a remount keeps what was typed
    let carried = use_mut_ref(|| {
        FormState::new(
            props.initial_endpoint_url.clone(),
            props.initial_schedule_interval.clone(),
        )
    });
    let redraw = use_force_update();

    // The headless panel (and its listener) lives as long as the component or until its inputs change
    {
        let panel = panel.clone();
        let carried = carried.clone();
        let redraw = redraw.clone();
        use_effect_with(
            (
                props.channel.clone(),
                props.on_config_saved.clone(),
                props.origin_policy.clone(),
            ),
            move |(channel, on_config_saved, origin_policy)| {
                let on_ack: ConfigSavedCallback = {
                    let on_config_saved = on_config_saved.clone();
                    let redraw = redraw.clone();
                    Rc::new(move |payload| {
                        redraw.force_update();
                        if let Some(callback) = &on_config_saved {
                            callback.emit(payload);
                        }
                    })
                };

                let form = carried.borrow().clone();
                let options = PanelOptions {
                    initial_endpoint_url: form.endpoint_url,
                    initial_schedule_interval: form.schedule_interval,
                    on_config_saved: Some(on_ack),
                    origin_policy: origin_policy.clone(),
                };
                match PanelState::mount(channel.clone(), options) {
                    Ok(mounted) => *panel.borrow_mut() = Some(mounted),
                    Err(e) => {
                        tracing::warn!(error = %e, "config panel could not listen for host messages")
                    }
                }
                redraw.force_update();

                move || {
                    let mounted = panel.borrow_mut().take();
                    if let Some(mounted) = mounted {
                        *carried.borrow_mut() = mounted.form().clone();
                        mounted.unmount();
                    }
                }
            },
        );
    }

    let on_field_change = |field: Field| {
        let panel = panel.clone();
        let redraw = redraw.clone();
        Callback::from(move |value: String| {
            if let Some(mounted) = panel.borrow_mut().as_mut() {
                mounted.edit(field, value);
            }
            redraw.force_update();
        })
    };

    let on_save = {
        let panel = panel.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let result = panel.borrow_mut().as_mut().map(|mounted| mounted.save());
            if let Some(Err(e)) = result {
                tracing::warn!(error = %e, "failed to send save-config");
            }
            redraw.force_update();
        })
    };

    let on_run_now = {
        let panel = panel.clone();
        Callback::from(move |_: ()| {
            let result = panel.borrow().as_ref().map(|mounted| mounted.run_now());
            if let Some(Err(e)) = result {
                tracing::warn!(error = %e, "failed to send run-now");
            }
        })
    };

    let view = PanelView::of(panel.borrow().as_ref(), &carried.borrow());

    html! {
        <div
            id="sidebar-container"
            role="region"
            aria-label={REGION_LABEL}
            class="container"
            data-phase={view.phase.as_str()}
        >
            <form class="grid-container" novalidate={true}>
                <FieldInput
                    field={Field::EndpointUrl}
                    value={view.form.endpoint_url.clone()}
                    error={view.errors.message(Field::EndpointUrl)}
                    status={view.status(Field::EndpointUrl)}
                    on_change={on_field_change(Field::EndpointUrl)}
                />
                <FieldInput
                    field={Field::ScheduleInterval}
                    value={view.form.schedule_interval.clone()}
                    error={view.errors.message(Field::ScheduleInterval)}
                    status={view.status(Field::ScheduleInterval)}
                    on_change={on_field_change(Field::ScheduleInterval)}
                />
                <ActionButtons on_save={on_save} on_run_now={on_run_now} />
            </form>
            <StatusLine message={view.status_message.clone()} />
        </div>
    }
}
