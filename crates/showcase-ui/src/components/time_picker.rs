//! Time picker
//!
//! A trigger showing `HH:MM` (or a placeholder) that opens an hour and a
//! minute field. Arrow keys step with wrap-around; invalid typing is dropped.

use dioxus::prelude::*;
use showcase_core::widgets::{TimeField, TimePickerState};

#[derive(Clone, PartialEq, Props)]
pub struct TimePickerProps {
    /// Called whenever a valid time is set
    #[props(default)]
    pub onchange: Option<EventHandler<String>>,
}

#[component]
pub fn TimePicker(props: TimePickerProps) -> Element {
    let state = use_signal(TimePickerState::default);
    let mut open = use_signal(|| false);

    let display = state.read().display();
    let unset = state.read().time().is_none();

    rsx! {
        div { class: "time-picker",
            button {
                class: if unset { "time-trigger placeholder" } else { "time-trigger" },
                onclick: move |_| open.set(!open()),
                span { "🕒" }
                span { "{display}" }
            }
            if open() {
                div { class: "time-popover",
                    TimeFieldInput { state: state, field: TimeField::Hours, onchange: props.onchange }
                    span { class: "time-separator", ":" }
                    TimeFieldInput { state: state, field: TimeField::Minutes, onchange: props.onchange }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TimeFieldInputProps {
    state: Signal<TimePickerState>,
    field: TimeField,
    onchange: Option<EventHandler<String>>,
}

#[component]
fn TimeFieldInput(props: TimeFieldInputProps) -> Element {
    let mut state = props.state;
    let field = props.field;
    let onchange = props.onchange;
    let text = state.read().field_text(field);

    let notify = move |state: Signal<TimePickerState>| {
        if let Some(handler) = &onchange {
            handler.call(state.read().display());
        }
    };

    rsx! {
        input {
            class: "time-field",
            r#type: "text",
            inputmode: "numeric",
            maxlength: "2",
            "aria-label": field_label(field),
            value: "{text}",
            oninput: move |e| {
                let typed = e.value();
                let result = state.write().set_text(field, &typed);
                match result {
                    Ok(()) => notify(state),
                    Err(err) => tracing::debug!(%err, "Ignored time input"),
                }
            },
            onkeydown: move |e: KeyboardEvent| {
                let up = match e.key() {
                    Key::ArrowUp => true,
                    Key::ArrowDown => false,
                    _ => return,
                };
                e.prevent_default();
                state.write().step(field, up);
                notify(state);
            },
        }
    }
}

fn field_label(field: TimeField) -> &'static str {
    match field {
        TimeField::Hours => "小时",
        TimeField::Minutes => "分钟",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_labels() {
        assert_eq!(field_label(TimeField::Hours), "小时");
        assert_eq!(field_label(TimeField::Minutes), "分钟");
    }
}
