//! Form Control Components
//!
//! Text input, search box, checkbox and switch.
//! Features:
//! - White background with N3 border
//! - B1 border and ring on focus
//! - Disabled controls drop to 50% opacity

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text after the label (e.g., "选填")
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// let mut phone = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: phone(),
///         oninput: move |s| phone.set(s),
///         label: "手机号".to_string(),
///         placeholder: "请输入手机号".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_id("input"));
    let extra_class = props.class.as_deref().unwrap_or("");
    let input_class = if extra_class.is_empty() {
        "input-field".to_string()
    } else {
        format!("input-field {}", extra_class)
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if props.required {
                        span { class: "input-required", " *" }
                    }
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "搜索".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    pub checked: bool,
    pub onchange: EventHandler<bool>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let id = next_id("checkbox");
    rsx! {
        label {
            class: if props.disabled { "checkbox disabled" } else { "checkbox" },
            r#for: "{id}",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |e| props.onchange.call(e.checked()),
            }
            if let Some(label) = &props.label {
                span { class: "checkbox-label", "{label}" }
            }
        }
    }
}

/// Properties for the Switch component
#[derive(Clone, PartialEq, Props)]
pub struct SwitchProps {
    pub on: bool,
    pub ontoggle: EventHandler<bool>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Toggle switch; reports the new state on click
#[component]
pub fn Switch(props: SwitchProps) -> Element {
    let class = switch_class(props.on, props.disabled);
    rsx! {
        button {
            class: "{class}",
            role: "switch",
            "aria-checked": "{props.on}",
            disabled: props.disabled,
            onclick: move |_| props.ontoggle.call(!props.on),
            span { class: "switch-thumb" }
        }
    }
}

fn switch_class(on: bool, disabled: bool) -> String {
    let mut class = String::from("switch");
    if on {
        class.push_str(" on");
    }
    if disabled {
        class.push_str(" disabled");
    }
    class
}

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique id for label association
fn next_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_unique() {
        let id1 = next_id("input");
        let id2 = next_id("input");
        assert_ne!(id1, id2);
        assert!(id1.starts_with("input-"));
    }

    #[test]
    fn switch_classes() {
        assert_eq!(switch_class(false, false), "switch");
        assert_eq!(switch_class(true, false), "switch on");
        assert_eq!(switch_class(true, true), "switch on disabled");
    }
}
