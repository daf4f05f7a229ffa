//! Button Components
//!
//! Button styles from the design tokens:
//! - Default: filled primary blue (B1)
//! - Destructive: filled red for emergency actions
//! - Outline / Secondary / Ghost / Link: progressively lighter emphasis

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action - filled B1
    #[default]
    Default,
    /// Dangerous or urgent action - filled R1
    Destructive,
    /// Bordered, transparent background
    Outline,
    /// Neutral filled background
    Secondary,
    /// No border or background until hovered
    Ghost,
    /// Looks like a text link
    Link,
}

impl ButtonVariant {
    /// Every variant, in gallery order
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Default,
        ButtonVariant::Destructive,
        ButtonVariant::Outline,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn btn-default",
            ButtonVariant::Destructive => "btn btn-destructive",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Link => "btn btn-link",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    /// Square, for a single icon
    Icon,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "",
            ButtonSize::Small => "btn-sm",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Destructive,
///         onclick: move |_| call_for_help(),
///         "紧急呼叫"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(&[
        props.variant.class(),
        props.size.class(),
        props.class.as_deref().unwrap_or(""),
    ]);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Join non-empty class fragments with single spaces
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Default.class(), "btn btn-default");
        assert_eq!(ButtonVariant::Destructive.class(), "btn btn-destructive");
        assert_eq!(ButtonVariant::Link.class(), "btn btn-link");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
    }

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(join_classes(&["btn btn-outline", "", "extra"]), "btn btn-outline extra");
        assert_eq!(join_classes(&["", ""]), "");
    }
}
