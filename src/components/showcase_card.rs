use dioxus::prelude::*;
use showcase_core::catalog::CardSpan;

/// White card with a heading, anchored by the section id
#[component]
pub fn ShowcaseCard(
    id: String,
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default = CardSpan::Single)] span: CardSpan,
    #[props(default = false)] active: bool,
    children: Element,
) -> Element {
    let class = if active {
        format!("showcase-card {} active", span.class())
    } else {
        format!("showcase-card {}", span.class())
    };

    rsx! {
        article { id: "{id}", class: "{class}",
            h2 { class: "card-title", "{title}" }
            if let Some(description) = description {
                p { class: "card-description", "{description}" }
            }
            div { class: "card-body", {children} }
        }
    }
}
