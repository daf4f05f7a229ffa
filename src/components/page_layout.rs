//! Sidebar + content layout shared by every page.

use dioxus::prelude::*;
use showcase_core::Page;
use showcase_ui::Sidebar;

use crate::context::use_navigator;

#[derive(Clone, PartialEq, Props)]
pub struct PageLayoutProps {
    pub page: Page,
    /// Active section id
    pub active: String,
    pub children: Element,
}

/// Page frame: the section sidebar wired to the navigator, and the content.
#[component]
pub fn PageLayout(props: PageLayoutProps) -> Element {
    let mut navigator = use_navigator();

    let select_section = move |id: String| {
        let result = navigator.write().select_section(&id);
        match result {
            Ok(view) => tracing::debug!(section = %view.section, "Sidebar selection"),
            Err(e) => tracing::warn!("Ignoring sidebar selection: {}", e),
        }
    };

    rsx! {
        div { class: "page-layout",
            Sidebar {
                page: props.page,
                sections: props.page.sections(),
                active: props.active.clone(),
                on_select: select_section,
            }
            div { class: "page-content", {props.children} }
        }
    }
}

/// Scroll the card for `section_id` into view (gallery pages show every card)
pub fn scroll_to_section(section_id: &str) {
    let script = format!(
        "document.getElementById({:?})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        section_id
    );
    let _ = document::eval(&script);
}
