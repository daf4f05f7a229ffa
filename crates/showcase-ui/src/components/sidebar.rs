//! Section Sidebar
//!
//! Fixed list of a page's sections with the active one highlighted.
//! Holds no state: the page controller owns the active id and receives clicks.

use dioxus::prelude::*;
use showcase_core::{Page, Section};

/// Properties for the Sidebar component
#[derive(Clone, PartialEq, Props)]
pub struct SidebarProps {
    /// Page the sections belong to (used for hrefs)
    pub page: Page,
    /// Declared sections, in display order
    pub sections: &'static [Section],
    /// Id of the active section
    pub active: String,
    /// Called with the clicked section id
    pub on_select: EventHandler<String>,
}

/// Sidebar navigation list
///
/// Links carry their canonical `#page/section` href so they read correctly,
/// but the click is intercepted and forwarded to `on_select`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Sidebar {
///         page: Page::Icons,
///         sections: Page::Icons.sections(),
///         active: view.section.clone(),
///         on_select: move |id: String| select_section(id),
///     }
/// }
/// ```
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    rsx! {
        aside { class: "sidebar",
            nav { class: "sidebar-nav", "aria-label": "Sections",
                ul { class: "sidebar-list",
                    for section in props.sections.iter() {
                        {
                            let id = section.id;
                            let is_active = props.active == id;
                            let on_select = props.on_select;
                            rsx! {
                                li { key: "{id}",
                                    a {
                                        class: if is_active { "sidebar-link active" } else { "sidebar-link" },
                                        href: "{section.href(props.page)}",
                                        "aria-current": if is_active { "page" } else { "false" },
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            on_select.call(id.to_string());
                                        },
                                        "{section.title}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
