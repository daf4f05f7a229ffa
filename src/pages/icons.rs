//! Icon gallery page.
//!
//! Icon groups laid out in masonry columns; the column count follows the
//! window width. Clicking a tile copies its usage snippet.

use std::time::Duration;

use dioxus::prelude::*;
use showcase_core::catalog::{icon_group, Icon};
use showcase_core::widgets::masonry::{columns_for_width, distribute};
use showcase_core::Page;

use crate::components::{scroll_to_section, PageLayout, ShowcaseCard};

/// Reports the window width now and on every resize
const WIDTH_LISTENER: &str = r#"
dioxus.send(window.innerWidth);
window.addEventListener('resize', () => dioxus.send(window.innerWidth));
"#;

#[component]
pub fn IconsPage(active: String) -> Element {
    let mut columns = use_signal(|| 3usize);

    use_future(move || async move {
        let mut listener = document::eval(WIDTH_LISTENER);
        while let Ok(width) = listener.recv::<f64>().await {
            let next = columns_for_width(width);
            if next != *columns.peek() {
                tracing::debug!(width, columns = next, "Icon grid columns changed");
                columns.set(next);
            }
        }
    });

    use_effect(use_reactive!(|active| scroll_to_section(&active)));

    let laid_out = distribute(Page::Icons.sections().iter(), columns());

    rsx! {
        PageLayout { page: Page::Icons, active: active.clone(),
            div { class: "masonry",
                for (index, column) in laid_out.into_iter().enumerate() {
                    div { key: "{index}", class: "masonry-column",
                        for section in column {
                            ShowcaseCard {
                                key: "{section.id}",
                                id: section.id.to_string(),
                                title: section.title.to_string(),
                                description: section.description.to_string(),
                                active: section.id == active,
                                div { class: "icon-grid",
                                    for icon in icon_group(section.id).map(|g| g.icons).unwrap_or_default() {
                                        IconTile { key: "{icon.name}", icon: *icon }
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

#[component]
fn IconTile(icon: Icon) -> Element {
    let mut copied = use_signal(|| false);

    let copy_snippet = move |_| {
        let snippet = icon.snippet();
        spawn(async move {
            // Use arboard for cross-platform clipboard access
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => match clipboard.set_text(&snippet) {
                    Ok(()) => {
                        tracing::info!("Copied {} to clipboard", icon.name);
                        copied.set(true);
                        tokio::time::sleep(Duration::from_secs(2)).await;
                        copied.set(false);
                    }
                    Err(e) => tracing::warn!("Clipboard write failed: {}", e),
                },
                Err(e) => tracing::warn!("Clipboard not available: {}", e),
            }
        });
    };

    rsx! {
        button {
            class: if copied() { "icon-tile copied" } else { "icon-tile" },
            "data-icon": "{icon.name}",
            title: "{icon.snippet()}",
            onclick: copy_snippet,
            span { class: "icon-glyph", {glyph(icon.lucide)} }
            span { class: "icon-name", if copied() { "已复制" } else { "{icon.name}" } }
        }
    }
}

/// Placeholder glyph: the capital letters of the Lucide component name
fn glyph(lucide: &str) -> String {
    let capitals: String = lucide.chars().filter(|c| c.is_ascii_uppercase()).take(2).collect();
    if capitals.is_empty() {
        lucide.chars().take(1).collect()
    } else {
        capitals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_uses_capitals() {
        assert_eq!(glyph("ArrowRight"), "AR");
        assert_eq!(glyph("Plus"), "P");
        assert_eq!(glyph("MessageSquareText"), "MS");
        assert_eq!(glyph("x"), "x");
    }
}
