//! Top navigation bar
//!
//! Brand on the left, then the top-level page links. A link is active while
//! the fragment is its href or below it (`#components/...`).

use dioxus::prelude::*;
use showcase_core::catalog::{is_nav_active, TOP_NAV};
use showcase_core::Page;

use crate::context::{use_fragment, use_navigator};

#[component]
pub fn TopNav() -> Element {
    let mut navigator = use_navigator();
    let fragment = use_fragment();

    let mut open_page = move |page: Page| {
        let view = navigator.write().open_page(page);
        tracing::debug!(page = %view.page, section = %view.section, "Top navigation");
    };

    rsx! {
        nav { class: "top-nav",
            div { class: "top-nav-brand",
                span { class: "brand-mark", "开" }
                h1 { class: "brand-title", "开心健康 设计规范组件库" }
            }
            div { class: "top-nav-links",
                for page in TOP_NAV {
                    a {
                        key: "{page.segment()}",
                        class: if is_nav_active(page, &fragment) { "top-nav-link active" } else { "top-nav-link" },
                        href: "{page.href()}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            open_page(page);
                        },
                        "{page.label()}"
                    }
                }
            }
            div { class: "top-nav-history",
                button {
                    class: "history-btn",
                    title: "后退",
                    onclick: move |_| {
                        let _ = document::eval("window.history.back();");
                    },
                    "←"
                }
                button {
                    class: "history-btn",
                    title: "前进",
                    onclick: move |_| {
                        let _ = document::eval("window.history.forward();");
                    },
                    "→"
                }
            }
        }
    }
}
