//! Pager with previous/next and numbered pages

use dioxus::prelude::*;
use showcase_core::widgets::Pagination as PaginationState;

#[derive(Clone, PartialEq, Props)]
pub struct PaginationProps {
    pub total: u32,
    #[props(default = 1)]
    pub initial: u32,
    #[props(default)]
    pub onchange: Option<EventHandler<u32>>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let mut state = use_signal(|| PaginationState::new(props.total, props.initial));
    let current = state.read().current();
    let pages: Vec<u32> = state.read().pages().collect();
    let has_previous = state.read().has_previous();
    let has_next = state.read().has_next();
    let onchange = props.onchange;

    let report = move |page: u32| {
        if let Some(handler) = &onchange {
            handler.call(page);
        }
    };

    rsx! {
        nav { class: "pagination", "aria-label": "分页",
            button {
                class: "page-btn",
                disabled: !has_previous,
                onclick: move |_| {
                    state.write().previous();
                    report(state.read().current());
                },
                "上一页"
            }
            for page in pages {
                button {
                    key: "{page}",
                    class: if page == current { "page-btn active" } else { "page-btn" },
                    onclick: move |_| {
                        if let Err(err) = state.write().go_to(page) {
                            tracing::warn!(%err, "Pagination rejected page");
                            return;
                        }
                        report(page);
                    },
                    "{page}"
                }
            }
            button {
                class: "page-btn",
                disabled: !has_next,
                onclick: move |_| {
                    state.write().next();
                    report(state.read().current());
                },
                "下一页"
            }
        }
    }
}
