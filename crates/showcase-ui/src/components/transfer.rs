//! Transfer (穿梭框)
//!
//! Two checkable lists with per-side search and move buttons between them.

use dioxus::prelude::*;
use showcase_core::widgets::{Side, TransferItem, TransferState};

use super::button::{Button, ButtonSize, ButtonVariant};
use super::input::SearchInput;

#[derive(Clone, PartialEq, Props)]
pub struct TransferProps {
    /// Every item; all start on the source side
    pub items: Vec<TransferItem>,
    #[props(default = "可选项目".to_string())]
    pub source_title: String,
    #[props(default = "已选项目".to_string())]
    pub target_title: String,
}

#[component]
pub fn Transfer(props: TransferProps) -> Element {
    let mut state = use_signal(|| TransferState::new(props.items.clone()));

    let can_move_right = state.read().can_move(Side::Source);
    let can_move_left = state.read().can_move(Side::Target);

    rsx! {
        div { class: "transfer",
            TransferList { state: state, side: Side::Source, title: props.source_title.clone() }
            div { class: "transfer-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Icon,
                    disabled: !can_move_right,
                    onclick: move |_| {
                        state.write().move_to_target();
                        tracing::debug!(target_keys = ?state.read().target_keys(), "Transfer moved to target");
                    },
                    "›"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Icon,
                    disabled: !can_move_left,
                    onclick: move |_| {
                        state.write().move_to_source();
                        tracing::debug!(target_keys = ?state.read().target_keys(), "Transfer moved to source");
                    },
                    "‹"
                }
            }
            TransferList { state: state, side: Side::Target, title: props.target_title.clone() }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TransferListProps {
    state: Signal<TransferState>,
    side: Side,
    title: String,
}

#[component]
fn TransferList(props: TransferListProps) -> Element {
    let mut state = props.state;
    let side = props.side;

    let (items, search): (Vec<(TransferItem, bool)>, String) = {
        let current = state.read();
        let items = current
            .items(side)
            .into_iter()
            .map(|item| (item.clone(), current.is_checked(side, &item.key)))
            .collect();
        (items, current.search(side).to_string())
    };
    let count = items.len();

    rsx! {
        div { class: "transfer-list",
            div { class: "transfer-header",
                span { class: "transfer-title", "{props.title}" }
                span { class: "transfer-count", "{count} 项" }
            }
            SearchInput {
                value: search,
                oninput: move |value: String| state.write().set_search(side, &value),
            }
            ul { class: "transfer-items",
                if items.is_empty() {
                    li { class: "transfer-empty", "暂无数据" }
                }
                for (item, checked) in items {
                    li {
                        key: "{item.key}",
                        class: if item.disabled { "transfer-item disabled" } else { "transfer-item" },
                        label {
                            input {
                                r#type: "checkbox",
                                checked: checked,
                                disabled: item.disabled,
                                onchange: {
                                    let key = item.key.clone();
                                    move |e: FormEvent| state.write().set_checked(side, &key, e.checked())
                                },
                            }
                            span { "{item.title}" }
                        }
                    }
                }
            }
        }
    }
}
