//! File tree with expandable folders

use dioxus::prelude::*;
use showcase_core::widgets::{TreeNode, TreeState};

#[derive(Clone, PartialEq, Props)]
pub struct TreeProps {
    pub nodes: Vec<TreeNode>,
    /// Called with the id of the clicked node
    #[props(default)]
    pub on_select: Option<EventHandler<String>>,
}

/// Clicking a row selects it; folders also toggle open/closed
#[component]
pub fn Tree(props: TreeProps) -> Element {
    let mut state = use_signal(|| TreeState::new(props.nodes.clone()));
    let on_select = props.on_select;

    let rows: Vec<(String, String, usize, bool, bool, bool)> = {
        let current = state.read();
        let selected = current.selected().map(str::to_string);
        current
            .visible_rows()
            .iter()
            .map(|row| {
                (
                    row.node.id.clone(),
                    row.node.name.clone(),
                    row.indent(),
                    row.node.is_expandable(),
                    row.expanded,
                    selected.as_deref() == Some(row.node.id.as_str()),
                )
            })
            .collect()
    };

    rsx! {
        ul { class: "tree", role: "tree",
            for (id, name, indent, expandable, expanded, selected) in rows {
                li {
                    key: "{id}",
                    class: if selected { "tree-row selected" } else { "tree-row" },
                    role: "treeitem",
                    style: "padding-left: {indent}px",
                    onclick: {
                        let id = id.clone();
                        move |_| {
                            if state.write().click(&id) {
                                if let Some(handler) = &on_select {
                                    handler.call(id.clone());
                                }
                            }
                        }
                    },
                    span { class: "tree-caret", {caret(expandable, expanded)} }
                    span { class: "tree-icon", {node_icon(expandable, expanded)} }
                    span { class: "tree-name", "{name}" }
                }
            }
        }
    }
}

fn caret(expandable: bool, expanded: bool) -> &'static str {
    match (expandable, expanded) {
        (false, _) => "",
        (true, false) => "▸",
        (true, true) => "▾",
    }
}

fn node_icon(expandable: bool, expanded: bool) -> &'static str {
    match (expandable, expanded) {
        (false, _) => "📄",
        (true, false) => "📁",
        (true, true) => "📂",
    }
}
