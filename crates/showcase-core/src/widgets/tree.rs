//! Expandable tree with single selection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Node of the tree. A node with `children` is expandable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(default)]
    pub is_folder: bool,
}

impl TreeNode {
    pub fn file(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            children: None,
            is_folder: false,
        }
    }

    pub fn folder(id: &str, name: &str, children: Vec<TreeNode>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            children: Some(children),
            is_folder: true,
        }
    }

    pub fn is_expandable(&self) -> bool {
        self.children.is_some()
    }
}

/// A row as rendered: the node and its depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow<'a> {
    pub node: &'a TreeNode,
    pub depth: usize,
    pub expanded: bool,
}

impl TreeRow<'_> {
    /// Left padding in px
    pub fn indent(&self) -> usize {
        self.depth * 16 + 8
    }
}

/// Expansion and selection state over a forest of nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeState {
    roots: Vec<TreeNode>,
    expanded: HashSet<String>,
    selected: Option<String>,
}

impl TreeState {
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self {
            roots,
            ..Default::default()
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    fn find<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
        for node in nodes {
            if node.id == id {
                return Some(node);
            }
            if let Some(found) = node.children.as_deref().and_then(|c| Self::find(c, id)) {
                return Some(found);
            }
        }
        None
    }

    /// Click on a node: select it, and toggle expansion if it has children.
    /// Returns false for unknown ids.
    pub fn click(&mut self, id: &str) -> bool {
        let Some(node) = Self::find(&self.roots, id) else {
            return false;
        };
        if node.is_expandable() && !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Depth-first rows of every visible node
    pub fn visible_rows(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        self.collect(&self.roots, 0, &mut rows);
        rows
    }

    fn collect<'a>(&'a self, nodes: &'a [TreeNode], depth: usize, rows: &mut Vec<TreeRow<'a>>) {
        for node in nodes {
            let expanded = self.expanded.contains(&node.id);
            rows.push(TreeRow {
                node,
                depth,
                expanded,
            });
            if expanded {
                if let Some(children) = node.children.as_deref() {
                    self.collect(children, depth + 1, rows);
                }
            }
        }
    }
}

/// File tree used by the gallery demo
pub fn demo_tree() -> Vec<TreeNode> {
    vec![
        TreeNode::folder(
            "1",
            "Documents",
            vec![
                TreeNode::folder(
                    "2",
                    "Work",
                    vec![
                        TreeNode::file("3", "report.pdf"),
                        TreeNode::file("4", "meeting.doc"),
                    ],
                ),
                TreeNode::folder(
                    "5",
                    "Personal",
                    vec![
                        TreeNode::file("6", "photos.jpg"),
                        TreeNode::file("7", "notes.txt"),
                    ],
                ),
            ],
        ),
        TreeNode::folder(
            "8",
            "Downloads",
            vec![
                TreeNode::file("9", "software.exe"),
                TreeNode::file("10", "music.mp3"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &TreeState) -> Vec<(&str, usize)> {
        state
            .visible_rows()
            .into_iter()
            .map(|row| (row.node.id.as_str(), row.depth))
            .collect()
    }

    #[test]
    fn collapsed_by_default() {
        let state = TreeState::new(demo_tree());
        assert_eq!(ids(&state), vec![("1", 0), ("8", 0)]);
    }

    #[test]
    fn click_expands_and_selects() {
        let mut state = TreeState::new(demo_tree());
        assert!(state.click("1"));
        assert!(state.click("2"));
        assert_eq!(
            ids(&state),
            vec![("1", 0), ("2", 1), ("3", 2), ("4", 2), ("5", 1), ("8", 0)]
        );
        assert_eq!(state.selected(), Some("2"));

        // Collapsing a parent hides its subtree but keeps the child's expansion.
        state.click("1");
        assert_eq!(ids(&state), vec![("1", 0), ("8", 0)]);
        state.click("1");
        assert!(state.is_expanded("2"));
    }

    #[test]
    fn leaf_click_only_selects() {
        let mut state = TreeState::new(demo_tree());
        state.click("8");
        state.click("9");
        assert_eq!(state.selected(), Some("9"));
        assert!(!state.is_expanded("9"));
        assert!(!state.click("404"));
    }

    #[test]
    fn indent_grows_with_depth() {
        let mut state = TreeState::new(demo_tree());
        state.click("8");
        let rows = state.visible_rows();
        let indent_of = |id: &str| {
            rows.iter()
                .find(|row| row.node.id == id)
                .map(|row| (row.depth, row.indent()))
        };
        assert_eq!(indent_of("1"), Some((0, 8)));
        assert_eq!(indent_of("8"), Some((0, 8)));
        assert_eq!(rows[2].depth, 1);
        assert_eq!(rows[2].indent(), 24);
    }
}
