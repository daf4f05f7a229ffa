//! Icon gallery groups.
//!
//! Each icon is listed by its display name and the Lucide component it is
//! drawn from. Clicking a tile copies the component usage snippet.

use serde::Serialize;

/// A single icon: display name and Lucide component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub name: &'static str,
    pub lucide: &'static str,
}

impl Icon {
    const fn new(name: &'static str, lucide: &'static str) -> Self {
        Self { name, lucide }
    }

    /// Snippet placed on the clipboard when the tile is clicked
    pub fn snippet(&self) -> String {
        format!("<{} className=\"w-5 h-5\" />", self.lucide)
    }
}

/// Icons belonging to one icon-page section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconGroup {
    /// Matching section id on the icons page
    pub section: &'static str,
    pub icons: &'static [Icon],
}

pub static ICON_GROUPS: [IconGroup; 7] = [
    IconGroup {
        section: "direction",
        icons: &[
            Icon::new("arrow-right", "ArrowRight"),
            Icon::new("arrow-left", "ArrowLeft"),
            Icon::new("arrow-up", "ArrowUp"),
            Icon::new("arrow-down", "ArrowDown"),
            Icon::new("chevron-right", "ChevronRight"),
            Icon::new("chevron-left", "ChevronLeft"),
            Icon::new("chevron-up", "ChevronUp"),
            Icon::new("chevron-down", "ChevronDown"),
        ],
    },
    IconGroup {
        section: "status",
        icons: &[
            Icon::new("check", "Check"),
            Icon::new("x", "X"),
            Icon::new("alert-circle", "AlertCircle"),
            Icon::new("info", "Info"),
            Icon::new("loading", "RefreshCw"),
        ],
    },
    IconGroup {
        section: "action",
        icons: &[
            Icon::new("add", "Plus"),
            Icon::new("minus", "Minus"),
            Icon::new("edit", "Edit"),
            Icon::new("delete", "Trash"),
            Icon::new("search", "Search"),
            Icon::new("settings", "Settings"),
            Icon::new("share", "Share"),
            Icon::new("download", "Download"),
            Icon::new("upload", "Upload"),
            Icon::new("external-link", "ExternalLink"),
            Icon::new("copy", "Copy"),
            Icon::new("save", "Save"),
            Icon::new("filter", "Filter"),
            Icon::new("sort", "ArrowUpDown"),
        ],
    },
    IconGroup {
        section: "common",
        icons: &[
            Icon::new("user", "User"),
            Icon::new("mail", "Mail"),
            Icon::new("phone", "Phone"),
            Icon::new("calendar", "Calendar"),
            Icon::new("clock", "Clock"),
            Icon::new("home", "Home"),
            Icon::new("menu", "Menu"),
        ],
    },
    IconGroup {
        section: "medical",
        icons: &[
            Icon::new("heart", "Heart"),
            Icon::new("stethoscope", "Stethoscope"),
            Icon::new("pill", "Pill"),
            Icon::new("thermometer", "Thermometer"),
            Icon::new("activity", "Activity"),
            Icon::new("brain", "Brain"),
            Icon::new("syringe", "Syringe"),
            Icon::new("medical-cross", "Cross"),
        ],
    },
    IconGroup {
        section: "database",
        icons: &[
            Icon::new("database", "Database"),
            Icon::new("server", "Server"),
            Icon::new("hard-drive", "HardDrive"),
            Icon::new("folder-tree", "FolderTree"),
            Icon::new("table", "Table"),
            Icon::new("bar-chart", "BarChart"),
            Icon::new("line-chart", "LineChart"),
            Icon::new("pie-chart", "PieChart"),
        ],
    },
    IconGroup {
        section: "ai",
        icons: &[
            Icon::new("cpu", "Cpu"),
            Icon::new("circuit-board", "CircuitBoard"),
            Icon::new("bot", "Bot"),
            Icon::new("network", "Network"),
            Icon::new("lightbulb", "Lightbulb"),
            Icon::new("sparkles", "Sparkles"),
            Icon::new("workflow", "Workflow"),
            Icon::new("binary", "Binary"),
        ],
    },
];

/// Icon group for an icons-page section id
pub fn icon_group(section: &str) -> Option<&'static IconGroup> {
    ICON_GROUPS.iter().find(|group| group.section == section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ICON_SECTIONS;

    #[test]
    fn every_icon_section_has_a_group() {
        for section in ICON_SECTIONS.iter() {
            let group = icon_group(section.id).expect("group for section");
            assert!(!group.icons.is_empty());
        }
        assert_eq!(ICON_GROUPS.len(), ICON_SECTIONS.len());
    }

    #[test]
    fn snippet_uses_lucide_component() {
        let group = icon_group("status").unwrap();
        let loading = group.icons.iter().find(|i| i.name == "loading").unwrap();
        assert_eq!(loading.snippet(), "<RefreshCw className=\"w-5 h-5\" />");
    }
}
