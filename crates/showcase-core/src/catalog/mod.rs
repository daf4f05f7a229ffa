//! Static catalog: section lists per page, top navigation, icon groups and
//! design tokens.

mod icons;
mod tokens;

use serde::Serialize;

use crate::navigation::Page;

pub use icons::{icon_group, Icon, IconGroup, ICON_GROUPS};
pub use tokens::{
    ColorPalette, HeadingStyle, NeutralColor, Radius, BASE_PALETTES, FONT_FAMILY, HEADINGS,
    NEUTRALS, RADII, SHADOWS,
};

/// One addressable section of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Fragment id, unique within its page
    pub id: &'static str,
    /// Sidebar label
    pub title: &'static str,
    /// Short description shown under the heading (may be empty)
    pub description: &'static str,
}

impl Section {
    const fn new(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            description: "",
        }
    }

    const fn described(id: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            id,
            title,
            description,
        }
    }

    /// Canonical href of this section on `page`
    pub fn href(&self, page: Page) -> String {
        format!("#{}/{}", page.segment(), self.id)
    }
}

pub static DESIGN_SECTIONS: [Section; 3] = [
    Section::new("color", "Colors 颜色"),
    Section::new("typography", "Typography 字体"),
    Section::new("border", "Border 边框"),
];

pub static COMPONENT_SECTIONS: [Section; 17] = [
    Section::new("button", "Button 按钮"),
    Section::new("radio", "Radio 单选框"),
    Section::new("checkbox", "Checkbox 多选框"),
    Section::new("input", "Input 输入框"),
    Section::new("switch", "Switch 开关"),
    Section::new("slider", "Slider 滑块"),
    Section::new("progress", "Progress 进度条"),
    Section::new("select", "Select 选择器"),
    Section::new("datepicker", "DatePicker 日期选择"),
    Section::new("table", "Table 表格"),
    Section::new("form", "Form 表单"),
    Section::new("tag", "Tag 标签"),
    Section::new("pagination", "Pagination 分页"),
    Section::new("upload", "Upload 上传"),
    Section::new("timepicker", "TimePicker 时间选择器"),
    Section::new("transfer", "Transfer 穿梭框"),
    Section::new("tree", "Tree 树形控件"),
];

pub static ICON_SECTIONS: [Section; 7] = [
    Section::described("direction", "Direction - 方向指示", "用于指示方向、展开/收起等操作的图标"),
    Section::described("status", "Status - 状态指示", "用于表示不同状态的图标"),
    Section::described("action", "Action - 操作图标", "用于表示可交互操作的图标"),
    Section::described("common", "Common - 通用图标", "常用的通用功能图标"),
    Section::described("medical", "Medical - 医疗图标", "医疗和健康相关的图标"),
    Section::described("database", "Database - 数据库", "数据库和数据分析相关的图标"),
    Section::described("ai", "AI - 人工智能", "人工智能和机器学习相关的图标"),
];

pub static EXAMPLE_SECTIONS: [Section; 4] = [
    Section::described("login", "登录界面", "展示各种登录、注册、找回密码等用户认证界面"),
    Section::described("chat", "对话界面", "展示聊天、对话、消息等交互界面"),
    Section::described("learningAssistant", "LearningAssistant界面", "展示学习助手等界面"),
    Section::described("exam", "模拟考试", "展示模拟考试界面"),
];

pub static MOBILE_SECTIONS: [Section; 10] = [
    Section::new("bottom-nav", "BottomNav 底部导航"),
    Section::new("button", "Button 按钮"),
    Section::new("radio", "Radio 单选框"),
    Section::new("checkbox", "Checkbox 多选框"),
    Section::new("input", "Input 输入框"),
    Section::new("switch", "Switch 开关"),
    Section::new("slider", "Slider 滑块"),
    Section::new("progress", "Progress 进度条"),
    Section::new("select", "Select 选择器"),
    Section::new("tag", "Tag 标签"),
];

/// Declared sections for a page, default first
pub fn sections_for(page: Page) -> &'static [Section] {
    match page {
        Page::Design => &DESIGN_SECTIONS,
        Page::Components => &COMPONENT_SECTIONS,
        Page::Icons => &ICON_SECTIONS,
        Page::Examples => &EXAMPLE_SECTIONS,
        Page::MobileComponents => &MOBILE_SECTIONS,
    }
}

/// Pages linked from the top navigation bar. The desktop window has no
/// address bar, so every page needs an entry here to be reachable.
pub const TOP_NAV: [Page; 5] = Page::ALL;

/// Whether a top navigation entry for `page` is highlighted for `current`
pub fn is_nav_active(page: Page, current: &str) -> bool {
    let href = page.href();
    current == href || current.starts_with(&format!("{}/", href))
}

/// Grid footprint of a component card in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardSpan {
    Single,
    Wide,
    Full,
}

impl CardSpan {
    pub fn class(&self) -> &'static str {
        match self {
            CardSpan::Single => "card-span-1",
            CardSpan::Wide => "card-span-2",
            CardSpan::Full => "card-span-full",
        }
    }
}

/// Card span for a component gallery section
pub fn card_span(section_id: &str) -> CardSpan {
    match section_id {
        "table" => CardSpan::Full,
        "transfer" | "form" => CardSpan::Wide,
        _ => CardSpan::Single,
    }
}

/// Route table entry, as printed by `--list-routes`
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub fragment: String,
    pub page: Page,
    pub section: &'static str,
    pub title: &'static str,
}

/// Every canonical fragment the showcase accepts
pub fn routes() -> Vec<RouteEntry> {
    Page::ALL
        .into_iter()
        .flat_map(|page| {
            page.sections().iter().map(move |section| RouteEntry {
                fragment: section.href(page),
                page,
                section: section.id,
                title: section.title,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_unique_per_page() {
        for page in Page::ALL {
            let ids: HashSet<_> = page.sections().iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), page.sections().len(), "duplicate id on {}", page);
        }
    }

    #[test]
    fn section_ids_have_no_separator() {
        for route in routes() {
            assert!(!route.section.contains('/'));
            assert!(!route.section.is_empty());
        }
    }

    #[test]
    fn nav_active_matches_prefix_with_separator() {
        assert!(is_nav_active(Page::Design, "#design"));
        assert!(is_nav_active(Page::Design, "#design/color"));
        assert!(!is_nav_active(Page::Design, "#designer"));
        assert!(!is_nav_active(Page::Components, "#design/color"));
    }

    #[test]
    fn every_page_has_a_top_nav_entry() {
        for page in Page::ALL {
            assert!(TOP_NAV.contains(&page), "{} missing from top navigation", page);
        }
        let labels: HashSet<_> = TOP_NAV.iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), TOP_NAV.len());
    }

    #[test]
    fn card_spans() {
        assert_eq!(card_span("table"), CardSpan::Full);
        assert_eq!(card_span("transfer"), CardSpan::Wide);
        assert_eq!(card_span("button"), CardSpan::Single);
    }

    #[test]
    fn route_count_matches_sections() {
        let total: usize = Page::ALL.iter().map(|p| p.sections().len()).sum();
        assert_eq!(routes().len(), total);
        assert_eq!(routes()[0].fragment, "#design/color");
    }
}
