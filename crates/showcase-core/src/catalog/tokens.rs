//! Design tokens shown on the design page.

use serde::Serialize;

/// A base color family, darkest shade first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub name: &'static str,
    /// Token prefix; shade `i` is named `{prefix}{i}`
    pub prefix: &'static str,
    pub shades: [&'static str; 8],
    pub usage: &'static str,
}

impl ColorPalette {
    /// Token name of shade `index`, e.g. `B1`
    pub fn token(&self, index: usize) -> String {
        format!("{}{}", self.prefix, index)
    }
}

pub static BASE_PALETTES: [ColorPalette; 7] = [
    ColorPalette {
        name: "蓝色系 Blue",
        prefix: "B",
        shades: ["#2E4CB3", "#2E57E6", "#466BEB", "#6080F0", "#879FF5", "#AFC0FA", "#D6DFFF", "#F2F5FF"],
        usage: "主色调，用于主要按钮、链接和重要信息的强调",
    },
    ColorPalette {
        name: "红色系 Red",
        prefix: "R",
        shades: ["#CC3D55", "#E6455F", "#EB5E75", "#F0788B", "#F593A2", "#FAB9C3", "#FFD6DD", "#FFF2F4"],
        usage: "用于错误状态、警告和需要注意的信息",
    },
    ColorPalette {
        name: "橙色系 Orange",
        prefix: "O",
        shades: ["#E57709", "#F58718", "#F5983B", "#F7AD63", "#F7BC81", "#FAD2AA", "#FCE8D4", "#FFF2E5"],
        usage: "用于警告状态和次要强调",
    },
    ColorPalette {
        name: "绿色系 Green",
        prefix: "G",
        shades: ["#31A37D", "#12B881", "#3DCC9D", "#60DBB3", "#8AE6C7", "#A8F0D8", "#C8FAE9", "#E6FFF7"],
        usage: "用于成功状态和积极反馈",
    },
    ColorPalette {
        name: "青色系 Teal",
        prefix: "T",
        shades: ["#1298B3", "#00ABCD", "#42C2DB", "#65D0E6", "#8EE4F5", "#ADF2FF", "#CCF6FF", "#E6FBFF"],
        usage: "用于信息展示和辅助说明",
    },
    ColorPalette {
        name: "群青色系 Ultra",
        prefix: "U",
        shades: ["#6060DB", "#7070FF", "#8585FF", "#9999FF", "#B3B3FF", "#CCCCFF", "#E6E6FF", "#F2F2FF"],
        usage: "用于特殊状态和装饰元素",
    },
    ColorPalette {
        name: "紫色系 Purple",
        prefix: "P",
        shades: ["#884EC2", "#9C53E6", "#B075EB", "#C090F0", "#D0ABF5", "#E1C8FA", "#F2E6FF", "#F9F2FF"],
        usage: "用于高级功能和特殊状态",
    },
];

/// Neutral scale entry (N0..N9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NeutralColor {
    pub color: &'static str,
    pub label: &'static str,
    pub usage: &'static str,
}

pub static NEUTRALS: [NeutralColor; 10] = [
    NeutralColor { color: "#000000", label: "纯黑", usage: "用于特殊场景的纯黑文字" },
    NeutralColor { color: "#1F264D", label: "主要文字", usage: "用于标题、正文等主要文字" },
    NeutralColor { color: "#596080", label: "次要文字", usage: "用于次要信息、说明文字" },
    NeutralColor { color: "#898CA3", label: "辅助文字", usage: "用于辅助说明、占位符" },
    NeutralColor { color: "#B8BCCC", label: "禁用状态", usage: "用于禁用状态的文字和控件" },
    NeutralColor { color: "#D8D9E6", label: "边框线条", usage: "用于边框、分割线" },
    NeutralColor { color: "#E6E9F2", label: "分割线", usage: "用于内容分区、分隔线" },
    NeutralColor { color: "#F3F5FA", label: "背景色", usage: "用于页面背景、卡片背景" },
    NeutralColor { color: "#F7F9FC", label: "浅背景", usage: "用于次要区域背景" },
    NeutralColor { color: "#FFFFFF", label: "纯白", usage: "用于纯白背景、文字反白" },
];

pub const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, 'Noto Sans', sans-serif, 'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol', 'Noto Color Emoji'";

/// Heading level spec: size / weight / line height in px
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingStyle {
    pub level: &'static str,
    pub name: &'static str,
    pub size: u16,
    pub weight: u16,
    pub line_height: u16,
}

impl HeadingStyle {
    /// `24px / 600 / 34px`
    pub fn specs(&self) -> String {
        format!("{}px / {} / {}px", self.size, self.weight, self.line_height)
    }

    /// Inline CSS reproducing the style
    pub fn css(&self) -> String {
        format!(
            "font-size: {}px; font-weight: {}; line-height: {}px;",
            self.size, self.weight, self.line_height
        )
    }
}

pub static HEADINGS: [HeadingStyle; 5] = [
    HeadingStyle { level: "H1", name: "页面标题", size: 24, weight: 600, line_height: 34 },
    HeadingStyle { level: "H2", name: "大模块标题", size: 18, weight: 600, line_height: 24 },
    HeadingStyle { level: "H3", name: "卡片标题", size: 16, weight: 600, line_height: 22 },
    HeadingStyle { level: "H4", name: "小标题", size: 16, weight: 500, line_height: 22 },
    HeadingStyle { level: "H5", name: "小尺寸标签", size: 12, weight: 500, line_height: 16 },
];

/// Corner radius token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Radius {
    pub name: &'static str,
    pub value: &'static str,
    pub usage: &'static str,
}

pub static RADII: [Radius; 4] = [
    Radius { name: "无圆角", value: "0px", usage: "需要棱角分明的界面元素" },
    Radius { name: "小圆角", value: "2px", usage: "按钮、输入框等小尺寸元素" },
    Radius { name: "大圆角", value: "4px", usage: "弹窗、卡片等大尺寸元素" },
    Radius { name: "圆形", value: "50%", usage: "头像、图标等需要圆形的元素" },
];

/// Elevation levels: (name, box-shadow value, usage)
pub static SHADOWS: [(&str, &str, &str); 3] = [
    (
        "一级阴影",
        "0px 0px 1px rgba(31, 38, 76, 0.16), 0px 2px 5px rgba(31, 38, 76, 0.03), 0px 3px 8px rgba(31, 38, 76, 0.04)",
        "物体与底面重叠，适用于卡片hover效果",
    ),
    (
        "二级阴影",
        "0px 0px 1px rgba(31, 38, 76, 0.16), 0px 4px 12px rgba(31, 38, 76, 0.06), 0px 8px 20px -8px rgba(31, 38, 76, 0.06)",
        "物体位于中层级，适用于下拉面板菜单",
    ),
    (
        "三级阴影",
        "0px 0px 1px rgba(31, 38, 76, 0.16), 0px 8px 24px rgba(31, 38, 76, 0.04), 0px 12px 32px -12px rgba(31, 38, 76, 0.04)",
        "物体位于高层级，适用于对话框等全局性浮层",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_tokens() {
        assert_eq!(BASE_PALETTES[0].token(1), "B1");
        assert_eq!(BASE_PALETTES[0].shades[1], "#2E57E6");
    }

    #[test]
    fn shades_are_hex_colors() {
        for palette in BASE_PALETTES.iter() {
            for shade in palette.shades {
                assert_eq!(shade.len(), 7, "{} in {}", shade, palette.name);
                assert!(shade.starts_with('#'));
            }
        }
    }

    #[test]
    fn heading_specs() {
        assert_eq!(HEADINGS[0].specs(), "24px / 600 / 34px");
        assert_eq!(HEADINGS[4].css(), "font-size: 12px; font-weight: 500; line-height: 16px;");
    }
}
