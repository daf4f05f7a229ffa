//! Tag / badge pills

use dioxus::prelude::*;

/// Badge color, mapped onto the base palettes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeColor {
    #[default]
    Blue,
    Red,
    Orange,
    Green,
    Teal,
    Purple,
    Neutral,
}

impl BadgeColor {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeColor::Blue => "badge badge-blue",
            BadgeColor::Red => "badge badge-red",
            BadgeColor::Orange => "badge badge-orange",
            BadgeColor::Green => "badge badge-green",
            BadgeColor::Teal => "badge badge-teal",
            BadgeColor::Purple => "badge badge-purple",
            BadgeColor::Neutral => "badge badge-neutral",
        }
    }

    /// Color for an appointment status label
    pub fn for_status(status: &str) -> Self {
        match status {
            "已完成" => BadgeColor::Green,
            "待就诊" => BadgeColor::Blue,
            "待付款" => BadgeColor::Orange,
            "已取消" => BadgeColor::Red,
            _ => BadgeColor::Neutral,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub color: BadgeColor,
    pub children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    rsx! {
        span { class: "{props.color.class()}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors() {
        assert_eq!(BadgeColor::for_status("已完成"), BadgeColor::Green);
        assert_eq!(BadgeColor::for_status("已取消"), BadgeColor::Red);
        assert_eq!(BadgeColor::for_status("未知"), BadgeColor::Neutral);
    }
}
