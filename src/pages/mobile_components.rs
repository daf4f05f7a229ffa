//! Mobile component variants, rendered in a phone-width frame.

use dioxus::prelude::*;
use showcase_core::Page;
use showcase_ui::{Badge, BadgeColor, Button, ButtonVariant, Checkbox, Input, Switch};

use crate::components::{scroll_to_section, PageLayout, ShowcaseCard};

/// Bottom navigation tabs: (glyph, label)
const BOTTOM_TABS: [(&str, &str); 5] = [
    ("🏠", "首页"),
    ("💬", "咨询"),
    ("📈", "健康"),
    ("👑", "会员"),
    ("👤", "我的"),
];

#[component]
pub fn MobileComponentsPage(active: String) -> Element {
    use_effect(use_reactive!(|active| scroll_to_section(&active)));

    rsx! {
        PageLayout { page: Page::MobileComponents, active: active.clone(),
            div { class: "card-grid mobile",
                for section in Page::MobileComponents.sections().iter() {
                    ShowcaseCard {
                        key: "{section.id}",
                        id: section.id.to_string(),
                        title: section.title.to_string(),
                        active: section.id == active,
                        div { class: "phone-frame", {mobile_demo(section.id)} }
                    }
                }
            }
        }
    }
}

fn mobile_demo(section_id: &str) -> Element {
    match section_id {
        "bottom-nav" => rsx! { BottomNavDemo {} },
        "button" => rsx! {
            div { class: "demo-column",
                Button { class: "mobile".to_string(), "主要按钮" }
                Button { class: "mobile".to_string(), variant: ButtonVariant::Outline, "次要按钮" }
                Button { class: "mobile".to_string(), disabled: true, "禁用按钮" }
            }
        },
        "radio" => rsx! { MobileRadioDemo {} },
        "checkbox" => rsx! { MobileCheckboxDemo {} },
        "input" => rsx! { MobileInputDemo {} },
        "switch" => rsx! { MobileSwitchDemo {} },
        "slider" => rsx! {
            input { class: "slider mobile", r#type: "range", min: "0", max: "100", value: "40" }
        },
        "progress" => rsx! {
            div { class: "progress mobile",
                div { class: "progress-bar", style: "width: 70%" }
            }
        },
        "select" => rsx! {
            select { class: "select mobile",
                option { "本周" }
                option { "本月" }
                option { "近三个月" }
            }
        },
        "tag" => rsx! {
            div { class: "demo-row",
                Badge { color: BadgeColor::Teal, "血压正常" }
                Badge { color: BadgeColor::Orange, "待复查" }
                Badge { color: BadgeColor::Red, "偏高" }
            }
        },
        other => {
            tracing::warn!("No demo for mobile section '{}'", other);
            rsx! {}
        }
    }
}

#[component]
fn BottomNavDemo() -> Element {
    let mut current = use_signal(|| 0usize);

    rsx! {
        nav { class: "bottom-nav",
            for (index, (glyph, label)) in BOTTOM_TABS.iter().enumerate() {
                button {
                    key: "{label}",
                    class: if current() == index { "bottom-nav-item active" } else { "bottom-nav-item" },
                    onclick: move |_| current.set(index),
                    span { class: "bottom-nav-icon", "{glyph}" }
                    span { class: "bottom-nav-label", "{label}" }
                }
            }
        }
    }
}

#[component]
fn MobileRadioDemo() -> Element {
    let mut gender = use_signal(|| "female");

    rsx! {
        div { class: "demo-row",
            for (value, label) in [("female", "女"), ("male", "男")] {
                label { key: "{value}", class: "radio mobile",
                    input {
                        r#type: "radio",
                        name: "mobile-gender",
                        checked: gender() == value,
                        onchange: move |_| gender.set(value),
                    }
                    span { "{label}" }
                }
            }
        }
    }
}

#[component]
fn MobileCheckboxDemo() -> Element {
    let mut agreed = use_signal(|| false);

    rsx! {
        Checkbox {
            checked: agreed(),
            onchange: move |v| agreed.set(v),
            label: "我已阅读并同意《隐私政策》".to_string(),
        }
    }
}

#[component]
fn MobileInputDemo() -> Element {
    let mut phone = use_signal(String::new);

    rsx! {
        Input {
            value: phone(),
            oninput: move |s| phone.set(s),
            input_type: "tel".to_string(),
            placeholder: "请输入手机号".to_string(),
            class: "mobile".to_string(),
        }
    }
}

#[component]
fn MobileSwitchDemo() -> Element {
    let mut reminder = use_signal(|| true);

    rsx! {
        label { class: "switch-row",
            span { "服药提醒" }
            Switch { on: reminder(), ontoggle: move |v| reminder.set(v) }
        }
    }
}
