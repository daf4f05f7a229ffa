//! Component gallery page.
//!
//! Every component card is rendered in one grid; the active section is
//! highlighted and scrolled into view.

use dioxus::prelude::*;
use rfd::FileDialog;
use showcase_core::catalog::card_span;
use showcase_core::widgets::{table, transfer, tree};
use showcase_core::Page;
use showcase_ui::{
    Badge, BadgeColor, Button, ButtonSize, ButtonVariant, Checkbox, DataTable, Input, Pagination,
    Switch, TimePicker, Transfer, Tree,
};

use crate::components::{scroll_to_section, PageLayout, ShowcaseCard};

#[component]
pub fn ComponentsPage(active: String) -> Element {
    use_effect(use_reactive!(|active| scroll_to_section(&active)));

    rsx! {
        PageLayout { page: Page::Components, active: active.clone(),
            div { class: "card-grid",
                for section in Page::Components.sections().iter() {
                    ShowcaseCard {
                        key: "{section.id}",
                        id: section.id.to_string(),
                        title: section.title.to_string(),
                        span: card_span(section.id),
                        active: section.id == active,
                        {demo_for(section.id)}
                    }
                }
            }
        }
    }
}

fn demo_for(section_id: &str) -> Element {
    match section_id {
        "button" => rsx! { ButtonDemo {} },
        "radio" => rsx! { RadioDemo {} },
        "checkbox" => rsx! { CheckboxDemo {} },
        "input" => rsx! { InputDemo {} },
        "switch" => rsx! { SwitchDemo {} },
        "slider" => rsx! { SliderDemo {} },
        "progress" => rsx! { ProgressDemo {} },
        "select" => rsx! { SelectDemo {} },
        "datepicker" => rsx! { DatePickerDemo {} },
        "table" => rsx! { DataTable { rows: table::demo_appointments() } },
        "form" => rsx! { FormDemo {} },
        "tag" => rsx! { TagDemo {} },
        "pagination" => rsx! { Pagination { total: 10 } },
        "upload" => rsx! { UploadDemo {} },
        "timepicker" => rsx! { TimePicker {} },
        "transfer" => rsx! { Transfer { items: transfer::demo_items() } },
        "tree" => rsx! { Tree { nodes: tree::demo_tree() } },
        other => {
            tracing::warn!("No demo for component section '{}'", other);
            rsx! {}
        }
    }
}

#[component]
fn ButtonDemo() -> Element {
    rsx! {
        div { class: "demo-row",
            for variant in ButtonVariant::ALL {
                Button { variant: variant, {variant_label(variant)} }
            }
        }
        div { class: "demo-row",
            Button { size: ButtonSize::Small, "小按钮" }
            Button { size: ButtonSize::Icon, variant: ButtonVariant::Outline, "+" }
            Button { disabled: true, "禁用" }
        }
    }
}

fn variant_label(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Default => "主要按钮",
        ButtonVariant::Destructive => "危险按钮",
        ButtonVariant::Outline => "描边按钮",
        ButtonVariant::Secondary => "次要按钮",
        ButtonVariant::Ghost => "幽灵按钮",
        ButtonVariant::Link => "链接按钮",
    }
}

#[component]
fn RadioDemo() -> Element {
    let mut choice = use_signal(|| "default".to_string());
    let options = [("default", "默认选项"), ("comfortable", "舒适选项"), ("compact", "紧凑选项")];

    rsx! {
        div { class: "demo-column", role: "radiogroup",
            for (value, label) in options {
                label { key: "{value}", class: "radio",
                    input {
                        r#type: "radio",
                        name: "density",
                        value: "{value}",
                        checked: choice() == value,
                        onchange: move |_| choice.set(value.to_string()),
                    }
                    span { "{label}" }
                }
            }
        }
    }
}

#[component]
fn CheckboxDemo() -> Element {
    let mut accepted = use_signal(|| false);
    let mut reminders = use_signal(|| true);

    rsx! {
        div { class: "demo-column",
            Checkbox {
                checked: accepted(),
                onchange: move |v| accepted.set(v),
                label: "接受用户协议".to_string(),
            }
            Checkbox {
                checked: reminders(),
                onchange: move |v| reminders.set(v),
                label: "接收用药提醒".to_string(),
            }
            Checkbox {
                checked: false,
                onchange: move |_| {},
                label: "禁用选项".to_string(),
                disabled: true,
            }
        }
    }
}

#[component]
fn InputDemo() -> Element {
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);

    rsx! {
        div { class: "demo-column",
            Input {
                value: name(),
                oninput: move |s| name.set(s),
                label: "姓名".to_string(),
                placeholder: "请输入姓名".to_string(),
                required: true,
            }
            Input {
                value: phone(),
                oninput: move |s| phone.set(s),
                label: "手机号".to_string(),
                hint: "选填".to_string(),
                input_type: "tel".to_string(),
                placeholder: "请输入手机号".to_string(),
            }
            Input {
                value: String::new(),
                oninput: move |_| {},
                placeholder: "禁用状态".to_string(),
                disabled: true,
            }
        }
    }
}

#[component]
fn SwitchDemo() -> Element {
    let mut notifications = use_signal(|| true);
    let mut night_mode = use_signal(|| false);

    rsx! {
        div { class: "demo-column",
            label { class: "switch-row",
                Switch { on: notifications(), ontoggle: move |v| notifications.set(v) }
                span { "消息通知" }
            }
            label { class: "switch-row",
                Switch { on: night_mode(), ontoggle: move |v| night_mode.set(v) }
                span { "夜间模式" }
            }
            label { class: "switch-row",
                Switch { on: true, ontoggle: move |_| {}, disabled: true }
                span { "禁用" }
            }
        }
    }
}

#[component]
fn SliderDemo() -> Element {
    let mut volume = use_signal(|| 50u32);

    rsx! {
        div { class: "demo-column",
            input {
                class: "slider",
                r#type: "range",
                min: "0",
                max: "100",
                step: "1",
                value: "{volume}",
                oninput: move |e| {
                    if let Ok(v) = e.value().parse::<u32>() {
                        volume.set(v);
                    }
                },
            }
            span { class: "muted", "当前值：{volume}" }
        }
    }
}

#[component]
fn ProgressDemo() -> Element {
    rsx! {
        div { class: "demo-column",
            for value in [25u32, 60, 100] {
                div { key: "{value}", class: "progress-row",
                    div { class: "progress",
                        div { class: "progress-bar", style: "width: {value}%" }
                    }
                    span { class: "muted", "{value}%" }
                }
            }
        }
    }
}

#[component]
fn SelectDemo() -> Element {
    let mut department = use_signal(String::new);
    let departments = ["内科", "外科", "儿科", "骨科", "眼科"];

    rsx! {
        div { class: "demo-column",
            select {
                class: "select",
                value: "{department}",
                onchange: move |e| department.set(e.value()),
                option { value: "", disabled: true, "请选择科室" }
                for name in departments {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }
            if !department().is_empty() {
                span { class: "muted", "已选择：{department}" }
            }
        }
    }
}

#[component]
fn DatePickerDemo() -> Element {
    let mut date = use_signal(|| Option::<chrono::NaiveDate>::None);

    let label = match date() {
        Some(d) => d.format("%Y年%m月%d日").to_string(),
        None => "未选择日期".to_string(),
    };

    rsx! {
        div { class: "demo-column",
            input {
                class: "input-field",
                r#type: "date",
                onchange: move |e| {
                    date.set(chrono::NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d").ok());
                },
            }
            span { class: "muted", "{label}" }
        }
    }
}

/// Field errors for the demo registration form
fn validate_form(username: &str, email: &str) -> (Option<&'static str>, Option<&'static str>) {
    let username_error = (username.trim().chars().count() < 2).then_some("用户名必须至少2个字符。");
    let email_ok = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };
    let email_error = (!email_ok).then_some("请输入有效的邮箱地址。");
    (username_error, email_error)
}

#[component]
fn FormDemo() -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut submitted = use_signal(|| false);
    let mut accepted = use_signal(|| false);

    let (username_error, email_error) = validate_form(&username(), &email());
    let show_errors = submitted();

    rsx! {
        form {
            class: "demo-form",
            onsubmit: move |e| {
                e.prevent_default();
                submitted.set(true);
                let (u, m) = validate_form(&username(), &email());
                let valid = u.is_none() && m.is_none();
                accepted.set(valid);
                tracing::info!(valid, "Demo form submitted");
            },
            Input {
                value: username(),
                oninput: move |s| username.set(s),
                label: "用户名".to_string(),
                placeholder: "请输入用户名".to_string(),
            }
            if show_errors {
                if let Some(message) = username_error {
                    p { class: "form-error", "{message}" }
                }
            }
            Input {
                value: email(),
                oninput: move |s| email.set(s),
                label: "邮箱".to_string(),
                input_type: "email".to_string(),
                placeholder: "请输入邮箱".to_string(),
            }
            if show_errors {
                if let Some(message) = email_error {
                    p { class: "form-error", "{message}" }
                }
            }
            div { class: "demo-row",
                Button { button_type: "submit".to_string(), "提交" }
                if accepted() {
                    Badge { color: BadgeColor::Green, "提交成功" }
                }
            }
        }
    }
}

#[component]
fn TagDemo() -> Element {
    rsx! {
        div { class: "demo-row",
            Badge { "默认" }
            Badge { color: BadgeColor::Green, "已完成" }
            Badge { color: BadgeColor::Orange, "待付款" }
            Badge { color: BadgeColor::Red, "已取消" }
            Badge { color: BadgeColor::Teal, "健康" }
            Badge { color: BadgeColor::Purple, "VIP" }
            Badge { color: BadgeColor::Neutral, "草稿" }
        }
    }
}

#[component]
fn UploadDemo() -> Element {
    let mut picked = use_signal(|| Option::<String>::None);
    let mut picking = use_signal(|| false);

    let pick_file = move |_| {
        picking.set(true);
        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("体检报告", &["pdf", "png", "jpg", "jpeg"])
                    .set_title("选择文件")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    tracing::info!("Picked upload file: {}", name);
                    picked.set(Some(name));
                }
                Ok(None) => {}
                Err(e) => tracing::error!("File picker failed: {:?}", e),
            }
            picking.set(false);
        });
    };

    rsx! {
        div { class: "upload-zone",
            p { class: "muted", "支持 PDF、PNG、JPG 格式" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: picking(),
                onclick: pick_file,
                if picking() { "选择中…" } else { "点击上传" }
            }
            if let Some(name) = picked() {
                p { class: "upload-file", "📎 {name}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_requires_two_char_username() {
        assert!(validate_form("a", "a@b.cn").0.is_some());
        assert!(validate_form("张三", "a@b.cn").0.is_none());
    }

    #[test]
    fn form_checks_email_shape() {
        assert!(validate_form("张三", "").1.is_some());
        assert!(validate_form("张三", "no-at-sign").1.is_some());
        assert!(validate_form("张三", "@kaixin.com").1.is_some());
        assert!(validate_form("张三", "a@kaixin.").1.is_some());
        assert!(validate_form("张三", "a@kaixin.com").1.is_none());
    }

    #[test]
    fn button_variants_have_labels() {
        for variant in ButtonVariant::ALL {
            assert!(!variant_label(variant).is_empty());
        }
    }
}
