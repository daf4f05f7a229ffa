//! Design tokens page: color, typography, border.
//!
//! Shows one section at a time, picked by the active section id.

use dioxus::prelude::*;
use showcase_core::catalog::{BASE_PALETTES, FONT_FAMILY, HEADINGS, NEUTRALS, RADII, SHADOWS};
use showcase_core::Page;

use crate::components::PageLayout;

#[component]
pub fn DesignPage(active: String) -> Element {
    rsx! {
        PageLayout { page: Page::Design, active: active.clone(),
            div { class: "design-card",
                match active.as_str() {
                    "typography" => rsx! { TypographySection {} },
                    "border" => rsx! { BorderSection {} },
                    _ => rsx! { ColorSection {} },
                }
            }
        }
    }
}

#[component]
fn ColorSection() -> Element {
    rsx! {
        section { class: "token-section",
            h2 { class: "section-title", "基础色" }
            for palette in BASE_PALETTES.iter() {
                div { key: "{palette.prefix}", class: "palette",
                    div { class: "palette-header",
                        h3 { "{palette.name}" }
                        p { class: "muted", "{palette.usage}" }
                    }
                    div { class: "swatch-row",
                        for (index, shade) in palette.shades.iter().enumerate() {
                            div { key: "{shade}", class: "swatch",
                                div { class: "swatch-color", style: "background: {shade}" }
                                span { class: "swatch-token", {palette.token(index + 1)} }
                                span { class: "swatch-hex", "{shade}" }
                            }
                        }
                    }
                }
            }
            h2 { class: "section-title", "中性色" }
            div { class: "neutral-grid",
                for neutral in NEUTRALS.iter() {
                    div { key: "{neutral.color}", class: "neutral",
                        div { class: "swatch-color bordered", style: "background: {neutral.color}" }
                        div {
                            strong { "{neutral.label}" }
                            span { class: "swatch-hex", " {neutral.color}" }
                            p { class: "muted", "{neutral.usage}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TypographySection() -> Element {
    rsx! {
        section { class: "token-section",
            h2 { class: "section-title", "字体" }
            pre { class: "code-block", "font-family: {FONT_FAMILY};" }
            h2 { class: "section-title", "字号与字重" }
            table { class: "token-table",
                thead {
                    tr {
                        th { "层级" }
                        th { "用途" }
                        th { "规格" }
                        th { "示例" }
                    }
                }
                tbody {
                    for heading in HEADINGS.iter() {
                        tr { key: "{heading.level}",
                            td { "{heading.level}" }
                            td { "{heading.name}" }
                            td { class: "mono", {heading.specs()} }
                            td { span { style: "{heading.css()}", "开心健康" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BorderSection() -> Element {
    rsx! {
        section { class: "token-section",
            h2 { class: "section-title", "圆角" }
            div { class: "radius-grid",
                for radius in RADII.iter() {
                    div { key: "{radius.name}", class: "radius-sample",
                        div { class: "radius-box", style: "border-radius: {radius.value}" }
                        strong { "{radius.name} {radius.value}" }
                        p { class: "muted", "{radius.usage}" }
                    }
                }
            }
            h2 { class: "section-title", "阴影" }
            div { class: "shadow-grid",
                for (name, value, usage) in SHADOWS.iter() {
                    div { key: "{name}", class: "shadow-sample",
                        div { class: "shadow-box", style: "box-shadow: {value}" }
                        strong { "{name}" }
                        p { class: "muted", "{usage}" }
                    }
                }
            }
        }
    }
}
