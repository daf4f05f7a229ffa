//! Example screens: login, chat, learning assistant, exam simulation.
//!
//! Only the active example is mounted, so each one starts fresh when
//! navigated to.

use std::time::Duration;

use dioxus::prelude::*;
use rfd::FileDialog;
use showcase_core::Page;
use showcase_ui::{Badge, BadgeColor, Button, ButtonVariant, Input};

use crate::components::PageLayout;

#[component]
pub fn ExamplesPage(active: String) -> Element {
    let section = Page::Examples
        .sections()
        .iter()
        .find(|s| s.id == active)
        .or_else(|| Page::Examples.sections().first());

    rsx! {
        PageLayout { page: Page::Examples, active: active.clone(),
            if let Some(section) = section {
                div { class: "example-panel",
                    h2 { class: "section-title", "{section.title}" }
                    p { class: "muted", "{section.description}" }
                    match section.id {
                        "chat" => rsx! { ChatExample {} },
                        "learningAssistant" => rsx! { LearningAssistantExample {} },
                        "exam" => rsx! { ExamExample {} },
                        _ => rsx! { LoginExample {} },
                    }
                }
            }
        }
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LoginTab {
    Phone,
    Account,
}

/// Seconds before a verification code can be requested again
const CODE_COOLDOWN_SECS: u32 = 60;

fn code_button_label(remaining: u32) -> String {
    if remaining == 0 {
        "获取验证码".to_string()
    } else {
        format!("{}秒后重新获取", remaining)
    }
}

#[component]
fn LoginExample() -> Element {
    let mut tab = use_signal(|| LoginTab::Phone);
    let mut phone = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut account = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut countdown = use_signal(|| 0u32);
    let mut status = use_signal(|| Option::<String>::None);

    let send_code = move |_| {
        if countdown() > 0 {
            return;
        }
        countdown.set(CODE_COOLDOWN_SECS);
        spawn(async move {
            while countdown() > 0 {
                tokio::time::sleep(Duration::from_secs(1)).await;
                countdown.set(countdown().saturating_sub(1));
            }
        });
    };

    let submit = move |_| {
        let message = match tab() {
            LoginTab::Phone if phone().trim().len() == 11 && !code().is_empty() => "登录成功",
            LoginTab::Phone => "请输入11位手机号和验证码",
            LoginTab::Account if !account().trim().is_empty() && password().len() >= 6 => "登录成功",
            LoginTab::Account => "请输入账号和至少6位密码",
        };
        tracing::info!(tab = ?tab(), "Demo login submitted: {}", message);
        status.set(Some(message.to_string()));
    };

    rsx! {
        div { class: "login-example",
            div { class: "login-hero",
                h1 { "欢迎使用智能学习助手" }
                h2 { "为您提供智能化的学习解决方案" }
            }
            div { class: "login-panel",
                div { class: "tabs",
                    button {
                        class: if tab() == LoginTab::Phone { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(LoginTab::Phone),
                        "手机号登录"
                    }
                    button {
                        class: if tab() == LoginTab::Account { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(LoginTab::Account),
                        "账号密码登录"
                    }
                }
                if tab() == LoginTab::Phone {
                    Input {
                        value: phone(),
                        oninput: move |s| phone.set(s),
                        input_type: "tel".to_string(),
                        placeholder: "请输入手机号".to_string(),
                    }
                    div { class: "code-row",
                        Input {
                            value: code(),
                            oninput: move |s| code.set(s),
                            placeholder: "请输入验证码".to_string(),
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: countdown() > 0,
                            onclick: send_code,
                            {code_button_label(countdown())}
                        }
                    }
                } else {
                    Input {
                        value: account(),
                        oninput: move |s| account.set(s),
                        placeholder: "请输入账号".to_string(),
                    }
                    Input {
                        value: password(),
                        oninput: move |s| password.set(s),
                        input_type: "password".to_string(),
                        placeholder: "请输入密码".to_string(),
                    }
                }
                Button { class: "btn-block".to_string(), onclick: submit, "登录" }
                if let Some(message) = status() {
                    p { class: "muted", "{message}" }
                }
            }
        }
    }
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Clone, PartialEq, Debug)]
struct ChatMessage {
    from_user: bool,
    content: String,
    time: String,
}

impl ChatMessage {
    fn new(from_user: bool, content: &str, time: &str) -> Self {
        Self {
            from_user,
            content: content.to_string(),
            time: time.to_string(),
        }
    }
}

fn seed_conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(false, "你好！有什么我可以帮你的吗？", "09:00"),
        ChatMessage::new(true, "我想了解一下你们的产品。", "09:01"),
        ChatMessage::new(false, "好的，我们的产品主要有以下几个特点...", "09:02"),
        ChatMessage::new(true, "听起来不错，具体的价格是多少？", "09:03"),
        ChatMessage::new(
            false,
            "我们有不同的套餐可供选择，基础版每月99元，专业版每月199元，企业版可以联系我们的销售团队定制方案。",
            "09:04",
        ),
    ]
}

fn now_hhmm() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

#[component]
fn ChatExample() -> Element {
    let mut messages = use_signal(seed_conversation);
    let mut draft = use_signal(String::new);
    let mut typing = use_signal(|| false);

    let mut send = move || {
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        messages.write().push(ChatMessage::new(true, &text, &now_hhmm()));
        draft.set(String::new());
        typing.set(true);
        // Simulated reply, fire-and-forget
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(800)).await;
            messages
                .write()
                .push(ChatMessage::new(false, &format!("收到：{}", text), &now_hhmm()));
            typing.set(false);
        });
    };

    rsx! {
        div { class: "chat",
            div { class: "chat-messages",
                for (index, message) in messages().into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if message.from_user { "chat-bubble user" } else { "chat-bubble assistant" },
                        p { "{message.content}" }
                        span { class: "chat-time", "{message.time}" }
                    }
                }
                if typing() {
                    div { class: "chat-bubble assistant typing", "正在输入…" }
                }
            }
            div { class: "chat-compose",
                input {
                    class: "input-field",
                    placeholder: "输入消息，回车发送",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            send();
                        }
                    },
                }
                Button { onclick: move |_| send(), "发送" }
            }
        }
    }
}

// ============================================================================
// Learning assistant
// ============================================================================

#[derive(Clone, PartialEq, Debug)]
struct StudyTask {
    id: i64,
    title: String,
    file: Option<String>,
    created: String,
    summary: Option<String>,
}

/// File name without its last extension
fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

fn file_icon(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("doc") | Some("docx") => "📝",
        Some("txt") => "📃",
        _ => "📄",
    }
}

#[component]
fn LearningAssistantExample() -> Element {
    let mut task_name = use_signal(String::new);
    let mut selected_file = use_signal(|| Option::<String>::None);
    let mut tasks = use_signal(Vec::<StudyTask>::new);
    let mut notice = use_signal(|| Option::<(BadgeColor, String)>::None);

    let pick_file = move |_| {
        spawn(async move {
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("学习资料", &["pdf", "doc", "docx", "txt"])
                    .set_title("选择学习资料")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    if task_name().is_empty() {
                        task_name.set(strip_extension(&name).to_string());
                    }
                    notice.set(Some((BadgeColor::Blue, format!("已选择文件: {}", name))));
                    selected_file.set(Some(name));
                }
                Ok(None) => {}
                Err(e) => tracing::error!("File picker failed: {:?}", e),
            }
        });
    };

    let create_task = move |_| {
        let title = task_name().trim().to_string();
        if title.is_empty() {
            notice.set(Some((BadgeColor::Red, "请输入任务名称".to_string())));
            return;
        }
        let now = chrono::Local::now();
        tasks.write().insert(
            0,
            StudyTask {
                id: now.timestamp_millis(),
                title,
                file: selected_file(),
                created: now.format("%Y-%m-%d %H:%M").to_string(),
                summary: None,
            },
        );
        task_name.set(String::new());
        selected_file.set(None);
        notice.set(Some((BadgeColor::Green, "任务创建成功".to_string())));
    };

    let mut summarize = move |id: i64| {
        spawn(async move {
            // Simulated summary generation
            tokio::time::sleep(Duration::from_millis(1200)).await;
            let mut list = tasks.write();
            if let Some(task) = list.iter_mut().find(|t| t.id == id) {
                task.summary = Some(format!("《{}》要点：核心概念、重点章节与复习建议。", task.title));
            }
        });
    };

    rsx! {
        div { class: "assistant",
            div { class: "assistant-create",
                Input {
                    value: task_name(),
                    oninput: move |s| task_name.set(s),
                    label: "任务名称".to_string(),
                    placeholder: "请输入任务名称".to_string(),
                }
                div { class: "demo-row",
                    Button { variant: ButtonVariant::Outline, onclick: pick_file, "选择文件" }
                    if let Some(name) = selected_file() {
                        span { class: "muted", "{file_icon(&name)} {name}" }
                    }
                    Button { onclick: create_task, "创建任务" }
                }
                if let Some((color, text)) = notice() {
                    Badge { color: color, "{text}" }
                }
            }
            ul { class: "task-list",
                if tasks.read().is_empty() {
                    li { class: "muted", "暂无学习任务" }
                }
                for task in tasks() {
                    li { key: "{task.id}", class: "task-item",
                        div {
                            strong { "{task.title}" }
                            span { class: "muted", " {task.created}" }
                            if let Some(file) = &task.file {
                                p { class: "muted", "{file_icon(file)} {file}" }
                            }
                            if let Some(summary) = &task.summary {
                                p { class: "task-summary", "{summary}" }
                            }
                        }
                        div { class: "demo-row",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| summarize(task.id),
                                "生成摘要"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    tasks.write().retain(|t| t.id != task.id);
                                    notice.set(Some((BadgeColor::Neutral, "任务已删除".to_string())));
                                },
                                "删除"
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Exam simulation
// ============================================================================

#[derive(Clone, PartialEq, Debug)]
struct ExamSession {
    title: &'static str,
    timestamp: &'static str,
    messages: Vec<ChatMessage>,
}

fn exam_sessions() -> Vec<ExamSession> {
    vec![
        ExamSession {
            title: "模拟考核1",
            timestamp: "10:30",
            messages: vec![
                ChatMessage::new(false, "那么，作为医学生，你能简要描述一下急性心肌梗死的临床表现和诊断依据吗？", "10:30"),
                ChatMessage::new(true, "临床表现,急性心肌梗死的病人有频死感,会出现大汗,持续性心绞痛全放射至左肩。", "10:33"),
                ChatMessage::new(
                    false,
                    "很好，你已经提到了急性心肌梗死（AMI）的几个经典临床表现：频死感、大汗与放射痛。",
                    "10:34",
                ),
            ],
        },
        ExamSession {
            title: "模拟考核2",
            timestamp: "昨天",
            messages: vec![ChatMessage::new(false, "请描述一下支气管哮喘的临床特点。", "昨天")],
        },
        ExamSession {
            title: "模拟考核3",
            timestamp: "周一",
            messages: vec![ChatMessage::new(false, "糖尿病的诊断标准是什么？", "周一")],
        },
    ]
}

#[component]
fn ExamExample() -> Element {
    let sessions = use_hook(exam_sessions);
    let mut selected = use_signal(|| 0usize);
    let current = sessions.get(selected()).cloned();

    rsx! {
        div { class: "exam",
            ul { class: "exam-list",
                for (index, session) in sessions.iter().enumerate() {
                    li {
                        key: "{session.title}",
                        class: if index == selected() { "exam-item active" } else { "exam-item" },
                        onclick: move |_| selected.set(index),
                        strong { "{session.title}" }
                        span { class: "muted", " {session.timestamp}" }
                        p { class: "muted exam-preview",
                            {session.messages.last().map(|m| m.content.clone()).unwrap_or_default()}
                        }
                    }
                }
            }
            if let Some(session) = current {
                div { class: "chat exam-chat",
                    h3 { "{session.title}" }
                    div { class: "chat-messages",
                        for (index, message) in session.messages.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: if message.from_user { "chat-bubble user" } else { "chat-bubble assistant" },
                                p { "{message.content}" }
                                span { class: "chat-time", "{message.time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_label_counts_down() {
        assert_eq!(code_button_label(0), "获取验证码");
        assert_eq!(code_button_label(42), "42秒后重新获取");
    }

    #[test]
    fn strip_extension_keeps_dotfiles() {
        assert_eq!(strip_extension("讲义.pdf"), "讲义");
        assert_eq!(strip_extension("a.tar.gz"), "a.tar");
        assert_eq!(strip_extension(".bashrc"), ".bashrc");
        assert_eq!(strip_extension("notes"), "notes");
    }

    #[test]
    fn file_icons_by_extension() {
        assert_eq!(file_icon("a.PDF"), "📄");
        assert_eq!(file_icon("a.docx"), "📝");
        assert_eq!(file_icon("a.txt"), "📃");
        assert_eq!(file_icon("noext"), "📄");
    }

    #[test]
    fn exam_sessions_have_opening_question() {
        for session in exam_sessions() {
            assert!(!session.messages.is_empty());
            assert!(!session.messages[0].from_user);
        }
    }
}
