//! Rich-text editor adapter.
//!
//! The editor widget is an opaque source of HTML. It reports edits through
//! [`ExternalChange`]; the bridge forwards them to the form field it is bound
//! to, so the form tracks the editor like any other input.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::forms::{FieldRule, FormState};

pub const DEFAULT_FIELD: &str = "content";

/// Receiver of field changes coming from outside the form.
pub trait FieldSink {
    fn notify(&mut self, field: &str, value: String);
}

impl FieldSink for FormState {
    fn notify(&mut self, field: &str, value: String) {
        self.set_value(field, value);
    }
}

/// Widget-facing side of the adapter.
pub trait ExternalChange {
    fn on_external_change(&self, sink: &mut dyn FieldSink, value: String);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBridge {
    field: String,
}

impl EditorBridge {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            field: name.unwrap_or(DEFAULT_FIELD).to_string(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Registers the bound field on `form` with the editor's initial content.
    pub fn attach(&self, form: &mut FormState, rules: Vec<FieldRule>, default: &str) {
        form.register_with_default(&self.field, rules, default);
    }
}

impl ExternalChange for EditorBridge {
    fn on_external_change(&self, sink: &mut dyn FieldSink, value: String) {
        sink.notify(&self.field, value);
    }
}

struct Sanitizer {
    blocks: Regex,
    stray_tags: Regex,
    handlers: Regex,
    script_urls: Regex,
}

fn sanitizer() -> &'static Sanitizer {
    static SANITIZER: OnceLock<Sanitizer> = OnceLock::new();
    SANITIZER.get_or_init(|| Sanitizer {
        blocks: Regex::new(r"(?is)<(script|style|iframe|object|embed)\b[^>]*>.*?</\s*(script|style|iframe|object|embed)\s*>")
            .expect("block pattern is valid"),
        stray_tags: Regex::new(r"(?i)</?\s*(script|style|iframe|object|embed)\b[^>]*>")
            .expect("tag pattern is valid"),
        handlers: Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#)
            .expect("handler pattern is valid"),
        script_urls: Regex::new(r#"(?i)\b(href|src)\s*=\s*("\s*javascript:[^"]*"|'\s*javascript:[^']*'|javascript:[^\s>]*)"#)
            .expect("url pattern is valid"),
    })
}

/// Strips executable content from editor HTML: script-like elements, inline
/// event handlers and `javascript:` links. Formatting markup is kept.
pub fn sanitize_html(html: &str) -> String {
    let s = sanitizer();
    let html = s.blocks.replace_all(html, "");
    let html = s.stray_tags.replace_all(&html, "");
    let html = s.handlers.replace_all(&html, "");
    s.script_urls.replace_all(&html, r##"$1="#""##).into_owned()
}

/// Toolbar buttons the built-in editing surface knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    Undo,
    Redo,
    Bold,
    Italic,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,
    BulletList,
    NumberedList,
    Outdent,
    Indent,
    RemoveFormat,
}

impl ToolbarCommand {
    pub fn from_token(token: &str) -> Option<Self> {
        let command = match token {
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "alignleft" => Self::AlignLeft,
            "aligncenter" => Self::AlignCenter,
            "alignright" => Self::AlignRight,
            "alignjustify" => Self::AlignJustify,
            "bullist" => Self::BulletList,
            "numlist" => Self::NumberedList,
            "outdent" => Self::Outdent,
            "indent" => Self::Indent,
            "removeformat" => Self::RemoveFormat,
            _ => return None,
        };
        Some(command)
    }

    /// Name understood by the browser's `execCommand`.
    pub fn exec_name(self) -> &'static str {
        match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::AlignLeft => "justifyLeft",
            Self::AlignCenter => "justifyCenter",
            Self::AlignRight => "justifyRight",
            Self::AlignJustify => "justifyFull",
            Self::BulletList => "insertUnorderedList",
            Self::NumberedList => "insertOrderedList",
            Self::Outdent => "outdent",
            Self::Indent => "indent",
            Self::RemoveFormat => "removeFormat",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::Bold => "B",
            Self::Italic => "I",
            Self::AlignLeft => "Left",
            Self::AlignCenter => "Center",
            Self::AlignRight => "Right",
            Self::AlignJustify => "Justify",
            Self::BulletList => "• List",
            Self::NumberedList => "1. List",
            Self::Outdent => "Outdent",
            Self::Indent => "Indent",
            Self::RemoveFormat => "Clear",
        }
    }
}

/// Editor widget init options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorConfig {
    #[serde(rename = "initialValue")]
    pub initial_value: String,
    pub height: u32,
    pub menubar: bool,
    pub plugins: Vec<String>,
    pub toolbar: String,
    pub content_style: String,
}

const PLUGINS: &[&str] = &[
    "image",
    "advlist",
    "autolink",
    "lists",
    "link",
    "charmap",
    "preview",
    "anchor",
    "searchreplace",
    "visualblocks",
    "code",
    "fullscreen",
    "insertdatetime",
    "media",
    "table",
    "help",
    "wordcount",
];

const TOOLBAR: &str = "undo redo | blocks | image | bold italic forecolor | \
    alignleft aligncenter alignright alignjustify | bullist numlist outdent indent | \
    removeformat | help";

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_value: String::new(),
            height: 500,
            menubar: true,
            plugins: PLUGINS.iter().map(|p| p.to_string()).collect(),
            toolbar: TOOLBAR.to_string(),
            content_style: "body { font-family:Helvetica,Arial,sans-serif; font-size:14px }"
                .to_string(),
        }
    }
}

impl EditorConfig {
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Toolbar groups (separated by `|`) reduced to executable commands.
    /// Empty groups are dropped.
    pub fn toolbar_groups(&self) -> Vec<Vec<ToolbarCommand>> {
        self.toolbar
            .split('|')
            .map(|group| {
                group
                    .split_whitespace()
                    .filter_map(ToolbarCommand::from_token)
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect()
    }

    pub fn to_init_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
