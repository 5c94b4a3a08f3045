//! Escaping of text for inclusion in HTML, and the one bit of
//! markdown we support (`**bold**`).

use std::fmt;

use kstring::KString;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// Escape `s` for use as HTML text content or as a (double or single
/// quoted) attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c)
        }
    }
    out
}

lazy_static!{
    // No `*` inside, i.e. `***a***` only gets its inner pair replaced
    static ref BOLD: Regex = Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex");
}

/// Escape `s`, then turn `**x**` spans into `<strong>x</strong>`.
pub fn parse_bold(s: &str) -> String {
    BOLD.replace_all(&escape_html(s), "<strong>$1</strong>").into_owned()
}


/// A text field from a content document. Documents are hand written,
/// thus any JSON value is accepted here; only strings carry text,
/// everything else (including `null` and missing fields, via
/// `#[serde(default)]`) renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct Text(Option<KString>);

impl From<Value> for Text {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Text(Some(KString::from_string(s))),
            _ => Text(None)
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text(Some(KString::from_ref(s)))
    }
}

impl Text {
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Some(s) => s.as_str(),
            None => ""
        }
    }

    /// Whether there is something to show; empty strings count as
    /// absent.
    pub fn is_present(&self) -> bool {
        !self.as_str().is_empty()
    }

    pub fn escaped(&self) -> String {
        escape_html(self.as_str())
    }

    pub fn bold_parsed(&self) -> String {
        parse_bold(self.as_str())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
