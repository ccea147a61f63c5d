//! Render a [`CurlRequest`] as a block of variable declarations.
//!
//! ```text
//! headers = {
//!     "Accept": "*/*"
//! }
//!
//! url = "https://example.com/api"
//!
//! method = "GET"
//! ```

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::curl::{CurlRequest, Mapping, RequestData};

/// Layout knobs for [`render_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per indentation level, for mappings and pretty JSON alike.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Render with the default options.
pub fn render(request: &CurlRequest) -> String {
    render_with(request, &RenderOptions::default())
}

/// Emit headers, cookies, url, params, data and method, separated by blank
/// lines. Empty mappings and empty data are skipped; url and method never are.
pub fn render_with(request: &CurlRequest, options: &RenderOptions) -> String {
    let mut blocks = Vec::with_capacity(6);

    if !request.headers.is_empty() {
        blocks.push(assign("headers", &format_mapping(&request.headers, options)));
    }
    if !request.cookies.is_empty() {
        blocks.push(assign("cookies", &format_mapping(&request.cookies, options)));
    }
    blocks.push(assign("url", &quote(&request.url)));
    if !request.params.is_empty() {
        blocks.push(assign("params", &format_mapping(&request.params, options)));
    }
    if let Some(data) = request.data.as_ref().filter(|data| !data.is_empty()) {
        blocks.push(assign("data", &format_data(data, options)));
    }
    blocks.push(assign("method", &quote(&request.method)));

    blocks.join("\n\n")
}

fn assign(name: &str, value: &str) -> String {
    format!("{} = {}", name, value)
}

/// Double-quote `s`, escaping embedded double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}

fn format_data(data: &RequestData, options: &RenderOptions) -> String {
    match data {
        RequestData::Form(pairs) => format_mapping(pairs, options),
        RequestData::Json(Value::Object(map)) => format_entries(
            map.iter().map(|(key, value)| (key.as_str(), json_literal(value))),
            options,
        ),
        RequestData::Json(value) => pretty_json(value, options),
    }
}

pub fn format_mapping(pairs: &Mapping, options: &RenderOptions) -> String {
    format_entries(
        pairs.iter().map(|(key, value)| (key.as_str(), quote(value))),
        options,
    )
}

/// One `"key": value` line per entry, no trailing comma, `{}` when empty.
fn format_entries<'a, I>(entries: I, options: &RenderOptions) -> String
where
    I: Iterator<Item = (&'a str, String)>,
{
    let padding = " ".repeat(options.indent);
    let lines: Vec<String> = entries
        .map(|(key, value)| format!("{}{}: {}", padding, quote(key), value))
        .collect();

    if lines.is_empty() {
        return "{}".into();
    }
    format!("{{\n{}\n}}", lines.join(",\n"))
}

/// Strings are quoted; every other value is written as compact JSON.
fn json_literal(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        other => other.to_string(),
    }
}

fn pretty_json(value: &Value, options: &RenderOptions) -> String {
    let indent = " ".repeat(options.indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
