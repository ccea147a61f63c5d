pub mod curl_parsers;

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Serialize;

use crate::error::ParseError;
use crate::url::parser::{parse_form_pairs, split_url};
use curl_parsers::{
    cookie_pairs, cookie_parse, data_raw_parse, find_all, find_first, find_url, header_parse,
    infer_method, join_continued_lines,
};

/// Insertion-ordered string map. Re-inserting a key updates it in place.
pub type Mapping = IndexMap<String, String>;

/// Request body taken from `--data-raw`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestData {
    /// `a=1&b=2` style body.
    Form(Mapping),
    /// Any valid JSON text: object, array or scalar.
    Json(serde_json::Value),
}

impl RequestData {
    /// Parse as JSON when the text is valid JSON, otherwise as form pairs.
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => RequestData::Json(value),
            Err(_) => RequestData::Form(parse_form_pairs(raw)),
        }
    }

    /// True when there is nothing worth rendering.
    pub fn is_empty(&self) -> bool {
        match self {
            RequestData::Form(pairs) => pairs.is_empty(),
            RequestData::Json(serde_json::Value::Null) => true,
            RequestData::Json(serde_json::Value::Object(map)) => map.is_empty(),
            RequestData::Json(serde_json::Value::Array(items)) => items.is_empty(),
            RequestData::Json(serde_json::Value::String(s)) => s.is_empty(),
            RequestData::Json(_) => false,
        }
    }
}

/// Everything the converter extracts from one curl command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurlRequest {
    /// Scheme, host and path, without the query string.
    pub url: String,
    pub params: Mapping,
    pub headers: Mapping,
    pub cookies: Mapping,
    pub data: Option<RequestData>,
    /// Upper-cased; `GET` unless a flag or a body says otherwise.
    pub method: String,
}

/// Parse a (possibly multi-line) curl command.
///
/// Fails only when no URL can be found. Headers, cookies and body that cannot
/// be made sense of are left out of the result.
pub fn parse(command: &str) -> Result<CurlRequest, ParseError> {
    let text = join_continued_lines(command);
    trace!("joined command: {}", text);

    let raw_url = find_url(&text).ok_or(ParseError::NoUrl)?;
    let (url, params) = split_url(raw_url);
    debug!("url: {} ({} params)", url, params.len());

    let mut headers = Mapping::new();
    for (name, value) in find_all(&text, header_parse) {
        headers.insert(name.to_string(), value.to_string());
    }

    let mut cookies = Mapping::new();
    for cookie in find_all(&text, cookie_parse) {
        for (name, value) in cookie_pairs(cookie) {
            cookies.insert(name.to_string(), value.to_string());
        }
    }
    debug!("{} headers, {} cookies", headers.len(), cookies.len());

    let data = find_first(&text, data_raw_parse).map(RequestData::from_raw);
    let method = infer_method(&text, data.is_some());
    debug!("method: {}", method);

    Ok(CurlRequest {
        url,
        params,
        headers,
        cookies,
        data,
        method,
    })
}
