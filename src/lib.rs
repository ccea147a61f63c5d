//! curlconvert: turn a copied cURL command into a structured request and
//! render it as variable declarations.
//!
//! ```
//! let text = curlconvert::convert("curl 'https://example.com/api?page=2' -H 'Accept: */*'").unwrap();
//! assert!(text.starts_with("headers = {"));
//! assert!(text.ends_with("method = \"GET\""));
//! ```

pub mod curl;
pub mod error;
pub mod render;
pub mod url;

#[cfg(test)]
mod test_util;

pub use curl::{parse, CurlRequest, Mapping, RequestData};
pub use error::{Error, ParseError, Result};
pub use render::{render, render_with, RenderOptions};

/// Parse then render.
pub fn convert(command: &str) -> std::result::Result<String, ParseError> {
    parse(command).map(|request| render(&request))
}

/// Parse then render, turning a failure into `parse error: <cause>`.
pub fn convert_to_display(command: &str) -> String {
    match convert(command) {
        Ok(text) => text,
        Err(e) => Error::from(e).to_string(),
    }
}
