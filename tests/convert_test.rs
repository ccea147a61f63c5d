use curlconvert::{convert, convert_to_display, parse, render, ParseError, RequestData};
use pretty_assertions::assert_eq;
use rstest::*;

const BROWSER_CMD: &str = r#"curl 'https://www.example.com/api/v2/search?keyword=rust%20lang&page=1&page=2' \
  -H 'accept: application/json, text/plain, */*' \
  -H 'accept-language: en-US,en;q=0.9' \
  -b 'session=xyz; theme=dark; _ga=GA1.2.3' \
  -H 'user-agent: Mozilla/5.0 (X11; Linux x86_64)' \
  --data-raw 'name=Jane+Doe&city=New%20York' \
  --compressed"#;

#[test]
fn test_end_to_end_example() {
    let input = r#"curl 'https://api.example.com/v1/items?x=1' -H 'Authorization: Bearer T' -b 'sid=abc; lang=en' --data-raw '{"q":"hi"}' -X POST"#;
    let expected = r#"headers = {
    "Authorization": "Bearer T"
}

cookies = {
    "sid": "abc",
    "lang": "en"
}

url = "https://api.example.com/v1/items"

params = {
    "x": "1"
}

data = {
    "q": "hi"
}

method = "POST""#;
    assert_eq!(convert(input).unwrap(), expected);
}

#[test]
fn test_browser_copy_as_curl() {
    let expected = r#"headers = {
    "accept": "application/json, text/plain, */*",
    "accept-language": "en-US,en;q=0.9",
    "user-agent": "Mozilla/5.0 (X11; Linux x86_64)"
}

cookies = {
    "session": "xyz",
    "theme": "dark",
    "_ga": "GA1.2.3"
}

url = "https://www.example.com/api/v2/search"

params = {
    "keyword": "rust lang",
    "page": "2"
}

data = {
    "name": "Jane Doe",
    "city": "New York"
}

method = "POST""#;
    assert_eq!(convert(BROWSER_CMD).unwrap(), expected);
}

#[test]
fn test_render_is_deterministic() {
    let first = convert_to_display(BROWSER_CMD);
    let second = convert_to_display(BROWSER_CMD);
    assert_eq!(first, second);
}

#[test]
fn test_rendered_pairs_round_trip() {
    let request = parse(BROWSER_CMD).unwrap();
    let rendered = render(&request);

    let block = |name: &str| -> Vec<(String, String)> {
        let start = rendered.find(&format!("{} = {{", name)).unwrap();
        let end = start + rendered[start..].find("\n}").unwrap();
        rendered[start..end]
            .lines()
            .skip(1)
            .map(|line| {
                let line = line.trim().trim_end_matches(',');
                let (key, value) = line.split_once("\": \"").unwrap();
                (
                    key.trim_start_matches('"').to_string(),
                    value.trim_end_matches('"').to_string(),
                )
            })
            .collect()
    };

    let pairs = |map: &curlconvert::Mapping| -> Vec<(String, String)> {
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    };

    assert_eq!(block("headers"), pairs(&request.headers));
    assert_eq!(block("cookies"), pairs(&request.cookies));
    assert_eq!(block("params"), pairs(&request.params));
}

#[test]
fn test_duplicate_headers() {
    let request = parse(r#"curl 'https://x.io' -H "A: 1" -H "B: x" -H "A: 2""#).unwrap();
    let headers: Vec<(&str, &str)> = request
        .headers
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(headers, vec![("A", "2"), ("B", "x")]);
}

#[test]
fn test_flag_wins_over_data() {
    let request = parse(r#"curl https://x.io -X PUT -d "x=1""#).unwrap();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.data, None);
}

#[test]
fn test_json_data_keeps_numbers() {
    let request = parse(r#"curl 'https://x.io' --data-raw '{"a":1}'"#).unwrap();
    assert_eq!(
        request.data,
        Some(RequestData::Json(serde_json::json!({"a": 1})))
    );
}

#[test]
fn test_json_array_data_rendering() {
    let text = convert(r#"curl 'https://x.io' --data-raw '[{"id":1},{"id":2}]'"#).unwrap();
    let expected = r#"url = "https://x.io"

data = [
    {
        "id": 1
    },
    {
        "id": 2
    }
]

method = "POST""#;
    assert_eq!(text, expected);
}

#[rstest]
#[case(r#"curl -H "A: 1""#)]
#[case("wget https://example.com")]
#[case("https://example.com")]
#[case("")]
fn test_missing_url(#[case] input: &str) {
    assert_eq!(convert(input), Err(ParseError::NoUrl));
    assert_eq!(convert_to_display(input), "parse error: cannot find URL");
}

#[test]
fn test_header_value_with_quotes_is_escaped() {
    let text = convert(r#"curl 'https://x.io' -H 'If-None-Match: "abc"'"#).unwrap();
    assert!(text.starts_with("headers = {\n    \"If-None-Match\": \"\\\"abc\\\"\"\n}"));
}
