//! Extraction rules for a curl command line.
//!
//! Each rule is a small nom parser anchored at a flag (`curl`, `-H`, `-b`,
//! `--data-raw`, `-X`, `--request`). [`find_first`] and [`find_all`] apply a
//! rule at every position of the text, so flags are found wherever they sit
//! and in any order.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_until, take_while1},
    character::complete::{char, multispace0, multispace1, one_of},
    combinator::{map_opt, opt, recognize, verify},
    error::context,
    multi::many0,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

const CURL_CMD: &str = "curl";
const QUOTES: [char; 2] = ['\'', '"'];

/// Apply `parser` at each char boundary, left to right, and return the first hit.
pub fn find_first<'a, O, F>(input: &'a str, mut parser: F) -> Option<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    input
        .char_indices()
        .find_map(|(i, _)| parser(&input[i..]).ok().map(|(_, out)| out))
}

/// Collect every non-overlapping hit of `parser`, scanning left to right.
pub fn find_all<'a, O, F>(input: &'a str, mut parser: F) -> Vec<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    let mut found = Vec::new();
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        match parser(rest) {
            Ok((remaining, out)) if remaining.len() < rest.len() => {
                found.push(out);
                rest = remaining;
            }
            _ => rest = &rest[c.len_utf8()..],
        }
    }
    found
}

/// Identify a line continuation: `\` followed by whitespace holding a newline.
pub fn slash_line_ending(input: &str) -> IResult<&str, &str> {
    context(
        "Slash line ending",
        verify(recognize(pair(char('\\'), multispace0)), |s: &str| {
            s.contains('\n')
        }),
    )(input)
}

/// Fold a multi-line shell command into one logical line.
pub fn join_continued_lines(input: &str) -> String {
    let mut joined = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('\\') {
        joined.push_str(&rest[..pos]);
        match slash_line_ending(&rest[pos..]) {
            Ok((remaining, _)) => {
                joined.push(' ');
                rest = remaining;
            }
            Err(_) => {
                joined.push('\\');
                rest = &rest[pos + 1..];
            }
        }
    }
    joined.push_str(rest);
    joined
}

fn double_quoted_data_parse(input: &str) -> IResult<&str, &str> {
    context(
        "Double quoted data parse",
        delimited(char('"'), take_until("\""), char('"')),
    )(input)
}

fn single_quoted_data_parse(input: &str) -> IResult<&str, &str> {
    context(
        "Single quoted data parse",
        delimited(char('\''), take_until("'"), char('\'')),
    )(input)
}

/// Text between a pair of matching quotes.
pub fn quoted_data_parse(input: &str) -> IResult<&str, &str> {
    alt((double_quoted_data_parse, single_quoted_data_parse))(input)
}

/// `<flag><space*><quoted data>`, yielding the data without its quotes.
fn flag_argument<'a>(flag: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(pair(tag(flag), multispace0), quoted_data_parse)
}

fn looks_like_bare_url(s: &str) -> bool {
    s.contains("://") && !s.contains(char::is_whitespace)
}

/// A possibly quoted token that is not a flag.
fn url_token(input: &str) -> IResult<&str, &str> {
    context(
        "url token",
        verify(
            delimited(
                opt(one_of("'\"")),
                take_till1(|c: char| c.is_whitespace() || QUOTES.contains(&c)),
                opt(one_of("'\"")),
            ),
            |token: &str| !token.starts_with('-'),
        ),
    )(input)
}

fn bare_token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

fn flag_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        char('-'),
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
    ))(input)
}

/// A flag together with its argument, as it may sit between `curl` and the URL.
fn flag_group(input: &str) -> IResult<&str, &str> {
    context(
        "flag group",
        alt((
            recognize(tuple((
                alt((tag("-X"), tag("--request"))),
                multispace1,
                alt((quoted_data_parse, bare_token)),
            ))),
            recognize(pair(
                flag_name,
                opt(preceded(
                    multispace1,
                    verify(quoted_data_parse, |arg: &str| !looks_like_bare_url(arg)),
                )),
            )),
        )),
    )(input)
}

/// `curl <url>`: the URL is the first argument.
pub fn url_parse(input: &str) -> IResult<&str, &str> {
    context(
        "url parse",
        preceded(pair(tag(CURL_CMD), multispace1), url_token),
    )(input)
}

/// `curl <flags...> <url>`: the URL follows one or more flags.
pub fn url_after_flags_parse(input: &str) -> IResult<&str, &str> {
    context(
        "url after flags parse",
        preceded(
            tuple((
                tag(CURL_CMD),
                many0(preceded(multispace1, flag_group)),
                multispace1,
            )),
            url_token,
        ),
    )(input)
}

/// Locate the target URL, trying `curl <url>` before `curl <flags> <url>`.
pub fn find_url(input: &str) -> Option<&str> {
    find_first(input, url_parse)
        .or_else(|| find_first(input, url_after_flags_parse))
        .map(|url| url.trim_matches(QUOTES))
}

/// `-H 'Name: value'`, yielding the trimmed name and value.
pub fn header_parse(input: &str) -> IResult<&str, (&str, &str)> {
    context(
        "header parse",
        map_opt(flag_argument("-H"), split_header),
    )(input)
}

fn split_header(header: &str) -> Option<(&str, &str)> {
    header
        .split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
}

/// `-b 'a=1; b=2'`, yielding the raw cookie string.
pub fn cookie_parse(input: &str) -> IResult<&str, &str> {
    context("cookie parse", flag_argument("-b"))(input)
}

/// Split a cookie string into name/value pairs on `;` and the first `=`.
pub fn cookie_pairs(cookies: &str) -> impl Iterator<Item = (&str, &str)> {
    cookies
        .trim()
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.trim(), value.trim()))
}

/// `--data-raw '...'`, yielding the body text.
pub fn data_raw_parse(input: &str) -> IResult<&str, &str> {
    context("data raw parse", flag_argument("--data-raw"))(input)
}

fn method_flag_parse<'a>(flag: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(pair(tag(flag), multispace1), bare_token)
}

/// `-X PUT`, yielding the raw method token.
pub fn method_parse(input: &str) -> IResult<&str, &str> {
    context("method parse", method_flag_parse("-X"))(input)
}

/// `--request PUT`, yielding the raw method token.
pub fn request_parse(input: &str) -> IResult<&str, &str> {
    context("request parse", method_flag_parse("--request"))(input)
}

/// Infer the request method.
///
/// Any `-X`/`--request` in the text selects the explicit branch, even when no
/// token follows it (the method then stays GET). Otherwise a body, or a `-d`
/// or `--data` anywhere in the text, means POST. These are plain substring
/// checks: a match inside a quoted value counts too.
pub fn infer_method(input: &str, has_data: bool) -> String {
    if input.contains("-X") || input.contains("--request") {
        find_first(input, method_parse)
            .or_else(|| find_first(input, request_parse))
            .map(|token| token.trim_matches(QUOTES).to_uppercase())
            .filter(|method| !method.is_empty())
            .unwrap_or_else(|| "GET".into())
    } else if has_data || input.contains("-d") || input.contains("--data") {
        "POST".into()
    } else {
        "GET".into()
    }
}
