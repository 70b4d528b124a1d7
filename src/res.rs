use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use pulldown_cmark::{html, Event};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// Substitutes `{key}` placeholders in one pass. Values are inserted as
/// given and never searched for placeholders themselves; unknown keys and
/// stray braces are left alone.
pub fn fill(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let found = tail.find('}').and_then(|close| {
            let key = &tail[..close];
            fields
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match found {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Escapes `text` for use in markup, attribute values included.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    html::push_html(&mut out, std::iter::once(Event::Text(text.into())));
    // body text escaping may leave quotes alone
    out.replace('"', "&quot;")
}

/// Wraps a page body in the site layout.
pub fn page(title: &str, body: &str) -> Html<String> {
    let title = escape_html(title);
    Html(fill(
        include_res!(str, "/pages/layout.html"),
        &[("title", title.as_str()), ("body", body)],
    ))
}

pub fn sorry(what: &str) -> Response {
    let what = escape_html(what);
    (
        StatusCode::NOT_FOUND,
        page(
            "Not found",
            &fill(include_res!(str, "/pages/sorry.html"), &[("what", what.as_str())]),
        ),
    )
        .into_response()
}

/// A re-rendered form whose input was rejected.
pub fn rejected(html: Html<String>) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, html).into_response()
}
