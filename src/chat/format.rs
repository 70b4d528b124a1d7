//! Message text to display markup.
//!
//! Each line is cut into `**bold**` spans first. Single `*` markers are then
//! paired across the rest of the line, a bold span counting as one unit, and
//! separately inside each bold span, so emphasis can wrap bold text but never
//! cross it. `http(s)://` links are found in the plain text left over. The
//! pieces are written out as pulldown-cmark events, so every piece of user
//! text goes through the HTML writer's escaping.

use std::ops::Range;

use pulldown_cmark::{html, CowStr, Event, Tag, TagEnd};
use time::{macros::format_description, OffsetDateTime};

use crate::res::escape_html;

pub fn format_content(text: &str) -> String {
    let mut events = Vec::new();
    for piece in text.split_inclusive(['\n', '\r']) {
        let (line, terminator) = match piece.char_indices().last() {
            Some((i, '\n' | '\r')) => piece.split_at(i),
            _ => (piece, ""),
        };

        let mut pieces = Vec::new();
        for (bold, span) in split_delimited(line, "**") {
            if bold {
                pieces.push(Piece::Strong(span));
            } else {
                pieces.extend(starred(line, span));
            }
        }
        push_pieces(&mut events, line, pieces);

        if !terminator.is_empty() {
            events.push(Event::Text(terminator.into()));
        }
    }

    let mut out = String::with_capacity(text.len());
    html::push_html(&mut out, events.into_iter());
    out
}

/// `hh:mm AM`, the way message times are shown next to the sender.
pub fn format_time(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(format_description!("[hour repr:12]:[minute] [period]"))
        .unwrap_or_default()
}

/// Byte ranges of a line, in order.
enum Piece {
    Text(Range<usize>),
    Star(usize),
    Strong(Range<usize>),
}

/// Splits `line` into `(delimited, span)` parts, pairing each delimiter with
/// the nearest following one. An unpaired delimiter stays in the text.
fn split_delimited(line: &str, delim: &str) -> Vec<(bool, Range<usize>)> {
    let mut parts = Vec::new();
    let mut from = 0;
    while let Some(open) = line[from..].find(delim).map(|i| from + i) {
        let inner = open + delim.len();
        let Some(close) = line[inner..].find(delim).map(|i| inner + i) else {
            break;
        };
        parts.push((false, from..open));
        parts.push((true, inner..close));
        from = close + delim.len();
    }
    parts.push((false, from..line.len()));
    parts
}

fn starred(line: &str, span: Range<usize>) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut start = span.start;
    for (i, _) in line[span.clone()].match_indices('*') {
        let at = span.start + i;
        if at > start {
            pieces.push(Piece::Text(start..at));
        }
        pieces.push(Piece::Star(at));
        start = at + 1;
    }
    if span.end > start {
        pieces.push(Piece::Text(start..span.end));
    }
    pieces
}

/// Stars pair up in order; with an odd count the last one is plain text.
fn push_pieces<'a>(events: &mut Vec<Event<'a>>, line: &'a str, pieces: Vec<Piece>) {
    let stars = pieces.iter().filter(|piece| matches!(piece, Piece::Star(_))).count();
    let mut paired = stars - stars % 2;
    let mut open = false;
    let mut text: Option<Range<usize>> = None;

    for piece in pieces {
        let run = match piece {
            Piece::Text(range) => range,
            Piece::Star(at) if paired == 0 => at..at + 1,
            Piece::Star(_) => {
                flush_text(events, line, text.take());
                events.push(if open {
                    Event::End(TagEnd::Emphasis)
                } else {
                    Event::Start(Tag::Emphasis)
                });
                open = !open;
                paired -= 1;
                continue;
            }
            Piece::Strong(span) => {
                flush_text(events, line, text.take());
                events.push(Event::Start(Tag::Strong));
                push_pieces(events, line, starred(line, span));
                events.push(Event::End(TagEnd::Strong));
                continue;
            }
        };
        text = Some(match text {
            Some(pending) => pending.start..run.end,
            None => run,
        });
    }
    flush_text(events, line, text);
}

fn flush_text<'a>(events: &mut Vec<Event<'a>>, line: &'a str, text: Option<Range<usize>>) {
    if let Some(range) = text {
        push_linked(events, &line[range]);
    }
}

fn push_linked<'a>(events: &mut Vec<Event<'a>>, text: &'a str) {
    let mut rest = text;
    while let Some(start) = find_url(rest) {
        let end = rest[start..]
            .find(char::is_whitespace)
            .map_or(rest.len(), |len| start + len);
        let url = &rest[start..end];

        push_text(events, &rest[..start]);
        events.push(Event::InlineHtml(CowStr::from(format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
            escape_html(&url.replace('"', "%22"))
        ))));
        events.push(Event::Text(url.into()));
        events.push(Event::InlineHtml("</a>".into()));

        rest = &rest[end..];
    }
    push_text(events, rest);
}

fn push_text<'a>(events: &mut Vec<Event<'a>>, text: &'a str) {
    if !text.is_empty() {
        events.push(Event::Text(text.into()));
    }
}

/// Byte offset of the first `http://` or `https://` followed by at least
/// one non-whitespace character.
fn find_url(text: &str) -> Option<usize> {
    text.match_indices("http").map(|(i, _)| i).find(|&i| {
        let tail = &text[i + 4..];
        let tail = tail.strip_prefix('s').unwrap_or(tail);
        tail.strip_prefix("://")
            .and_then(|t| t.chars().next())
            .is_some_and(|c| !c.is_whitespace())
    })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn bold() {
        assert_eq!(format_content("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn italic() {
        assert_eq!(format_content("*it*"), "<em>it</em>");
    }

    #[test]
    fn bold_wins_over_italic() {
        assert_eq!(
            format_content("**a** and *b*"),
            "<strong>a</strong> and <em>b</em>"
        );
        assert_eq!(
            format_content("**a *b* c**"),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn italic_wraps_bold() {
        assert_eq!(
            format_content("*a **b** c*"),
            "<em>a <strong>b</strong> c</em>"
        );
        assert_eq!(
            format_content("*x* **y** *z*"),
            "<em>x</em> <strong>y</strong> <em>z</em>"
        );
    }

    #[test]
    fn crossed_markers_stay_nested() {
        assert_eq!(format_content("*a **b* c**"), "*a <strong>b* c</strong>");
    }

    #[test]
    fn odd_star_joins_a_link() {
        assert_eq!(
            format_content("*a* http://x.test/*"),
            r#"<em>a</em> <a href="http://x.test/*" target="_blank" rel="noopener noreferrer">http://x.test/*</a>"#
        );
    }

    #[test]
    fn unpaired_markers_stay_literal() {
        assert_eq!(format_content("2 * 3"), "2 * 3");
        assert_eq!(format_content("*open"), "*open");
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        assert_eq!(format_content("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn links_keep_surrounding_text() {
        assert_eq!(
            format_content("see http://x.test"),
            r#"see <a href="http://x.test" target="_blank" rel="noopener noreferrer">http://x.test</a>"#
        );
        assert_eq!(
            format_content("https://a.test/x now"),
            r#"<a href="https://a.test/x" target="_blank" rel="noopener noreferrer">https://a.test/x</a> now"#
        );
    }

    #[test]
    fn bare_scheme_is_not_a_link() {
        assert_eq!(format_content("http:// nothing"), "http:// nothing");
        assert_eq!(format_content("httpd rules"), "httpd rules");
    }

    #[test]
    fn links_inside_emphasis() {
        assert_eq!(
            format_content("**http://x.test**"),
            r#"<strong><a href="http://x.test" target="_blank" rel="noopener noreferrer">http://x.test</a></strong>"#
        );
    }

    #[test]
    fn markup_is_neutralized() {
        let out = format_content("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));

        let out = format_content(r#"http://x.test/"onmouseover="x"#);
        assert!(out.starts_with(r#"<a href="http://x.test/%22onmouseover=%22x" target="#));
    }

    #[test]
    fn time_is_twelve_hour() {
        assert_eq!(format_time(datetime!(2024-05-01 15:07 UTC)), "03:07 PM");
        assert_eq!(format_time(datetime!(2024-05-01 0:30 UTC)), "12:30 AM");
    }
}
