//! Inline markdown <-> [`FormattedText`].
//!
//! Supported inline formatting: `**strong**`, `*emphasis*`, `~~strike~~`,
//! `` `code` `` and links. A link whose destination is `ungendered:` does not
//! become a link; its title is the segment's ungendered alternative:
//!
//! ```text
//! [Bienvenido](ungendered: "Te damos la bienvenida")!
//! ```
//!
//! Block structure is flattened: paragraphs are joined with a blank line and
//! everything else contributes only its text. Line and paragraph breaks are
//! plain segments of their own, so no word spans two lines.

use pulldown_cmark::{Event, Options, Parser, Tag};

use elle_types::{Attributes, FormattedText, Segment};

/// Link destination that marks an ungendered alternative.
pub const UNGENDERED_DESTINATION: &str = "ungendered:";

const PARAGRAPH_BREAK: &str = "\n\n";

/// Parse inline markdown into segments. Adjacent text with identical
/// formatting ends up in a single segment.
#[must_use]
pub fn parse_markdown(source: &str) -> FormattedText {
    let mut out = FormattedText::new();
    let mut stack = vec![Attributes::default()];

    for event in Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH) {
        let current = stack.last().cloned().unwrap_or_default();
        match event {
            Event::Start(tag) => {
                if matches!(tag, Tag::Paragraph) && !out.is_empty() {
                    out.push(Segment::plain(PARAGRAPH_BREAK));
                }
                stack.push(apply_tag(current, tag));
            }
            Event::End(_) => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                out.push(Segment::new(text.into_string(), current));
            }
            Event::Code(code) => {
                let attributes = Attributes {
                    code: true,
                    ..current
                };
                out.push(Segment::new(code.into_string(), attributes));
            }
            Event::SoftBreak | Event::HardBreak => out.push(Segment::plain("\n")),
            _ => {}
        }
    }

    out
}

fn apply_tag(mut attributes: Attributes, tag: Tag<'_>) -> Attributes {
    match tag {
        Tag::Strong => attributes.strong = true,
        Tag::Emphasis => attributes.emphasis = true,
        Tag::Strikethrough => attributes.strikethrough = true,
        Tag::Link {
            dest_url, title, ..
        } => {
            if &*dest_url == UNGENDERED_DESTINATION {
                attributes.ungendered_alternative = Some(title.into_string());
            } else {
                attributes.link = Some(dest_url.into_string());
            }
        }
        _ => {}
    }
    attributes
}

/// Render segments back to inline markdown.
///
/// When a segment carries both a link and an ungendered alternative, only the
/// alternative is written; markdown cannot nest links.
#[must_use]
pub fn render_markdown(text: &FormattedText) -> String {
    let mut out = String::new();
    for segment in text.segments() {
        render_segment(&mut out, segment);
    }
    out
}

fn render_segment(out: &mut String, segment: &Segment) {
    let raw = segment.text();
    let attributes = segment.attributes();

    if attributes.code {
        out.push_str(&wrap(code_span(raw), attributes));
        return;
    }

    let body = raw.trim();
    if body.is_empty() || *attributes == Attributes::default() {
        let escaped = escape_text(raw, at_line_start(out));
        out.push_str(&escaped);
        return;
    }

    // Delimiters must hug non-whitespace to be recognized.
    let lead = &raw[..raw.len() - raw.trim_start().len()];
    let trail = &raw[raw.trim_end().len()..];

    out.push_str(lead);
    out.push_str(&wrap(escape_text(body, false), attributes));
    out.push_str(trail);
}

fn wrap(mut inner: String, attributes: &Attributes) -> String {
    if attributes.emphasis {
        inner = format!("*{inner}*");
    }
    if attributes.strong {
        inner = format!("**{inner}**");
    }
    if attributes.strikethrough {
        inner = format!("~~{inner}~~");
    }
    if let Some(alternative) = &attributes.ungendered_alternative {
        inner = format!(
            "[{inner}]({UNGENDERED_DESTINATION} \"{}\")",
            escape_title(alternative)
        );
    } else if let Some(link) = &attributes.link {
        inner = format!("[{inner}](<{link}>)");
    }
    inner
}

/// Whether the next character written would open a line, ignoring indentation.
fn at_line_start(out: &str) -> bool {
    out.rsplit('\n')
        .next()
        .is_none_or(|line| line.chars().all(|c| c == ' '))
}

/// Escape inline punctuation everywhere and block markers where they would
/// open a line: headings, quotes, bullets, setext underlines and ordinals.
fn escape_text(text: &str, mut line_start: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut ordinal = false;
    for c in text.chars() {
        let block_marker = line_start && matches!(c, '#' | '>' | '-' | '+' | '=');
        let ordinal_marker = ordinal && matches!(c, '.' | ')');
        let inline = matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '~' | '<' | '&');
        if block_marker || ordinal_marker || inline {
            out.push('\\');
        }
        ordinal = (line_start || ordinal) && c.is_ascii_digit();
        line_start = c == '\n' || (line_start && c == ' ');
        out.push(c);
    }
    out
}

fn escape_title(title: &str) -> String {
    title.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Fence `code` so it parses back byte for byte. One space of padding is
/// stripped by the parser when both ends carry one, so pad to compensate.
fn code_span(code: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in code.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    let fence = "`".repeat(longest + 1);
    let spaced = code.starts_with(' ') && code.ends_with(' ') && !code.trim().is_empty();
    if longest > 0 || spaced {
        format!("{fence} {code} {fence}")
    } else {
        format!("{fence}{code}{fence}")
    }
}
