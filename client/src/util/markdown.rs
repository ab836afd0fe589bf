//! Light Markdown rendering for AI replies.
//!
//! Paragraphs become inline `<span>`s so a short answer sits inside its
//! bubble without block margins. Raw HTML in the reply is dropped before
//! rendering, and link or image destinations outside `http`, `https` and
//! `mailto` (relative paths included) are blanked.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Render reply text to an HTML fragment.
pub fn render_inline_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Paragraph) => Some(Event::InlineHtml(CowStr::Borrowed("<span>"))),
        Event::End(TagEnd::Paragraph) => Some(Event::InlineHtml(CowStr::Borrowed("</span>"))),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: safe_destination(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: safe_destination(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Keep relative destinations and allowed schemes; anything else becomes empty.
fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    // Browsers ignore whitespace and control characters inside a scheme.
    let compact: String = dest.chars().filter(|c| !c.is_ascii_whitespace() && !c.is_control()).collect();
    let scheme_end = compact.find(':');
    let path_start = compact.find(['/', '?', '#']);
    let scheme = match (scheme_end, path_start) {
        (Some(colon), Some(path)) if path < colon => None,
        (Some(colon), _) => Some(&compact[..colon]),
        (None, _) => None,
    };
    match scheme {
        None => dest,
        Some(scheme) if ALLOWED_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)) => dest,
        Some(_) => CowStr::Borrowed(""),
    }
}
