//! Readme rendering: markdown to HTML plus a table of contents.
//!
//! DESIGN
//! ======
//! The readme is parsed once; h2/h3 headings get a slug id injected into the
//! event stream before HTML serialization, and the same slugs feed the TOC
//! menu. Slugs are deduplicated with a per-document counter so repeated
//! section names ("Example", "Example") stay addressable.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use std::collections::HashMap;

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

const MAX_SLUG_LEN: usize = 80;

/// Heading levels that participate in the TOC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TocLevel {
    H2,
    H3,
}

impl TocLevel {
    /// CSS class used for the TOC list item.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }

    fn from_heading(level: HeadingLevel) -> Option<Self> {
        match level {
            HeadingLevel::H2 => Some(Self::H2),
            HeadingLevel::H3 => Some(Self::H3),
            _ => None,
        }
    }
}

/// One TOC entry, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub level: TocLevel,
    pub text: String,
    pub slug: String,
}

/// A rendered readme: HTML body plus its TOC.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedMarkdown {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Render `markdown` to HTML, slugging h2/h3 headings for the TOC.
#[must_use]
pub fn render(markdown: &str) -> RenderedMarkdown {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let mut events: Vec<Event> = Parser::new_ext(markdown, options).collect();

    let mut slugs = SlugCounter::default();
    let mut toc = Vec::new();

    let mut index = 0;
    while index < events.len() {
        if let Event::Start(Tag::Heading { level, .. }) = &events[index] {
            if let Some(toc_level) = TocLevel::from_heading(*level) {
                let text = heading_text(&events[index + 1..]);
                let slug = slugs.next(&slugify(&text));

                if let Event::Start(Tag::Heading { id, .. }) = &mut events[index] {
                    *id = Some(CowStr::from(slug.clone()));
                }
                toc.push(TocEntry {
                    level: toc_level,
                    text,
                    slug,
                });
            }
        }
        index += 1;
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    RenderedMarkdown { html: out, toc }
}

/// Collapse a function-signature heading's parameter list: `on(event, fn)`
/// becomes `on()`. Headings without parentheses pass through untouched.
#[must_use]
pub fn collapse_signature(text: &str) -> String {
    let Some(open) = text.find('(') else {
        return text.to_owned();
    };
    let Some(close) = text[open..].find(')') else {
        return text.to_owned();
    };
    format!("{}(){}", &text[..open], &text[open + close + 1..])
}

/// Concatenated text of a heading, up to its end tag.
fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(chunk) | Event::Code(chunk) => text.push_str(chunk),
            _ => {}
        }
    }
    text
}

/// Lowercase-and-dash slug of a heading, ASCII only.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if ch.is_ascii() && !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

/// Deduplicates repeated slugs within one document.
#[derive(Default)]
struct SlugCounter {
    counts: HashMap<String, usize>,
}

impl SlugCounter {
    fn next(&mut self, base: &str) -> String {
        let entry = self.counts.entry(base.to_owned()).or_insert(0);
        let slug = if *entry == 0 {
            base.to_owned()
        } else {
            format!("{base}-{entry}")
        };
        *entry += 1;
        slug
    }
}
