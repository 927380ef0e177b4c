//! # Html text extraction
//!
//! Reduces an html document to its readable text blocks: the page title
//! followed by headings, paragraphs, list items and table cells in document
//! order. Script and style contents never make it into the output.

use std::sync::LazyLock;

use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

const BLOCK_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "p",
    "li",
    "pre",
    "blockquote",
    "td",
    "th",
    "dt",
    "dd",
    "figcaption",
];

const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template", "svg"];

static BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&BLOCK_TAGS.join(", ")).unwrap());

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("head > title").unwrap());

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Extracts the readable text blocks of `html`, whitespace collapsed.
///
/// Falls back to the whole `<body>` text when the page has no block-level
/// elements carrying text.
pub fn extract_text_blocks(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut blocks = Vec::new();

    if let Some(title) = document.select(&TITLE_SELECTOR).next() {
        let title = collapse_whitespace(&visible_text(title));
        if !title.is_empty() {
            blocks.push(title);
        }
    }

    let mut body_blocks = document
        .select(&BLOCK_SELECTOR)
        .filter(|element| !has_block_ancestor(element))
        .map(|element| collapse_whitespace(&visible_text(element)))
        .filter(|text| !text.is_empty())
        .peekable();

    if body_blocks.peek().is_some() {
        blocks.extend(body_blocks);
        return blocks;
    }

    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        let text = collapse_whitespace(&visible_text(body));
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    blocks
}

fn has_block_ancestor(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| BLOCK_TAGS.contains(&a.value().name()))
}

/// Text nodes under `element` outside hidden tags, space separated so that
/// `<br>`, nested blocks and adjacent inline elements never glue words
fn visible_text(element: ElementRef) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| HIDDEN_TAGS.contains(&a.value().name()));
            (!hidden).then_some(&**text)
        })
        .join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}
