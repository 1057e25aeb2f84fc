//! Field extraction primitives
//!
//! Small pure helpers the schemas are built from. None of them know about a
//! particular printer; they only navigate the tree and clean up text.

use crate::extract::document::{compile, Document};
use crate::ExtractError;
use regex::Regex;
use scraper::{ElementRef, Node};

/// Concatenated text of an element and its descendants
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Descends from `element` by taking the first match of each selector in turn
///
/// Returns `Ok(None)` as soon as one step has no match.
pub fn follow_path<'a>(
    element: ElementRef<'a>,
    path: &[&str],
) -> Result<Option<ElementRef<'a>>, ExtractError> {
    let mut current = element;
    for css in path {
        let selector = compile(css)?;
        match current.select(&selector).next() {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Text at `path` below the `index`-th element matching `css`
pub fn nth_text(
    doc: &Document,
    css: &str,
    index: usize,
    path: &[&str],
) -> Result<Option<String>, ExtractError> {
    let Some(element) = doc.select_all(css)?.get(index).copied() else {
        return Ok(None);
    };
    Ok(follow_path(element, path)?.map(element_text))
}

/// Text following the first text node matching `label` inside `scope`
///
/// The value is the next non-blank node in document order after the label,
/// which covers both `<td>Label</td><td>85%</td>` and `<b>Label</b>85%`.
pub fn labelled_text(scope: ElementRef<'_>, label: &Regex) -> Option<String> {
    let mut nodes = scope.descendants();
    nodes.find(|node| node.value().as_text().is_some_and(|text| label.is_match(text)))?;

    nodes.find_map(|node| {
        let text = match node.value() {
            Node::Text(text) => {
                let text: &str = text;
                text.to_string()
            }
            Node::Element(_) => ElementRef::wrap(node).map(element_text)?,
            _ => return None,
        };
        (!text.trim().is_empty()).then_some(text)
    })
}

/// Strips surrounding whitespace and percent signs
pub fn strip_percent(raw: &str) -> &str {
    raw.trim().trim_matches('%').trim()
}

/// Parses a percentage such as `"85%"` into an integer
pub fn parse_percentage(field: &str, raw: &str) -> Result<u8, ExtractError> {
    strip_percent(raw)
        .parse::<u8>()
        .map_err(|_| ExtractError::InvalidValue {
            field: field.to_string(),
            value: raw.trim().to_string(),
        })
}
