//! Parsed page wrapper
//!
//! A [`Document`] is built once per fetched body and discarded after field
//! extraction. Parsing never fails: html5ever recovers from any input, and a
//! degenerate tree simply makes later selectors come up empty.

use crate::ExtractError;
use scraper::{ElementRef, Html, Selector};

/// Queryable tree built from one page body
#[derive(Debug)]
pub struct Document {
    html: Html,
}

/// Parses raw markup into a [`Document`]
pub fn parse(body: &str) -> Document {
    Document {
        html: Html::parse_document(body),
    }
}

impl Document {
    /// Returns every element matching `css`, in document order
    pub fn select_all(&self, css: &str) -> Result<Vec<ElementRef<'_>>, ExtractError> {
        let selector = compile(css)?;
        Ok(self.html.select(&selector).collect())
    }

    /// Returns the first element matching `css`
    pub fn select_first(&self, css: &str) -> Result<Option<ElementRef<'_>>, ExtractError> {
        let selector = compile(css)?;
        Ok(self.html.select(&selector).next())
    }
}

/// Compiles a CSS selector
pub(crate) fn compile(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css)
        .map_err(|e| ExtractError::InvalidPattern(format!("selector '{}': {}", css, e)))
}
