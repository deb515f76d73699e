//! Queryable document abstraction
//!
//! Extractors only ever see a tree of fragments that can be queried with CSS
//! selectors. The `scraper` backed implementation lives here as well.

use scraper::{ElementRef, Html, Selector};

use super::{ParsingError, ParsingResult};

/// An addressable sub-tree of a parsed document
pub trait Fragment: Sized {
    /// All descendants matching `selector`, in document order
    fn select_all(&self, selector: &Selector) -> Vec<Self>;

    /// First descendant matching `selector`
    fn select_first(&self, selector: &Selector) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    /// Concatenated text of the fragment and all its descendants
    fn text(&self) -> String;

    fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    /// Value of the named attribute on this fragment
    fn attr(&self, name: &str) -> Option<String>;

    /// Trimmed text of the first match, empty when nothing matches
    fn first_text(&self, selector: &Selector) -> String {
        self.select_first(selector)
            .map(|fragment| fragment.trimmed_text())
            .unwrap_or_default()
    }
}

/// A parsed page that hands out fragments
pub trait QueryableDocument {
    type Fragment<'a>: Fragment
    where
        Self: 'a;

    fn root(&self) -> Self::Fragment<'_>;
}

/// Compile a CSS selector, mapping failures into the parsing error type
pub fn compile_selector(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
}

/// HTML document parsed with `scraper`
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse raw markup bytes. Bytes that are not UTF-8 are rejected.
    pub fn parse(bytes: &[u8]) -> ParsingResult<Self> {
        let markup = std::str::from_utf8(bytes).map_err(|e| {
            ParsingError::html_parsing_failed(format!("document is not valid UTF-8: {e}"))
        })?;
        Ok(Self::parse_str(markup))
    }

    /// html5ever recovers from malformed markup, so this never fails
    pub fn parse_str(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl QueryableDocument for HtmlDocument {
    type Fragment<'a> = HtmlFragment<'a>;

    fn root(&self) -> HtmlFragment<'_> {
        HtmlFragment {
            element: self.html.root_element(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlFragment<'a> {
    element: ElementRef<'a>,
}

impl Fragment for HtmlFragment<'_> {
    fn select_all(&self, selector: &Selector) -> Vec<Self> {
        self.element
            .select(selector)
            .map(|element| HtmlFragment { element })
            .collect()
    }

    fn select_first(&self, selector: &Selector) -> Option<Self> {
        self.element
            .select(selector)
            .next()
            .map(|element| HtmlFragment { element })
    }

    fn text(&self) -> String {
        self.element.text().collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.element.value().attr(name).map(str::to_string)
    }
}
