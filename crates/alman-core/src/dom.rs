//! Narrow tree-query layer over a parsed HTML document.
//!
//! Entry parsers only ever need to select descendants, read text, walk
//! forward through siblings, read an attribute and drop unwanted nodes, so
//! that is all this module exposes. Parsed documents are not `Send`; keep
//! them out of scope across `.await` points.

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

pub struct Document {
    html: Html,
}

/// Element handle borrowed from a [`Document`]
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl Document {
    /// Parse a full page. Empty bodies are rejected, anything else is recovered.
    pub fn parse(html: &str) -> Result<Self, ParseError> {
        if html.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }

        Ok(Self {
            html: Html::parse_document(html),
        })
    }

    /// Parse a snippet such as markup embedded in an attribute
    pub fn parse_fragment(html: &str) -> Self {
        Self {
            html: Html::parse_fragment(html),
        }
    }

    /// All elements matching `css`, in document order
    pub fn select(&self, css: &str) -> Result<Vec<Node<'_>>, ParseError> {
        let selector = compile(css)?;
        Ok(self.html.select(&selector).map(Node).collect())
    }

    pub fn first(&self, css: &str) -> Result<Option<Node<'_>>, ParseError> {
        let selector = compile(css)?;
        Ok(self.html.select(&selector).next().map(Node))
    }

    /// Detach every element matching `css`; returns how many were removed
    pub fn remove(&mut self, css: &str) -> Result<usize, ParseError> {
        let selector = compile(css)?;
        let ids: Vec<_> = self.html.select(&selector).map(|el| el.id()).collect();

        for id in &ids {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.detach();
            }
        }

        Ok(ids.len())
    }

    pub fn text(&self) -> String {
        self.html.root_element().text().collect()
    }
}

impl<'a> Node<'a> {
    /// Descendants matching `css`, in document order
    pub fn select(&self, css: &str) -> Result<Vec<Node<'a>>, ParseError> {
        let selector = compile(css)?;
        Ok(self.0.select(&selector).map(Node).collect())
    }

    pub fn first(&self, css: &str) -> Result<Option<Node<'a>>, ParseError> {
        let selector = compile(css)?;
        Ok(self.0.select(&selector).next().map(Node))
    }

    /// Following element siblings matching `css`
    pub fn next_siblings(&self, css: &str) -> Result<Vec<Node<'a>>, ParseError> {
        let selector = compile(css)?;
        Ok(self
            .0
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .filter(|el| selector.matches(el))
            .map(Node)
            .collect())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }
}

/// Strip soft hyphens, turn no-break spaces into plain spaces, trim
pub fn clean_text(text: &str) -> String {
    text.replace('\u{ad}', "")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}

fn compile(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}
