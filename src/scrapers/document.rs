//! Typed view over a parsed HTML document.
//!
//! [`LinearDocument`] flattens every element of a [`scraper::Html`] tree into
//! document order (pre-order, start tags). Positions in that list let the
//! extractor walk *backwards* from an anchor: the elements before it are
//! exactly the preceding elements and ancestors, nearest first when walked
//! in reverse.

use scraper::{ElementRef, Html};

/// An element of the parsed document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// Wrap a `scraper` element reference.
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Lowercase tag name.
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Value of attribute `name`, if present.
    ///
    /// # Returns
    ///
    /// The raw, untrimmed attribute value borrowed from the document.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.element.value().attrs()
    }

    /// Direct child elements.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.element.children().filter_map(ElementRef::wrap).map(Node::new)
    }

    /// Descendant elements in document order, excluding `self`.
    pub fn descendants(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(Node::new)
    }

    /// Visible text: each text fragment trimmed, empty ones dropped,
    /// joined with single spaces.
    pub fn text(&self) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Text of an element whose only content is a single text node,
    /// possibly wrapped in single-child elements (`<p><b>12/03/2024</b></p>`).
    /// Elements with mixed or multiple children have no sole text.
    pub fn sole_text(&self) -> Option<&'a str> {
        let mut current = *self.element;
        loop {
            let mut children = current.children();
            let only = children.next()?;
            if children.next().is_some() {
                return None;
            }
            match only.value() {
                scraper::Node::Text(text) => return Some(&**text),
                scraper::Node::Element(_) => current = only,
                _ => return None,
            }
        }
    }
}

/// All elements of a document, in document order.
#[derive(Debug)]
pub struct LinearDocument<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> LinearDocument<'a> {
    /// Flatten every element of `html` in document order.
    ///
    /// # Arguments
    ///
    /// * `html` - Parsed document; the nodes borrow from it
    pub fn new(html: &'a Html) -> Self {
        let nodes = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(Node::new)
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Elements paired with their document-order position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Node<'a>)> + '_ {
        self.nodes.iter().copied().enumerate()
    }

    /// Elements that start before `position`, nearest first.
    pub fn preceding(&self, position: usize) -> impl Iterator<Item = Node<'a>> + '_ {
        let end = position.min(self.nodes.len());
        self.nodes[..end].iter().rev().copied()
    }
}
