//! Markup Nodes
//!
//! Element, attribute and child nodes of a component template tree.
//! Trees are owned by the host and never mutated during analysis.

use crate::{ElementTag, Expr, MarkupError};
use serde::{Deserialize, Serialize};

/// Byte range in the template source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Element node (`<tag attr={..}>children</tag>`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Tag name as written
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeItem>,
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Named attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// `None` for the value-less shorthand (`<input disabled />`)
    #[serde(default)]
    pub value: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Entry of an element's attribute list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AttributeItem {
    Attribute(Attribute),
    /// `{...props}`
    Spread { argument: Expr },
}

/// Child of an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Child {
    Element(ElementNode),
    Text { value: String },
    /// `{expression}` in child position
    Expression { expression: Expr },
}

impl Child {
    #[inline]
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { value } => Some(value),
            _ => None,
        }
    }
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Option<Expr>) -> Self {
        Self {
            name: name.into(),
            value,
            span: None,
        }
    }
}

impl ElementNode {
    /// Create an element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            span: None,
        }
    }

    /// Add an attribute with an expression value
    pub fn attr(mut self, name: &str, value: Expr) -> Self {
        self.attributes
            .push(AttributeItem::Attribute(Attribute::new(name, Some(value))));
        self
    }

    /// Add a string-literal attribute (`name="value"`)
    pub fn str_attr(self, name: &str, value: &str) -> Self {
        self.attr(name, Expr::str(value))
    }

    /// Add a value-less attribute (`name`)
    pub fn flag(mut self, name: &str) -> Self {
        self.attributes
            .push(AttributeItem::Attribute(Attribute::new(name, None)));
        self
    }

    /// Add a spread (`{...argument}`)
    pub fn spread(mut self, argument: Expr) -> Self {
        self.attributes.push(AttributeItem::Spread { argument });
        self
    }

    pub fn text(mut self, value: &str) -> Self {
        self.children.push(Child::Text { value: value.to_string() });
        self
    }

    pub fn expression(mut self, expression: Expr) -> Self {
        self.children.push(Child::Expression { expression });
        self
    }

    pub fn child(mut self, element: ElementNode) -> Self {
        self.children.push(Child::Element(element));
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Classified tag; fails fast on a nameless element
    pub fn tag(&self) -> Result<ElementTag, MarkupError> {
        ElementTag::parse(&self.name)
    }

    pub fn has_spread(&self) -> bool {
        crate::has_spread(&self.attributes)
    }

    /// Named attributes, skipping spreads
    pub fn named_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter_map(|item| match item {
            AttributeItem::Attribute(attr) => Some(attr),
            AttributeItem::Spread { .. } => None,
        })
    }

    /// Direct element children
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &ElementNode> {
        self.children.iter().filter_map(Child::as_element)
    }

    /// Pre-order walk over this element and every descendant element
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Pre-order element iterator
pub struct Walk<'a> {
    stack: Vec<&'a ElementNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ElementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.elements().rev());
        Some(node)
    }
}
