//! fOS Markup - Component template trees
//!
//! Element/attribute trees handed over by a template parser, plus the
//! static attribute accessor every accessibility check goes through.

mod accessor;
mod document;
mod expr;
mod node;
mod tag;

pub use accessor::{get_prop, has_spread, resolve, PropValue};
pub use document::MarkupDocument;
pub use expr::{BinaryOp, Expr, LogicalOp, UnaryOp, Value};
pub use node::{Attribute, AttributeItem, Child, ElementNode, Span, Walk};
pub use tag::ElementTag;

/// Markup error
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("Element has no tag name")]
    MissingTagName,

    #[error("Invalid markup document: {0}")]
    Json(#[from] serde_json::Error),
}
