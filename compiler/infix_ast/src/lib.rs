//! Abstract Syntax Tree (AST) for the Infix expression language.
//!
//! This crate defines the expression nodes produced by the parser, along
//! with the visitor machinery used to traverse them and a reference
//! `DumpVisitor` that renders a tree as text.

pub mod ast;
pub mod visit;

// Re-export commonly used types
pub use ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, LiteralNode, ParenExpressionNode,
    VariableNode,
};
pub use visit::{DumpVisitor, VisitError, VisitResult, Visitable, Visitor};

use std::error::Error;

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use infix_ast::ast::*;
/// use infix_ast::to_json;
///
/// let expr = ExpressionNode::Literal(LiteralNode { value: '4' });
/// let json = to_json(&expr).unwrap();
///
/// assert!(json.contains("Literal"), "JSON should contain the node kind");
/// assert!(json.contains('4'), "JSON should contain the literal value");
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
///
/// # Example
///
/// ```
/// use infix_ast::ast::*;
/// use infix_ast::{from_json, to_json};
///
/// let expr = ExpressionNode::Variable(VariableNode { name: 'v' });
/// let round_tripped: ExpressionNode = from_json(&to_json(&expr).unwrap()).unwrap();
/// assert_eq!(expr, round_tripped);
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> serde::Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
