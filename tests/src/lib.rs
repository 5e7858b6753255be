//! Shared helpers for the cross-crate integration tests.

use infix_ast::ast::ExpressionNode;
use infix_ast::visit::{DumpVisitor, Visitable};
use infix_parser::{parse_expression, ParseError};

/// Parses `input` and renders the resulting tree with a fresh
/// `DumpVisitor`.
pub fn parse_and_dump(input: &str) -> Result<String, ParseError> {
    let expr = parse_expression(input)?;
    Ok(dump(&expr))
}

/// Renders a tree with a fresh `DumpVisitor`.
pub fn dump(expr: &ExpressionNode) -> String {
    let mut visitor = DumpVisitor::new();
    expr.accept(&mut visitor)
        .unwrap_or_else(|e| panic!("dump visitor failed: {e}"));
    visitor.into_output()
}
