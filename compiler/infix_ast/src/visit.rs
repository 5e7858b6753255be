//! Visitor pattern implementation for traversing the AST.
//!
//! This module provides a `Visitor` trait with one operation per expression
//! node kind, and a `Visitable` trait that nodes implement to accept
//! visitors. The node set is closed, so the visitor operations are required
//! methods: adding a node kind breaks every visitor implementation at
//! compile time rather than falling through a default.

use crate::ast::*;

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error produced by a visitor operation.
///
/// Dispatch itself never fails; this exists for downstream visitors whose
/// per-node operations are fallible. The visitors in this crate always
/// return `Ok`.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }
}

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the visit method matching this node's
    /// own kind, passing the node's payload. This is the only thing it
    /// does.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;
}

/// A visitor over the expression node kinds.
///
/// Implementations drive their own recursion: a visit method that wants to
/// descend calls `accept` on the node's children.
pub trait Visitor {
    /// The output type of the visitor.
    type Output;

    fn visit_literal(&mut self, node: &LiteralNode) -> VisitResult<Self::Output>;

    fn visit_variable(&mut self, node: &VariableNode) -> VisitResult<Self::Output>;

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output>;

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult<Self::Output>;
}

impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            ExpressionNode::Literal(node) => visitor.visit_literal(node),
            ExpressionNode::Variable(node) => visitor.visit_variable(node),
            ExpressionNode::Binary(node) => visitor.visit_binary_expr(node),
            ExpressionNode::Paren(node) => visitor.visit_paren_expr(node),
        }
    }
}

impl ExpressionNode {
    /// Renders this tree with a fresh `DumpVisitor`.
    pub fn dump(&self) -> VisitResult<String> {
        let mut visitor = DumpVisitor::new();
        self.accept(&mut visitor)?;
        Ok(visitor.into_output())
    }
}

/// A visitor that renders a tree into a flat text form mirroring its shape:
///
/// - `Literal(2)`, `Variable(v)` for the leaves,
/// - `Binary(<left><op><right>)` for binary operations,
/// - `Paren(<inner>)` for parenthesized groups.
///
/// Output accumulates in a buffer owned by the visitor instance. There is
/// no reset; construct a fresh visitor per dump.
#[derive(Debug, Default)]
pub struct DumpVisitor {
    buffer: String,
}

impl DumpVisitor {
    /// Creates a new dump visitor with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text accumulated so far.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Consumes the visitor and returns the accumulated text.
    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl Visitor for DumpVisitor {
    type Output = ();

    fn visit_literal(&mut self, node: &LiteralNode) -> VisitResult {
        self.buffer.push_str("Literal(");
        self.buffer.push(node.value);
        self.buffer.push(')');
        Ok(())
    }

    fn visit_variable(&mut self, node: &VariableNode) -> VisitResult {
        self.buffer.push_str("Variable(");
        self.buffer.push(node.name);
        self.buffer.push(')');
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult {
        self.buffer.push_str("Binary(");
        node.left.accept(self)?;
        self.buffer.push(node.operator.symbol());
        node.right.accept(self)?;
        self.buffer.push(')');
        Ok(())
    }

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult {
        self.buffer.push_str("Paren(");
        node.inner.accept(self)?;
        self.buffer.push(')');
        Ok(())
    }
}

/// A visitor that collects every variable name in a tree, left to right.
#[derive(Debug, Default)]
pub struct VariableCollector {
    /// The collected names.
    pub names: Vec<char>,
}

impl VariableCollector {
    /// Creates a new variable collector.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for VariableCollector {
    type Output = ();

    fn visit_literal(&mut self, _node: &LiteralNode) -> VisitResult {
        Ok(())
    }

    fn visit_variable(&mut self, node: &VariableNode) -> VisitResult {
        self.names.push(node.name);
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult {
        node.left.accept(self)?;
        node.right.accept(self)
    }

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult {
        node.inner.accept(self)
    }
}
