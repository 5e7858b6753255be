// Abstract Syntax Tree (AST) definitions for the Infix expression language.
// Expressions form a closed set of four node kinds; consumers dispatch over
// them through the visitor in `crate::visit`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// An expression tree node.
///
/// The variant set is closed on purpose: every consumer matches all four
/// kinds, and adding a kind is expected to break every visitor at compile
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpressionNode {
    Literal(LiteralNode),
    Variable(VariableNode),
    Binary(Box<BinaryExpressionNode>),
    Paren(Box<ParenExpressionNode>),
}

/// A numeric constant token: a single ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiteralNode {
    pub value: char,
}

/// An identifier token: a single ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableNode {
    pub name: char,
}

/// A binary operation. Both children are exclusively owned by this node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

/// A parenthesized sub-expression. One wrapper per source paren pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParenExpressionNode {
    pub inner: ExpressionNode,
}

/// The four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// Classifies a single source character as an operator.
    ///
    /// Returns `None` for anything that is not one of `+ - * /`.
    pub fn from_char(ch: char) -> Option<BinaryOperator> {
        match ch {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Sub),
            '*' => Some(BinaryOperator::Mul),
            '/' => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    /// The source character for this operator.
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
