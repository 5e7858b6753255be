//! The precedence parser.
//!
//! A single left-to-right scan over the input characters drives two
//! explicit stacks:
//!
//! - an operand stack of fully-formed [`ExpressionNode`] subtrees, and
//! - a marker stack of pending operators and open parentheses.
//!
//! Reduction pops two operands and one operator marker and pushes the
//! combined binary node back. An incoming operator at an equal or lower
//! precedence tier first reduces the pending operator and is then
//! reconsidered against the new marker top, so operators at the same tier
//! group left to right. Characters that are not digits, letters, operators
//! or parentheses are skipped without any state change.
//!
//! Malformed input (unbalanced parentheses, operator chains with too few
//! operands) fails deterministically at the first stack pop that finds the
//! wrong stack shape, with a [`ParseError`] naming the condition. An
//! operator left stranded on the marker stack once only a single operand
//! remains is an exception: the final flush leaves it unreduced and it is
//! silently dropped.

use infix_ast::ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, LiteralNode, ParenExpressionNode,
    VariableNode,
};


/// An entry on the marker stack: an operator awaiting reduction, or an
/// open parenthesis delimiting a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Op(BinaryOperator),
    OpenParen,
}

/// An error produced by parsing malformed input.
///
/// There is no recovery and no partial tree; the first failing stack pop
/// aborts the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A reduction needed two operands but the operand stack ran out,
    /// e.g. an operator chain with too few operands.
    #[error("operator is missing an operand")]
    MissingOperand,

    /// A closing parenthesis had no matching open parenthesis, or an open
    /// parenthesis was still unclosed when a reduction needed an operator.
    #[error("unbalanced parenthesis")]
    UnbalancedParen,

    /// The scan consumed the whole input without producing any expression,
    /// e.g. empty input or input made only of skipped characters.
    #[error("input contains no expression")]
    EmptyExpression,
}

/// Binding strength of an operator. `*` and `/` bind tighter than `+`
/// and `-`.
fn precedence(op: BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub => 1,
        BinaryOperator::Mul | BinaryOperator::Div => 2,
    }
}

/// The two stacks of one parse. Every call to [`parse_expression`] owns a
/// fresh pair; nothing is retained between calls.
#[derive(Debug, Default)]
struct Parser {
    operands: Vec<ExpressionNode>,
    markers: Vec<Marker>,
}

impl Parser {
    /// Pops two operands and one operator marker and pushes the combined
    /// binary node. The right operand is popped first.
    fn reduce_once(&mut self) -> Result<(), ParseError> {
        let right = self.operands.pop().ok_or(ParseError::MissingOperand)?;
        let left = self.operands.pop().ok_or(ParseError::MissingOperand)?;
        let operator = match self.markers.pop() {
            Some(Marker::Op(op)) => op,
            _ => return Err(ParseError::UnbalancedParen),
        };
        log::trace!("reduce: {operator}");
        self.operands.push(ExpressionNode::Binary(Box::new(
            BinaryExpressionNode {
                left,
                operator,
                right,
            },
        )));
        Ok(())
    }

    /// Handles a closing parenthesis: reduces until the matching open
    /// parenthesis is on top, wraps the group's operand in a paren node,
    /// then discards the open-parenthesis marker.
    fn close_group(&mut self) -> Result<(), ParseError> {
        while !matches!(self.markers.last(), Some(Marker::OpenParen)) {
            if self.markers.is_empty() {
                return Err(ParseError::UnbalancedParen);
            }
            self.reduce_once()?;
        }
        let inner = self.operands.pop().ok_or(ParseError::MissingOperand)?;
        self.operands
            .push(ExpressionNode::Paren(Box::new(ParenExpressionNode { inner })));
        self.markers.pop();
        Ok(())
    }
}

/// Parses an infix expression into a single tree.
///
/// The input is a flat sequence of single-character tokens: ASCII digits
/// become [`LiteralNode`]s, ASCII letters become [`VariableNode`]s, the
/// operators `+ - * /` combine them honoring precedence, and parentheses
/// group explicitly. Every paren pair produces one [`ParenExpressionNode`]
/// wrapper, even around a lone literal or variable. Any other character is
/// skipped.
///
/// # Example
///
/// ```
/// use infix_parser::parse_expression;
///
/// let expr = parse_expression("1+(3+4)*5").unwrap();
/// assert_eq!(
///     expr.dump().unwrap(),
///     "Binary(Literal(1)+Binary(Paren(Binary(Literal(3)+Literal(4)))*Literal(5)))"
/// );
/// ```
pub fn parse_expression(input: &str) -> Result<ExpressionNode, ParseError> {
    log::debug!("parse_expression: {} characters", input.len());

    let chars: Vec<char> = input.chars().collect();
    let mut parser = Parser::default();

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if let Some(op) = BinaryOperator::from_char(ch) {
            match parser.markers.last() {
                Some(&Marker::Op(top)) => {
                    if precedence(op) > precedence(top) {
                        // The new operator binds tighter; defer the
                        // pending one.
                        parser.markers.push(Marker::Op(op));
                    } else {
                        // Reduce the pending operator first, then
                        // reconsider this character against the new marker
                        // top. Equal tiers therefore group left to right.
                        parser.reduce_once()?;
                        continue;
                    }
                }
                // Marker top is an open parenthesis, or the stack is
                // empty. Nothing is pending in this group yet.
                _ => parser.markers.push(Marker::Op(op)),
            }
        } else if ch == '(' {
            parser.markers.push(Marker::OpenParen);
        } else if ch == ')' {
            parser.close_group()?;
        } else if ch.is_ascii_digit() {
            parser
                .operands
                .push(ExpressionNode::Literal(LiteralNode { value: ch }));
        } else if ch.is_ascii_alphabetic() {
            parser
                .operands
                .push(ExpressionNode::Variable(VariableNode { name: ch }));
        } else {
            log::trace!("skipping unrecognized character {ch:?}");
        }
        i += 1;
    }

    // Final flush. The operand-count guard stops before popping a lone
    // result, so a trailing unreduced operator is dropped rather than
    // reduced.
    while !parser.markers.is_empty() && parser.operands.len() > 1 {
        parser.reduce_once()?;
    }

    let result = parser.operands.pop().ok_or(ParseError::EmptyExpression)?;
    log::debug!("parse_expression: done");
    Ok(result)
}
