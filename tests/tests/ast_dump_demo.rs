//! Builds a tree by hand and checks that the parser produces the same
//! structure from the equivalent source text.

use infix_ast::ast::*;
use infix_ast::visit::{VariableCollector, Visitable};
use infix_parser::parse_expression;
use tests::dump;

#[test]
fn hand_built_tree_matches_parsed_tree() {
    // (k + v) * 2
    let by_hand = ExpressionNode::Binary(Box::new(BinaryExpressionNode {
        left: ExpressionNode::Paren(Box::new(ParenExpressionNode {
            inner: ExpressionNode::Binary(Box::new(BinaryExpressionNode {
                left: ExpressionNode::Variable(VariableNode { name: 'k' }),
                operator: BinaryOperator::Add,
                right: ExpressionNode::Variable(VariableNode { name: 'v' }),
            })),
        })),
        operator: BinaryOperator::Mul,
        right: ExpressionNode::Literal(LiteralNode { value: '2' }),
    }));

    let parsed = parse_expression("(k+v)*2").unwrap();
    assert_eq!(by_hand, parsed);
    assert_eq!(dump(&by_hand), dump(&parsed));
}

#[test]
fn collector_sees_variables_in_source_order() {
    let expr = parse_expression("a*(b+c)-d").unwrap();

    let mut collector = VariableCollector::new();
    expr.accept(&mut collector).unwrap();
    assert_eq!(collector.names, vec!['a', 'b', 'c', 'd']);
}
