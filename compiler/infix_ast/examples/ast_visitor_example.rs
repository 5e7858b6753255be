//! Example of using the visitor pattern to traverse and process an
//! expression tree.

use infix_ast::ast::*;
use infix_ast::to_json;
use infix_ast::visit::*;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Create a sample tree
    let ast = create_sample_ast();

    // Count nodes in the tree
    let mut counter = NodeCounter::default();
    ast.accept(&mut counter)?;

    println!("AST Node Counts:");
    println!("  Literals: {}", counter.literal_count);
    println!("  Variables: {}", counter.variable_count);
    println!("  Binary Operations: {}", counter.binary_op_count);
    println!("  Paren Groups: {}", counter.paren_count);

    // Collect variables
    let mut collector = VariableCollector::new();
    ast.accept(&mut collector)?;

    println!("\nVariables used:");
    for name in &collector.names {
        println!("  {name}");
    }

    // Dump the tree
    let mut dumper = DumpVisitor::new();
    ast.accept(&mut dumper)?;
    println!("\nDumped AST:");
    println!("{}", dumper.into_output());

    // Serialize it
    println!("\nAs JSON:");
    println!("{}", to_json(&ast)?);

    Ok(())
}

/// A visitor that counts the number of nodes of each kind in the tree.
#[derive(Default)]
pub struct NodeCounter {
    pub literal_count: usize,
    pub variable_count: usize,
    pub binary_op_count: usize,
    pub paren_count: usize,
}

impl Visitor for NodeCounter {
    type Output = ();

    fn visit_literal(&mut self, _node: &LiteralNode) -> VisitResult<Self::Output> {
        self.literal_count += 1;
        Ok(())
    }

    fn visit_variable(&mut self, _node: &VariableNode) -> VisitResult<Self::Output> {
        self.variable_count += 1;
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        self.binary_op_count += 1;
        node.left.accept(self)?;
        node.right.accept(self)
    }

    fn visit_paren_expr(&mut self, node: &ParenExpressionNode) -> VisitResult<Self::Output> {
        self.paren_count += 1;
        node.inner.accept(self)
    }
}

/// Builds the tree for `(k + v) * 2`.
fn create_sample_ast() -> ExpressionNode {
    ExpressionNode::Binary(Box::new(BinaryExpressionNode {
        left: ExpressionNode::Paren(Box::new(ParenExpressionNode {
            inner: ExpressionNode::Binary(Box::new(BinaryExpressionNode {
                left: ExpressionNode::Variable(VariableNode { name: 'k' }),
                operator: BinaryOperator::Add,
                right: ExpressionNode::Variable(VariableNode { name: 'v' }),
            })),
        })),
        operator: BinaryOperator::Mul,
        right: ExpressionNode::Literal(LiteralNode { value: '2' }),
    }))
}
