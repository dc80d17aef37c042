//! Single-level tree rewriting.

use super::{ExpressionStatement, Node, NullStatement, Program, Statement};

/// Apply `transform` to a node, looking through the program root and
/// expression statements.
///
/// - A [`Program`] is rebuilt from the rewritten statements. An expression
///   result is wrapped back into an [`ExpressionStatement`]; a program-shaped
///   result cannot stand in for a statement and becomes a [`NullStatement`].
///   Diagnostics are carried over unchanged.
/// - An expression statement is rewritten through its inner expression, and
///   the expression-typed result is returned as is.
/// - Any other node is handed to `transform` once.
///
/// Children of other nodes (operands, call arguments, block bodies) are not
/// visited; a transform that wants to reach them recurses itself.
pub fn modify<F>(node: Node, transform: &mut F) -> Node
where
    F: FnMut(Node) -> Node,
{
    match node {
        Node::Program(program) => {
            let Program { statements, errors } = program;
            let statements = statements
                .into_iter()
                .map(|statement| {
                    let token = statement.token().clone();
                    match modify(Node::Statement(statement), transform) {
                        Node::Statement(statement) => statement,
                        Node::Expression(expression) => {
                            Statement::Expression(ExpressionStatement::new(expression))
                        }
                        Node::Program(_) | Node::NullProgram => {
                            Statement::Null(NullStatement { token })
                        }
                    }
                })
                .collect();
            Node::Program(Program { statements, errors })
        }
        Node::Statement(Statement::Expression(statement)) => {
            modify(Node::Expression(statement.expression), transform)
        }
        other => transform(other),
    }
}
