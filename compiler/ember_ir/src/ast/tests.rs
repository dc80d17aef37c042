use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::{Token, TokenKind};

fn tok(kind: TokenKind, literal: &str) -> Token {
    Token::synthetic(kind, literal)
}

fn ident(name: &str) -> Identifier {
    Identifier::new(tok(TokenKind::Ident, name))
}

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral {
        token: tok(TokenKind::Int, &value.to_string()),
        value,
    })
}

fn var(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

fn infix(left: Expression, operator: BinaryOp, right: Expression) -> Expression {
    Expression::Infix(InfixExpression {
        token: tok(TokenKind::Plus, operator.as_symbol()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

fn expr_stmt(expression: Expression) -> Statement {
    Statement::Expression(ExpressionStatement::new(expression))
}

fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement {
        token: tok(TokenKind::LBrace, "{"),
        statements,
    }
}

fn turn_one_into_two(node: Node) -> Node {
    match node {
        Node::Expression(Expression::Integer(lit)) if lit.value == 1 => Node::Expression(int(2)),
        other => other,
    }
}

#[test]
fn test_let_statement_display() {
    let program = Program::new(
        vec![Statement::Let(LetStatement {
            token: tok(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: var("anotherVar"),
        })],
        Vec::new(),
    );
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_operator_display_is_parenthesised() {
    let neg_a = Expression::Prefix(PrefixExpression {
        token: tok(TokenKind::Minus, "-"),
        operator: UnaryOp::Neg,
        right: Box::new(var("a")),
    });
    let expr = infix(neg_a, BinaryOp::Mul, var("b"));
    assert_eq!(expr.to_string(), "((-a) * b)");
}

#[test]
fn test_compound_expression_display() {
    let array = Expression::Array(ArrayLiteral {
        token: tok(TokenKind::LBracket, "["),
        elements: vec![int(1), int(2)],
    });
    let index = Expression::Index(IndexExpression {
        token: tok(TokenKind::LBracket, "["),
        left: Box::new(array),
        index: Box::new(int(0)),
    });
    assert_eq!(index.to_string(), "([1, 2][0])");

    let hash = Expression::Hash(HashLiteral {
        token: tok(TokenKind::LBrace, "{"),
        pairs: vec![(
            Expression::String(StringLiteral {
                token: tok(TokenKind::String, "one"),
                value: "one".to_string(),
            }),
            int(1),
        )],
    });
    assert_eq!(hash.to_string(), "{\"one\": 1}");

    let call = Expression::Call(CallExpression {
        token: tok(TokenKind::LParen, "("),
        function: Box::new(var("add")),
        arguments: vec![int(1), infix(int(2), BinaryOp::Add, int(3))],
    });
    assert_eq!(call.to_string(), "add(1, (2 + 3))");
}

#[test]
fn test_function_and_if_display() {
    let function = Expression::Function(Rc::new(FunctionLiteral {
        token: tok(TokenKind::Function, "fn"),
        parameters: vec![ident("x"), ident("y")],
        body: block(vec![expr_stmt(infix(var("x"), BinaryOp::Add, var("y")))]),
    }));
    assert_eq!(function.to_string(), "fn(x, y) { (x + y); }");

    let conditional = Expression::If(IfExpression {
        token: tok(TokenKind::If, "if"),
        condition: Box::new(infix(var("x"), BinaryOp::Lt, var("y"))),
        consequence: block(vec![expr_stmt(var("x"))]),
        alternative: Some(block(Vec::new())),
    });
    assert_eq!(conditional.to_string(), "if ((x < y)) { x; } else { }");
}

#[test]
fn test_sentinel_kinds() {
    let null_expr = Expression::Null(NullExpression {
        token: tok(TokenKind::Semicolon, ";"),
    });
    let null_ident = Identifier::null(tok(TokenKind::Int, "5"));
    let null_stmt = Statement::Null(NullStatement {
        token: tok(TokenKind::Illegal, "@"),
    });

    assert!(null_expr.is_null());
    assert!(null_ident.is_null());
    assert!(null_stmt.is_null());
    assert!(!int(1).is_null());
    assert_eq!(SentinelKind::Identifier.to_string(), "NullIdentifier");
    assert_eq!(SentinelKind::Program.to_string(), "NullProgram");
}

#[test]
fn test_modify_rewrites_bare_expression() {
    let result = modify(Node::Expression(int(1)), &mut turn_one_into_two);
    assert_eq!(result, Node::Expression(int(2)));
}

#[test]
fn test_modify_program_rewraps_expression_statements() {
    let program = Program::new(vec![expr_stmt(int(1)), expr_stmt(int(3))], Vec::new());
    let result = modify(Node::Program(program), &mut turn_one_into_two);
    assert_eq!(
        result,
        Node::Program(Program::new(
            vec![expr_stmt(int(2)), expr_stmt(int(3))],
            Vec::new()
        ))
    );
}

#[test]
fn test_modify_expression_statement_returns_expression() {
    let result = modify(Node::Statement(expr_stmt(int(1))), &mut turn_one_into_two);
    assert_eq!(result, Node::Expression(int(2)));
}

#[test]
fn test_modify_is_single_level() {
    // The `1` operands sit below an infix node, so they are out of reach.
    let sum = infix(int(1), BinaryOp::Add, int(1));
    let result = modify(Node::Expression(sum.clone()), &mut turn_one_into_two);
    assert_eq!(result, Node::Expression(sum));

    let let_stmt = Statement::Let(LetStatement {
        token: tok(TokenKind::Let, "let"),
        name: ident("x"),
        value: int(1),
    });
    let result = modify(Node::Statement(let_stmt.clone()), &mut turn_one_into_two);
    assert_eq!(result, Node::Statement(let_stmt));
}

#[test]
fn test_modify_program_result_becomes_null_statement() {
    let original = expr_stmt(int(1));
    let program = Program::new(vec![original.clone()], Vec::new());
    let result = modify(Node::Program(program), &mut |_| Node::NullProgram);
    assert_eq!(
        result,
        Node::Program(Program::new(
            vec![Statement::Null(NullStatement {
                token: original.token().clone()
            })],
            Vec::new()
        ))
    );
}

#[test]
fn test_modify_keeps_diagnostics() {
    let diag = crate::ParseDiagnostic::no_prefix_rule(tok(TokenKind::Semicolon, ";"));
    let program = Program::new(vec![expr_stmt(int(1))], vec![diag.clone()]);
    match modify(Node::Program(program), &mut turn_one_into_two) {
        Node::Program(p) => assert_eq!(p.errors, vec![diag]),
        other => panic!("expected a program, got {other:?}"),
    }
}

#[test]
fn test_modify_visits_each_top_level_statement_once() {
    let program = Program::new(
        vec![expr_stmt(int(1)), expr_stmt(int(1)), expr_stmt(int(1))],
        Vec::new(),
    );
    let mut calls = 0;
    let _ = modify(Node::Program(program), &mut |node| {
        calls += 1;
        node
    });
    assert_eq!(calls, 3);
}
