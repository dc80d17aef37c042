//! Property-based tests for the parser.
//!
//! 1. Determinism: parsing the same token sequence twice gives equal programs,
//!    whatever the tokens are.
//! 2. Round trip: the canonical rendering of a generated tree parses back to
//!    a tree with the same rendering.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::needless_pass_by_value,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::rc::Rc;

use ember_ir::{
    ArrayLiteral, BinaryOp, BlockStatement, BooleanLiteral, CallExpression, Expression,
    ExpressionStatement, FunctionLiteral, HashLiteral, Identifier, IfExpression, IndexExpression,
    InfixExpression, IntegerLiteral, LetStatement, PrefixExpression, Program, ReturnStatement,
    Statement, StringLiteral, Token, TokenKind, TokenList, UnaryOp,
};
use ember_parse::{parse, parse_source};
use proptest::prelude::*;

// -- Token sequences --

fn token_strategy() -> impl Strategy<Value = Token> {
    prop::sample::select(vec![
        (TokenKind::Ident, "x"),
        (TokenKind::Ident, "add"),
        (TokenKind::Int, "5"),
        (TokenKind::Int, "99999999999999999999"),
        (TokenKind::String, "s"),
        (TokenKind::Illegal, "@"),
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Bang, "!"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Lt, "<"),
        (TokenKind::Eq, "=="),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Colon, ":"),
        (TokenKind::LParen, "("),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::RBrace, "}"),
        (TokenKind::LBracket, "["),
        (TokenKind::RBracket, "]"),
        (TokenKind::Function, "fn"),
        (TokenKind::Let, "let"),
        (TokenKind::True, "true"),
        (TokenKind::If, "if"),
        (TokenKind::Else, "else"),
        (TokenKind::Return, "return"),
    ])
    .prop_map(|(kind, literal)| Token::synthetic(kind, literal))
}

// -- Syntax trees --

fn tok(kind: TokenKind, literal: &str) -> Token {
    Token::synthetic(kind, literal)
}

fn identifier_strategy() -> impl Strategy<Value = Identifier> + Clone {
    prop::sample::select(vec!["a", "b", "foo", "bar_1", "_x"])
        .prop_map(|name| Identifier::new(tok(TokenKind::Ident, name)))
}

fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement {
        token: tok(TokenKind::LBrace, "{"),
        statements,
    }
}

fn leaf_strategy() -> impl Strategy<Value = Expression> {
    prop_oneof![
        identifier_strategy().prop_map(Expression::Identifier),
        (0..=i64::MAX).prop_map(|value| Expression::Integer(IntegerLiteral {
            token: tok(TokenKind::Int, &value.to_string()),
            value,
        })),
        any::<bool>().prop_map(|value| Expression::Boolean(BooleanLiteral {
            token: tok(if value { TokenKind::True } else { TokenKind::False }, ""),
            value,
        })),
        "[a-z ]{0,6}".prop_map(|value| Expression::String(StringLiteral {
            token: tok(TokenKind::String, &value),
            value,
        })),
    ]
}

fn expression_strategy() -> impl Strategy<Value = Expression> + Clone {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        let statement = statement_strategy(inner.clone());
        prop_oneof![
            (
                prop::sample::select(vec![UnaryOp::Not, UnaryOp::Neg]),
                inner.clone()
            )
                .prop_map(|(operator, right)| Expression::Prefix(PrefixExpression {
                    token: tok(TokenKind::Bang, operator.as_symbol()),
                    operator,
                    right: Box::new(right),
                })),
            (
                inner.clone(),
                prop::sample::select(vec![
                    BinaryOp::Add,
                    BinaryOp::Sub,
                    BinaryOp::Mul,
                    BinaryOp::Div,
                    BinaryOp::Lt,
                    BinaryOp::Gt,
                    BinaryOp::Eq,
                    BinaryOp::NotEq,
                ]),
                inner.clone()
            )
                .prop_map(|(left, operator, right)| Expression::Infix(InfixExpression {
                    token: tok(TokenKind::Plus, operator.as_symbol()),
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                })),
            prop::collection::vec(inner.clone(), 0..3).prop_map(|elements| {
                Expression::Array(ArrayLiteral {
                    token: tok(TokenKind::LBracket, "["),
                    elements,
                })
            }),
            prop::collection::vec((inner.clone(), inner.clone()), 0..3).prop_map(|pairs| {
                Expression::Hash(HashLiteral {
                    token: tok(TokenKind::LBrace, "{"),
                    pairs,
                })
            }),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3)).prop_map(
                |(function, arguments)| Expression::Call(CallExpression {
                    token: tok(TokenKind::LParen, "("),
                    function: Box::new(function),
                    arguments,
                })
            ),
            (inner.clone(), inner.clone()).prop_map(|(left, index)| {
                Expression::Index(IndexExpression {
                    token: tok(TokenKind::LBracket, "["),
                    left: Box::new(left),
                    index: Box::new(index),
                })
            }),
            (
                inner.clone(),
                prop::collection::vec(statement.clone(), 0..3),
                prop::option::of(prop::collection::vec(statement.clone(), 0..3))
            )
                .prop_map(|(condition, consequence, alternative)| {
                    Expression::If(IfExpression {
                        token: tok(TokenKind::If, "if"),
                        condition: Box::new(condition),
                        consequence: block(consequence),
                        alternative: alternative.map(block),
                    })
                }),
            (
                prop::collection::vec(identifier_strategy(), 0..3),
                prop::collection::vec(statement, 0..3)
            )
                .prop_map(|(parameters, body)| {
                    Expression::Function(Rc::new(FunctionLiteral {
                        token: tok(TokenKind::Function, "fn"),
                        parameters,
                        body: block(body),
                    }))
                }),
        ]
    })
}

fn statement_strategy(
    expression: impl Strategy<Value = Expression> + Clone,
) -> impl Strategy<Value = Statement> + Clone {
    prop_oneof![
        (identifier_strategy(), expression.clone()).prop_map(|(name, value)| {
            Statement::Let(LetStatement {
                token: tok(TokenKind::Let, "let"),
                name,
                value,
            })
        }),
        expression.clone().prop_map(|value| Statement::Return(ReturnStatement {
            token: tok(TokenKind::Return, "return"),
            value,
        })),
        expression.prop_map(|e| Statement::Expression(ExpressionStatement::new(e))),
    ]
}

fn program_strategy() -> impl Strategy<Value = Program> {
    prop::collection::vec(statement_strategy(expression_strategy()), 0..5)
        .prop_map(|statements| Program::new(statements, Vec::new()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parsing_is_deterministic(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let list = TokenList::from_tokens(tokens);
        let first = parse(&list);
        let second = parse(&list);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn canonical_form_round_trips(program in program_strategy()) {
        let rendered = program.to_string();
        let reparsed = parse_source(&rendered);
        let errors: Vec<String> = reparsed.errors.iter().map(|e| e.to_string()).collect();
        prop_assert!(errors.is_empty(), "{rendered}\n{errors:?}");
        prop_assert_eq!(reparsed.to_string(), rendered);
        prop_assert_eq!(reparsed.statements.len(), program.statements.len());
    }
}

#[test]
fn canonical_form_round_trips_hand_written() {
    let sources = [
        "let x = 5 * (2 + -3);",
        "fn(a, b) { if (a < b) { return a; } else { b } }(1, 2)",
        "let h = {\"one\": 1, true: [1, 2][0], 3: fn() { }};",
        "puts(len(\"abc\"), first([1]), h[\"one\"])",
        "!(a == b) != !c",
    ];
    for source in sources {
        let rendered = parse_source(source).to_string();
        let reparsed = parse_source(&rendered);
        assert!(reparsed.errors.is_empty(), "{rendered}");
        assert_eq!(reparsed.to_string(), rendered, "{source}");
    }
}
