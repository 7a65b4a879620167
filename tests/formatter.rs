//! Formatter-specific tests.

use rill_syntax::{Expr, Param, Span, Stmt, Token, TokenKind, format};

fn token(kind: TokenKind, lexeme: &str) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
        span: Span { line: 1, column: 1 },
    }
}

fn op(lexeme: &str) -> Token {
    token(TokenKind::Operator, lexeme)
}

fn int_lit(lexeme: &str) -> Expr {
    Expr::Literal(token(TokenKind::Integer, lexeme))
}

fn function(name: &str, body: Vec<Stmt>) -> Stmt {
    Stmt::Function {
        name: name.to_string(),
        return_type: "int".to_string(),
        params: Vec::new(),
        body,
    }
}

#[test]
fn format_trailing_newline() {
    let program = vec![Stmt::VarDecl {
        ty: "int".to_string(),
        name: "x".to_string(),
        init: None,
    }];
    let output = format(&program);
    assert!(output.ends_with('\n'));
}

#[test]
fn format_blank_line_between_functions() {
    let program = vec![
        function("a", vec![Stmt::Return(Some(int_lit("1")))]),
        function("b", vec![Stmt::Return(Some(int_lit("2")))]),
    ];
    let output = format(&program);
    assert!(output.contains("}\n\nfn b int() {"));
}

#[test]
fn format_no_blank_line_between_plain_statements() {
    let program = vec![
        Stmt::VarDecl {
            ty: "int".to_string(),
            name: "x".to_string(),
            init: Some(int_lit("1")),
        },
        Stmt::VarDecl {
            ty: "int".to_string(),
            name: "y".to_string(),
            init: Some(int_lit("2")),
        },
        Stmt::Expression(Expr::call("print", vec![Expr::variable("x")])),
    ];
    let output = format(&program);
    assert!(!output.contains("\n\n"));
}

#[test]
fn format_tab_indentation_per_level() {
    let program = vec![function(
        "walk",
        vec![Stmt::While {
            condition: Expr::variable("going"),
            body: vec![Stmt::Expression(Expr::call("step", Vec::new()))],
        }],
    )];
    let output = format(&program);
    assert!(output.contains("\twhile going {"));
    assert!(output.contains("\t\tstep()"));
}

#[test]
fn format_blank_lines_inside_nested_body() {
    let program = vec![function(
        "count",
        vec![
            Stmt::VarDecl {
                ty: "int".to_string(),
                name: "i".to_string(),
                init: Some(int_lit("0")),
            },
            Stmt::While {
                condition: Expr::binary(Expr::variable("i"), op("<"), int_lit("3")),
                body: vec![Stmt::Expression(Expr::assignment(
                    "i",
                    Expr::binary(Expr::variable("i"), op("+"), int_lit("1")),
                ))],
            },
            Stmt::Return(Some(Expr::variable("i"))),
        ],
    )];
    let output = format(&program);
    assert!(output.contains("\tint i = 0\n\n\twhile i < 3 {"));
    assert!(output.contains("\t}\n\n\treturn i\n"));
}

#[test]
fn format_else_shares_line_with_braces() {
    let program = vec![Stmt::If {
        condition: Expr::variable("x"),
        then_block: vec![Stmt::Expression(Expr::call("a", Vec::new()))],
        else_block: vec![Stmt::Expression(Expr::call("b", Vec::new()))],
    }];
    let output = format(&program);
    assert!(output.contains("} else {"));
}

#[test]
fn format_empty_block() {
    let program = vec![Stmt::While {
        condition: Expr::Literal(token(TokenKind::Boolean, "true")),
        body: Vec::new(),
    }];
    assert_eq!(format(&program), "while true {\n}\n");
}

#[test]
fn format_binary_operators_spaced() {
    let program = vec![Stmt::Expression(Expr::binary(
        Expr::binary(Expr::variable("a"), op("<="), Expr::variable("b")),
        op("and"),
        Expr::binary(Expr::variable("b"), op("!="), Expr::variable("c")),
    ))];
    assert_eq!(format(&program), "a <= b and b != c\n");
}

#[test]
fn format_symbolic_unary_tight_textual_spaced() {
    let program = vec![
        Stmt::Expression(Expr::unary(op("!"), Expr::variable("x"))),
        Stmt::Expression(Expr::unary(op("-"), int_lit("3"))),
        Stmt::Expression(Expr::unary(op("not"), Expr::variable("x"))),
    ];
    assert_eq!(format(&program), "!x\n-3\nnot x\n");
}

#[test]
fn format_call_arguments_comma_separated() {
    let program = vec![Stmt::Expression(Expr::call(
        "clamp",
        vec![Expr::variable("x"), int_lit("0"), int_lit("255")],
    ))];
    assert_eq!(format(&program), "clamp(x, 0, 255)\n");
}

#[test]
fn format_parameters_comma_separated() {
    let program = vec![Stmt::Function {
        name: "mix".to_string(),
        return_type: "float".to_string(),
        params: vec![
            Param {
                ty: "float".to_string(),
                name: "a".to_string(),
            },
            Param {
                ty: "float".to_string(),
                name: "b".to_string(),
            },
            Param {
                ty: "float".to_string(),
                name: "t".to_string(),
            },
        ],
        body: Vec::new(),
    }];
    let output = format(&program);
    assert!(output.starts_with("fn mix float(float a, float b, float t) {"));
}

#[test]
fn format_string_literal_requoted() {
    let program = vec![Stmt::VarDecl {
        ty: "string".to_string(),
        name: "msg".to_string(),
        init: Some(Expr::Literal(token(TokenKind::String, "all clear"))),
    }];
    assert_eq!(format(&program), "string msg = \"all clear\"\n");
}
