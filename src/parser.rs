use std::fmt;

use crate::ast::{Expr, Param, Stmt};
use crate::token::{Span, Token, TokenKind};
use crate::vocab;

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected a specific construct, found something else.
    ExpectedToken { expected: String, found: String },
    /// `=` after an operand that is not a plain variable.
    InvalidAssignmentTarget,
    /// Token that cannot begin an expression.
    UnexpectedToken { found: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedToken { expected, found } => {
                write!(f, "expected {expected}, got {found}")
            }
            Self::InvalidAssignmentTarget => {
                write!(f, "invalid assignment target")
            }
            Self::UnexpectedToken { found } => {
                write!(f, "unexpected {found}")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Parse a token sequence into the ordered list of top-level statements.
///
/// # Errors
///
/// Returns `ParseError` on the first grammar violation: a missing
/// expected token, an invalid assignment target, or a token that cannot
/// begin an expression. No partial tree is ever returned.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut program = Vec::new();
        while !self.is_at_end() {
            program.push(self.declaration()?);
        }
        Ok(program)
    }

    // ---- statements ----

    /// Statement dispatch. Checks are non-consuming, so the chosen
    /// branch consumes exactly its own tokens.
    fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.check_lexeme(TokenKind::Keyword, "fn") {
            return self.function_declaration();
        }
        if self.check_declarable_type() {
            return self.var_declaration();
        }
        self.statement()
    }

    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.pos += 1; // fn
        let name = self.expect(TokenKind::Identifier, "function name")?.lexeme;
        let return_type = self.declarable_type("return type")?;
        self.expect_lexeme(TokenKind::Punctuation, "(", "'(' after return type")?;

        let mut params = Vec::new();
        if !self.check_lexeme(TokenKind::Punctuation, ")") {
            loop {
                let ty = self.declarable_type("parameter type")?;
                let name = self.expect(TokenKind::Identifier, "parameter name")?.lexeme;
                params.push(Param { ty, name });
                if !self.match_lexeme(TokenKind::Punctuation, ",") {
                    break;
                }
            }
        }
        self.expect_lexeme(TokenKind::Punctuation, ")", "')' after parameters")?;

        let body = self.block()?;
        Ok(Stmt::Function {
            name,
            return_type,
            params,
            body,
        })
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let ty = self.advance().lexeme;
        let name = self.expect(TokenKind::Identifier, "variable name")?.lexeme;
        let init = if self.match_lexeme(TokenKind::Operator, "=") {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(Stmt::VarDecl { ty, name, init })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.check_lexeme(TokenKind::Keyword, "if") {
            return self.if_statement();
        }
        if self.check_lexeme(TokenKind::Keyword, "while") {
            return self.while_statement();
        }
        if self.check_lexeme(TokenKind::Keyword, "return") {
            return self.return_statement();
        }
        let expr = self.expression()?;
        Ok(Stmt::Expression(expr))
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.pos += 1; // if
        let condition = self.expression()?;
        let then_block = self.block()?;
        let else_block = if self.match_lexeme(TokenKind::Keyword, "else") {
            self.block()?
        } else {
            Vec::new()
        };
        Ok(Stmt::If {
            condition,
            then_block,
            else_block,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.pos += 1; // while
        let condition = self.expression()?;
        let body = self.block()?;
        Ok(Stmt::While { condition, body })
    }

    /// A value is parsed only when the next token can begin an
    /// expression; `return` before `}` or a keyword is a void return.
    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        self.pos += 1; // return
        let value = if self.peek().is_some_and(Self::starts_expression) {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(Stmt::Return(value))
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect_lexeme(TokenKind::Punctuation, "{", "'{'")?;
        let mut statements = Vec::new();
        while !self.check_lexeme(TokenKind::Punctuation, "}") && !self.is_at_end() {
            statements.push(self.declaration()?);
        }
        self.expect_lexeme(TokenKind::Punctuation, "}", "'}'")?;
        Ok(statements)
    }

    // ---- expressions, lowest to highest precedence ----

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.logic_or()?;
        if self.check_lexeme(TokenKind::Operator, "=") {
            let equals = self.advance();
            return match expr {
                Expr::Variable(target) => {
                    let value = self.assignment()?;
                    Ok(Expr::assignment(target, value))
                }
                _ => Err(ParseError {
                    kind: ParseErrorKind::InvalidAssignmentTarget,
                    span: equals.span,
                }),
            };
        }
        Ok(expr)
    }

    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logic_and()?;
        while let Some(op) = self.match_operator(&["or", "||"]) {
            let right = self.logic_and()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while let Some(op) = self.match_operator(&["and", "&&"]) {
            let right = self.equality()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        while let Some(op) = self.match_operator(&["==", "!=", "is"]) {
            let right = self.comparison()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while let Some(op) = self.match_operator(&["<", ">", "<=", ">="]) {
            let right = self.term()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        while let Some(op) = self.match_operator(&["+", "-"]) {
            let right = self.factor()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while let Some(op) = self.match_operator(&["*", "/", "%"]) {
            let right = self.unary()?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_operator(&["-", "!", "not"]) {
            let operand = self.unary()?;
            return Ok(Expr::unary(op, operand));
        }
        self.call()
    }

    /// Only a plain identifier can be called; the callee is recorded by
    /// name, so `(f)(x)` or `1(x)` never form a call.
    fn call(&mut self) -> Result<Expr, ParseError> {
        let expr = self.primary()?;
        if let Expr::Variable(name) = &expr {
            if self.check_lexeme(TokenKind::Punctuation, "(") {
                let callee = name.clone();
                return self.finish_call(callee);
            }
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: String) -> Result<Expr, ParseError> {
        self.pos += 1; // (
        let mut args = Vec::new();
        if !self.check_lexeme(TokenKind::Punctuation, ")") {
            loop {
                args.push(self.expression()?);
                if !self.match_lexeme(TokenKind::Punctuation, ",") {
                    break;
                }
            }
        }
        self.expect_lexeme(TokenKind::Punctuation, ")", "')' after arguments")?;
        Ok(Expr::call(callee, args))
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Integer | TokenKind::Float | TokenKind::String | TokenKind::Boolean => {
                Ok(Expr::Literal(token))
            }
            TokenKind::Identifier => Ok(Expr::Variable(token.lexeme)),
            TokenKind::Punctuation if token.lexeme == "(" => {
                let inner = self.expression()?;
                self.expect_lexeme(TokenKind::Punctuation, ")", "')' after expression")?;
                Ok(Expr::grouping(inner))
            }
            _ => Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken {
                    found: token.to_string(),
                },
                span: token.span,
            }),
        }
    }

    // ---- cursor primitives ----

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn is_at_end(&self) -> bool {
        self.peek().is_none_or(|t| t.kind == TokenKind::Eof)
    }

    /// Consume and return the current token. Past the end this yields a
    /// synthetic `Eof` so callers stay total over arbitrary slices.
    fn advance(&mut self) -> Token {
        let token = self.tokens.get(self.pos).cloned().unwrap_or_else(|| Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            span: self.eof_span(),
        });
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn check_lexeme(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == kind && t.lexeme == lexeme)
    }

    fn check_declarable_type(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Keyword && vocab::is_declarable_type(&t.lexeme))
    }

    fn match_lexeme(&mut self, kind: TokenKind, lexeme: &str) -> bool {
        if self.check_lexeme(kind, lexeme) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn match_operator(&mut self, operators: &[&str]) -> Option<Token> {
        if self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Operator && operators.contains(&t.lexeme.as_str()))
        {
            return Some(self.advance());
        }
        None
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.expected(expected))
    }

    fn expect_lexeme(
        &mut self,
        kind: TokenKind,
        lexeme: &str,
        expected: &str,
    ) -> Result<(), ParseError> {
        if self.check_lexeme(kind, lexeme) {
            self.pos += 1;
            return Ok(());
        }
        Err(self.expected(expected))
    }

    fn declarable_type(&mut self, expected: &str) -> Result<String, ParseError> {
        if self.check_declarable_type() {
            return Ok(self.advance().lexeme);
        }
        Err(self.expected(expected))
    }

    fn expected(&self, expected: &str) -> ParseError {
        let (found, span) = self.peek().map_or_else(
            || ("end of input".to_string(), self.eof_span()),
            |t| (t.to_string(), t.span),
        );
        ParseError {
            kind: ParseErrorKind::ExpectedToken {
                expected: expected.to_string(),
                found,
            },
            span,
        }
    }

    fn eof_span(&self) -> Span {
        self.tokens
            .last()
            .map_or(Span { line: 1, column: 1 }, |last| last.span)
    }

    fn starts_expression(token: &Token) -> bool {
        match token.kind {
            TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Boolean
            | TokenKind::Identifier => true,
            TokenKind::Punctuation => token.lexeme == "(",
            TokenKind::Operator => matches!(token.lexeme.as_str(), "-" | "!" | "not"),
            TokenKind::Keyword | TokenKind::Eof => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_input(input: &str) -> Result<Vec<Stmt>, ParseError> {
        let tokens = tokenize(input).expect("tokenize failed");
        parse(&tokens)
    }

    #[test]
    fn var_declaration_with_initializer() {
        let program = parse_input("int x = 1").expect("parse failed");
        assert_eq!(program.len(), 1);
        let Stmt::VarDecl { ty, name, init } = &program[0] else {
            panic!("expected var declaration");
        };
        assert_eq!(ty, "int");
        assert_eq!(name, "x");
        assert!(matches!(
            init,
            Some(Expr::Literal(t)) if t.lexeme == "1" && t.kind == TokenKind::Integer
        ));
    }

    #[test]
    fn var_declaration_without_initializer() {
        let program = parse_input("float y").expect("parse failed");
        let Stmt::VarDecl { ty, name, init } = &program[0] else {
            panic!("expected var declaration");
        };
        assert_eq!(ty, "float");
        assert_eq!(name, "y");
        assert!(init.is_none());
    }

    #[test]
    fn subtraction_is_left_associative() {
        let program = parse_input("a - b - c").expect("parse failed");
        let Stmt::Expression(Expr::Binary { left, op, right }) = &program[0] else {
            panic!("expected binary expression");
        };
        assert_eq!(op.lexeme, "-");
        assert!(matches!(&**right, Expr::Variable(n) if n == "c"));
        let Expr::Binary {
            left: inner_left,
            op: inner_op,
            right: inner_right,
        } = &**left
        else {
            panic!("expected nested binary");
        };
        assert_eq!(inner_op.lexeme, "-");
        assert!(matches!(&**inner_left, Expr::Variable(n) if n == "a"));
        assert!(matches!(&**inner_right, Expr::Variable(n) if n == "b"));
    }

    #[test]
    fn assignment_is_right_associative() {
        let program = parse_input("a = b = c").expect("parse failed");
        let Stmt::Expression(Expr::Assignment { target, value }) = &program[0] else {
            panic!("expected assignment");
        };
        assert_eq!(target, "a");
        let Expr::Assignment {
            target: inner_target,
            value: inner_value,
        } = &**value
        else {
            panic!("expected nested assignment");
        };
        assert_eq!(inner_target, "b");
        assert!(matches!(&**inner_value, Expr::Variable(n) if n == "c"));
    }

    #[test]
    fn assignment_to_literal_rejected() {
        let err = parse_input("1 = c").expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::InvalidAssignmentTarget);
        assert_eq!(err.span.column, 3);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let program = parse_input("1 + 2 * 3").expect("parse failed");
        let Stmt::Expression(Expr::Binary { op, right, .. }) = &program[0] else {
            panic!("expected binary expression");
        };
        assert_eq!(op.lexeme, "+");
        assert!(matches!(&**right, Expr::Binary { op, .. } if op.lexeme == "*"));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let program = parse_input("a or b and c").expect("parse failed");
        let Stmt::Expression(Expr::Binary { op, right, .. }) = &program[0] else {
            panic!("expected binary expression");
        };
        assert_eq!(op.lexeme, "or");
        assert!(matches!(&**right, Expr::Binary { op, .. } if op.lexeme == "and"));
    }

    #[test]
    fn if_with_else() {
        let program = parse_input("if (x) { y = 1 } else { y = 2 }").expect("parse failed");
        let Stmt::If {
            condition,
            then_block,
            else_block,
        } = &program[0]
        else {
            panic!("expected if statement");
        };
        assert!(matches!(condition, Expr::Grouping(_)));
        assert_eq!(then_block.len(), 1);
        assert_eq!(else_block.len(), 1);
    }

    #[test]
    fn function_declaration() {
        let program = parse_input("fn add int(int a, int b) { return a + b }")
            .expect("parse failed");
        let Stmt::Function {
            name,
            return_type,
            params,
            body,
        } = &program[0]
        else {
            panic!("expected function declaration");
        };
        assert_eq!(name, "add");
        assert_eq!(return_type, "int");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].ty, "int");
        assert_eq!(params[0].name, "a");
        assert_eq!(body.len(), 1);
        assert!(matches!(&body[0], Stmt::Return(Some(_))));
    }

    #[test]
    fn void_return() {
        let program = parse_input("fn f int() { return }").expect("parse failed");
        let Stmt::Function { body, .. } = &program[0] else {
            panic!("expected function declaration");
        };
        assert!(matches!(&body[0], Stmt::Return(None)));
    }

    #[test]
    fn call_with_arguments() {
        let program = parse_input("f(1, x)").expect("parse failed");
        let Stmt::Expression(Expr::Call { callee, args }) = &program[0] else {
            panic!("expected call");
        };
        assert_eq!(callee, "f");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn literal_is_not_callable() {
        // 1(2) is two expression statements, not a call
        let program = parse_input("1(2)").expect("parse failed");
        assert_eq!(program.len(), 2);
        assert!(matches!(&program[0], Stmt::Expression(Expr::Literal(_))));
        assert!(matches!(&program[1], Stmt::Expression(Expr::Grouping(_))));
    }

    #[test]
    fn unexpected_token_at_primary() {
        let err = parse_input(")").expect_err("should fail");
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    }

    #[test]
    fn missing_close_paren() {
        let err = parse_input("(a").expect_err("should fail");
        assert!(matches!(
            err.kind,
            ParseErrorKind::ExpectedToken { ref expected, .. } if expected.contains("')'")
        ));
    }

    #[test]
    fn arr_is_not_a_declarable_type() {
        let err = parse_input("arr a = 1").expect_err("should fail");
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    }

    #[test]
    fn unterminated_block() {
        let err = parse_input("while x { y = 1").expect_err("should fail");
        let ParseErrorKind::ExpectedToken { expected, found } = &err.kind else {
            panic!("expected an expected-token error");
        };
        assert!(expected.contains("'}'"));
        assert_eq!(found, "end of input");
    }
}
