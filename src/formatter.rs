//! Pretty-printer that serializes a Rill AST back into canonical source.
//!
//! Produces tab-indented output, one statement per line, with blank lines
//! separating block-carrying statements from their neighbors.

use crate::ast::{Expr, Stmt};
use crate::token::{Token, TokenKind};
use crate::vocab;

/// Format a program into canonical Rill source.
///
/// Tab-based indentation, single spaces around binary operators and after
/// commas; parentheses appear only where the tree holds a `Grouping` node.
/// Formatting is total: any tree renders, and rendering a parsed canonical
/// source reproduces it byte for byte.
#[must_use]
pub fn format(program: &[Stmt]) -> String {
    let mut out = String::new();
    format_block(&mut out, program, 0);
    out
}

/// Statements with blank lines before and after every statement that
/// carries a block, never at the start of the sequence.
fn format_block(out: &mut String, statements: &[Stmt], indent: usize) {
    let mut prev_had_block = false;

    for (i, stmt) in statements.iter().enumerate() {
        let has_block = stmt_has_block(stmt);
        if i > 0 && (has_block || prev_had_block) {
            out.push('\n');
        }
        format_stmt(out, stmt, indent);
        prev_had_block = has_block;
    }
}

const fn stmt_has_block(stmt: &Stmt) -> bool {
    matches!(
        stmt,
        Stmt::If { .. } | Stmt::While { .. } | Stmt::Function { .. }
    )
}

fn format_stmt(out: &mut String, stmt: &Stmt, indent: usize) {
    let prefix = "\t".repeat(indent);
    out.push_str(&prefix);

    match stmt {
        Stmt::VarDecl { ty, name, init } => {
            out.push_str(ty);
            out.push(' ');
            out.push_str(name);
            if let Some(init) = init {
                out.push_str(" = ");
                format_expr(out, init);
            }
            out.push('\n');
        }
        Stmt::Expression(expr) => {
            format_expr(out, expr);
            out.push('\n');
        }
        Stmt::If {
            condition,
            then_block,
            else_block,
        } => {
            out.push_str("if ");
            format_expr(out, condition);
            out.push_str(" {\n");
            format_block(out, then_block, indent + 1);
            out.push_str(&prefix);
            if else_block.is_empty() {
                out.push_str("}\n");
            } else {
                out.push_str("} else {\n");
                format_block(out, else_block, indent + 1);
                out.push_str(&prefix);
                out.push_str("}\n");
            }
        }
        Stmt::While { condition, body } => {
            out.push_str("while ");
            format_expr(out, condition);
            out.push_str(" {\n");
            format_block(out, body, indent + 1);
            out.push_str(&prefix);
            out.push_str("}\n");
        }
        Stmt::Function {
            name,
            return_type,
            params,
            body,
        } => {
            out.push_str("fn ");
            out.push_str(name);
            out.push(' ');
            out.push_str(return_type);
            out.push('(');
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&param.ty);
                out.push(' ');
                out.push_str(&param.name);
            }
            out.push_str(") {\n");
            format_block(out, body, indent + 1);
            out.push_str(&prefix);
            out.push_str("}\n");
        }
        Stmt::Return(value) => {
            out.push_str("return");
            if let Some(value) = value {
                out.push(' ');
                format_expr(out, value);
            }
            out.push('\n');
        }
    }
}

fn format_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Literal(token) => format_literal(out, token),
        Expr::Variable(name) => out.push_str(name),
        Expr::Unary { op, operand } => {
            out.push_str(&op.lexeme);
            let mut inner = String::new();
            format_expr(&mut inner, operand);
            // A symbolic operator needs a separator when gluing it to the
            // operand would lex as one multi-character operator (`- -x`
            // must not fuse into `--`).
            if vocab::is_textual_operator(&op.lexeme) || fuses(&op.lexeme, &inner) {
                out.push(' ');
            }
            out.push_str(&inner);
        }
        Expr::Binary { left, op, right } => {
            format_expr(out, left);
            out.push(' ');
            out.push_str(&op.lexeme);
            out.push(' ');
            format_expr(out, right);
        }
        Expr::Call { callee, args } => {
            out.push_str(callee);
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                format_expr(out, arg);
            }
            out.push(')');
        }
        Expr::Assignment { target, value } => {
            out.push_str(target);
            out.push_str(" = ");
            format_expr(out, value);
        }
        Expr::Grouping(inner) => {
            out.push('(');
            format_expr(out, inner);
            out.push(')');
        }
    }
}

fn fuses(op: &str, rendered: &str) -> bool {
    rendered.chars().next().is_some_and(|first| {
        let mut pair = op.to_string();
        pair.push(first);
        vocab::is_multi_char_operator(&pair)
    })
}

fn format_literal(out: &mut String, token: &Token) {
    if token.kind == TokenKind::String {
        out.push('"');
        out.push_str(&token.lexeme);
        out.push('"');
    } else {
        out.push_str(&token.lexeme);
    }
}
