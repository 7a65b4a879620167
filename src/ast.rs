use crate::token::Token;

/// Expression node. Composite variants own their children exclusively;
/// the tree is acyclic by construction and never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer, float, string, or boolean literal, carrying its token.
    Literal(Token),
    /// Reference to a variable by name.
    Variable(String),
    /// Prefix operator applied to an operand (`-x`, `!x`, `not x`).
    Unary { op: Token, operand: Box<Self> },
    /// Infix operator between two operands.
    Binary {
        left: Box<Self>,
        op: Token,
        right: Box<Self>,
    },
    /// Call of a function by name with ordered arguments.
    Call { callee: String, args: Vec<Self> },
    /// Assignment of a value to a named variable.
    Assignment { target: String, value: Box<Self> },
    /// Parenthesized expression, kept as a node to preserve source-level
    /// grouping intent.
    Grouping(Box<Self>),
}

/// Statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Variable declaration: `int x` or `int x = expr`.
    VarDecl {
        ty: String,
        name: String,
        init: Option<Expr>,
    },
    /// Bare expression evaluated for its effect.
    Expression(Expr),
    /// Conditional; `else_block` is empty when no `else` was written.
    If {
        condition: Expr,
        then_block: Vec<Self>,
        else_block: Vec<Self>,
    },
    /// Pre-checked loop.
    While { condition: Expr, body: Vec<Self> },
    /// Function declaration: `fn name type(params) { body }`.
    Function {
        name: String,
        return_type: String,
        params: Vec<Param>,
        body: Vec<Self>,
    },
    /// Return with optional value; a bare `return` is a void return.
    Return(Option<Expr>),
}

/// Function parameter: declarable type keyword and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Expr {
    /// Build a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Build a unary expression, boxing the operand.
    #[must_use]
    pub fn unary(op: Token, operand: Self) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Build a binary expression, boxing both operands.
    #[must_use]
    pub fn binary(left: Self, op: Token, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Build a call expression.
    #[must_use]
    pub fn call(callee: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Call {
            callee: callee.into(),
            args,
        }
    }

    /// Build an assignment, boxing the value.
    #[must_use]
    pub fn assignment(target: impl Into<String>, value: Self) -> Self {
        Self::Assignment {
            target: target.into(),
            value: Box::new(value),
        }
    }

    /// Build a grouping, boxing the inner expression.
    #[must_use]
    pub fn grouping(inner: Self) -> Self {
        Self::Grouping(Box::new(inner))
    }
}
