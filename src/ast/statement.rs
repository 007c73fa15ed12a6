//! Statement nodes: assignment, conditional, loop, and call forms.

use super::expression::{CallExpr, Expr, FieldAccess};

/// The left-hand side of an assignment: a bare name or a field/index chain
/// — the CST's `AssignmentStatementNode` has exactly these two shapes.
#[derive(Debug, Clone)]
pub enum LValue {
    Var(String),
    Field(FieldAccess),
}

#[derive(Debug, Clone)]
pub struct Assign {
    pub target: LValue,
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub struct If {
    pub cond: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct While {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForDirection {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct For {
    pub var: String,
    pub from: Expr,
    pub to: Expr,
    pub direction: ForDirection,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone)]
pub struct Repeat {
    pub body: Vec<Stmt>,
    pub cond: Expr,
}

#[derive(Debug, Clone)]
pub struct CaseArm {
    pub label: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub selector: Expr,
    pub arms: Vec<CaseArm>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Assign(Assign),
    If(If),
    While(While),
    For(For),
    Repeat(Repeat),
    Case(Case),
    Compound(Vec<Stmt>),
    /// An expression used as a statement. In practice this is almost
    /// always a call (`tulis(x)`), but the grammar allows any expression.
    Expr(Expr),
    /// `EmptyStatementNode` — the empty alternative between semicolons.
    Empty,
}

impl Stmt {
    pub fn call(call: CallExpr) -> Stmt {
        Stmt::Expr(Expr::new(super::expression::ExprKind::Call(call)))
    }
}
