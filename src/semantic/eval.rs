//! A narrow constant-folder: just enough to compute array bounds, and
//! deliberately no more.

use crate::ast::{Expr, ExprKind, UnaryOp};

use super::error::SemanticError;
use super::idt::{Idt, IdtKind};
use super::types;

/// What a statically evaluable bound expression reduces to — numeric for
/// `larik [1..10]`, or char (so the caller can tell `larik ['a'..'c']`
/// apart and normalize it to a 1-based index span).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticValue {
    Int(i64),
    Char(char),
}

impl StaticValue {
    pub fn as_ordinal(self) -> i64 {
        match self {
            StaticValue::Int(v) => v,
            StaticValue::Char(c) => c as i64,
        }
    }

    pub fn is_char(self) -> bool {
        matches!(self, StaticValue::Char(_))
    }
}

/// Evaluates `expr` as a compile-time constant. Accepts only numeric
/// literals, unary minus over one, character literals (as ordinals), and
/// identifiers bound to `CONST` entries — anything else (a variable
/// reference, a call, a binary expression) is an error.
pub fn evaluate_static(expr: &Expr, idt: &Idt, lookup: impl Fn(&str) -> Option<usize>) -> Result<StaticValue, SemanticError> {
    match &expr.kind {
        ExprKind::IntLit(v) => Ok(StaticValue::Int(*v)),
        ExprKind::CharLit(c) => Ok(StaticValue::Char(*c)),
        ExprKind::Unary(UnaryOp::Neg, inner) => match evaluate_static(inner, idt, lookup)? {
            StaticValue::Int(v) => Ok(StaticValue::Int(-v)),
            StaticValue::Char(_) => Err(SemanticError::InvalidConstantExpression {
                detail: "unary '-' over a char literal".to_string(),
            }),
        },
        ExprKind::Unary(UnaryOp::Pos, inner) => evaluate_static(inner, idt, lookup),
        ExprKind::VarRef(name) => {
            let idx = lookup(name).ok_or_else(|| SemanticError::UndeclaredIdentifier { name: name.clone() })?;
            let entry = idt.get(idx);
            if entry.kind != IdtKind::Const {
                return Err(SemanticError::InvalidConstantExpression {
                    detail: format!("'{name}' is not a constant"),
                });
            }
            match entry.type_ {
                types::CHAR => Ok(StaticValue::Char(entry.addr as u8 as char)),
                types::INT | types::BOOL => Ok(StaticValue::Int(entry.addr as i64)),
                _ => Err(SemanticError::InvalidConstantExpression {
                    detail: format!("constant '{name}' is not an integer or char"),
                }),
            }
        }
        other => Err(SemanticError::InvalidConstantExpression {
            detail: format!("{other:?} is not a compile-time constant"),
        }),
    }
}
