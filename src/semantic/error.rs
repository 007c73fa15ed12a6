//! Semantic error family. Single-shot: the analyzer aborts the whole pass
//! at the first one raised.

use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    DuplicateDeclaration { name: String },
    ReservedWordRedeclaration { name: String },
    UndefinedType { name: String },
    UndeclaredIdentifier { name: String },
    NotCallable { name: String },
    NonFunctionInExpression { name: String },
    TypeMismatch { target: String, value: String },
    AssignToConstant { name: String },
    WrongArgCount { name: String, expected: usize, found: usize },
    NonLValueForVarParam { name: String, position: usize },
    IndexOutOfBounds { index: i32, low: i32, high: i32 },
    NonArrayIndexed { name: String },
    NonRecordFieldAccess { name: String },
    UnknownField { record: String, field: String },
    NonBooleanCondition { found: String },
    /// The narrow static evaluator was handed something other than a
    /// numeric/char literal, a unary minus over one, or a `CONST`
    /// identifier.
    InvalidConstantExpression { detail: String },
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticError::DuplicateDeclaration { name } => {
                write!(f, "'{name}' is already declared in this scope")
            }
            SemanticError::ReservedWordRedeclaration { name } => {
                write!(f, "'{name}' is a reserved word and cannot be redeclared")
            }
            SemanticError::UndefinedType { name } => write!(f, "undefined type '{name}'"),
            SemanticError::UndeclaredIdentifier { name } => {
                write!(f, "undeclared identifier '{name}'")
            }
            SemanticError::NotCallable { name } => {
                write!(f, "'{name}' is not a procedure or function")
            }
            SemanticError::NonFunctionInExpression { name } => {
                write!(f, "'{name}' is a procedure and cannot be used in an expression")
            }
            SemanticError::TypeMismatch { target, value } => {
                write!(f, "cannot assign a value of type '{value}' to a target of type '{target}'")
            }
            SemanticError::AssignToConstant { name } => {
                write!(f, "cannot assign to constant '{name}'")
            }
            SemanticError::WrongArgCount { name, expected, found } => write!(
                f,
                "'{name}' expects {expected} argument(s), but {found} were given"
            ),
            SemanticError::NonLValueForVarParam { name, position } => write!(
                f,
                "argument {position} to '{name}' must be a variable (it is passed by reference)"
            ),
            SemanticError::IndexOutOfBounds { index, low, high } => write!(
                f,
                "index {index} is out of bounds (expected {low}..{high})"
            ),
            SemanticError::NonArrayIndexed { name } => {
                write!(f, "'{name}' is not an array and cannot be indexed")
            }
            SemanticError::NonRecordFieldAccess { name } => {
                write!(f, "'{name}' is not a record and has no fields")
            }
            SemanticError::UnknownField { record, field } => {
                write!(f, "'{record}' has no field named '{field}'")
            }
            SemanticError::NonBooleanCondition { found } => {
                write!(f, "condition must be boolean, found '{found}'")
            }
            SemanticError::InvalidConstantExpression { detail } => {
                write!(f, "not a valid constant expression: {detail}")
            }
        }
    }
}

impl Error for SemanticError {}
