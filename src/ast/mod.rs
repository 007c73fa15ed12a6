//! The abstract syntax tree produced by lowering a [`ParseNode`] CST.
//! Each submodule covers one slice of the tree; all are re-exported flat
//! here so callers write `ast::Expr` rather than `ast::expression::Expr`.
//!
//! [`ParseNode`]: crate::parser::ParseNode

mod declaration;
mod expression;
mod program;
mod statement;

pub use declaration::*;
pub use expression::*;
pub use program::*;
pub use statement::*;
