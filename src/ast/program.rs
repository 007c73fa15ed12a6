//! The whole-program node and the declaration/statement block every
//! program, procedure, and function body shares.

use super::declaration::{ConstItem, Subprogram, TypeItem, VarItem};
use super::statement::Stmt;

/// `program <name>; <block>.` — `Program`.
#[derive(Debug, Clone)]
pub struct Program {
    pub name: String,
    pub block: Block,
}

/// A declaration part followed by a compound statement — shared by the
/// program body and every procedure/function body.
#[derive(Debug, Clone)]
pub struct Block {
    pub decls: DeclBlock,
    pub body: Vec<Stmt>,
}

/// The four declaration sections of a [`Block`], each optional and
/// independently repeatable at the CST level, flattened here into plain
/// lists in declaration order.
#[derive(Debug, Clone, Default)]
pub struct DeclBlock {
    pub consts: Vec<ConstItem>,
    pub types: Vec<TypeItem>,
    pub vars: Vec<VarItem>,
    pub subprograms: Vec<Subprogram>,
}
