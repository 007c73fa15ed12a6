//! Front end for an Indonesian-keyword Pascal-like language.
//!
//! The pipeline is, leaves first: [`lexer`] turns source text into a token
//! stream, [`parser`] builds a concrete syntax tree from that stream,
//! [`lowering`] collapses the CST into an [`ast`], and [`semantic`] walks the
//! AST to build the identifier/block/array symbol tables and type-check
//! every expression.
pub mod ast;
pub mod lexer;
pub mod lowering;
pub mod parser;
pub mod semantic;
pub mod token;
