//! Collapses a parsed [`ParseNode`] tree into an [`ast`] tree.
//!
//! One function per non-terminal, each indexing `node.children` exactly as
//! the grammar alternative it was built from dictates, including the
//! handful of asymmetric shapes the grammar allows (a `TypeDefinition`
//! wrapper node, and the field-access-headed half of assignment).
//!
//! Pure: this pass never touches a symbol table. It only rejects malformed
//! literal payloads; otherwise this contract is infallible, since the
//! parser already enforced the grammar.

mod error;

pub use error::LowerError;

use crate::ast::{
    self, AccessStep, ArrayTypeExpr, Assign, BinaryOp, Block, Case, CaseArm, ConstItem, DeclBlock,
    Expr, ExprKind, FieldAccess, FieldGroup, For, ForDirection, If, LValue, Literal, ParamGroup,
    ParamModifier, Program, Repeat, RecordTypeExpr, Stmt, Subprogram, SubprogramKind, TypeExpr,
    TypeItem, UnaryOp, VarItem, While,
};
use crate::parser::{ChildNode, NonTerminal, ParseNode};
use crate::token::TokenKind;

type LResult<T> = Result<T, LowerError>;

fn node_at(n: &ParseNode, i: usize) -> &ParseNode {
    match &n.children[i] {
        ChildNode::Node(child) => child,
        ChildNode::Leaf(t) => panic!("expected a node at {}[{i}], found token {t}", n.kind),
    }
}

fn leaf_at(n: &ParseNode, i: usize) -> &str {
    match &n.children[i] {
        ChildNode::Leaf(t) => &t.lexeme,
        ChildNode::Node(c) => panic!("expected a token at {}[{i}], found node {}", n.kind, c.kind),
    }
}

/// Lowers a whole parsed program.
pub fn lower_program(cst: &ParseNode) -> LResult<Program> {
    let name = lower_program_header(node_at(cst, 0));
    let decls = lower_declaration_part(node_at(cst, 1))?;
    let body = lower_compound_statement(node_at(cst, 2))?;
    Ok(Program { name, block: Block { decls, body } })
}

fn lower_program_header(n: &ParseNode) -> String {
    leaf_at(n, 1).to_string()
}

fn lower_declaration_part(n: &ParseNode) -> LResult<DeclBlock> {
    let mut decls = DeclBlock::default();
    lower_const_section(node_at(n, 0), &mut decls.consts)?;
    lower_type_section(node_at(n, 1), &mut decls.types)?;
    lower_var_section(node_at(n, 2), &mut decls.vars)?;
    lower_subprogram_section(node_at(n, 3), &mut decls.subprograms)?;
    Ok(decls)
}

// --- constants ---------------------------------------------------------

fn lower_const_section(n: &ParseNode, out: &mut Vec<ConstItem>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    lower_const_declaration(node_at(n, 0), out)?;
    lower_const_section(node_at(n, 1), out)
}

fn lower_const_declaration(n: &ParseNode, out: &mut Vec<ConstItem>) -> LResult<()> {
    out.push(lower_const_item(node_at(n, 1))?);
    lower_const_item_tail(node_at(n, 2), out)
}

fn lower_const_item_tail(n: &ParseNode, out: &mut Vec<ConstItem>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    out.push(lower_const_item(node_at(n, 0))?);
    lower_const_item_tail(node_at(n, 1), out)
}

fn lower_const_item(n: &ParseNode) -> LResult<ConstItem> {
    let name = leaf_at(n, 0).to_string();
    let value = lower_value_literal(node_at(n, 2)).map_err(|err| match err {
        LowerError::NonLiteralConstant { .. } => LowerError::NonLiteralConstant { name: name.clone() },
        other => other,
    })?;
    Ok(ConstItem { name, value })
}

/// A `Value` node used in constant position must be a literal, not a
/// variable reference or field access — a well-formed program only ever
/// writes a literal after `konstanta ident =`.
fn lower_value_literal(n: &ParseNode) -> LResult<Literal> {
    match lower_value(n)?.kind {
        ExprKind::IntLit(v) => Ok(Literal::Int(v)),
        ExprKind::RealLit(v) => Ok(Literal::Real(v)),
        ExprKind::CharLit(v) => Ok(Literal::Char(v)),
        ExprKind::StrLit(v) => Ok(Literal::Str(v)),
        ExprKind::BoolLit(v) => Ok(Literal::Bool(v)),
        _ => Err(LowerError::NonLiteralConstant { name: String::new() }),
    }
}

// --- types ---------------------------------------------------------

fn lower_type_section(n: &ParseNode, out: &mut Vec<TypeItem>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    lower_type_declaration(node_at(n, 0), out)?;
    lower_type_section(node_at(n, 1), out)
}

fn lower_type_declaration(n: &ParseNode, out: &mut Vec<TypeItem>) -> LResult<()> {
    out.push(lower_type_item(node_at(n, 1))?);
    lower_type_item_tail(node_at(n, 2), out)
}

fn lower_type_item_tail(n: &ParseNode, out: &mut Vec<TypeItem>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    out.push(lower_type_item(node_at(n, 0))?);
    lower_type_item_tail(node_at(n, 1), out)
}

fn lower_type_item(n: &ParseNode) -> LResult<TypeItem> {
    let name = leaf_at(n, 0).to_string();
    let def = lower_type_definition(node_at(n, 2))?;
    Ok(TypeItem { name, def })
}

fn lower_type_definition(n: &ParseNode) -> LResult<TypeExpr> {
    let inner = node_at(n, 0);
    match inner.kind {
        NonTerminal::Type => lower_type(inner),
        NonTerminal::ArrayType => Ok(TypeExpr::Array(lower_array_type(inner)?)),
        NonTerminal::RecordType => Ok(TypeExpr::Record(lower_record_type(inner)?)),
        other => unreachable!("TypeDefinition wraps an unexpected non-terminal {other}"),
    }
}

fn lower_type(n: &ParseNode) -> LResult<TypeExpr> {
    match &n.children[0] {
        ChildNode::Leaf(t) => Ok(TypeExpr::Named(t.lexeme.clone())),
        ChildNode::Node(array_type) => Ok(TypeExpr::Array(lower_array_type(array_type)?)),
    }
}

fn lower_array_type(n: &ParseNode) -> LResult<ArrayTypeExpr> {
    let (low, high) = lower_range(node_at(n, 2))?;
    let element = Box::new(lower_type(node_at(n, 5))?);
    Ok(ArrayTypeExpr { low, high, element })
}

fn lower_range(n: &ParseNode) -> LResult<(Expr, Expr)> {
    let low = lower_expression(node_at(n, 0))?;
    let high = lower_expression(node_at(n, 2))?;
    Ok((low, high))
}

fn lower_record_type(n: &ParseNode) -> LResult<RecordTypeExpr> {
    let mut fields = Vec::new();
    lower_field_list(node_at(n, 1), &mut fields)?;
    Ok(RecordTypeExpr { fields })
}

fn lower_field_list(n: &ParseNode, out: &mut Vec<FieldGroup>) -> LResult<()> {
    let names = lower_identifier_list(node_at(n, 0));
    let ty = lower_type_definition(node_at(n, 2))?;
    out.push(FieldGroup { names, ty });
    lower_field_list_tail(node_at(n, 3), out)
}

fn lower_field_list_tail(n: &ParseNode, out: &mut Vec<FieldGroup>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    lower_field_list(node_at(n, 1), out)
}

fn lower_identifier_list(n: &ParseNode) -> Vec<String> {
    let mut names = vec![leaf_at(n, 0).to_string()];
    lower_identifier_list_tail(node_at(n, 1), &mut names);
    names
}

fn lower_identifier_list_tail(n: &ParseNode, out: &mut Vec<String>) {
    if n.children.is_empty() {
        return;
    }
    out.push(leaf_at(n, 1).to_string());
    lower_identifier_list_tail(node_at(n, 2), out);
}

// --- variables ---------------------------------------------------------

fn lower_var_section(n: &ParseNode, out: &mut Vec<VarItem>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    lower_var_declaration(node_at(n, 0), out)?;
    lower_var_section(node_at(n, 1), out)
}

fn lower_var_declaration(n: &ParseNode, out: &mut Vec<VarItem>) -> LResult<()> {
    out.push(lower_var_item(node_at(n, 1))?);
    lower_var_item_tail(node_at(n, 2), out)
}

fn lower_var_item_tail(n: &ParseNode, out: &mut Vec<VarItem>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    out.push(lower_var_item(node_at(n, 0))?);
    lower_var_item_tail(node_at(n, 1), out)
}

fn lower_var_item(n: &ParseNode) -> LResult<VarItem> {
    let names = lower_identifier_list(node_at(n, 0));
    let ty = lower_type_definition(node_at(n, 2))?;
    Ok(VarItem { names, ty })
}

// --- subprograms ---------------------------------------------------------

fn lower_subprogram_section(n: &ParseNode, out: &mut Vec<Subprogram>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    out.push(lower_subprogram_declaration(node_at(n, 0))?);
    lower_subprogram_section(node_at(n, 1), out)
}

fn lower_subprogram_declaration(n: &ParseNode) -> LResult<Subprogram> {
    let inner = node_at(n, 0);
    match inner.kind {
        NonTerminal::ProcedureDeclaration => lower_procedure_declaration(inner),
        NonTerminal::FunctionDeclaration => lower_function_declaration(inner),
        other => unreachable!("SubprogramDeclaration wraps an unexpected non-terminal {other}"),
    }
}

fn lower_procedure_declaration(n: &ParseNode) -> LResult<Subprogram> {
    let name = leaf_at(n, 1).to_string();
    let (params, block_idx) = if n.children.len() == 6 {
        (lower_formal_parameter_list(node_at(n, 2))?, 4)
    } else {
        (Vec::new(), 3)
    };
    let block = lower_block(node_at(n, block_idx))?;
    Ok(Subprogram {
        kind: SubprogramKind::Procedure,
        name,
        params,
        return_type: None,
        block,
    })
}

fn lower_function_declaration(n: &ParseNode) -> LResult<Subprogram> {
    let name = leaf_at(n, 1).to_string();
    let (params, type_idx, block_idx) = if n.children.len() == 7 {
        (Vec::new(), 3, 5)
    } else {
        (lower_formal_parameter_list(node_at(n, 2))?, 4, 6)
    };
    let return_type = Some(lower_type(node_at(n, type_idx))?);
    let block = lower_block(node_at(n, block_idx))?;
    Ok(Subprogram {
        kind: SubprogramKind::Function,
        name,
        params,
        return_type,
        block,
    })
}

fn lower_formal_parameter_list(n: &ParseNode) -> LResult<Vec<ParamGroup>> {
    let mut groups = vec![lower_parameter_group(node_at(n, 1))?];
    lower_parameter_group_tail(node_at(n, 2), &mut groups)?;
    Ok(groups)
}

fn lower_parameter_group_tail(n: &ParseNode, out: &mut Vec<ParamGroup>) -> LResult<()> {
    match n.children.len() {
        0 | 1 => Ok(()),
        _ => {
            out.push(lower_parameter_group(node_at(n, 1))?);
            lower_parameter_group_tail(node_at(n, 2), out)
        }
    }
}

fn lower_parameter_group(n: &ParseNode) -> LResult<ParamGroup> {
    let modifier = lower_parameter_modifier(node_at(n, 0));
    let names = lower_identifier_list(node_at(n, 1));
    let ty = lower_type(node_at(n, 3))?;
    Ok(ParamGroup { modifier, names, ty })
}

fn lower_parameter_modifier(n: &ParseNode) -> ParamModifier {
    if n.children.is_empty() {
        ParamModifier::Value
    } else {
        ParamModifier::Reference
    }
}

fn lower_block(n: &ParseNode) -> LResult<Block> {
    let decls = lower_declaration_part(node_at(n, 0))?;
    let body = lower_compound_statement(node_at(n, 1))?;
    Ok(Block { decls, body })
}

// --- statements ---------------------------------------------------------

fn lower_compound_statement(n: &ParseNode) -> LResult<Vec<Stmt>> {
    let mut stmts = Vec::new();
    lower_statement_list(node_at(n, 1), &mut stmts)?;
    Ok(stmts)
}

fn lower_statement_list(n: &ParseNode, out: &mut Vec<Stmt>) -> LResult<()> {
    out.push(lower_statement(node_at(n, 0))?);
    lower_statement_list_tail(node_at(n, 1), out)
}

fn lower_statement_list_tail(n: &ParseNode, out: &mut Vec<Stmt>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    out.push(lower_statement(node_at(n, 1))?);
    lower_statement_list_tail(node_at(n, 2), out)
}

fn lower_statement(n: &ParseNode) -> LResult<Stmt> {
    let inner = node_at(n, 0);
    match inner.kind {
        NonTerminal::AssignmentStatement => lower_assignment_statement(inner),
        NonTerminal::IfStatement => lower_if_statement(inner),
        NonTerminal::WhileStatement => lower_while_statement(inner),
        NonTerminal::ForStatement => lower_for_statement(inner),
        NonTerminal::RepeatStatement => lower_repeat_statement(inner),
        NonTerminal::CaseStatement => lower_case_statement(inner),
        NonTerminal::CompoundStatement => Ok(Stmt::Compound(lower_compound_statement(inner)?)),
        NonTerminal::ExpressionStatement => Ok(Stmt::Expr(lower_expression(node_at(inner, 0))?)),
        NonTerminal::EmptyStatement => Ok(Stmt::Empty),
        other => unreachable!("Statement wraps an unexpected non-terminal {other}"),
    }
}

fn lower_assignment_statement(n: &ParseNode) -> LResult<Stmt> {
    let target = match &n.children[0] {
        ChildNode::Leaf(t) => LValue::Var(t.lexeme.clone()),
        ChildNode::Node(field_access) => LValue::Field(lower_field_access(field_access)?),
    };
    let value = lower_expression(node_at(n, 2))?;
    Ok(Stmt::Assign(Assign { target, value }))
}

fn lower_if_statement(n: &ParseNode) -> LResult<Stmt> {
    let cond = lower_expression(node_at(n, 1))?;
    let then_branch = Box::new(lower_statement(node_at(n, 3))?);
    let else_branch = if n.children.len() == 6 {
        Some(Box::new(lower_statement(node_at(n, 5))?))
    } else {
        None
    };
    Ok(Stmt::If(If { cond, then_branch, else_branch }))
}

fn lower_while_statement(n: &ParseNode) -> LResult<Stmt> {
    let cond = lower_expression(node_at(n, 1))?;
    let body = Box::new(lower_statement(node_at(n, 3))?);
    Ok(Stmt::While(While { cond, body }))
}

fn lower_for_statement(n: &ParseNode) -> LResult<Stmt> {
    let var = leaf_at(n, 1).to_string();
    let from = lower_expression(node_at(n, 3))?;
    let direction = if leaf_at(n, 4) == "turun-ke" {
        ForDirection::Down
    } else {
        ForDirection::Up
    };
    let to = lower_expression(node_at(n, 5))?;
    let body = Box::new(lower_statement(node_at(n, 7))?);
    Ok(Stmt::For(For { var, from, to, direction, body }))
}

fn lower_repeat_statement(n: &ParseNode) -> LResult<Stmt> {
    let mut body = Vec::new();
    lower_statement_list(node_at(n, 1), &mut body)?;
    let cond = lower_expression(node_at(n, 3))?;
    Ok(Stmt::Repeat(Repeat { body, cond }))
}

fn lower_case_statement(n: &ParseNode) -> LResult<Stmt> {
    let selector = lower_expression(node_at(n, 1))?;
    let mut arms = Vec::new();
    lower_case_list(node_at(n, 3), &mut arms)?;
    Ok(Stmt::Case(Case { selector, arms }))
}

fn lower_case_list(n: &ParseNode, out: &mut Vec<CaseArm>) -> LResult<()> {
    out.push(lower_case_element(node_at(n, 0))?);
    lower_case_list_tail(node_at(n, 1), out)
}

fn lower_case_list_tail(n: &ParseNode, out: &mut Vec<CaseArm>) -> LResult<()> {
    if n.children.len() < 3 {
        return Ok(());
    }
    out.push(lower_case_element(node_at(n, 1))?);
    lower_case_list_tail(node_at(n, 2), out)
}

fn lower_case_element(n: &ParseNode) -> LResult<CaseArm> {
    let label = lower_expression(node_at(n, 0))?;
    let body = Box::new(lower_statement(node_at(n, 2))?);
    Ok(CaseArm { label, body })
}

// --- expressions ---------------------------------------------------------

fn lower_expression(n: &ParseNode) -> LResult<Expr> {
    if n.children.len() == 1 {
        return lower_simple_expression(node_at(n, 0));
    }
    let left = lower_simple_expression(node_at(n, 0))?;
    let op = lower_relational_operator(node_at(n, 1));
    let right = lower_simple_expression(node_at(n, 2))?;
    Ok(Expr::new(ExprKind::Binary(op, Box::new(left), Box::new(right))))
}

fn lower_simple_expression(n: &ParseNode) -> LResult<Expr> {
    let (head, tail_idx) = match &n.children[0] {
        ChildNode::Leaf(t) => {
            let op = if t.lexeme == "-" { UnaryOp::Neg } else { UnaryOp::Pos };
            let term = lower_term(node_at(n, 1))?;
            (Expr::new(ExprKind::Unary(op, Box::new(term))), 2)
        }
        ChildNode::Node(_) => (lower_term(node_at(n, 0))?, 1),
    };
    lower_simple_expression_tail(node_at(n, tail_idx), head)
}

fn lower_simple_expression_tail(n: &ParseNode, acc: Expr) -> LResult<Expr> {
    if n.children.is_empty() {
        return Ok(acc);
    }
    let op = lower_additive_operator(node_at(n, 0));
    let rhs = lower_term(node_at(n, 1))?;
    let combined = Expr::new(ExprKind::Binary(op, Box::new(acc), Box::new(rhs)));
    lower_simple_expression_tail(node_at(n, 2), combined)
}

fn lower_term(n: &ParseNode) -> LResult<Expr> {
    let head = lower_factor(node_at(n, 0))?;
    lower_term_tail(node_at(n, 1), head)
}

fn lower_term_tail(n: &ParseNode, acc: Expr) -> LResult<Expr> {
    if n.children.is_empty() {
        return Ok(acc);
    }
    let op = lower_multiplicative_operator(node_at(n, 0));
    let rhs = lower_factor(node_at(n, 1))?;
    let combined = Expr::new(ExprKind::Binary(op, Box::new(acc), Box::new(rhs)));
    lower_term_tail(node_at(n, 2), combined)
}

fn lower_factor(n: &ParseNode) -> LResult<Expr> {
    match n.children.len() {
        1 => {
            let inner = node_at(n, 0);
            match inner.kind {
                NonTerminal::Call => Ok(Expr::new(ExprKind::Call(lower_call(inner)?))),
                NonTerminal::Value => lower_value(inner),
                other => unreachable!("Factor wraps an unexpected non-terminal {other}"),
            }
        }
        2 => {
            let factor = lower_factor(node_at(n, 1))?;
            Ok(Expr::new(ExprKind::Unary(UnaryOp::Not, Box::new(factor))))
        }
        _ => lower_expression(node_at(n, 1)),
    }
}

fn lower_call(n: &ParseNode) -> LResult<ast::CallExpr> {
    let callee = leaf_at(n, 0).to_string();
    let args = if n.children.len() == 4 {
        let mut args = Vec::new();
        lower_parameter_list(node_at(n, 2), &mut args)?;
        args
    } else {
        Vec::new()
    };
    Ok(ast::CallExpr { callee, args })
}

fn lower_parameter_list(n: &ParseNode, out: &mut Vec<Expr>) -> LResult<()> {
    out.push(lower_expression(node_at(n, 0))?);
    lower_parameter_list_tail(node_at(n, 1), out)
}

fn lower_parameter_list_tail(n: &ParseNode, out: &mut Vec<Expr>) -> LResult<()> {
    if n.children.is_empty() {
        return Ok(());
    }
    out.push(lower_expression(node_at(n, 1))?);
    lower_parameter_list_tail(node_at(n, 2), out)
}

fn lower_value(n: &ParseNode) -> LResult<Expr> {
    match &n.children[0] {
        ChildNode::Node(inner) => match inner.kind {
            NonTerminal::FieldAccess => {
                Ok(Expr::new(ExprKind::FieldAccess(lower_field_access(inner)?)))
            }
            NonTerminal::Number => lower_number(inner),
            other => unreachable!("Value wraps an unexpected non-terminal {other}"),
        },
        ChildNode::Leaf(t) => match t.kind {
            TokenKind::CharLiteral => Ok(Expr::new(ExprKind::CharLit(strip_char_literal(&t.lexeme)?))),
            TokenKind::StringLiteral => Ok(Expr::new(ExprKind::StrLit(strip_string_literal(&t.lexeme)))),
            TokenKind::Keyword if t.lexeme == "benar" => Ok(Expr::new(ExprKind::BoolLit(true))),
            TokenKind::Keyword if t.lexeme == "salah" => Ok(Expr::new(ExprKind::BoolLit(false))),
            TokenKind::Identifier => Ok(Expr::new(ExprKind::VarRef(t.lexeme.clone()))),
            _ => unreachable!("Value leaf of unexpected kind {:?}", t.kind),
        },
    }
}

fn lower_number(n: &ParseNode) -> LResult<Expr> {
    if n.children.len() == 3 {
        let lexeme = format!("{}.{}", leaf_at(n, 0), leaf_at(n, 2));
        let value: f64 = lexeme
            .parse()
            .map_err(|_| LowerError::InvalidNumberLiteral { lexeme: lexeme.clone() })?;
        Ok(Expr::new(ExprKind::RealLit(value)))
    } else {
        let lexeme = leaf_at(n, 0);
        let value: i64 = lexeme
            .parse()
            .map_err(|_| LowerError::InvalidNumberLiteral { lexeme: lexeme.to_string() })?;
        Ok(Expr::new(ExprKind::IntLit(value)))
    }
}

fn lower_field_access(n: &ParseNode) -> LResult<FieldAccess> {
    let base = leaf_at(n, 0).to_string();
    let (first_step, tail_idx) = match n.children.len() {
        4 => (AccessStep::Field(leaf_at(n, 2).to_string()), 3),
        _ => (AccessStep::Index(lower_expression(node_at(n, 2))?), 4),
    };
    let mut path = vec![first_step];
    lower_field_access_tail(node_at(n, tail_idx), &mut path)?;
    Ok(FieldAccess { base, path })
}

fn lower_field_access_tail(n: &ParseNode, out: &mut Vec<AccessStep>) -> LResult<()> {
    match n.children.len() {
        0 => Ok(()),
        3 => {
            out.push(AccessStep::Field(leaf_at(n, 1).to_string()));
            lower_field_access_tail(node_at(n, 2), out)
        }
        _ => {
            out.push(AccessStep::Index(lower_expression(node_at(n, 1))?));
            lower_field_access_tail(node_at(n, 3), out)
        }
    }
}

fn lower_relational_operator(n: &ParseNode) -> BinaryOp {
    match leaf_at(n, 0) {
        "<>" => BinaryOp::Ne,
        "<" => BinaryOp::Lt,
        "<=" => BinaryOp::Le,
        ">" => BinaryOp::Gt,
        ">=" => BinaryOp::Ge,
        _ => BinaryOp::Eq,
    }
}

fn lower_additive_operator(n: &ParseNode) -> BinaryOp {
    match leaf_at(n, 0) {
        "atau" => BinaryOp::Or,
        "-" => BinaryOp::Sub,
        _ => BinaryOp::Add,
    }
}

fn lower_multiplicative_operator(n: &ParseNode) -> BinaryOp {
    match leaf_at(n, 0) {
        "/" => BinaryOp::Div,
        "bagi" => BinaryOp::IntDiv,
        "mod" => BinaryOp::Mod,
        "dan" => BinaryOp::And,
        _ => BinaryOp::Mul,
    }
}

fn strip_char_literal(lexeme: &str) -> LResult<char> {
    let inner = lexeme.trim_matches('\'');
    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LowerError::InvalidCharLiteral { lexeme: lexeme.to_string() }),
    }
}

fn strip_string_literal(lexeme: &str) -> String {
    lexeme.trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse_program;

    fn lower_src(src: &str) -> Program {
        let tokens = tokenize(src).expect("tokenize");
        let cst = parse_program(&tokens).expect("parse");
        lower_program(&cst).expect("lower")
    }

    #[test]
    fn lowers_minimal_program() {
        let program = lower_src("program contoh; mulai selesai.");
        assert_eq!(program.name, "contoh");
        assert!(program.block.body.is_empty());
    }

    #[test]
    fn lowers_const_and_var_declarations() {
        let program = lower_src(
            "program contoh; \
             konstanta phi = 3.14; \
             variabel x, y: integer; \
             mulai x := x + y selesai.",
        );
        assert_eq!(program.block.decls.consts.len(), 1);
        match program.block.decls.consts[0].value {
            Literal::Real(v) => assert!((v - 3.14).abs() < 1e-9),
            ref other => panic!("expected a real literal, got {other:?}"),
        }
        assert_eq!(program.block.decls.vars[0].names, vec!["x", "y"]);
    }

    #[test]
    fn lowers_if_while_for_as_nested_statements() {
        let program = lower_src(
            "program contoh; \
             variabel i: integer; \
             mulai \
                untuk i := 1 ke 10 lakukan \
                    jika i > 5 maka \
                        i := i - 1 \
                    selain-itu \
                        i := i + 1 \
             selesai.",
        );
        match &program.block.body[0] {
            Stmt::For(for_stmt) => {
                assert_eq!(for_stmt.direction, ForDirection::Up);
                match &*for_stmt.body {
                    Stmt::If(if_stmt) => assert!(if_stmt.else_branch.is_some()),
                    other => panic!("expected an if statement, got {other:?}"),
                }
            }
            other => panic!("expected a for statement, got {other:?}"),
        }
    }

    #[test]
    fn lowers_field_access_assignment() {
        let program = lower_src(
            "program contoh; \
             tipe titik = rekaman x, y: integer selesai; \
             variabel p: titik; \
             mulai p.x := 1 selesai.",
        );
        match &program.block.body[0] {
            Stmt::Assign(assign) => match &assign.target {
                LValue::Field(access) => {
                    assert_eq!(access.base, "p");
                    assert_eq!(access.path.len(), 1);
                }
                other => panic!("expected a field-access target, got {other:?}"),
            },
            other => panic!("expected an assignment, got {other:?}"),
        }
    }

    #[test]
    fn lowers_array_range_and_index() {
        let program = lower_src(
            "program contoh; \
             variabel a: larik [1..10] dari integer; \
             mulai a[1] := 5 selesai.",
        );
        assert_eq!(program.block.decls.vars[0].names, vec!["a"]);
        match &program.block.decls.vars[0].ty {
            TypeExpr::Array(arr) => match (&arr.low.kind, &arr.high.kind) {
                (ExprKind::IntLit(1), ExprKind::IntLit(10)) => {}
                other => panic!("unexpected array bounds: {other:?}"),
            },
            other => panic!("expected an array type, got {other:?}"),
        }
    }

    #[test]
    fn lowers_call_expression_and_procedure_call_statement() {
        let program = lower_src(
            "program contoh; \
             prosedur tampil(variabel n: integer); \
             mulai \
                tulis(n) \
             selesai; \
             mulai \
                tampil(7) \
             selesai.",
        );
        assert_eq!(program.block.decls.subprograms.len(), 1);
        match &program.block.body[0] {
            Stmt::Expr(e) => match &e.kind {
                ExprKind::Call(call) => {
                    assert_eq!(call.callee, "tampil");
                    assert_eq!(call.args.len(), 1);
                }
                other => panic!("expected a call expression, got {other:?}"),
            },
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }
}
