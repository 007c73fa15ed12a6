//! The analysis driver: walks the AST once, building `Idt`/`Blt`/`Art` as
//! it goes and type-checking every expression in place.

use crate::ast::{
    AccessStep, Assign, ArrayTypeExpr, BinaryOp, Block, Case, CallExpr, ConstItem, DeclBlock, Expr,
    ExprKind, FieldAccess, For, If, LValue, Literal, Program, RecordTypeExpr, Repeat, Stmt,
    Subprogram, SubprogramKind, TypeExpr, TypeItem, UnaryOp, VarItem, While,
};

use super::art::{Art, ArtEntry};
use super::blt::{Blt, BltEntry};
use super::error::SemanticError;
use super::eval::{evaluate_static, StaticValue};
use super::idt::{Idt, IdtEntry, IdtKind, NONE_IDX, RESERVED_WORDS};
use super::types;

/// `write`/`writeln` aren't declared anywhere a program can reach, so this
/// tolerates them as unresolved calls rather than modeling I/O.
fn is_builtin_io(name: &str) -> bool {
    matches!(name, "write" | "writeln")
}

fn is_lvalue(expr: &Expr) -> bool {
    matches!(expr.kind, ExprKind::VarRef(_) | ExprKind::FieldAccess(_))
}

/// Owns the three symbol tables and the scope stack while a program is
/// being analyzed. Surviving past a failed `analyze_program` call is
/// intentional: tests and callers can still inspect how far the tables got.
pub struct Analyzer {
    pub idt: Idt,
    pub blt: Blt,
    pub art: Art,
    /// `display[level]` is the `BLT` index of the block currently active at
    /// that lexical level.
    display: Vec<usize>,
    level: usize,
}

impl Analyzer {
    pub fn new() -> Self {
        let idt = Idt::new();
        let mut blt = Blt::new();
        blt.push_global(idt.reserved_span_end());
        Analyzer { idt, blt, art: Art::new(), display: vec![0], level: 0 }
    }

    pub fn analyze_program(&mut self, program: &Program) -> Result<(), SemanticError> {
        self.push_scope(true);
        self.enter(&program.name, IdtKind::Program, types::NONE, NONE_IDX, true, 0)?;
        self.analyze_block(&program.block)
    }

    // ----- scope / table plumbing -----------------------------------

    fn push_scope(&mut self, inherit_last: bool) -> usize {
        let inherited = self.blt.get(self.display[self.level]).last;
        self.level += 1;
        let last = if inherit_last { inherited } else { NONE_IDX };
        let idx = self.blt.push(BltEntry { last, lpar: NONE_IDX, psze: 0, vsze: 0 });
        self.display.push(idx);
        idx
    }

    fn pop_scope(&mut self) {
        self.display.pop();
        self.level -= 1;
    }

    fn current_block(&self) -> usize {
        self.display[self.level]
    }

    /// The unified `enter`: refuses a reserved word at any level, then
    /// walks the current block's own chain (not its inherited outer
    /// entries) looking for a same-name clash before appending.
    fn enter(&mut self, name: &str, kind: IdtKind, type_: i32, ref_: usize, normal: bool, addr: i32) -> Result<usize, SemanticError> {
        if RESERVED_WORDS.contains(&name) {
            return Err(SemanticError::ReservedWordRedeclaration { name: name.to_string() });
        }
        let block_idx = self.current_block();
        let start = self.blt.get(block_idx).last;
        self.check_duplicate(start, name)?;
        let entry = IdtEntry {
            name: name.to_string(),
            kind,
            type_,
            ref_,
            normal,
            level: self.level,
            addr,
            link: start,
            param_types: Vec::new(),
            param_is_var: Vec::new(),
        };
        let idx = self.idt.push(entry);
        self.blt.get_mut(block_idx).last = idx;
        Ok(idx)
    }

    /// Walks a block's own chain only as far as entries declared at the
    /// current level: an inherited tail belongs to an outer block and
    /// can't clash with a fresh declaration in this one.
    fn check_duplicate(&self, start: usize, name: &str) -> Result<(), SemanticError> {
        let mut idx = start;
        while idx != NONE_IDX {
            let e = self.idt.get(idx);
            if e.level != self.level {
                break;
            }
            if e.name == name {
                return Err(SemanticError::DuplicateDeclaration { name: name.to_string() });
            }
            idx = e.link;
        }
        Ok(())
    }

    /// Searches from the innermost level outward.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        let mut lvl = self.level as isize;
        while lvl >= 0 {
            let block = self.display[lvl as usize];
            let mut idx = self.blt.get(block).last;
            while idx != NONE_IDX {
                let e = self.idt.get(idx);
                if e.name == name {
                    return Some(idx);
                }
                idx = e.link;
            }
            lvl -= 1;
        }
        None
    }

    fn find_in_block(&self, block_idx: usize, name: &str) -> Option<usize> {
        let mut idx = self.blt.get(block_idx).last;
        while idx != NONE_IDX {
            let e = self.idt.get(idx);
            if e.name == name {
                return Some(idx);
            }
            idx = e.link;
        }
        None
    }

    fn eval_static(&self, expr: &Expr) -> Result<StaticValue, SemanticError> {
        evaluate_static(expr, &self.idt, |n| self.lookup(n))
    }

    // ----- type resolution --------------------------------------------

    /// Matches a type name against the five primitive keywords first, then
    /// falls back to a `lookup` that must land on a `Type` entry.
    fn resolve_named_type(&self, name: &str) -> Result<i32, SemanticError> {
        match name {
            "integer" => Ok(types::INT),
            "real" => Ok(types::REAL),
            "boolean" => Ok(types::BOOL),
            "char" => Ok(types::CHAR),
            "string" => Ok(types::STRING),
            _ => {
                let idx = self.lookup(name).ok_or_else(|| SemanticError::UndefinedType { name: name.to_string() })?;
                if self.idt.get(idx).kind != IdtKind::Type {
                    return Err(SemanticError::UndefinedType { name: name.to_string() });
                }
                Ok(idx as i32)
            }
        }
    }

    /// Flattens a raw type code (primitive, or an `IDT` index to a `Type`
    /// entry) to the `(type, ref, size)` triple every consumer (`VAR`,
    /// `PARAM`, record field, array element) ultimately stores. A `Type`
    /// entry's own fields are already normalized at the point it was
    /// declared, so this only ever dereferences one level.
    fn normalize_code(&self, code: i32) -> (i32, usize, i32) {
        if code <= types::STRING {
            (code, NONE_IDX, 1)
        } else {
            let entry = self.idt.get(code as usize);
            match entry.type_ {
                types::RECORD => (types::RECORD, entry.ref_, self.blt.get(entry.ref_).vsze),
                types::ARRAY => (types::ARRAY, entry.ref_, self.art.get(entry.ref_).size),
                primitive => (primitive, NONE_IDX, 1),
            }
        }
    }

    /// Resolves a `TypeExpr` to the `(type, ref, size)` triple, constructing
    /// fresh `ART`/`BLT` entries for anonymous array/record shapes.
    fn resolve_type_def(&mut self, def: &TypeExpr) -> Result<(i32, usize, i32), SemanticError> {
        match def {
            TypeExpr::Named(name) => {
                let code = self.resolve_named_type(name)?;
                Ok(self.normalize_code(code))
            }
            TypeExpr::Array(arr) => self.build_array_type(arr),
            TypeExpr::Record(rec) => self.build_record_type(rec),
        }
    }

    /// "Array construction": evaluate both bounds, normalize a
    /// char-indexed array's span to `1..len`, resolve the element type, and
    /// materialize a new `ART` entry. Every `larik` gets its own, even a
    /// textually identical one.
    fn build_array_type(&mut self, arr: &ArrayTypeExpr) -> Result<(i32, usize, i32), SemanticError> {
        let lo = self.eval_static(&arr.low)?;
        let hi = self.eval_static(&arr.high)?;
        let (inx_typ, low, high, char_base) = if lo.is_char() || hi.is_char() {
            let lo_ord = lo.as_ordinal();
            let hi_ord = hi.as_ordinal();
            (types::CHAR, 1, (hi_ord - lo_ord + 1) as i32, lo_ord as i32)
        } else {
            (types::INT, lo.as_ordinal() as i32, hi.as_ordinal() as i32, 0)
        };
        let (el_typ, el_ref, el_size) = self.resolve_type_def(&arr.element)?;
        let size = (high - low + 1) * el_size;
        let idx = self.art.push(ArtEntry { inx_typ, el_typ, el_ref, low, high, el_size, size, char_base });
        Ok((types::ARRAY, idx, size))
    }

    /// "Record construction": fields get their own fresh block (not chained
    /// to any outer scope, so a field can't shadow or be shadowed by a
    /// declaration outside the record) whose combined size becomes the
    /// record's.
    fn build_record_type(&mut self, rec: &RecordTypeExpr) -> Result<(i32, usize, i32), SemanticError> {
        self.push_scope(false);
        let block_idx = self.current_block();
        let mut offset = 0i32;
        for group in &rec.fields {
            let (ty, rf, size) = self.resolve_type_def(&group.ty)?;
            for name in &group.names {
                self.enter(name, IdtKind::Var, ty, rf, true, offset)?;
                offset += size;
            }
        }
        self.blt.get_mut(block_idx).vsze = offset;
        self.pop_scope();
        Ok((types::RECORD, block_idx, offset))
    }

    fn type_name(&self, code: i32) -> String {
        match code {
            types::RECORD => "record".to_string(),
            c if types::is_primitive(c) => types::primitive_name(c).to_string(),
            _ => "type".to_string(),
        }
    }

    fn assignable(&self, target: i32, value: i32) -> bool {
        target == value || (target == types::REAL && value == types::INT)
    }

    // ----- declarations -------------------------------------------------

    fn analyze_block(&mut self, block: &Block) -> Result<(), SemanticError> {
        self.analyze_decl_block(&block.decls)?;
        for stmt in &block.body {
            self.analyze_stmt(stmt)?;
        }
        Ok(())
    }

    fn analyze_decl_block(&mut self, decls: &DeclBlock) -> Result<(), SemanticError> {
        for item in &decls.consts {
            self.analyze_const_item(item)?;
        }
        for item in &decls.types {
            self.analyze_type_item(item)?;
        }
        for item in &decls.vars {
            self.analyze_var_item(item)?;
        }
        for sub in &decls.subprograms {
            self.analyze_subprogram(sub)?;
        }
        Ok(())
    }

    fn analyze_const_item(&mut self, item: &ConstItem) -> Result<(), SemanticError> {
        let (ty, addr) = match &item.value {
            Literal::Int(v) => (types::INT, *v as i32),
            Literal::Real(_) => (types::REAL, 0),
            Literal::Char(c) => (types::CHAR, *c as i32),
            Literal::Str(_) => (types::STRING, 0),
            Literal::Bool(b) => (types::BOOL, *b as i32),
        };
        self.enter(&item.name, IdtKind::Const, ty, NONE_IDX, false, addr)?;
        Ok(())
    }

    fn analyze_type_item(&mut self, item: &TypeItem) -> Result<(), SemanticError> {
        let (ty, rf, size) = self.resolve_type_def(&item.def)?;
        let addr = if ty == types::ARRAY || ty == types::RECORD { size } else { 0 };
        self.enter(&item.name, IdtKind::Type, ty, rf, true, addr)?;
        Ok(())
    }

    fn analyze_var_item(&mut self, item: &VarItem) -> Result<(), SemanticError> {
        let (ty, rf, size) = self.resolve_type_def(&item.ty)?;
        for name in &item.names {
            let block_idx = self.current_block();
            let addr = self.blt.get(block_idx).vsze;
            self.enter(name, IdtKind::Var, ty, rf, true, addr)?;
            self.blt.get_mut(block_idx).vsze += size;
        }
        Ok(())
    }

    fn analyze_subprogram(&mut self, sub: &Subprogram) -> Result<(), SemanticError> {
        let kind = match sub.kind {
            SubprogramKind::Procedure => IdtKind::Proc,
            SubprogramKind::Function => IdtKind::Func,
        };
        let return_type = match &sub.return_type {
            Some(t) => self.resolve_type_def(t)?.0,
            None => types::NONE,
        };
        let sub_idx = self.enter(&sub.name, kind, return_type, NONE_IDX, true, 0)?;

        self.push_scope(true);
        let mut param_types = Vec::new();
        let mut param_is_var = Vec::new();
        let mut pidx = 0i32;
        for group in &sub.params {
            let (ty, rf, _) = self.resolve_type_def(&group.ty)?;
            let is_var = group.modifier == crate::ast::ParamModifier::Reference;
            for name in &group.names {
                self.enter(name, IdtKind::Param, ty, rf, !is_var, pidx)?;
                param_types.push(ty);
                param_is_var.push(is_var);
                pidx += 1;
            }
        }
        let block_idx = self.current_block();
        {
            let b = self.blt.get_mut(block_idx);
            b.lpar = if pidx == 0 { NONE_IDX } else { b.last };
            b.psze = pidx;
        }
        self.blt.get_mut(block_idx).last = self.blt.get(block_idx).lpar;
        self.idt.get_mut(sub_idx).param_types = param_types;
        self.idt.get_mut(sub_idx).param_is_var = param_is_var;

        self.analyze_block(&sub.block)?;
        self.pop_scope();
        Ok(())
    }

    // ----- statements ----------------------------------------------------

    fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::Assign(a) => self.analyze_assign(a),
            Stmt::If(i) => self.analyze_if(i),
            Stmt::While(w) => self.analyze_while(w),
            Stmt::For(f) => self.analyze_for(f),
            Stmt::Repeat(r) => self.analyze_repeat(r),
            Stmt::Case(c) => self.analyze_case(c),
            Stmt::Compound(stmts) => {
                for s in stmts {
                    self.analyze_stmt(s)?;
                }
                Ok(())
            }
            Stmt::Expr(e) => match &e.kind {
                ExprKind::Call(call) => self.analyze_call_stmt(call),
                _ => {
                    self.analyze_expr(e)?;
                    Ok(())
                }
            },
            Stmt::Empty => Ok(()),
        }
    }

    fn analyze_assign(&mut self, a: &Assign) -> Result<(), SemanticError> {
        let (target_ty, const_name) = match &a.target {
            LValue::Var(name) => {
                let idx = self.lookup(name).ok_or_else(|| SemanticError::UndeclaredIdentifier { name: name.clone() })?;
                let entry = self.idt.get(idx);
                let is_const = entry.kind == IdtKind::Const;
                (entry.type_, if is_const { Some(name.clone()) } else { None })
            }
            LValue::Field(fa) => (self.analyze_field_access(fa)?, None),
        };
        if let Some(name) = const_name {
            return Err(SemanticError::AssignToConstant { name });
        }
        let value_ty = self.analyze_expr(&a.value)?;
        if !self.assignable(target_ty, value_ty) {
            return Err(SemanticError::TypeMismatch { target: self.type_name(target_ty), value: self.type_name(value_ty) });
        }
        Ok(())
    }

    fn require_bool(&self, ty: i32) -> Result<(), SemanticError> {
        if ty != types::BOOL {
            return Err(SemanticError::NonBooleanCondition { found: self.type_name(ty) });
        }
        Ok(())
    }

    fn analyze_if(&mut self, i: &If) -> Result<(), SemanticError> {
        let cond_ty = self.analyze_expr(&i.cond)?;
        self.require_bool(cond_ty)?;
        self.analyze_stmt(&i.then_branch)?;
        if let Some(e) = &i.else_branch {
            self.analyze_stmt(e)?;
        }
        Ok(())
    }

    fn analyze_while(&mut self, w: &While) -> Result<(), SemanticError> {
        let cond_ty = self.analyze_expr(&w.cond)?;
        self.require_bool(cond_ty)?;
        self.analyze_stmt(&w.body)
    }

    fn analyze_repeat(&mut self, r: &Repeat) -> Result<(), SemanticError> {
        for s in &r.body {
            self.analyze_stmt(s)?;
        }
        let cond_ty = self.analyze_expr(&r.cond)?;
        self.require_bool(cond_ty)
    }

    fn analyze_for(&mut self, f: &For) -> Result<(), SemanticError> {
        let idx = self.lookup(&f.var).ok_or_else(|| SemanticError::UndeclaredIdentifier { name: f.var.clone() })?;
        let var_ty = self.idt.get(idx).type_;
        if var_ty != types::INT {
            return Err(SemanticError::TypeMismatch { target: "integer".to_string(), value: self.type_name(var_ty) });
        }
        let from_ty = self.analyze_expr(&f.from)?;
        if from_ty != types::INT {
            return Err(SemanticError::TypeMismatch { target: "integer".to_string(), value: self.type_name(from_ty) });
        }
        let to_ty = self.analyze_expr(&f.to)?;
        if to_ty != types::INT {
            return Err(SemanticError::TypeMismatch { target: "integer".to_string(), value: self.type_name(to_ty) });
        }
        self.analyze_stmt(&f.body)
    }

    fn analyze_case(&mut self, c: &Case) -> Result<(), SemanticError> {
        let sel_ty = self.analyze_expr(&c.selector)?;
        for arm in &c.arms {
            let label_ty = self.analyze_expr(&arm.label)?;
            let compatible = label_ty == sel_ty || (types::is_numeric(sel_ty) && types::is_numeric(label_ty));
            if !compatible {
                return Err(SemanticError::TypeMismatch { target: self.type_name(sel_ty), value: self.type_name(label_ty) });
            }
            self.analyze_stmt(&arm.body)?;
        }
        Ok(())
    }

    // ----- calls -----------------------------------------------------

    fn analyze_call_stmt(&mut self, call: &CallExpr) -> Result<(), SemanticError> {
        if is_builtin_io(&call.callee) {
            for a in &call.args {
                self.analyze_expr(a)?;
            }
            return Ok(());
        }
        let idx = self.lookup(&call.callee).ok_or_else(|| SemanticError::UndeclaredIdentifier { name: call.callee.clone() })?;
        let kind = self.idt.get(idx).kind;
        if kind != IdtKind::Proc && kind != IdtKind::Func {
            return Err(SemanticError::NotCallable { name: call.callee.clone() });
        }
        self.check_call_args(idx, call)
    }

    fn analyze_call_expr(&mut self, call: &CallExpr) -> Result<(i32, usize), SemanticError> {
        if is_builtin_io(&call.callee) {
            for a in &call.args {
                self.analyze_expr(a)?;
            }
            return Ok((types::NONE, NONE_IDX));
        }
        let idx = self.lookup(&call.callee).ok_or_else(|| SemanticError::UndeclaredIdentifier { name: call.callee.clone() })?;
        let kind = self.idt.get(idx).kind;
        if kind == IdtKind::Proc {
            return Err(SemanticError::NonFunctionInExpression { name: call.callee.clone() });
        }
        if kind != IdtKind::Func {
            return Err(SemanticError::NotCallable { name: call.callee.clone() });
        }
        self.check_call_args(idx, call)?;
        Ok((self.idt.get(idx).type_, idx))
    }

    fn check_call_args(&mut self, idx: usize, call: &CallExpr) -> Result<(), SemanticError> {
        let param_types = self.idt.get(idx).param_types.clone();
        let param_is_var = self.idt.get(idx).param_is_var.clone();
        if call.args.len() != param_types.len() {
            return Err(SemanticError::WrongArgCount { name: call.callee.clone(), expected: param_types.len(), found: call.args.len() });
        }
        for (i, arg) in call.args.iter().enumerate() {
            let actual_ty = self.analyze_expr(arg)?;
            let formal_ty = param_types[i];
            let is_var = param_is_var[i];
            if is_var && !is_lvalue(arg) {
                return Err(SemanticError::NonLValueForVarParam { name: call.callee.clone(), position: i + 1 });
            }
            if !self.assignable(formal_ty, actual_ty) {
                return Err(SemanticError::TypeMismatch { target: self.type_name(formal_ty), value: self.type_name(actual_ty) });
            }
        }
        Ok(())
    }

    // ----- field access ------------------------------------------------

    fn analyze_field_access(&mut self, fa: &FieldAccess) -> Result<i32, SemanticError> {
        let head_idx = self.lookup(&fa.base).ok_or_else(|| SemanticError::UndeclaredIdentifier { name: fa.base.clone() })?;
        let head = self.idt.get(head_idx);
        let mut cur_type = head.type_;
        let mut cur_ref = head.ref_;
        for step in &fa.path {
            match step {
                AccessStep::Field(field_name) => {
                    if cur_type != types::RECORD {
                        return Err(SemanticError::NonRecordFieldAccess { name: fa.base.clone() });
                    }
                    let field_idx = self
                        .find_in_block(cur_ref, field_name)
                        .ok_or_else(|| SemanticError::UnknownField { record: fa.base.clone(), field: field_name.clone() })?;
                    let field_entry = self.idt.get(field_idx);
                    cur_type = field_entry.type_;
                    cur_ref = field_entry.ref_;
                }
                AccessStep::Index(index_expr) => {
                    if cur_type != types::ARRAY {
                        return Err(SemanticError::NonArrayIndexed { name: fa.base.clone() });
                    }
                    let art_entry = *self.art.get(cur_ref);
                    let idx_ty = self.analyze_expr(index_expr)?;
                    if idx_ty != art_entry.inx_typ {
                        return Err(SemanticError::TypeMismatch {
                            target: self.type_name(art_entry.inx_typ),
                            value: self.type_name(idx_ty),
                        });
                    }
                    if let Ok(value) = self.eval_static(index_expr) {
                        let ord = value.as_ordinal() as i32;
                        let effective = if art_entry.inx_typ == types::CHAR { ord - art_entry.char_base + 1 } else { ord };
                        if effective < art_entry.low || effective > art_entry.high {
                            return Err(SemanticError::IndexOutOfBounds { index: effective, low: art_entry.low, high: art_entry.high });
                        }
                    }
                    cur_type = art_entry.el_typ;
                    cur_ref = art_entry.el_ref;
                }
            }
        }
        Ok(cur_type)
    }

    // ----- expressions ---------------------------------------------------

    fn analyze_expr(&mut self, expr: &Expr) -> Result<i32, SemanticError> {
        let (ty, tab_idx) = self.type_of_expr(expr)?;
        expr.type_index.set(ty);
        expr.tab_index.set(tab_idx as i32);
        Ok(ty)
    }

    fn type_of_expr(&mut self, expr: &Expr) -> Result<(i32, usize), SemanticError> {
        match &expr.kind {
            ExprKind::IntLit(_) => Ok((types::INT, NONE_IDX)),
            ExprKind::RealLit(_) => Ok((types::REAL, NONE_IDX)),
            ExprKind::CharLit(_) => Ok((types::CHAR, NONE_IDX)),
            ExprKind::StrLit(_) => Ok((types::STRING, NONE_IDX)),
            ExprKind::BoolLit(_) => Ok((types::BOOL, NONE_IDX)),
            ExprKind::VarRef(name) => {
                let idx = self.lookup(name).ok_or_else(|| SemanticError::UndeclaredIdentifier { name: name.clone() })?;
                Ok((self.idt.get(idx).type_, idx))
            }
            ExprKind::FieldAccess(fa) => Ok((self.analyze_field_access(fa)?, NONE_IDX)),
            ExprKind::Call(call) => self.analyze_call_expr(call),
            ExprKind::Unary(op, inner) => Ok((self.type_of_unary(*op, inner)?, NONE_IDX)),
            ExprKind::Binary(op, l, r) => Ok((self.type_of_binary(*op, l, r)?, NONE_IDX)),
        }
    }

    fn type_of_unary(&mut self, op: UnaryOp, inner: &Expr) -> Result<i32, SemanticError> {
        let t = self.analyze_expr(inner)?;
        match op {
            UnaryOp::Not => {
                if t != types::BOOL {
                    return Err(SemanticError::TypeMismatch { target: "boolean".to_string(), value: self.type_name(t) });
                }
                Ok(types::BOOL)
            }
            UnaryOp::Neg | UnaryOp::Pos => {
                if !types::is_numeric(t) {
                    return Err(SemanticError::TypeMismatch { target: "numeric".to_string(), value: self.type_name(t) });
                }
                Ok(t)
            }
        }
    }

    fn require_both(&self, l: i32, r: i32, expect: i32) -> Result<(), SemanticError> {
        if l != expect {
            return Err(SemanticError::TypeMismatch { target: self.type_name(expect), value: self.type_name(l) });
        }
        if r != expect {
            return Err(SemanticError::TypeMismatch { target: self.type_name(expect), value: self.type_name(r) });
        }
        Ok(())
    }

    fn require_numeric_pair(&self, l: i32, r: i32) -> Result<(), SemanticError> {
        if !types::is_numeric(l) {
            return Err(SemanticError::TypeMismatch { target: "numeric".to_string(), value: self.type_name(l) });
        }
        if !types::is_numeric(r) {
            return Err(SemanticError::TypeMismatch { target: "numeric".to_string(), value: self.type_name(r) });
        }
        Ok(())
    }

    fn type_of_binary(&mut self, op: BinaryOp, l: &Expr, r: &Expr) -> Result<i32, SemanticError> {
        let lt = self.analyze_expr(l)?;
        let rt = self.analyze_expr(r)?;
        match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => {
                self.require_numeric_pair(lt, rt)?;
                Ok(if lt == types::REAL || rt == types::REAL { types::REAL } else { types::INT })
            }
            BinaryOp::Div => {
                self.require_numeric_pair(lt, rt)?;
                Ok(types::REAL)
            }
            BinaryOp::IntDiv | BinaryOp::Mod => {
                self.require_both(lt, rt, types::INT)?;
                Ok(types::INT)
            }
            BinaryOp::And | BinaryOp::Or => {
                self.require_both(lt, rt, types::BOOL)?;
                Ok(types::BOOL)
            }
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge | BinaryOp::Eq | BinaryOp::Ne => {
                if types::is_numeric(lt) && types::is_numeric(rt) {
                    Ok(types::BOOL)
                } else if lt == rt {
                    Ok(types::BOOL)
                } else {
                    Err(SemanticError::TypeMismatch { target: self.type_name(lt), value: self.type_name(rt) })
                }
            }
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new()
    }
}
