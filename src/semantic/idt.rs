//! The identifier table `IDT`: an append-only vector, index `0` reserved
//! as "null", entries `1..K` the preloaded reserved words.

use super::types;

/// Sentinel for the "0, or an index into ..." fields used throughout the
/// tables: a `link`/`ref` of `NONE_IDX` means "no such entry".
pub const NONE_IDX: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdtKind {
    Const,
    Var,
    Type,
    Proc,
    Func,
    Program,
    Param,
}

impl IdtKind {
    pub fn label(self) -> &'static str {
        match self {
            IdtKind::Const => "constant",
            IdtKind::Var => "variable",
            IdtKind::Type => "type",
            IdtKind::Proc => "procedure",
            IdtKind::Func => "function",
            IdtKind::Program => "program",
            IdtKind::Param => "parameter",
        }
    }
}

/// One declared (or reserved-word placeholder) name.
#[derive(Debug, Clone)]
pub struct IdtEntry {
    pub name: String,
    pub kind: IdtKind,
    /// Primitive code, composite code (`types::ARRAY`/`types::RECORD`), or
    /// (for `Type` entries resolving to another named type) already
    /// normalized at declaration time — see `Analyzer::resolve_type_ref`.
    pub type_: i32,
    /// `NONE_IDX`, an `ART` index, or a `BLT` index, depending on `type_`.
    pub ref_: usize,
    /// `true` for value-holding entries; `false` for by-reference
    /// parameters and constants (the "normal flag").
    pub normal: bool,
    pub level: usize,
    pub addr: i32,
    /// Index of the previous entry in the same block's chain, or
    /// `NONE_IDX`.
    pub link: usize,
    /// Formal parameter types, in order — `Proc`/`Func` entries only.
    pub param_types: Vec<i32>,
    /// Parallel to `param_types`: whether each formal is by-reference.
    pub param_is_var: Vec<bool>,
}

impl IdtEntry {
    fn placeholder(name: &str, kind: IdtKind, type_: i32, link: usize) -> Self {
        IdtEntry {
            name: name.to_string(),
            kind,
            type_,
            ref_: NONE_IDX,
            normal: true,
            level: 0,
            addr: 0,
            link,
            param_types: Vec::new(),
            param_is_var: Vec::new(),
        }
    }
}

/// The 29 reserved words this grammar's keyword catalogue recognizes as
/// `TokenKind::Keyword` (see `lexer::dfa_rules.json`'s `keywords` list) —
/// see DESIGN.md for why this implementation takes the lexer's own table
/// as authoritative instead of hard-coding a separate count.
pub const RESERVED_WORDS: &[&str] = &[
    "program", "konstanta", "tipe", "variabel", "prosedur", "fungsi", "mulai", "selesai", "jika",
    "maka", "selain-itu", "selama", "lakukan", "untuk", "ke", "turun-ke", "ulangi", "sampai",
    "kasus", "dari", "larik", "rekaman", "integer", "real", "boolean", "char", "string", "benar",
    "salah",
];

#[derive(Debug, Clone)]
pub struct Idt {
    entries: Vec<IdtEntry>,
}

impl Idt {
    /// Builds the table with its reserved null entry at index 0 and the
    /// reserved-word span preloaded right after it.
    pub fn new() -> Self {
        let mut idt = Idt {
            entries: vec![IdtEntry::placeholder("", IdtKind::Const, types::NONE, NONE_IDX)],
        };
        let mut last = NONE_IDX;
        for word in RESERVED_WORDS {
            let (kind, type_) = if *word == "string" {
                (IdtKind::Type, types::STRING)
            } else {
                (IdtKind::Const, types::NONE)
            };
            let entry = IdtEntry::placeholder(word, kind, type_, last);
            idt.entries.push(entry);
            last = idt.entries.len() - 1;
        }
        idt
    }

    /// Index one past the last reserved word — `K` in the table layout's
    /// notation.
    pub fn reserved_span_end(&self) -> usize {
        RESERVED_WORDS.len()
    }

    pub fn is_reserved(&self, idx: usize) -> bool {
        idx != NONE_IDX && idx <= self.reserved_span_end()
    }

    pub fn get(&self, idx: usize) -> &IdtEntry {
        &self.entries[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut IdtEntry {
        &mut self.entries[idx]
    }

    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Appends a new entry, returning its index. Callers are responsible
    /// for the duplicate/reserved-word checks in `Analyzer::enter`; this
    /// only performs the append-and-link step.
    pub fn push(&mut self, entry: IdtEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Idt {
    fn default() -> Self {
        Idt::new()
    }
}
