//! Tabular rendering of the three symbol tables, for diagnostics and the
//! CLI's `--dump-tables` flag. Not used by the analyzer itself.

use std::fmt::{self, Display};

use super::analyzer::Analyzer;
use super::idt::NONE_IDX;
use super::types;

/// Wraps an [`Analyzer`] so its tables can be printed with `{}`.
pub struct TableDump<'a>(pub &'a Analyzer);

impl Display for TableDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analyzer = self.0;

        writeln!(f, "IDT (identifier table)")?;
        writeln!(f, "{:>4}  {:<16} {:<10} {:>5} {:>5} {:>6} {:>5} {:>5} {:>5}",
            "idx", "name", "kind", "type", "ref", "normal", "lvl", "addr", "link")?;
        for idx in 0..analyzer.idt.len() {
            let e = analyzer.idt.get(idx);
            writeln!(
                f,
                "{:>4}  {:<16} {:<10} {:>5} {:>5} {:>6} {:>5} {:>5} {:>5}",
                idx,
                e.name,
                e.kind.label(),
                idt_type_label(e.type_, e.ref_),
                e.ref_,
                e.normal,
                e.level,
                e.addr,
                e.link,
            )?;
        }

        writeln!(f)?;
        writeln!(f, "BLT (block table)")?;
        writeln!(f, "{:>4}  {:>5} {:>5} {:>5} {:>5}", "idx", "last", "lpar", "psze", "vsze")?;
        for idx in 0..analyzer.blt.len() {
            let e = analyzer.blt.get(idx);
            writeln!(f, "{:>4}  {:>5} {:>5} {:>5} {:>5}", idx, e.last, e.lpar, e.psze, e.vsze)?;
        }

        if !analyzer.art.is_empty() {
            writeln!(f)?;
            writeln!(f, "ART (array table)")?;
            writeln!(
                f,
                "{:>4}  {:>6} {:>6} {:>5} {:>5} {:>5} {:>6} {:>5} {:>5}",
                "idx", "inxtyp", "eltyp", "elref", "low", "high", "elsize", "size", "cbase"
            )?;
            for idx in 0..analyzer.art.len() {
                let e = analyzer.art.get(idx);
                writeln!(
                    f,
                    "{:>4}  {:>6} {:>6} {:>5} {:>5} {:>5} {:>6} {:>5} {:>5}",
                    idx,
                    type_label(e.inx_typ),
                    type_label(e.el_typ),
                    e.el_ref,
                    e.low,
                    e.high,
                    e.el_size,
                    e.size,
                    e.char_base,
                )?;
            }
        }

        Ok(())
    }
}

fn type_label(code: i32) -> &'static str {
    if types::is_primitive(code) {
        types::primitive_name(code)
    } else if code == types::RECORD {
        "record"
    } else {
        "?"
    }
}

/// `IDT`/`VAR` entries reuse `types::STRING`'s code for `types::ARRAY`; a
/// non-null `ref` is what tells the two apart here.
fn idt_type_label(code: i32, ref_: usize) -> &'static str {
    if code == types::ARRAY && ref_ != NONE_IDX {
        "array"
    } else {
        type_label(code)
    }
}
