//! The array table `ART`: one entry per array type materialization — every
//! `larik [..] dari ..` a program writes gets its own entry, even two
//! textually identical ones.

use super::idt::NONE_IDX;

#[derive(Debug, Clone, Copy)]
pub struct ArtEntry {
    /// Index type: `types::INT` or `types::CHAR`.
    pub inx_typ: i32,
    /// Element primitive code, or composite code (`ARRAY`/`RECORD`).
    pub el_typ: i32,
    /// `NONE_IDX`, or an `ART` index (nested array), or an `IDT`/`BLT`
    /// index (element is a named type).
    pub el_ref: usize,
    pub low: i32,
    pub high: i32,
    pub el_size: i32,
    /// `(high - low + 1) * el_size`.
    pub size: i32,
    /// Original low-bound ordinal before char-index normalization (`low`
    /// becomes `1`, `high` becomes a span) — `0` when `inx_typ` is `INT`,
    /// where `low` already carries the real bound. Needed to map a char
    /// index back onto the normalized `low..high` span when
    /// bounds-checking.
    pub char_base: i32,
}

#[derive(Debug, Clone, Default)]
pub struct Art {
    entries: Vec<ArtEntry>,
}

impl Art {
    pub fn new() -> Self {
        Art { entries: Vec::new() }
    }

    /// Appends an entry and returns its 1-based index — `0` stays reserved
    /// as "no array" so `IDT`/field `ref` fields can use it as a null
    /// sentinel alongside real `ART` indices.
    pub fn push(&mut self, entry: ArtEntry) -> usize {
        if self.entries.is_empty() {
            self.entries.push(ArtEntry {
                inx_typ: 0,
                el_typ: 0,
                el_ref: NONE_IDX,
                low: 0,
                high: 0,
                el_size: 0,
                size: 0,
                char_base: 0,
            });
        }
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn get(&self, idx: usize) -> &ArtEntry {
        &self.entries[idx]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
