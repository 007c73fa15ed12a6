//! Primitive and composite type codes. The same small integers are reused
//! for two purposes — `ARRAY` and `STRING` both happen to be `5` — context
//! always disambiguates which reading applies.

/// A freshly declared reserved-word placeholder, or an expression not yet
/// typed.
pub const NONE: i32 = 0;
pub const INT: i32 = 1;
pub const REAL: i32 = 2;
pub const BOOL: i32 = 3;
pub const CHAR: i32 = 4;
pub const STRING: i32 = 5;

/// Composite codes, stored in the same `type` field as the primitives
/// above. `ARRAY` collides numerically with `STRING`; whether a `5` means
/// "the primitive string type" or "this entry is an array" depends on
/// which kind of entry carries it (a `TYPE`/`VAR` entry's `ref` is non-zero
/// exactly when it means `ARRAY`).
pub const ARRAY: i32 = 5;
pub const RECORD: i32 = 6;

pub fn is_numeric(t: i32) -> bool {
    t == INT || t == REAL
}

pub fn is_primitive(t: i32) -> bool {
    (NONE..=STRING).contains(&t)
}

/// Renders a primitive code for diagnostics. Composite codes are rendered
/// by the caller, which has the `ref` needed to say *which* array/record.
pub fn primitive_name(t: i32) -> &'static str {
    match t {
        NONE => "none",
        INT => "integer",
        REAL => "real",
        BOOL => "boolean",
        CHAR => "char",
        STRING => "string",
        _ => "?",
    }
}
