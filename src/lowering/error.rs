use std::error::Error;
use std::fmt::{self, Display};

/// Lowering assumes its input is a syntactically valid CST (the parser
/// already enforced the grammar), so these are all failures in the literal
/// payload of a token rather than in its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LowerError {
    InvalidNumberLiteral { lexeme: String },
    InvalidCharLiteral { lexeme: String },
    /// A `konstanta` item whose value isn't a literal (e.g. a variable
    /// reference or field access) — syntactically legal under `Value`'s
    /// grammar, but not something a constant can hold.
    NonLiteralConstant { name: String },
}

impl Display for LowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowerError::InvalidNumberLiteral { lexeme } => {
                write!(f, "invalid number literal {:?}", lexeme)
            }
            LowerError::InvalidCharLiteral { lexeme } => {
                write!(f, "invalid char literal {:?}", lexeme)
            }
            LowerError::NonLiteralConstant { name } => {
                write!(f, "constant '{}' is not a literal value", name)
            }
        }
    }
}

impl Error for LowerError {}
