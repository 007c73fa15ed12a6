//! Turns Indonesian-keyword Pascal source text into a [`Token`] stream.
//!
//! A DFA walked character by character with maximal-munch semantics, plus
//! a handful of special cases layered on top of the table (brace comments,
//! the two hyphenated keywords, canonicalizing identifier-shaped lexemes
//! into keywords and operator tokens).

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Display};

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::token::{Token, TokenKind};

const DFA_JSON: &str = include_str!("dfa_rules.json");

#[derive(Debug, Deserialize)]
struct DfaTable {
    start_state: String,
    final_states: HashMap<String, String>,
    transitions: HashMap<String, HashMap<String, String>>,
    keywords: Vec<String>,
    logical_operators: Vec<String>,
    arithmetic_keywords: Vec<String>,
}

static DFA: Lazy<DfaTable> =
    Lazy::new(|| serde_json::from_str(DFA_JSON).expect("dfa_rules.json must be valid"));

/// Errors a lexer phase can raise. Single-shot: the first bad character or
/// malformed pre-tokenized line stops the run, matching the rest of the
/// pipeline's single-shot reporting philosophy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    UnrecognizedChar { index: usize, ch: char },
    MalformedTokenLine { line_no: usize, text: String },
    UnknownTokenKind { line_no: usize, name: String },
}

impl Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedChar { index, ch } => {
                write!(f, "unrecognized character {:?} at offset {}", ch, index)
            }
            LexError::MalformedTokenLine { line_no, text } => {
                write!(f, "malformed token on line {}: {:?}", line_no, text)
            }
            LexError::UnknownTokenKind { line_no, name } => {
                write!(f, "unknown token kind {:?} on line {}", name, line_no)
            }
        }
    }
}

impl Error for LexError {}

fn classify_char(c: char) -> &'static str {
    if c.is_alphabetic() || c == '_' {
        "letter"
    } else if c.is_ascii_digit() {
        "digit"
    } else if c.is_whitespace() {
        "space"
    } else {
        "other"
    }
}

fn in_comment_state(state: &str) -> bool {
    state.starts_with("S_COMMENT")
}

fn step(state: &str, c: char, transitions: &HashMap<String, HashMap<String, String>>) -> Option<String> {
    let table = transitions.get(state)?;
    let exact = c.to_string();
    if let Some(next) = table.get(&exact) {
        return Some(next.clone());
    }
    let class = classify_char(c);
    if class != "other" {
        if let Some(next) = table.get(class) {
            return Some(next.clone());
        }
    }
    for (key, next) in table {
        if let Some(forbidden) = key.strip_prefix("any_not_") {
            if exact != forbidden {
                return Some(next.clone());
            }
        }
    }
    None
}

fn finalize_identifier(lexeme: &str, dfa: &DfaTable) -> TokenKind {
    let lower = lexeme.to_lowercase();
    if dfa.keywords.iter().any(|k| k == &lower) {
        TokenKind::Keyword
    } else if dfa.logical_operators.iter().any(|k| k == &lower) {
        TokenKind::LogicalOperator
    } else if dfa.arithmetic_keywords.iter().any(|k| k == &lower) {
        TokenKind::MultiplicativeOperator
    } else {
        TokenKind::Identifier
    }
}

/// The two keyword lexemes that contain a literal hyphen. The DFA's `ident`
/// state never crosses a `-` (that would also swallow ordinary subtractions
/// like `x-y`), so these are glued back together as a post-pass once the
/// plain identifier half has been recognized.
const HYPHENATED_SUFFIXES: &[(&str, &str)] = &[("selain", "-itu"), ("turun", "-ke")];

/// Tokenizes Paskal source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = source.chars().collect();
    let n = chars.len();
    let dfa = &*DFA;

    let mut tokens = Vec::new();
    let mut state = dfa.start_state.clone();
    let mut current = String::new();
    let mut i = 0usize;

    while i < n {
        let c = chars[i];
        if state == dfa.start_state && c.is_whitespace() {
            i += 1;
            continue;
        }
        match step(&state, c, &dfa.transitions) {
            Some(next) => {
                if in_comment_state(&state) || in_comment_state(&next) {
                    state = next;
                    i += 1;
                    continue;
                }
                current.push(c);
                state = next;
                i += 1;
            }
            None => {
                if let Some(kind_name) = dfa.final_states.get(&state) {
                    push_finalized(&mut tokens, &mut current, kind_name, dfa, &chars, &mut i);
                    state = dfa.start_state.clone();
                } else {
                    return Err(LexError::UnrecognizedChar { index: i, ch: c });
                }
            }
        }
    }

    if !current.is_empty() {
        if let Some(kind_name) = dfa.final_states.get(&state) {
            push_finalized(&mut tokens, &mut current, kind_name, dfa, &chars, &mut i);
        }
    }

    Ok(tokens)
}

fn push_finalized(
    tokens: &mut Vec<Token>,
    current: &mut String,
    kind_name: &str,
    dfa: &DfaTable,
    chars: &[char],
    i: &mut usize,
) {
    let lexeme = std::mem::take(current);
    let kind = if kind_name == "IDENTIFIER" {
        finalize_identifier(&lexeme, dfa)
    } else {
        TokenKind::from_name(kind_name).expect("dfa_rules.json final state names must be known kinds")
    };

    for (head, suffix) in HYPHENATED_SUFFIXES {
        if lexeme.eq_ignore_ascii_case(head) {
            let rest: String = chars[*i..].iter().take(suffix.len()).collect();
            if rest.eq_ignore_ascii_case(suffix) {
                *i += suffix.len();
                tokens.push(Token::new(TokenKind::Keyword, format!("{lexeme}{suffix}")));
                return;
            }
        }
    }

    tokens.push(Token::new(kind, lexeme));
}

/// Reads a pre-tokenized fixture: one `KIND(lexeme)` per line, as written by
/// a prior `tokenize` + dump pass.
pub fn read_pretokenized(text: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let open = line.find('(').ok_or_else(|| LexError::MalformedTokenLine {
            line_no: line_no + 1,
            text: line.to_string(),
        })?;
        if !line.ends_with(')') {
            return Err(LexError::MalformedTokenLine {
                line_no: line_no + 1,
                text: line.to_string(),
            });
        }
        let kind_name = &line[..open];
        let lexeme = &line[open + 1..line.len() - 1];
        let kind = TokenKind::from_name(kind_name).ok_or_else(|| LexError::UnknownTokenKind {
            line_no: line_no + 1,
            name: kind_name.to_string(),
        })?;
        tokens.push(Token::new(kind, lexeme));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_keywords_and_identifiers() {
        let tokens = tokenize("program contoh").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Keyword, "program"),
                Token::new(TokenKind::Identifier, "contoh"),
            ]
        );
    }

    #[test]
    fn splits_real_literal_into_three_tokens() {
        let tokens = tokenize("3.14").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number, "3"),
                Token::new(TokenKind::Dot, "."),
                Token::new(TokenKind::Number, "14"),
            ]
        );
    }

    #[test]
    fn distinguishes_range_operator_from_two_dots() {
        let tokens = tokenize("1..10").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number, "1"),
                Token::new(TokenKind::RangeOperator, ".."),
                Token::new(TokenKind::Number, "10"),
            ]
        );
    }

    #[test]
    fn recognizes_hyphenated_keywords() {
        let tokens = tokenize("selain-itu turun-ke").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Keyword, "selain-itu"),
                Token::new(TokenKind::Keyword, "turun-ke"),
            ]
        );
    }

    #[test]
    fn classifies_logical_and_arithmetic_keywords() {
        let tokens = tokenize("a dan b bagi c").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::LogicalOperator);
        assert_eq!(tokens[3].kind, TokenKind::MultiplicativeOperator);
    }

    #[test]
    fn skips_brace_comments() {
        let tokens = tokenize("a { ini komentar } b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "a"),
                Token::new(TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn recognizes_relational_and_assign_operators() {
        let tokens = tokenize(":= <= >= <> < > =").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::AssignOperator,
                TokenKind::RelationalOperator,
                TokenKind::RelationalOperator,
                TokenKind::RelationalOperator,
                TokenKind::RelationalOperator,
                TokenKind::RelationalOperator,
                TokenKind::RelationalOperator,
            ]
        );
    }

    #[test]
    fn rejects_unrecognized_characters() {
        let err = tokenize("a @ b").unwrap_err();
        assert_eq!(err, LexError::UnrecognizedChar { index: 2, ch: '@' });
    }

    #[test]
    fn reads_pretokenized_fixtures() {
        let tokens = read_pretokenized("KEYWORD(program)\nIDENTIFIER(contoh)\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Keyword, "program"),
                Token::new(TokenKind::Identifier, "contoh"),
            ]
        );
    }

    #[test]
    fn string_and_char_literals_keep_delimiters() {
        let tokens = tokenize("'a' \"hi\"").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::CharLiteral, "'a'"),
                Token::new(TokenKind::StringLiteral, "\"hi\""),
            ]
        );
    }
}
