//! Predictive recursive-descent parser: token stream in, concrete syntax
//! tree out. Every non-terminal tries its alternatives in order and
//! backtracks to the start index on failure, while a shared
//! [`ErrorContext`] remembers the deepest point any alternative got to
//! before giving up.

mod cst;
mod error;
mod grammar;

pub use cst::{ChildNode, NonTerminal, ParseNode};
pub use error::{ErrorContext, Found, ParseFailure};

use crate::token::Token;
use grammar::{alternatives, GrammarElement};

/// Tries to recognize `nt` starting at `start`. On success, returns the
/// built node and the index just past it; on failure, returns `None` and
/// leaves its deepest failure recorded in `ctx`.
pub fn parse(nt: NonTerminal, tokens: &[Token], start: usize, ctx: &mut ErrorContext) -> Option<(ParseNode, usize)> {
    'alt: for alt in alternatives(nt) {
        let mut idx = start;
        let mut children = Vec::with_capacity(alt.len());

        for element in &alt {
            if idx >= tokens.len() {
                if let GrammarElement::Term(kind, value) = element {
                    ctx.report(idx, error::Expectation { kind: *kind, value: *value }, Found::Eof, nt);
                }
                continue 'alt;
            }

            let current = &tokens[idx];
            match element {
                GrammarElement::Term(kind, value) => {
                    let kind_matches = current.kind == *kind;
                    let value_matches = value.map_or(true, |v| v == current.lexeme);
                    if kind_matches && value_matches {
                        children.push(ChildNode::Leaf(current.clone()));
                        idx += 1;
                    } else {
                        ctx.report(
                            idx,
                            error::Expectation { kind: *kind, value: *value },
                            Found::Token(current.clone()),
                            nt,
                        );
                        continue 'alt;
                    }
                }
                GrammarElement::Sub(sub) => match parse(*sub, tokens, idx, ctx) {
                    Some((node, next_idx)) => {
                        children.push(ChildNode::Node(node));
                        idx = next_idx;
                    }
                    None => continue 'alt,
                },
            }
        }

        return Some((ParseNode::new(nt, children), idx));
    }

    None
}

/// Parses an entire token stream as a [`NonTerminal::Program`], requiring
/// every token to be consumed (the "full consumption" rule).
pub fn parse_program(tokens: &[Token]) -> Result<ParseNode, ParseFailure> {
    let mut ctx = ErrorContext::new();
    match parse(NonTerminal::Program, tokens, 0, &mut ctx) {
        Some((node, consumed)) if consumed == tokens.len() => Ok(node),
        Some((_, consumed)) => Err(ParseFailure::TrailingTokens { consumed, total: tokens.len() }),
        None => Err(ParseFailure::NoMatch { context: ctx }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_src(src: &str) -> ParseNode {
        let tokens = tokenize(src).expect("lexing should succeed");
        parse_program(&tokens).expect("parsing should succeed")
    }

    #[test]
    fn parses_minimal_program() {
        let node = parse_src("program kosong; mulai selesai.");
        assert_eq!(node.kind, NonTerminal::Program);
    }

    #[test]
    fn parses_declarations_and_assignment() {
        parse_src(
            "program contoh; \
             konstanta phi = 3; \
             tipe vektor = larik[1..3] dari integer; \
             variabel x : integer; \
             mulai x := 1 selesai.",
        );
    }

    #[test]
    fn parses_if_while_for_case() {
        parse_src(
            "program kontrol; \
             variabel x : integer; \
             mulai \
               jika x > 0 maka x := 1 selain-itu x := 0; \
               selama x < 10 lakukan x := x + 1; \
               untuk x := 1 ke 10 lakukan x := x; \
               kasus x dari 1 : x := 1; 2 : x := 2 selesai \
             selesai.",
        );
    }

    #[test]
    fn parses_record_and_array_field_access() {
        parse_src(
            "program rekaman_contoh; \
             tipe titik = rekaman x : integer; y : integer selesai; \
             variabel p : titik; variabel arr : larik[1..5] dari integer; \
             mulai p.x := 1; arr[1] := 2 selesai.",
        );
    }

    #[test]
    fn parses_subprogram_declarations() {
        parse_src(
            "program dengan_fungsi; \
             fungsi kuadrat(variabel n : integer) : integer; \
             mulai kuadrat := n selesai; \
             mulai kuadrat(2) selesai.",
        );
    }

    #[test]
    fn reports_deepest_failure_point() {
        let tokens = tokenize("program salah; mulai x := selesai.").unwrap();
        let err = parse_program(&tokens).unwrap_err();
        match err {
            ParseFailure::NoMatch { context } => {
                assert!(context.max_index().is_some());
            }
            ParseFailure::TrailingTokens { .. } => panic!("expected NoMatch"),
        }
    }

    #[test]
    fn rejects_trailing_tokens() {
        let tokens = tokenize("program a; mulai selesai. program b; mulai selesai.").unwrap();
        let err = parse_program(&tokens).unwrap_err();
        assert!(matches!(err, ParseFailure::TrailingTokens { .. }));
    }
}
