use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as CParser;
use log::{error, info};

use paskal::lexer::{read_pretokenized, tokenize};
use paskal::lowering::lower_program;
use paskal::parser::{parse_program, ParseFailure};
use paskal::semantic::{analyze, TableDump};
use paskal::token::Token;

#[derive(CParser, Debug)]
#[command(author, version, about = "Paskal front end: lexer, parser, AST lowering and semantic analysis")]
struct Cli {
    /// Source file: `.pas` (raw source) or `.txt` (pre-tokenized `KIND(lexeme)` lines).
    file: PathBuf,

    /// Stop after lexical analysis; print the token count and exit.
    #[arg(long)]
    lexer_only: bool,

    /// Print the concrete syntax tree.
    #[arg(long)]
    dump_cst: bool,

    /// Print the lowered AST.
    #[arg(long)]
    dump_ast: bool,

    /// Print the IDT/BLT/ART symbol tables.
    #[arg(long)]
    dump_tables: bool,

    /// Increase logging verbosity (`-v` for info, `-vv` for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        _ => log::Level::Debug,
    };
    simple_logger::init_with_level(level).expect("logger installs exactly once");

    let source = match std::fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            error!("could not read '{}': {e}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    let is_pretokenized = args.file.extension().map_or(false, |ext| ext == "txt");

    let tokens = if is_pretokenized {
        read_pretokenized(&source)
    } else {
        tokenize(&source)
    };

    let tokens = match tokens {
        Ok(t) => t,
        Err(e) => {
            error!("lexical error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("tokenized {} tokens from '{}'", tokens.len(), args.file.display());

    if args.lexer_only {
        println!("{} tokens", tokens.len());
        return ExitCode::SUCCESS;
    }

    let cst = match parse_program(&tokens) {
        Ok(cst) => cst,
        Err(failure) => {
            print_parse_failure(&failure, &tokens);
            return ExitCode::FAILURE;
        }
    };

    if args.dump_cst {
        println!("{cst}");
    }

    let program = match lower_program(&cst) {
        Ok(program) => program,
        Err(e) => {
            error!("lowering error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.dump_ast {
        println!("{program:#?}");
    }

    let (analyzer, result) = analyze(&program);

    if args.dump_tables {
        println!("{}", TableDump(&analyzer));
    }

    match result {
        Ok(()) => {
            println!("semantic analysis passed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("semantic error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders a syntax error the way a human diagnosing a failed parse wants to
/// see it: where in the token stream it happened, a window of surrounding
/// tokens with the offending one marked, and what the parser expected there.
fn print_parse_failure(failure: &ParseFailure, tokens: &[Token]) {
    match failure {
        ParseFailure::NoMatch { context } => {
            eprintln!("syntax error");
            let Some(idx) = context.max_index() else {
                eprintln!("parser never started");
                return;
            };

            let start = idx.saturating_sub(4);
            let end = (idx + 4).min(tokens.len());

            let prefix_end = idx.min(tokens.len());
            let prefix: Vec<String> = tokens[start..prefix_end].iter().map(|t| t.lexeme.clone()).collect();
            let error_word = tokens.get(idx).map(|t| t.lexeme.clone()).unwrap_or_else(|| "EOF".to_string());
            let suffix_start = (idx + 1).min(tokens.len());
            let suffix: Vec<String> = tokens[suffix_start..end].iter().map(|t| t.lexeme.clone()).collect();

            let start_dots = if start > 0 { "... " } else { "" };
            let end_dots = if end < tokens.len() { " ..." } else { "" };

            let prefix_str = prefix.join(" ");
            let suffix_str = suffix.join(" ");
            let context_line = format!("{start_dots}{prefix_str} {error_word} {suffix_str}{end_dots}");

            let mut caret_offset = start_dots.chars().count() + prefix_str.chars().count() + 1;
            if prefix_str.is_empty() {
                caret_offset -= 1;
            }

            eprintln!("Error Location (Index): {idx}");
            eprintln!("Context: {context_line}");
            eprintln!("{}^ ERROR HERE", " ".repeat("Context: ".len() + caret_offset));
            eprintln!("Expected : {}", context.expected().expect("reported alongside max_index"));
            eprintln!("Found    : {}", context.found().expect("reported alongside max_index"));
            eprintln!("Rule     : {}", context.rule_name().expect("reported alongside max_index"));
        }
        ParseFailure::TrailingTokens { consumed, total } => {
            eprintln!("parsing stopped at token {consumed} of {total}: trailing input was not consumed");
            if let Some(tok) = tokens.get(*consumed) {
                eprintln!("next unexpected token: {tok}");
            }
        }
    }
}
