//! Monkey — a small dynamically-typed expression-oriented language.
//!
//! The pipeline is, leaves first: [`token`] → [`lexer`] → [`ast`] →
//! [`parser`] → [`object`] (the value model) → [`evaluator`], with
//! [`builtins`] plugged into identifier resolution as the fallback for
//! names the environment chain doesn't bind.

pub mod ast;
pub mod builtins;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;

use object::{Environment, Object};

/// Lexes, parses and evaluates `source` against a fresh top-level
/// environment in one shot. Returns either the evaluated result or the
/// parser's error list — the two error domains this language exposes.
pub fn run(source: &str) -> Result<Object, Vec<String>> {
    let mut parser = parser::Parser::new(lexer::Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(parser.errors().to_vec());
    }

    Ok(evaluator::eval_program(&program, &Environment::new()))
}
