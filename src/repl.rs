//! The interactive read-eval-print loop.
//!
//! A thin driver: it owns no language logic of its own, only the read/print
//! shell around `lexer` → `parser` → `evaluator`. The environment is created
//! once and kept alive for the whole session, so `let` bindings and function
//! definitions from one line are visible on the next.

use std::io::{self, Write};

use monkey_lang::lexer::Lexer;
use monkey_lang::object::{Environment, Object};
use monkey_lang::parser::Parser;

const PROMPT: &str = ">> ";
const GREETING: &str = "Hello! This is the Monkey programming language!";

pub fn start() {
    println!("{GREETING}");

    let env = Environment::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        io::stdout().flush().ok();

        line.clear();
        let bytes_read = match stdin.read_line(&mut line) {
            Ok(bytes_read) => bytes_read,
            Err(_) => break,
        };
        if bytes_read == 0 {
            break; // EOF
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for message in parser.errors() {
                println!("\t{message}");
            }
            continue;
        }

        let result = monkey_lang::evaluator::eval_program(&program, &env);
        match result {
            Object::Error(message) => println!("ERROR: {message}"),
            other => println!("{other}"),
        }
    }
}
