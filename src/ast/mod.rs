//! Abstract syntax tree.
//!
//! Every node category is a sealed enum matched exhaustively by the parser
//! (which constructs it) and the evaluator (which walks it) — there is no
//! `dyn Node` / downcast polymorphism anywhere in this tree.

pub mod expressions;
pub mod literals;
pub mod program;
pub mod statement;

pub use expressions::{CallExpression, IfExpression, IndexExpression, InfixExpression, PrefixExpression};
pub use literals::{
    ArrayLiteral, BooleanLiteral, FunctionLiteral, HashLiteral, Identifier, IntegerLiteral, StringLiteral,
};
pub use program::Program;
pub use statement::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement};

use std::fmt::{self, Display};

/// Any value-producing construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    ArrayLiteral(ArrayLiteral),
    HashLiteral(HashLiteral),
    FunctionLiteral(FunctionLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Call(CallExpression),
    Index(IndexExpression),
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(node) => write!(f, "{node}"),
            Expression::IntegerLiteral(node) => write!(f, "{node}"),
            Expression::StringLiteral(node) => write!(f, "{node}"),
            Expression::BooleanLiteral(node) => write!(f, "{node}"),
            Expression::ArrayLiteral(node) => write!(f, "{node}"),
            Expression::HashLiteral(node) => write!(f, "{node}"),
            Expression::FunctionLiteral(node) => write!(f, "{node}"),
            Expression::Prefix(node) => write!(f, "{node}"),
            Expression::Infix(node) => write!(f, "{node}"),
            Expression::If(node) => write!(f, "{node}"),
            Expression::Call(node) => write!(f, "{node}"),
            Expression::Index(node) => write!(f, "{node}"),
        }
    }
}

/// Any statement-level construct — action, not value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(node) => write!(f, "{node}"),
            Statement::Return(node) => write!(f, "{node}"),
            Statement::Expression(node) => write!(f, "{node}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn let_statement_prints_canonical_form() {
        let stmt = Statement::Let(LetStatement {
            name: Identifier {
                value: "myVar".into(),
            },
            value: Expression::Identifier(Identifier {
                value: "anotherVar".into(),
            }),
        });

        assert_eq!(stmt.to_string(), "let myVar = anotherVar;");
    }
}
