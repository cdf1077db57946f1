//! The top-level container produced by a full parse.

use std::fmt::{self, Display};

use super::Statement;

/// A whole parsed program: an ordered, top-level `Block` with no enclosing
/// braces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
