//! Runtime value model.
//!
//! `Object` is the tree-walking evaluator's value type: a sealed enum
//! matched exhaustively instead of an interface-plus-type-switch. Booleans,
//! integers and strings need no pointer-identity games — a hand-written
//! `PartialEq` gives them plain structural equality and leaves reference
//! types (`Function`, `Builtin`, `Hash`) without a meaningful equality at
//! all.

mod environment;
mod hash_key;

pub use environment::Environment;
pub use hash_key::HashKey;

use std::fmt::{self, Display};
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};

pub type BuiltinFn = fn(&[Object]) -> Object;

#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    Array(Rc<Vec<Object>>),
    Hash(Rc<Vec<(Object, Object)>>),
    Function(Rc<FunctionObject>),
    Builtin(BuiltinFn),
    ReturnValue(Box<Object>),
    Error(String),
}

#[derive(Debug)]
pub struct FunctionObject {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Environment,
}

impl Object {
    /// The type tag used in error messages and `inspect`'s `FUNCTION`-style
    /// naming.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }

    /// Truthiness used by `if` and `!`: `null` and `false` are falsy, every
    /// other value (including `0`) is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Projects a value into a [`HashKey`], or `None` if it isn't hashable
    /// (anything but `Integer`/`Boolean`/`String`).
    pub fn hash_key(&self) -> Option<HashKey> {
        HashKey::of(self)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::String(value) => f.write_str(value),
            Object::Null => f.write_str("null"),
            Object::Array(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Object::Hash(pairs) => {
                let items: Vec<String> = pairs
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                write!(f, "{{{}}}", items.join(", "))
            }
            Object::Function(function) => {
                let params: Vec<String> =
                    function.parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), function.body)
            }
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::ReturnValue(value) => write!(f, "{value}"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspects_arrays_and_hashes() {
        let array = Object::Array(Rc::new(vec![Object::Integer(1), Object::Integer(2)]));
        assert_eq!(array.to_string(), "[1, 2]");

        let hash = Object::Hash(Rc::new(vec![(
            Object::String("name".into()),
            Object::String("Monkey".into()),
        )]));
        assert_eq!(hash.to_string(), "{name: Monkey}");
    }

    #[test]
    fn null_and_false_are_falsy_everything_else_truthy() {
        assert!(!Object::Null.is_truthy());
        assert!(!Object::Boolean(false).is_truthy());
        assert!(Object::Boolean(true).is_truthy());
        assert!(Object::Integer(0).is_truthy());
        assert!(Object::String(String::new()).is_truthy());
    }
}
