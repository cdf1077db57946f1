//! The fixed table of intrinsic functions available in every environment:
//! `len`, `first`, `last`, `rest`, `push`, `puts`.
//!
//! Each entry is a plain `fn(&[Object]) -> Object` — Monkey builtins never
//! capture state, so there's no need for a boxed closure. Arity and type are
//! checked inside each builtin rather than scattered across call sites.

use std::rc::Rc;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::object::{BuiltinFn, Object};

static BUILTINS: Lazy<HashMap<&'static str, BuiltinFn>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, BuiltinFn> = HashMap::new();
    table.insert("len", len);
    table.insert("first", first);
    table.insert("last", last);
    table.insert("rest", rest);
    table.insert("push", push);
    table.insert("puts", puts);
    table
});

/// Looks `name` up in the builtin table, returning an `Object::Builtin`
/// ready to be applied. Called by the evaluator only after an identifier
/// lookup in the environment chain has already missed.
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS.get(name).copied().map(Object::Builtin)
}

fn arity_error(name: &str, got: usize, want: usize) -> Object {
    log::debug!("builtin `{name}` called with wrong arity: got={got} want={want}");
    Object::Error(format!(
        "wrong number of arguments. got={got}, want={want}"
    ))
}

/// `len`'s own wording: `not supported, got <TYPE>`, no `=`.
fn unsupported_type_error(name: &str, got: &Object) -> Object {
    log::debug!("builtin `{name}` called with unsupported argument type {}", got.type_name());
    Object::Error(format!(
        "argument to `{name}` not supported, got {}",
        got.type_name()
    ))
}

/// `first`/`last`/`rest`/`push`'s wording: `must be <Expected>, got=<TYPE>`.
fn wrong_type_error(name: &str, expected: &str, got: &Object) -> Object {
    log::debug!("builtin `{name}` called with wrong argument type {}", got.type_name());
    Object::Error(format!(
        "argument to `{name}` must be {expected}, got={}",
        got.type_name()
    ))
}

fn len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return arity_error("len", args.len(), 1);
    }

    match &args[0] {
        Object::String(value) => Object::Integer(value.len() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => unsupported_type_error("len", other),
    }
}

fn first(args: &[Object]) -> Object {
    if args.len() != 1 {
        return arity_error("first", args.len(), 1);
    }

    let Object::Array(elements) = &args[0] else {
        return wrong_type_error("first", "Array", &args[0]);
    };

    elements.first().cloned().unwrap_or(Object::Null)
}

fn last(args: &[Object]) -> Object {
    if args.len() != 1 {
        return arity_error("last", args.len(), 1);
    }

    let Object::Array(elements) = &args[0] else {
        return wrong_type_error("last", "Array", &args[0]);
    };

    elements.last().cloned().unwrap_or(Object::Null)
}

fn rest(args: &[Object]) -> Object {
    if args.len() != 1 {
        return arity_error("rest", args.len(), 1);
    }

    let Object::Array(elements) = &args[0] else {
        return wrong_type_error("rest", "Array", &args[0]);
    };

    if elements.is_empty() {
        return Object::Null;
    }

    Object::Array(Rc::new(elements[1..].to_vec()))
}

fn push(args: &[Object]) -> Object {
    if args.len() != 2 {
        return arity_error("push", args.len(), 2);
    }

    let Object::Array(elements) = &args[0] else {
        return wrong_type_error("push", "Array", &args[0]);
    };

    let mut new_elements = (**elements).clone();
    new_elements.push(args[1].clone());
    Object::Array(Rc::new(new_elements))
}

fn puts(args: &[Object]) -> Object {
    for arg in args {
        println!("{arg}");
    }
    Object::Null
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_supports_strings_and_arrays() {
        assert_eq!(
            len(&[Object::String("hello".into())]),
            Object::Integer(5)
        );
        assert_eq!(
            len(&[Object::Array(Rc::new(vec![
                Object::Integer(1),
                Object::Integer(2)
            ]))]),
            Object::Integer(2)
        );
    }

    #[test]
    fn len_rejects_unsupported_type() {
        assert_eq!(
            len(&[Object::Integer(1)]),
            Object::Error("argument to `len` not supported, got INTEGER".into())
        );
    }

    #[test]
    fn rest_and_push_do_not_mutate_the_source_array() {
        let original = Rc::new(vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)]);
        let array = Object::Array(original.clone());

        let _ = rest(&[array.clone()]);
        let _ = push(&[array.clone(), Object::Integer(4)]);

        assert_eq!(original.len(), 3);
    }

    #[test]
    fn first_and_last_of_empty_array_are_null() {
        let empty = Object::Array(Rc::new(vec![]));
        assert_eq!(first(&[empty.clone()]), Object::Null);
        assert_eq!(last(&[empty]), Object::Null);
    }

    #[test]
    fn lookup_misses_on_unknown_name() {
        assert!(lookup("not_a_builtin").is_none());
    }
}
