//! The tree-walking evaluator: one recursive function per AST category,
//! matched exhaustively over the sealed `Expression`/`Statement` enums.
//!
//! Error propagation is explicit, not exceptional: whenever a sub-evaluation
//! yields `Object::Error`, the caller returns it immediately instead of a
//! host `Result`/`?`. Errors are ordinary values that short-circuit sibling
//! evaluation, keeping `Object` the single return type throughout.

use crate::ast::{
    BlockStatement, Expression, IfExpression, Program, Statement,
};
use crate::builtins;
use crate::object::{Environment, FunctionObject, Object};
use std::rc::Rc;

/// Evaluates a whole program in `env`. A `ReturnValue` at top level is
/// unwrapped here — it must never escape past the program boundary (spec
/// §3's invariant).
pub fn eval_program(program: &Program, env: &Environment) -> Object {
    let mut result = Object::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a `{ ... }` block. Unlike `eval_program`, a `ReturnValue` is
/// *not* unwrapped here — it must keep propagating as a sentinel so that an
/// enclosing function call (possibly several blocks up, through nested
/// `if`s) can unwrap it instead.
fn eval_block(block: &BlockStatement, env: &Environment) -> Object {
    let mut result = Object::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Environment) -> Object {
    match statement {
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        }
        Statement::Let(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.set(stmt.name.value.clone(), value.clone());
            value
        }
    }
}

fn eval_expression(expression: &Expression, env: &Environment) -> Object {
    match expression {
        Expression::IntegerLiteral(node) => Object::Integer(node.value),
        Expression::StringLiteral(node) => Object::String(node.value.clone()),
        Expression::BooleanLiteral(node) => Object::Boolean(node.value),
        Expression::Identifier(node) => eval_identifier(&node.value, env),
        Expression::Prefix(node) => {
            let right = eval_expression(&node.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&node.operator, right)
        }
        Expression::Infix(node) => {
            let left = eval_expression(&node.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&node.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&node.operator, left, right)
        }
        Expression::If(node) => eval_if_expression(node, env),
        Expression::FunctionLiteral(node) => Object::Function(Rc::new(FunctionObject {
            parameters: node.parameters.clone(),
            body: node.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(node) => {
            let function = eval_expression(&node.function, env);
            if function.is_error() {
                return function;
            }

            let args = match eval_expressions(&node.arguments, env) {
                Ok(args) => args,
                Err(error) => return error,
            };

            apply_function(function, args)
        }
        Expression::ArrayLiteral(node) => match eval_expressions(&node.elements, env) {
            Ok(elements) => Object::Array(Rc::new(elements)),
            Err(error) => error,
        },
        Expression::HashLiteral(node) => eval_hash_literal(node, env),
        Expression::Index(node) => {
            let left = eval_expression(&node.left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(&node.index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
    }
}

fn eval_identifier(name: &str, env: &Environment) -> Object {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    Object::Error(format!("identifier not found: {name}"))
}

/// Evaluates a list of expressions left-to-right, stopping at the first
/// error. Call arguments and array-literal elements both follow this rule.
fn eval_expressions(expressions: &[Expression], env: &Environment) -> Result<Vec<Object>, Object> {
    let mut values = Vec::with_capacity(expressions.len());
    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => Object::Boolean(!right.is_truthy()),
        "-" => match right {
            Object::Integer(value) => Object::Integer(-value),
            other => Object::Error(format!("unknown operator: -{}", other.type_name())),
        },
        other => Object::Error(format!(
            "unknown operator: {other}{}",
            right.type_name()
        )),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(lhs), Object::Integer(rhs)) => {
            eval_integer_infix_expression(operator, *lhs, *rhs)
        }
        (Object::String(lhs), Object::String(rhs)) => {
            eval_string_infix_expression(operator, lhs, rhs)
        }
        (Object::Boolean(lhs), Object::Boolean(rhs)) => match operator {
            "==" => Object::Boolean(lhs == rhs),
            "!=" => Object::Boolean(lhs != rhs),
            other => Object::Error(format!(
                "unknown operator: BOOLEAN {other} BOOLEAN"
            )),
        },
        _ if left.type_name() != right.type_name() => Object::Error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => Object::Error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

/// Signed 64-bit two's-complement arithmetic; overflow wraps/panics exactly
/// as Rust's native `i64` operators do in release/debug builds respectively.
fn eval_integer_infix_expression(operator: &str, lhs: i64, rhs: i64) -> Object {
    match operator {
        "+" => Object::Integer(lhs + rhs),
        "-" => Object::Integer(lhs - rhs),
        "*" => Object::Integer(lhs * rhs),
        "/" => Object::Integer(lhs / rhs),
        "<" => Object::Boolean(lhs < rhs),
        ">" => Object::Boolean(lhs > rhs),
        "==" => Object::Boolean(lhs == rhs),
        "!=" => Object::Boolean(lhs != rhs),
        other => Object::Error(format!("unknown operator: INTEGER {other} INTEGER")),
    }
}

fn eval_string_infix_expression(operator: &str, lhs: &str, rhs: &str) -> Object {
    match operator {
        "+" => Object::String(format!("{lhs}{rhs}")),
        other => Object::Error(format!("unknown operator: STRING {other} STRING")),
    }
}

fn eval_if_expression(node: &IfExpression, env: &Environment) -> Object {
    let condition = eval_expression(&node.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(&node.consequence, env)
    } else if let Some(alternative) = &node.alternative {
        eval_block(alternative, env)
    } else {
        Object::Null
    }
}

fn eval_hash_literal(node: &crate::ast::HashLiteral, env: &Environment) -> Object {
    let mut pairs = Vec::with_capacity(node.pairs.len());

    for (key_expr, value_expr) in &node.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        if key.hash_key().is_none() {
            return Object::Error(format!("unusable as hash key: {}", key.type_name()));
        }

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        // Duplicate keys: last write wins. A linear scan is fine here —
        // hash literals are small and this keeps `inspect`'s iteration
        // order the same as source order, which the round-trip tests rely
        // on.
        if let Some(existing) = pairs
            .iter_mut()
            .find(|(k, _): &&mut (Object, Object)| k.hash_key() == key.hash_key())
        {
            *existing = (key, value);
        } else {
            pairs.push((key, value));
        }
    }

    Object::Hash(Rc::new(pairs))
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (&left, &index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Object::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        (Object::Hash(pairs), _) => {
            let Some(key) = index.hash_key() else {
                return Object::Error(format!("unusable as hash key: {}", index.type_name()));
            };
            pairs
                .iter()
                .find(|(k, _)| k.hash_key() == Some(key))
                .map(|(_, v)| v.clone())
                .unwrap_or(Object::Null)
        }
        _ => Object::Error(format!(
            "index operator not supported: {}",
            left.type_name()
        )),
    }
}

/// Applies a callee to already-evaluated arguments.
///
/// For a user-defined `Function`, parameters are bound positionally via
/// `zip`, which stops at the shorter side: extra arguments are silently
/// dropped, missing ones leave that parameter unbound in the new frame.
/// No arity check is added. For a `Builtin`, the native function runs
/// directly on the argument slice.
fn apply_function(function: Object, args: Vec<Object>) -> Object {
    match function {
        Object::Function(function) => {
            let call_env = function.env.enclosed();
            for (param, arg) in function.parameters.iter().zip(args) {
                call_env.set(param.value.clone(), arg);
            }

            let evaluated = eval_block(&function.body, &call_env);
            unwrap_return_value(evaluated)
        }
        Object::Builtin(native) => native(&args),
        other => Object::Error(format!("not a function: {}", other.type_name())),
    }
}

fn unwrap_return_value(object: Object) -> Object {
    match object {
        Object::ReturnValue(value) => *value,
        other => other,
    }
}
