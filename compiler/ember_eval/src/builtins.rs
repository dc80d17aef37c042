//! Builtin functions.
//!
//! Builtins are looked up by name after the environment chain, so a user
//! binding of the same name shadows them.

use std::rc::Rc;

use crate::errors::{builtin_arg_count, builtin_expected_array, builtin_unsupported_arg};
use crate::print_handler::PrintHandlerImpl;
use crate::value::{Builtin, Value};

/// All builtins, in lookup order.
pub const BUILTINS: &[Builtin] = &[
    Builtin { name: "len", func: len },
    Builtin { name: "first", func: first },
    Builtin { name: "last", func: last },
    Builtin { name: "rest", func: rest },
    Builtin { name: "push", func: push },
    Builtin { name: "puts", func: puts },
];

/// Find a builtin by name.
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|b| b.name == name).copied()
}

fn expect_args(args: &[Value], want: usize) -> Result<(), String> {
    if args.len() == want {
        Ok(())
    } else {
        Err(builtin_arg_count(args.len(), want))
    }
}

fn length(n: usize) -> Value {
    Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

/// `len(s)`: byte length of a string, or element count of an array.
fn len(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, String> {
    expect_args(args, 1)?;
    match &args[0] {
        Value::String(s) => Ok(length(s.len())),
        Value::Array(elements) => Ok(length(elements.len())),
        other => Err(builtin_unsupported_arg("len", other)),
    }
}

/// `first(a)`: first element, or `null` when empty.
fn first(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, String> {
    expect_args(args, 1)?;
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(builtin_expected_array("first", other)),
    }
}

/// `last(a)`: last element, or `null` when empty.
fn last(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, String> {
    expect_args(args, 1)?;
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(builtin_expected_array("last", other)),
    }
}

/// `rest(a)`: a new array without the first element, or `null` when empty.
fn rest(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, String> {
    expect_args(args, 1)?;
    match &args[0] {
        Value::Array(elements) => Ok(match elements.split_first() {
            Some((_, tail)) => Value::Array(Rc::new(tail.to_vec())),
            None => Value::Null,
        }),
        other => Err(builtin_expected_array("rest", other)),
    }
}

/// `push(a, v)`: a new array with `v` appended. `a` is unchanged.
fn push(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, String> {
    expect_args(args, 2)?;
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(args[1].clone());
            Ok(Value::Array(Rc::new(extended)))
        }
        other => Err(builtin_expected_array("push", other)),
    }
}

/// `puts(...)`: print each argument on its own line.
fn puts(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, String> {
    for arg in args {
        out.println(&arg.to_string());
    }
    Ok(Value::Null)
}
