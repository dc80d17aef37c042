//! Tests for the builtin functions, called directly.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use crate::builtins::{lookup, BUILTINS};
use crate::print_handler::{BufferPrintHandler, PrintHandlerImpl};
use crate::Value;

fn call(name: &str, args: &[Value]) -> Result<Value, String> {
    let builtin = lookup(name).unwrap();
    (builtin.func)(args, &PrintHandlerImpl::Silent)
}

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::Integer).collect())
}

#[test]
fn every_builtin_is_found_by_name() {
    for builtin in BUILTINS {
        assert_eq!(lookup(builtin.name).map(|b| b.name), Some(builtin.name));
    }
    assert!(lookup("print").is_none());
}

#[test]
fn len() {
    assert_eq!(call("len", &[Value::from("")]), Ok(Value::Integer(0)));
    assert_eq!(call("len", &[Value::from("four")]), Ok(Value::Integer(4)));
    assert_eq!(call("len", &[ints(&[1, 2, 3])]), Ok(Value::Integer(3)));
    assert_eq!(
        call("len", &[Value::Integer(1)]),
        Err("argument to `len` not supported, got INTEGER".to_string())
    );
    assert_eq!(
        call("len", &[Value::from("one"), Value::from("two")]),
        Err("wrong number of arguments. got=2, want=1".to_string())
    );
}

#[test]
fn first_last_rest() {
    let array = ints(&[1, 2, 3]);
    assert_eq!(call("first", &[array.clone()]), Ok(Value::Integer(1)));
    assert_eq!(call("last", &[array.clone()]), Ok(Value::Integer(3)));
    assert_eq!(call("rest", &[array]), Ok(ints(&[2, 3])));
    assert_eq!(call("rest", &[ints(&[1])]), Ok(ints(&[])));
}

#[test]
fn empty_array_gives_null() {
    for name in ["first", "last", "rest"] {
        assert_eq!(call(name, &[ints(&[])]), Ok(Value::Null), "{name}");
    }
}

#[test]
fn non_array_is_an_error() {
    assert_eq!(
        call("first", &[Value::Integer(1)]),
        Err("argument to `first` must be ARRAY, got INTEGER".to_string())
    );
    assert_eq!(
        call("last", &[Value::from("s")]),
        Err("argument to `last` must be ARRAY, got STRING".to_string())
    );
    assert_eq!(
        call("rest", &[Value::Null]),
        Err("argument to `rest` must be ARRAY, got NULL".to_string())
    );
    assert_eq!(
        call("push", &[Value::Integer(1), Value::Integer(1)]),
        Err("argument to `push` must be ARRAY, got INTEGER".to_string())
    );
}

#[test]
fn push_builds_a_new_array() {
    let original = ints(&[1]);
    assert_eq!(call("push", &[original.clone(), Value::Integer(2)]), Ok(ints(&[1, 2])));
    assert_eq!(original, ints(&[1]));
    assert_eq!(
        call("push", &[original]),
        Err("wrong number of arguments. got=1, want=2".to_string())
    );
}

#[test]
fn puts_writes_each_argument() {
    let out = PrintHandlerImpl::Buffer(BufferPrintHandler::new());
    let puts = lookup("puts").unwrap();
    let result = (puts.func)(&[Value::from("hello"), ints(&[1, 2])], &out);
    assert_eq!(result, Ok(Value::Null));
    assert_eq!(out.get_output(), "hello\n[1, 2]\n");
}
