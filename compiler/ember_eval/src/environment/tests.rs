use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_set_and_get() {
    let env = Environment::new();
    env.set("x", Value::Integer(42));
    assert_eq!(env.get("x"), Some(Value::Integer(42)));
    assert_eq!(env.get("y"), None);
}

#[test]
fn test_enclosed_falls_back_to_outer() {
    let global = Environment::new();
    global.set("x", Value::Integer(1));

    let inner = Environment::enclosed(&global);
    assert_eq!(inner.get("x"), Some(Value::Integer(1)));
    assert!(inner.local_names().is_empty());
}

#[test]
fn test_set_shadows_without_touching_outer() {
    let global = Environment::new();
    global.set("x", Value::Integer(1));

    let inner = Environment::enclosed(&global);
    inner.set("x", Value::Integer(2));

    assert_eq!(inner.get("x"), Some(Value::Integer(2)));
    assert_eq!(global.get("x"), Some(Value::Integer(1)));
}

#[test]
fn test_outer_changes_are_visible_through_shared_handle() {
    let global = Environment::new();
    let first = Environment::enclosed(&global);
    let second = Environment::enclosed(&global);

    global.set("late", Value::Boolean(true));
    assert_eq!(first.get("late"), Some(Value::Boolean(true)));
    assert_eq!(second.get("late"), Some(Value::Boolean(true)));
}

#[test]
fn test_local_names_sorted() {
    let env = Environment::new();
    env.set("b", Value::Null);
    env.set("a", Value::Null);
    assert_eq!(env.local_names(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_debug_does_not_recurse_into_values() {
    let env = Environment::new();
    env.set("self_ref", Value::Null);
    let rendered = format!("{env:?}");
    assert!(rendered.contains("self_ref"));
}
