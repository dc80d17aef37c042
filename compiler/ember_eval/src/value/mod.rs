//! Runtime values.
//!
//! Heap payloads (strings, arrays, hashes, functions) sit behind `Rc`, so
//! cloning a value is cheap and the language's identity comparison for
//! compound values is pointer equality.

use std::fmt;
use std::rc::Rc;

use ember_ir::FunctionLiteral;
use rustc_hash::FxHashMap;

use crate::print_handler::PrintHandlerImpl;
use crate::Environment;

/// Native implementation of a builtin. `Err` carries a language error message.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Result<Value, String>;

/// A value produced by evaluation.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Array(Rc<Vec<Value>>),
    Hash(Rc<HashValue>),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
    Null,
    /// A `return` travelling out of a block, as seen at the public boundary.
    ReturnSignal(Box<Value>),
    /// A runtime language error.
    Error(String),
}

impl Value {
    #[inline]
    pub fn string(s: &str) -> Self {
        Value::String(Rc::from(s))
    }

    #[inline]
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(elements))
    }

    /// Type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Null => "NULL",
            Value::ReturnSignal(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
        }
    }

    /// Only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// Return signals and errors are control data, never operands.
    #[inline]
    pub fn is_signal(&self) -> bool {
        matches!(self, Value::ReturnSignal(_) | Value::Error(_))
    }

    /// Key for use in a hash, if this kind of value can be one.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey::Integer(*n)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::String(s) => Some(HashKey::String(Rc::clone(s))),
            _ => None,
        }
    }

    /// The language's `==`: by value for scalars and strings, by identity
    /// for everything else. Different kinds are never equal.
    pub fn language_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

/// Structural equality, for host code and tests. Functions compare by
/// identity since their environments can be cyclic.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Null, Value::Null) => true,
            (Value::ReturnSignal(a), Value::ReturnSignal(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Hash(hash) => hash.fmt(f),
            Value::Function(function) => function.literal.fmt(f),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Null => f.write_str("null"),
            Value::ReturnSignal(inner) => inner.fmt(f),
            Value::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Array(elements) => f.debug_tuple("Array").field(elements).finish(),
            Value::Hash(hash) => f.debug_tuple("Hash").field(&hash.entries).finish(),
            Value::Function(function) => write!(f, "Function({})", function.literal),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name),
            Value::Null => f.write_str("Null"),
            Value::ReturnSignal(inner) => f.debug_tuple("ReturnSignal").field(inner).finish(),
            Value::Error(message) => write!(f, "Error({message:?})"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// The hashable subset of values.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
}

/// A hash: keys map to `(key, value)` entries kept in insertion order.
#[derive(Clone, Default)]
pub struct HashValue {
    index: FxHashMap<HashKey, usize>,
    entries: Vec<(Value, Value)>,
}

impl HashValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced entry keeps its original position.
    pub fn insert(&mut self, key: HashKey, key_value: Value, value: Value) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot] = (key_value, value);
        } else {
            self.index.insert(key, self.entries.len());
            self.entries.push((key_value, value));
        }
    }

    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

/// Order-insensitive: equal when both hold the same keys with equal values.
impl PartialEq for HashValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .index
                .iter()
                .all(|(key, &slot)| other.get(key) == Some(&self.entries[slot].1))
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

/// A closure: the function literal plus the environment it was created in.
pub struct FunctionValue {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl FunctionValue {
    #[inline]
    pub fn arity(&self) -> usize {
        self.literal.parameters.len()
    }
}

/// A natively implemented function.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}
