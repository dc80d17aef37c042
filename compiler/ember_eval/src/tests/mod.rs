//! Unit tests for the operator and builtin tables.

mod builtins_tests;
