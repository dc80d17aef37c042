//! Stack growth for the recursive parts of the interpreter.
//!
//! The parser and the evaluator both recurse once per nesting level of the
//! source program, and the evaluator additionally recurses once per Ember
//! function call. Wrapping those recursion points in [`ensure_sufficient_stack`]
//! lets a deep but finite program run to completion instead of overflowing
//! the native stack. Runaway recursion is still cut off, by the evaluator's
//! call-depth limit rather than by a crash.
//!
//! On `wasm32` the helper is a plain call.

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
