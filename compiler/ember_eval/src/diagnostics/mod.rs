//! Call-stack tracking for the evaluator.
//!
//! Every Ember function call pushes a [`CallFrame`]; returning pops it. The
//! depth check is part of [`CallStack::push`], so runaway recursion fails
//! with [`EvalFault::RecursionLimit`] before the host stack is at risk.

use std::fmt;

use ember_ir::Position;

use crate::EvalFault;

/// Default for [`CallStack::max_depth`].
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2_000;

/// A single frame in the live call stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Callee name at the call site, or `<anonymous>` when the callee is
    /// not a plain identifier.
    pub name: String,
    /// Where the call was made.
    pub position: Position,
}

impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.position)
    }
}

/// Live call stack of the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` is `None` for unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit. The frame is not pushed when
    /// the limit is hit.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalFault> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(EvalFault::RecursionLimit { depth: max });
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[inline]
    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Frames, most recent call first.
    pub fn backtrace(&self) -> impl Iterator<Item = &CallFrame> {
        self.frames.iter().rev()
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_CALL_DEPTH))
    }
}
