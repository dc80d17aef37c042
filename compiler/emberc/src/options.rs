//! Options shared by `run` and `repl`.

use ember_eval::{Interpreter, SharedPrintHandler, DEFAULT_MAX_CALL_DEPTH};

use crate::CliError;

/// Environment variable supplying the call-depth limit when `--max-depth`
/// is not given.
pub const MAX_DEPTH_ENV: &str = "EMBER_MAX_DEPTH";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum nested calls. `None` removes the limit.
    pub max_depth: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl RunOptions {
    /// Defaults, overridden by [`MAX_DEPTH_ENV`] when it is set.
    pub fn from_env() -> Result<Self, CliError> {
        Self::with_env_depth(std::env::var(MAX_DEPTH_ENV).ok().as_deref())
    }

    /// Like [`RunOptions::from_env`], with the variable's value passed in.
    pub fn with_env_depth(value: Option<&str>) -> Result<Self, CliError> {
        let mut options = RunOptions::default();
        if let Some(value) = value {
            options.max_depth = parse_depth(value)?;
        }
        Ok(options)
    }

    /// Apply command-line flags, returning the remaining positional arguments.
    ///
    /// Recognized: `--max-depth=<n>`, where `0` means unlimited.
    pub fn parse_args(mut self, args: &[String]) -> Result<(Self, Vec<String>), CliError> {
        let mut positional = Vec::new();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--max-depth=") {
                self.max_depth = parse_depth(value)?;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption {
                    option: arg.clone(),
                });
            } else {
                positional.push(arg.clone());
            }
        }
        Ok((self, positional))
    }

    /// An interpreter configured with these options.
    pub fn interpreter(&self, print_handler: SharedPrintHandler) -> Interpreter {
        Interpreter::builder()
            .print_handler(print_handler)
            .max_call_depth(self.max_depth)
            .build()
    }
}

fn parse_depth(value: &str) -> Result<Option<usize>, CliError> {
    match value.trim().parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(depth) => Ok(Some(depth)),
        Err(_) => Err(CliError::InvalidMaxDepth {
            value: value.to_string(),
        }),
    }
}
