//! The `explain` command: describe a diagnostic code.

use std::io::Write;

use ember_ir::ErrorCode;

use super::Outcome;
use crate::CliError;

pub fn explain_error(code: &str, out: &mut impl Write) -> Result<Outcome, CliError> {
    let Some(parsed) = ErrorCode::from_str_code(code) else {
        return Err(CliError::UnknownErrorCode {
            code: code.to_string(),
        });
    };
    writeln!(out, "{parsed}: {}", parsed.description())?;
    Ok(Outcome::Success)
}
