//! The `explain` command: documentation for finding codes.

use unisource_engine::FindingCode;
use unisource_report::CodeDocs;

use super::CliError;

/// Look up the documentation for a finding code string such as `u1001`.
pub fn explain_code(code_str: &str) -> Result<&'static str, CliError> {
    let code: FindingCode = code_str
        .parse()
        .map_err(|()| CliError::UnknownCode(code_str.to_string()))?;
    CodeDocs::get(code).ok_or(CliError::Undocumented(code))
}
