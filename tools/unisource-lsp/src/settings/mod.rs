//! Lint settings sent by the editor.
//!
//! Settings arrive either as `initializationOptions` or in a
//! `workspace/didChangeConfiguration` notification. Clients nest them
//! differently, so the object is looked up under `globalSettings`, then
//! `unisource`, then taken from the root.

use serde_json::Value;
use unisource_engine::LintSettings;

const SCOPES: &[&str] = &["globalSettings", "unisource"];

/// Extract lint settings from a client-supplied JSON value.
///
/// `null` and missing values yield the defaults.
pub fn resolve(value: Option<&Value>) -> Result<LintSettings, serde_json::Error> {
    let Some(value) = value else {
        return Ok(LintSettings::default());
    };
    let scoped = SCOPES
        .iter()
        .find_map(|scope| value.get(scope))
        .unwrap_or(value);
    if scoped.is_null() {
        return Ok(LintSettings::default());
    }
    serde_json::from_value(scoped.clone())
}
