//! Variables files: the JSON object of template variables for a document.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::VariablesError;

/// Template variables keyed by name.
pub type Variables = serde_json::Map<String, serde_json::Value>;

/// Parse a variables document. The top level must be a JSON object.
///
/// # Examples
/// ```
/// use ptfmt::parse_variables;
///
/// let vars = parse_variables(r#"{"qty": "10", "owner": "Ana"}"#).unwrap();
/// assert_eq!(vars["owner"], "Ana");
/// assert!(parse_variables("[1, 2]").is_err());
/// ```
pub fn parse_variables(json: &str) -> Result<Variables, VariablesError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(VariablesError::NotAnObject {
            got: json_type_name(&other),
        }),
    }
}

/// Load variables from a UTF-8 JSON file.
pub fn load_variables(path: impl AsRef<Path>) -> Result<Variables, VariablesError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let variables = parse_variables(&contents)?;
    debug!(path = %path.display(), count = variables.len(), "loaded variables");
    Ok(variables)
}

/// Write variables as pretty-printed JSON.
///
/// An existing file is first copied to `<stem>_backup.json` next to it.
/// Returns the backup path when one was written.
pub fn save_variables(
    path: impl AsRef<Path>,
    variables: &Variables,
) -> Result<Option<PathBuf>, VariablesError> {
    let path = path.as_ref();

    let backup = if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup)?;
        debug!(backup = %backup.display(), "backed up variables");
        Some(backup)
    } else {
        None
    };

    let mut json = serde_json::to_string_pretty(variables)?;
    json.push('\n');
    fs::write(path, json)?;
    debug!(path = %path.display(), count = variables.len(), "saved variables");

    Ok(backup)
}

/// Copy of `variables` without nulls, empty strings, empty arrays or empty objects.
pub fn drop_empty(variables: &Variables) -> Variables {
    variables
        .iter()
        .filter(|(_, value)| !is_empty_value(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn is_empty_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(a) => a.is_empty(),
        serde_json::Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "variables".to_string());
    path.with_file_name(format!("{}_backup.json", stem))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
