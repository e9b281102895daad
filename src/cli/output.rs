//! CLI output: rendering of trees and the schema, and error mapping.

use crate::config::{EnvVarSpec, ValueType};
use crate::error::LoadError;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

/// Pretty JSON for any serializable result.
pub fn render_json<T: Serialize>(value: &T) -> Result<String, LoadError> {
    serde_json::to_string_pretty(value).map_err(LoadError::Render)
}

/// Schema table. `is_set` reports whether a variable is present right now.
/// Rows are limited to `value_type` when one is given.
pub fn render_schema(
    schema: &[EnvVarSpec],
    value_type: Option<ValueType>,
    is_set: impl Fn(&str) -> bool,
) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Variable", "Namespace", "Key", "Type", "Default", "Set"]);

    for spec in schema
        .iter()
        .filter(|spec| value_type.map_or(true, |t| spec.value_type == t))
    {
        table.add_row(vec![
            spec.env_name.to_string(),
            spec.coordinate.namespace.to_string(),
            spec.coordinate.key.to_string(),
            spec.value_type.to_string(),
            spec.default.to_string(),
            if is_set(spec.env_name) { "yes" } else { "no" }.to_string(),
        ]);
    }

    table.to_string()
}

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &LoadError) -> String {
    match e {
        LoadError::Persistence(_) => format!("{}\nCheck that the config store is reachable.", e),
        _ => e.to_string(),
    }
}
