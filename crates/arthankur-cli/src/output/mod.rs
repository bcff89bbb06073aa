pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The computation result inside a `ComputationOutput` envelope, or the
/// value itself when it carries no envelope.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Scalar fields of a result, with nested objects flattened to
/// `parent.child` keys. Arrays of records are left to `record_lists`.
pub(crate) fn scalar_fields(map: &Map<String, Value>) -> Vec<(String, &Value)> {
    let mut fields = Vec::new();
    collect_scalars("", map, &mut fields);
    fields
}

fn collect_scalars<'a>(prefix: &str, map: &'a Map<String, Value>, out: &mut Vec<(String, &'a Value)>) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => collect_scalars(&name, inner, out),
            Value::Array(items) if is_record_list(items) => {}
            _ => out.push((name, val)),
        }
    }
}

/// Named arrays of objects in a result: schedule rows, forecast periods,
/// flags, factor contributions.
pub(crate) fn record_lists(map: &Map<String, Value>) -> Vec<(&str, &[Value])> {
    map.iter()
        .filter_map(|(key, val)| match val {
            Value::Array(items) if is_record_list(items) => Some((key.as_str(), items.as_slice())),
            _ => None,
        })
        .collect()
}

fn is_record_list(items: &[Value]) -> bool {
    matches!(items.first(), Some(Value::Object(_)))
}

pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_scalar).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
