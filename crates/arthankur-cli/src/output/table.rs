use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_scalar, record_lists, result_of, scalar_fields};

/// Render the result as tables: one Field/Value table for scalar figures,
/// then one table per list of rows (schedule, periods, flags, factors).
pub fn print_table(value: &Value) {
    match result_of(value) {
        Value::Object(result) => print_result(result),
        Value::Array(rows) => print_rows(rows),
        other => println!("{}", format_scalar(other)),
    }

    if let Value::Object(envelope) = value {
        print_footer(envelope);
    }
}

fn print_result(result: &Map<String, Value>) {
    let fields = scalar_fields(result);
    if !fields.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in &fields {
            builder.push_record([key.clone(), format_scalar(val)]);
        }
        println!("{}", Table::from(builder));
    }

    for (name, rows) in record_lists(result) {
        println!("\n{}:", name);
        print_rows(rows);
    }
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            println!("{}", format_scalar(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h).map(format_scalar).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_footer(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
