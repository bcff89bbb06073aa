use serde_json::Value;
use std::io;

use super::{format_scalar, record_lists, result_of, scalar_fields};

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write the result as CSV. Results that carry rows (an amortization
/// schedule, forecast periods) are written one row per record; anything
/// else becomes a two-column field,value listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let outcome = match result_of(value) {
        Value::Object(result) => match record_lists(result).first() {
            Some((_, rows)) => write_rows(&mut wtr, rows),
            None => write_fields(&mut wtr, result),
        },
        Value::Array(rows) => write_rows(&mut wtr, rows),
        other => wtr.write_record([format_scalar(other)]),
    };

    if let Err(e) = outcome.and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_fields(wtr: &mut StdoutWriter<'_>, result: &serde_json::Map<String, Value>) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in scalar_fields(result) {
        wtr.write_record([key, format_scalar(val)])?;
    }
    Ok(())
}

fn write_rows(wtr: &mut StdoutWriter<'_>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            wtr.write_record([format_scalar(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    wtr.write_record(&headers)?;
    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_scalar).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}
