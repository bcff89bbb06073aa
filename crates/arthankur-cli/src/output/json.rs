use serde_json::Value;
use std::io::{self, Write};

/// Full envelope, pretty-printed.
pub fn print_json(value: &Value) {
    let mut out = io::stdout().lock();
    let written = serde_json::to_writer_pretty(&mut out, value)
        .map_err(io::Error::from)
        .and_then(|_| writeln!(out));
    if let Err(e) = written {
        eprintln!("JSON write error: {}", e);
    }
}
