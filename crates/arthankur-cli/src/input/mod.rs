pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Load a command's input document: `--input <file>` wins, then piped
/// stdin. `None` means neither was supplied.
pub fn load<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => file::read_json(p).map(Some),
        None => stdin::read_stdin(),
    }
}
