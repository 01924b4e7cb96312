pub mod file;

use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a typed JSON document from `--input <path>`, or from stdin when the
/// path is `-`.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    if path == "-" {
        read_stdin()
    } else {
        file::read_json(path)
    }
}

/// Piped JSON only; an interactive terminal is never waited on.
fn read_stdin<T: DeserializeOwned>() -> Result<T, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Err("--input - expects JSON piped on stdin".into());
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("--input - given but stdin was empty".into());
    }

    serde_json::from_str(trimmed).map_err(|e| format!("Failed to parse stdin: {}", e).into())
}
