//! Part list loading
//!
//! Reads the newline-delimited part file into an ordered `Vec<String>`.
//! Existence and openability are checked up front so the caller gets an
//! error naming the path instead of a bare IO failure.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ShipyardError};

/// Read `path` line by line, preserving file order.
///
/// Empty lines are kept; they simply match no category later. The file
/// handle is dropped when this returns, on success or failure.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ShipyardError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| ShipyardError::FileUnopenable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line?);
    }

    Ok(lines)
}
