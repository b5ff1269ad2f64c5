//! Purpose: Small file helpers for reading fixtures and writing outputs.
//! Exports: `read_to_string`, `load_query`, `create_output`.
//! Role: Wrap std fs calls with crate errors carrying the offending path.
//! Invariants: Fixture files are read as UTF-8.

use crate::core::error::{Error, ErrorKind, map_io_error_kind};
use std::fs::File;
use std::path::Path;

/// Reads a whole file into a string.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|err| {
        Error::new(map_io_error_kind(&err))
            .with_message("failed to read file")
            .with_path(path)
            .with_source(err)
    })
}

/// Reads a SQL file and joins its lines into a single-line statement.
///
/// Line breaks collapse to single spaces so multi-line query files can be
/// passed straight to a driver. An all-whitespace file is a usage error.
pub fn load_query(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let text = read_to_string(path)?;
    let query = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if query.is_empty() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("query file contains no statement")
            .with_path(path));
    }
    Ok(query)
}

/// Creates (or truncates) a file to use as an output destination.
pub fn create_output(path: impl AsRef<Path>) -> Result<File, Error> {
    let path = path.as_ref();
    File::create(path).map_err(|err| {
        Error::new(map_io_error_kind(&err))
            .with_message("failed to create output file")
            .with_path(path)
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::{create_output, load_query, read_to_string};
    use crate::core::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn read_missing_file_is_not_found() {
        let err = read_to_string("/no/such/fixture.txt").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn load_query_joins_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("select.sql");
        std::fs::write(&path, "SELECT *\n  FROM pets\n WHERE id = 1\n").expect("write");
        let query = load_query(&path).expect("query");
        assert_eq!(query, "SELECT * FROM pets WHERE id = 1");
    }

    #[test]
    fn load_query_rejects_empty_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.sql");
        std::fs::write(&path, "\n   \n").expect("write");
        let err = load_query(&path).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn create_output_truncates_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "old contents").expect("write");

        let mut file = create_output(&path).expect("create");
        file.write_all(b"new").expect("write");
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "new");
    }
}
