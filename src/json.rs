//! Purpose: JSON fixture loading shared by test setup code.
//! Exports: `read_value`, `from_file`, `from_file_key`.
//! Role: Single seam for fixture decoding so callsites avoid ad hoc parse logic.
//! Invariants: Fixture files are UTF-8; decode failures surface as `Corrupt` errors.
//! Invariants: Partial lookups only address top-level keys of a JSON object.

use crate::core::error::{Error, ErrorKind};
use crate::files;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Reads a JSON file into a `serde_json::Value` tree.
pub fn read_value(path: impl AsRef<Path>) -> Result<Value, Error> {
    let path = path.as_ref();
    let text = files::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Corrupt)
            .with_message("invalid json fixture")
            .with_path(path)
            .with_source(err)
    })
}

/// Deserializes a whole JSON file into `T`.
pub fn from_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let path = path.as_ref();
    let value = read_value(path)?;
    serde_json::from_value(value).map_err(|err| {
        Error::new(ErrorKind::Corrupt)
            .with_message("fixture does not match the expected shape")
            .with_path(path)
            .with_source(err)
    })
}

/// Deserializes one top-level key of a JSON object file into `T`.
pub fn from_file_key<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    key: &str,
) -> Result<T, Error> {
    let path = path.as_ref();
    let value = read_value(path)?;
    let Value::Object(mut fields) = value else {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("partial decode requires a top-level json object")
            .with_path(path));
    };
    let field = fields.remove(key).ok_or_else(|| {
        Error::new(ErrorKind::NotFound)
            .with_message(format!("fixture has no top-level key {key:?}"))
            .with_path(path)
    })?;
    serde_json::from_value(field).map_err(|err| {
        Error::new(ErrorKind::Corrupt)
            .with_message(format!("fixture key {key:?} does not match the expected shape"))
            .with_path(path)
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::{from_file, from_file_key, read_value};
    use crate::core::error::ErrorKind;
    use serde::Deserialize;
    use std::path::PathBuf;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pet {
        name: String,
        age: u8,
    }

    fn write_fixture(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).expect("write fixture");
        path
    }

    #[test]
    fn read_value_returns_tree() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "pet.json", r#"{"name":"Rex","age":3}"#);
        let value = read_value(&path).expect("value");
        assert_eq!(value["name"], "Rex");
    }

    #[test]
    fn from_file_decodes_struct() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "pet.json", r#"{"name":"Rex","age":3}"#);
        let pet: Pet = from_file(&path).expect("pet");
        assert_eq!(
            pet,
            Pet {
                name: "Rex".to_string(),
                age: 3
            }
        );
    }

    #[test]
    fn from_file_key_decodes_one_field() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(
            &dir,
            "owners.json",
            r#"{"owner":{"name":"Ada","age":36},"other":[]}"#,
        );
        let owner: Pet = from_file_key(&path, "owner").expect("owner");
        assert_eq!(owner.name, "Ada");
    }

    #[test]
    fn from_file_key_missing_key_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "owners.json", r#"{"owner":{}}"#);
        let result: Result<Pet, _> = from_file_key(&path, "absent");
        assert_eq!(result.expect_err("err").kind(), ErrorKind::NotFound);
    }

    #[test]
    fn from_file_key_on_array_is_usage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "list.json", "[1,2,3]");
        let result: Result<Pet, _> = from_file_key(&path, "owner");
        assert_eq!(result.expect_err("err").kind(), ErrorKind::Usage);
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "broken.json", r#"{"name":}"#);
        let err = read_value(&path).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Corrupt);
    }
}
