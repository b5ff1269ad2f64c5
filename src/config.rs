//! Purpose: Properties-file configuration loaded into an explicit value.
//! Exports: `Settings` with lookup and resource-path resolution.
//! Role: Replace ambient global configuration with a caller-owned object.
//! Invariants: Resource names must not contain path separators.
//! Invariants: Lookup is case-sensitive; keys and values are stored trimmed.

use crate::core::error::{Error, ErrorKind, map_io_error_kind};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key-value settings parsed from a `key=value` properties file.
///
/// Blank lines and lines starting with `#` or `!` are ignored; the first
/// `=` splits key from value and surrounding whitespace is trimmed.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    entries: HashMap<String, String>,
    resource_dir: PathBuf,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::new(map_io_error_kind(&err))
                .with_message("failed to read settings file")
                .with_path(path)
                .with_source(err)
        })?;
        let resource_dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        Ok(Self {
            entries: parse_properties(&text),
            resource_dir,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str, Error> {
        self.get(key).ok_or_else(|| {
            Error::new(ErrorKind::NotFound)
                .with_message(format!("settings key {key:?} is not defined"))
                .with_hint("Add the key to the settings file or fix the lookup name.")
        })
    }

    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    /// Resolves a file name against the settings file's directory. Names
    /// with path separators are rejected so lookups stay inside the
    /// resource directory.
    pub fn resource_path(&self, name: &str) -> Result<PathBuf, Error> {
        if name.contains('/') || name.contains('\\') {
            return Err(Error::new(ErrorKind::Usage)
                .with_message("resource names must not contain path separators"));
        }
        Ok(self.resource_dir.join(name))
    }
}

fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        entries.insert(key.trim().to_string(), value.trim().to_string());
    }
    entries
}
