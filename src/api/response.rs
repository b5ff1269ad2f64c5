//! Purpose: Owned snapshot of an HTTP response for test assertions.
//! Exports: `ApiResponse`.
//! Role: Decouple assertions from the transport; the body is read eagerly.
//! Invariants: Error statuses (4xx/5xx) are still responses, never crate errors.
//! Invariants: Decode helpers never mutate the stored body.

use crate::core::error::{Error, ErrorKind};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: u16,
    content_type: String,
    body: String,
}

impl ApiResponse {
    pub(crate) fn new(status: u16, content_type: String, body: String) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Content type with parameters stripped, e.g. `application/json` for
    /// `application/json; charset=utf-8`.
    pub fn media_type(&self) -> &str {
        self.content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Deserializes the whole body into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|err| {
            Error::new(ErrorKind::Corrupt)
                .with_message("response body does not match the expected shape")
                .with_status(self.status)
                .with_source(err)
        })
    }

    /// Deserializes an array of `T` from the body. An empty `key` reads
    /// the whole document; otherwise the named top-level field is read.
    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, Error> {
        if key.is_empty() {
            return self.decode();
        }
        let value = self.tree()?;
        let field = value.get(key).ok_or_else(|| {
            Error::new(ErrorKind::NotFound)
                .with_message(format!("response has no top-level key {key:?}"))
                .with_status(self.status)
        })?;
        serde_json::from_value(field.clone()).map_err(|err| {
            Error::new(ErrorKind::Corrupt)
                .with_message(format!("response key {key:?} is not a list of the expected type"))
                .with_status(self.status)
                .with_source(err)
        })
    }

    /// Looks up a value by JSON pointer, e.g. `/data/0/id`.
    pub fn value(&self, pointer: &str) -> Result<Value, Error> {
        let tree = self.tree()?;
        tree.pointer(pointer).cloned().ok_or_else(|| {
            Error::new(ErrorKind::NotFound)
                .with_message(format!("response has no value at pointer {pointer:?}"))
                .with_status(self.status)
        })
    }

    fn tree(&self) -> Result<Value, Error> {
        serde_json::from_str(&self.body).map_err(|err| {
            Error::new(ErrorKind::Corrupt)
                .with_message("response body is not valid json")
                .with_status(self.status)
                .with_source(err)
        })
    }
}
