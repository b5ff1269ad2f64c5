//! Purpose: Carry values between test steps without process-wide statics.
//! Exports: `ScenarioContext`.
//! Role: Owned key-value store threaded through a scenario by the caller.
//! Invariants: Values are stored as JSON so steps do not share concrete types.
//! Invariants: Missing keys are `NotFound` errors, never panics.

use crate::core::error::{Error, ErrorKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct ScenarioContext {
    values: HashMap<String, Value>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under the key, replacing any previous entry.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> Result<(), Error> {
        let value = serde_json::to_value(value).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to encode context value")
                .with_source(err)
        })?;
        self.values.insert(key.into(), value);
        Ok(())
    }

    /// Retrieves and decodes the value stored under the key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, Error> {
        let value = self.values.get(key).ok_or_else(|| {
            Error::new(ErrorKind::NotFound)
                .with_message(format!("context has no value for key {key:?}"))
        })?;
        serde_json::from_value(value.clone()).map_err(|err| {
            Error::new(ErrorKind::Corrupt)
                .with_message(format!("context value for {key:?} does not match the expected type"))
                .with_source(err)
        })
    }

    /// Stringified view of a stored value; `None` when the key is absent.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::ScenarioContext;
    use crate::core::error::ErrorKind;

    #[test]
    fn set_then_get_round_trips_typed_values() {
        let mut context = ScenarioContext::new();
        context.set("count", 7u32).expect("set");
        let count: u32 = context.get("count").expect("get");
        assert_eq!(count, 7);
    }

    #[test]
    fn get_missing_key_is_not_found() {
        let context = ScenarioContext::new();
        let err = context.get::<String>("absent").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn get_with_wrong_type_is_corrupt() {
        let mut context = ScenarioContext::new();
        context.set("name", "Rex").expect("set");
        let err = context.get::<u32>("name").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Corrupt);
    }

    #[test]
    fn get_str_shows_strings_unquoted() {
        let mut context = ScenarioContext::new();
        context.set("name", "Rex").expect("set");
        context.set("count", 3).expect("set");
        assert_eq!(context.get_str("name").as_deref(), Some("Rex"));
        assert_eq!(context.get_str("count").as_deref(), Some("3"));
        assert_eq!(context.get_str("absent"), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut context = ScenarioContext::new();
        context.set("user", "alpha").expect("set");
        context.set("user", "beta").expect("set");
        assert_eq!(context.get_str("user").as_deref(), Some("beta"));
    }

    #[test]
    fn clear_empties_the_store() {
        let mut context = ScenarioContext::new();
        context.set("user", "alpha").expect("set");
        context.clear();
        assert!(!context.contains("user"));
    }
}
