//! Purpose: Shared toolkit crate backing integration-test suites.
//! Exports: `core` (errors, sequence helpers, data generation), `api` (HTTP
//! facade), plus `config`, `files`, `json`, `context`, and `logging`.
//! Role: Every facade is an explicit value owned by the caller; the crate
//! holds no global state.
//! Invariants: HTTP, file, and JSON details stay behind their modules.

pub mod api;
pub mod config;
pub mod context;
pub mod core;
pub mod files;
pub mod json;
pub mod logging;

pub use api::{ApiClient, ApiResponse};
pub use config::Settings;
pub use context::ScenarioContext;
pub use core::error::{Error, ErrorKind};
