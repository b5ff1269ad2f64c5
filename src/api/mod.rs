//! Purpose: Public HTTP-facing surface of the toolkit.
//! Exports: `ApiClient` and `ApiResponse`.
//! Role: Stable boundary for test code; transport details stay internal.
//! Invariants: Response snapshots outlive the transport that produced them.

mod client;
mod response;

pub use client::ApiClient;
pub use response::ApiResponse;
