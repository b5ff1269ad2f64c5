//! Purpose: Core, dependency-light building blocks of the toolkit.
//! Exports: `error` (crate error type), `seq` (sequence helpers), `random` (data generation).
//! Role: Everything here is pure or RNG-backed; no I/O and no hidden state.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.

pub mod error;
pub mod random;
pub mod seq;
