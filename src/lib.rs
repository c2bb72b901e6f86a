//! Aggregates per-account transaction rows into monthly figures and
//! accumulates them into a running ledger file.

pub mod domain;
pub mod engine;
pub mod output;
pub mod parsing;
pub mod source;
