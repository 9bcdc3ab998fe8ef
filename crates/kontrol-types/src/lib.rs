//! Stable DTOs used across the kontrol workspace.
//!
//! This crate is intentionally boring:
//! - the two-valued [`Decision`]
//! - the serializable decision report emitted for logs and renderers
//! - stable schema identifiers

#![forbid(unsafe_code)]

pub mod decision;
pub mod report;

pub use decision::Decision;
pub use report::{DecisionCounts, DecisionReport, ResponseRecord, SCHEMA_DECISION_V1};
