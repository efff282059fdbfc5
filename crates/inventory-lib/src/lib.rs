//! Core library for the mock CCE inventory service
//!
//! This crate provides:
//! - The static cluster → namespace → pod hierarchy
//! - Typed projection records returned by the query operations
//! - The tool registry that dispatches named calls onto store queries

pub mod models;
pub mod store;
pub mod tools;

pub use models::*;
pub use store::{InventoryStore, NO_LOGS};
pub use tools::{ToolError, ToolRegistry, ToolSpec};
