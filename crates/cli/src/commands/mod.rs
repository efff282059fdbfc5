//! CLI command implementations

pub mod clusters;
pub mod pods;
pub mod tools;
