//! Shared types for the Vow planner workspace
//!
//! Common types used across the planner and client crates including
//! error types, the API response envelope, wire models and utilities.

pub mod error;
pub mod logger;
pub mod models;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
