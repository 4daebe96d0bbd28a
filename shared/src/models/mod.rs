//! Data models
//!
//! Wire types shared between the planner and the API client.
//! Field names follow the wedding API's camelCase JSON.

pub mod guest;
pub mod table;
pub mod website;

// Re-exports
pub use guest::*;
pub use table::*;
pub use website::*;
