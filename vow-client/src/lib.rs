//! Vow Client - HTTP client for the wedding API
//!
//! Fetches website and seating data and saves website patches.
//! [`WebsiteApi`] implements [`vow_planner::WebsiteSaver`], so a draft store
//! can save through it directly.

pub mod config;
pub mod error;
pub mod http;
pub mod seating;
pub mod website;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use seating::SeatingApi;
pub use website::WebsiteApi;

#[cfg(test)]
mod tests;
