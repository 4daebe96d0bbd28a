//! Seating planner endpoints

use crate::{ClientConfig, ClientResult, HttpClient};
use shared::models::SeatingSnapshot;
use vow_planner::{PlannerConfig, SeatingPlanner};

/// `weddings/{id}/seating`
#[derive(Debug, Clone)]
pub struct SeatingApi {
    http: HttpClient,
    path: String,
}

impl SeatingApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_client(config.build_http_client()?, config))
    }

    /// Share an existing HTTP client
    pub fn with_client(http: HttpClient, config: &ClientConfig) -> Self {
        Self {
            http,
            path: config.wedding_path("seating"),
        }
    }

    pub async fn fetch_seating(&self) -> ClientResult<SeatingSnapshot> {
        self.http.get(&self.path).await
    }

    /// Fetch the seating data and seed a planner with it
    ///
    /// Data that breaks the seating invariants is reported as an invalid response.
    pub async fn load_planner(&self, config: PlannerConfig) -> ClientResult<SeatingPlanner> {
        let snapshot = self.fetch_seating().await?;
        SeatingPlanner::from_snapshot(config, snapshot)
            .map_err(|e| crate::ClientError::InvalidResponse(e.to_string()))
    }
}
