//! Website builder endpoints

use crate::{ClientConfig, ClientResult, HttpClient};
use async_trait::async_trait;
use shared::error::{AppError, AppResult};
use shared::models::{WebsiteContent, WebsitePatch};
use vow_planner::WebsiteSaver;

/// `weddings/{id}/website`
#[derive(Debug, Clone)]
pub struct WebsiteApi {
    http: HttpClient,
    path: String,
}

impl WebsiteApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_client(config.build_http_client()?, config))
    }

    /// Share an existing HTTP client
    pub fn with_client(http: HttpClient, config: &ClientConfig) -> Self {
        Self {
            http,
            path: config.wedding_path("website"),
        }
    }

    pub async fn fetch_website(&self) -> ClientResult<WebsiteContent> {
        self.http.get(&self.path).await
    }

    /// Send a partial update; returns the content the server stored
    pub async fn save_website(&self, patch: &WebsitePatch) -> ClientResult<WebsiteContent> {
        let content: WebsiteContent = self.http.patch(&self.path, patch).await?;
        tracing::info!(
            labels = patch.website_labels.is_some(),
            sections = patch.website_sections.is_some(),
            "Website saved"
        );
        Ok(content)
    }
}

#[async_trait]
impl WebsiteSaver for WebsiteApi {
    async fn save_website(&self, patch: &WebsitePatch) -> AppResult<WebsiteContent> {
        WebsiteApi::save_website(self, patch)
            .await
            .map_err(AppError::from)
    }
}
