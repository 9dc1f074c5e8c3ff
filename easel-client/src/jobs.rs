//! Job submission and health endpoints

use crate::RelayClient;
use crate::error::Result;
use easel_core::dto::health::HealthResponse;
use easel_core::dto::job::{SubmitJob, SubmitJobResponse};

impl RelayClient {
    // =============================================================================
    // Health & Jobs
    // =============================================================================

    /// Fetch relay health, including whether a worker is connected
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response).await
    }

    /// Submit a job and wait for the worker's outcome
    ///
    /// Returns once the worker completed the job; worker failures, timeouts
    /// and a missing worker come back as `ClientError::ApiError` carrying
    /// the relay's message.
    ///
    /// # Arguments
    /// * `req` - The submission; absent fields are reported by the relay
    ///
    /// # Example
    /// ```no_run
    /// # use easel_client::RelayClient;
    /// # use easel_core::dto::job::SubmitJob;
    /// # async fn example() -> easel_client::Result<()> {
    /// let client = RelayClient::new("http://localhost:3001");
    /// let done = client
    ///     .submit_job(&SubmitJob {
    ///         image_url: Some("https://cdn.example.com/art.png".to_string()),
    ///         category: Some("poster".to_string()),
    ///         subcategory: Some("kids".to_string()),
    ///         layout: Some("square".to_string()),
    ///     })
    ///     .await?;
    /// println!("Rendered: {}", done.result_path);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_job(&self, req: &SubmitJob) -> Result<SubmitJobResponse> {
        tracing::debug!(
            "Submitting job {}/{} ({:?})",
            req.category.as_deref().unwrap_or(""),
            req.subcategory.as_deref().unwrap_or(""),
            req.layout
        );

        let response = self
            .client
            .post(self.url("/submit-job"))
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
