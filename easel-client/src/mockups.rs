//! Taxonomy and upload endpoints

use crate::RelayClient;
use crate::error::Result;
use easel_core::domain::taxonomy::Category;
use easel_core::dto::mockup::{CategoriesResponse, DeleteResponse, UploadResponse};
use reqwest::multipart::{Form, Part};

/// Multipart field the relay reads uploads from
const UPLOAD_FIELD: &str = "mockup";

impl RelayClient {
    // =============================================================================
    // Taxonomy
    // =============================================================================

    /// List template categories and their subcategories
    ///
    /// # Returns
    /// Categories sorted by name, each with its sorted subcategory names
    ///
    /// # Example
    /// ```no_run
    /// # use easel_client::RelayClient;
    /// # async fn example() -> easel_client::Result<()> {
    /// let client = RelayClient::new("http://localhost:3001");
    /// let categories = client.list_categories().await?;
    /// println!("{} categories", categories.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let response = self.client.get(self.url("/categories")).send().await?;
        let body: CategoriesResponse = self.handle_response(response).await?;
        Ok(body.categories)
    }

    /// Fetch the PNG preview of a template
    ///
    /// Each path segment is percent-encoded, so any name returned by
    /// `list_categories` can be passed back unchanged.
    ///
    /// # Arguments
    /// * `category` - Category directory name
    /// * `subcategory` - Subcategory directory name
    /// * `layout` - `portrait`, `landscape` or `square`
    ///
    /// # Returns
    /// The raw PNG bytes
    pub async fn mockup_image(
        &self,
        category: &str,
        subcategory: &str,
        layout: &str,
    ) -> Result<Vec<u8>> {
        let url = self.segment_url("/mockup-image", &[category, subcategory, layout]);
        let response = self.client.get(url).send().await?;
        self.handle_bytes(response).await
    }

    // =============================================================================
    // Result Uploads
    // =============================================================================

    /// Upload a rendered mockup under `file_name`
    ///
    /// # Arguments
    /// * `file_name` - Name the relay stores the file under
    /// * `data` - File content
    ///
    /// # Returns
    /// The stored file; its `file_path` is the public URL the relay serves it at
    ///
    /// # Example
    /// ```no_run
    /// # use easel_client::RelayClient;
    /// # async fn example() -> easel_client::Result<()> {
    /// let client = RelayClient::new("http://localhost:3001");
    /// let uploaded = client
    ///     .upload_mockup("processed_job_1.jpg", std::fs::read("out.jpg").unwrap())
    ///     .await?;
    /// println!("Available at {}", uploaded.file_path);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_mockup(&self, file_name: &str, data: Vec<u8>) -> Result<UploadResponse> {
        let part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.url("/upload-mockup"))
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a previously uploaded mockup
    ///
    /// # Arguments
    /// * `file_name` - Name the file was uploaded under
    pub async fn delete_mockup(&self, file_name: &str) -> Result<DeleteResponse> {
        let response = self
            .client
            .delete(self.segment_url("/delete-mockup", &[file_name]))
            .send()
            .await?;

        self.handle_response(response).await
    }
}
