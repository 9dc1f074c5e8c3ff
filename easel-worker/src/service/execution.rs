//! Execution service
//!
//! Runs one mockup job end to end:
//! - checks the template exists
//! - downloads the customer image into the work dir
//! - renders it through the compositor
//! - uploads the result to the relay
//!
//! Scratch files are removed whatever the outcome.

use async_trait::async_trait;
use easel_client::{ClientError, RelayClient};
use easel_core::domain::job::Job;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::service::compositor::{Compositor, CompositorError};

/// Job failure; the `Display` text is what the relay hands back to the caller
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Mockup file not found: {0}")]
    TemplateNotFound(String),

    #[error("Failed to download image: {0}")]
    Download(#[from] reqwest::Error),

    #[error(transparent)]
    Compositor(#[from] CompositorError),

    #[error("Failed to upload result: {0}")]
    Upload(#[from] ClientError),

    #[error("Work directory error: {0}")]
    Io(#[from] std::io::Error),
}

/// Service trait for executing mockup jobs
#[async_trait]
pub trait ExecutionService: Send + Sync {
    /// Executes `job`, returning the public URL of the rendered mockup
    async fn execute_job(&self, job: &Job) -> Result<String, ExecutionError>;
}

/// Standard implementation of ExecutionService
pub struct StandardExecutionService {
    http: reqwest::Client,
    relay: RelayClient,
    compositor: Arc<dyn Compositor>,
    work_dir: PathBuf,
}

impl StandardExecutionService {
    pub fn new(relay: RelayClient, compositor: Arc<dyn Compositor>, work_dir: PathBuf) -> Self {
        Self {
            http: reqwest::Client::new(),
            relay,
            compositor,
            work_dir,
        }
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<(), ExecutionError> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        tokio::fs::write(dest, &bytes).await?;
        debug!("Downloaded {} ({} bytes)", url, bytes.len());
        Ok(())
    }

    async fn run(&self, job: &Job, image: &Path, output: &Path) -> Result<String, ExecutionError> {
        let template = Path::new(&job.mockup_path);
        if !tokio::fs::try_exists(template).await.unwrap_or(false) {
            return Err(ExecutionError::TemplateNotFound(job.mockup_path.clone()));
        }

        tokio::fs::create_dir_all(&self.work_dir).await?;
        self.download(&job.image_url, image).await?;

        self.compositor.compose(template, image, output).await?;

        let data = tokio::fs::read(output).await?;
        let uploaded = self
            .relay
            .upload_mockup(&job.result_file_name(), data)
            .await?;

        Ok(uploaded.file_path)
    }
}

#[async_trait]
impl ExecutionService for StandardExecutionService {
    async fn execute_job(&self, job: &Job) -> Result<String, ExecutionError> {
        info!(
            "Processing job {}: {}/{} ({})",
            job.id, job.category, job.subcategory, job.layout
        );

        let image = self.work_dir.join(format!("temp_{}.jpg", job.id));
        let output = self.work_dir.join(job.result_file_name());

        let result = self.run(job, &image, &output).await;

        for path in [&image, &output] {
            if let Err(e) = tokio::fs::remove_file(path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", path.display(), e);
                }
            }
        }

        match &result {
            Ok(path) => info!("Job {} completed: {}", job.id, path),
            Err(e) => warn!("Job {} failed: {}", job.id, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::domain::layout::Layout;
    use easel_relay::{AppState, Config as RelayConfig};
    use tokio::net::TcpListener;

    /// Copies the customer image to the output untouched
    struct CopyCompositor;

    #[async_trait]
    impl Compositor for CopyCompositor {
        async fn compose(
            &self,
            _template: &Path,
            image: &Path,
            output: &Path,
        ) -> Result<(), CompositorError> {
            tokio::fs::copy(image, output)
                .await
                .map_err(|source| CompositorError::Spawn {
                    program: "copy".to_string(),
                    source,
                })?;
            Ok(())
        }
    }

    struct Fixture {
        service: StandardExecutionService,
        base_url: String,
        tmp: tempfile::TempDir,
    }

    /// A live relay whose uploads dir also serves the customer image
    async fn fixture() -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let mockups = tmp.path().join("mockups");
        let uploads = tmp.path().join("uploads");
        std::fs::create_dir_all(mockups.join("poster/kids")).unwrap();
        std::fs::write(mockups.join("poster/kids/square.psd"), b"layers").unwrap();
        std::fs::create_dir_all(&uploads).unwrap();
        std::fs::write(uploads.join("art.jpg"), b"customer art").unwrap();

        let http_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let worker_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", http_listener.local_addr().unwrap());

        let mut config = RelayConfig::new(mockups);
        config.uploads_dir = uploads;
        config.public_url = base_url.clone();
        tokio::spawn(easel_relay::serve(
            AppState::new(config),
            http_listener,
            worker_listener,
        ));

        let service = StandardExecutionService::new(
            RelayClient::new(base_url.clone()),
            Arc::new(CopyCompositor),
            tmp.path().join("work"),
        );

        Fixture {
            service,
            base_url,
            tmp,
        }
    }

    fn job(fixture: &Fixture, image: &str, layout: Layout) -> Job {
        Job::new(
            &fixture.tmp.path().join("mockups"),
            format!("{}/uploads/{}", fixture.base_url, image),
            "poster".to_string(),
            "kids".to_string(),
            layout,
        )
    }

    #[tokio::test]
    async fn test_job_is_rendered_and_uploaded() {
        let fixture = fixture().await;
        let job = job(&fixture, "art.jpg", Layout::Square);

        let result_path = fixture.service.execute_job(&job).await.unwrap();
        assert_eq!(
            result_path,
            format!("{}/uploads/processed_{}.jpg", fixture.base_url, job.id)
        );

        let uploaded =
            std::fs::read(fixture.tmp.path().join("uploads").join(job.result_file_name())).unwrap();
        assert_eq!(uploaded, b"customer art");

        let leftovers = std::fs::read_dir(fixture.tmp.path().join("work"))
            .unwrap()
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_missing_template() {
        let fixture = fixture().await;
        let job = job(&fixture, "art.jpg", Layout::Portrait);

        let err = fixture.service.execute_job(&job).await.unwrap_err();
        assert!(matches!(err, ExecutionError::TemplateNotFound(_)));
        assert_eq!(
            err.to_string(),
            format!("Mockup file not found: {}", job.mockup_path)
        );
    }

    #[tokio::test]
    async fn test_failed_download_cleans_up() {
        let fixture = fixture().await;
        let job = job(&fixture, "missing.jpg", Layout::Square);

        let err = fixture.service.execute_job(&job).await.unwrap_err();
        assert!(matches!(err, ExecutionError::Download(_)));

        let leftovers = std::fs::read_dir(fixture.tmp.path().join("work"))
            .unwrap()
            .count();
        assert_eq!(leftovers, 0);
    }
}
