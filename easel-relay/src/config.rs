//! Relay configuration
//!
//! Listen addresses, filesystem roots and channel settings. Values come from
//! environment variables with defaults suited to a single local machine.

use std::path::PathBuf;
use std::time::Duration;

/// How long a submission waits for the worker before failing
pub const JOB_TIMEOUT: Duration = Duration::from_secs(120);

/// Relay configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address of the HTTP API (e.g., "0.0.0.0:3001")
    pub http_addr: String,

    /// Address the worker connects to over WebSocket (e.g., "0.0.0.0:8081")
    pub worker_addr: String,

    /// Root of the mockup template tree (`<category>/<subcategory>/<layout>.psd`)
    pub mockups_path: PathBuf,

    /// Directory where rendered mockups are uploaded and served from
    pub uploads_dir: PathBuf,

    /// Base URL used to build the public URL of uploaded files
    pub public_url: String,

    /// Maximum accepted request body for uploads
    pub max_upload_bytes: usize,

    /// How often the connected worker is pinged
    pub heartbeat_interval: Duration,

    /// Deadline of every dispatched job. Not read from the environment.
    pub job_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults for the given template root
    pub fn new(mockups_path: PathBuf) -> Self {
        Self {
            http_addr: "0.0.0.0:3001".to_string(),
            worker_addr: "0.0.0.0:8081".to_string(),
            mockups_path,
            uploads_dir: PathBuf::from("uploads"),
            public_url: "http://localhost:3001".to_string(),
            max_upload_bytes: 50 * 1024 * 1024,
            heartbeat_interval: Duration::from_secs(30),
            job_timeout: JOB_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognised environment variables (all optional):
    /// - EASEL_HTTP_ADDR (default: 0.0.0.0:3001)
    /// - EASEL_WORKER_ADDR (default: 0.0.0.0:8081)
    /// - EASEL_MOCKUPS_PATH (default: ./mockups)
    /// - EASEL_UPLOADS_DIR (default: ./uploads)
    /// - EASEL_PUBLIC_URL (default: http://localhost:3001)
    /// - EASEL_MAX_UPLOAD_BYTES (default: 52428800)
    /// - EASEL_HEARTBEAT_INTERVAL (seconds, default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("EASEL_HTTP_ADDR") {
            config.http_addr = addr;
        }

        if let Ok(addr) = std::env::var("EASEL_WORKER_ADDR") {
            config.worker_addr = addr;
        }

        if let Ok(path) = std::env::var("EASEL_MOCKUPS_PATH") {
            config.mockups_path = PathBuf::from(path);
        }

        if let Ok(dir) = std::env::var("EASEL_UPLOADS_DIR") {
            config.uploads_dir = PathBuf::from(dir);
        }

        if let Ok(url) = std::env::var("EASEL_PUBLIC_URL") {
            config.public_url = url;
        }

        if let Ok(raw) = std::env::var("EASEL_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = raw
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("EASEL_MAX_UPLOAD_BYTES is not a number: {}", e))?;
        }

        if let Ok(raw) = std::env::var("EASEL_HEARTBEAT_INTERVAL") {
            let secs = raw
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("EASEL_HEARTBEAT_INTERVAL is not a number: {}", e))?;
            config.heartbeat_interval = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Public URL of an uploaded file
    ///
    /// The name is percent-encoded as a single path segment, so names such
    /// as `a#b.jpg` stay fetchable.
    pub fn upload_url(&self, file_name: &str) -> String {
        format!(
            "{}/uploads/{}",
            self.public_url.trim_end_matches('/'),
            urlencoding::encode(file_name)
        )
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.http_addr.is_empty() {
            anyhow::bail!("http_addr cannot be empty");
        }

        if self.worker_addr.is_empty() {
            anyhow::bail!("worker_addr cannot be empty");
        }

        if self.http_addr == self.worker_addr {
            anyhow::bail!("http_addr and worker_addr must differ");
        }

        if !self.public_url.starts_with("http://") && !self.public_url.starts_with("https://") {
            anyhow::bail!("public_url must start with http:// or https://");
        }

        if self.max_upload_bytes == 0 {
            anyhow::bail!("max_upload_bytes must be greater than 0");
        }

        if self.heartbeat_interval.as_secs() == 0 {
            anyhow::bail!("heartbeat_interval must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from("mockups"))
    }
}
