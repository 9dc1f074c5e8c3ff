//! Worker configuration
//!
//! Where the relay lives, where scratch files go, which program renders
//! the mockups, and how persistently to reconnect.

use std::path::PathBuf;
use std::time::Duration;

/// Arguments passed to the compositor when none are configured
pub const DEFAULT_COMPOSITOR_ARGS: &str = "{template} {image} {output}";

#[derive(Debug, Clone)]
pub struct Config {
    /// Relay worker channel (e.g., "ws://localhost:8081")
    pub worker_url: String,

    /// Relay HTTP API, used for result uploads (e.g., "http://localhost:3001")
    pub relay_url: String,

    /// Scratch directory for downloaded images and rendered output
    pub work_dir: PathBuf,

    /// Program invoked to render a mockup
    pub compositor_program: String,

    /// Compositor arguments; `{template}`, `{image}` and `{output}` are substituted
    pub compositor_args: Vec<String>,

    /// Pause between reconnect attempts
    pub reconnect_delay: Duration,

    /// Consecutive failed reconnects tolerated before giving up
    pub max_reconnect_attempts: u32,
}

impl Config {
    pub fn new(compositor_program: String) -> Self {
        Self {
            worker_url: "ws://localhost:8081".to_string(),
            relay_url: "http://localhost:3001".to_string(),
            work_dir: std::env::temp_dir().join("easel"),
            compositor_program,
            compositor_args: split_args(DEFAULT_COMPOSITOR_ARGS),
            reconnect_delay: Duration::from_secs(3),
            max_reconnect_attempts: 5,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - EASEL_COMPOSITOR (required)
    /// - EASEL_COMPOSITOR_ARGS (optional, whitespace-separated)
    /// - EASEL_WORKER_URL (optional, default: ws://localhost:8081)
    /// - EASEL_RELAY_URL (optional, default: http://localhost:3001)
    /// - EASEL_WORK_DIR (optional, default: <temp dir>/easel)
    /// - EASEL_RECONNECT_DELAY (optional, seconds, default: 3)
    /// - EASEL_MAX_RECONNECT_ATTEMPTS (optional, default: 5)
    pub fn from_env() -> anyhow::Result<Self> {
        let compositor_program = std::env::var("EASEL_COMPOSITOR")
            .map_err(|_| anyhow::anyhow!("EASEL_COMPOSITOR environment variable not set"))?;

        let mut config = Self::new(compositor_program);

        if let Ok(args) = std::env::var("EASEL_COMPOSITOR_ARGS") {
            config.compositor_args = split_args(&args);
        }

        if let Ok(url) = std::env::var("EASEL_WORKER_URL") {
            config.worker_url = url;
        }

        if let Ok(url) = std::env::var("EASEL_RELAY_URL") {
            config.relay_url = url;
        }

        if let Ok(dir) = std::env::var("EASEL_WORK_DIR") {
            config.work_dir = PathBuf::from(dir);
        }

        config.reconnect_delay = std::env::var("EASEL_RECONNECT_DELAY")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(config.reconnect_delay);

        config.max_reconnect_attempts = std::env::var("EASEL_MAX_RECONNECT_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(config.max_reconnect_attempts);

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.compositor_program.trim().is_empty() {
            anyhow::bail!("compositor_program cannot be empty");
        }

        if !self.worker_url.starts_with("ws://") && !self.worker_url.starts_with("wss://") {
            anyhow::bail!("worker_url must start with ws:// or wss://");
        }

        if !self.relay_url.starts_with("http://") && !self.relay_url.starts_with("https://") {
            anyhow::bail!("relay_url must start with http:// or https://");
        }

        if self.reconnect_delay.is_zero() {
            anyhow::bail!("reconnect_delay must be greater than 0");
        }

        Ok(())
    }
}

fn split_args(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}
