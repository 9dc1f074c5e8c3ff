//! CLI configuration

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the relay HTTP API
    pub relay_url: String,
}
