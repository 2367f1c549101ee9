use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for a single navigation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Origin that article paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Title of the page the run is trying to reach
    #[serde(default = "default_target")]
    pub target: String,

    /// Maximum number of loop passes before giving up
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for base_url
fn default_base_url() -> String {
    "https://en.wikipedia.org".to_string()
}

/// Default target page
fn default_target() -> String {
    "Philosophy".to_string()
}

/// Default iteration ceiling
fn default_max_iterations() -> usize {
    500
}

/// Default request timeout
fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Wikipedia Philosophy Game/1.0)".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            target: default_target(),
            max_iterations: default_max_iterations(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
