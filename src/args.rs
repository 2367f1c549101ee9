use clap::Parser;
use first_link::config::GameConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "first-link")]
#[command(about = "Follows the first article link of each page to see whether it reaches a target page")]
#[command(version)]
pub struct Args {
    /// Page title to start from (prompted for when omitted)
    pub title: Option<String>,

    /// Page title to reach
    #[arg(short, long)]
    pub target: Option<String>,

    /// Maximum number of navigation steps
    #[arg(short, long)]
    pub max_iterations: Option<usize>,

    /// Origin to fetch articles from
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Layer command-line flags over the file (or default) configuration.
    ///
    /// `env_base_url` sits between the file and the `--base-url` flag.
    pub fn apply(&self, mut config: GameConfig, env_base_url: Option<String>) -> GameConfig {
        if let Some(base_url) = env_base_url.filter(|url| !url.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(target) = &self.target {
            config.target = target.clone();
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        config
    }
}
