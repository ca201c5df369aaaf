use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Optional JSON file overriding the built-in campaign metadata
    /// (CAMPAIGN_METADATA_PATH env var)
    pub metadata_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required; an unset or empty variable means "use the default".
    pub fn load() -> Result<Self> {
        let metadata_path = env::var("CAMPAIGN_METADATA_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { metadata_path })
    }

    /// Check that a configured metadata file actually exists.
    /// Call this before any operation that reads campaign metadata.
    pub fn require_metadata_file(&self) -> Result<()> {
        if let Some(path) = &self.metadata_path {
            if !path.exists() {
                anyhow::bail!(
                    "CAMPAIGN_METADATA_PATH points to {}, which does not exist.\n\
                     Unset it to use the built-in campaign metadata.",
                    path.display()
                );
            }
        }
        Ok(())
    }
}
