pub mod config;
pub mod panel_ui;
pub mod prompts;
pub mod reviews;
pub mod submit;

use color_eyre::Result;
use hype_meter_config::{Config, CredentialStore, PathManager};
use hype_meter_core::ReviewRepository;
use std::path::{Path, PathBuf};

/// Where this invocation reads its config and credentials from
pub struct AppContext {
    config_file: PathBuf,
    credentials_file: PathBuf,
}

impl AppContext {
    pub fn resolve(config_override: Option<PathBuf>) -> Self {
        let path_manager = PathManager::default();
        Self {
            config_file: config_override.unwrap_or_else(|| path_manager.config_file()),
            credentials_file: path_manager.credentials_file(),
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn credentials_file(&self) -> &Path {
        &self.credentials_file
    }

    pub fn load_config(&self) -> Result<Config> {
        if !self.config_file.exists() {
            return Err(color_eyre::eyre::eyre!(
                "Configuration file not found at {}. Run 'hype-meter config init' to create it.",
                self.config_file.display()
            ));
        }
        Config::load_from_file(&self.config_file)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", self.config_file.display(), e))
    }

    pub fn load_credentials(&self) -> Result<CredentialStore> {
        let mut cred_store = CredentialStore::new(self.credentials_file.clone());
        cred_store.load().map_err(|e| {
            color_eyre::eyre::eyre!("Failed to load credentials from {}: {}", self.credentials_file.display(), e)
        })?;
        Ok(cred_store)
    }

    pub fn open_repository(&self, config: &Config) -> Result<ReviewRepository> {
        let credentials = self.load_credentials()?;
        let store = hype_meter_store::create_store(config, &credentials)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to set up review store: {}", e))?;
        Ok(ReviewRepository::new(store))
    }
}
