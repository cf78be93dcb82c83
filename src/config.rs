use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::{self, StoreError};

pub const APP_ID: &str = "org.seajee.gtodo";
pub const CONFIG_VERSION: u64 = 1;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct GtodoConfig {
    pub debug_logging: bool,
    /// Overrides `~/.gtodo` when set.
    pub storage_file: Option<PathBuf>,
}

impl GtodoConfig {
    /// Where the list is loaded from and saved to.
    pub fn storage_path(&self) -> Result<PathBuf, StoreError> {
        match &self.storage_file {
            Some(path) => Ok(path.clone()),
            None => store::default_path(),
        }
    }
}
