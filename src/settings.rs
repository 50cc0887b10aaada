use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::ScanError;

pub const ENV_PREFIX: &str = "SCAN";
pub const DEFAULT_FENCE_PATH: &str = "README.md";

/// Runtime settings; `SCAN_FENCE_PATH` and `SCAN_PHONE_INPUT` override the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub fence_path: PathBuf,
    #[serde(default)]
    pub phone_input: Option<PathBuf>,
}

impl Settings {
    pub fn load() -> Result<Self, ScanError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ScanError> {
        let settings = Config::builder()
            .set_default("fence_path", DEFAULT_FENCE_PATH)?
            .add_source(env)
            .build()?;
        Ok(settings.try_deserialize::<Settings>()?)
    }
}
