//! Core configuration: price list plus doctor roster.
//!
//! ```json
//! {
//!   "pricing": { "prices": { "Vaccination": 45 }, "joining_fee": 10 },
//!   "doctors": [ { "id": "doc-1", "name": "Dr. Anna Patel", "specialty": "GP",
//!                  "services": ["General Consultation"], "available_times": ["Morning"] } ]
//! }
//! ```
//!
//! Either section may be omitted; it then takes the built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::directory::{default_roster, Directory, DirectoryError};
use crate::models::Doctor;
use crate::pricing::{PricingConfig, PricingEngine};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid directory: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the booking core needs at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CoreConfig {
    pub pricing: PricingConfig,
    pub doctors: Vec<Doctor>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            doctors: default_roster(),
        }
    }
}

impl CoreConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: CoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!(
            "Loaded configuration from {} ({} prices, {} doctors)",
            path.display(),
            config.pricing.prices.len(),
            config.doctors.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.pricing.validate()?;
        Directory::new(self.doctors.clone())?;
        Ok(())
    }

    /// Build the engine and directory this configuration describes.
    pub fn into_parts(self) -> ConfigResult<(PricingEngine, Directory)> {
        self.pricing.validate()?;
        let directory = Directory::new(self.doctors)?;
        Ok((PricingEngine::new(self.pricing), directory))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
