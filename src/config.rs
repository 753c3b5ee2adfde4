//! Configuration for the record store collaborator.
//!
//! Connection parameters for the document store holding raw generation
//! records. Kept as an explicit struct so store credentials never leak
//! into the statistics engine's function signatures.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridStatError, Result};

/// Environment variable names for store configuration
const ENV_HOST: &str = "GRIDSTAT_STORE_HOST";
const ENV_ACCESS_KEY: &str = "GRIDSTAT_STORE_ACCESS_KEY";
const ENV_DATABASE_ID: &str = "GRIDSTAT_STORE_DATABASE_ID";
const ENV_CONTAINER_ID: &str = "GRIDSTAT_STORE_CONTAINER_ID";

/// Connection parameters for the generation record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store endpoint host
    pub host: String,
    /// Access key for the store account
    pub access_key: String,
    /// Database identifier
    pub database_id: String,
    /// Container holding the generation records
    pub container_id: String,
}

impl StoreConfig {
    pub fn new(
        host: impl Into<String>,
        access_key: impl Into<String>,
        database_id: impl Into<String>,
        container_id: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            access_key: access_key.into(),
            database_id: database_id.into(),
            container_id: container_id.into(),
        }
    }

    /// Load store configuration from GRIDSTAT_STORE_* environment variables
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name).map_err(|_| {
                GridStatError::configuration(format!("missing environment variable: {}", name))
            })
        };

        let config = Self {
            host: read(ENV_HOST)?,
            access_key: read(ENV_ACCESS_KEY)?,
            database_id: read(ENV_DATABASE_ID)?,
            container_id: read(ENV_CONTAINER_ID)?,
        };
        config.validate()?;

        debug!(
            host = %config.host,
            database_id = %config.database_id,
            container_id = %config.container_id,
            "Loaded store configuration from environment"
        );
        Ok(config)
    }

    /// Validate that no connection parameter is empty
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("host", &self.host),
            ("access_key", &self.access_key),
            ("database_id", &self.database_id),
            ("container_id", &self.container_id),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(GridStatError::configuration(format!(
                    "store configuration field '{}' is empty",
                    name
                )));
            }
        }
        Ok(())
    }
}
