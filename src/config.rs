use std::collections::HashMap;
use std::env;

use crate::error::{Error, Result};
use crate::storage::constants::DEFAULT_AUTH_URL;

/// Connection settings for a Selectel cloud storage container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectelConfig {
    pub username: String,
    pub password: String,
    pub container: String,
    /// Public base url to publish file urls under, instead of the storage url.
    pub container_url: Option<String>,
    pub auth_url: String,
}

impl SelectelConfig {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        container: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            container: container.into(),
            container_url: None,
            auth_url: DEFAULT_AUTH_URL.to_string(),
        }
    }

    /// Build from driver registration options. Recognizes `username`, `password`,
    /// `container` and `container_url`; anything else is ignored.
    pub fn from_options(options: &HashMap<String, String>) -> Result<Self> {
        let required = |key: &str| {
            options
                .get(key)
                .cloned()
                .ok_or_else(|| Error::MissingConfig {
                    key: key.to_string(),
                })
        };

        let mut config = Self::new(
            required("username")?,
            required("password")?,
            required("container")?,
        );
        config.container_url = options.get("container_url").cloned();
        Ok(config)
    }
}

// Helper function to reduce repetitive environment variable loading logic.
fn get_env_var(primary_key: &str, secondary_key: &str) -> Result<String> {
    env::var(primary_key)
        .or_else(|_| env::var(secondary_key))
        .map_err(|_| Error::MissingEnvVar {
            key: format!("{primary_key} or {secondary_key}"),
        })
}

/// Load Selectel configuration from environment variables
pub fn load_selectel_config() -> Result<SelectelConfig> {
    let username = get_env_var("STORAGE_USERNAME", "SELECTEL_USERNAME")?;
    let password = get_env_var("STORAGE_PASSWORD", "SELECTEL_PASSWORD")?;
    let container = get_env_var("STORAGE_CONTAINER", "SELECTEL_CONTAINER")?;

    let mut config = SelectelConfig::new(username, password, container);
    config.container_url = get_env_var("STORAGE_CONTAINER_URL", "SELECTEL_CONTAINER_URL").ok();
    if let Ok(auth_url) = get_env_var("STORAGE_AUTH_URL", "SELECTEL_AUTH_URL") {
        config.auth_url = auth_url;
    }
    Ok(config)
}
