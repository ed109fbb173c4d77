//! Driver registration: turning named disk configurations into adapters.

use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SelectelConfig;
use crate::error::{Error, Result};
use crate::storage::SelectelAdapter;
use crate::storage::auth::ApiClient;
use crate::storage::constants::SELECTEL_DRIVER;
use crate::storage::contract::FilesystemAdapter;

/// A named disk: which driver to use and the options handed to it.
#[derive(Debug, Clone, Default)]
pub struct DiskConfig {
    pub driver: String,
    pub options: HashMap<String, String>,
}

impl DiskConfig {
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            options: HashMap::new(),
        }
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Builds an adapter out of a disk configuration.
pub type DriverFactory = Box<
    dyn Fn(DiskConfig) -> BoxFuture<'static, Result<Arc<dyn FilesystemAdapter>>> + Send + Sync,
>;

/// Registry of storage drivers by name.
#[derive(Default)]
pub struct StorageManager {
    drivers: HashMap<String, DriverFactory>,
}

impl StorageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for `driver`.
    pub fn extend<F>(&mut self, driver: impl Into<String>, factory: F)
    where
        F: Fn(DiskConfig) -> BoxFuture<'static, Result<Arc<dyn FilesystemAdapter>>>
            + Send
            + Sync
            + 'static,
    {
        self.drivers.insert(driver.into(), Box::new(factory));
    }

    pub fn has_driver(&self, driver: &str) -> bool {
        self.drivers.contains_key(driver)
    }

    /// Resolve a disk configuration into a ready adapter.
    pub async fn disk(&self, config: DiskConfig) -> Result<Arc<dyn FilesystemAdapter>> {
        log::debug!("resolve disk driver={}", config.driver);
        let factory = self
            .drivers
            .get(&config.driver)
            .ok_or_else(|| Error::UnsupportedProvider {
                provider: config.driver.clone(),
            })?;
        factory(config).await
    }
}

/// Authenticate, resolve the container and wrap it in an adapter.
#[cfg(feature = "swift")]
pub async fn connect(config: &SelectelConfig) -> Result<crate::storage::SelectelFs> {
    log::debug!(
        "connect container={} container_url={:?}",
        config.container,
        config.container_url
    );
    let token = ApiClient::new(&config.username, &config.password)
        .with_auth_url(&config.auth_url)
        .authenticate()
        .await?;

    let storage = crate::storage::auth::CloudStorage::new(token);
    let mut container = storage.container(&config.container)?;
    if let Some(url) = &config.container_url {
        container.set_url(url);
    }

    Ok(SelectelAdapter::new(container))
}

/// Install the `selectel` driver.
#[cfg(feature = "swift")]
pub fn register(manager: &mut StorageManager) {
    manager.extend(
        SELECTEL_DRIVER,
        |disk: DiskConfig| -> BoxFuture<'static, Result<Arc<dyn FilesystemAdapter>>> {
            Box::pin(async move {
                let config = SelectelConfig::from_options(&disk.options)?;
                let adapter: Arc<dyn FilesystemAdapter> = Arc::new(connect(&config).await?);
                Ok::<_, Error>(adapter)
            })
        },
    );
}
