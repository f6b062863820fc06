//! The owned configuration store.
//!
//! [`SiteStore`] holds the active configuration. Renderers read it through
//! [`SiteStore::config`]; [`SiteStore::save`] and [`SiteStore::reset`] are the
//! only ways to change it.

use crate::{
    error::Result,
    loader::{ConfigSource, ResolvedConfig, resolve_configuration, standard_providers},
    persist::PersistedStore,
    types::SiteConfig,
};
use std::sync::Arc;
use url::Url;

pub struct SiteStore {
    config: SiteConfig,
    source: ConfigSource,
    persisted: Arc<dyn PersistedStore>,
}

impl std::fmt::Debug for SiteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteStore")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl SiteStore {
    pub fn new(resolved: ResolvedConfig, persisted: Arc<dyn PersistedStore>) -> Self {
        for warning in &resolved.warnings {
            tracing::warn!("{warning}");
        }
        Self {
            config: resolved.config,
            source: resolved.source,
            persisted,
        }
    }

    /// Resolve through the standard tiers and take ownership of the result.
    pub async fn load(remote: Option<Url>, persisted: Arc<dyn PersistedStore>) -> Self {
        let providers = standard_providers(remote, Arc::clone(&persisted));
        let resolved = resolve_configuration(&providers).await;
        Self::new(resolved, persisted)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Persist `config` locally and make it the active configuration.
    ///
    /// The in-memory configuration is only replaced once the write succeeded.
    pub fn save(&mut self, config: SiteConfig) -> Result<()> {
        let value = serde_json::to_value(&config)?;
        self.persisted.write(&value)?;
        self.config = config;
        self.source = ConfigSource::LocalPersisted;
        tracing::info!("Saved site config");
        Ok(())
    }

    /// Clear the persisted configuration and revert to the defaults.
    pub fn reset(&mut self) -> Result<()> {
        self.persisted.clear()?;
        self.config = SiteConfig::default();
        self.source = ConfigSource::Default;
        tracing::info!("Reset site config to defaults");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    fn memory_store() -> (SiteStore, Arc<MemoryStore>) {
        let blob = Arc::new(MemoryStore::default());
        let persisted: Arc<dyn PersistedStore> = Arc::<MemoryStore>::clone(&blob);
        let store = SiteStore::new(ResolvedConfig::defaults(), persisted);
        (store, blob)
    }

    #[test]
    fn test_save_persists_and_replaces() {
        let (mut store, blob) = memory_store();
        let mut config = SiteConfig::default();
        config.personal.name = "Jane Doe".into();

        store.save(config).unwrap();

        assert_eq!(store.config().personal.name, "Jane Doe");
        assert_eq!(store.source(), ConfigSource::LocalPersisted);
        let raw = blob.read().unwrap().unwrap();
        assert!(raw.contains("Jane Doe"));
    }

    #[test]
    fn test_reset_clears_and_reverts() {
        let (mut store, blob) = memory_store();
        let mut config = SiteConfig::default();
        config.footer.copyright = "Someone".into();
        store.save(config).unwrap();

        store.reset().unwrap();

        assert_eq!(store.config(), &SiteConfig::default());
        assert_eq!(store.source(), ConfigSource::Default);
        assert!(blob.read().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_saved_config_is_loaded_next_time() {
        let blob: Arc<dyn PersistedStore> = Arc::new(MemoryStore::default());
        let mut first = SiteStore::load(None, Arc::clone(&blob)).await;
        assert_eq!(first.source(), ConfigSource::Default);

        let mut config = first.config().clone();
        config.seo.site_title = "Saved Title".into();
        first.save(config).unwrap();

        let second = SiteStore::load(None, blob).await;
        assert_eq!(second.source(), ConfigSource::LocalPersisted);
        assert_eq!(second.config().seo.site_title, "Saved Title");
    }
}
