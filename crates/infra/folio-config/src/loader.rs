//! Tiered configuration loader.
//!
//! The loading process:
//! 1. Fetch the remote `site-config.json` (cache-busted)
//! 2. Otherwise read the locally persisted blob
//! 3. Merge the first hit against the defaults, or use a copy of the defaults
//! 4. Deserialize into a typed [`SiteConfig`], one section at a time if needed
//! 5. Run advisory validation
//!
//! Lookup failures never surface: each tier that fails falls through to the
//! next, and the defaults always succeed.

use crate::{
    defaults::default_value,
    merge::merge_with_defaults,
    persist::PersistedStore,
    types::SiteConfig,
    validation::{AdvisoryWarning, validate},
};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Filename of the remote configuration document.
pub const REMOTE_FILE: &str = "site-config.json";

/// Where the active configuration came from. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigSource {
    RemoteResource,
    LocalPersisted,
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::RemoteResource => "remote-resource",
            Self::LocalPersisted => "local-persisted",
            Self::Default => "default",
        };
        f.write_str(s)
    }
}

/// One source tier. Returns a partial configuration or nothing.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// The source tag recorded when this provider wins.
    fn source(&self) -> ConfigSource;

    /// Look up a configuration. Any failure is `None`.
    async fn provide(&self) -> Option<Value>;
}

/// Fetches a JSON document over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    http: reqwest::Client,
    url: Url,
}

impl RemoteProvider {
    pub fn new(url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    /// The resource URL with a `v=<unix millis>` query parameter appended.
    pub fn cache_busted_url(&self) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("v", &chrono::Utc::now().timestamp_millis().to_string());
        url
    }
}

#[async_trait]
impl ConfigProvider for RemoteProvider {
    fn source(&self) -> ConfigSource {
        ConfigSource::RemoteResource
    }

    async fn provide(&self) -> Option<Value> {
        let url = self.cache_busted_url();
        let response = match self.http.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::info!("No remote config at {}: {e}", self.url);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::info!("Remote config {} returned {status}", self.url);
            return None;
        }

        let body: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Remote config {} is not valid JSON: {e}", self.url);
                return None;
            }
        };

        if has_required_sections(&body) {
            Some(body)
        } else {
            tracing::warn!(
                "Remote config {} lacks personal/branding sections, ignoring",
                self.url
            );
            None
        }
    }
}

/// Reads the locally persisted blob.
#[derive(Clone)]
pub struct PersistedProvider {
    store: Arc<dyn PersistedStore>,
}

impl PersistedProvider {
    pub fn new(store: Arc<dyn PersistedStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ConfigProvider for PersistedProvider {
    fn source(&self) -> ConfigSource {
        ConfigSource::LocalPersisted
    }

    async fn provide(&self) -> Option<Value> {
        let raw = match self.store.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Could not read persisted config: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(v @ Value::Object(_)) => Some(v),
            Ok(_) => {
                tracing::warn!("Persisted config root is not a JSON object, ignoring");
                None
            }
            Err(e) => {
                tracing::warn!("Persisted config is not valid JSON, ignoring: {e}");
                None
            }
        }
    }
}

/// Whether a remote document has non-empty `personal` and `branding` sections.
pub fn has_required_sections(doc: &Value) -> bool {
    let non_empty = |key: &str| {
        doc.get(key)
            .and_then(Value::as_object)
            .is_some_and(|m| !m.is_empty())
    };
    non_empty("personal") && non_empty("branding")
}

/// The standard tiers: remote resource (when a URL is given), then persisted.
pub fn standard_providers(
    remote: Option<Url>,
    persisted: Arc<dyn PersistedStore>,
) -> Vec<Box<dyn ConfigProvider>> {
    let mut providers: Vec<Box<dyn ConfigProvider>> = Vec::with_capacity(2);
    if let Some(url) = remote {
        providers.push(Box::new(RemoteProvider::new(url)));
    }
    providers.push(Box::new(PersistedProvider::new(persisted)));
    providers
}

/// Try providers in order; the first that yields a configuration wins.
///
/// Providers after the winner are not consulted.
pub async fn first_available(
    providers: &[Box<dyn ConfigProvider>],
) -> Option<(Value, ConfigSource)> {
    for provider in providers {
        if let Some(value) = provider.provide().await {
            return Some((value, provider.source()));
        }
        tracing::debug!("config source {} unavailable", provider.source());
    }
    None
}

/// Result of resolving the active configuration.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The merged, total configuration.
    pub config: SiteConfig,

    /// The tier it came from.
    pub source: ConfigSource,

    /// Advisory warnings from deserialization and validation.
    pub warnings: Vec<AdvisoryWarning>,
}

impl ResolvedConfig {
    /// The default configuration store, tagged as such.
    pub fn defaults() -> Self {
        let config = SiteConfig::default();
        let warnings = validate(&config);
        Self {
            config,
            source: ConfigSource::Default,
            warnings,
        }
    }

    /// Merge a partial configuration against the defaults.
    pub fn from_partial(partial: &Value, source: ConfigSource) -> Self {
        let merged = merge_with_defaults(&default_value(), partial);
        let (config, mut warnings) = into_site_config(&merged);
        warnings.extend(validate(&config));
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Resolve the active configuration. Never fails.
pub async fn resolve_configuration(providers: &[Box<dyn ConfigProvider>]) -> ResolvedConfig {
    let resolved = match first_available(providers).await {
        Some((partial, source)) => ResolvedConfig::from_partial(&partial, source),
        None => ResolvedConfig::defaults(),
    };
    tracing::info!("Config loaded from {}", resolved.source);
    resolved
}

/// Deserialize a merged document into a typed config.
///
/// A section that fails to deserialize is replaced by its default and
/// reported, so one malformed section cannot take the others with it.
pub fn into_site_config(merged: &Value) -> (SiteConfig, Vec<AdvisoryWarning>) {
    if let Ok(config) = serde_json::from_value::<SiteConfig>(merged.clone()) {
        return (config, vec![]);
    }

    let mut config = SiteConfig::default();
    let mut warnings = vec![];
    let Some(map) = merged.as_object() else {
        return (config, warnings);
    };

    macro_rules! section {
        ($field:ident, $key:literal) => {
            if let Some(v) = map.get($key) {
                match serde_json::from_value(v.clone()) {
                    Ok(parsed) => config.$field = parsed,
                    Err(e) => {
                        tracing::warn!("Malformed section '{}', using defaults: {e}", $key);
                        warnings.push(AdvisoryWarning {
                            code: "section.malformed",
                            path: $key.into(),
                            message: format!("Section could not be read, defaults used: {e}"),
                        });
                    }
                }
            }
        };
    }

    section!(personal, "personal");
    section!(contact, "contact");
    section!(social, "social");
    section!(branding, "branding");
    section!(hero_slides, "heroSlides");
    section!(services, "services");
    section!(solutions, "solutions");
    section!(focus_areas, "focusAreas");
    section!(timeline, "timeline");
    section!(process, "process");
    section!(testimonials, "testimonials");
    section!(philosophy, "philosophy");
    section!(problems, "problems");
    section!(gallery, "gallery");
    section!(images, "images");
    section!(audit, "audit");
    section!(seo, "seo");
    section!(footer, "footer");

    (config, warnings)
}
