/// Collector the beacon posts to unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://rebrandmyself.net/api/t";

/// Environment variable overriding the collector endpoint.
pub const ENDPOINT_ENV: &str = "FOLIO_BEACON_ENDPOINT";

/// Viewport width assumed when none is known.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Beacon configuration.
#[derive(Clone, Debug)]
pub struct BeaconConfig {
    endpoint: String,
    origin: String,
    referrer: String,
    viewport_width: u32,
    do_not_track: bool,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        Self {
            endpoint,
            origin: String::new(),
            referrer: String::new(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            do_not_track: false,
        }
    }
}

impl BeaconConfig {
    /// Configuration from defaults and `FOLIO_BEACON_ENDPOINT`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Site origin reported with every batch, e.g. `https://jane.example`.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    #[must_use]
    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = referrer.into();
        self
    }

    #[must_use]
    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    /// Honour a do-not-track preference. When set, nothing is ever sent.
    #[must_use]
    pub fn with_do_not_track(mut self, dnt: bool) -> Self {
        self.do_not_track = dnt;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn referrer(&self) -> &str {
        &self.referrer
    }

    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    #[must_use]
    pub fn do_not_track(&self) -> bool {
        self.do_not_track
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: &'static str,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, val: &str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe { std::env::set_var(key, val) };
            Self { key, prev }
        }

        fn remove(key: &'static str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe { std::env::remove_var(key) };
            Self { key, prev }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.prev {
                Some(v) => unsafe { std::env::set_var(self.key, v) },
                None => unsafe { std::env::remove_var(self.key) },
            }
        }
    }

    #[test]
    #[serial(env)]
    fn test_default_endpoint() {
        let _guard = EnvGuard::remove(ENDPOINT_ENV);
        assert_eq!(BeaconConfig::new().endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    #[serial(env)]
    fn test_endpoint_from_env() {
        let _guard = EnvGuard::set(ENDPOINT_ENV, " http://127.0.0.1:9/collect ");
        assert_eq!(
            BeaconConfig::new().endpoint(),
            "http://127.0.0.1:9/collect"
        );
    }

    #[test]
    #[serial(env)]
    fn test_blank_env_endpoint_is_ignored() {
        let _guard = EnvGuard::set(ENDPOINT_ENV, "   ");
        assert_eq!(BeaconConfig::new().endpoint(), DEFAULT_ENDPOINT);
    }
}
