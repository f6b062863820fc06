use crate::config::BeaconConfig;
use crate::error::BeaconError;
use crate::event::{Device, Event, Payload, now_millis};
use reqwest::header::CONTENT_TYPE;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How often [`Beacon::spawn_flush_timer`] flushes by default.
pub const FLUSH_INTERVAL: Duration = Duration::from_secs(5);

/// Batching event sender.
///
/// Events queue in memory and leave in one POST per flush. Delivery is best
/// effort: a failed batch is dropped, never retried.
#[derive(Debug)]
pub struct Beacon {
    http: reqwest::Client,
    config: BeaconConfig,
    page: String,
    queue: Mutex<Vec<Event>>,
}

impl Beacon {
    /// Beacon for one page path.
    pub fn new(config: BeaconConfig, page: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            page: page.into(),
            queue: Mutex::new(vec![]),
        }
    }

    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub const fn config(&self) -> &BeaconConfig {
        &self.config
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn is_enabled(&self) -> bool {
        !self.config.do_not_track()
    }

    /// Queue an event. Dropped when do-not-track is set.
    pub fn enqueue(&self, event: Event) {
        if !self.is_enabled() {
            return;
        }
        match self.queue.lock() {
            Ok(mut queue) => queue.push(event),
            Err(_) => tracing::debug!("beacon queue poisoned; dropping event"),
        }
    }

    /// Queue a pageview for this beacon's page.
    pub fn pageview(&self) {
        self.enqueue(Event::pageview(&self.page, now_millis()));
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().map_or(0, |q| q.len())
    }

    /// Drain the queue and send it. Returns the number of events delivered.
    ///
    /// An empty queue sends nothing.
    pub async fn try_flush(&self) -> Result<usize, BeaconError> {
        let events = std::mem::take(&mut *self.queue.lock().map_err(|_| BeaconError::Poisoned)?);
        if events.is_empty() || !self.is_enabled() {
            return Ok(0);
        }
        let count = events.len();
        let payload = Payload {
            origin: self.config.origin().to_string(),
            referrer: self.config.referrer().to_string(),
            device: Device::from_width(self.config.viewport_width()),
            events,
        };
        let body = serde_json::to_string(&payload)?;

        let response = self
            .http
            .post(self.config.endpoint())
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BeaconError::Status(response.status().as_u16()));
        }
        Ok(count)
    }

    /// Like [`Beacon::try_flush`], but failures are logged and the batch dropped.
    pub async fn flush(&self) -> usize {
        match self.try_flush().await {
            Ok(sent) => sent,
            Err(e) => {
                tracing::debug!("beacon flush failed: {e}");
                0
            }
        }
    }

    /// Flush every `period` until the task is aborted.
    pub fn spawn_flush_timer(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let beacon = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                beacon.flush().await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_do_not_track_drops_events() {
        let beacon = Beacon::new(BeaconConfig::new().with_do_not_track(true), "/");
        beacon.pageview();
        assert!(!beacon.is_enabled());
        assert_eq!(beacon.pending(), 0);
    }

    #[tokio::test]
    async fn test_empty_flush_sends_nothing() {
        let beacon = Beacon::new(
            BeaconConfig::new().with_endpoint("http://127.0.0.1:9/never"),
            "/",
        );
        assert_eq!(beacon.try_flush().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_swallowed() {
        let beacon = Beacon::new(
            BeaconConfig::new().with_endpoint("http://127.0.0.1:9/never"),
            "/",
        );
        beacon.pageview();
        assert_eq!(beacon.flush().await, 0);
        assert_eq!(beacon.pending(), 0);
    }
}
