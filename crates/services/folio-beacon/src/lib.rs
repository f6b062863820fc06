//! Privacy-friendly engagement beacon for folio sites.
//!
//! No cookies and no identifiers: a batch carries the site origin, the
//! referrer, a coarse device class and the queued events. With do-not-track
//! set the beacon records nothing.
//!
//! ```no_run
//! # async fn run() {
//! use folio_beacon::{Beacon, BeaconConfig};
//! use std::sync::Arc;
//!
//! let beacon = Arc::new(Beacon::new(
//!     BeaconConfig::new().with_origin("https://jane.example"),
//!     "/index.html",
//! ));
//! beacon.pageview();
//! let timer = beacon.spawn_flush_timer(folio_beacon::client::FLUSH_INTERVAL);
//! // ...
//! timer.abort();
//! beacon.flush().await;
//! # }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod tracker;

pub use crate::client::Beacon;
pub use crate::config::BeaconConfig;
pub use crate::error::BeaconError;
pub use crate::event::{CtaAction, Device, Event, EventKind, Payload};
pub use crate::tracker::SectionTracker;
