//! Section visibility timing.

use crate::event::Event;
use std::collections::HashMap;

/// Measures how long named sections stay visible.
///
/// A section that becomes visible again before it was left keeps its first
/// start time. Durations are rounded to whole seconds and zero-second visits
/// produce no event.
#[derive(Debug, Default)]
pub struct SectionTracker {
    page: String,
    visible_since: HashMap<String, i64>,
}

impl SectionTracker {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            visible_since: HashMap::new(),
        }
    }

    /// Section scrolled into view at `now` (unix millis).
    pub fn enter(&mut self, name: &str, now: i64) {
        self.visible_since.entry(name.to_string()).or_insert(now);
    }

    /// Section left the view. Returns its `section` event, if any.
    pub fn leave(&mut self, name: &str, now: i64) -> Option<Event> {
        let since = self.visible_since.remove(name)?;
        self.event(name, since, now)
    }

    /// Close every open section, e.g. when the page is hidden.
    pub fn drain(&mut self, now: i64) -> Vec<Event> {
        let mut open: Vec<_> = self.visible_since.drain().collect();
        open.sort();
        open.into_iter()
            .filter_map(|(name, since)| self.event(&name, since, now))
            .collect()
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.visible_since.contains_key(name)
    }

    fn event(&self, name: &str, since: i64, now: i64) -> Option<Event> {
        let secs = u64::try_from((now - since + 500) / 1000).ok()?;
        (secs > 0).then(|| Event::section(&self.page, now, name, secs))
    }
}
