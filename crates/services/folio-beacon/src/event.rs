//! Wire types. Keys are single letters to keep beacons small.

use serde::Serialize;

/// Unix time in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Pageview,
    Section,
    PdfDownload,
    QrOpen,
    CtaClick,
}

/// Call-to-action categories reported with `cta_click`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaAction {
    BookCall,
    Contact,
    Social,
}

/// One tracked event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(rename = "e")]
    pub kind: EventKind,
    /// Page path.
    #[serde(rename = "p")]
    pub page: String,
    /// Unix millis.
    #[serde(rename = "t")]
    pub at: i64,
    /// Section name, for `section` events.
    #[serde(rename = "s", skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Whole seconds visible, for `section` events.
    #[serde(rename = "dur", skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u64>,
    #[serde(rename = "a", skip_serializing_if = "Option::is_none")]
    pub action: Option<CtaAction>,
}

impl Event {
    fn bare(kind: EventKind, page: &str, at: i64) -> Self {
        Self {
            kind,
            page: page.to_string(),
            at,
            section: None,
            duration_secs: None,
            action: None,
        }
    }

    pub fn pageview(page: &str, at: i64) -> Self {
        Self::bare(EventKind::Pageview, page, at)
    }

    pub fn section(page: &str, at: i64, name: &str, duration_secs: u64) -> Self {
        Self {
            section: Some(name.to_string()),
            duration_secs: Some(duration_secs),
            ..Self::bare(EventKind::Section, page, at)
        }
    }

    pub fn pdf_download(page: &str, at: i64) -> Self {
        Self::bare(EventKind::PdfDownload, page, at)
    }

    pub fn qr_open(page: &str, at: i64) -> Self {
        Self::bare(EventKind::QrOpen, page, at)
    }

    pub fn cta_click(page: &str, at: i64, action: CtaAction) -> Self {
        Self {
            action: Some(action),
            ..Self::bare(EventKind::CtaClick, page, at)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Mobile,
    Tablet,
    Desktop,
}

impl Device {
    /// Device class for a viewport width in CSS pixels.
    pub fn from_width(width: u32) -> Self {
        match width {
            0..768 => Self::Mobile,
            768..1024 => Self::Tablet,
            _ => Self::Desktop,
        }
    }
}

/// One delivered batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    #[serde(rename = "o")]
    pub origin: String,
    #[serde(rename = "r")]
    pub referrer: String,
    #[serde(rename = "d")]
    pub device: Device,
    #[serde(rename = "v")]
    pub events: Vec<Event>,
}
