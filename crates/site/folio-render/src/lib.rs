//! Renders a folio site configuration into HTML pages.
//!
//! Pages are parsed into a [`Document`](dom::Document). Elements carrying a
//! `data-template` or `data-template-image` attribute are rewritten from the
//! configuration; everything else in the page is left untouched.
//!
//! # Example
//! ```
//! use folio_config::SiteConfig;
//! use folio_render::effects::NoEffects;
//! use folio_render::render::RenderContext;
//! use folio_render::{html, pipeline};
//!
//! let mut doc = html::parse(r#"<title>Home</title><h1 data-template="name">Name</h1>"#);
//! let mut config = SiteConfig::default();
//! config.personal.name = "Jane Doe".into();
//! config.seo.site_title = "Jane Doe Consulting".into();
//!
//! let mut effects = NoEffects;
//! let mut ctx = RenderContext::new(&mut doc, &mut effects, 2025);
//! let report = pipeline::render_all(&config, &mut ctx);
//! assert!(report.failures().next().is_none());
//!
//! let page = html::serialize(&doc);
//! assert!(page.contains("<title>Home | Jane Doe Consulting</title>"));
//! assert!(page.contains(r#"<h1 data-template="name">Jane Doe</h1>"#));
//! ```

pub mod dom;
pub mod effects;
pub mod html;
pub mod interact;
pub mod markup;
pub mod pipeline;
pub mod render;
pub mod site;

pub use dom::{Document, DomError, NodeId, Selector};
pub use pipeline::{RenderReport, Section, SectionOutcome, render_all};
pub use render::RenderError;
pub use site::Site;
