//! A page bound to its configuration store.

use crate::dom::Document;
use crate::effects::{Effects, NoEffects};
use crate::pipeline::{RenderReport, render_all};
use crate::render::RenderContext;
use chrono::Datelike;
use folio_config::{ConfigSource, SiteConfig, SiteStore, StoreError};

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Owns the configuration store and the document it renders into.
///
/// [`Site::save`] and [`Site::reset`] change the configuration and re-render
/// the whole document.
#[derive(Debug)]
pub struct Site<E: Effects = NoEffects> {
    store: SiteStore,
    document: Document,
    effects: E,
    year: i32,
}

impl Site<NoEffects> {
    pub fn new(store: SiteStore, document: Document) -> Self {
        Self::with_effects(store, document, NoEffects)
    }
}

impl<E: Effects> Site<E> {
    pub fn with_effects(store: SiteStore, document: Document, effects: E) -> Self {
        Self {
            store,
            document,
            effects,
            year: current_year(),
        }
    }

    /// Pin the copyright year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn render(&mut self) -> RenderReport {
        let mut ctx = RenderContext::new(&mut self.document, &mut self.effects, self.year);
        render_all(self.store.config(), &mut ctx)
    }

    /// Persist `config`, make it active and re-render.
    ///
    /// Nothing is re-rendered when persisting fails.
    pub fn save(&mut self, config: SiteConfig) -> Result<RenderReport, StoreError> {
        self.store.save(config)?;
        Ok(self.render())
    }

    /// Clear the persisted configuration, revert to defaults and re-render.
    pub fn reset(&mut self) -> Result<RenderReport, StoreError> {
        self.store.reset()?;
        Ok(self.render())
    }

    pub fn config(&self) -> &SiteConfig {
        self.store.config()
    }

    pub fn source(&self) -> ConfigSource {
        self.store.source()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for dispatching clicks.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
