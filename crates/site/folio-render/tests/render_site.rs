use folio_config::loader::ResolvedConfig;
use folio_config::{ConfigSource, MemoryStore, PersistedStore, SiteConfig, SiteStore};
use folio_render::effects::{Carousel, RecordingEffects};
use folio_render::html::{parse, serialize};
use folio_render::interact::{ACTIVE, click};
use folio_render::render::{RenderContext, marker};
use folio_render::{Document, Selector, Site, render_all};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

const INDEX: &str = include_str!("fixtures/index.html");

fn site_with(store: Arc<dyn PersistedStore>) -> Site<RecordingEffects> {
    let store = SiteStore::new(ResolvedConfig::defaults(), store);
    Site::with_effects(store, parse(INDEX), RecordingEffects::default()).with_year(2025)
}

fn text_of(doc: &Document, name: &str) -> String {
    let id = doc.select_first(&marker(name)).unwrap();
    doc.text_content(id)
}

fn title(doc: &Document) -> String {
    let id = doc.select_first(&Selector::tag("title")).unwrap();
    doc.text_content(id)
}

#[test]
fn test_full_render_is_idempotent() {
    let mut site = site_with(Arc::new(MemoryStore::default()));

    let first = site.render();
    let html_after_first = serialize(site.document());
    let handlers_after_first = site.document().handler_count();

    let second = site.render();
    assert_eq!(serialize(site.document()), html_after_first);
    assert_eq!(site.document().handler_count(), handlers_after_first);
    assert_eq!(first, second);
    assert!(first.failures().next().is_none());
}

#[test]
fn test_handlers_fire_once_per_click_after_rerender() {
    let mut site = site_with(Arc::new(MemoryStore::default()));
    site.render();
    site.render();
    site.render();

    let doc = site.document_mut();
    let accordion = doc.select_first(&marker("servicesAccordion")).unwrap();
    let header = doc
        .select_first_within(accordion, &Selector::class("dsn-accordion-header"))
        .unwrap();
    assert_eq!(click(doc, header).unwrap(), 1);
    let item = doc.parent(header).unwrap();
    assert!(doc.has_class(item, ACTIVE));
}

#[test]
fn test_accordion_single_open_scenario() {
    let mut doc = parse(INDEX);
    let mut config = SiteConfig::default();
    config.problems.truncate(3);
    assert_eq!(config.problems.len(), 3);

    let mut fx = RecordingEffects::default();
    render_all(&config, &mut RenderContext::new(&mut doc, &mut fx, 2025));

    let container = doc.select_first(&marker("problems")).unwrap();
    let items = doc.select_within(container, &Selector::class("dsn-accordion-item"));
    let headers = doc.select_within(container, &Selector::class("dsn-accordion-header"));
    assert_eq!(items.len(), 3);

    click(&mut doc, headers[1]).unwrap();
    assert!(doc.has_class(items[1], ACTIVE));

    click(&mut doc, headers[0]).unwrap();
    assert!(doc.has_class(items[0], ACTIVE));
    assert!(!doc.has_class(items[1], ACTIVE));
    assert!(!doc.has_class(items[2], ACTIVE));
}

#[test]
fn test_seo_title_keeps_page_name() {
    let mut doc = parse(&INDEX.replace("Home | YourBrand", "Contact | OldBrand"));
    let mut config = SiteConfig::default();
    config.seo.site_title = "NewBrand".into();

    let mut fx = RecordingEffects::default();
    render_all(&config, &mut RenderContext::new(&mut doc, &mut fx, 2025));
    assert_eq!(title(&doc), "Contact | NewBrand");
}

#[test]
fn test_carousels_and_reveal_hooks() {
    let mut site = site_with(Arc::new(MemoryStore::default()));
    site.render();

    let kinds: Vec<_> = site.effects().carousels.iter().map(|(_, k)| *k).collect();
    assert_eq!(kinds, vec![Carousel::HeroSlider, Carousel::Testimonials]);
    assert_eq!(site.effects().reveal_refreshes, 1);
}

#[test]
fn test_images_bind_by_element_kind() {
    let mut site = site_with(Arc::new(MemoryStore::default()));
    site.render();
    let images = site.config().images.clone();
    let doc = site.document();

    let about = doc
        .select_first(&Selector::attr("data-template-image", "aboutImage"))
        .unwrap();
    assert_eq!(
        doc.style_property(about, "background-image"),
        Some(format!("url('{}')", images["aboutImage"]))
    );

    let parallax = doc
        .select_first(&Selector::attr("data-template-image", "parallaxImage1"))
        .unwrap();
    assert_eq!(doc.attr(parallax, "src"), Some(images["parallaxImage1"].as_str()));
}

#[test]
fn test_light_theme_toggles_without_accumulating() {
    let mut site = site_with(Arc::new(MemoryStore::default()));
    let mut config = site.config().clone();
    config.branding.light_theme = true;

    site.save(config.clone()).unwrap();
    site.save(config).unwrap();
    let body = site.document().select_first(&Selector::tag("body")).unwrap();
    assert_eq!(site.document().attr(body, "class"), Some("home v-light"));

    site.reset().unwrap();
    assert_eq!(site.document().attr(body, "class"), Some("home"));
}

#[test]
fn test_image_url_with_semicolon_is_idempotent() {
    let mut site = site_with(Arc::new(MemoryStore::default()));
    let mut config = site.config().clone();
    config.images.insert(
        "aboutImage".into(),
        "https://cdn.test/img.jpg?a=1;b=http://x.test/y".into(),
    );
    site.save(config.clone()).unwrap();
    let first = serialize(site.document());
    site.render();
    assert_eq!(serialize(site.document()), first);

    // Rendering a page that was already rendered changes nothing either.
    let mut doc = parse(&first);
    let mut effects = RecordingEffects::default();
    let report = render_all(&config, &mut RenderContext::new(&mut doc, &mut effects, 2025));
    assert!(report.failures().next().is_none());
    assert_eq!(serialize(&doc), first);

    let about = doc
        .select_first(&Selector::attr("data-template-image", "aboutImage"))
        .unwrap();
    assert_eq!(
        doc.style_property(about, "background-image").as_deref(),
        Some("url('https://cdn.test/img.jpg?a=1;b=http://x.test/y')")
    );
}

#[test]
fn test_rerenders_do_not_grow_the_document() {
    let mut site = site_with(Arc::new(MemoryStore::default()));
    site.render();
    let capacity = site.document().capacity();

    let mut config = site.config().clone();
    config.personal.first_name = "Jane".into();
    for _ in 0..5 {
        site.save(config.clone()).unwrap();
        site.reset().unwrap();
    }
    assert_eq!(site.document().capacity(), capacity);
}

#[test]
fn test_save_and_reset_rerender() {
    let blob = Arc::new(MemoryStore::default());
    let persisted: Arc<dyn PersistedStore> = Arc::<MemoryStore>::clone(&blob);
    let mut site = site_with(persisted);
    site.render();
    let default_first_name = text_of(site.document(), "firstName");

    let mut config = site.config().clone();
    config.personal.first_name = "Jane".into();
    config.contact.phone = "+1 555 0100".into();
    config.contact.calendly_url = "https://calendly.com/jane".into();
    config.footer.copyright = "Jane Doe".into();
    let report = site.save(config).unwrap();
    assert!(report.failures().next().is_none());

    assert_eq!(site.source(), ConfigSource::LocalPersisted);
    assert_eq!(text_of(site.document(), "firstName"), "Jane");
    assert_eq!(
        text_of(site.document(), "copyright"),
        "\u{a9} 2025 Jane Doe. All Rights Reserved."
    );
    let item = site
        .document()
        .select_first(&Selector::class("contact-info-item"))
        .unwrap();
    assert!(!site.document().has_class(item, "hidden"));
    assert!(blob.read().unwrap().unwrap().contains("calendly.com/jane"));

    site.reset().unwrap();
    assert_eq!(site.source(), ConfigSource::Default);
    assert_eq!(text_of(site.document(), "firstName"), default_first_name);
    assert!(site.document().has_class(item, "hidden"));
    assert!(blob.read().unwrap().is_none());
}

#[test]
fn test_persisted_partial_config_renders_over_defaults() {
    let partial = json!({"personal": {"name": "Jane Doe"}, "services": []});
    let resolved = ResolvedConfig::from_partial(&partial, ConfigSource::LocalPersisted);
    let store = SiteStore::new(resolved, Arc::new(MemoryStore::default()));
    let mut site = Site::new(store, parse(INDEX)).with_year(2025);
    site.render();

    let defaults = SiteConfig::default();
    let grid = site.document().select_first(&marker("servicesGrid")).unwrap();
    assert_eq!(
        site.document()
            .select_within(grid, &Selector::class("service-card"))
            .len(),
        defaults.services.len()
    );
    assert_eq!(site.config().personal.title, defaults.personal.title);
}

#[test]
fn test_script_content_survives_round_trip() {
    let mut site = site_with(Arc::new(MemoryStore::default()));
    site.render();
    let html = serialize(site.document());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("window.innerWidth < 768 && document.body"));
}

#[tokio::test]
async fn test_saved_config_survives_reload() {
    let blob: Arc<dyn PersistedStore> = Arc::new(MemoryStore::default());

    let store = SiteStore::load(None, Arc::clone(&blob)).await;
    let mut site = Site::new(store, parse(INDEX)).with_year(2025);
    let mut config = site.config().clone();
    config.personal.short_bio = "Saved bio".into();
    site.save(config).unwrap();

    let store = SiteStore::load(None, blob).await;
    let mut reloaded = Site::new(store, parse(INDEX)).with_year(2025);
    reloaded.render();
    assert_eq!(reloaded.source(), ConfigSource::LocalPersisted);
    assert_eq!(text_of(reloaded.document(), "shortBio"), "Saved bio");
}
