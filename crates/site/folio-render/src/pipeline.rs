//! The full render pass.
//!
//! Sections render in a fixed order. A failing section is logged and recorded
//! in the [`RenderReport`]; the remaining sections still render.

use crate::render::{
    RenderContext, RenderError, audit, branding, collections, focus, hero, media, profile, seo,
    services,
};
use folio_config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Branding,
    Personal,
    Contact,
    Social,
    HeroSlides,
    Services,
    FocusAreas,
    Solutions,
    Timeline,
    Process,
    Testimonials,
    Philosophy,
    Problems,
    Gallery,
    Images,
    Audit,
    Seo,
    Footer,
}

impl Section {
    /// Render order.
    pub const ALL: [Self; 18] = [
        Self::Branding,
        Self::Personal,
        Self::Contact,
        Self::Social,
        Self::HeroSlides,
        Self::Services,
        Self::FocusAreas,
        Self::Solutions,
        Self::Timeline,
        Self::Process,
        Self::Testimonials,
        Self::Philosophy,
        Self::Problems,
        Self::Gallery,
        Self::Images,
        Self::Audit,
        Self::Seo,
        Self::Footer,
    ];

    /// Configuration key of the section.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Branding => "branding",
            Self::Personal => "personal",
            Self::Contact => "contact",
            Self::Social => "social",
            Self::HeroSlides => "heroSlides",
            Self::Services => "services",
            Self::FocusAreas => "focusAreas",
            Self::Solutions => "solutions",
            Self::Timeline => "timeline",
            Self::Process => "process",
            Self::Testimonials => "testimonials",
            Self::Philosophy => "philosophy",
            Self::Problems => "problems",
            Self::Gallery => "gallery",
            Self::Images => "images",
            Self::Audit => "audit",
            Self::Seo => "seo",
            Self::Footer => "footer",
        }
    }

    /// Render this section's slice of `config`.
    pub fn render(
        self,
        config: &SiteConfig,
        ctx: &mut RenderContext<'_>,
    ) -> Result<usize, RenderError> {
        match self {
            Self::Branding => branding::render(&config.branding, ctx),
            Self::Personal => profile::render_personal(&config.personal, ctx),
            Self::Contact => profile::render_contact(&config.contact, ctx),
            Self::Social => profile::render_social(&config.social, ctx),
            Self::HeroSlides => hero::render(&config.hero_slides, ctx),
            Self::Services => services::render(&config.services, ctx),
            Self::FocusAreas => focus::render(&config.focus_areas, ctx),
            Self::Solutions => collections::render_solutions(&config.solutions, ctx),
            Self::Timeline => collections::render_timeline(&config.timeline, ctx),
            Self::Process => collections::render_process(&config.process, ctx),
            Self::Testimonials => collections::render_testimonials(&config.testimonials, ctx),
            Self::Philosophy => collections::render_philosophy(&config.philosophy, ctx),
            Self::Problems => collections::render_problems(&config.problems, ctx),
            Self::Gallery => collections::render_gallery(&config.gallery, ctx),
            Self::Images => media::render(&config.images, ctx),
            Self::Audit => audit::render(&config.audit, &config.contact, ctx),
            Self::Seo => seo::render_seo(&config.seo, ctx),
            Self::Footer => seo::render_footer(&config.footer, ctx),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// Number of placeholders rewritten.
    Rendered(usize),
    Failed(RenderError),
}

/// Outcome of one render pass, in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub sections: Vec<(Section, SectionOutcome)>,
}

impl RenderReport {
    pub fn touched(&self) -> usize {
        self.sections
            .iter()
            .map(|(_, outcome)| match outcome {
                SectionOutcome::Rendered(n) => *n,
                SectionOutcome::Failed(_) => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = (Section, &RenderError)> {
        self.sections.iter().filter_map(|(section, outcome)| match outcome {
            SectionOutcome::Failed(e) => Some((*section, e)),
            SectionOutcome::Rendered(_) => None,
        })
    }

    pub fn outcome(&self, section: Section) -> Option<&SectionOutcome> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, outcome)| outcome)
    }
}

/// Render every section, then refresh reveal animations once.
pub fn render_all(config: &SiteConfig, ctx: &mut RenderContext<'_>) -> RenderReport {
    let mut report = RenderReport::default();
    for section in Section::ALL {
        let outcome = match section.render(config, ctx) {
            Ok(touched) => {
                tracing::trace!(%section, touched, "rendered section");
                SectionOutcome::Rendered(touched)
            }
            Err(e) => {
                tracing::warn!(%section, "section failed to render: {e}");
                SectionOutcome::Failed(e)
            }
        };
        report.sections.push((section, outcome));
    }
    ctx.effects.refresh_reveal();
    tracing::debug!(touched = report.touched(), "render pass complete");
    report
}
