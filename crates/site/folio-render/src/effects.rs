//! Presentational collaborators driven by the renderers.
//!
//! Sliders and scroll-reveal animations live outside this crate. Renderers
//! notify them through [`Effects`] after injecting markup that they animate.

use crate::dom::NodeId;

/// Carousel flavours mounted on regenerated containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carousel {
    /// Full-width fading hero slider.
    HeroSlider,
    /// Three-up service card slider.
    CardSlider,
    /// Single-item fading testimonial slider.
    Testimonials,
}

impl std::fmt::Display for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::HeroSlider => "hero-slider",
            Self::CardSlider => "card-slider",
            Self::Testimonials => "testimonials",
        })
    }
}

/// Hooks invoked by the render pipeline. Every hook defaults to a no-op.
pub trait Effects {
    /// A container was regenerated and its carousel must be (re)mounted.
    fn mount_carousel(&mut self, _container: NodeId, _kind: Carousel) {}

    /// A render pass finished; reveal animations should pick up new elements.
    fn refresh_reveal(&mut self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoEffects;

impl Effects for NoEffects {}

/// Logs every hook at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEffects;

impl Effects for TracingEffects {
    fn mount_carousel(&mut self, container: NodeId, kind: Carousel) {
        tracing::debug!(?container, "mount {kind} carousel");
    }

    fn refresh_reveal(&mut self) {
        tracing::debug!("refresh reveal animations");
    }
}

/// Records hook calls for assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingEffects {
    pub carousels: Vec<(NodeId, Carousel)>,
    pub reveal_refreshes: usize,
}

impl Effects for RecordingEffects {
    fn mount_carousel(&mut self, container: NodeId, kind: Carousel) {
        self.carousels.push((container, kind));
    }

    fn refresh_reveal(&mut self) {
        self.reveal_refreshes += 1;
    }
}
