//! The default configuration store.
//!
//! Every section a renderer reads is populated here with placeholder content.
//! This is the shape authority for merging: [`default_value`] is the JSON form
//! that partial configurations are merged against.

use crate::types::{
    Audit, Branding, ContactInfo, FocusAreas, Footer, HeroSlide, PersonalInfo, PhilosophyItem,
    Problem, ProcessStep, Seo, Service, SiteConfig, SocialLinks, Solution, Testimonial,
    TimelineEntry,
};
use serde_json::Value;
use std::collections::BTreeMap;

const SERVICE_DETAIL: &str = "Detailed description of this service, what's included, and the \
                              value it provides to clients.";
const PHASE_DETAIL: &str = "Detailed description of what happens in this phase of your process.";
const CAREER_DETAIL: &str = "Describe this phase of your career journey, what you learned, and \
                             key achievements.";
const VALUE_DETAIL: &str = "Brief explanation of this value and how it guides your work.";

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            contact: ContactInfo::default(),
            social: SocialLinks::default(),
            branding: Branding::default(),
            hero_slides: hero_slides(),
            services: services(),
            solutions: solutions(),
            focus_areas: FocusAreas::default(),
            timeline: timeline(),
            process: process(),
            testimonials: testimonials(),
            philosophy: philosophy(),
            problems: problems(),
            gallery: [
                "photo-1517245386807-bb43f82c33c4",
                "photo-1522202176988-66273c2fd55f",
                "photo-1552664730-d307ca884978",
                "photo-1519389950473-47ba0277781c",
            ]
            .iter()
            .map(|id| unsplash(id, 600))
            .collect(),
            images: images(),
            audit: Audit::default(),
            seo: Seo::default(),
            footer: Footer::default(),
        }
    }
}

/// The default configuration as a JSON value.
pub fn default_value() -> Value {
    serde_json::to_value(SiteConfig::default()).unwrap_or_else(|e| {
        tracing::error!("default configuration failed to serialize: {e}");
        Value::Object(serde_json::Map::new())
    })
}

fn unsplash(id: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{id}?w={width}")
}

fn hero_slides() -> Vec<HeroSlide> {
    let slide = |id: &str, subtitle: &str, title: &str, description: &str, button: (&str, &str)| {
        HeroSlide {
            image: unsplash(id, 1920),
            subtitle: subtitle.into(),
            title: title.into(),
            description: description.into(),
            button_text: button.0.into(),
            button_link: button.1.into(),
        }
    };
    vec![
        slide(
            "photo-1519389950473-47ba0277781c",
            "Your Identity",
            "I'm a Creator",
            "Brief description of this aspect of your identity or expertise.",
            ("Learn More", "about.html"),
        ),
        slide(
            "photo-1552664730-d307ca884978",
            "Your Work",
            "I Build Solutions",
            "Describe what you create or the problems you solve.",
            ("View Services", "services.html"),
        ),
        slide(
            "photo-1522202176988-66273c2fd55f",
            "Your Values",
            "I'm Collaborative",
            "Share a core value or approach that defines your work.",
            ("See My Process", "process.html"),
        ),
        slide(
            "photo-1517245386807-bb43f82c33c4",
            "Your Passion",
            "I Love What I Do",
            "What drives and motivates you in your work.",
            ("Get In Touch", "contact.html"),
        ),
    ]
}

fn services() -> Vec<Service> {
    [
        (
            "fas fa-search",
            "Discovery & Research",
            "Understanding your needs through thorough research and analysis.",
        ),
        (
            "fas fa-pencil-ruler",
            "Strategy & Planning",
            "Creating comprehensive plans aligned with your goals.",
        ),
        (
            "fas fa-cogs",
            "Implementation",
            "Executing plans with precision and attention to detail.",
        ),
        (
            "fas fa-chart-line",
            "Optimization",
            "Continuously improving results through data-driven decisions.",
        ),
        (
            "fas fa-users",
            "Training & Support",
            "Empowering you and your team with knowledge and ongoing assistance.",
        ),
        (
            "fas fa-headset",
            "Ongoing Partnership",
            "Long-term collaboration to ensure continued success.",
        ),
    ]
    .into_iter()
    .map(|(icon, title, short_desc)| Service {
        icon: icon.into(),
        title: title.into(),
        short_desc: short_desc.into(),
        full_desc: SERVICE_DETAIL.into(),
        features: (1..=4)
            .map(|n| format!("Feature or deliverable {n}"))
            .collect(),
    })
    .collect()
}

fn solutions() -> Vec<Solution> {
    (1..=6)
        .map(|n| Solution {
            title: format!("Industry or Niche {n}"),
            description: "How you help clients in this specific industry or niche.".into(),
            features: vec![
                "Specific solution or approach".into(),
                "Another capability".into(),
                "Additional service aspect".into(),
            ],
        })
        .collect()
}

fn timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            period: "Early Career".into(),
            title: "The Foundation Years".into(),
            description: CAREER_DETAIL.into(),
        },
        TimelineEntry {
            period: "Growth Phase".into(),
            title: "Building Expertise".into(),
            description: CAREER_DETAIL.into(),
        },
        TimelineEntry {
            period: "Current".into(),
            title: "Where I Am Now".into(),
            description: "Describe your current focus, what you're working on, and your vision \
                          for the future."
                .into(),
        },
    ]
}

fn process() -> Vec<ProcessStep> {
    [
        ("Discovery", "Understanding your needs"),
        ("Planning", "Creating the roadmap"),
        ("Execution", "Bringing plans to life"),
        ("Delivery", "Launching and supporting"),
    ]
    .into_iter()
    .map(|(title, short_desc)| ProcessStep {
        title: title.into(),
        short_desc: short_desc.into(),
        full_desc: PHASE_DETAIL.into(),
        deliverables: (1..=3)
            .map(|n| format!("Deliverable or activity {n}"))
            .collect(),
    })
    .collect()
}

fn testimonials() -> Vec<Testimonial> {
    [
        "An amazing testimonial from a satisfied client describing the value and results you \
         delivered.",
        "Another powerful testimonial that builds credibility and trust with potential clients.",
        "A third testimonial highlighting a different aspect of your work or expertise.",
    ]
    .into_iter()
    .map(|quote| Testimonial {
        quote: quote.into(),
        author: "Client Name".into(),
        role: "Job Title".into(),
        company: "Company Name".into(),
    })
    .collect()
}

fn philosophy() -> Vec<PhilosophyItem> {
    ["fas fa-lightbulb", "fas fa-users", "fas fa-chart-line"]
        .into_iter()
        .enumerate()
        .map(|(i, icon)| PhilosophyItem {
            icon: icon.into(),
            title: format!("Core Value {}", i + 1),
            description: VALUE_DETAIL.into(),
        })
        .collect()
}

fn problems() -> Vec<Problem> {
    [
        (
            "Common pain point or challenge your clients face",
            "How you address and solve this problem for them.",
        ),
        ("Another common challenge", "Your approach to solving it."),
        ("Third problem statement", "The solution you provide."),
        ("Fourth problem statement", "The solution you provide."),
    ]
    .into_iter()
    .map(|(problem, solution)| Problem {
        problem: problem.into(),
        solution: solution.into(),
    })
    .collect()
}

fn images() -> BTreeMap<String, String> {
    [
        ("heroBackground", "photo-1519389950473-47ba0277781c", 1920),
        ("aboutImage", "photo-1507003211169-0a1dd7228f2d", 800),
        ("parallaxImage1", "photo-1497215728101-856f4ea42174", 1920),
        ("parallaxImage2", "photo-1553877522-43269d4ea984", 1920),
    ]
    .into_iter()
    .map(|(slot, id, width)| (slot.to_string(), unsplash(id, width)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_list_section_is_populated() {
        let config = SiteConfig::default();
        assert_eq!(config.hero_slides.len(), 4);
        assert_eq!(config.services.len(), 6);
        assert_eq!(config.solutions.len(), 6);
        assert_eq!(config.focus_areas.areas.len(), 6);
        assert_eq!(config.timeline.len(), 3);
        assert_eq!(config.process.len(), 4);
        assert_eq!(config.testimonials.len(), 3);
        assert_eq!(config.philosophy.len(), 3);
        assert_eq!(config.problems.len(), 4);
        assert_eq!(config.gallery.len(), 4);
        assert_eq!(config.images.len(), 4);
        assert_eq!(config.audit.benefits.len(), 4);
    }

    #[test]
    fn test_default_value_round_trips() {
        let value = default_value();
        let back: SiteConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, SiteConfig::default());
    }

    #[test]
    fn test_required_text_fields_are_non_empty() {
        let config = SiteConfig::default();
        assert!(!config.personal.name.is_empty());
        assert!(!config.personal.title.is_empty());
        assert!(!config.branding.site_name.is_empty());
        assert!(!config.seo.site_title.is_empty());
        assert!(!config.footer.copyright.is_empty());
        assert!(
            config
                .services
                .iter()
                .all(|s| !s.title.is_empty() && s.features.len() == 4)
        );
    }

    #[test]
    fn test_full_bio_has_two_paragraphs() {
        let bio = SiteConfig::default().personal.full_bio;
        assert_eq!(bio.split("\n\n").count(), 2);
    }
}
