//! Configuration types for a folio site.
//!
//! The root type is [`SiteConfig`]. Each field is one content section: either a
//! record of named fields, or a list of items with a fixed shape. Field names
//! serialize in `camelCase` so the JSON document matches the page markers.
//!
//! `SiteConfig::default()` (see [`crate::defaults`]) is the default
//! configuration store: every section and every field a renderer reads is
//! present.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration for a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub personal: PersonalInfo,
    pub contact: ContactInfo,
    pub social: SocialLinks,
    pub branding: Branding,
    pub hero_slides: Vec<HeroSlide>,
    pub services: Vec<Service>,
    pub solutions: Vec<Solution>,
    pub focus_areas: FocusAreas,
    pub timeline: Vec<TimelineEntry>,
    pub process: Vec<ProcessStep>,
    pub testimonials: Vec<Testimonial>,
    pub philosophy: Vec<PhilosophyItem>,
    pub problems: Vec<Problem>,
    /// Gallery image URLs.
    pub gallery: Vec<String>,
    /// Named image slots, keyed by the `data-template-image` marker value.
    pub images: BTreeMap<String, String>,
    pub audit: Audit,
    pub seo: Seo,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub tagline: String,
    pub short_bio: String,
    /// Paragraphs separated by a blank line.
    pub full_bio: String,
    pub years_experience: String,
    pub location: String,
    pub timezone: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: "Your Name".into(),
            first_name: "Your".into(),
            last_name: "Name".into(),
            title: "Your Professional Title".into(),
            tagline: "Your compelling tagline goes here".into(),
            short_bio: "A brief 1-2 sentence description of who you are and what you do.".into(),
            full_bio: "A longer bio that tells your story. This can be multiple paragraphs \
                       describing your background, experience, and what drives you professionally.\
                       \n\nInclude your unique value proposition and what makes you different \
                       from others in your field."
                .into(),
            years_experience: "10+".into(),
            location: "Your City, Country".into(),
            timezone: "EST".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    /// Optional. Phone links stay hidden while this is empty.
    pub phone: String,
    pub website: String,
    /// Optional booking URL. When set, the booking embed replaces the audit form.
    pub calendly_url: String,
    pub response_time: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "hello@yourdomain.com".into(),
            phone: String::new(),
            website: "https://yourdomain.com".into(),
            calendly_url: String::new(),
            response_time: "Usually within 24 hours".into(),
        }
    }
}

/// Social profile URLs. Empty entries are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
    pub github: String,
    pub instagram: String,
    pub youtube: String,
    pub facebook: String,
    pub dribbble: String,
    pub behance: String,
}

impl SocialLinks {
    /// Platforms in render order, paired with their icon class and URL.
    pub fn platforms(&self) -> [(&'static str, &'static str, &str); 8] {
        [
            ("linkedin", "fab fa-linkedin-in", &self.linkedin),
            ("twitter", "fab fa-twitter", &self.twitter),
            ("github", "fab fa-github", &self.github),
            ("instagram", "fab fa-instagram", &self.instagram),
            ("youtube", "fab fa-youtube", &self.youtube),
            ("facebook", "fab fa-facebook-f", &self.facebook),
            ("dribbble", "fab fa-dribbble", &self.dribbble),
            ("behance", "fab fa-behance", &self.behance),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Branding {
    pub site_name: String,
    /// Leave empty to render a text logo from `site_name`.
    pub logo_url: String,
    pub logo_dark_url: String,
    pub favicon_url: String,
    pub colors: ColorScheme,
    pub light_theme: bool,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            site_name: "YourBrand".into(),
            logo_url: String::new(),
            logo_dark_url: String::new(),
            favicon_url: String::new(),
            colors: ColorScheme::default(),
            light_theme: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
}

impl ColorScheme {
    /// Theme variable names paired with their configured values.
    pub fn variables(&self) -> [(&'static str, &str); 6] {
        [
            ("--primary-color", &self.primary),
            ("--secondary-color", &self.secondary),
            ("--accent-color", &self.accent),
            ("--text-color", &self.text),
            ("--text-muted", &self.text_muted),
            ("--border-color", &self.border),
        ]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: "#000000".into(),
            secondary: "#090909".into(),
            accent: "#c5a47e".into(),
            text: "#ffffff".into(),
            text_muted: "#999999".into(),
            border: "rgba(255, 255, 255, 0.1)".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSlide {
    pub image: String,
    pub subtitle: String,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub short_desc: String,
    pub full_desc: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Solution {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusAreas {
    pub subheading: String,
    pub heading: String,
    pub tagline: String,
    pub areas: Vec<FocusArea>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusArea {
    pub category: String,
    pub title: String,
    /// Optional card background.
    pub image: String,
}

impl Default for FocusAreas {
    fn default() -> Self {
        let ordinals = ["First", "Second", "Third", "Fourth", "Fifth", "Sixth"];
        Self {
            subheading: "Where We Can Help".into(),
            heading: "Areas of Expertise".into(),
            tagline: "Specialized guidance available • On-site or remote • Tailored to your needs"
                .into(),
            areas: ordinals
                .iter()
                .enumerate()
                .map(|(i, ordinal)| FocusArea {
                    category: format!("AREA {}", i + 1),
                    title: format!("{ordinal} Focus Area"),
                    image: String::new(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessStep {
    pub title: String,
    pub short_desc: String,
    pub full_desc: String,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    /// Optional; appended to the role when present.
    pub company: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PhilosophyItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Problem {
    pub problem: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Audit {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub duration: String,
    pub benefits: Vec<AuditBenefit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditBenefit {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Default for Audit {
    fn default() -> Self {
        let benefit = |icon: &str, title: &str, description: &str| AuditBenefit {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        };
        Self {
            title: "Free Consultation".into(),
            subtitle: "Discovery Call".into(),
            description: "Start with a complimentary consultation to discuss your needs and \
                          explore how we can work together."
                .into(),
            duration: "30-45 minutes".into(),
            benefits: vec![
                benefit(
                    "fas fa-search",
                    "Needs Assessment",
                    "Understanding your current situation and goals.",
                ),
                benefit(
                    "fas fa-lightbulb",
                    "Initial Insights",
                    "Preliminary ideas and recommendations.",
                ),
                benefit(
                    "fas fa-route",
                    "Next Steps",
                    "Clear path forward if we're a good fit.",
                ),
                benefit(
                    "fas fa-comments",
                    "No Obligation",
                    "Honest conversation with no pressure.",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Seo {
    /// Appended to each page's own title segment.
    pub site_title: String,
    pub site_description: String,
    pub keywords: String,
    /// Optional social sharing image.
    pub og_image: String,
}

impl Default for Seo {
    fn default() -> Self {
        Self {
            site_title: "Your Name - Professional Title".into(),
            site_description: "Meta description for search engines (150-160 characters).".into(),
            keywords: "keyword1, keyword2, keyword3".into(),
            og_image: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub tagline: String,
    pub copyright: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            tagline: "Brief tagline or mission statement for the footer.".into(),
            copyright: "Your Name or Company".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes_camel_case() {
        let json = serde_json::to_string_pretty(&SiteConfig::default()).unwrap();
        assert!(json.contains("\"heroSlides\""));
        assert!(json.contains("\"focusAreas\""));
        assert!(json.contains("\"textMuted\""));
        assert!(json.contains("\"calendlyUrl\""));
        assert!(!json.contains("hero_slides"));
    }

    #[test]
    fn test_partial_item_deserializes_with_defaults() {
        let json = r#"{"title": "Audit", "icon": "fas fa-check"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.title, "Audit");
        assert!(service.features.is_empty());
    }

    #[test]
    fn test_social_platform_order() {
        let social = SocialLinks {
            github: "https://github.com/me".into(),
            ..SocialLinks::default()
        };
        let keys: Vec<_> = social.platforms().iter().map(|(k, _, _)| *k).collect();
        assert_eq!(keys[0], "linkedin");
        assert_eq!(keys[7], "behance");
        assert_eq!(social.platforms()[2].2, "https://github.com/me");
    }

    #[test]
    fn test_color_variables_cover_every_color() {
        let colors = ColorScheme::default();
        let vars = colors.variables();
        assert_eq!(vars.len(), 6);
        assert_eq!(vars[2], ("--accent-color", "#c5a47e"));
    }
}
