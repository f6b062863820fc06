//! Advisory validation for SiteConfig.
//!
//! Validation is advisory: it produces warnings but never blocks rendering.
//! A site with a malformed color or link still renders every other section.

use crate::types::SiteConfig;

/// An advisory warning about a configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryWarning {
    /// Machine-readable warning code.
    pub code: &'static str,

    /// Human-readable warning message.
    pub message: String,

    /// JSON path to the problematic config field.
    pub path: String,
}

impl std::fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

/// Longest meta description search engines display in full.
pub const MAX_DESCRIPTION_LEN: usize = 160;

/// Validate a configuration and return advisory warnings.
pub fn validate(cfg: &SiteConfig) -> Vec<AdvisoryWarning> {
    let mut warnings = vec![];

    if !cfg.contact.email.contains('@') {
        warnings.push(AdvisoryWarning {
            code: "contact.email.invalid",
            path: "contact.email".into(),
            message: format!("Expected an email address, got: '{}'", cfg.contact.email),
        });
    }

    validate_optional_url(&cfg.contact.website, "contact.website", &mut warnings);
    validate_optional_url(&cfg.contact.calendly_url, "contact.calendlyUrl", &mut warnings);
    validate_optional_url(&cfg.branding.logo_url, "branding.logoUrl", &mut warnings);
    validate_optional_url(&cfg.branding.favicon_url, "branding.faviconUrl", &mut warnings);
    validate_optional_url(&cfg.seo.og_image, "seo.ogImage", &mut warnings);

    for (key, _, url) in cfg.social.platforms() {
        validate_optional_url(url, &format!("social.{key}"), &mut warnings);
    }
    for (i, slide) in cfg.hero_slides.iter().enumerate() {
        validate_optional_url(&slide.image, &format!("heroSlides[{i}].image"), &mut warnings);
    }
    for (i, url) in cfg.gallery.iter().enumerate() {
        validate_optional_url(url, &format!("gallery[{i}]"), &mut warnings);
    }
    for (slot, url) in &cfg.images {
        validate_optional_url(url, &format!("images.{slot}"), &mut warnings);
    }

    let colors = &cfg.branding.colors;
    let named = [
        ("primary", &colors.primary),
        ("secondary", &colors.secondary),
        ("accent", &colors.accent),
        ("text", &colors.text),
        ("textMuted", &colors.text_muted),
        ("border", &colors.border),
    ];
    for (name, value) in named {
        if !looks_like_color(value) {
            warnings.push(AdvisoryWarning {
                code: "branding.colors.invalid",
                path: format!("branding.colors.{name}"),
                message: format!("Unrecognized CSS color: '{value}'"),
            });
        }
    }

    if cfg.seo.site_title.trim().is_empty() {
        warnings.push(AdvisoryWarning {
            code: "seo.siteTitle.empty",
            path: "seo.siteTitle".into(),
            message: "Value cannot be empty".into(),
        });
    }

    let description_len = cfg.seo.site_description.chars().count();
    if description_len > MAX_DESCRIPTION_LEN {
        warnings.push(AdvisoryWarning {
            code: "seo.siteDescription.long",
            path: "seo.siteDescription".into(),
            message: format!(
                "Description is {description_len} characters; search engines truncate after {MAX_DESCRIPTION_LEN}"
            ),
        });
    }

    warnings
}

/// Empty is fine; anything else must be an http(s) URL or a relative path.
fn validate_optional_url(url: &str, path: &str, warnings: &mut Vec<AdvisoryWarning>) {
    if url.is_empty() {
        return;
    }
    let relative = !url.contains("://") && !url.contains(char::is_whitespace);
    if url.starts_with("http://") || url.starts_with("https://") || relative {
        return;
    }
    warnings.push(AdvisoryWarning {
        code: "url.invalid",
        path: path.to_string(),
        message: format!("Expected an http(s) URL or relative path, got: '{url}'"),
    });
}

fn looks_like_color(value: &str) -> bool {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let functional = ["rgb(", "rgba(", "hsl(", "hsla("];
    if functional.iter().any(|f| v.starts_with(f)) {
        return v.ends_with(')');
    }
    !v.is_empty() && v.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_warnings() {
        let warnings = validate(&SiteConfig::default());
        assert!(
            warnings.is_empty(),
            "Default config should have no warnings: {warnings:?}"
        );
    }

    #[test]
    fn test_invalid_email_warns() {
        let mut config = SiteConfig::default();
        config.contact.email = "nobody".into();
        let warnings = validate(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "contact.email.invalid");
    }

    #[test]
    fn test_bad_social_url_warns_with_path() {
        let mut config = SiteConfig::default();
        config.social.github = "ftp://github.com/me".into();
        let warnings = validate(&config);
        assert!(warnings.iter().any(|w| w.path == "social.github"));
    }

    #[test]
    fn test_relative_image_path_is_fine() {
        let mut config = SiteConfig::default();
        config
            .images
            .insert("aboutImage".into(), "assets/img/about.jpg".into());
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_invalid_color_warns() {
        let mut config = SiteConfig::default();
        config.branding.colors.accent = "#12345".into();
        let warnings = validate(&config);
        assert!(
            warnings
                .iter()
                .any(|w| w.code == "branding.colors.invalid" && w.path == "branding.colors.accent")
        );
    }

    #[test]
    fn test_color_forms() {
        assert!(looks_like_color("#fff"));
        assert!(looks_like_color("#c5a47e"));
        assert!(looks_like_color("rgba(255, 255, 255, 0.1)"));
        assert!(looks_like_color("white"));
        assert!(!looks_like_color("#zzz"));
        assert!(!looks_like_color("rgb(1,2,3"));
    }

    #[test]
    fn test_long_description_warns() {
        let mut config = SiteConfig::default();
        config.seo.site_description = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        let warnings = validate(&config);
        assert!(warnings.iter().any(|w| w.code == "seo.siteDescription.long"));
    }

    #[test]
    fn test_warning_display() {
        let warning = AdvisoryWarning {
            code: "test.code",
            path: "test.path".into(),
            message: "Test message".into(),
        };
        assert_eq!(warning.to_string(), "[test.code] test.path: Test message");
    }
}
