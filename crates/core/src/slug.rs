//! Layout slug validation.
//!
//! Slugs address layouts on the public read path, so they must stay
//! URL-safe: lowercase ASCII letters, digits, and single interior
//! hyphens.

/// Maximum slug length in bytes.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Validate a layout slug, returning an error message for invalid ones.
pub fn validate_slug(slug: &str) -> Result<(), String> {
    if slug.is_empty() {
        return Err("Slug must not be empty".to_string());
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(format!(
            "Slug exceeds the maximum length of {MAX_SLUG_LENGTH} characters"
        ));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(format!(
            "Slug '{slug}' may only contain lowercase letters, digits, and hyphens"
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(format!("Slug '{slug}' has a leading, trailing, or doubled hyphen"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_slugs_accepted() {
        assert!(validate_slug("landing").is_ok());
        assert!(validate_slug("spring-2026-promo").is_ok());
        assert!(validate_slug("a").is_ok());
    }

    #[test]
    fn empty_slug_rejected() {
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn uppercase_and_spaces_rejected() {
        assert!(validate_slug("Landing").is_err());
        assert!(validate_slug("landing page").is_err());
        assert!(validate_slug("landing_page").is_err());
    }

    #[test]
    fn hyphen_placement_rules_enforced() {
        assert!(validate_slug("-landing").is_err());
        assert!(validate_slug("landing-").is_err());
        assert!(validate_slug("landing--page").is_err());
    }

    #[test]
    fn overlong_slug_rejected() {
        let slug = "a".repeat(MAX_SLUG_LENGTH + 1);
        assert!(validate_slug(&slug).is_err());
        let slug = "a".repeat(MAX_SLUG_LENGTH);
        assert!(validate_slug(&slug).is_ok());
    }
}
