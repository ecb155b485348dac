//! Common validation utilities for content payloads.

use url::{Host, Url};
use validator::ValidationError;

lazy_static::lazy_static! {
    static ref SLUG_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    static ref TIME_OF_DAY_REGEX: regex::Regex =
        regex::Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
}

/// Maximum length accepted for any stored URL.
pub const MAX_URL_LENGTH: usize = 2048;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Validates an absolute `http` or `https` URL with a well-formed host.
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    if url.len() > MAX_URL_LENGTH {
        return Err(error("url_length", "URL must be at most 2048 characters"));
    }

    // The URL parser strips tabs and newlines and collapses extra slashes.
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(error("url_format", "URL must not contain whitespace"));
    }

    let authority = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| error("url_scheme", "URL must start with http:// or https://"))?;
    if authority.starts_with('/') {
        return Err(error("url_host", "URL must include a valid host"));
    }

    let parsed = Url::parse(url).map_err(|_| error("url_format", "URL is malformed"))?;
    match parsed.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        Some(Host::Domain(domain)) if is_valid_domain(domain) => Ok(()),
        _ => Err(error("url_host", "URL must include a valid host")),
    }
}

/// Dot-separated labels of ASCII letters, digits and inner hyphens.
fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}

/// Validates a URL slug: lowercase letters, digits and single hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if SLUG_REGEX.is_match(slug) {
        Ok(())
    } else {
        Err(error(
            "slug_format",
            "Slug must contain lowercase letters, digits and single hyphens",
        ))
    }
}

/// Validates a 24-hour `HH:MM` time of day.
pub fn validate_time_of_day(time: &str) -> Result<(), ValidationError> {
    if TIME_OF_DAY_REGEX.is_match(time) {
        Ok(())
    } else {
        Err(error("time_format", "Time must be in HH:MM 24-hour format"))
    }
}

/// Validates that a string has at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error("blank", "Value must not be blank"))
    } else {
        Ok(())
    }
}

/// Derives a slug from free text ("Group Therapy 101" -> "group-therapy-101").
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
