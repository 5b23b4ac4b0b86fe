//! Regex field extractors for contact-detail lines.
//!
//! Each extractor takes one line and returns a normalized value or
//! nothing; no extractor ever fails. Lines are tried in the order
//! email, phone, website, and the first extractor that matches consumes
//! the line.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap());

// Phone patterns in fixed priority order. The first structural match is
// final: a candidate failing the digit-count gate yields no result even
// if a later pattern would also match.
static PHONE_GROUPED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?\d[\d\s().\-]{5,}\d").unwrap());

static PHONE_COMPACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2,4}[\s\-]\d{3,4}[\s\-]\d{3,4}").unwrap());

static PHONE_LABELED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:TEL|Tel|電話|Phone|携帯|mobile)\s*[:：.]?\s*(\+?[\d\s().\-]+)").unwrap()
});

static WEBSITE_BARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?[A-Za-z0-9][A-Za-z0-9\-]*(?:\.[A-Za-z0-9\-]+)*\.[a-z]{2,}(?:/[^\s]*)?")
        .unwrap()
});

static WEBSITE_LABELED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:URL|Web|Website|HP|ホームページ|網站)\s*[:：]?\s*(\S+)").unwrap()
});

/// Minimum digit characters for a phone candidate to be accepted.
const MIN_PHONE_DIGITS: usize = 7;

/// Extracts an email address, lower-cased.
#[must_use]
pub fn extract_email(line: &str) -> Option<String> {
    EMAIL_RE
        .find(line)
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// Extracts a phone number.
///
/// Tries the grouped-digit, compact three-group, and labeled patterns
/// in that order; the first match becomes the candidate, accepted only
/// when it carries at least seven digit characters.
#[must_use]
pub fn extract_phone(line: &str) -> Option<String> {
    let candidate = PHONE_GROUPED_RE
        .find(line)
        .or_else(|| PHONE_COMPACT_RE.find(line))
        .or_else(|| PHONE_LABELED_RE.captures(line).and_then(|c| c.get(1)))?
        .as_str();

    let digits = candidate.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return None;
    }

    Some(candidate.trim().to_string())
}

/// Extracts a website, always returned with an explicit scheme.
///
/// Accepts a bare domain-like token (lowercase TLD) or any token
/// following a website label; a line containing `@` is never a website
/// (email disambiguation).
#[must_use]
pub fn extract_website(line: &str) -> Option<String> {
    if line.contains('@') {
        return None;
    }

    let candidate = WEBSITE_BARE_RE
        .find(line)
        .or_else(|| WEBSITE_LABELED_RE.captures(line).and_then(|c| c.get(1)))?
        .as_str();

    if !candidate.contains('.') {
        return None;
    }

    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        Some(candidate.to_string())
    } else {
        Some(format!("https://{candidate}"))
    }
}
