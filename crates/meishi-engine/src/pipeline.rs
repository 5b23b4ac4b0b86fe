//! The contact extraction pipeline.

use meishi_core::types::ContactInfo;

use crate::classify;
use crate::fields;
use crate::lexicon::Lexicon;
use crate::split;

/// Extracts structured contact records from recognized card lines.
///
/// An explicit service object: construct one (cheap, holds only the
/// keyword tables) and pass it to whoever needs extraction. Stateless
/// between calls and safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactExtractor {
    lexicon: Lexicon,
}

impl ContactExtractor {
    /// Creates an extractor with the default keyword tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with injected keyword tables.
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Runs the full pipeline over recognized lines.
    ///
    /// Field extractors consume contact-detail lines first (per line:
    /// email, then phone, then website; only the first value of each
    /// kind is kept). Address-looking lines are dropped. Whatever
    /// remains is scored, and the per-category winners are split into
    /// Western/localized slots.
    ///
    /// Never fails: text that fits nothing simply leaves fields unset.
    #[tracing::instrument(skip_all, fields(line_count = lines.len()))]
    #[must_use]
    pub fn extract(&self, lines: &[String]) -> ContactInfo {
        let mut contact = ContactInfo {
            raw_text: lines.join("\n"),
            ..ContactInfo::default()
        };

        let mut remaining: Vec<&str> = Vec::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(email) = fields::extract_email(line) {
                contact.email.get_or_insert(email);
                continue;
            }
            if let Some(phone) = fields::extract_phone(line) {
                contact.phone.get_or_insert(phone);
                continue;
            }
            if let Some(website) = fields::extract_website(line) {
                contact.website.get_or_insert(website);
                continue;
            }
            if self.lexicon.is_address_line(line) {
                continue;
            }

            remaining.push(line);
        }

        let scored = classify::classify_lines(&self.lexicon, &remaining);
        let winners = classify::assign_winners(scored);

        if let Some(name) = winners.name {
            split::apply_name(&self.lexicon, &mut contact, &name);
        }
        if let Some(company) = winners.company {
            split::apply_company(&mut contact, &company);
        }
        if let Some(title) = winners.title {
            split::apply_title(&mut contact, &title);
        }

        tracing::debug!(
            has_name = contact.has_western_name(),
            has_email = contact.email.is_some(),
            has_phone = contact.phone.is_some(),
            "Extraction finished"
        );

        contact
    }
}
