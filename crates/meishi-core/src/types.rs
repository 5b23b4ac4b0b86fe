//! Contact data model.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The kind of value a [`CustomField`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomFieldKind {
    /// A phone number.
    Phone,
    /// An email address.
    Email,
    /// A website or other URL.
    Url,
    /// A social-network profile.
    Social,
    /// Free text.
    Text,
}

/// An extra contact detail beyond the canonical slots.
///
/// The first phone/email/website of a record occupies the matching
/// canonical [`ContactInfo`] slot; second and later values of the same
/// kind are carried here, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Free-text label shown to the user (e.g. "Work", "Mobile").
    pub label: String,
    /// The field value.
    pub value: String,
    /// Value kind.
    pub kind: CustomFieldKind,
}

impl CustomField {
    /// Creates a custom field.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        kind: CustomFieldKind,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind,
        }
    }
}

/// Linkage to a remotely published counterpart of a card.
///
/// Consumed by the vCard encoder only; decoding does not reconstruct it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishLink {
    /// Public URL of the published card.
    pub share_url: String,
    /// Provider-specific record identifier.
    pub record_id: String,
}

/// A structured contact record.
///
/// Produced fresh by each extraction pass or decoded vCard block and
/// never mutated afterwards. Localized fields hold the CJK counterpart
/// of a Western name/company/title on bilingual cards; at most one side
/// of each pair is populated unless the source line mixed both scripts.
///
/// Invariants upheld by producers: `email` is lower-cased and `website`
/// always carries an explicit scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Western given name.
    pub first_name: Option<String>,
    /// Western family name.
    pub last_name: Option<String>,
    /// CJK given name.
    pub localized_first_name: Option<String>,
    /// CJK family name.
    pub localized_last_name: Option<String>,
    /// Company name (Latin script).
    pub company: Option<String>,
    /// Company name (CJK script).
    pub localized_company: Option<String>,
    /// Job title (Latin script).
    pub title: Option<String>,
    /// Job title (CJK script).
    pub localized_title: Option<String>,
    /// Canonical phone number.
    pub phone: Option<String>,
    /// Canonical email address, lower-cased.
    pub email: Option<String>,
    /// Canonical website with explicit scheme.
    pub website: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// Verbatim concatenation of all recognized input lines, retained
    /// for manual correction in the editor.
    #[serde(default)]
    pub raw_text: String,
    /// Non-canonical fields in insertion order.
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    /// Decoded photo bytes, when the source declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
}

impl ContactInfo {
    /// Returns whether the record identifies a person at all: any name
    /// part, email, or phone. Records failing this test are discarded
    /// by the vCard decoder.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.localized_first_name.is_some()
            || self.localized_last_name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
    }

    /// Returns whether any Western name part is present.
    #[must_use]
    pub fn has_western_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    /// Validates that the record identifies someone.
    ///
    /// Extraction and decoding are best-effort and never fail; callers
    /// that need a usable record (importers, publishers) check here.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` when the record has no name,
    /// email, or phone.
    pub fn ensure_identity(&self) -> CoreResult<()> {
        if self.has_identity() {
            Ok(())
        } else {
            Err(CoreError::InvalidInput(
                "contact record has no name, email, or phone".to_string(),
            ))
        }
    }

    /// Formats a display name: Western `given family` when present,
    /// otherwise the localized name in CJK order (`family` then `given`,
    /// no separator).
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.has_western_name() {
            let mut parts = Vec::new();
            if let Some(first) = &self.first_name {
                parts.push(first.as_str());
            }
            if let Some(last) = &self.last_name {
                parts.push(last.as_str());
            }
            parts.join(" ")
        } else {
            let mut name = String::new();
            if let Some(last) = &self.localized_last_name {
                name.push_str(last);
            }
            if let Some(first) = &self.localized_first_name {
                name.push_str(first);
            }
            name
        }
    }
}
