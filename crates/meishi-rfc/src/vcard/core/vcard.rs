//! vCard wrapper type.

use super::property::VCardProperty;
use super::structured::{Organization, StructuredName};
use super::value::VCardValue;

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426). The native version of this crate: QR and
    /// NFC payloads are emitted as 3.0.
    #[default]
    V3,
    /// vCard 4.0 (RFC 6350).
    V4,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    #[expect(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "3.0" => Some(Self::V3),
            "4.0" => Some(Self::V4),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VCardVersion::from_str(s).ok_or(())
    }
}

/// A complete vCard.
#[derive(Debug, Clone, PartialEq)]
pub struct VCard {
    /// vCard version.
    pub version: VCardVersion,
    /// All properties in order of appearance.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates a new vCard 3.0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: VCardVersion::V3,
            properties: Vec::new(),
        }
    }

    /// Creates a vCard with the specified version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            properties: Vec::new(),
        }
    }

    /// Adds a property to the vCard.
    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&VCardProperty> {
        let name_upper = name.to_ascii_uppercase();
        self.properties
            .iter()
            .filter(|p| p.name == name_upper)
            .collect()
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns the FN (formatted name) value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get_property("FN")?.as_text()
    }

    /// Returns the structured name (N property).
    #[must_use]
    pub fn name(&self) -> Option<&StructuredName> {
        match &self.get_property("N")?.value {
            VCardValue::StructuredName(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the organization (ORG property).
    #[must_use]
    pub fn organization(&self) -> Option<&Organization> {
        match &self.get_property("ORG")?.value {
            VCardValue::Organization(org) => Some(org),
            _ => None,
        }
    }
}

impl Default for VCard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_v3() {
        assert_eq!(VCard::new().version, VCardVersion::V3);
    }

    #[test]
    fn version_round_trips_through_str() {
        assert_eq!(VCardVersion::from_str("3.0"), Some(VCardVersion::V3));
        assert_eq!(VCardVersion::from_str("4.0"), Some(VCardVersion::V4));
        assert_eq!(VCardVersion::from_str("2.1"), None);
        assert_eq!(VCardVersion::V3.as_str(), "3.0");
    }

    #[test]
    fn get_property_is_case_insensitive() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("FN", "Leo Man"));
        assert!(card.get_property("fn").is_some());
    }
}
