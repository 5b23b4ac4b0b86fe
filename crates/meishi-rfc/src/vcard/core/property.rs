//! vCard property types.

use super::parameter::VCardParameter;
use super::structured::{Organization, StructuredName};
use super::value::VCardValue;

/// A vCard property.
///
/// Carries the parsed value along with the original raw value string;
/// the raw form is what binary payloads serialize back to.
#[derive(Debug, Clone, PartialEq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Parsed value.
    pub value: VCardValue,
    /// Original raw value string.
    pub raw_value: String,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: VCardValue::Text(value_str.clone()),
            raw_value: value_str,
        }
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: VCardValue::Uri(value_str.clone()),
            raw_value: value_str,
        }
    }

    /// Creates an N property from a structured name.
    #[must_use]
    pub fn structured_name(name: StructuredName) -> Self {
        Self {
            group: None,
            name: names::N.to_string(),
            params: Vec::new(),
            value: VCardValue::StructuredName(name),
            raw_value: String::new(),
        }
    }

    /// Creates an ORG property from an organization.
    #[must_use]
    pub fn organization(org: Organization) -> Self {
        Self {
            group: None,
            name: names::ORG.to_string(),
            params: Vec::new(),
            value: VCardValue::Organization(org),
            raw_value: String::new(),
        }
    }

    /// Consumes the property, attaching a TYPE parameter.
    #[must_use]
    pub fn with_type(mut self, type_value: impl Into<String>) -> Self {
        self.add_type(type_value);
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }

    /// Adds a TYPE parameter value, merging into an existing TYPE.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        if let Some(param) = self.params.iter_mut().find(|p| p.name == "TYPE") {
            param.values.push(type_value.into());
        } else {
            self.params.push(VCardParameter::type_param(type_value));
        }
    }
}

/// Property names this crate's callers care about.
pub mod names {
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";

    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";
    pub const NOTE: &str = "NOTE";
    pub const PHOTO: &str = "PHOTO";

    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const URL: &str = "URL";

    // Vendor extensions carried on bilingual cards
    pub const X_PHONETIC_FIRST_NAME: &str = "X-PHONETIC-FIRST-NAME";
    pub const X_PHONETIC_LAST_NAME: &str = "X-PHONETIC-LAST-NAME";
    pub const X_SOCIALPROFILE: &str = "X-SOCIALPROFILE";
}
