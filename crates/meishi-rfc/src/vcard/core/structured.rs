//! Structured vCard values (N and ORG).

/// Structured name (N property).
///
/// All components are optional; each may carry multiple comma-separated
/// values in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }

    /// Returns whether all components are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.given.is_empty()
            && self.additional.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
    }

    /// The first family-name value, if any.
    #[must_use]
    pub fn family_name(&self) -> Option<&str> {
        self.family.first().map(String::as_str)
    }

    /// The first given-name value, if any.
    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        self.given.first().map(String::as_str)
    }
}

/// Organization (ORG property).
///
/// The first component is the organization name; any further components
/// are organizational units in decreasing specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Organizational units.
    pub units: Vec<String>,
}

impl Organization {
    /// Creates an organization with a bare name and no units.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name() {
        let name = StructuredName::simple("Man", "Leo");
        assert_eq!(name.family_name(), Some("Man"));
        assert_eq!(name.given_name(), Some("Leo"));
        assert!(!name.is_empty());
    }

    #[test]
    fn default_name_is_empty() {
        assert!(StructuredName::default().is_empty());
    }
}
