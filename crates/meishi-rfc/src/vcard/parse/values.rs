//! vCard value parsers.

use crate::vcard::core::{Organization, StructuredName};

/// Unescapes a vCard text value.
///
/// vCard escapes: `\n`, `\N` (newline), `\,` (comma), `\;` (semicolon),
/// `\\` (backslash).
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
///
/// Empty trailing components are kept, so `Man;Leo;;;` yields five
/// segments.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ';' {
            parts.push(&s[start..i]);
            start = i + 1;
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a component value on unescaped commas, unescaping each part.
/// An empty input yields no parts.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    current.push('\n');
                }
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    current.push(escaped);
                }
                _ => current.push(c),
            }
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

/// Parses an N value (`family;given;additional;prefixes;suffixes`).
///
/// Missing trailing components leave the corresponding lists empty.
#[must_use]
pub fn parse_structured_name(raw: &str) -> StructuredName {
    let mut parts = split_structured(raw).into_iter();
    let mut component = || parts.next().map(split_component).unwrap_or_default();

    StructuredName {
        family: component(),
        given: component(),
        additional: component(),
        prefixes: component(),
        suffixes: component(),
    }
}

/// Parses an ORG value (`name;unit;unit...`).
#[must_use]
pub fn parse_organization(raw: &str) -> Organization {
    let mut parts = split_structured(raw).into_iter();
    let name = parts.next().map(unescape_text).unwrap_or_default();
    let units = parts
        .filter(|p| !p.is_empty())
        .map(unescape_text)
        .collect();

    Organization { name, units }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_plain() {
        assert_eq!(unescape_text("hello"), "hello");
    }

    #[test]
    fn unescape_specials() {
        assert_eq!(unescape_text("a\\,b\\;c\\\\d\\ne"), "a,b;c\\d\ne");
    }

    #[test]
    fn unescape_keeps_unknown_escape() {
        assert_eq!(unescape_text("a\\xb"), "a\\xb");
    }

    #[test]
    fn split_structured_keeps_trailing_empties() {
        assert_eq!(split_structured("Man;Leo;;;"), vec!["Man", "Leo", "", "", ""]);
    }

    #[test]
    fn split_structured_respects_escapes() {
        assert_eq!(split_structured("a\\;b;c"), vec!["a\\;b", "c"]);
    }

    #[test]
    fn structured_name_short_value() {
        let name = parse_structured_name("Man;Leo");
        assert_eq!(name.family, vec!["Man"]);
        assert_eq!(name.given, vec!["Leo"]);
        assert!(name.additional.is_empty());
    }

    #[test]
    fn organization_with_units() {
        let org = parse_organization("IrisGo;Engineering");
        assert_eq!(org.name, "IrisGo");
        assert_eq!(org.units, vec!["Engineering"]);
    }

    #[test]
    fn organization_name_unescapes() {
        let org = parse_organization("Smith\\, Jones and Co");
        assert_eq!(org.name, "Smith, Jones and Co");
    }
}
