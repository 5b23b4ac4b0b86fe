//! vCard serialization.

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::vcard::core::{
    Organization, StructuredName, VCard, VCardParameter, VCardProperty, VCardValue,
};

/// Serializes one or more vCards to a string.
///
/// Properties are emitted in insertion order with proper escaping and
/// 75-octet line folding.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();

    for card in cards {
        serialize_vcard(card, &mut output);
    }

    output
}

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    serialize_vcard(card, &mut output);
    output
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    output.push_str("BEGIN:VCARD\r\n");
    output.push_str("VERSION:");
    output.push_str(card.version.as_str());
    output.push_str("\r\n");

    for prop in &card.properties {
        serialize_property(prop, output);
    }

    output.push_str("END:VCARD\r\n");
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    let mut line = String::new();

    if let Some(group) = &prop.group {
        line.push_str(group);
        line.push('.');
    }

    line.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, &mut line);
    }

    line.push(':');
    serialize_value(&prop.value, &prop.raw_value, &mut line);

    output.push_str(&fold_line(&line));
    output.push_str("\r\n");
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}

fn serialize_value(value: &VCardValue, raw_value: &str, output: &mut String) {
    match value {
        VCardValue::Text(s) => output.push_str(&escape_text(s)),
        // URIs travel raw
        VCardValue::Uri(s) => output.push_str(s),
        VCardValue::StructuredName(name) => serialize_structured_name(name, output),
        VCardValue::Organization(org) => serialize_organization(org, output),
        // Binary re-emits its original base64 text
        VCardValue::Binary(_) => output.push_str(raw_value),
    }
}

fn serialize_structured_name(name: &StructuredName, output: &mut String) {
    // family;given;additional;prefixes;suffixes
    let components = [
        &name.family,
        &name.given,
        &name.additional,
        &name.prefixes,
        &name.suffixes,
    ];

    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            output.push(';');
        }
        serialize_component_list(component, output);
    }
}

fn serialize_organization(org: &Organization, output: &mut String) {
    output.push_str(&escape_text(&org.name));
    for unit in &org.units {
        output.push(';');
        output.push_str(&escape_text(unit));
    }
}

fn serialize_component_list(list: &[String], output: &mut String) {
    for (i, s) in list.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(&escape_text(s));
    }
}
