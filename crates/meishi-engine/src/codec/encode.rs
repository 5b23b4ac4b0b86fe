//! Contact record to vCard 3.0 text.

use meishi_core::types::{ContactInfo, CustomField, CustomFieldKind, PublishLink};
use meishi_rfc::vcard::core::names;
use meishi_rfc::vcard::{
    Organization, StructuredName, VCard, VCardProperty, serialize_single,
};

/// Encodes a contact record (and optional publish link) as a vCard 3.0
/// block.
///
/// Photo data is intentionally omitted to keep QR/NFC payloads dense;
/// the full-fidelity export path embeds it separately. This function
/// cannot fail: absent fields are simply not emitted.
#[must_use]
pub fn encode(contact: &ContactInfo, publish: Option<&PublishLink>) -> String {
    let mut card = VCard::new();

    push_name(&mut card, contact);

    if let Some(company) = contact.company.as_ref().or(contact.localized_company.as_ref()) {
        card.add_property(VCardProperty::organization(Organization::named(company)));
    }
    if let Some(title) = contact.title.as_ref().or(contact.localized_title.as_ref()) {
        card.add_property(VCardProperty::text(names::TITLE, title));
    }

    if let Some(phone) = &contact.phone {
        card.add_property(VCardProperty::text(names::TEL, phone).with_type("CELL"));
    }
    if let Some(email) = &contact.email {
        card.add_property(VCardProperty::text(names::EMAIL, email));
    }
    if let Some(website) = &contact.website {
        card.add_property(VCardProperty::uri(names::URL, website));
    }
    if let Some(note) = &contact.note {
        card.add_property(VCardProperty::text(names::NOTE, note));
    }

    for field in &contact.custom_fields {
        card.add_property(custom_field_property(field));
    }

    if let Some(link) = publish {
        card.add_property(VCardProperty::uri(names::URL, &link.share_url).with_type("CARDPRO"));
        card.add_property(VCardProperty::text(names::NOTE, &link.record_id));
    }

    serialize_single(&card)
}

/// Emits N, FN, and the phonetic extensions.
///
/// The primary slots drive N/FN (falling back to the localized pair for
/// records that only carry one); a populated localized pair additionally
/// travels as X-PHONETIC properties.
fn push_name(card: &mut VCard, contact: &ContactInfo) {
    let (family, given) = if contact.has_western_name() {
        (contact.last_name.as_ref(), contact.first_name.as_ref())
    } else {
        (
            contact.localized_last_name.as_ref(),
            contact.localized_first_name.as_ref(),
        )
    };

    if family.is_some() || given.is_some() {
        card.add_property(VCardProperty::structured_name(StructuredName {
            family: family.cloned().into_iter().collect(),
            given: given.cloned().into_iter().collect(),
            ..StructuredName::default()
        }));
    }

    let display = contact.display_name();
    if !display.is_empty() {
        card.add_property(VCardProperty::text(names::FN, display));
    }

    if let Some(last) = &contact.localized_last_name {
        card.add_property(VCardProperty::text(names::X_PHONETIC_LAST_NAME, last));
    }
    if let Some(first) = &contact.localized_first_name {
        card.add_property(VCardProperty::text(names::X_PHONETIC_FIRST_NAME, first));
    }
}

fn custom_field_property(field: &CustomField) -> VCardProperty {
    let slug = slugify(&field.label);

    match field.kind {
        CustomFieldKind::Phone => VCardProperty::text(names::TEL, &field.value).with_type(slug),
        CustomFieldKind::Email => VCardProperty::text(names::EMAIL, &field.value).with_type(slug),
        CustomFieldKind::Url => VCardProperty::uri(names::URL, &field.value).with_type(slug),
        CustomFieldKind::Social => {
            VCardProperty::text(names::X_SOCIALPROFILE, &field.value).with_type(slug)
        }
        CustomFieldKind::Text => VCardProperty::text(format!("X-{slug}"), &field.value),
    }
}

/// Upper-cases a label and strips spaces and slashes, producing a token
/// safe for property and parameter positions.
fn slugify(label: &str) -> String {
    label
        .to_uppercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '/')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn western_contact() -> ContactInfo {
        ContactInfo {
            first_name: Some("Leo".to_string()),
            last_name: Some("Man".to_string()),
            company: Some("IrisGo".to_string()),
            title: Some("Founder".to_string()),
            phone: Some("+886912345678".to_string()),
            email: Some("leo@irisgo.xyz".to_string()),
            website: Some("https://irisgo.xyz".to_string()),
            ..ContactInfo::default()
        }
    }

    #[test]
    fn encodes_expected_layout() {
        let output = encode(&western_contact(), None);

        assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
        assert!(output.contains("N:Man;Leo;;;\r\n"));
        assert!(output.contains("FN:Leo Man\r\n"));
        assert!(output.contains("ORG:IrisGo\r\n"));
        assert!(output.contains("TITLE:Founder\r\n"));
        assert!(output.contains("TEL;TYPE=CELL:+886912345678\r\n"));
        assert!(output.contains("EMAIL:leo@irisgo.xyz\r\n"));
        assert!(output.contains("URL:https://irisgo.xyz\r\n"));
        assert!(output.ends_with("END:VCARD\r\n"));
    }

    #[test]
    fn localized_name_emits_phonetic_fields() {
        let contact = ContactInfo {
            first_name: Some("Leo".to_string()),
            last_name: Some("Man".to_string()),
            localized_first_name: Some("大文".to_string()),
            localized_last_name: Some("陳".to_string()),
            ..ContactInfo::default()
        };

        let output = encode(&contact, None);
        assert!(output.contains("N:Man;Leo;;;\r\n"));
        assert!(output.contains("X-PHONETIC-LAST-NAME:陳\r\n"));
        assert!(output.contains("X-PHONETIC-FIRST-NAME:大文\r\n"));
    }

    #[test]
    fn promoted_cjk_name_fills_n() {
        let contact = ContactInfo {
            first_name: Some("大文".to_string()),
            last_name: Some("陳".to_string()),
            ..ContactInfo::default()
        };

        let output = encode(&contact, None);
        assert!(output.contains("N:陳;大文;;;\r\n"));
        assert!(output.contains("FN:大文 陳\r\n"));
    }

    #[test]
    fn localized_company_is_the_fallback() {
        let contact = ContactInfo {
            first_name: Some("Leo".to_string()),
            localized_company: Some("山海科技".to_string()),
            ..ContactInfo::default()
        };

        assert!(encode(&contact, None).contains("ORG:山海科技\r\n"));
    }

    #[test]
    fn custom_fields_encode_by_kind() {
        let contact = ContactInfo {
            first_name: Some("Leo".to_string()),
            custom_fields: vec![
                CustomField::new("Work", "+886223456789", CustomFieldKind::Phone),
                CustomField::new("Twitter", "@leoman", CustomFieldKind::Social),
                CustomField::new("Line ID", "leo.man", CustomFieldKind::Text),
            ],
            ..ContactInfo::default()
        };

        let output = encode(&contact, None);
        assert!(output.contains("TEL;TYPE=WORK:+886223456789\r\n"));
        assert!(output.contains("X-SOCIALPROFILE;TYPE=TWITTER:@leoman\r\n"));
        assert!(output.contains("X-LINEID:leo.man\r\n"));
    }

    #[test]
    fn publish_link_appends_url_and_note() {
        let link = PublishLink {
            share_url: "https://card.irisgo.xyz/leo".to_string(),
            record_id: "rec_8c41".to_string(),
        };

        let output = encode(&western_contact(), Some(&link));
        assert!(output.contains("URL;TYPE=CARDPRO:https://card.irisgo.xyz/leo\r\n"));
        assert!(output.contains("NOTE:rec_8c41\r\n"));
    }

    #[test]
    fn empty_contact_encodes_to_bare_envelope() {
        let output = encode(&ContactInfo::default(), None);
        assert_eq!(output, "BEGIN:VCARD\r\nVERSION:3.0\r\nEND:VCARD\r\n");
    }
}
