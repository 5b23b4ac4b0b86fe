//! Lenient vCard text to contact records.
//!
//! Inbound payloads (NFC reads, AirDrop'd .vcf files, QR scans) are
//! frequently sloppy: concatenated blocks, missing END lines, vendor
//! properties, malformed lines. Decoding therefore never fails; a line
//! that cannot be parsed is skipped, and a block that yields no
//! identity at all is silently discarded.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use meishi_core::types::{ContactInfo, CustomField, CustomFieldKind};
use meishi_rfc::vcard::parse::{ContentLine, parse_content_line, split_lines, unfold};

use crate::script;

/// Decodes every vCard block found in the input, in source order.
///
/// Blocks that decode to no name, email, and phone are dropped.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn decode(input: &str) -> Vec<ContactInfo> {
    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    let mut contacts = Vec::new();
    let mut current: Option<BlockDecoder> = None;

    for (idx, line) in lines.iter().enumerate() {
        if line.eq_ignore_ascii_case("BEGIN:VCARD") {
            // An unterminated previous block still counts
            finish(&mut current, &mut contacts);
            current = Some(BlockDecoder::default());
            continue;
        }

        if line.eq_ignore_ascii_case("END:VCARD") {
            finish(&mut current, &mut contacts);
            continue;
        }

        let Some(decoder) = current.as_mut() else {
            continue; // Content outside any block
        };

        match parse_content_line(line, idx + 1) {
            Ok(content) => decoder.apply(content),
            Err(error) => {
                tracing::trace!(%error, "Skipping malformed line");
            }
        }
    }

    finish(&mut current, &mut contacts);

    tracing::debug!(count = contacts.len(), "Decoded contact records");

    contacts
}

fn finish(current: &mut Option<BlockDecoder>, contacts: &mut Vec<ContactInfo>) {
    if let Some(decoder) = current.take() {
        if let Some(contact) = decoder.finish() {
            contacts.push(contact);
        }
    }
}

/// Accumulates one block's properties into a contact record.
#[derive(Debug, Default)]
struct BlockDecoder {
    contact: ContactInfo,
    formatted_name: Option<String>,
}

impl BlockDecoder {
    fn apply(&mut self, line: ContentLine) {
        match line.name.as_str() {
            "VERSION" | "PRODID" | "REV" | "UID" => {}
            "N" => self.apply_n(&line.value),
            "FN" => {
                self.formatted_name = Some(unescape(&line.value));
            }
            "ORG" => {
                let org = meishi_rfc::vcard::parse::parse_organization(&line.value);
                if !org.name.is_empty() {
                    if script::is_primarily_cjk(&org.name) {
                        self.contact.localized_company = Some(org.name);
                    } else {
                        self.contact.company = Some(org.name);
                    }
                }
            }
            "TITLE" => {
                let title = unescape(&line.value);
                if script::is_primarily_cjk(&title) {
                    self.contact.localized_title = Some(title);
                } else {
                    self.contact.title = Some(title);
                }
            }
            "NOTE" => {
                let note = unescape(&line.value);
                if self.contact.note.is_none() {
                    self.contact.note = Some(note);
                } else {
                    self.contact
                        .custom_fields
                        .push(CustomField::new("Note", note, CustomFieldKind::Text));
                }
            }
            "TEL" => {
                let value = line.value.trim().to_string();
                if self.contact.phone.is_none() {
                    self.contact.phone = Some(value);
                } else {
                    let label = type_label(&line).unwrap_or_else(|| "Phone".to_string());
                    self.contact
                        .custom_fields
                        .push(CustomField::new(label, value, CustomFieldKind::Phone));
                }
            }
            "EMAIL" => {
                let value = line.value.trim().to_ascii_lowercase();
                if self.contact.email.is_none() {
                    self.contact.email = Some(value);
                } else {
                    let label = type_label(&line).unwrap_or_else(|| "Email".to_string());
                    self.contact
                        .custom_fields
                        .push(CustomField::new(label, value, CustomFieldKind::Email));
                }
            }
            "URL" => {
                let value = with_scheme(line.value.trim());
                if self.contact.website.is_none() {
                    self.contact.website = Some(value);
                } else {
                    let label = type_label(&line).unwrap_or_else(|| "Website".to_string());
                    self.contact
                        .custom_fields
                        .push(CustomField::new(label, value, CustomFieldKind::Url));
                }
            }
            "PHOTO" => {
                if let Some(bytes) = decode_photo(&line) {
                    self.contact.photo = Some(bytes);
                }
            }
            "X-PHONETIC-FIRST-NAME" => {
                self.contact.localized_first_name = Some(unescape(&line.value));
            }
            "X-PHONETIC-LAST-NAME" => {
                self.contact.localized_last_name = Some(unescape(&line.value));
            }
            "X-SOCIALPROFILE" => {
                let label = type_label(&line).unwrap_or_else(|| "Social".to_string());
                self.contact.custom_fields.push(CustomField::new(
                    label,
                    unescape(&line.value),
                    CustomFieldKind::Social,
                ));
            }
            name if name.starts_with("X-") => {
                self.contact.custom_fields.push(CustomField::new(
                    label_from_property(name),
                    unescape(&line.value),
                    CustomFieldKind::Text,
                ));
            }
            _ => {} // Unmapped standard properties (ADR, BDAY, ...) are skipped
        }
    }

    /// N: `family;given;...` - empty segments leave slots unset.
    fn apply_n(&mut self, value: &str) {
        let parts = meishi_rfc::vcard::parse::split_structured(value);

        if let Some(family) = parts.first().map(|p| unescape(p)).filter(|p| !p.is_empty()) {
            self.contact.last_name = Some(family);
        }
        if let Some(given) = parts.get(1).map(|p| unescape(p)).filter(|p| !p.is_empty()) {
            self.contact.first_name = Some(given);
        }
    }

    fn finish(mut self) -> Option<ContactInfo> {
        // FN is only a fallback for cards that never sent N
        if !self.contact.has_western_name() {
            if let Some(full) = self.formatted_name {
                if let Some(space) = full.find(' ') {
                    let family = full[space + 1..].to_string();
                    self.contact.first_name = Some(full[..space].to_string());
                    if !family.is_empty() {
                        self.contact.last_name = Some(family);
                    }
                } else if !full.is_empty() {
                    self.contact.first_name = Some(full);
                }
            }
        }

        self.contact.has_identity().then_some(self.contact)
    }
}

fn unescape(value: &str) -> String {
    meishi_rfc::vcard::parse::unescape_text(value)
}

/// Maps a TYPE parameter to a display label.
///
/// Well-known types get their fixed labels; PREF is skipped as it says
/// nothing about the kind of number; anything else is capitalized
/// verbatim.
fn type_label(line: &ContentLine) -> Option<String> {
    let param = line.params.iter().find(|p| p.name == "TYPE")?;

    param.values.iter().find_map(|value| {
        match value.to_ascii_uppercase().as_str() {
            "WORK" => Some("Work".to_string()),
            "HOME" => Some("Home".to_string()),
            "CELL" | "MOBILE" => Some("Mobile".to_string()),
            "FAX" => Some("Fax".to_string()),
            "PREF" => None,
            other if other.is_empty() => None,
            other => Some(capitalize(other)),
        }
    })
}

/// `X-LINE-ID` -> `Line Id`: strip the prefix, hyphens become spaces,
/// words are capitalized.
fn label_from_property(name: &str) -> String {
    name.trim_start_matches("X-")
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
        }
        None => String::new(),
    }
}

/// Upholds the explicit-scheme invariant on decoded websites.
fn with_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn decode_photo(line: &ContentLine) -> Option<Vec<u8>> {
    let declares_base64 = line.params.iter().any(|p| {
        p.name == "ENCODING"
            && p.values
                .iter()
                .any(|v| v.eq_ignore_ascii_case("b") || v.eq_ignore_ascii_case("base64"))
    });

    if !declares_base64 {
        return None;
    }

    let compact: String = line.value.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64.decode(compact).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_card() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nFN:Leo Man\nORG:IrisGo\nTEL:+886912345678\nEMAIL:leo@irisgo.xyz\nEND:VCARD";

        let contacts = decode(input);
        assert_eq!(contacts.len(), 1);

        let contact = &contacts[0];
        assert_eq!(contact.first_name.as_deref(), Some("Leo"));
        assert_eq!(contact.last_name.as_deref(), Some("Man"));
        assert_eq!(contact.company.as_deref(), Some("IrisGo"));
        assert_eq!(contact.phone.as_deref(), Some("+886912345678"));
        assert_eq!(contact.email.as_deref(), Some("leo@irisgo.xyz"));
    }

    #[test]
    fn fn_is_fallback_when_n_missing() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nFN:Leo Man\nEND:VCARD";

        let contacts = decode(input);
        assert_eq!(contacts[0].first_name.as_deref(), Some("Leo"));
        assert_eq!(contacts[0].last_name.as_deref(), Some("Man"));
    }

    #[test]
    fn fn_is_ignored_when_n_present() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nFN:Different Name\nEND:VCARD";

        let contacts = decode(input);
        assert_eq!(contacts[0].first_name.as_deref(), Some("Leo"));
        assert_eq!(contacts[0].last_name.as_deref(), Some("Man"));
    }

    #[test]
    fn folded_note_unfolds_without_space() {
        let input =
            "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nNOTE:a long line\n that continues\nEND:VCARD";

        let contacts = decode(input);
        assert_eq!(contacts[0].note.as_deref(), Some("a long linethat continues"));
    }

    #[test]
    fn second_tel_becomes_custom_field() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nTEL;TYPE=CELL:+886912345678\nTEL;TYPE=WORK:+886223456789\nTEL;TYPE=PREF,FAX:+886223456780\nEND:VCARD";

        let contacts = decode(input);
        let contact = &contacts[0];

        assert_eq!(contact.phone.as_deref(), Some("+886912345678"));
        assert_eq!(contact.custom_fields.len(), 2);
        assert_eq!(contact.custom_fields[0].label, "Work");
        assert_eq!(contact.custom_fields[0].kind, CustomFieldKind::Phone);
        // PREF is skipped, FAX supplies the label
        assert_eq!(contact.custom_fields[1].label, "Fax");
    }

    #[test]
    fn untyped_second_email_gets_generic_label() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nEMAIL:LEO@IRISGO.XYZ\nEMAIL:second@irisgo.xyz\nEND:VCARD";

        let contacts = decode(input);
        assert_eq!(contacts[0].email.as_deref(), Some("leo@irisgo.xyz"));
        assert_eq!(contacts[0].custom_fields[0].label, "Email");
    }

    #[test]
    fn cjk_org_and_title_land_in_localized_slots() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:陳;大文;;;\nORG:山海科技股份有限公司\nTITLE:總經理\nEND:VCARD";

        let contacts = decode(input);
        let contact = &contacts[0];
        assert_eq!(
            contact.localized_company.as_deref(),
            Some("山海科技股份有限公司")
        );
        assert_eq!(contact.localized_title.as_deref(), Some("總經理"));
        assert!(contact.company.is_none());
        assert!(contact.title.is_none());
    }

    #[test]
    fn phonetic_names_fill_localized_slots() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nX-PHONETIC-LAST-NAME:陳\nX-PHONETIC-FIRST-NAME:大文\nEND:VCARD";

        let contacts = decode(input);
        assert_eq!(contacts[0].localized_last_name.as_deref(), Some("陳"));
        assert_eq!(contacts[0].localized_first_name.as_deref(), Some("大文"));
    }

    #[test]
    fn unknown_x_property_becomes_text_field() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nX-LINE-ID:leo.man\nEND:VCARD";

        let contacts = decode(input);
        let field = &contacts[0].custom_fields[0];
        assert_eq!(field.label, "Line Id");
        assert_eq!(field.value, "leo.man");
        assert_eq!(field.kind, CustomFieldKind::Text);
    }

    #[test]
    fn social_profile_label_from_type() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nX-SOCIALPROFILE;TYPE=TWITTER:@leoman\nEND:VCARD";

        let contacts = decode(input);
        let field = &contacts[0].custom_fields[0];
        assert_eq!(field.label, "Twitter");
        assert_eq!(field.kind, CustomFieldKind::Social);
    }

    #[test]
    fn photo_requires_declared_base64() {
        let with_encoding = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nPHOTO;ENCODING=b:aGVsbG8=\nEND:VCARD";
        let without = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nPHOTO:aGVsbG8=\nEND:VCARD";

        assert_eq!(
            decode(with_encoding)[0].photo.as_deref(),
            Some(b"hello".as_slice())
        );
        assert!(decode(without)[0].photo.is_none());
    }

    #[test]
    fn website_decodes_with_scheme() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nN:Man;Leo;;;\nURL:irisgo.xyz\nEND:VCARD";
        assert_eq!(decode(input)[0].website.as_deref(), Some("https://irisgo.xyz"));
    }

    #[test]
    fn multiple_blocks_decode_in_order_skipping_empty() {
        let input = "\
BEGIN:VCARD\nVERSION:3.0\nFN:Leo Man\nEMAIL:leo@irisgo.xyz\nEND:VCARD\n\
BEGIN:VCARD\nVERSION:3.0\nORG:No Identity Inc\nEND:VCARD\n\
BEGIN:VCARD\nVERSION:3.0\nFN:Amy Chen\nTEL:+886287654321\nEND:VCARD";

        let contacts = decode(input);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].first_name.as_deref(), Some("Leo"));
        assert_eq!(contacts[1].first_name.as_deref(), Some("Amy"));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nGARBAGE WITHOUT COLON\nFN:Leo Man\nEMAIL:leo@irisgo.xyz\nEND:VCARD";

        let contacts = decode(input);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].email.as_deref(), Some("leo@irisgo.xyz"));
    }

    #[test]
    fn unterminated_block_still_decodes() {
        let input = "BEGIN:VCARD\nVERSION:3.0\nFN:Leo Man\nTEL:+886912345678";

        let contacts = decode(input);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].phone.as_deref(), Some("+886912345678"));
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        assert!(decode("").is_empty());
        assert!(decode("random text\nwith no vcard").is_empty());
    }
}
