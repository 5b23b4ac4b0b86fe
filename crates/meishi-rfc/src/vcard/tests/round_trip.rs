//! Round-trip parsing and serialization tests.
//!
//! Parsing a card, serializing it, and parsing the result again must
//! preserve every property and value.

use super::fixtures::*;
use crate::vcard::build::serialize_single;
use crate::vcard::parse::parse_single;

/// Parse, serialize, parse again, and compare the two parses.
fn round_trip(input: &str) -> Result<(), String> {
    let first = parse_single(input).map_err(|e| format!("first parse failed: {e}"))?;

    let serialized = serialize_single(&first);

    let second =
        parse_single(&serialized).map_err(|e| format!("second parse failed: {e}\n{serialized}"))?;

    if first.version != second.version {
        return Err(format!(
            "version mismatch: {:?} vs {:?}",
            first.version, second.version
        ));
    }

    if first.properties.len() != second.properties.len() {
        return Err(format!(
            "property count mismatch: {} vs {}",
            first.properties.len(),
            second.properties.len()
        ));
    }

    for (a, b) in first.properties.iter().zip(&second.properties) {
        if a.name != b.name {
            return Err(format!("property order changed: {} vs {}", a.name, b.name));
        }
        if a.value != b.value {
            return Err(format!("value mismatch on {}: {:?} vs {:?}", a.name, a.value, b.value));
        }
    }

    Ok(())
}

#[test_log::test]
fn round_trip_qr_export() {
    round_trip(VCARD_QR_EXPORT).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_bilingual() {
    round_trip(VCARD_BILINGUAL).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_multi_value() {
    round_trip(VCARD_MULTI_VALUE).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_extensions() {
    round_trip(VCARD_EXTENSIONS).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_v4_inbound() {
    round_trip(VCARD_V4_INBOUND).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_inline_photo() {
    round_trip(VCARD_INLINE_PHOTO).expect("round trip should succeed");
}

#[test_log::test]
fn folded_note_survives_reserialization() {
    let card = parse_single(VCARD_EXTENSIONS).expect("fixture parses");
    let note = card.get_property("NOTE").expect("note present");
    assert_eq!(note.as_text(), Some("Met at Computexbooth 42"));
}
