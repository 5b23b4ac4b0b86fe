//! Wire-format support for meishi.
//!
//! Currently a single format: vCard ([`vcard`]), the interchange format
//! used for QR codes, NFC payloads, and `.vcf` files.

pub mod vcard;
