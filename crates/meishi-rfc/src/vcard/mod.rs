//! vCard implementation (RFC 2426 / RFC 6350).
//!
//! This module provides types, parsing, and serialization for the vCard
//! text format meishi uses as its interchange surface.
//!
//! ## Overview
//!
//! Business-card records travel as vCard 3.0 (the density-friendly form
//! used for QR codes and NFC tags); inbound files may also be 4.0.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use meishi_rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:Leo Man\r\n\
//! EMAIL:leo@irisgo.xyz\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("Leo Man"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use meishi_rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "Leo Man"));
//! card.add_property(VCardProperty::text("EMAIL", "leo@irisgo.xyz"));
//!
//! let output = serialize(&[card]);
//! assert!(output.contains("FN:Leo Man"));
//! ```
//!
//! ## Ordering
//!
//! Properties serialize in insertion order, so an encoder controls the
//! exact layout of the emitted card and the payload is deterministic.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardValue`, etc.)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{serialize, serialize_single};
pub use core::{
    Organization, StructuredName, VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion,
};
pub use parse::{ParseError, ParseResult, parse, parse_single};
