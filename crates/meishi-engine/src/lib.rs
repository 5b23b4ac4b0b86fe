//! Business-card text understanding and the contact-level vCard codec.
//!
//! The input is an ordered list of recognized text lines with no
//! semantic labels; the output is a [`meishi_core::types::ContactInfo`].
//! Everything in between is heuristic: regex field extractors pull out
//! emails, phones, and websites; the remaining lines are scored as
//! name/company/title candidates across Latin and CJK scripts; winning
//! lines are split into Western and localized parts.
//!
//! The [`codec`] module maps contact records to and from vCard 3.0 text
//! on top of the `meishi-rfc` wire layer.
//!
//! All operations are synchronous, pure, and total: unrecognizable text
//! leaves fields unset rather than raising errors.

pub mod classify;
pub mod codec;
pub mod fields;
pub mod lexicon;
pub mod pipeline;
pub mod script;
pub mod split;

pub use lexicon::Lexicon;
pub use pipeline::ContactExtractor;
