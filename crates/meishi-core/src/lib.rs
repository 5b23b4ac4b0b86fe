//! Core data model and configuration for meishi.
//!
//! This crate holds the types shared by every other crate in the
//! workspace: the [`types::ContactInfo`] record produced by extraction
//! and consumed by the codec, its [`types::CustomField`] companions, the
//! core error type, and the `Settings` loader.

pub mod config;
pub mod error;
pub mod types;
