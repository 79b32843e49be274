//! Textile Core - Shared domain types.
//!
//! This crate provides the types used by the textile storefront:
//! - `storefront` - Browser behaviour layer compiled to WebAssembly
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no DOM access,
//! no storage, no logging. This keeps it lightweight and testable natively.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails, phone numbers and fabrics
//! - [`catalog`] - The static product list shown on the storefront page

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::Catalog;
pub use types::*;
