//! Core types for the textile storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod fabric;
pub mod id;
pub mod phone;
pub mod price;
pub mod product;

pub use email::{Email, EmailError};
pub use fabric::{Fabric, FabricFilter, ParseFabricError};
pub use id::*;
pub use phone::{PhoneError, PhoneNumber};
pub use price::{CurrencyCode, Price};
pub use product::Product;
