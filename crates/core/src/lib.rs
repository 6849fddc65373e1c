//! Rosemary Core - Shared types library.
//!
//! This crate provides common types used across all Rosemary components:
//! - `storefront` - Public-facing catalog site with WhatsApp inquiry handoff
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and stock statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
