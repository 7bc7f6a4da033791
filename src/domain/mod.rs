//! Domain layer containing directory entities and pure logic.
//!
//! # Architecture
//!
//! - [`entities`] - Records, listing entries, and submissions
//! - [`normalizer`] - Raw record to listing entry conversion
//! - [`repositories`] - Record store trait definition
//! - [`form`] - Client submission lifecycle model
//!
//! # Design Principles
//!
//! - The domain layer has no dependency on HTTP or the store's wire format
//! - Store access goes through [`repositories::RecordStore`], implemented by the
//!   infrastructure layer
//!
//! # Page Flow
//!
//! 1. The page handler asks [`crate::application::services::ListingService`] for listings
//! 2. The service queries the store once, sorted by name
//! 3. Each record passes through [`normalizer::normalize`]; malformed records are dropped
//! 4. The surviving entries are rendered in fetch order

pub mod entities;
pub mod form;
pub mod normalizer;
pub mod repositories;
