//! Card Module
//!
//! Business logic for the card resource.
//!
//! ## Core Concepts
//! - **Wire model vs stored record**: `Card` is what clients send (id absent
//!   until assigned); `CardRecord` is what the store keeps (id mandatory).
//!   An explicit mapping joins them.
//! - **Id probing**: `CardService` derives candidate identifiers from a
//!   deterministic fingerprint of the card's fields and retries with an
//!   attempt counter until the store confirms one unused.

pub mod model;
pub mod service;

pub use model::{Card, CardRecord};
pub use service::{CardService, ServiceError};
