//! Card Service Library
//!
//! This library crate defines the core modules of the card resource API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled layers plus configuration:
//!
//! - **`gateway`**: The request-dispatch layer. Decodes gateway-shaped
//!   requests (method, path, path parameters, raw body), invokes the card
//!   service, and maps outcomes to status codes and error-code bodies.
//! - **`card`**: The business logic. Holds the wire model, the stored record,
//!   and `CardService` with its collision-avoiding id-probe algorithm.
//! - **`storage`**: The persistence layer. Defines the `CardStore` contract
//!   (put/get/scan/delete semantics) and an in-memory implementation.
//! - **`config`**: Environment-driven naming for the backing table.

pub mod card;
pub mod config;
pub mod gateway;
pub mod storage;
