//! Domain Layer
//!
//! Error types shared by the repository and command layers.
//! This layer has NO external dependencies (except serde for serialization).

mod error;

pub use error::{DomainError, DomainResult};
