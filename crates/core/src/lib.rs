//! `silomap-core`: domain primitives shared by the silomap crates.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod location;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use location::LocationCode;
