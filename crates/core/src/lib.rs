//! `boxoffice-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod capacity;
pub mod entity;
pub mod error;
pub mod id;

pub use capacity::Capacity;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::SlotKey;
