//! Entity trait: a stable identity whose state changes over time.
//!
//! A slot keeps its key for the life of a ledger while its remaining count
//! moves up and down.

/// Something addressable by a stable identifier.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier.
    fn id(&self) -> &Self::Id;
}
