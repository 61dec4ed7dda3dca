//! Entity trait: identity that survives changes to the other attributes.

/// Entity marker + minimal interface.
///
/// An inventory record is identified by its location code: two rows for the
/// same code describe the same slot, and the later one replaces the earlier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
