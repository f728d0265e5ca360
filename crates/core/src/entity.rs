//! Entity trait: identity that survives copies.

/// Entity marker + minimal interface.
///
/// Two concerts with the same band and date are still different concerts;
/// the id is what tells them apart.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
