//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Search primitives only rely on this trait, so any catalog-like record keyed by
/// an identifier can be looked up the same way.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
