//! Identity-based equality for entities.
//!
//! An entity is compared by its identifier, never by its remaining fields: two
//! instances of the same concrete type with the same identifier are the same
//! entity even when every other field differs. The concrete Rust type is the
//! discriminant, so instances of different entity types cannot be compared at
//! all - the mismatch is a compile error.

/// A type with a stable identity.
pub trait Entity {
    type Id: Eq + std::hash::Hash;

    fn id(&self) -> &Self::Id;
}

/// Derive `PartialEq`, `Eq` and `Hash` for an [`Entity`] from its identifier
/// alone.
#[macro_export]
macro_rules! impl_identity_eq {
    ($entity:ty) => {
        impl ::std::cmp::PartialEq for $entity {
            fn eq(&self, other: &Self) -> bool {
                $crate::domain::entity::Entity::id(self)
                    == $crate::domain::entity::Entity::id(other)
            }
        }

        impl ::std::cmp::Eq for $entity {}

        impl ::std::hash::Hash for $entity {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash($crate::domain::entity::Entity::id(self), state)
            }
        }
    };
}
