//! UUID-backed newtype identifiers.
//!
//! [`define_id!`] stamps out one wrapper type per entity kind so identifiers of
//! different kinds cannot be mixed up: comparing a `UserId` with any other kind
//! of identifier is a compile error, not a runtime check. The wrapper performs
//! no validation of its own; equality, ordering and hashing delegate to the
//! underlying UUID.

/// Define a UUID-backed identifier newtype.
///
/// The expansion references `uuid` and `serde` by absolute path, so any crate
/// invoking the macro needs both in its dependency table.
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $name(::uuid::Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            $vis fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID, without validation.
            $vis fn from_uuid(value: ::uuid::Uuid) -> Self {
                Self(value)
            }

            $vis fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl ::std::convert::From<::uuid::Uuid> for $name {
            fn from(value: ::uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl ::std::convert::From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    define_id! {
        struct SampleId;
    }

    #[test]
    fn same_underlying_value_means_equal() {
        let raw = Uuid::new_v4();
        assert_eq!(SampleId::from_uuid(raw), SampleId::from_uuid(raw));
    }

    #[test]
    fn equal_ids_hash_identically() {
        use std::collections::HashSet;

        let raw = Uuid::new_v4();
        let mut set = HashSet::new();
        set.insert(SampleId::from_uuid(raw));
        assert!(set.contains(&SampleId::from_uuid(raw)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn different_underlying_values_are_not_equal() {
        assert_ne!(SampleId::new(), SampleId::new());
    }

    #[test]
    fn display_delegates_to_the_uuid() {
        let raw = Uuid::new_v4();
        assert_eq!(SampleId::from_uuid(raw).to_string(), raw.to_string());
    }

    #[test]
    fn ordering_delegates_to_the_uuid() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(
            SampleId::from_uuid(a).cmp(&SampleId::from_uuid(b)),
            a.cmp(&b)
        );
    }

    #[test]
    fn serializes_as_the_bare_uuid() {
        let id = SampleId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
