//! Newtype identifiers for type-safe catalog references.
//!
//! Catalog records are keyed by opaque string uids assigned by the backend.
//! Use the `define_uid!` macro to create wrappers that prevent accidentally
//! passing a category uid where a navigation uid is expected.

/// Macro to define a type-safe uid wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Default`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use shoebox_core::define_uid;
/// define_uid!(ShelfUid);
/// define_uid!(BinUid);
///
/// let shelf = ShelfUid::new("a1");
/// let bin = BinUid::new("a1");
///
/// // These are different types, so this won't compile:
/// // let _: ShelfUid = bin;
/// assert_eq!(shelf.as_str(), bin.as_str());
/// ```
#[macro_export]
macro_rules! define_uid {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new uid from any string-like value.
            #[must_use]
            pub fn new(uid: impl Into<String>) -> Self {
                Self(uid.into())
            }

            /// Borrow the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the uid is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(uid: String) -> Self {
                Self(uid)
            }
        }

        impl From<&str> for $name {
            fn from(uid: &str) -> Self {
                Self(uid.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(uid: $name) -> Self {
                uid.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_uid!(NavigationUid);
define_uid!(CategoryUid);
define_uid!(FilterOptionUid);
define_uid!(ProductUid);
define_uid!(AssetId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_display_and_conversions() {
        let uid = NavigationUid::new("nav123");
        assert_eq!(uid.to_string(), "nav123");
        assert_eq!(uid.as_str(), "nav123");
        assert_eq!(String::from(uid.clone()), "nav123");
        assert_eq!(NavigationUid::from("nav123"), uid);
    }

    #[test]
    fn test_uid_serde_is_transparent() {
        let uid = ProductUid::new("p-1");
        let json = serde_json::to_string(&uid).unwrap();
        assert_eq!(json, "\"p-1\"");

        let back: ProductUid = serde_json::from_str("\"p-1\"").unwrap();
        assert_eq!(back, uid);
    }

    #[test]
    fn test_uid_is_empty() {
        assert!(FilterOptionUid::default().is_empty());
        assert!(!FilterOptionUid::new("f").is_empty());
    }
}
