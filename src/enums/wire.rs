//! Bidirectional wire-code mapping shared by every GetAlts enumeration.

use thiserror::Error;

/// A wire code that does not belong to the enumeration it was decoded as.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} wire code '{code}'")]
pub struct UnknownWireCode {
    /// Name of the enumeration the code was decoded as.
    pub kind: &'static str,
    /// The offending code.
    pub code: String,
}

/// Declares a closed enumeration backed by a wire-code table.
///
/// Encoding (`code`) and decoding (`from_code`) are both generated from the
/// single table, so the two directions cannot drift apart. Decoding an unknown
/// code fails with [`UnknownWireCode`].
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Get the wire code for the API.
            pub const fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Decode a wire code.
            pub fn from_code(code: &str) -> ::std::result::Result<Self, $crate::enums::UnknownWireCode> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err($crate::enums::UnknownWireCode {
                        kind: $kind,
                        code: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.code())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::enums::UnknownWireCode;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $name::from_code(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                $name::from_code(&raw).map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use wire_enum;
