//! The declaration macro shared by the identifier enumerations.

/// Declare an enumeration over a `u16` namespace that keeps unknown values.
///
/// Each named variant maps to exactly one raw value and a display name. Any
/// other raw value is stored in the generated `Unknown` variant, so
/// `Self::new(raw).to_u16() == raw` for every input.
///
/// Equality, hashing and ordering go through the raw value: an `Unknown`
/// holding the value of a named variant compares equal to that variant.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $text:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value without a name in this namespace.
            Unknown(u16),
        }

        impl $name {
            /// Create a new identifier from a raw u16 value.
            pub const fn new(raw: u16) -> Self {
                match raw {
                    $( $value => Self::$variant, )*
                    other => Self::Unknown(other),
                }
            }

            /// Return the identifier as a u16.
            pub const fn to_u16(self) -> u16 {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Unknown(raw) => raw,
                }
            }

            /// Returns `true` if the raw value has a name in this namespace.
            pub const fn is_known(self) -> bool {
                Self::new(self.to_u16()).name().is_some()
            }

            /// The display name of a known value.
            pub const fn name(self) -> Option<&'static str> {
                match Self::new(self.to_u16()) {
                    $( Self::$variant => Some($text), )*
                    Self::Unknown(_) => None,
                }
            }

            /// Returns an iterator over every named value, in declaration order.
            pub fn known() -> impl Iterator<Item = Self> + Clone {
                [$( Self::$variant, )*].into_iter()
            }

            /// Return the memory representation of this identifier as a byte array in big-endian
            /// (network) byte order.
            pub const fn to_be_bytes(self) -> [u8; 2] {
                self.to_u16().to_be_bytes()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.to_u16() == other.to_u16()
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.to_u16().cmp(&other.to_u16())
            }
        }

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                self.to_u16().hash(state)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<u16> for $name {
            fn from(value: u16) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for u16 {
            fn from(value: $name) -> u16 {
                value.to_u16()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name().unwrap_or("Unknown"))
            }
        }

        impl $crate::Scalar for $name {
            type Raw = [u8; 2];
            fn to_raw(self) -> [u8; 2] {
                self.to_be_bytes()
            }

            fn from_raw(raw: [u8; 2]) -> Self {
                Self::new(u16::from_be_bytes(raw))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u16(self.to_u16())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <u16 as serde::Deserialize>::deserialize(deserializer).map(Self::new)
            }
        }
    };
}
