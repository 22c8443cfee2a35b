use core::fmt::{self, Debug, Display, Formatter};
use core::str::FromStr;

/// A four-byte table identifier.
///
/// Tags name the tables of a font file (`head`, `OS/2`, ...). Each byte is
/// expected to be printable ASCII (`0x20..=0x7E`), with any trailing space
/// padding. Existing fonts do not always follow this rule, so construction
/// from raw bytes is unchecked; [`Tag::new_checked`] enforces it.
///
/// For more detail, see <https://learn.microsoft.com/en-us/typography/opentype/spec/otff#data-types>
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck_derive::AnyBitPattern))]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    /// The font header table.
    pub const HEAD: Tag = Tag(*b"head");
    /// The horizontal header table.
    pub const HHEA: Tag = Tag(*b"hhea");
    /// The vertical header table.
    pub const VHEA: Tag = Tag(*b"vhea");
    /// The OS/2 and Windows metrics table.
    pub const OS2: Tag = Tag(*b"OS/2");
    /// The PostScript table.
    pub const POST: Tag = Tag(*b"post");
    /// The PCL 5 table.
    pub const PCLT: Tag = Tag(*b"PCLT");
    /// The maximum profile table.
    pub const MAXP: Tag = Tag(*b"maxp");

    /// Construct a `Tag` from raw bytes, without validation.
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }

    /// Create a `Tag` from one to four printable ASCII bytes.
    ///
    /// Shorter input is padded with spaces. A space may not come first, and
    /// may only be followed by more spaces.
    pub const fn new_checked(src: &[u8]) -> Result<Self, InvalidTag> {
        if src.is_empty() || src.len() > 4 {
            return Err(InvalidTag::InvalidLength(src.len()));
        }
        let mut raw = [b' '; 4];
        let mut seen_space = false;
        let mut pos = 0;
        while pos < src.len() {
            let byte = src[pos];
            let valid = match byte {
                b' ' => pos > 0,
                0x21..=0x7E => !seen_space,
                _ => false,
            };
            if !valid {
                return Err(InvalidTag::InvalidByte { pos, byte });
            }
            seen_space |= byte == b' ';
            raw[pos] = byte;
            pos += 1;
        }
        Ok(Tag(raw))
    }

    /// Construct a `Tag` from a big-endian `u32`, without validation.
    pub const fn from_u32(src: u32) -> Self {
        Self(src.to_be_bytes())
    }

    /// Create a tag from raw big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Return the memory representation of this tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }
}

/// An error returned by [`Tag::new_checked`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidTag {
    /// The input was not between 1 and 4 bytes in length.
    InvalidLength(usize),
    /// The input contained a byte that is not allowed at its position.
    InvalidByte { pos: usize, byte: u8 },
}

impl Display for InvalidTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTag::InvalidLength(len) => write!(f, "Invalid length ({len})"),
            InvalidTag::InvalidByte { pos, byte } => {
                write!(f, "Invalid byte 0x{byte:X} at index {pos}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidTag {}

impl FromStr for Tag {
    type Err = InvalidTag;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Tag::new_checked(src.as_bytes())
    }
}

impl crate::Scalar for Tag {
    type Raw = [u8; 4];

    fn to_raw(self) -> Self::Raw {
        self.0
    }

    fn from_raw(raw: Self::Raw) -> Self {
        Self(raw)
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            if (0x20..=0x7E).contains(&byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "{{0x{byte:02X}}}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

impl Default for Tag {
    fn default() -> Self {
        Tag([b' '; 4])
    }
}

// human-readable formats get a string, others get the raw bytes.
#[cfg(feature = "serde")]
impl serde::Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match core::str::from_utf8(&self.0) {
            Ok(text) if serializer.is_human_readable() => serializer.serialize_str(text),
            _ => serde::Serialize::serialize(&self.0, serializer),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor;

        impl<'de> serde::de::Visitor<'de> for TagVisitor {
            type Value = Tag;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a four-byte ascii string")
            }

            // four bytes are taken as-is, so that tags read from font data survive
            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Tag, E> {
                match <[u8; 4]>::try_from(v.as_bytes()) {
                    Ok(raw) => Ok(Tag(raw)),
                    Err(_) => v.parse().map_err(serde::de::Error::custom),
                }
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<Tag, A::Error> {
                let mut raw = [0u8; 4];
                for (i, byte) in raw.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Tag(raw))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(TagVisitor)
        } else {
            <[u8; 4] as serde::Deserialize>::deserialize(deserializer).map(Tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn checked() {
        assert_eq!(Tag::new_checked(b"OS/2"), Ok(Tag::OS2));
        assert_eq!(Tag::new_checked(b"cvt"), Ok(Tag::new(b"cvt ")));
        assert!(Tag::new_checked(b"").is_err());
        assert!(Tag::new_checked(b"heads").is_err());
        assert!(Tag::new_checked(b" ab").is_err());
        assert!(Tag::new_checked(b"a b").is_err());
        assert!(Tag::new_checked(&[0x7F]).is_err());
        assert_eq!(
            Tag::new_checked(&[b'a', 0x19]),
            Err(InvalidTag::InvalidByte { pos: 1, byte: 0x19 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Tag::PCLT.to_string(), "PCLT");
        let bad_tag = Tag::new(&[0x19, b'z', b'@', 0x7F]);
        assert_eq!(bad_tag.to_string(), "{0x19}z@{0x7F}");
        assert_eq!(Tag::from_u32(0x6D61_7870), Tag::MAXP);
        assert!(Tag::HEAD == "head");
    }
}
