//! Platform identifiers
//!
//! The platform ID is the first of the four integers that qualify a `cmap`
//! encoding record or a `name` record. Encoding and language IDs only have a
//! meaning in the context of a platform; see [`Encoding`][crate::Encoding] and
//! [`Language`][crate::Language].

open_enum! {
    /// A platform identifier.
    ///
    /// Platform 2 (ISO) is deprecated and has no name of its own: it is
    /// carried as [`PlatformId::ISO`], which renders as `Unknown`.
    ///
    /// For more detail, see <https://learn.microsoft.com/en-us/typography/opentype/spec/name#platform-ids>
    pub enum PlatformId {
        /// Unicode, in the Apple sense ("Unicode platform").
        AppleUnicode = 0 => "AppleUnicode",
        /// Macintosh, with script manager encodings.
        Macintosh = 1 => "Macintosh",
        /// Windows.
        Microsoft = 3 => "Microsoft",
        /// Custom, font-specific encodings.
        Custom = 4 => "Custom",
        /// Adobe encodings, used in Type 1 and CFF derived fonts.
        Adobe = 7 => "Adobe",
    }
}

impl PlatformId {
    /// The deprecated ISO platform.
    pub const ISO: Self = Self::Unknown(2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display_names() {
        let names = PlatformId::known()
            .map(|id| id.to_string())
            .collect::<std::vec::Vec<_>>();
        assert_eq!(
            names,
            ["AppleUnicode", "Macintosh", "Microsoft", "Custom", "Adobe"]
        );
        for raw in [2u16, 5, 6, 8, 0xFFFF] {
            assert_eq!(PlatformId::new(raw).to_string(), "Unknown");
        }
        assert_eq!(PlatformId::ISO.to_string(), "Unknown");
    }

    #[test]
    fn raw_values_roundtrip() {
        for raw in 0..=u16::MAX {
            assert_eq!(PlatformId::new(raw).to_u16(), raw);
        }
        assert_eq!(PlatformId::new(7), PlatformId::Adobe);
        assert_eq!(PlatformId::new(2), PlatformId::ISO);
        assert!(!PlatformId::ISO.is_known());
    }

    #[test]
    fn unknown_compares_by_value() {
        assert_eq!(PlatformId::Unknown(3), PlatformId::Microsoft);
        assert!(PlatformId::Microsoft.is_known());
        assert!(PlatformId::Unknown(3).is_known());
        assert!(PlatformId::Macintosh < PlatformId::ISO);
        assert!(PlatformId::ISO < PlatformId::Microsoft);
    }
}
