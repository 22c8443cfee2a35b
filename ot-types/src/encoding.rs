//! Encoding identifiers, scoped by platform

use crate::PlatformId;

open_enum! {
    /// Encoding identifiers for the [Unicode platform][PlatformId::AppleUnicode].
    pub enum AppleUnicodeEncoding {
        /// Unicode 1.0 semantics; deprecated.
        Default = 0 => "Default",
        /// Unicode 1.1 semantics; deprecated.
        Unicode1_1 = 1 => "Unicode 1.1",
        /// ISO/IEC 10646 semantics; deprecated.
        Iso10646 = 2 => "ISO 10646",
        /// Unicode 2.0 and onwards semantics, Unicode BMP only.
        Unicode2_0 = 3 => "Unicode 2.0 BMP",
        /// Unicode 2.0 and onwards semantics, Unicode full repertoire.
        Unicode32 = 4 => "Unicode 3.1+ UCS-4",
        /// Unicode variation sequences, for use with subtable format 14.
        VariantSelector = 5 => "Variant Selector",
        /// Unicode full repertoire, for use with subtable format 13.
        FullUnicode = 6 => "Full Unicode",
    }
}

open_enum! {
    /// Encoding identifiers for the [Macintosh platform][PlatformId::Macintosh].
    ///
    /// These are the historical Apple script manager codes.
    pub enum MacEncoding {
        Roman = 0 => "Roman",
        Japanese = 1 => "Japanese",
        TraditionalChinese = 2 => "Traditional Chinese",
        Korean = 3 => "Korean",
        Arabic = 4 => "Arabic",
        Hebrew = 5 => "Hebrew",
        Greek = 6 => "Greek",
        Russian = 7 => "Russian",
        RSymbol = 8 => "RSymbol",
        Devanagari = 9 => "Devanagari",
        Gurmukhi = 10 => "Gurmukhi",
        Gujarati = 11 => "Gujarati",
        Oriya = 12 => "Oriya",
        Bengali = 13 => "Bengali",
        Tamil = 14 => "Tamil",
        Telugu = 15 => "Telugu",
        Kannada = 16 => "Kannada",
        Malayalam = 17 => "Malayalam",
        Sinhalese = 18 => "Sinhalese",
        Burmese = 19 => "Burmese",
        Khmer = 20 => "Khmer",
        Thai = 21 => "Thai",
        Laotian = 22 => "Laotian",
        Georgian = 23 => "Georgian",
        Armenian = 24 => "Armenian",
        SimplifiedChinese = 25 => "Simplified Chinese",
        Tibetan = 26 => "Tibetan",
        Mongolian = 27 => "Mongolian",
        Geez = 28 => "Geez",
        Slavic = 29 => "Slavic",
        Vietnamese = 30 => "Vietnamese",
        Sindhi = 31 => "Sindhi",
        /// Uninterpreted; used for symbol fonts.
        Uninterpreted = 32 => "Uninterpreted",
    }
}

open_enum! {
    /// Encoding identifiers for the deprecated ISO platform.
    pub enum IsoEncoding {
        Ascii7 = 0 => "7-bit ASCII",
        Iso10646 = 1 => "ISO 10646",
        Iso8859_1 = 2 => "ISO 8859-1",
    }
}

open_enum! {
    /// Encoding identifiers for the [Windows platform][PlatformId::Microsoft].
    pub enum MicrosoftEncoding {
        /// Symbol fonts; characters are mapped into the private use area.
        Symbol = 0 => "Symbol",
        /// Unicode BMP (UCS-2).
        UnicodeBmp = 1 => "Unicode BMP",
        ShiftJis = 2 => "ShiftJIS",
        /// Simplified Chinese (GB 2312).
        Prc = 3 => "PRC",
        Big5 = 4 => "Big5",
        Wansung = 5 => "Wansung",
        Johab = 6 => "Johab",
        /// Unicode full repertoire (UCS-4).
        UnicodeFull = 10 => "Unicode full repertoire",
    }
}

open_enum! {
    /// Encoding identifiers for the [Adobe platform][PlatformId::Adobe].
    pub enum AdobeEncoding {
        Standard = 0 => "Standard",
        Expert = 1 => "Expert",
        Custom = 2 => "Custom",
        Latin1 = 3 => "Latin-1",
    }
}

/// An encoding identifier interpreted in the context of its platform.
///
/// Encoding IDs are only meaningful together with the platform ID of the same
/// record. Values for platforms without a defined namespace (custom, or an
/// unknown platform) are kept as [`Encoding::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    AppleUnicode(AppleUnicodeEncoding),
    Macintosh(MacEncoding),
    Iso(IsoEncoding),
    Microsoft(MicrosoftEncoding),
    Adobe(AdobeEncoding),
    Other(u16),
}

impl Encoding {
    /// Interpret a raw encoding ID for the given platform.
    pub const fn new(platform: PlatformId, raw: u16) -> Self {
        match platform.to_u16() {
            0 => Encoding::AppleUnicode(AppleUnicodeEncoding::new(raw)),
            1 => Encoding::Macintosh(MacEncoding::new(raw)),
            2 => Encoding::Iso(IsoEncoding::new(raw)),
            3 => Encoding::Microsoft(MicrosoftEncoding::new(raw)),
            7 => Encoding::Adobe(AdobeEncoding::new(raw)),
            _ => Encoding::Other(raw),
        }
    }

    /// The raw encoding ID.
    pub const fn to_u16(self) -> u16 {
        match self {
            Encoding::AppleUnicode(id) => id.to_u16(),
            Encoding::Macintosh(id) => id.to_u16(),
            Encoding::Iso(id) => id.to_u16(),
            Encoding::Microsoft(id) => id.to_u16(),
            Encoding::Adobe(id) => id.to_u16(),
            Encoding::Other(raw) => raw,
        }
    }

    /// The display name of this encoding, if it has one on its platform.
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Encoding::AppleUnicode(id) => id.name(),
            Encoding::Macintosh(id) => id.name(),
            Encoding::Iso(id) => id.name(),
            Encoding::Microsoft(id) => id.name(),
            Encoding::Adobe(id) => id.name(),
            Encoding::Other(_) => None,
        }
    }

    /// Returns `true` if this encoding maps Unicode code points.
    ///
    /// This is the case for every encoding on the Unicode platform, and for
    /// the UCS-2 and UCS-4 encodings on the Windows platform.
    pub fn is_unicode(self) -> bool {
        match self {
            Encoding::AppleUnicode(_) => true,
            Encoding::Microsoft(id) => {
                id == MicrosoftEncoding::UnicodeBmp || id == MicrosoftEncoding::UnicodeFull
            }
            Encoding::Iso(id) => id == IsoEncoding::Iso10646,
            _ => false,
        }
    }
}

impl core::fmt::Display for Encoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name().unwrap_or("Unknown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_by_platform() {
        assert_eq!(
            Encoding::new(PlatformId::Microsoft, 1),
            Encoding::Microsoft(MicrosoftEncoding::UnicodeBmp)
        );
        assert_eq!(
            Encoding::new(PlatformId::Macintosh, 1),
            Encoding::Macintosh(MacEncoding::Japanese)
        );
        assert_eq!(
            Encoding::new(PlatformId::AppleUnicode, 3),
            Encoding::AppleUnicode(AppleUnicodeEncoding::Unicode2_0)
        );
        assert_eq!(
            Encoding::new(PlatformId::Adobe, 3),
            Encoding::Adobe(AdobeEncoding::Latin1)
        );
        assert_eq!(
            Encoding::new(PlatformId::ISO, 2),
            Encoding::Iso(IsoEncoding::Iso8859_1)
        );
        assert_eq!(Encoding::new(PlatformId::Custom, 1), Encoding::Other(1));
    }

    #[test]
    fn unknown_values_are_preserved() {
        for platform in [0u16, 1, 2, 3, 4, 7, 9] {
            for raw in [0u16, 7, 11, 33, 0x1234, u16::MAX] {
                let encoding = Encoding::new(PlatformId::new(platform), raw);
                assert_eq!(encoding.to_u16(), raw);
                assert_eq!(encoding.to_u16().to_be_bytes(), raw.to_be_bytes());
            }
        }
        assert_eq!(MicrosoftEncoding::new(7), MicrosoftEncoding::Unknown(7));
        assert_eq!(MacEncoding::new(33).name(), None);
        assert_eq!(MacEncoding::new(32), MacEncoding::Uninterpreted);
    }

    #[test]
    fn unicode_encodings() {
        assert!(Encoding::new(PlatformId::Microsoft, 10).is_unicode());
        assert!(!Encoding::new(PlatformId::Microsoft, 0).is_unicode());
        assert!(Encoding::new(PlatformId::AppleUnicode, 6).is_unicode());
        assert!(!Encoding::new(PlatformId::Macintosh, 0).is_unicode());
    }

    #[test]
    fn known_values_are_dense() {
        assert_eq!(MacEncoding::known().count(), 33);
        assert!(MacEncoding::known()
            .enumerate()
            .all(|(i, id)| id.to_u16() as usize == i));
        assert_eq!(MicrosoftEncoding::known().count(), 8);
        assert_eq!(AdobeEncoding::known().count(), 4);
    }
}
