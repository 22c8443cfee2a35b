//! The OS/2 code page range bitmask

use core::fmt;
use core::ops::{BitAnd, BitOr};

/// The code pages a font is functional for.
///
/// This is the 64-bit union of the `ulCodePageRange1` and `ulCodePageRange2`
/// fields of the OS/2 table, which are only present from version 1 onwards.
/// Bit 0 is the lowest bit of `ulCodePageRange1`.
///
/// The associated constants each have exactly one bit set; unassigned bits are
/// reserved but carried through unchanged.
///
/// For more detail, see <https://learn.microsoft.com/en-us/typography/opentype/spec/os2#ulcodepagerange>
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodePageRange(u64);

impl CodePageRange {
    /// 1252, Latin 1.
    pub const LATIN_1: Self = Self::bit(0);
    /// 1250, Latin 2: Eastern Europe.
    pub const LATIN_2: Self = Self::bit(1);
    /// 1251, Cyrillic.
    pub const CYRILLIC: Self = Self::bit(2);
    /// 1253, Greek.
    pub const GREEK: Self = Self::bit(3);
    /// 1254, Turkish.
    pub const TURKISH: Self = Self::bit(4);
    /// 1255, Hebrew.
    pub const HEBREW: Self = Self::bit(5);
    /// 1256, Arabic.
    pub const ARABIC: Self = Self::bit(6);
    /// 1257, Windows Baltic.
    pub const WINDOWS_BALTIC: Self = Self::bit(7);
    /// 1258, Vietnamese.
    pub const VIETNAMESE: Self = Self::bit(8);
    /// 874, Thai.
    pub const THAI: Self = Self::bit(16);
    /// 932, JIS/Japan.
    pub const JIS_JAPAN: Self = Self::bit(17);
    /// 936, Chinese: Simplified chars, PRC and Singapore.
    pub const CHINESE_SIMPLIFIED: Self = Self::bit(18);
    /// 949, Korean Wansung.
    pub const KOREAN_WANSUNG: Self = Self::bit(19);
    /// 950, Chinese: Traditional chars, Taiwan and Hong Kong.
    pub const CHINESE_TRADITIONAL: Self = Self::bit(20);
    /// 1361, Korean Johab.
    pub const KOREAN_JOHAB: Self = Self::bit(21);
    /// Macintosh character set (US Roman).
    pub const MACINTOSH: Self = Self::bit(29);
    /// OEM character set.
    pub const OEM: Self = Self::bit(30);
    /// Symbol character set.
    pub const SYMBOL: Self = Self::bit(31);
    /// 869, IBM Greek.
    pub const IBM_GREEK: Self = Self::bit(48);
    /// 866, MS-DOS Russian.
    pub const MS_DOS_RUSSIAN: Self = Self::bit(49);
    /// 865, MS-DOS Nordic.
    pub const MS_DOS_NORDIC: Self = Self::bit(50);
    /// 864, Arabic.
    pub const ARABIC_864: Self = Self::bit(51);
    /// 863, MS-DOS Canadian French.
    pub const MS_DOS_CANADIAN_FRENCH: Self = Self::bit(52);
    /// 862, Hebrew.
    pub const HEBREW_862: Self = Self::bit(53);
    /// 861, MS-DOS Icelandic.
    pub const MS_DOS_ICELANDIC: Self = Self::bit(54);
    /// 860, MS-DOS Portuguese.
    pub const MS_DOS_PORTUGUESE: Self = Self::bit(55);
    /// 857, IBM Turkish.
    pub const IBM_TURKISH: Self = Self::bit(56);
    /// 855, IBM Cyrillic; primarily Russian.
    pub const IBM_CYRILLIC: Self = Self::bit(57);
    /// 852, Latin 2.
    pub const LATIN_2_852: Self = Self::bit(58);
    /// 775, MS-DOS Baltic.
    pub const MS_DOS_BALTIC: Self = Self::bit(59);
    /// 737, Greek; former 437 G.
    pub const GREEK_737: Self = Self::bit(60);
    /// 708, Arabic; ASMO 708.
    pub const ARABIC_ASMO_708: Self = Self::bit(61);
    /// 850, WE/Latin 1.
    pub const WE_LATIN_1: Self = Self::bit(62);
    /// 437, US.
    pub const US: Self = Self::bit(63);

    const fn bit(bit: u32) -> Self {
        Self(1 << bit)
    }

    /// A range with no bits set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a range from its raw 64 bits.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw 64 bits of this range.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Combine the `ulCodePageRange1` and `ulCodePageRange2` fields.
    pub const fn from_words(range1: u32, range2: u32) -> Self {
        Self((range1 as u64) | ((range2 as u64) << 32))
    }

    /// Split into the `ulCodePageRange1` and `ulCodePageRange2` fields.
    pub const fn to_words(self) -> (u32, u32) {
        (self.0 as u32, (self.0 >> 32) as u32)
    }

    /// Returns `true` if bit `bit` (in `0..64`) is set.
    pub const fn is_bit_set(self, bit: u32) -> bool {
        bit < 64 && self.0 & (1 << bit) != 0
    }

    /// Returns `true` if every bit set in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for CodePageRange {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitAnd for CodePageRange {
    type Output = Self;
    fn bitand(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl fmt::Debug for CodePageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodePageRange({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words() {
        let range = CodePageRange::from_words(0x2000_0003, 0x8000_0000);
        assert!(range.contains(CodePageRange::LATIN_1 | CodePageRange::LATIN_2));
        assert!(range.contains(CodePageRange::MACINTOSH));
        assert!(range.contains(CodePageRange::US));
        assert!(!range.contains(CodePageRange::SYMBOL));
        assert!(range.is_bit_set(63));
        assert!(!range.is_bit_set(64));
        assert_eq!(range.to_words(), (0x2000_0003, 0x8000_0000));
    }

    #[test]
    fn reserved_bits_survive() {
        let range = CodePageRange::from_words(0x0000_FE00, 0x0000_FFFF);
        assert_eq!(range.to_words(), (0x0000_FE00, 0x0000_FFFF));
        assert!((range & CodePageRange::THAI).is_empty());
    }
}
