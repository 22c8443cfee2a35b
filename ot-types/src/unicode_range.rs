//! The OS/2 Unicode range bitmask
//!
//! The `ulUnicodeRange1..4` fields of the OS/2 table together form a 128-bit
//! mask, where each of bits 0 through 122 declares coverage of a Unicode block
//! or group of blocks. Bits 123 through 127 are reserved; they are carried
//! through unchanged.
//!
//! [`UnicodeRange`] is a single 32-bit word, as stored in the table.
//! [`UnicodeRanges`] is the 128-bit view over all four words, and
//! [`UnicodeRangeBit`] names a single bit position within it.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// One 32-bit word of the OS/2 Unicode range bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck_derive::AnyBitPattern))]
#[repr(transparent)]
pub struct UnicodeRange(u32);

impl UnicodeRange {
    /// A word with no bits set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A word with every bit set.
    pub const fn all() -> Self {
        Self(u32::MAX)
    }

    /// Create a word from its raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bits of this word.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit set in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any bit is set in both `self` and `other`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if bit `bit` (in `0..32`) of this word is set.
    pub const fn is_bit_set(self, bit: u32) -> bool {
        bit < 32 && self.0 & (1 << bit) != 0
    }

    /// The bits set in either word.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// The bits set in both words.
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl BitOr for UnicodeRange {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        self.union(other)
    }
}

impl BitOrAssign for UnicodeRange {
    fn bitor_assign(&mut self, other: Self) {
        *self = *self | other;
    }
}

impl BitAnd for UnicodeRange {
    type Output = Self;
    fn bitand(self, other: Self) -> Self {
        self.intersection(other)
    }
}

impl BitAndAssign for UnicodeRange {
    fn bitand_assign(&mut self, other: Self) {
        *self = *self & other;
    }
}

impl fmt::Debug for UnicodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnicodeRange({:#010x})", self.0)
    }
}

crate::newtype_scalar!(UnicodeRange, [u8; 4]);

/// A bit position in the 128-bit Unicode range bitmask.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnicodeRangeBit(u8);

impl UnicodeRangeBit {
    /// Bit 0: Basic Latin.
    pub const BASIC_LATIN: Self = Self(0);
    /// Bit 1: Latin-1 Supplement.
    pub const LATIN1_SUPPLEMENT: Self = Self(1);
    /// Bit 2: Latin Extended-A.
    pub const LATIN_EXTENDED_A: Self = Self(2);
    /// Bit 3: Latin Extended-B.
    pub const LATIN_EXTENDED_B: Self = Self(3);
    /// Bit 4: IPA Extensions, Phonetic Extensions, Phonetic Extensions Supplement.
    pub const IPA_EXTENSIONS: Self = Self(4);
    /// Bit 5: Spacing Modifier Letters, Modifier Tone Letters.
    pub const SPACING_MODIFIER: Self = Self(5);
    /// Bit 6: Combining Diacritical Marks, Combining Diacritical Marks Supplement.
    pub const COMBINING_DIACRITICAL_MARKS: Self = Self(6);
    /// Bit 7: Greek and Coptic.
    pub const GREEK_AND_COPTIC: Self = Self(7);
    /// Bit 8: Coptic.
    pub const COPTIC: Self = Self(8);
    /// Bit 9: Cyrillic, Cyrillic Supplement, Cyrillic Extended-A, Cyrillic Extended-B.
    pub const CYRILLIC: Self = Self(9);
    /// Bit 10: Armenian.
    pub const ARMENIAN: Self = Self(10);
    /// Bit 11: Hebrew.
    pub const HEBREW: Self = Self(11);
    /// Bit 12: Vai.
    pub const VAI: Self = Self(12);
    /// Bit 13: Arabic, Arabic Supplement.
    pub const ARABIC: Self = Self(13);
    /// Bit 14: NKo.
    pub const NKO: Self = Self(14);
    /// Bit 15: Devanagari.
    pub const DEVANAGARI: Self = Self(15);
    /// Bit 16: Bengali.
    pub const BENGALI: Self = Self(16);
    /// Bit 17: Gurmukhi.
    pub const GURMUKHI: Self = Self(17);
    /// Bit 18: Gujarati.
    pub const GUJARATI: Self = Self(18);
    /// Bit 19: Oriya.
    pub const ORIYA: Self = Self(19);
    /// Bit 20: Tamil.
    pub const TAMIL: Self = Self(20);
    /// Bit 21: Telugu.
    pub const TELUGU: Self = Self(21);
    /// Bit 22: Kannada.
    pub const KANNADA: Self = Self(22);
    /// Bit 23: Malayalam.
    pub const MALAYALAM: Self = Self(23);
    /// Bit 24: Thai.
    pub const THAI: Self = Self(24);
    /// Bit 25: Lao.
    pub const LAO: Self = Self(25);
    /// Bit 26: Georgian, Georgian Supplement.
    pub const GEORGIAN: Self = Self(26);
    /// Bit 27: Balinese.
    pub const BALINESE: Self = Self(27);
    /// Bit 28: Hangul Jamo.
    pub const HANGUL_JAMO: Self = Self(28);
    /// Bit 29: Latin Extended Additional, Latin Extended-C, Latin Extended-D.
    pub const LATIN_EXTENDED_ADDITIONAL: Self = Self(29);
    /// Bit 30: Greek Extended.
    pub const GREEK_EXTENDED: Self = Self(30);
    /// Bit 31: General Punctuation, Supplemental Punctuation.
    pub const GENERAL_PUNCTUATION: Self = Self(31);
    /// Bit 32: Superscripts And Subscripts.
    pub const SUPERSCRIPTS_AND_SUBSCRIPTS: Self = Self(32);
    /// Bit 33: Currency Symbols.
    pub const CURRENCY_SYMBOLS: Self = Self(33);
    /// Bit 34: Combining Diacritical Marks For Symbols.
    pub const COMBINING_DIACRITICAL_MARKS_FOR_SYMBOLS: Self = Self(34);
    /// Bit 35: Letterlike Symbols.
    pub const LETTERLIKE_SYMBOLS: Self = Self(35);
    /// Bit 36: Number Forms.
    pub const NUMBER_FORMS: Self = Self(36);
    /// Bit 37: Arrows, Supplemental Arrows-A, Supplemental Arrows-B, Miscellaneous Symbols and Arrows.
    pub const ARROWS: Self = Self(37);
    /// Bit 38: Mathematical Operators, Supplemental Mathematical Operators, Miscellaneous Mathematical Symbols-A, Miscellaneous Mathematical Symbols-B.
    pub const MATHEMATICAL_OPERATORS: Self = Self(38);
    /// Bit 39: Miscellaneous Technical.
    pub const MISCELLANEOUS_TECHNICAL: Self = Self(39);
    /// Bit 40: Control Pictures.
    pub const CONTROL_PICTURES: Self = Self(40);
    /// Bit 41: Optical Character Recognition.
    pub const OPTICAL_CHARACTER_RECOGNITION: Self = Self(41);
    /// Bit 42: Enclosed Alphanumerics.
    pub const ENCLOSED_ALPHANUMERICS: Self = Self(42);
    /// Bit 43: Box Drawing.
    pub const BOX_DRAWING: Self = Self(43);
    /// Bit 44: Block Elements.
    pub const BLOCK_ELEMENTS: Self = Self(44);
    /// Bit 45: Geometric Shapes.
    pub const GEOMETRIC_SHAPES: Self = Self(45);
    /// Bit 46: Miscellaneous Symbols.
    pub const MISCELLANEOUS_SYMBOLS: Self = Self(46);
    /// Bit 47: Dingbats.
    pub const DINGBATS: Self = Self(47);
    /// Bit 48: CJK Symbols And Punctuation.
    pub const CJK_SYMBOLS_AND_PUNCTUATION: Self = Self(48);
    /// Bit 49: Hiragana.
    pub const HIRAGANA: Self = Self(49);
    /// Bit 50: Katakana, Katakana Phonetic Extensions.
    pub const KATAKANA: Self = Self(50);
    /// Bit 51: Bopomofo, Bopomofo Extended.
    pub const BOPOMOFO: Self = Self(51);
    /// Bit 52: Hangul Compatibility Jamo.
    pub const HANGUL_COMPATIBILITY_JAMO: Self = Self(52);
    /// Bit 53: Phags-pa.
    pub const PHAGS_PA: Self = Self(53);
    /// Bit 54: Enclosed CJK Letters And Months.
    pub const ENCLOSED_CJK_LETTERS_AND_MONTHS: Self = Self(54);
    /// Bit 55: CJK Compatibility.
    pub const CJK_COMPATIBILITY: Self = Self(55);
    /// Bit 56: Hangul Syllables.
    pub const HANGUL_SYLLABLES: Self = Self(56);
    /// Bit 57: Non-Plane 0.
    pub const NON_PLANE_0: Self = Self(57);
    /// Bit 58: Phoenician.
    pub const PHOENICIAN: Self = Self(58);
    /// Bit 59: CJK Unified Ideographs, CJK Radicals Supplement, Kangxi Radicals, Ideographic Description Characters, CJK Unified Ideographs Extension A, CJK Unified Ideographs Extension B, Kanbun.
    pub const CJK_UNIFIED_IDEOGRAPHS: Self = Self(59);
    /// Bit 60: Private Use Area (plane 0).
    pub const PRIVATE_USE: Self = Self(60);
    /// Bit 61: CJK Strokes, CJK Compatibility Ideographs, CJK Compatibility Ideographs Supplement.
    pub const CJK_STROKES: Self = Self(61);
    /// Bit 62: Alphabetic Presentation Forms.
    pub const ALPHABETIC_PRESENTATION_FORMS: Self = Self(62);
    /// Bit 63: Arabic Presentation Forms-A.
    pub const ARABIC_PRESENTATION_FORMS_A: Self = Self(63);
    /// Bit 64: Combining Half Marks.
    pub const COMBINING_HALF_MARKS: Self = Self(64);
    /// Bit 65: Vertical Forms, CJK Compatibility Forms.
    pub const VERTICAL_FORMS: Self = Self(65);
    /// Bit 66: Small Form Variants.
    pub const SMALL_FORM_VARIANTS: Self = Self(66);
    /// Bit 67: Arabic Presentation Forms-B.
    pub const ARABIC_PRESENTATION_FORMS_B: Self = Self(67);
    /// Bit 68: Halfwidth And Fullwidth Forms.
    pub const HALFWIDTH_AND_FULLWIDTH_FORMS: Self = Self(68);
    /// Bit 69: Specials.
    pub const SPECIALS: Self = Self(69);
    /// Bit 70: Tibetan.
    pub const TIBETAN: Self = Self(70);
    /// Bit 71: Syriac.
    pub const SYRIAC: Self = Self(71);
    /// Bit 72: Thaana.
    pub const THAANA: Self = Self(72);
    /// Bit 73: Sinhala.
    pub const SINHALA: Self = Self(73);
    /// Bit 74: Myanmar.
    pub const MYANMAR: Self = Self(74);
    /// Bit 75: Ethiopic, Ethiopic Supplement, Ethiopic Extended.
    pub const ETHIOPIC: Self = Self(75);
    /// Bit 76: Cherokee.
    pub const CHEROKEE: Self = Self(76);
    /// Bit 77: Unified Canadian Aboriginal Syllabics.
    pub const UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS: Self = Self(77);
    /// Bit 78: Ogham.
    pub const OGHAM: Self = Self(78);
    /// Bit 79: Runic.
    pub const RUNIC: Self = Self(79);
    /// Bit 80: Khmer, Khmer Symbols.
    pub const KHMER: Self = Self(80);
    /// Bit 81: Mongolian.
    pub const MONGOLIAN: Self = Self(81);
    /// Bit 82: Braille Patterns.
    pub const BRAILLE_PATTERNS: Self = Self(82);
    /// Bit 83: Yi Syllables, Yi Radicals.
    pub const YI_SYLLABLES: Self = Self(83);
    /// Bit 84: Tagalog, Hanunoo, Buhid, Tagbanwa.
    pub const PHILIPPINE: Self = Self(84);
    /// Bit 85: Old Italic.
    pub const OLD_ITALIC: Self = Self(85);
    /// Bit 86: Gothic.
    pub const GOTHIC: Self = Self(86);
    /// Bit 87: Deseret.
    pub const DESERET: Self = Self(87);
    /// Bit 88: Byzantine Musical Symbols, Musical Symbols, Ancient Greek Musical Notation.
    pub const MUSICAL_SYMBOLS: Self = Self(88);
    /// Bit 89: Mathematical Alphanumeric Symbols.
    pub const MATHEMATICAL_ALPHANUMERIC_SYMBOLS: Self = Self(89);
    /// Bit 90: Private Use (plane 15), Private Use (plane 16).
    pub const PRIVATE_USE_SUPPLEMENTARY: Self = Self(90);
    /// Bit 91: Variation Selectors, Variation Selectors Supplement.
    pub const VARIATION_SELECTORS: Self = Self(91);
    /// Bit 92: Tags.
    pub const TAGS: Self = Self(92);
    /// Bit 93: Limbu.
    pub const LIMBU: Self = Self(93);
    /// Bit 94: Tai Le.
    pub const TAI_LE: Self = Self(94);
    /// Bit 95: New Tai Lue.
    pub const NEW_TAI_LUE: Self = Self(95);
    /// Bit 96: Buginese.
    pub const BUGINESE: Self = Self(96);
    /// Bit 97: Glagolitic.
    pub const GLAGOLITIC: Self = Self(97);
    /// Bit 98: Tifinagh.
    pub const TIFINAGH: Self = Self(98);
    /// Bit 99: Yijing Hexagram Symbols.
    pub const YIJING_HEXAGRAM_SYMBOLS: Self = Self(99);
    /// Bit 100: Syloti Nagri.
    pub const SYLOTI_NAGRI: Self = Self(100);
    /// Bit 101: Linear B Syllabary, Linear B Ideograms, Aegean Numbers.
    pub const LINEAR_B: Self = Self(101);
    /// Bit 102: Ancient Greek Numbers.
    pub const ANCIENT_GREEK_NUMBERS: Self = Self(102);
    /// Bit 103: Ugaritic.
    pub const UGARITIC: Self = Self(103);
    /// Bit 104: Old Persian.
    pub const OLD_PERSIAN: Self = Self(104);
    /// Bit 105: Shavian.
    pub const SHAVIAN: Self = Self(105);
    /// Bit 106: Osmanya.
    pub const OSMANYA: Self = Self(106);
    /// Bit 107: Cypriot Syllabary.
    pub const CYPRIOT_SYLLABARY: Self = Self(107);
    /// Bit 108: Kharoshthi.
    pub const KHAROSHTHI: Self = Self(108);
    /// Bit 109: Tai Xuan Jing Symbols.
    pub const TAI_XUAN_JING_SYMBOLS: Self = Self(109);
    /// Bit 110: Cuneiform, Cuneiform Numbers and Punctuation.
    pub const CUNEIFORM: Self = Self(110);
    /// Bit 111: Counting Rod Numerals.
    pub const COUNTING_ROD_NUMERALS: Self = Self(111);
    /// Bit 112: Sundanese.
    pub const SUNDANESE: Self = Self(112);
    /// Bit 113: Lepcha.
    pub const LEPCHA: Self = Self(113);
    /// Bit 114: Ol Chiki.
    pub const OL_CHIKI: Self = Self(114);
    /// Bit 115: Saurashtra.
    pub const SAURASHTRA: Self = Self(115);
    /// Bit 116: Kayah Li.
    pub const KAYAH_LI: Self = Self(116);
    /// Bit 117: Rejang.
    pub const REJANG: Self = Self(117);
    /// Bit 118: Cham.
    pub const CHAM: Self = Self(118);
    /// Bit 119: Ancient Symbols.
    pub const ANCIENT_SYMBOLS: Self = Self(119);
    /// Bit 120: Phaistos Disc.
    pub const PHAISTOS_DISC: Self = Self(120);
    /// Bit 121: Carian, Lycian, Lydian.
    pub const OLD_ANATOLIAN: Self = Self(121);
    /// Bit 122: Domino Tiles, Mahjong Tiles.
    pub const GAME_TILES: Self = Self(122);

    /// The highest bit with an assigned meaning.
    pub const LAST_ASSIGNED: u8 = 122;

    /// Create a bit position, if `bit` is in `0..128`.
    pub const fn new(bit: u8) -> Option<Self> {
        if bit < 128 {
            Some(Self(bit))
        } else {
            None
        }
    }

    /// The bit position in the 128-bit mask.
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// The index of the `ulUnicodeRange` word holding this bit (0 for
    /// `ulUnicodeRange1`).
    pub const fn word(self) -> usize {
        (self.0 / 32) as usize
    }

    /// The mask for this bit within its word.
    pub const fn mask(self) -> UnicodeRange {
        UnicodeRange(1 << (self.0 % 32))
    }

    /// Returns `true` for the reserved bits 123 through 127.
    pub const fn is_reserved(self) -> bool {
        self.0 > Self::LAST_ASSIGNED
    }

    /// The name of the first Unicode block this bit covers.
    ///
    /// Returns `None` for reserved bits.
    pub fn name(self) -> Option<&'static str> {
        BIT_NAMES.get(self.0 as usize).copied()
    }

    /// Returns an iterator over every assigned bit, in order.
    pub fn known() -> impl Iterator<Item = Self> + Clone {
        (0..=Self::LAST_ASSIGNED).map(Self)
    }
}

impl fmt::Display for UnicodeRangeBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("Reserved"))
    }
}

static BIT_NAMES: [&str; 123] = [
    "Basic Latin",
    "Latin-1 Supplement",
    "Latin Extended-A",
    "Latin Extended-B",
    "IPA Extensions",
    "Spacing Modifier Letters",
    "Combining Diacritical Marks",
    "Greek and Coptic",
    "Coptic",
    "Cyrillic",
    "Armenian",
    "Hebrew",
    "Vai",
    "Arabic",
    "NKo",
    "Devanagari",
    "Bengali",
    "Gurmukhi",
    "Gujarati",
    "Oriya",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Thai",
    "Lao",
    "Georgian",
    "Balinese",
    "Hangul Jamo",
    "Latin Extended Additional",
    "Greek Extended",
    "General Punctuation",
    "Superscripts And Subscripts",
    "Currency Symbols",
    "Combining Diacritical Marks For Symbols",
    "Letterlike Symbols",
    "Number Forms",
    "Arrows",
    "Mathematical Operators",
    "Miscellaneous Technical",
    "Control Pictures",
    "Optical Character Recognition",
    "Enclosed Alphanumerics",
    "Box Drawing",
    "Block Elements",
    "Geometric Shapes",
    "Miscellaneous Symbols",
    "Dingbats",
    "CJK Symbols And Punctuation",
    "Hiragana",
    "Katakana",
    "Bopomofo",
    "Hangul Compatibility Jamo",
    "Phags-pa",
    "Enclosed CJK Letters And Months",
    "CJK Compatibility",
    "Hangul Syllables",
    "Non-Plane 0",
    "Phoenician",
    "CJK Unified Ideographs",
    "Private Use Area (plane 0)",
    "CJK Strokes",
    "Alphabetic Presentation Forms",
    "Arabic Presentation Forms-A",
    "Combining Half Marks",
    "Vertical Forms",
    "Small Form Variants",
    "Arabic Presentation Forms-B",
    "Halfwidth And Fullwidth Forms",
    "Specials",
    "Tibetan",
    "Syriac",
    "Thaana",
    "Sinhala",
    "Myanmar",
    "Ethiopic",
    "Cherokee",
    "Unified Canadian Aboriginal Syllabics",
    "Ogham",
    "Runic",
    "Khmer",
    "Mongolian",
    "Braille Patterns",
    "Yi Syllables",
    "Tagalog",
    "Old Italic",
    "Gothic",
    "Deseret",
    "Byzantine Musical Symbols",
    "Mathematical Alphanumeric Symbols",
    "Private Use (plane 15)",
    "Variation Selectors",
    "Tags",
    "Limbu",
    "Tai Le",
    "New Tai Lue",
    "Buginese",
    "Glagolitic",
    "Tifinagh",
    "Yijing Hexagram Symbols",
    "Syloti Nagri",
    "Linear B Syllabary",
    "Ancient Greek Numbers",
    "Ugaritic",
    "Old Persian",
    "Shavian",
    "Osmanya",
    "Cypriot Syllabary",
    "Kharoshthi",
    "Tai Xuan Jing Symbols",
    "Cuneiform",
    "Counting Rod Numerals",
    "Sundanese",
    "Lepcha",
    "Ol Chiki",
    "Saurashtra",
    "Kayah Li",
    "Rejang",
    "Cham",
    "Ancient Symbols",
    "Phaistos Disc",
    "Carian",
    "Domino Tiles",
];

/// The full 128-bit Unicode range bitmask.
///
/// This is a view over the four 32-bit words of the OS/2 table, in table
/// order: `ulUnicodeRange1` holds bits 0 through 31.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnicodeRanges([UnicodeRange; 4]);

impl UnicodeRanges {
    /// Create a mask from four words, in table order.
    pub const fn new(words: [UnicodeRange; 4]) -> Self {
        Self(words)
    }

    /// Create a mask from four raw words, in table order.
    pub const fn from_words(words: [u32; 4]) -> Self {
        Self([
            UnicodeRange(words[0]),
            UnicodeRange(words[1]),
            UnicodeRange(words[2]),
            UnicodeRange(words[3]),
        ])
    }

    /// The four words of this mask, in table order.
    pub const fn words(self) -> [UnicodeRange; 4] {
        self.0
    }

    /// The four raw words of this mask, in table order.
    pub const fn to_words(self) -> [u32; 4] {
        [self.0[0].0, self.0[1].0, self.0[2].0, self.0[3].0]
    }

    /// Returns `true` if bit `bit` (in `0..128`) is set.
    ///
    /// Bits outside of the mask are never set.
    pub const fn is_bit_set(self, bit: u32) -> bool {
        if bit >= 128 {
            return false;
        }
        self.0[(bit / 32) as usize].is_bit_set(bit % 32)
    }

    /// Returns `true` if the given bit is set.
    pub const fn contains(self, bit: UnicodeRangeBit) -> bool {
        self.0[bit.word()].contains(bit.mask())
    }

    /// Set the given bit.
    pub fn insert(&mut self, bit: UnicodeRangeBit) {
        self.0[bit.word()] |= bit.mask();
    }

    /// Clear the given bit.
    pub fn remove(&mut self, bit: UnicodeRangeBit) {
        let word = &mut self.0[bit.word()];
        *word = UnicodeRange(word.0 & !bit.mask().0);
    }

    /// Returns `true` if no bits are set.
    pub fn is_empty(self) -> bool {
        self.0.iter().all(|word| word.is_empty())
    }

    /// The bits set in either mask.
    pub fn union(self, other: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] | other.0[i]))
    }

    /// The bits set in both masks.
    pub fn intersection(self, other: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] & other.0[i]))
    }

    /// Returns an iterator over the set bits, in ascending order.
    ///
    /// Reserved bits are included if they are set.
    pub fn iter(self) -> impl Iterator<Item = UnicodeRangeBit> + Clone {
        (0..128u8)
            .filter(move |bit| self.is_bit_set(*bit as u32))
            .map(UnicodeRangeBit)
    }
}

impl BitOr for UnicodeRanges {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        self.union(other)
    }
}

impl BitAnd for UnicodeRanges {
    type Output = Self;
    fn bitand(self, other: Self) -> Self {
        self.intersection(other)
    }
}

impl FromIterator<UnicodeRangeBit> for UnicodeRanges {
    fn from_iter<I: IntoIterator<Item = UnicodeRangeBit>>(iter: I) -> Self {
        let mut ranges = Self::default();
        iter.into_iter().for_each(|bit| ranges.insert(bit));
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn bit_to_word_mapping() {
        let ranges = UnicodeRanges::from_words([0, 0, 0, 1 << 26]);
        assert!(ranges.is_bit_set(122));
        assert!(ranges.contains(UnicodeRangeBit::GAME_TILES));
        assert!(!ranges.is_bit_set(26));
        assert!(!ranges.is_bit_set(128));

        let ranges = UnicodeRanges::from_words([1, 1 << 25, 0, 0]);
        assert!(ranges.contains(UnicodeRangeBit::BASIC_LATIN));
        assert_eq!(UnicodeRangeBit::PHOENICIAN.word(), 1);
        assert_eq!(UnicodeRangeBit::PHOENICIAN.mask().bits(), 1 << 26);
        assert!(!ranges.contains(UnicodeRangeBit::PHOENICIAN));
        assert!(ranges.contains(UnicodeRangeBit::NON_PLANE_0));

        // bit 58 is the 27th bit of the second word
        let ranges = UnicodeRanges::from_words([0, 1 << 26, 0, 0]);
        assert!(ranges.contains(UnicodeRangeBit::PHOENICIAN));
        assert!(ranges.is_bit_set(58));
        assert!(!ranges.is_bit_set(57));
    }

    #[test]
    fn every_bit_has_a_position() {
        for bit in 0..128u8 {
            let bit = UnicodeRangeBit::new(bit).unwrap();
            let mut ranges = UnicodeRanges::default();
            ranges.insert(bit);
            assert!(ranges.is_bit_set(bit.to_u8() as u32));
            assert_eq!(ranges.iter().collect::<std::vec::Vec<_>>(), [bit]);
            ranges.remove(bit);
            assert!(ranges.is_empty());
        }
        assert_eq!(UnicodeRangeBit::new(128), None);
        assert_eq!(UnicodeRangeBit::known().count(), 123);
    }

    #[test]
    fn reserved_bits_roundtrip() {
        let words = [0, 0, 0, 0xF800_0000];
        let ranges = UnicodeRanges::from_words(words);
        assert_eq!(ranges.to_words(), words);
        let reserved = ranges.iter().collect::<std::vec::Vec<_>>();
        assert_eq!(reserved.len(), 5);
        assert!(reserved.iter().all(|bit| bit.is_reserved()));
        assert_eq!(reserved[0].to_string(), "Reserved");
    }

    #[test]
    fn set_operations() {
        let latin = [
            UnicodeRangeBit::BASIC_LATIN,
            UnicodeRangeBit::LATIN1_SUPPLEMENT,
            UnicodeRangeBit::LATIN_EXTENDED_A,
        ]
        .into_iter()
        .collect::<UnicodeRanges>();
        let other = [UnicodeRangeBit::BASIC_LATIN, UnicodeRangeBit::CYRILLIC]
            .into_iter()
            .collect::<UnicodeRanges>();
        assert_eq!((latin & other).to_words(), [1, 0, 0, 0]);
        assert_eq!((latin | other).to_words(), [0b10_0000_0111, 0, 0, 0]);

        let word = UnicodeRange::from_bits(0b0110);
        assert!(word.contains(UnicodeRange::from_bits(0b0100)));
        assert!(!word.contains(UnicodeRange::from_bits(0b1100)));
        assert!(word.intersects(UnicodeRange::from_bits(0b1100)));
        assert_eq!(word | UnicodeRange::from_bits(1), UnicodeRange::from_bits(0b0111));
        assert_eq!(word & UnicodeRange::from_bits(3), UnicodeRange::from_bits(0b0010));
    }

    #[test]
    fn names() {
        assert_eq!(UnicodeRangeBit::BASIC_LATIN.to_string(), "Basic Latin");
        assert_eq!(UnicodeRangeBit::CYRILLIC.name(), Some("Cyrillic"));
        assert_eq!(UnicodeRangeBit::GAME_TILES.name(), Some("Domino Tiles"));
        assert_eq!(UnicodeRangeBit::new(123).unwrap().name(), None);
    }
}
