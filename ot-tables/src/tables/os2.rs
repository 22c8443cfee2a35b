//! The [os2](https://docs.microsoft.com/en-us/typography/opentype/spec/os2) table

use core::ops::Range;

use types::{CodePageRange, Tag, UnicodeRange, UnicodeRanges};

use crate::{FontData, FontRead, FontWrite, ReadError, TableWriter, Validate, ValidationCtx};

/// 'OS/2'
pub const TAG: Tag = Tag::OS2;

/// The [OS/2 and Windows metrics](https://docs.microsoft.com/en-us/typography/opentype/spec/os2) table.
///
/// Every version of the table is held in this one flat record. Fields that
/// were added after version 0 are only meaningful when [`version`][Self::version]
/// is at least the version that introduced them; they are zero otherwise,
/// and the accessor methods return `None` for them.
///
/// A font without an OS/2 table is represented by the [`absent`][Self::absent]
/// record, whose version is `0xFFFF` and whose fields are all zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Os2 {
    /// The table version, 0 to 5, or `0xFFFF` if there is no table.
    pub version: u16,
    /// The average advance width of all non-zero width glyphs.
    pub x_avg_char_width: i16,
    /// Visual weight (degree of blackness or thickness of strokes).
    pub us_weight_class: u16,
    /// Relative change from the normal aspect ratio (width to height ratio).
    pub us_width_class: u16,
    /// Font embedding licensing rights.
    pub fs_type: u16,
    /// The recommended horizontal size for subscripts.
    pub y_subscript_x_size: i16,
    /// The recommended vertical size for subscripts.
    pub y_subscript_y_size: i16,
    /// The recommended horizontal offset for subscripts.
    pub y_subscript_x_offset: i16,
    /// The recommended vertical offset from the baseline for subscripts.
    pub y_subscript_y_offset: i16,
    /// The recommended horizontal size for superscripts.
    pub y_superscript_x_size: i16,
    /// The recommended vertical size for superscripts.
    pub y_superscript_y_size: i16,
    /// The recommended horizontal offset for superscripts.
    pub y_superscript_x_offset: i16,
    /// The recommended vertical offset from the baseline for superscripts.
    pub y_superscript_y_offset: i16,
    /// Thickness of the strikeout stroke.
    pub y_strikeout_size: i16,
    /// The position of the top of the strikeout stroke relative to the baseline.
    pub y_strikeout_position: i16,
    /// Font-family class and subclass.
    pub s_family_class: i16,
    /// PANOSE classification number.
    pub panose: [u8; 10],
    /// Unicode Character Range (bits 0-31).
    pub ul_unicode_range_1: UnicodeRange,
    /// Unicode Character Range (bits 32-63).
    pub ul_unicode_range_2: UnicodeRange,
    /// Unicode Character Range (bits 64-95).
    pub ul_unicode_range_3: UnicodeRange,
    /// Unicode Character Range (bits 96-127).
    pub ul_unicode_range_4: UnicodeRange,
    /// Font Vendor Identification.
    pub ach_vend_id: Tag,
    /// Font selection flags.
    pub fs_selection: u16,
    /// The minimum Unicode index (character code) in this font.
    pub us_first_char_index: u16,
    /// The maximum Unicode index (character code) in this font.
    pub us_last_char_index: u16,
    /// The typographic ascender for this font.
    pub s_typo_ascender: i16,
    /// The typographic descender for this font.
    pub s_typo_descender: i16,
    /// The typographic line gap for this font.
    pub s_typo_line_gap: i16,
    /// The “Windows ascender” metric.
    pub us_win_ascent: u16,
    /// The “Windows descender” metric.
    pub us_win_descent: u16,
    /// Code page character range (bits 0-31); version 1 and later.
    pub ul_code_page_range_1: u32,
    /// Code page character range (bits 32-63); version 1 and later.
    pub ul_code_page_range_2: u32,
    /// Distance between the baseline and the approximate height of non-ascending
    /// lowercase letters; version 2 and later.
    pub sx_height: i16,
    /// Distance between the baseline and the approximate height of uppercase
    /// letters; version 2 and later.
    pub s_cap_height: i16,
    /// The default character, for characters not in the font; version 2 and later.
    pub us_default_char: u16,
    /// The break character; version 2 and later.
    pub us_break_char: u16,
    /// The maximum length of a target glyph context for any feature; version 2
    /// and later.
    pub us_max_context: u16,
    /// Lower end of the design size range, in twips; version 5 and later.
    pub us_lower_optical_point_size: u16,
    /// Upper end (exclusive) of the design size range, in twips; version 5 and later.
    pub us_upper_optical_point_size: u16,
}

impl Os2 {
    /// The version that denotes a font with no OS/2 table.
    pub const ABSENT_VERSION: u16 = 0xFFFF;

    /// The highest version this record describes.
    pub const MAX_VERSION: u16 = 5;

    /// The record used for a font that has no OS/2 table.
    pub const fn absent() -> Self {
        Os2 {
            version: Self::ABSENT_VERSION,
            x_avg_char_width: 0,
            us_weight_class: 0,
            us_width_class: 0,
            fs_type: 0,
            y_subscript_x_size: 0,
            y_subscript_y_size: 0,
            y_subscript_x_offset: 0,
            y_subscript_y_offset: 0,
            y_superscript_x_size: 0,
            y_superscript_y_size: 0,
            y_superscript_x_offset: 0,
            y_superscript_y_offset: 0,
            y_strikeout_size: 0,
            y_strikeout_position: 0,
            s_family_class: 0,
            panose: [0; 10],
            ul_unicode_range_1: UnicodeRange::empty(),
            ul_unicode_range_2: UnicodeRange::empty(),
            ul_unicode_range_3: UnicodeRange::empty(),
            ul_unicode_range_4: UnicodeRange::empty(),
            ach_vend_id: Tag::new(&[0; 4]),
            fs_selection: 0,
            us_first_char_index: 0,
            us_last_char_index: 0,
            s_typo_ascender: 0,
            s_typo_descender: 0,
            s_typo_line_gap: 0,
            us_win_ascent: 0,
            us_win_descent: 0,
            ul_code_page_range_1: 0,
            ul_code_page_range_2: 0,
            sx_height: 0,
            s_cap_height: 0,
            us_default_char: 0,
            us_break_char: 0,
            us_max_context: 0,
            us_lower_optical_point_size: 0,
            us_upper_optical_point_size: 0,
        }
    }

    /// Returns `true` if this record stands in for a missing table.
    pub fn is_absent(&self) -> bool {
        self.version == Self::ABSENT_VERSION
    }

    /// The encoded size of a table of the given version.
    pub fn len_for_version(version: u16) -> usize {
        match version {
            Self::ABSENT_VERSION => 2,
            0 => 78,
            1 => 86,
            2..=4 => 96,
            _ => 100,
        }
    }

    fn has_version(&self, version: u16) -> bool {
        !self.is_absent() && self.version >= version
    }

    /// The 128-bit Unicode range mask.
    pub fn unicode_ranges(&self) -> UnicodeRanges {
        UnicodeRanges::new([
            self.ul_unicode_range_1,
            self.ul_unicode_range_2,
            self.ul_unicode_range_3,
            self.ul_unicode_range_4,
        ])
    }

    /// The code pages this font is functional for, from version 1.
    pub fn code_page_range(&self) -> Option<CodePageRange> {
        self.has_version(1).then(|| {
            CodePageRange::from_words(self.ul_code_page_range_1, self.ul_code_page_range_2)
        })
    }

    /// The x-height, from version 2.
    pub fn x_height(&self) -> Option<i16> {
        self.has_version(2).then_some(self.sx_height)
    }

    /// The cap height, from version 2.
    pub fn cap_height(&self) -> Option<i16> {
        self.has_version(2).then_some(self.s_cap_height)
    }

    /// The default character, from version 2.
    pub fn default_char(&self) -> Option<u16> {
        self.has_version(2).then_some(self.us_default_char)
    }

    /// The break character, from version 2.
    pub fn break_char(&self) -> Option<u16> {
        self.has_version(2).then_some(self.us_break_char)
    }

    /// The maximum glyph context length, from version 2.
    pub fn max_context(&self) -> Option<u16> {
        self.has_version(2).then_some(self.us_max_context)
    }

    /// The range of point sizes this font is designed for, in twips (1/20 pt),
    /// from version 5.
    pub fn optical_point_size(&self) -> Option<Range<u16>> {
        self.has_version(5)
            .then_some(self.us_lower_optical_point_size..self.us_upper_optical_point_size)
    }

    /// Returns `true` if any field introduced in `version` holds a non-zero value.
    fn has_fields_of_version(&self, version: u16) -> bool {
        match version {
            1 => self.ul_code_page_range_1 != 0 || self.ul_code_page_range_2 != 0,
            2 => {
                self.sx_height != 0
                    || self.s_cap_height != 0
                    || self.us_default_char != 0
                    || self.us_break_char != 0
                    || self.us_max_context != 0
            }
            5 => self.us_lower_optical_point_size != 0 || self.us_upper_optical_point_size != 0,
            _ => false,
        }
    }
}

impl<'a> FontRead<'a> for Os2 {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let version: u16 = data.read_at(0)?;
        if version == Self::ABSENT_VERSION {
            return Ok(Self::absent());
        }
        if version > Self::MAX_VERSION {
            log::warn!("OS/2: unknown version {version}, reading as version 5");
        }
        data.check_len(Self::len_for_version(version))?;

        let mut cursor = data.cursor();
        cursor.advance_by(2);
        let mut os2 = Os2 {
            version,
            x_avg_char_width: cursor.read()?,
            us_weight_class: cursor.read()?,
            us_width_class: cursor.read()?,
            fs_type: cursor.read()?,
            y_subscript_x_size: cursor.read()?,
            y_subscript_y_size: cursor.read()?,
            y_subscript_x_offset: cursor.read()?,
            y_subscript_y_offset: cursor.read()?,
            y_superscript_x_size: cursor.read()?,
            y_superscript_y_size: cursor.read()?,
            y_superscript_x_offset: cursor.read()?,
            y_superscript_y_offset: cursor.read()?,
            y_strikeout_size: cursor.read()?,
            y_strikeout_position: cursor.read()?,
            s_family_class: cursor.read()?,
            panose: cursor.read_bytes()?,
            ul_unicode_range_1: cursor.read()?,
            ul_unicode_range_2: cursor.read()?,
            ul_unicode_range_3: cursor.read()?,
            ul_unicode_range_4: cursor.read()?,
            ach_vend_id: cursor.read()?,
            fs_selection: cursor.read()?,
            us_first_char_index: cursor.read()?,
            us_last_char_index: cursor.read()?,
            s_typo_ascender: cursor.read()?,
            s_typo_descender: cursor.read()?,
            s_typo_line_gap: cursor.read()?,
            us_win_ascent: cursor.read()?,
            us_win_descent: cursor.read()?,
            ..Self::absent()
        };
        if version >= 1 {
            os2.ul_code_page_range_1 = cursor.read()?;
            os2.ul_code_page_range_2 = cursor.read()?;
        }
        if version >= 2 {
            os2.sx_height = cursor.read()?;
            os2.s_cap_height = cursor.read()?;
            os2.us_default_char = cursor.read()?;
            os2.us_break_char = cursor.read()?;
            os2.us_max_context = cursor.read()?;
        }
        if version >= 5 {
            os2.us_lower_optical_point_size = cursor.read()?;
            os2.us_upper_optical_point_size = cursor.read()?;
        }
        Ok(os2)
    }
}

impl FontWrite for Os2 {
    fn write_into(&self, writer: &mut TableWriter) {
        self.version.write_into(writer);
        if self.is_absent() {
            return;
        }
        self.x_avg_char_width.write_into(writer);
        self.us_weight_class.write_into(writer);
        self.us_width_class.write_into(writer);
        self.fs_type.write_into(writer);
        self.y_subscript_x_size.write_into(writer);
        self.y_subscript_y_size.write_into(writer);
        self.y_subscript_x_offset.write_into(writer);
        self.y_subscript_y_offset.write_into(writer);
        self.y_superscript_x_size.write_into(writer);
        self.y_superscript_y_size.write_into(writer);
        self.y_superscript_x_offset.write_into(writer);
        self.y_superscript_y_offset.write_into(writer);
        self.y_strikeout_size.write_into(writer);
        self.y_strikeout_position.write_into(writer);
        self.s_family_class.write_into(writer);
        self.panose.write_into(writer);
        self.ul_unicode_range_1.write_into(writer);
        self.ul_unicode_range_2.write_into(writer);
        self.ul_unicode_range_3.write_into(writer);
        self.ul_unicode_range_4.write_into(writer);
        self.ach_vend_id.write_into(writer);
        self.fs_selection.write_into(writer);
        self.us_first_char_index.write_into(writer);
        self.us_last_char_index.write_into(writer);
        self.s_typo_ascender.write_into(writer);
        self.s_typo_descender.write_into(writer);
        self.s_typo_line_gap.write_into(writer);
        self.us_win_ascent.write_into(writer);
        self.us_win_descent.write_into(writer);
        if self.version >= 1 {
            self.ul_code_page_range_1.write_into(writer);
            self.ul_code_page_range_2.write_into(writer);
        }
        if self.version >= 2 {
            self.sx_height.write_into(writer);
            self.s_cap_height.write_into(writer);
            self.us_default_char.write_into(writer);
            self.us_break_char.write_into(writer);
            self.us_max_context.write_into(writer);
        }
        if self.version >= 5 {
            self.us_lower_optical_point_size.write_into(writer);
            self.us_upper_optical_point_size.write_into(writer);
        }
    }
}

impl Validate for Os2 {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("OS/2", |ctx| {
            if self.is_absent() {
                if *self != Self::absent() {
                    ctx.in_field("version", |ctx| {
                        ctx.report("a table marked absent must not carry any data")
                    });
                }
                return;
            }
            ctx.in_field("version", |ctx| {
                if self.version > Self::MAX_VERSION {
                    ctx.report(format_args!("unknown version {}", self.version));
                }
            });
            for (introduced, field) in [
                (1, "ul_code_page_range_1"),
                (2, "sx_height"),
                (5, "us_lower_optical_point_size"),
            ] {
                if self.version < introduced && self.has_fields_of_version(introduced) {
                    ctx.in_field(field, |ctx| {
                        ctx.report(format_args!(
                            "fields of version {introduced} are set, but the table is version {}",
                            self.version
                        ))
                    });
                }
            }
            if let Some(sizes) = self.optical_point_size() {
                if sizes.is_empty() {
                    ctx.in_field("us_upper_optical_point_size", |ctx| {
                        ctx.report("upper optical size must be greater than lower")
                    });
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dump_table, test_helpers::BeBuffer};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::vec::Vec;
    use types::UnicodeRangeBit;

    fn v0_bytes(version: u16) -> BeBuffer {
        BeBuffer::new()
            .push(version)
            .push(523i16) // x_avg_char_width
            .extend([400u16, 5, 8])
            .extend([650i16, 600, 0, 75, 650, 600, 0, 350, 50, 300])
            .push(0x0105i16) // s_family_class
            .extend([2u8, 11, 5, 3, 2, 2, 2, 2, 2, 4])
            .extend([0xE000_02FFu32, 0x4000_201F, 0, 0x0400_0000])
            .push(Tag::new(b"GOOG"))
            .push(0x40u16) // fs_selection
            .extend([0x20u16, 0xFFFD])
            .extend([800i16, -200, 90])
            .extend([1000u16, 250])
    }

    fn v0() -> Os2 {
        Os2 {
            version: 0,
            x_avg_char_width: 523,
            us_weight_class: 400,
            us_width_class: 5,
            fs_type: 8,
            y_subscript_x_size: 650,
            y_subscript_y_size: 600,
            y_subscript_x_offset: 0,
            y_subscript_y_offset: 75,
            y_superscript_x_size: 650,
            y_superscript_y_size: 600,
            y_superscript_x_offset: 0,
            y_superscript_y_offset: 350,
            y_strikeout_size: 50,
            y_strikeout_position: 300,
            s_family_class: 0x0105,
            panose: [2, 11, 5, 3, 2, 2, 2, 2, 2, 4],
            ul_unicode_range_1: UnicodeRange::from_bits(0xE000_02FF),
            ul_unicode_range_2: UnicodeRange::from_bits(0x4000_201F),
            ul_unicode_range_3: UnicodeRange::empty(),
            ul_unicode_range_4: UnicodeRange::from_bits(0x0400_0000),
            ach_vend_id: Tag::new(b"GOOG"),
            fs_selection: 0x40,
            us_first_char_index: 0x20,
            us_last_char_index: 0xFFFD,
            s_typo_ascender: 800,
            s_typo_descender: -200,
            s_typo_line_gap: 90,
            us_win_ascent: 1000,
            us_win_descent: 250,
            ..Os2::absent()
        }
    }

    fn v5() -> Os2 {
        Os2 {
            version: 5,
            ul_code_page_range_1: 0x2000_019F,
            ul_code_page_range_2: 0xFFFF_0000,
            sx_height: 528,
            s_cap_height: 714,
            us_default_char: 0,
            us_break_char: 32,
            us_max_context: 3,
            us_lower_optical_point_size: 160,
            us_upper_optical_point_size: 1440,
            ..v0()
        }
    }

    #[rstest]
    #[case(0, 78)]
    #[case(1, 86)]
    #[case(2, 96)]
    #[case(4, 96)]
    #[case(5, 100)]
    #[case(0xFFFF, 2)]
    fn table_len(#[case] version: u16, #[case] len: usize) {
        assert_eq!(Os2::len_for_version(version), len);
    }

    #[test]
    fn absent_table_reads_as_zero() {
        let os2 = Os2::read(FontData::new(&[0xFF, 0xFF])).unwrap();
        assert!(os2.is_absent());
        assert_eq!(os2, Os2::absent());
        assert_eq!(os2.x_avg_char_width, 0);
        assert_eq!(os2.panose, [0; 10]);
        assert_eq!(os2.ach_vend_id.to_be_bytes(), [0; 4]);
        assert!(os2.unicode_ranges().is_empty());
        assert_eq!(os2.code_page_range(), None);
        assert_eq!(os2.x_height(), None);
        assert_eq!(os2.optical_point_size(), None);

        // anything after the sentinel is ignored
        let mut bytes = v0_bytes(0xFFFF).to_vec();
        bytes.resize(100, 0xAB);
        assert_eq!(Os2::read(FontData::new(&bytes)).unwrap(), Os2::absent());

        assert_eq!(dump_table(&Os2::absent()).unwrap(), [0xFF, 0xFF]);
    }

    #[test]
    fn read_version_0() {
        let buf = v0_bytes(0);
        assert_eq!(buf.len(), Os2::len_for_version(0));
        let os2 = Os2::read(buf.font_data()).unwrap();
        assert_eq!(os2, v0());
        assert_eq!(os2.code_page_range(), None);
        assert_eq!(os2.cap_height(), None);
        assert_eq!(os2.default_char(), None);

        let ranges = os2.unicode_ranges();
        assert!(ranges.contains(UnicodeRangeBit::BASIC_LATIN));
        assert!(ranges.is_bit_set(62));
        assert!(ranges.contains(UnicodeRangeBit::GAME_TILES));
        assert!(!ranges.is_bit_set(64));
    }

    #[test]
    fn read_version_5() {
        let buf = v0_bytes(5)
            .extend([0x2000_019Fu32, 0xFFFF_0000])
            .extend([528i16, 714])
            .extend([0u16, 32, 3])
            .extend([160u16, 1440]);
        assert_eq!(buf.len(), Os2::len_for_version(5));
        let os2 = Os2::read(buf.font_data()).unwrap();
        assert_eq!(os2, v5());
        assert_eq!(os2.x_height(), Some(528));
        assert_eq!(os2.break_char(), Some(32));
        assert_eq!(os2.max_context(), Some(3));
        assert_eq!(os2.optical_point_size(), Some(160..1440));
        let code_pages = os2.code_page_range().unwrap();
        assert!(code_pages.contains(CodePageRange::LATIN_1 | CodePageRange::MACINTOSH));
        assert!(code_pages.contains(CodePageRange::US));
    }

    #[test]
    fn version_gates_length() {
        // a version 2 table needs 96 bytes
        let buf = v0_bytes(2).extend([0u32; 2]).extend([0u16; 4]);
        assert_eq!(buf.len(), 94);
        assert_eq!(Os2::read(buf.font_data()), Err(ReadError::OutOfBounds));

        let buf = v0_bytes(1).extend([1u32, 0]);
        let os2 = Os2::read(buf.font_data()).unwrap();
        assert_eq!(os2.code_page_range(), Some(CodePageRange::LATIN_1));
        assert_eq!(os2.x_height(), None);
    }

    #[test]
    fn unknown_version_reads_as_5() {
        crate::test_helpers::init_logging();
        let mut table = dump_table(&v5()).unwrap();
        table[1] = 9;
        let os2 = Os2::read(FontData::new(&table)).unwrap();
        assert_eq!(os2.version, 9);
        assert_eq!(os2.optical_point_size(), Some(160..1440));
        assert!(os2.validate().is_err());
    }

    #[test]
    fn round_trip() {
        for os2 in [v0(), v5(), Os2 { version: 3, ..v5() }.without_version_5()] {
            let dumped = dump_table(&os2).unwrap();
            assert_eq!(dumped.len(), Os2::len_for_version(os2.version));
            assert_eq!(Os2::read(FontData::new(&dumped)).unwrap(), os2);
        }
    }

    #[test]
    fn invariants() {
        let report = Os2 { version: 1, ..v5() }.validate().unwrap_err();
        assert_eq!(
            report.locations().collect::<Vec<_>>(),
            ["OS/2.sx_height", "OS/2.us_lower_optical_point_size"]
        );

        let report = Os2 {
            us_lower_optical_point_size: 1440,
            ..v5()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            report.locations().collect::<Vec<_>>(),
            ["OS/2.us_upper_optical_point_size"]
        );

        assert!(Os2::absent().validate().is_ok());
        assert!(Os2 {
            fs_type: 4,
            ..Os2::absent()
        }
        .validate()
        .is_err());
    }

    impl Os2 {
        fn without_version_5(self) -> Self {
            Os2 {
                us_lower_optical_point_size: 0,
                us_upper_optical_point_size: 0,
                ..self
            }
        }
    }
}
