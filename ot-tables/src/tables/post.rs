//! The [post](https://docs.microsoft.com/en-us/typography/opentype/spec/post) table

use types::{Fixed, Tag};

use crate::{FontData, FontRead, FontWrite, ReadError, TableWriter, Validate, ValidationCtx};

/// 'post'
pub const TAG: Tag = Tag::POST;

// The format is a legacy packed version: the minor version is stored as a
// hex nibble after the point, so 2.5 is 0x00025000 (2.3125 as a 16.16 value).

/// Format 1.0, the standard Macintosh glyph set.
pub const FORMAT_1_0: Fixed = Fixed::from_bits(0x0001_0000);
/// Format 2.0, with glyph names stored in the table.
pub const FORMAT_2_0: Fixed = Fixed::from_bits(0x0002_0000);
/// Format 2.5, deprecated.
pub const FORMAT_2_5: Fixed = Fixed::from_bits(0x0002_5000);
/// Format 3.0, with no glyph names.
pub const FORMAT_3_0: Fixed = Fixed::from_bits(0x0003_0000);
/// Format 4.0, used by some Apple composite fonts.
pub const FORMAT_4_0: Fixed = Fixed::from_bits(0x0004_0000);

/// The fixed-size header of the [PostScript](https://docs.microsoft.com/en-us/typography/opentype/spec/post) table.
///
/// Glyph names, which follow the header in versions 2.0 and 2.5, are not
/// decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Postscript {
    /// One of [`FORMAT_1_0`], [`FORMAT_2_0`], [`FORMAT_2_5`], [`FORMAT_3_0`]
    /// or [`FORMAT_4_0`].
    ///
    /// This holds the raw packed version, so compare it against those
    /// constants rather than against a value built with `Fixed::from_f64`.
    pub format_type: Fixed,
    /// Italic angle in counter-clockwise degrees from the vertical.
    pub italic_angle: Fixed,
    /// The suggested distance of the top of the underline from the baseline.
    pub underline_position: i16,
    /// The suggested values for the underline thickness.
    pub underline_thickness: i16,
    /// Set to 0 if the font is proportionally spaced, non-zero if the font
    /// is not proportionally spaced.
    pub is_fixed_pitch: u32,
    /// Minimum memory usage when an OpenType font is downloaded.
    pub min_mem_type42: u32,
    /// Maximum memory usage when an OpenType font is downloaded.
    pub max_mem_type42: u32,
    /// Minimum memory usage when an OpenType font is downloaded as a Type 1 font.
    pub min_mem_type1: u32,
    /// Maximum memory usage when an OpenType font is downloaded as a Type 1 font.
    pub max_mem_type1: u32,
}

impl Postscript {
    /// The size of the header in bytes.
    pub const LEN: usize = 32;

    /// Returns `true` if every glyph has the same advance.
    pub fn is_monospaced(&self) -> bool {
        self.is_fixed_pitch != 0
    }
}

impl<'a> FontRead<'a> for Postscript {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        Ok(Postscript {
            format_type: cursor.read()?,
            italic_angle: cursor.read()?,
            underline_position: cursor.read()?,
            underline_thickness: cursor.read()?,
            is_fixed_pitch: cursor.read()?,
            min_mem_type42: cursor.read()?,
            max_mem_type42: cursor.read()?,
            min_mem_type1: cursor.read()?,
            max_mem_type1: cursor.read()?,
        })
    }
}

impl FontWrite for Postscript {
    fn write_into(&self, writer: &mut TableWriter) {
        self.format_type.write_into(writer);
        self.italic_angle.write_into(writer);
        self.underline_position.write_into(writer);
        self.underline_thickness.write_into(writer);
        self.is_fixed_pitch.write_into(writer);
        self.min_mem_type42.write_into(writer);
        self.max_mem_type42.write_into(writer);
        self.min_mem_type1.write_into(writer);
        self.max_mem_type1.write_into(writer);
    }
}

impl Validate for Postscript {
    fn validate_impl(&self, _ctx: &mut ValidationCtx) {}
}
