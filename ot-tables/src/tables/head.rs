//! The [head](https://docs.microsoft.com/en-us/typography/opentype/spec/head) table

use types::{BoundingBox, Fixed, LongDateTime, Tag, Timestamp};

use crate::{FontData, FontRead, FontWrite, ReadError, TableWriter, Validate, ValidationCtx};

/// 'head'
pub const TAG: Tag = Tag::HEAD;

/// The value of [`Header::magic_number`] in a well-formed table.
pub const MAGIC_NUMBER: i32 = 0x5F0F3CF5;

/// The [font header](https://docs.microsoft.com/en-us/typography/opentype/spec/head) table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Version number of the font header table, set to 1.0.
    pub table_version: Fixed,
    /// Set by font manufacturer.
    pub font_revision: Fixed,
    /// To compute: set it to 0, sum the entire font as uint32, then
    /// store 0xB1B0AFBA - sum.
    pub checksum_adjustment: i32,
    /// Set to 0x5F0F3CF5.
    pub magic_number: i32,
    /// See the flags in the OpenType specification.
    pub flags: u16,
    /// Set to a value from 16 to 16384.
    pub units_per_em: u16,
    /// When the font was created.
    pub created: Timestamp,
    /// When the font was last modified.
    pub modified: Timestamp,
    /// Minimum x coordinate across all glyph bounding boxes.
    pub x_min: i16,
    /// Minimum y coordinate across all glyph bounding boxes.
    pub y_min: i16,
    /// Maximum x coordinate across all glyph bounding boxes.
    pub x_max: i16,
    /// Maximum y coordinate across all glyph bounding boxes.
    pub y_max: i16,
    /// Bold, italic and other style bits; see [`MacStyle`].
    pub mac_style: u16,
    /// Smallest readable size in pixels.
    pub lowest_rec_ppem: u16,
    /// Deprecated (Set to 2).
    pub font_direction_hint: i16,
    /// 0 for short offsets (Offset16), 1 for long (Offset32).
    pub index_to_loc_format: i16,
    /// 0 for current format.
    pub glyph_data_format: i16,
}

/// Bits of [`Header::mac_style`].
pub struct MacStyle;

impl MacStyle {
    pub const BOLD: u16 = 1 << 0;
    pub const ITALIC: u16 = 1 << 1;
    pub const UNDERLINE: u16 = 1 << 2;
    pub const OUTLINE: u16 = 1 << 3;
    pub const SHADOW: u16 = 1 << 4;
    pub const CONDENSED: u16 = 1 << 5;
    pub const EXTENDED: u16 = 1 << 6;
}

impl Header {
    /// The size of the table in bytes.
    pub const LEN: usize = 54;

    /// The bounding box of all glyphs in the font.
    pub fn bounding_box(&self) -> BoundingBox<i16> {
        BoundingBox {
            x_min: self.x_min,
            y_min: self.y_min,
            x_max: self.x_max,
            y_max: self.y_max,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.mac_style & MacStyle::BOLD != 0
    }

    pub fn is_italic(&self) -> bool {
        self.mac_style & MacStyle::ITALIC != 0
    }

    /// Returns `true` if the `loca` table uses 32-bit offsets.
    pub fn uses_long_loca(&self) -> bool {
        self.index_to_loc_format == 1
    }
}

impl<'a> FontRead<'a> for Header {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let head = Header {
            table_version: cursor.read()?,
            font_revision: cursor.read()?,
            checksum_adjustment: cursor.read()?,
            magic_number: cursor.read()?,
            flags: cursor.read()?,
            units_per_em: cursor.read()?,
            created: cursor.read::<LongDateTime>()?.to_timestamp(),
            modified: cursor.read::<LongDateTime>()?.to_timestamp(),
            x_min: cursor.read()?,
            y_min: cursor.read()?,
            x_max: cursor.read()?,
            y_max: cursor.read()?,
            mac_style: cursor.read()?,
            lowest_rec_ppem: cursor.read()?,
            font_direction_hint: cursor.read()?,
            index_to_loc_format: cursor.read()?,
            glyph_data_format: cursor.read()?,
        };
        if head.magic_number != MAGIC_NUMBER {
            log::warn!("head: unexpected magic number {:#010X}", head.magic_number);
        }
        Ok(head)
    }
}

impl FontWrite for Header {
    fn write_into(&self, writer: &mut TableWriter) {
        self.table_version.write_into(writer);
        self.font_revision.write_into(writer);
        self.checksum_adjustment.write_into(writer);
        self.magic_number.write_into(writer);
        self.flags.write_into(writer);
        self.units_per_em.write_into(writer);
        self.created.write_into(writer);
        self.modified.write_into(writer);
        self.x_min.write_into(writer);
        self.y_min.write_into(writer);
        self.x_max.write_into(writer);
        self.y_max.write_into(writer);
        self.mac_style.write_into(writer);
        self.lowest_rec_ppem.write_into(writer);
        self.font_direction_hint.write_into(writer);
        self.index_to_loc_format.write_into(writer);
        self.glyph_data_format.write_into(writer);
    }
}

impl Validate for Header {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("head", |ctx| {
            ctx.in_field("units_per_em", |ctx| {
                if !(16..=16384).contains(&self.units_per_em) {
                    ctx.report(format_args!(
                        "units_per_em must be in 16..=16384, found {}",
                        self.units_per_em
                    ));
                }
            });
            ctx.in_field("x_min", |ctx| {
                if self.x_min > self.x_max {
                    ctx.report(format_args!(
                        "x_min ({}) is greater than x_max ({})",
                        self.x_min, self.x_max
                    ));
                }
            });
            ctx.in_field("y_min", |ctx| {
                if self.y_min > self.y_max {
                    ctx.report(format_args!(
                        "y_min ({}) is greater than y_max ({})",
                        self.y_min, self.y_max
                    ));
                }
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dump_table, test_helpers::BeBuffer};
    use pretty_assertions::assert_eq;
    use std::vec::Vec;

    fn head_bytes() -> BeBuffer {
        BeBuffer::new()
            .push(Fixed::ONE)
            .push(Fixed::from_f64(2.5))
            .extend([0x1234_5678i32, MAGIC_NUMBER])
            .push(0b1011u16) // flags
            .push_with_tag(1000u16, "upem")
            .extend([LongDateTime::new(3_507_230_006), LongDateTime::new(0)])
            .push_with_tag(-200i16, "x_min")
            .push(-300i16)
            .push(1200i16)
            .push_with_tag(800i16, "y_max")
            .extend([MacStyle::BOLD | MacStyle::ITALIC, 9])
            .extend([2i16, 1, 0])
    }

    fn expected() -> Header {
        Header {
            table_version: Fixed::ONE,
            font_revision: Fixed::from_bits(0x0002_8000),
            checksum_adjustment: 0x1234_5678,
            magic_number: MAGIC_NUMBER,
            flags: 0b1011,
            units_per_em: 1000,
            created: Timestamp::from_unix_secs(1_424_385_206),
            modified: Timestamp::FONT_EPOCH,
            x_min: -200,
            y_min: -300,
            x_max: 1200,
            y_max: 800,
            mac_style: 3,
            lowest_rec_ppem: 9,
            font_direction_hint: 2,
            index_to_loc_format: 1,
            glyph_data_format: 0,
        }
    }

    #[test]
    fn read_literal() {
        let buf = head_bytes();
        assert_eq!(buf.len(), Header::LEN);
        let head = Header::read(buf.font_data()).unwrap();
        assert_eq!(head, expected());
        assert!(head.is_bold() && head.is_italic());
        assert!(head.uses_long_loca());
        assert_eq!(head.bounding_box().width(), 1400);
        assert!(head.validate().is_ok());
    }

    #[test]
    fn mutated_bytes() {
        let mut buf = head_bytes();
        buf.write_at("upem", 2048u16);
        buf.write_at("x_min", -1i16);
        let head = Header::read(buf.font_data()).unwrap();
        assert_eq!(head.units_per_em, 2048);
        assert_eq!(head.x_min, -1);
        assert_eq!(head.y_max, 800);

        // only the low byte of y_max
        let mut bytes = buf.to_vec();
        bytes[buf.offset_for("y_max") + 1] = 0x21;
        let head = Header::read(FontData::new(&bytes)).unwrap();
        assert_eq!(head.y_max, 0x0321);
    }

    #[test]
    fn round_trip() {
        let buf = head_bytes();
        let dumped = dump_table(&expected()).unwrap();
        assert_eq!(dumped, buf.to_vec());
    }

    #[test]
    fn truncated() {
        let buf = head_bytes();
        let data = FontData::new(&buf[..Header::LEN - 1]);
        assert_eq!(Header::read(data), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn bad_magic_is_tolerated() {
        crate::test_helpers::init_logging();
        let bytes = dump_table(&Header {
            magic_number: 0,
            ..expected()
        })
        .unwrap();
        let head = Header::read(FontData::new(&bytes)).unwrap();
        assert_eq!(head.magic_number, 0);
    }

    #[test]
    fn invariants() {
        let head = Header {
            units_per_em: 8,
            x_min: 1300,
            ..expected()
        };
        let report = head.validate().unwrap_err();
        assert_eq!(
            report.locations().collect::<Vec<_>>(),
            ["head.units_per_em", "head.x_min"]
        );
        assert!(dump_table(&head).is_err());

        for units_per_em in [16, 16384] {
            assert!(Header {
                units_per_em,
                ..expected()
            }
            .validate()
            .is_ok());
        }
        assert!(Header {
            units_per_em: 16385,
            ..expected()
        }
        .validate()
        .is_err());
        assert!(Header {
            y_min: 801,
            ..expected()
        }
        .validate()
        .is_err());
    }
}
