//! The [vhea](https://docs.microsoft.com/en-us/typography/opentype/spec/vhea) table

use types::{Fixed, Tag};

use crate::{FontData, FontRead, FontWrite, ReadError, TableWriter, Validate, ValidationCtx};

/// 'vhea'
pub const TAG: Tag = Tag::VHEA;

/// The [vertical header](https://docs.microsoft.com/en-us/typography/opentype/spec/vhea) table.
///
/// This has the same layout as [`HoriHeader`][super::hhea::HoriHeader], with
/// widths replaced by heights and left/right bearings by top/bottom ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertHeader {
    /// The table version, 1.0 or 1.1.
    pub version: Fixed,
    /// Distance from the centerline to the previous line's descent.
    pub ascender: i16,
    /// Distance from the centerline to the next line's ascent.
    pub descender: i16,
    /// Reserved; set to 0 in version 1.1.
    pub line_gap: i16,
    /// Maximum advance height value in 'vmtx' table.
    pub advance_height_max: u16,
    /// Minimum top sidebearing value in 'vmtx' table for glyphs with contours.
    pub min_top_side_bearing: i16,
    /// Minimum bottom sidebearing value.
    pub min_bottom_side_bearing: i16,
    /// Max(tsb + (yMax - yMin)).
    pub y_max_extent: i16,
    /// The rise of the caret slope; 0 for horizontal carets.
    pub caret_slope_rise: i16,
    /// The run of the caret slope; 1 for horizontal carets.
    pub caret_slope_run: i16,
    /// The amount by which a slanted highlight on a glyph needs to be shifted.
    pub caret_offset: i16,
    /// 0 for current format.
    pub metric_data_format: i16,
    /// Number of advance heights in the 'vmtx' table.
    pub number_of_v_metrics: u16,
}

impl VertHeader {
    /// The size of the table in bytes.
    pub const LEN: usize = 36;

    const RESERVED_LEN: usize = 8;
}

impl<'a> FontRead<'a> for VertHeader {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let vhea = VertHeader {
            version: cursor.read()?,
            ascender: cursor.read()?,
            descender: cursor.read()?,
            line_gap: cursor.read()?,
            advance_height_max: cursor.read()?,
            min_top_side_bearing: cursor.read()?,
            min_bottom_side_bearing: cursor.read()?,
            y_max_extent: cursor.read()?,
            caret_slope_rise: cursor.read()?,
            caret_slope_run: cursor.read()?,
            caret_offset: cursor.read()?,
            metric_data_format: {
                cursor.advance_by(Self::RESERVED_LEN);
                cursor.read()?
            },
            number_of_v_metrics: cursor.read()?,
        };
        if vhea.metric_data_format != 0 {
            log::warn!("vhea: unknown metric data format {}", vhea.metric_data_format);
        }
        Ok(vhea)
    }
}

impl FontWrite for VertHeader {
    fn write_into(&self, writer: &mut TableWriter) {
        self.version.write_into(writer);
        self.ascender.write_into(writer);
        self.descender.write_into(writer);
        self.line_gap.write_into(writer);
        self.advance_height_max.write_into(writer);
        self.min_top_side_bearing.write_into(writer);
        self.min_bottom_side_bearing.write_into(writer);
        self.y_max_extent.write_into(writer);
        self.caret_slope_rise.write_into(writer);
        self.caret_slope_run.write_into(writer);
        self.caret_offset.write_into(writer);
        writer.pad(Self::RESERVED_LEN);
        self.metric_data_format.write_into(writer);
        self.number_of_v_metrics.write_into(writer);
    }
}

impl Validate for VertHeader {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("vhea", |ctx| {
            ctx.in_field("descender", |ctx| {
                if self.descender > 0 {
                    ctx.report(format_args!(
                        "descender must not be positive, found {}",
                        self.descender
                    ));
                }
            });
            ctx.in_field("metric_data_format", |ctx| {
                if self.metric_data_format != 0 {
                    ctx.report("metric_data_format must be 0");
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

    #[test]
    fn read_and_write() {
        let buf = BeBuffer::new()
            .push(Fixed::from_bits(0x0001_1000))
            .extend([500i16, -500, 0])
            .push(1000u16)
            .extend([20i16, 15, 980, 0, 1, 0])
            .extend([0u16; 4])
            .push(0i16)
            .push_with_tag(7u16, "num_metrics");
        let vhea = VertHeader::read(buf.font_data()).unwrap();
        assert_eq!(
            vhea,
            VertHeader {
                version: Fixed::from_bits(0x0001_1000),
                ascender: 500,
                descender: -500,
                line_gap: 0,
                advance_height_max: 1000,
                min_top_side_bearing: 20,
                min_bottom_side_bearing: 15,
                y_max_extent: 980,
                caret_slope_rise: 0,
                caret_slope_run: 1,
                caret_offset: 0,
                metric_data_format: 0,
                number_of_v_metrics: 7,
            }
        );
        assert_eq!(buf.offset_for("num_metrics"), VertHeader::LEN - 2);
        assert_eq!(dump_table(&vhea).unwrap(), buf.to_vec());
    }

    #[test]
    fn truncated() {
        let data = [0u8; VertHeader::LEN - 2];
        assert_eq!(
            VertHeader::read(FontData::new(&data)),
            Err(ReadError::OutOfBounds)
        );
    }
}
