//! The [hhea](https://docs.microsoft.com/en-us/typography/opentype/spec/hhea) table

use types::{Fixed, Tag};

use crate::{FontData, FontRead, FontWrite, ReadError, TableWriter, Validate, ValidationCtx};

/// 'hhea'
pub const TAG: Tag = Tag::HHEA;

/// The [horizontal header](https://docs.microsoft.com/en-us/typography/opentype/spec/hhea) table.
///
/// This also carries the summary of the `hmtx` table: the number of
/// entries in its long metrics array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoriHeader {
    /// The table version, 1.0.
    pub version: Fixed,
    /// Typographic ascent.
    pub ascender: i16,
    /// Typographic descent.
    pub descender: i16,
    /// Typographic line gap.
    pub line_gap: i16,
    /// Maximum advance width value in 'hmtx' table.
    pub advance_width_max: u16,
    /// Minimum left sidebearing value in 'hmtx' table for glyphs with contours.
    pub min_left_side_bearing: i16,
    /// Minimum right sidebearing value; calculated as min(aw - (lsb + xMax - xMin)).
    pub min_right_side_bearing: i16,
    /// Max(lsb + (xMax - xMin)).
    pub x_max_extent: i16,
    /// Used to calculate the slope of the cursor (rise/run); 1 for vertical.
    pub caret_slope_rise: i16,
    /// 0 for vertical.
    pub caret_slope_run: i16,
    /// The amount by which a slanted highlight on a glyph needs to be
    /// shifted to produce the best appearance. Set to 0 for non-slanted fonts.
    pub caret_offset: i16,
    /// 0 for current format.
    pub metric_data_format: i16,
    /// Number of hMetric entries in 'hmtx' table.
    pub number_of_h_metrics: u16,
}

impl HoriHeader {
    /// The size of the table in bytes.
    pub const LEN: usize = 36;

    /// The size of the reserved block before `metric_data_format`.
    const RESERVED_LEN: usize = 8;
}

impl<'a> FontRead<'a> for HoriHeader {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let hhea = HoriHeader {
            version: cursor.read()?,
            ascender: cursor.read()?,
            descender: cursor.read()?,
            line_gap: cursor.read()?,
            advance_width_max: cursor.read()?,
            min_left_side_bearing: cursor.read()?,
            min_right_side_bearing: cursor.read()?,
            x_max_extent: cursor.read()?,
            caret_slope_rise: cursor.read()?,
            caret_slope_run: cursor.read()?,
            caret_offset: cursor.read()?,
            metric_data_format: {
                cursor.advance_by(Self::RESERVED_LEN);
                cursor.read()?
            },
            number_of_h_metrics: cursor.read()?,
        };
        if hhea.metric_data_format != 0 {
            log::warn!("hhea: unknown metric data format {}", hhea.metric_data_format);
        }
        Ok(hhea)
    }
}

impl FontWrite for HoriHeader {
    fn write_into(&self, writer: &mut TableWriter) {
        self.version.write_into(writer);
        self.ascender.write_into(writer);
        self.descender.write_into(writer);
        self.line_gap.write_into(writer);
        self.advance_width_max.write_into(writer);
        self.min_left_side_bearing.write_into(writer);
        self.min_right_side_bearing.write_into(writer);
        self.x_max_extent.write_into(writer);
        self.caret_slope_rise.write_into(writer);
        self.caret_slope_run.write_into(writer);
        self.caret_offset.write_into(writer);
        writer.pad(Self::RESERVED_LEN);
        self.metric_data_format.write_into(writer);
        self.number_of_h_metrics.write_into(writer);
    }
}

impl Validate for HoriHeader {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("hhea", |ctx| {
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

    fn hhea() -> HoriHeader {
        HoriHeader {
            version: Fixed::ONE,
            ascender: 800,
            descender: -200,
            line_gap: 0,
            advance_width_max: 999,
            min_left_side_bearing: -50,
            min_right_side_bearing: -69,
            x_max_extent: 888,
            caret_slope_rise: 1,
            caret_slope_run: 0,
            caret_offset: 0,
            metric_data_format: 0,
            number_of_h_metrics: 42,
        }
    }

    #[test]
    fn read_skips_reserved() {
        let buf = BeBuffer::new()
            .push(Fixed::ONE)
            .extend([800i16, -200, 0])
            .push(999u16)
            .extend([-50i16, -69, 888, 1, 0, 0])
            .extend([0x7777u16; 4]) // reserved
            .push(0i16)
            .push(42u16);
        assert_eq!(buf.len(), HoriHeader::LEN);
        assert_eq!(HoriHeader::read(buf.font_data()).unwrap(), hhea());
    }

    #[test]
    fn round_trip() {
        let dumped = dump_table(&hhea()).unwrap();
        assert_eq!(dumped.len(), HoriHeader::LEN);
        assert_eq!(dumped[24..32], [0; 8]);
        let loaded = HoriHeader::read(FontData::new(&dumped)).unwrap();
        assert_eq!(loaded, hhea());
    }

    #[test]
    fn invariants() {
        crate::test_helpers::init_logging();
        let bad = HoriHeader {
            descender: 10,
            metric_data_format: 1,
            ..hhea()
        };
        let report = bad.validate().unwrap_err();
        assert_eq!(report.len(), 2);

        // decoding tolerates what validation rejects
        let mut writer = TableWriter::default();
        bad.write_into(&mut writer);
        let loaded = HoriHeader::read(FontData::new(&writer.into_data())).unwrap();
        assert_eq!(loaded, bad);
    }
}
