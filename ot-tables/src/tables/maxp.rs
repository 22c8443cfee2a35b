//! The [maxp](https://docs.microsoft.com/en-us/typography/opentype/spec/maxp) table

use types::{Fixed, Tag};

use crate::{FontData, FontRead, FontWrite, ReadError, TableWriter, Validate, ValidationCtx};

/// 'maxp'
pub const TAG: Tag = Tag::MAXP;

// As with the `post` format, the version is a packed legacy value: 0.5 is
// stored as 0x00005000, which a 16.16 value reads as 0.3125 (`0:20480`).

/// Version 0.5, used by fonts with CFF outlines.
pub const VERSION_0_5: Fixed = Fixed::from_bits(0x0000_5000);

/// Version 1.0, used by fonts with TrueType outlines.
pub const VERSION_1_0: Fixed = Fixed::from_bits(0x0001_0000);

/// The [maximum profile](https://docs.microsoft.com/en-us/typography/opentype/spec/maxp) table.
///
/// Version 0.5 tables only carry [`num_glyphs`][Self::num_glyphs]; the
/// remaining fields are zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxProfile {
    /// Either [`VERSION_0_5`] or [`VERSION_1_0`].
    ///
    /// This is the raw packed version; [`VERSION_0_5`] displays as `0:20480`,
    /// not as one half.
    pub version: Fixed,
    /// The number of glyphs in the font.
    pub num_glyphs: u16,
    /// Maximum points in a non-composite glyph.
    pub max_points: u16,
    /// Maximum contours in a non-composite glyph.
    pub max_contours: u16,
    /// Maximum points in a composite glyph.
    pub max_composite_points: u16,
    /// Maximum contours in a composite glyph.
    pub max_composite_contours: u16,
    /// 1 if instructions do not use the twilight zone (Z0), or 2 if
    /// instructions do use Z0.
    pub max_zones: u16,
    /// Maximum points used in Z0.
    pub max_twilight_points: u16,
    /// Number of Storage Area locations.
    pub max_storage: u16,
    /// Number of FDEFs, equal to the highest function number + 1.
    pub max_function_defs: u16,
    /// Number of IDEFs.
    pub max_instruction_defs: u16,
    /// Maximum stack depth across Font Program, CVT Program and all glyph
    /// instructions.
    pub max_stack_elements: u16,
    /// Maximum byte count for glyph instructions.
    pub max_size_of_instructions: u16,
    /// Maximum number of components referenced at “top level” for any
    /// composite glyph.
    pub max_component_elements: u16,
    /// Maximum levels of recursion; 1 for simple components.
    pub max_component_depth: u16,
}

impl MaxProfile {
    /// The size of a version 0.5 table.
    pub const LEN_0_5: usize = 6;
    /// The size of a version 1.0 table.
    pub const LEN_1_0: usize = 32;

    /// A version 0.5 table.
    pub fn new(num_glyphs: u16) -> Self {
        MaxProfile {
            version: VERSION_0_5,
            num_glyphs,
            max_points: 0,
            max_contours: 0,
            max_composite_points: 0,
            max_composite_contours: 0,
            max_zones: 0,
            max_twilight_points: 0,
            max_storage: 0,
            max_function_defs: 0,
            max_instruction_defs: 0,
            max_stack_elements: 0,
            max_size_of_instructions: 0,
            max_component_elements: 0,
            max_component_depth: 0,
        }
    }

    fn has_truetype_fields(&self) -> bool {
        self.version == VERSION_1_0
    }

    fn truetype_fields(&self) -> [u16; 13] {
        [
            self.max_points,
            self.max_contours,
            self.max_composite_points,
            self.max_composite_contours,
            self.max_zones,
            self.max_twilight_points,
            self.max_storage,
            self.max_function_defs,
            self.max_instruction_defs,
            self.max_stack_elements,
            self.max_size_of_instructions,
            self.max_component_elements,
            self.max_component_depth,
        ]
    }
}

impl<'a> FontRead<'a> for MaxProfile {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let version: Fixed = cursor.read()?;
        let num_glyphs = cursor.read()?;
        if version == VERSION_0_5 {
            return Ok(MaxProfile::new(num_glyphs));
        }
        if version != VERSION_1_0 {
            return Err(ReadError::InvalidFormat(version.to_bits().into()));
        }
        Ok(MaxProfile {
            version,
            num_glyphs,
            max_points: cursor.read()?,
            max_contours: cursor.read()?,
            max_composite_points: cursor.read()?,
            max_composite_contours: cursor.read()?,
            max_zones: cursor.read()?,
            max_twilight_points: cursor.read()?,
            max_storage: cursor.read()?,
            max_function_defs: cursor.read()?,
            max_instruction_defs: cursor.read()?,
            max_stack_elements: cursor.read()?,
            max_size_of_instructions: cursor.read()?,
            max_component_elements: cursor.read()?,
            max_component_depth: cursor.read()?,
        })
    }
}

impl FontWrite for MaxProfile {
    fn write_into(&self, writer: &mut TableWriter) {
        self.version.write_into(writer);
        self.num_glyphs.write_into(writer);
        if self.has_truetype_fields() {
            self.truetype_fields().write_into(writer);
        }
    }
}

impl Validate for MaxProfile {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("maxp", |ctx| {
            ctx.in_field("version", |ctx| {
                if self.version != VERSION_0_5 && self.version != VERSION_1_0 {
                    ctx.report(format_args!("unknown version {}", self.version));
                } else if !self.has_truetype_fields()
                    && self.truetype_fields().iter().any(|x| *x != 0)
                {
                    ctx.report("version 0.5 tables must not set the TrueType maximums");
                }
            });
            ctx.in_field("num_glyphs", |ctx| {
                if self.num_glyphs == 0 {
                    ctx.report("a font must contain at least one glyph");
                }
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dump_table, test_helpers::BeBuffer};
    use pretty_assertions::{assert_eq, assert_ne};
    use std::{string::ToString, vec::Vec};

    #[test]
    fn read_version_0_5() {
        let buf = BeBuffer::new().push(VERSION_0_5).push(1234u16);
        let maxp = MaxProfile::read(buf.font_data()).unwrap();
        assert_eq!(maxp, MaxProfile::new(1234));
        assert_eq!(dump_table(&maxp).unwrap(), buf.to_vec());
        assert_eq!(buf.len(), MaxProfile::LEN_0_5);
    }

    #[test]
    fn read_version_1_0() {
        let buf = BeBuffer::new()
            .push(VERSION_1_0)
            .push(6u16)
            .extend([120u16, 8, 300, 12, 2, 16, 64, 10, 0, 512, 2048, 4, 1]);
        assert_eq!(buf.len(), MaxProfile::LEN_1_0);
        let maxp = MaxProfile::read(buf.font_data()).unwrap();
        assert_eq!(maxp.num_glyphs, 6);
        assert_eq!(maxp.max_points, 120);
        assert_eq!(maxp.max_zones, 2);
        assert_eq!(maxp.max_size_of_instructions, 2048);
        assert_eq!(maxp.max_component_depth, 1);
        assert_eq!(dump_table(&maxp).unwrap(), buf.to_vec());

        let truncated = FontData::new(&buf[..MaxProfile::LEN_1_0 - 2]);
        assert_eq!(MaxProfile::read(truncated), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn version_0_5_is_packed() {
        assert_eq!(VERSION_0_5.to_string(), "0:20480");
        assert_ne!(VERSION_0_5, Fixed::from_f64(0.5));
        assert_eq!(VERSION_1_0, Fixed::ONE);
    }

    #[test]
    fn unknown_version() {
        let buf = BeBuffer::new().push(Fixed::from_bits(0x0002_0000)).push(1u16);
        assert_eq!(
            MaxProfile::read(buf.font_data()),
            Err(ReadError::InvalidFormat(0x0002_0000))
        );
    }

    #[test]
    fn invariants() {
        assert!(MaxProfile::new(1).validate().is_ok());
        let report = MaxProfile {
            max_points: 10,
            ..MaxProfile::new(0)
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            report.locations().collect::<Vec<_>>(),
            ["maxp.version", "maxp.num_glyphs"]
        );
    }
}
