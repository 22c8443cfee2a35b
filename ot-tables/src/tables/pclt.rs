//! The [PCLT](https://docs.microsoft.com/en-us/typography/opentype/spec/pclt) table

use alloc::string::String;

use types::{Fixed, Tag};

use crate::{FontData, FontRead, FontWrite, ReadError, TableWriter, Validate, ValidationCtx};

/// 'PCLT'
pub const TAG: Tag = Tag::PCLT;

/// The [PCL 5](https://docs.microsoft.com/en-us/typography/opentype/spec/pclt) table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pclt {
    /// Table version, 1.0.
    pub version: Fixed,
    pub font_number: u32,
    pub pitch: u16,
    pub x_height: u16,
    pub style: u16,
    pub type_family: u16,
    pub cap_height: u16,
    pub symbol_set: u16,
    /// The typeface name, in (possibly NUL-padded) ASCII.
    pub typeface: [i8; 16],
    pub character_complement: [i8; 8],
    pub file_name: [i8; 6],
    pub stroke_weight: i8,
    pub width_type: i8,
    pub serif_style: i8,
    /// Set to 0.
    pub reserved: u8,
}

impl Pclt {
    /// The size of the table in bytes.
    pub const LEN: usize = 54;

    /// The typeface name, up to the first NUL.
    pub fn typeface_str(&self) -> String {
        self.typeface
            .iter()
            .map(|b| *b as u8)
            .take_while(|b| *b != 0)
            .map(char::from)
            .collect()
    }
}

impl<'a> FontRead<'a> for Pclt {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        Ok(Pclt {
            version: cursor.read()?,
            font_number: cursor.read()?,
            pitch: cursor.read()?,
            x_height: cursor.read()?,
            style: cursor.read()?,
            type_family: cursor.read()?,
            cap_height: cursor.read()?,
            symbol_set: cursor.read()?,
            typeface: cursor.read_i8_array()?,
            character_complement: cursor.read_i8_array()?,
            file_name: cursor.read_i8_array()?,
            stroke_weight: cursor.read()?,
            width_type: cursor.read()?,
            serif_style: cursor.read()?,
            reserved: cursor.read()?,
        })
    }
}

impl FontWrite for Pclt {
    fn write_into(&self, writer: &mut TableWriter) {
        self.version.write_into(writer);
        self.font_number.write_into(writer);
        self.pitch.write_into(writer);
        self.x_height.write_into(writer);
        self.style.write_into(writer);
        self.type_family.write_into(writer);
        self.cap_height.write_into(writer);
        self.symbol_set.write_into(writer);
        self.typeface.write_into(writer);
        self.character_complement.write_into(writer);
        self.file_name.write_into(writer);
        self.stroke_weight.write_into(writer);
        self.width_type.write_into(writer);
        self.serif_style.write_into(writer);
        self.reserved.write_into(writer);
    }
}

impl Validate for Pclt {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("PCLT", |ctx| {
            ctx.in_field("reserved", |ctx| {
                if self.reserved != 0 {
                    ctx.report("reserved byte must be 0");
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
        let mut typeface = [0u8; 16];
        typeface[..6].copy_from_slice(b"Roboto");
        let buf = BeBuffer::new()
            .push(Fixed::ONE)
            .push(0x8000_1234u32)
            .extend([550u16, 1062, 0, 0x4000, 1456, 0x0E55])
            .extend(typeface)
            .extend([0xFFu8; 8])
            .extend(*b"ROBO00")
            .extend([-3i8, 0, 2])
            .push(0u8);
        assert_eq!(buf.len(), Pclt::LEN);

        let pclt = Pclt::read(buf.font_data()).unwrap();
        assert_eq!(pclt.font_number, 0x8000_1234);
        assert_eq!(pclt.symbol_set, 0x0E55);
        assert_eq!(pclt.typeface_str(), "Roboto");
        assert_eq!(pclt.character_complement, [-1; 8]);
        assert_eq!(pclt.stroke_weight, -3);
        assert_eq!(pclt.serif_style, 2);
        assert_eq!(dump_table(&pclt).unwrap(), buf.to_vec());
    }

    #[test]
    fn reserved_must_be_zero() {
        let pclt = Pclt {
            reserved: 1,
            ..Default::default()
        };
        let report = pclt.validate().unwrap_err();
        assert_eq!(report.locations().next().unwrap(), "PCLT.reserved");
    }
}
