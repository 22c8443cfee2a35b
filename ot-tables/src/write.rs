//! Encoding records as big-endian bytes

use alloc::vec::Vec;

use types::{
    CodePageRange, F2Dot14, Fixed, LongDateTime, Scalar, Tag, Timestamp, UnicodeRange,
};

use crate::validate::{Validate, ValidationReport};

/// A type that can be written out as part of a font table.
pub trait FontWrite {
    /// Write our data into this [TableWriter].
    fn write_into(&self, writer: &mut TableWriter);
}

/// A buffer that a record writes its fields into.
#[derive(Debug, Default)]
pub struct TableWriter {
    data: Vec<u8>,
}

/// Attempt to serialize a table.
///
/// If the table is malformed, this will return an Err([`ValidationReport`]),
/// otherwise it will return the bytes encoding the table.
pub fn dump_table<T: FontWrite + Validate>(table: &T) -> Result<Vec<u8>, ValidationReport> {
    table.validate()?;
    let mut writer = TableWriter::default();
    table.write_into(&mut writer);
    Ok(writer.into_data())
}

impl TableWriter {
    /// Write raw bytes into this table.
    ///
    /// The caller is responsible for ensuring bytes are in big-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes)
    }

    /// Write `len` zero bytes, for reserved fields.
    pub fn pad(&mut self, len: usize) {
        self.data.resize(self.data.len() + len, 0);
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the writer, returning the encoded bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

macro_rules! write_be_bytes {
    ($ty:ty) => {
        impl FontWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut TableWriter) {
                writer.write_slice(self.to_raw().as_ref())
            }
        }
    };
}

write_be_bytes!(u8);
write_be_bytes!(i8);
write_be_bytes!(u16);
write_be_bytes!(i16);
write_be_bytes!(u32);
write_be_bytes!(i32);
write_be_bytes!(i64);
write_be_bytes!(F2Dot14);
write_be_bytes!(Fixed);
write_be_bytes!(LongDateTime);
write_be_bytes!(Tag);
write_be_bytes!(UnicodeRange);

// dates are stored relative to the font epoch.
impl FontWrite for Timestamp {
    fn write_into(&self, writer: &mut TableWriter) {
        self.to_long_date_time().write_into(writer)
    }
}

// the two halves are stored as separate fields, low bits first.
impl FontWrite for CodePageRange {
    fn write_into(&self, writer: &mut TableWriter) {
        let (range1, range2) = self.to_words();
        range1.write_into(writer);
        range2.write_into(writer);
    }
}

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

impl<T: FontWrite, const N: usize> FontWrite for [T; N] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.as_slice().write_into(writer)
    }
}
