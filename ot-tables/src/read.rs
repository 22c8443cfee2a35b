//! Traits for interpreting font data

use types::Tag;

use crate::font_data::FontData;

/// A type that can be read from raw table data.
///
/// Implemented by every table record. Reading is responsible for checking
/// that the data is long enough for the fields the record's version declares;
/// it does not check the semantic invariants of the record, which are the
/// concern of [`Validate`][crate::Validate].
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    // i64 is flexible enough to store any version or format we might encounter
    InvalidFormat(i64),
    TableIsMissing(Tag),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "The table data was truncated"),
            ReadError::InvalidFormat(x) => write!(f, "Invalid format '{x}'"),
            ReadError::TableIsMissing(tag) => write!(f, "the {tag} table is missing"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
