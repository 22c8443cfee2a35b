//! raw font bytes

use core::ops::{Bound, RangeBounds};

use types::Scalar;

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides bounds-checked
/// access to the big-endian scalars it contains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A cursor for reading consecutive fields out of [`FontData`].
///
/// Every read advances the cursor by the size of the value read, whether
/// or not it succeeded.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the data from `pos` to the end, if `pos` is in bounds.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(FontData::new)
    }

    /// Returns a sub-range of this data, if it is in bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(FontData::new)
    }

    /// Read a scalar at the provided position.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        offset
            .checked_add(T::RAW_BYTE_LEN)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Read `N` raw bytes at the provided position.
    pub fn read_bytes_at<const N: usize>(&self, offset: usize) -> Result<[u8; N], ReadError> {
        offset
            .checked_add(N)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(ReadError::OutOfBounds)
    }

    /// Returns an error if the data is shorter than `len` bytes.
    pub fn check_len(&self, len: usize) -> Result<(), ReadError> {
        if self.bytes.len() < len {
            Err(ReadError::OutOfBounds)
        } else {
            Ok(())
        }
    }

    /// Create a [`Cursor`] positioned at the start of this data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Cursor<'a> {
    /// Read a scalar and advance past it.
    pub fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos = self.pos.saturating_add(T::RAW_BYTE_LEN);
        temp
    }

    /// Read `N` raw bytes and advance past them.
    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let temp = self.data.read_bytes_at(self.pos);
        self.pos = self.pos.saturating_add(N);
        temp
    }

    /// Read `N` signed bytes and advance past them.
    pub fn read_i8_array<const N: usize>(&mut self) -> Result<[i8; N], ReadError> {
        self.read_bytes::<N>().map(|bytes| bytes.map(|byte| byte as i8))
    }

    /// Skip `n_bytes` bytes of data.
    pub fn advance_by(&mut self, n_bytes: usize) {
        self.pos = self.pos.saturating_add(n_bytes);
    }

    /// The current position, relative to the start of the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns an error if the cursor has moved past the end of the data.
    pub fn finish(self) -> Result<(), ReadError> {
        self.data.check_len(self.pos)
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
