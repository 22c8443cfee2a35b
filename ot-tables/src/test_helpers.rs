//! small utilities used in tests

use crate::{FontData, TableProvider};
use std::collections::{BTreeMap, HashMap};
use std::string::{String, ToString};
use std::vec::Vec;
use types::{Scalar, Tag};

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
    tagged_locations: HashMap<String, usize>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write a scalar, remembering its position so it can be overwritten later.
    pub fn push_with_tag(mut self, item: impl Scalar, tag: &str) -> Self {
        self.tagged_locations
            .insert(tag.to_string(), self.data.len());
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    pub fn offset_for(&self, tag: &str) -> usize {
        // panic on unrecognized tags
        self.tagged_locations.get(tag).copied().unwrap()
    }

    /// Overwrite the value pushed with `tag`.
    pub fn write_at(&mut self, tag: &str, item: impl Scalar) {
        let offset = self.offset_for(tag);
        let raw = item.to_raw();
        let new_data: &[u8] = raw.as_ref();
        self.data[offset..offset + new_data.len()].copy_from_slice(new_data);
    }

    pub fn font_data(&self) -> FontData<'_> {
        FontData::new(&self.data)
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// An in-memory set of tables, standing in for a parsed font file.
#[derive(Debug, Default)]
pub struct TestFont {
    tables: BTreeMap<Tag, Vec<u8>>,
}

impl TestFont {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_table(mut self, tag: Tag, data: impl Into<Vec<u8>>) -> Self {
        self.tables.insert(tag, data.into());
        self
    }
}

impl<'a> TableProvider<'a> for &'a TestFont {
    fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>> {
        let font: &'a TestFont = *self;
        font.tables.get(&tag).map(|data| FontData::new(data))
    }
}

/// Initialize logging for a test, ignoring repeated calls.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
