//! a trait for things that can serve font tables

use types::Tag;

use crate::{tables, FontData, FontRead, ReadError};

/// An interface for accessing tables from a font (or font-like object)
///
/// Implementors only need to locate the raw bytes of a table; the provided
/// methods decode each record.
pub trait TableProvider<'a> {
    fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>>;

    fn expect_data_for_tag(&self, tag: Tag) -> Result<FontData<'a>, ReadError> {
        self.data_for_tag(tag).ok_or(ReadError::TableIsMissing(tag))
    }

    fn head(&self) -> Result<tables::head::Header, ReadError> {
        self.expect_data_for_tag(tables::head::TAG)
            .and_then(FontRead::read)
    }

    fn hhea(&self) -> Result<tables::hhea::HoriHeader, ReadError> {
        self.expect_data_for_tag(tables::hhea::TAG)
            .and_then(FontRead::read)
    }

    fn vhea(&self) -> Result<tables::vhea::VertHeader, ReadError> {
        self.expect_data_for_tag(tables::vhea::TAG)
            .and_then(FontRead::read)
    }

    fn os2(&self) -> Result<tables::os2::Os2, ReadError> {
        self.expect_data_for_tag(tables::os2::TAG)
            .and_then(FontRead::read)
    }

    fn post(&self) -> Result<tables::post::Postscript, ReadError> {
        self.expect_data_for_tag(tables::post::TAG)
            .and_then(FontRead::read)
    }

    fn pclt(&self) -> Result<tables::pclt::Pclt, ReadError> {
        self.expect_data_for_tag(tables::pclt::TAG)
            .and_then(FontRead::read)
    }

    fn maxp(&self) -> Result<tables::maxp::MaxProfile, ReadError> {
        self.expect_data_for_tag(tables::maxp::TAG)
            .and_then(FontRead::read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::TestFont;
    use std::string::ToString;

    #[test]
    fn missing_tables() {
        let font = TestFont::new().with_table(Tag::MAXP, [0x00, 0x00, 0x50, 0x00, 0x00, 0x03]);
        let font = &font;
        assert_eq!(font.maxp().unwrap().num_glyphs, 3);
        assert_eq!(font.head(), Err(ReadError::TableIsMissing(Tag::HEAD)));
        assert_eq!(
            font.os2().unwrap_err().to_string(),
            "the OS/2 table is missing"
        );
    }
}
