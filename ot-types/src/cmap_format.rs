//! Character map subtable formats

open_enum! {
    /// The format of a `cmap` subtable.
    ///
    /// Only the identity of each format is described here; reading the
    /// subtables themselves is up to the caller.
    ///
    /// For more detail, see <https://learn.microsoft.com/en-us/typography/opentype/spec/cmap>
    pub enum CmapFormat {
        /// Byte encoding table.
        ByteEncoding = 0 => "Byte encoding table",
        /// High-byte mapping through table, for CJK double-byte encodings.
        HighByteMapping = 2 => "High-byte mapping through table",
        /// Segment mapping to delta values.
        SegmentMapping = 4 => "Segment mapping to delta values",
        /// Trimmed table mapping.
        TrimmedTable = 6 => "Trimmed table mapping",
        /// Mixed 16-bit and 32-bit coverage.
        Mixed16And32 = 8 => "Mixed 16-bit and 32-bit coverage",
        /// Trimmed array, with 32-bit character codes.
        TrimmedArray = 10 => "Trimmed array",
        /// Segmented coverage over the full 32-bit range.
        SegmentedCoverage = 12 => "Segmented coverage",
        /// Many-to-one range mappings, mapping ranges of codes to a single glyph.
        ManyToOneRange = 13 => "Many-to-one range mappings",
        /// Unicode variation sequences.
        UnicodeVariationSequences = 14 => "Unicode Variation Sequences",
    }
}

impl CmapFormat {
    /// Returns `true` if subtables of this format map 32-bit character codes.
    pub fn has_32bit_codes(self) -> bool {
        matches!(self.to_u16(), 8 | 10 | 12 | 13)
    }
}
