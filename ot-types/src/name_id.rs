//! Name Identifiers
//!
//! Although these are treated as u16s in the OpenType spec, we choose to represent them
//! as a distinct type.

open_enum! {
    /// Identifier for an informational string (or name).
    ///
    /// A set of predefined identifiers exist for accessing names and other various metadata
    /// about the font. ID 15 is reserved and has no name.
    ///
    /// IDs 26 to 255, inclusive, are reserved for future standard names. IDs 256 to 32767,
    /// inclusive, are reserved for font-specific names such as those referenced by a font's
    /// layout features. Both are carried as `NameId::Unknown`.
    ///
    /// For more detail, see <https://learn.microsoft.com/en-us/typography/opentype/spec/name#name-ids>
    pub enum NameId {
        /// Copyright notice.
        CopyrightNotice = 0 => "Copyright Notice",
        /// Font family name.
        ///
        /// The font family name is used in combination with font subfamily name (ID 2),
        /// and should be shared among at most four fonts that differ only in weight or style.
        FamilyName = 1 => "Family Name",
        /// Font subfamily name.
        ///
        /// The font subfamily name is used in combination with font family name (ID 1),
        /// and distinguishes the fonts in a group with the same font family name.
        SubfamilyName = 2 => "Subfamily Name",
        /// Unique font identifier.
        UniqueId = 3 => "Unique ID",
        /// Full font name that reflects all family and relevant subfamily descriptors.
        FullName = 4 => "Full Name",
        /// Version string.
        ///
        /// Should begin with the syntax “Version number.number”.
        VersionString = 5 => "Version String",
        /// PostScript name for the font.
        ///
        /// When translated to ASCII, the name string must be no longer than 63
        /// characters and restricted to the printable ASCII subset, codes 33 to 126, except for
        /// the 10 characters '[', ']', '(', ')', '{', '}', '<', '>', '/', '%'.
        PostscriptName = 6 => "PostScript Name",
        /// Trademark; this is used to save any trademark notice/information for this font.
        Trademark = 7 => "Trademark",
        /// Manufacturer name.
        Manufacturer = 8 => "Manufacturer",
        /// Name of the designer of the typeface.
        Designer = 9 => "Designer",
        /// Description of the typeface.
        Description = 10 => "Description",
        /// URL of font vendor (with protocol, e.g., http://, ftp://).
        VendorUrl = 11 => "Vendor URL",
        /// URL of typeface designer (with protocol, e.g., http://, ftp://).
        DesignerUrl = 12 => "Designer URL",
        /// License description.
        LicenseDescription = 13 => "License Description",
        /// URL where additional licensing information can be found.
        LicenseUrl = 14 => "License URL",
        /// Typographic family name.
        ///
        /// Unlike the four-style family grouping of ID 1, the typographic family
        /// grouping doesn't impose any constraints on the number of faces within it.
        TypographicFamilyName = 16 => "Typographic Family Name",
        /// Typographic subfamily name.
        TypographicSubfamilyName = 17 => "Typographic Subfamily Name",
        /// Compatible full (Macintosh only).
        CompatibleFullName = 18 => "Compatible Full Name",
        /// Sample text.
        SampleText = 19 => "Sample Text",
        /// PostScript CID findfont name.
        PostscriptCidName = 20 => "PostScript CID Name",
        /// WWS family name.
        WwsFamilyName = 21 => "WWS Family Name",
        /// WWS subfamily name.
        WwsSubfamilyName = 22 => "WWS Subfamily Name",
        /// Light background palette, as used in the CPAL table's palette labels.
        LightBackgroundPalette = 23 => "Light Background Palette",
        /// Dark background palette, as used in the CPAL table's palette labels.
        DarkBackgroundPalette = 24 => "Dark Background Palette",
        /// Variations PostScript name prefix.
        VariationsPostscriptNamePrefix = 25 => "Variations PostScript Name Prefix",
    }
}

impl NameId {
    /// The first ID available for font-specific names.
    pub const FIRST_FONT_SPECIFIC: u16 = 256;

    /// Returns an iterator over the set of predefined identifiers according to the
    /// specification.
    pub fn predefined() -> impl Iterator<Item = Self> + Clone {
        Self::known()
    }

    /// Returns `true` if this ID is in the range reserved for font-specific
    /// names, such as those referenced by layout features.
    pub const fn is_font_specific(self) -> bool {
        let raw = self.to_u16();
        raw >= Self::FIRST_FONT_SPECIFIC && raw <= 32767
    }
}
