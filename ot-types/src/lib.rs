//! Common scalar and identifier types used in OpenType metadata tables
//!
//! This crate provides the leaves of the table model: the [fixed-point][data types]
//! numbers used for versions, angles and coordinates, and the closed sets of
//! identifiers (platforms, encodings, languages, name IDs, cmap formats and
//! Unicode ranges) needed to interpret `cmap`, `name` and `OS/2` data.
//!
//! Every enumeration in this crate preserves unknown raw values: converting an
//! unrecognized integer and back again is always lossless.
//!
//! [data types]: https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

#[macro_use]
mod macros;

mod bbox;
mod cmap_format;
mod code_page;
mod encoding;
mod fixed;
mod language;
mod longdatetime;
mod name_id;
mod platform;
mod raw;
mod tag;
mod unicode_range;


pub use bbox::BoundingBox;
pub use cmap_format::CmapFormat;
pub use code_page::CodePageRange;
pub use encoding::{
    AdobeEncoding, AppleUnicodeEncoding, Encoding, IsoEncoding, MacEncoding, MicrosoftEncoding,
};
pub use fixed::{F26Dot6, F2Dot14, Fixed, ParseFixedError};
pub use language::{Language, MacLanguage, MicrosoftLanguage};
pub use longdatetime::{LongDateTime, Timestamp};
pub use name_id::NameId;
pub use platform::PlatformId;
pub use raw::Scalar;
pub use tag::{InvalidTag, Tag};
pub use unicode_range::{UnicodeRange, UnicodeRangeBit, UnicodeRanges};
