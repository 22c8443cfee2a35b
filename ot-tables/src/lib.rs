//! Typed records for the OpenType font metadata tables
//!
//! This crate describes the `head`, `hhea`, `vhea`, `OS/2`, `post`, `PCLT` and
//! `maxp` tables as plain owned records, one field per field of the
//! [OpenType specification][spec]. Each record can be decoded from the
//! big-endian bytes of its table ([`FontRead`]), encoded back
//! ([`FontWrite`]), and checked against the invariants the specification
//! places on it ([`Validate`]).
//!
//! Locating tables inside a font file is left to the caller, who exposes
//! them through the [`TableProvider`] trait.
//!
//! # Example
//!
//! ```no_run
//! use ot_tables::{types::Tag, FontData, FontInfo, TableProvider};
//!
//! struct MyFont;
//!
//! impl<'a> TableProvider<'a> for MyFont {
//!     fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>> {
//!         // look up the table in the font's table directory
//!         # let _ = tag;
//!         None
//!     }
//! }
//!
//! let info = FontInfo::read(&MyFont).expect("missing required table");
//! println!("{} units per em, {} glyphs", info.head.units_per_em, info.maxp.num_glyphs);
//! ```
//!
//! [spec]: https://learn.microsoft.com/en-us/typography/opentype/spec/

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

extern crate alloc;

mod font_data;
mod font_info;
mod read;
mod table_provider;
pub mod tables;
pub mod validate;
mod write;

#[cfg(test)]
mod test_helpers;

pub use font_data::{Cursor, FontData};
pub use font_info::FontInfo;
pub use read::{FontRead, ReadError};
pub use table_provider::TableProvider;
pub use validate::{Validate, ValidationCtx, ValidationReport};
pub use write::{dump_table, FontWrite, TableWriter};

/// Public re-export of the ot-types crate.
pub extern crate ot_types as types;
