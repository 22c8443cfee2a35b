//! The metadata tables
//!
//! Each submodule holds the record for one table, along with its tag.

pub mod head;
pub mod hhea;
pub mod maxp;
pub mod os2;
pub mod pclt;
pub mod post;
pub mod vhea;
