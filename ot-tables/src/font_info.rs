//! The metadata records of a font, read together

use types::Tag;

use crate::{
    tables::{
        head::Header, hhea::HoriHeader, maxp::MaxProfile, os2::Os2, pclt::Pclt, post::Postscript,
        vhea::VertHeader,
    },
    ReadError, TableProvider, Validate, ValidationCtx,
};

/// The records of the `head`, `hhea`, `vhea`, `OS/2`, `post`, `PCLT` and
/// `maxp` tables of a single font.
///
/// `vhea` and `PCLT` are optional. A font without an `OS/2` table gets the
/// [absent][Os2::absent] record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontInfo {
    pub head: Header,
    pub hhea: HoriHeader,
    pub vhea: Option<VertHeader>,
    pub os2: Os2,
    pub post: Postscript,
    pub pclt: Option<Pclt>,
    pub maxp: MaxProfile,
}

impl FontInfo {
    /// Read every record from the provided font.
    ///
    /// Fails if a required table is missing or if any table present is
    /// malformed. The records are not validated.
    pub fn read<'a>(font: &impl TableProvider<'a>) -> Result<Self, ReadError> {
        Ok(FontInfo {
            head: font.head()?,
            hhea: font.hhea()?,
            vhea: optional(font.vhea(), Tag::VHEA)?,
            os2: optional(font.os2(), Tag::OS2)?.unwrap_or_else(Os2::absent),
            post: font.post()?,
            pclt: optional(font.pclt(), Tag::PCLT)?,
            maxp: font.maxp()?,
        })
    }
}

fn optional<T>(result: Result<T, ReadError>, tag: Tag) -> Result<Option<T>, ReadError> {
    match result {
        Ok(table) => Ok(Some(table)),
        Err(ReadError::TableIsMissing(_)) => {
            log::debug!("no {tag} table");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

impl Validate for FontInfo {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        self.head.validate_impl(ctx);
        self.hhea.validate_impl(ctx);
        self.vhea.validate_impl(ctx);
        self.os2.validate_impl(ctx);
        self.post.validate_impl(ctx);
        self.pclt.validate_impl(ctx);
        self.maxp.validate_impl(ctx);

        let num_glyphs = self.maxp.num_glyphs;
        ctx.in_table("hhea", |ctx| {
            ctx.in_field("number_of_h_metrics", |ctx| {
                if self.hhea.number_of_h_metrics > num_glyphs {
                    ctx.report(format_args!(
                        "{} long metrics for {num_glyphs} glyphs",
                        self.hhea.number_of_h_metrics
                    ));
                }
            })
        });
        if let Some(vhea) = &self.vhea {
            ctx.in_table("vhea", |ctx| {
                ctx.in_field("number_of_v_metrics", |ctx| {
                    if vhea.number_of_v_metrics > num_glyphs {
                        ctx.report(format_args!(
                            "{} long metrics for {num_glyphs} glyphs",
                            vhea.number_of_v_metrics
                        ));
                    }
                })
            });
        }
    }
}
