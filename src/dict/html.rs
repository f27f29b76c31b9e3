//! Built-in HTML vocabulary
//!
//! A classic HTML tag set with content models and per-tag attribute tables,
//! plus the common named entities. Tag and attribute names are uppercase,
//! matching the era of markup this vocabulary describes; lookups through
//! [`Dictionary`] are case-insensitive either way.

use super::{ContentModel, Dictionary, TagDef};
use std::borrow::Cow;

use ContentModel::{Element, Empty, Mixed};

/// Common named entities, alphabetically ordered.
const ENTITY_NAMES: &[&str] = &[
    "amp", "apos", "copy", "gt", "hellip", "ldquo", "lsquo", "lt", "mdash",
    "nbsp", "ndash", "quot", "rdquo", "reg", "rsquo", "trade",
];

fn tag(name: &'static str, content: ContentModel, attributes: &[&'static str]) -> TagDef {
    TagDef::new(name, content).with_attributes(attributes.iter().copied())
}

impl Dictionary {
    /// The built-in HTML vocabulary. `PRE` is the designated preformatted
    /// element.
    pub fn html() -> Dictionary {
        let tags = vec![
            tag("A", Mixed, &["HREF", "NAME", "REL", "REV", "TITLE"]),
            tag("ADDRESS", Mixed, &[]),
            tag("B", Mixed, &[]),
            tag("BLOCKQUOTE", Mixed, &[]),
            tag("BODY", Mixed, &[]),
            tag("BR", Empty, &[]),
            tag("CODE", Mixed, &[]),
            tag("DD", Mixed, &[]),
            tag("DIV", Mixed, &["ALIGN", "CLASS", "ID"]),
            tag("DL", Element, &["COMPACT"]),
            tag("DT", Mixed, &[]),
            tag("EM", Mixed, &[]),
            tag("H1", Mixed, &["ALIGN"]),
            tag("H2", Mixed, &["ALIGN"]),
            tag("H3", Mixed, &["ALIGN"]),
            tag("H4", Mixed, &["ALIGN"]),
            tag("H5", Mixed, &["ALIGN"]),
            tag("H6", Mixed, &["ALIGN"]),
            tag("HEAD", Element, &[]),
            tag("HR", Empty, &["ALIGN", "SIZE", "WIDTH"]),
            tag("HTML", Element, &[]),
            tag("I", Mixed, &[]),
            tag("IMG", Empty, &["ALIGN", "ALT", "HEIGHT", "SRC", "WIDTH"]),
            tag("KBD", Mixed, &[]),
            tag("LI", Mixed, &["TYPE", "VALUE"]),
            tag("LINK", Empty, &["CLASS", "HREF", "REL", "REV", "TITLE"]),
            tag("META", Empty, &["CONTENT", "HTTP-EQUIV", "NAME"]),
            tag("OL", Element, &["START", "TYPE"]),
            tag("P", Mixed, &["ALIGN"]),
            tag("PRE", Mixed, &["WIDTH"]),
            tag("SAMP", Mixed, &[]),
            tag("SPAN", Mixed, &["CLASS", "ID"]),
            tag("STRONG", Mixed, &[]),
            tag("TABLE", Element, &["ALIGN", "BORDER", "WIDTH"]),
            tag("TD", Mixed, &["ALIGN", "COLSPAN", "ROWSPAN"]),
            tag("TH", Mixed, &["ALIGN", "COLSPAN", "ROWSPAN"]),
            tag("TITLE", Mixed, &[]),
            tag("TR", Element, &["ALIGN"]),
            tag("TT", Mixed, &[]),
            tag("UL", Element, &["TYPE"]),
        ];
        let preformatted = tags.iter().position(|t| t.name() == "PRE");
        let entities = ENTITY_NAMES.iter().map(|&e| Cow::Borrowed(e)).collect();
        Dictionary::new(tags, entities, preformatted)
    }
}
