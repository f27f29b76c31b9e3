//! Markup vocabulary
//!
//! The writer never sees tag or entity names directly; the event producer
//! speaks in identifiers that are resolved against a read-only dictionary:
//! tag display names, per-tag attribute tables, a content-model
//! classification per tag, and entity display names. One tag may be
//! designated as the preformatted element, inside which no automatic
//! wrapping happens.

use std::borrow::Cow;

pub mod html;

/// Index of a tag in a [`Dictionary`].
pub type TagId = usize;

/// Index of an entity name in a [`Dictionary`].
pub type EntityId = usize;

/// Classification of what a tag may contain, which decides how clean a line
/// break is next to its markup.
///
/// Breaking between element-only children is cleaner than breaking where
/// text could sit flush against the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    /// No content at all (`<BR>`).
    Empty,
    /// Element children only; whitespace between them is structural.
    Element,
    /// Mixed text and element content.
    Mixed,
}

/// Definition of a single tag: display name, attribute table, content model.
#[derive(Debug, Clone)]
pub struct TagDef {
    name: Cow<'static, str>,
    attributes: Vec<Cow<'static, str>>,
    content: ContentModel,
}

impl TagDef {
    pub fn new(name: impl Into<Cow<'static, str>>, content: ContentModel) -> Self {
        TagDef {
            name: name.into(),
            attributes: Vec::new(),
            content,
        }
    }

    /// Attach the tag's attribute name table.
    pub fn with_attributes<I, T>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Cow<'static, str>>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> ContentModel {
        self.content
    }

    /// Name of the attribute at `index` in this tag's table.
    ///
    /// Panics when `index` is out of range; an attribute index the
    /// dictionary never defined is a producer bug, not a runtime condition.
    pub fn attribute(&self, index: usize) -> &str {
        &self.attributes[index]
    }

    /// Look up an attribute index by name, ASCII-case-insensitively.
    pub fn attribute_named(&self, name: &str) -> Option<usize> {
        self.attributes
            .iter()
            .position(|a| a.eq_ignore_ascii_case(name))
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

/// A complete, read-only markup vocabulary.
#[derive(Debug, Clone)]
pub struct Dictionary {
    tags: Vec<TagDef>,
    entities: Vec<Cow<'static, str>>,
    preformatted: Option<TagId>,
}

impl Dictionary {
    /// Build a dictionary from tag definitions, entity names, and the
    /// optional designated preformatted tag.
    pub fn new(
        tags: Vec<TagDef>,
        entities: Vec<Cow<'static, str>>,
        preformatted: Option<TagId>,
    ) -> Self {
        debug_assert!(preformatted.map_or(true, |id| id < tags.len()));
        Dictionary {
            tags,
            entities,
            preformatted,
        }
    }

    /// The tag definition for `id`. Panics on an id outside the vocabulary.
    pub fn tag(&self, id: TagId) -> &TagDef {
        &self.tags[id]
    }

    /// Look up a tag id by name, ASCII-case-insensitively.
    pub fn tag_named(&self, name: &str) -> Option<TagId> {
        self.tags
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The display name for an entity id, or `None` when the id is outside
    /// the table.
    pub fn entity_name(&self, id: EntityId) -> Option<&str> {
        self.entities.get(id).map(|e| e.as_ref())
    }

    /// Look up an entity id by its exact name. Entity names are
    /// case-sensitive (`amp` and `AMP` would be distinct entities).
    pub fn entity_named(&self, name: &str) -> Option<EntityId> {
        self.entities.iter().position(|e| e.as_ref() == name)
    }

    /// Whether `id` is the designated preformatted tag.
    pub fn is_preformatted(&self, id: TagId) -> bool {
        self.preformatted == Some(id)
    }

    /// The designated preformatted tag, if the vocabulary has one.
    pub fn preformatted_tag(&self) -> Option<TagId> {
        self.preformatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        let tags = vec![
            TagDef::new("DOC", ContentModel::Element),
            TagDef::new("TEXT", ContentModel::Mixed)
                .with_attributes(["LANG", "CLASS"]),
            TagDef::new("RAW", ContentModel::Mixed),
        ];
        let entities = vec![Cow::Borrowed("amp"), Cow::Borrowed("lt")];
        Dictionary::new(tags, entities, Some(2))
    }

    #[test]
    fn tag_lookup_is_case_insensitive() {
        let dict = sample();
        assert_eq!(dict.tag_named("text"), Some(1));
        assert_eq!(dict.tag_named("TEXT"), Some(1));
        assert_eq!(dict.tag_named("nope"), None);
    }

    #[test]
    fn attribute_table_lookup() {
        let dict = sample();
        let text = dict.tag(1);
        assert_eq!(text.attribute(0), "LANG");
        assert_eq!(text.attribute_named("class"), Some(1));
        assert_eq!(text.attribute_named("id"), None);
    }

    #[test]
    fn entity_lookup_is_case_sensitive() {
        let dict = sample();
        assert_eq!(dict.entity_named("amp"), Some(0));
        assert_eq!(dict.entity_named("AMP"), None);
        assert_eq!(dict.entity_name(1), Some("lt"));
        assert_eq!(dict.entity_name(99), None);
    }

    #[test]
    fn preformatted_designation() {
        let dict = sample();
        assert!(dict.is_preformatted(2));
        assert!(!dict.is_preformatted(0));
        assert_eq!(dict.preformatted_tag(), Some(2));
    }
}
