//! Domain record types for the mock dataset.
//!
//! Every record carries a unique [`EntityId`] plus a nested `content` struct
//! holding its outbound references. The link structs start empty and are
//! replaced wholesale during enhancement; base records are never mutated in
//! place, so the same base collection can feed several enhancement chains
//! without aliasing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a generated entity.
pub type EntityId = Uuid;

/// A generated author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique identifier for the author.
    pub id: EntityId,
    /// Full display name.
    pub name: String,
    /// Short biography blurb.
    pub bio: String,
    /// Outbound references attached during enhancement.
    #[serde(default)]
    pub content: AuthorLinks,
}

/// Outbound references carried by an [`Author`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorLinks {
    /// Media items associated with the author.
    pub medias: Vec<EntityId>,
    /// Modules the author contributes to (always at least one).
    pub modules: Vec<EntityId>,
}

/// A generated media record (image, clip, attachment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Unique identifier for the media item.
    pub id: EntityId,
    /// Human-readable title.
    pub title: String,
    /// Locator for the media payload.
    pub url: String,
    /// Outbound references attached during enhancement.
    #[serde(default)]
    pub content: MediaLinks,
}

/// Outbound references carried by a [`Media`] record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLinks {
    /// Authors credited on the media item.
    pub authors: Vec<EntityId>,
    /// Modules the media item appears in (always at least one).
    pub modules: Vec<EntityId>,
    /// Tags applied to the media item.
    pub tags: Vec<EntityId>,
}

/// A generated course module record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    /// Unique identifier for the module.
    pub id: EntityId,
    /// Human-readable title.
    pub title: String,
    /// Outbound references attached during enhancement.
    #[serde(default)]
    pub content: ModuleLinks,
}

/// Outbound references carried by a [`CourseModule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleLinks {
    /// Authors credited on the module.
    pub authors: Vec<EntityId>,
    /// The module's own chapters, in chapter-type order.
    pub chapters: Vec<EntityId>,
}

/// A generated chapter record belonging to exactly one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Unique identifier for the chapter.
    pub id: EntityId,
    /// Chapter type label (one of the fixed pair).
    #[serde(rename = "type")]
    pub type_label: ChapterTypeLabel,
    /// Outbound references attached during enhancement.
    #[serde(default)]
    pub content: ChapterLinks,
}

/// Outbound references carried by a [`Chapter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterLinks {
    /// Media items embedded in the chapter.
    pub medias: Vec<EntityId>,
}

/// Label naming a chapter type, such as `video` or `quiz`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterTypeLabel(String);

impl ChapterTypeLabel {
    /// Wraps a raw label string.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A generated static page. Pages are never cross-referenced by ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique identifier for the page.
    pub id: EntityId,
    /// Human-readable title.
    pub title: String,
    /// URL slug derived from the title.
    pub slug: String,
}

/// A generated tag record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique identifier for the tag.
    pub id: EntityId,
    /// Tag label.
    pub label: String,
}

/// Author collection plus its catalog metadata.
///
/// Leaf generators return collections wrapped in a catalog so that metadata
/// survives enhancement: the assembler swaps the enhanced list back in and
/// keeps the rest of the catalog untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCatalog {
    /// Catalog headline shown on listing pages.
    pub headline: String,
    /// The author collection, in generation order.
    pub authors: Vec<Author>,
}

/// Media collection plus its catalog metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCatalog {
    /// Catalog headline shown on listing pages.
    pub headline: String,
    /// The media collection, in generation order.
    pub medias: Vec<Media>,
}

/// Module collection plus its catalog metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCatalog {
    /// Catalog headline shown on listing pages.
    pub headline: String,
    /// The module collection, in generation order.
    pub modules: Vec<CourseModule>,
}

/// The fully linked dataset returned by the assembler.
///
/// Pages and tags pass through generation unmodified; the other collections
/// carry relation attachments whose IDs all resolve within this dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDataset {
    /// Author catalog with media and module references attached.
    pub authors: AuthorCatalog,
    /// Flattened chapter collection in group-major order.
    pub chapters: Vec<Chapter>,
    /// Media catalog with author, module, and tag references attached.
    pub medias: MediaCatalog,
    /// Module catalog with author and chapter references attached.
    pub modules: ModuleCatalog,
    /// Static pages, unmodified.
    pub pages: Vec<Page>,
    /// Tags, unmodified.
    pub tags: Vec<Tag>,
}

impl MockDataset {
    /// Returns the total number of entities across all collections.
    #[must_use]
    pub fn entity_total(&self) -> usize {
        self.authors.authors.len()
            + self.chapters.len()
            + self.medias.medias.len()
            + self.modules.modules.len()
            + self.pages.len()
            + self.tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_serializes_with_nested_content() {
        let author = Author {
            id: Uuid::nil(),
            name: "Ada Lovelace".to_owned(),
            bio: "Wrote the first program.".to_owned(),
            content: AuthorLinks::default(),
        };
        let json = serde_json::to_string(&author).expect("serialize");
        assert!(json.contains("\"content\""));
        assert!(json.contains("\"medias\":[]"));
        assert!(json.contains("\"modules\":[]"));
    }

    #[test]
    fn chapter_type_field_serializes_as_type() {
        let chapter = Chapter {
            id: Uuid::nil(),
            type_label: ChapterTypeLabel::new("video"),
            content: ChapterLinks::default(),
        };
        let json = serde_json::to_string(&chapter).expect("serialize");
        assert!(json.contains("\"type\":\"video\""));
    }

    #[test]
    fn entity_total_sums_all_collections() {
        let dataset = MockDataset {
            authors: AuthorCatalog {
                headline: "Authors".to_owned(),
                authors: vec![],
            },
            chapters: vec![],
            medias: MediaCatalog {
                headline: "Medias".to_owned(),
                medias: vec![],
            },
            modules: ModuleCatalog {
                headline: "Modules".to_owned(),
                modules: vec![],
            },
            pages: vec![Page {
                id: Uuid::nil(),
                title: "Home".to_owned(),
                slug: "home".to_owned(),
            }],
            tags: vec![
                Tag {
                    id: Uuid::nil(),
                    label: "intro".to_owned(),
                },
                Tag {
                    id: Uuid::nil(),
                    label: "basics".to_owned(),
                },
            ],
        };
        assert_eq!(dataset.entity_total(), 3);
    }
}
