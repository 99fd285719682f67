//! Graph assembly: from independent leaf collections to a linked dataset.
//!
//! The assembler generates every leaf collection, derives the module count
//! from the module collection itself, generates one chapter group per module,
//! extracts the ID pools, and applies each collection's enhancer chain. The
//! chains write to disjoint fields, so their composition order only affects
//! RNG sequencing, never the shape of the result. Referential integrity holds
//! by construction: attachments are drawn from pools of IDs that exist in the
//! same dataset.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::chapters::{ChapterGroup, ChapterTypePair, flatten_groups, generate_chapter_groups};
use crate::entity::{
    Author, AuthorCatalog, AuthorLinks, Chapter, ChapterLinks, CourseModule, EntityId, Media,
    MediaCatalog, MediaLinks, MockDataset, ModuleCatalog, ModuleLinks,
};
use crate::enhancer::{LinkRange, attach_chapter_groups, attach_random_links};
use crate::error::GenerationError;
use crate::leaves::{
    generate_authors, generate_medias, generate_modules, generate_pages, generate_tags,
};

/// Media references attached to authors and chapters.
const MEDIA_LINKS: LinkRange = LinkRange::new(0, 10);

/// Module references attached to authors and medias. The minimum of one means
/// every author and every media item belongs to at least one module.
const MODULE_LINKS: LinkRange = LinkRange::new(1, 3);

/// Author references attached to medias and modules.
const AUTHOR_LINKS: LinkRange = LinkRange::new(0, 3);

/// Tag references attached to medias.
const TAG_LINKS: LinkRange = LinkRange::new(0, 10);

/// Collection sizes for one generation run.
///
/// The defaults match the site build's dataset: a large media pool, a
/// moderate set of authors and tags, and a small number of modules and pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of authors to generate.
    pub author_count: usize,
    /// Number of media items to generate.
    pub media_count: usize,
    /// Number of modules to generate. Chapters are derived from this: every
    /// module receives one chapter group.
    pub module_count: usize,
    /// Number of static pages to generate.
    pub page_count: usize,
    /// Number of tags to generate.
    pub tag_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            author_count: 20,
            media_count: 100,
            module_count: 10,
            page_count: 5,
            tag_count: 20,
        }
    }
}

/// Generates a fresh dataset with default counts and an entropy seed.
///
/// Every invocation produces an independent dataset; nothing is cached or
/// shared between calls. Use [`generate_dataset_with_seed`] when the output
/// must be reproducible.
///
/// # Errors
///
/// Returns [`GenerationError`] if a relation range in the table is invalid.
pub fn generate_dataset() -> Result<MockDataset, GenerationError> {
    generate_dataset_with_seed(rand::rng().random())
}

/// Generates a dataset with default counts from an explicit seed.
///
/// The same seed always produces an identical dataset.
///
/// # Errors
///
/// Returns [`GenerationError`] if a relation range in the table is invalid.
///
/// # Example
///
/// ```
/// use mock_data::generate_dataset_with_seed;
///
/// let dataset = generate_dataset_with_seed(42).expect("generated");
/// let again = generate_dataset_with_seed(42).expect("generated");
///
/// assert_eq!(dataset, again);
/// assert_eq!(dataset.authors.authors.len(), 20);
/// assert_eq!(dataset.chapters.len(), 2 * dataset.modules.modules.len());
/// ```
pub fn generate_dataset_with_seed(seed: u64) -> Result<MockDataset, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_dataset_with(&GeneratorConfig::default(), &mut rng)
}

/// Generates a dataset with explicit counts and an injected RNG.
///
/// # Errors
///
/// Returns [`GenerationError`] if a relation range in the table is invalid.
/// Chapter alignment cannot fail here because the groups are generated from
/// the module collection's own length.
pub fn generate_dataset_with(
    config: &GeneratorConfig,
    rng: &mut ChaCha8Rng,
) -> Result<MockDataset, GenerationError> {
    // Leaf collections, generated independently of one another.
    let media_catalog = generate_medias(rng, config.media_count);
    let author_catalog = generate_authors(rng, config.author_count);
    let module_catalog = generate_modules(rng, config.module_count);
    let pages = generate_pages(rng, config.page_count);
    let tags = generate_tags(rng, config.tag_count);

    // Chapters bind to modules, so their count comes from the generated
    // module collection rather than the config.
    let chapter_types = ChapterTypePair::default();
    let groups = generate_chapter_groups(rng, module_catalog.modules.len(), &chapter_types);
    let chapters_base = flatten_groups(&groups);

    // ID pools for the relation table.
    let author_ids: Vec<EntityId> = author_catalog.authors.iter().map(|a| a.id).collect();
    let media_ids: Vec<EntityId> = media_catalog.medias.iter().map(|m| m.id).collect();
    let module_ids: Vec<EntityId> = module_catalog.modules.iter().map(|m| m.id).collect();
    let tag_ids: Vec<EntityId> = tags.iter().map(|t| t.id).collect();

    let AuthorCatalog {
        headline: author_headline,
        authors: authors_base,
    } = author_catalog;
    let MediaCatalog {
        headline: media_headline,
        medias: medias_base,
    } = media_catalog;
    let ModuleCatalog {
        headline: module_headline,
        modules: modules_base,
    } = module_catalog;

    let authors = link_authors(rng, authors_base, &media_ids, &module_ids)?;
    let chapters = link_chapters(rng, chapters_base, &media_ids)?;
    let medias = link_medias(rng, medias_base, &author_ids, &module_ids, &tag_ids)?;
    let modules = link_modules(rng, modules_base, &author_ids, &groups)?;

    Ok(MockDataset {
        authors: AuthorCatalog {
            headline: author_headline,
            authors,
        },
        chapters,
        medias: MediaCatalog {
            headline: media_headline,
            medias,
        },
        modules: ModuleCatalog {
            headline: module_headline,
            modules,
        },
        pages,
        tags,
    })
}

fn link_authors(
    rng: &mut ChaCha8Rng,
    authors: Vec<Author>,
    media_ids: &[EntityId],
    module_ids: &[EntityId],
) -> Result<Vec<Author>, GenerationError> {
    let with_medias = attach_random_links(rng, authors, media_ids, MEDIA_LINKS, |author, ids| {
        Author {
            content: AuthorLinks {
                medias: ids,
                ..author.content
            },
            ..author
        }
    })?;
    attach_random_links(rng, with_medias, module_ids, MODULE_LINKS, |author, ids| {
        Author {
            content: AuthorLinks {
                modules: ids,
                ..author.content
            },
            ..author
        }
    })
}

fn link_chapters(
    rng: &mut ChaCha8Rng,
    chapters: Vec<Chapter>,
    media_ids: &[EntityId],
) -> Result<Vec<Chapter>, GenerationError> {
    attach_random_links(rng, chapters, media_ids, MEDIA_LINKS, |chapter, ids| {
        Chapter {
            content: ChapterLinks { medias: ids },
            ..chapter
        }
    })
}

fn link_medias(
    rng: &mut ChaCha8Rng,
    medias: Vec<Media>,
    author_ids: &[EntityId],
    module_ids: &[EntityId],
    tag_ids: &[EntityId],
) -> Result<Vec<Media>, GenerationError> {
    let with_authors = attach_random_links(rng, medias, author_ids, AUTHOR_LINKS, |media, ids| {
        Media {
            content: MediaLinks {
                authors: ids,
                ..media.content
            },
            ..media
        }
    })?;
    let with_modules =
        attach_random_links(rng, with_authors, module_ids, MODULE_LINKS, |media, ids| {
            Media {
                content: MediaLinks {
                    modules: ids,
                    ..media.content
                },
                ..media
            }
        })?;
    attach_random_links(rng, with_modules, tag_ids, TAG_LINKS, |media, ids| Media {
        content: MediaLinks {
            tags: ids,
            ..media.content
        },
        ..media
    })
}

fn link_modules(
    rng: &mut ChaCha8Rng,
    modules: Vec<CourseModule>,
    author_ids: &[EntityId],
    groups: &[ChapterGroup],
) -> Result<Vec<CourseModule>, GenerationError> {
    let with_authors =
        attach_random_links(rng, modules, author_ids, AUTHOR_LINKS, |module, ids| {
            CourseModule {
                content: ModuleLinks {
                    authors: ids,
                    ..module.content
                },
                ..module
            }
        })?;
    attach_chapter_groups(with_authors, groups)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn dataset() -> MockDataset {
        generate_dataset_with_seed(2026).expect("generation should succeed")
    }

    #[rstest]
    fn default_counts_match_the_site_build(dataset: MockDataset) {
        assert_eq!(dataset.authors.authors.len(), 20);
        assert_eq!(dataset.medias.medias.len(), 100);
        assert_eq!(dataset.modules.modules.len(), 10);
        assert_eq!(dataset.pages.len(), 5);
        assert_eq!(dataset.tags.len(), 20);
        assert_eq!(dataset.chapters.len(), 20);
    }

    #[test]
    fn same_seed_produces_identical_datasets() {
        let first = generate_dataset_with_seed(7).expect("generated");
        let second = generate_dataset_with_seed(7).expect("generated");
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_produce_different_datasets() {
        let first = generate_dataset_with_seed(7).expect("generated");
        let second = generate_dataset_with_seed(8).expect("generated");
        assert_ne!(first, second);
    }

    #[rstest]
    fn every_author_references_at_least_one_module(dataset: MockDataset) {
        let module_ids: HashSet<_> = dataset.modules.modules.iter().map(|m| m.id).collect();
        for author in &dataset.authors.authors {
            let count = author.content.modules.len();
            assert!((1..=3).contains(&count), "author has {count} module refs");
            assert!(
                author
                    .content
                    .modules
                    .iter()
                    .all(|id| module_ids.contains(id))
            );
        }
    }

    #[rstest]
    fn modules_carry_their_own_chapter_pair(dataset: MockDataset) {
        let chapter_ids: Vec<_> = dataset.chapters.iter().map(|c| c.id).collect();
        for (index, module) in dataset.modules.modules.iter().enumerate() {
            // Group-major flat order: module i owns chapters 2i and 2i + 1.
            let expected: Vec<_> = chapter_ids
                .iter()
                .skip(index * 2)
                .take(2)
                .copied()
                .collect();
            assert_eq!(module.content.chapters, expected);
        }
    }

    #[rstest]
    fn pages_and_tags_pass_through_unlinked(dataset: MockDataset) {
        assert!(!dataset.pages.is_empty());
        assert!(!dataset.tags.is_empty());
        // Pages and tags have no content struct at all; nothing to assert
        // beyond their presence and uniqueness.
        let page_ids: HashSet<_> = dataset.pages.iter().map(|p| p.id).collect();
        assert_eq!(page_ids.len(), dataset.pages.len());
    }

    #[test]
    fn zero_module_config_produces_no_chapters() {
        let config = GeneratorConfig {
            module_count: 0,
            ..GeneratorConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let generated = generate_dataset_with(&config, &mut rng).expect("generated");

        assert!(generated.chapters.is_empty());
        assert!(generated.modules.modules.is_empty());
        // Module refs degrade to empty despite the min of one.
        let unlinked = generated
            .authors
            .authors
            .iter()
            .all(|author| author.content.modules.is_empty());
        assert!(unlinked);
    }

    #[test]
    fn entropy_seeded_runs_share_the_output_schema() {
        let first = serde_json::to_value(generate_dataset().expect("generated")).expect("json");
        let second = serde_json::to_value(generate_dataset().expect("generated")).expect("json");

        let keys = |value: &serde_json::Value| -> Vec<String> {
            value
                .as_object()
                .map(|map| map.keys().cloned().collect())
                .unwrap_or_default()
        };
        assert_eq!(keys(&first), keys(&second));
        assert_eq!(
            keys(first.get("authors").unwrap_or(&serde_json::Value::Null)),
            keys(second.get("authors").unwrap_or(&serde_json::Value::Null)),
        );
    }
}
