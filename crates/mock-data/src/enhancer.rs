//! Relation attachment over entity collections.
//!
//! An enhancer is a pure transform from a collection to a new collection with
//! one relation attached. The original records are consumed and rebuilt, so
//! enhancement never aliases state between chains. Each entity's random draw
//! is independent of every other entity's; only the RNG is shared, and only
//! for sequencing.

use rand_chacha::ChaCha8Rng;

use crate::chapters::ChapterGroup;
use crate::entity::{CourseModule, EntityId, ModuleLinks};
use crate::error::GenerationError;
use crate::pick::{random_entries, random_int_between};

/// Inclusive bounds on how many links a relation attaches per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRange {
    /// Minimum number of links, honoured whenever the pool allows.
    pub min: usize,
    /// Maximum number of links.
    pub max: usize,
}

impl LinkRange {
    /// Builds a range from inclusive bounds.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Draws a randomly sized random subset of the pool for one entity.
///
/// The drawn count honours `range` and is then clamped by the pool length,
/// so an empty pool degrades to an empty draw rather than an error.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when the range bounds are
/// inverted.
pub fn draw_link_ids(
    rng: &mut ChaCha8Rng,
    pool: &[EntityId],
    range: LinkRange,
) -> Result<Vec<EntityId>, GenerationError> {
    let count = random_int_between(rng, range.min, range.max)?;
    random_entries(rng, pool, count.min(pool.len()))
}

/// Attaches a randomly drawn subset of `pool` to every entity in the
/// collection.
///
/// `write` is the typed replacement for the original's dynamic field path: it
/// consumes the entity and returns a copy with the drawn IDs stored in the
/// relation's field. Every ID in an attachment exists in `pool` by
/// construction, and the attachment length never exceeds `range.max` or the
/// pool size.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when the range bounds are
/// inverted.
pub fn attach_random_links<T, F>(
    rng: &mut ChaCha8Rng,
    entities: Vec<T>,
    pool: &[EntityId],
    range: LinkRange,
    write: F,
) -> Result<Vec<T>, GenerationError>
where
    F: Fn(T, Vec<EntityId>) -> T,
{
    entities
        .into_iter()
        .map(|entity| {
            let ids = draw_link_ids(rng, pool, range)?;
            Ok(write(entity, ids))
        })
        .collect()
}

/// Attaches each module's own chapter group IDs, in chapter-type order.
///
/// Unlike [`attach_random_links`] this is deterministic: module `i` receives
/// exactly the IDs of group `i`. The pairing is checked up front because a
/// silent misalignment would corrupt referential integrity invisibly.
///
/// # Errors
///
/// Returns [`GenerationError::ChapterAlignment`] when the module collection
/// and the chapter groups have different lengths.
pub fn attach_chapter_groups(
    modules: Vec<CourseModule>,
    groups: &[ChapterGroup],
) -> Result<Vec<CourseModule>, GenerationError> {
    if modules.len() != groups.len() {
        return Err(GenerationError::ChapterAlignment {
            modules: modules.len(),
            groups: groups.len(),
        });
    }
    Ok(modules
        .into_iter()
        .zip(groups)
        .map(|(module, group)| CourseModule {
            content: ModuleLinks {
                chapters: group.chapter_ids().to_vec(),
                ..module.content
            },
            ..module
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{Rng, SeedableRng};
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    use super::*;
    use crate::chapters::{ChapterTypePair, generate_chapter_groups};
    use crate::entity::{Author, AuthorLinks};

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn authors(rng: &mut ChaCha8Rng, count: usize) -> Vec<Author> {
        (0..count)
            .map(|index| Author {
                id: Uuid::from_u128(rng.random()),
                name: format!("Author {index}"),
                bio: String::new(),
                content: AuthorLinks::default(),
            })
            .collect()
    }

    fn pool(rng: &mut ChaCha8Rng, size: usize) -> Vec<EntityId> {
        (0..size).map(|_| Uuid::from_u128(rng.random())).collect()
    }

    fn write_medias(author: Author, ids: Vec<EntityId>) -> Author {
        Author {
            content: AuthorLinks {
                medias: ids,
                ..author.content
            },
            ..author
        }
    }

    #[rstest]
    fn draw_honours_bounds_when_pool_suffices(mut rng: ChaCha8Rng) {
        let ids = pool(&mut rng, 10);
        for _ in 0..100 {
            let drawn = draw_link_ids(&mut rng, &ids, LinkRange::new(2, 5)).expect("draw");
            assert!((2..=5).contains(&drawn.len()), "len {}", drawn.len());
        }
    }

    #[rstest]
    fn draw_clamps_to_pool_when_pool_is_short(mut rng: ChaCha8Rng) {
        let ids = pool(&mut rng, 2);
        for _ in 0..50 {
            let drawn = draw_link_ids(&mut rng, &ids, LinkRange::new(5, 10)).expect("draw");
            assert_eq!(drawn.len(), 2);
        }
    }

    #[rstest]
    fn draw_rejects_inverted_range(mut rng: ChaCha8Rng) {
        let ids = pool(&mut rng, 5);
        let result = draw_link_ids(&mut rng, &ids, LinkRange::new(3, 1));
        assert_eq!(
            result,
            Err(GenerationError::InvalidRange { min: 3, max: 1 })
        );
    }

    #[rstest]
    fn empty_pool_degrades_to_empty_attachment(mut rng: ChaCha8Rng) {
        let base = authors(&mut rng, 1);
        let enhanced =
            attach_random_links(&mut rng, base, &[], LinkRange::new(0, 10), write_medias)
                .expect("enhance");
        let all_empty = enhanced.iter().all(|author| author.content.medias.is_empty());
        assert!(all_empty);
    }

    #[rstest]
    fn attachments_stay_within_pool(mut rng: ChaCha8Rng) {
        let base = authors(&mut rng, 20);
        let ids = pool(&mut rng, 10);
        let members: HashSet<_> = ids.iter().copied().collect();

        let enhanced =
            attach_random_links(&mut rng, base, &ids, LinkRange::new(1, 3), write_medias)
                .expect("enhance");

        for author in &enhanced {
            assert!((1..=3).contains(&author.content.medias.len()));
            assert!(
                author.content.medias.iter().all(|id| members.contains(id)),
                "attachment references an id outside the pool"
            );
        }
    }

    #[rstest]
    fn enhancement_preserves_untouched_fields(mut rng: ChaCha8Rng) {
        let base = authors(&mut rng, 3);
        let names: Vec<_> = base.iter().map(|author| author.name.clone()).collect();
        let ids = pool(&mut rng, 5);

        let enhanced =
            attach_random_links(&mut rng, base, &ids, LinkRange::new(0, 3), write_medias)
                .expect("enhance");

        let enhanced_names: Vec<_> = enhanced.iter().map(|author| author.name.clone()).collect();
        assert_eq!(enhanced_names, names);
        let modules_untouched = enhanced
            .iter()
            .all(|author| author.content.modules.is_empty());
        assert!(modules_untouched);
    }

    fn modules(rng: &mut ChaCha8Rng, count: usize) -> Vec<CourseModule> {
        (0..count)
            .map(|index| CourseModule {
                id: Uuid::from_u128(rng.random()),
                title: format!("Module {index}"),
                content: ModuleLinks::default(),
            })
            .collect()
    }

    #[rstest]
    fn chapter_attachment_is_positional(mut rng: ChaCha8Rng) {
        let base = modules(&mut rng, 4);
        let groups = generate_chapter_groups(&mut rng, 4, &ChapterTypePair::default());

        let enhanced = attach_chapter_groups(base, &groups).expect("aligned");

        for (module, group) in enhanced.iter().zip(&groups) {
            assert_eq!(module.content.chapters, group.chapter_ids().to_vec());
        }
    }

    #[rstest]
    fn chapter_attachment_rejects_misalignment(mut rng: ChaCha8Rng) {
        let base = modules(&mut rng, 4);
        let groups = generate_chapter_groups(&mut rng, 3, &ChapterTypePair::default());

        let result = attach_chapter_groups(base, &groups);
        assert_eq!(
            result,
            Err(GenerationError::ChapterAlignment {
                modules: 4,
                groups: 3,
            })
        );
    }
}
