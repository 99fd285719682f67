//! Chapter group generation.
//!
//! Every module owns exactly one chapter group: a fixed pair of chapters,
//! one per label in the chapter type pair. Group `i` belongs to module `i`
//! in generation order; that positional coupling is what the chapter
//! enhancer consumes downstream.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{Chapter, ChapterLinks, ChapterTypeLabel, EntityId};

/// Number of chapters in every group.
pub const CHAPTERS_PER_MODULE: usize = 2;

/// The fixed pair of chapter type labels, in group order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterTypePair {
    labels: [ChapterTypeLabel; CHAPTERS_PER_MODULE],
}

impl ChapterTypePair {
    /// Builds a pair from two labels, preserving order.
    #[must_use]
    pub const fn new(first: ChapterTypeLabel, second: ChapterTypeLabel) -> Self {
        Self {
            labels: [first, second],
        }
    }

    /// Returns the labels in group order.
    #[must_use]
    pub const fn labels(&self) -> &[ChapterTypeLabel; CHAPTERS_PER_MODULE] {
        &self.labels
    }
}

impl Default for ChapterTypePair {
    /// The pair used by the site build: a video chapter then a quiz chapter.
    fn default() -> Self {
        Self::new(
            ChapterTypeLabel::new("video"),
            ChapterTypeLabel::new("quiz"),
        )
    }
}

/// An ordered pair of chapters positionally bound to one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterGroup {
    chapters: [Chapter; CHAPTERS_PER_MODULE],
}

impl ChapterGroup {
    fn generate(rng: &mut ChaCha8Rng, types: &ChapterTypePair) -> Self {
        let chapters = types.labels().clone().map(|label| Chapter {
            id: Uuid::from_u128(rng.random()),
            type_label: label,
            content: ChapterLinks::default(),
        });
        Self { chapters }
    }

    /// Returns the group's chapters in chapter-type order.
    #[must_use]
    pub const fn chapters(&self) -> &[Chapter; CHAPTERS_PER_MODULE] {
        &self.chapters
    }

    /// Returns the group's chapter IDs in chapter-type order.
    #[must_use]
    pub fn chapter_ids(&self) -> [EntityId; CHAPTERS_PER_MODULE] {
        self.chapters.each_ref().map(|chapter| chapter.id)
    }
}

/// Generates one chapter group per module.
///
/// Counts and structure are deterministic; only the chapter IDs come from the
/// RNG. Group `i` in the result belongs to module `i` in generation order.
#[must_use]
pub fn generate_chapter_groups(
    rng: &mut ChaCha8Rng,
    module_count: usize,
    types: &ChapterTypePair,
) -> Vec<ChapterGroup> {
    (0..module_count)
        .map(|_| ChapterGroup::generate(rng, types))
        .collect()
}

/// Flattens chapter groups into a single collection, group-major.
///
/// Group 0's chapters come first, then group 1's, and so on. Chapter-level
/// enhancement iterates this flat order.
#[must_use]
pub fn flatten_groups(groups: &[ChapterGroup]) -> Vec<Chapter> {
    groups
        .iter()
        .flat_map(|group| group.chapters().iter().cloned())
        .collect()
}
