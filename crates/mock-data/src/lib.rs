//! Deterministic mock dataset generation for static-site page builds.
//!
//! This crate fabricates a small relational dataset of authors, media items,
//! course modules, chapters, pages, and tags, then overlays random
//! cross-references between the collections. Referential integrity holds by
//! construction: every attached ID is drawn from the pool of IDs generated in
//! the same run, so everything in the output resolves.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Independent leaf generation of every collection, using fake content
//! - Per-module chapter groups with a fixed video/quiz type pair
//! - Randomly sized relation attachments with inclusive per-relation bounds
//! - Seedable generation for reproducible builds
//! - JSON export through a small CLI binary
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! use mock_data::generate_dataset_with_seed;
//!
//! let dataset = generate_dataset_with_seed(42).expect("generation succeeds");
//!
//! // Every module reference on an author resolves to a generated module.
//! let module_ids: HashSet<_> = dataset.modules.modules.iter().map(|m| m.id).collect();
//! for author in &dataset.authors.authors {
//!     assert!(!author.content.modules.is_empty());
//!     assert!(author.content.modules.iter().all(|id| module_ids.contains(id)));
//! }
//! ```

mod assembler;
mod atomic_io;
mod chapters;
mod entity;
mod enhancer;
mod error;
pub mod export_cli;
mod leaves;
mod pick;
mod validation;

pub use assembler::{
    GeneratorConfig, generate_dataset, generate_dataset_with, generate_dataset_with_seed,
};
pub use chapters::{
    CHAPTERS_PER_MODULE, ChapterGroup, ChapterTypePair, flatten_groups, generate_chapter_groups,
};
pub use entity::{
    Author, AuthorCatalog, AuthorLinks, Chapter, ChapterLinks, ChapterTypeLabel, CourseModule,
    EntityId, Media, MediaCatalog, MediaLinks, MockDataset, ModuleCatalog, ModuleLinks, Page, Tag,
};
pub use enhancer::{LinkRange, attach_chapter_groups, attach_random_links, draw_link_ids};
pub use error::{ExportError, GenerationError};
pub use leaves::{
    generate_authors, generate_medias, generate_modules, generate_pages, generate_tags,
};
pub use pick::{random_entries, random_int_between};
pub use validation::{SLUG_MAX, is_valid_slug};
