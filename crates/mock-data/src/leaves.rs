//! Leaf collection generators.
//!
//! Each generator independently produces one named collection of records with
//! fresh unique IDs and empty link structs. Nothing here cross-references
//! anything; relations are attached later by the assembler. All fake content
//! is drawn from the injected RNG so leaf generation stays reproducible.

use fake::Fake;
use fake::faker::company::raw::CatchPhrase;
use fake::faker::lorem::raw::{Sentence, Word, Words};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::entity::{
    Author, AuthorCatalog, AuthorLinks, CourseModule, Media, MediaCatalog,
    MediaLinks, ModuleCatalog, ModuleLinks, Page, Tag,
};
use crate::validation::sanitize_slug;

fn fresh_id(rng: &mut ChaCha8Rng) -> Uuid {
    Uuid::from_u128(rng.random())
}

fn title(rng: &mut ChaCha8Rng) -> String {
    let words: Vec<String> = Words(EN, 2..5).fake_with_rng(rng);
    words.join(" ")
}

/// Generates the author catalog.
#[must_use]
pub fn generate_authors(rng: &mut ChaCha8Rng, count: usize) -> AuthorCatalog {
    let headline: String = CatchPhrase(EN).fake_with_rng(rng);
    let authors = (0..count)
        .map(|_| {
            let first: String = FirstName(EN).fake_with_rng(rng);
            let last: String = LastName(EN).fake_with_rng(rng);
            Author {
                id: fresh_id(rng),
                name: format!("{first} {last}"),
                bio: Sentence(EN, 4..10).fake_with_rng(rng),
                content: AuthorLinks::default(),
            }
        })
        .collect();
    AuthorCatalog { headline, authors }
}

/// Generates the media catalog.
#[must_use]
pub fn generate_medias(rng: &mut ChaCha8Rng, count: usize) -> MediaCatalog {
    let headline: String = CatchPhrase(EN).fake_with_rng(rng);
    let medias = (0..count)
        .map(|_| {
            let id = fresh_id(rng);
            Media {
                id,
                title: title(rng),
                url: format!("https://media.example/{}", id.simple()),
                content: MediaLinks::default(),
            }
        })
        .collect();
    MediaCatalog { headline, medias }
}

/// Generates the module catalog.
#[must_use]
pub fn generate_modules(rng: &mut ChaCha8Rng, count: usize) -> ModuleCatalog {
    let headline: String = CatchPhrase(EN).fake_with_rng(rng);
    let modules = (0..count)
        .map(|_| CourseModule {
            id: fresh_id(rng),
            title: title(rng),
            content: ModuleLinks::default(),
        })
        .collect();
    ModuleCatalog { headline, modules }
}

/// Generates the static page collection.
///
/// Slugs are sanitised from the generated titles and always satisfy
/// [`crate::is_valid_slug`].
#[must_use]
pub fn generate_pages(rng: &mut ChaCha8Rng, count: usize) -> Vec<Page> {
    (0..count)
        .map(|_| {
            let page_title = title(rng);
            let slug = sanitize_slug(&page_title);
            Page {
                id: fresh_id(rng),
                title: page_title,
                slug,
            }
        })
        .collect()
}

/// Generates the tag collection.
#[must_use]
pub fn generate_tags(rng: &mut ChaCha8Rng, count: usize) -> Vec<Tag> {
    (0..count)
        .map(|_| Tag {
            id: fresh_id(rng),
            label: Word(EN).fake_with_rng(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::validation::is_valid_slug;

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[rstest]
    fn authors_have_requested_count_and_unique_ids(mut rng: ChaCha8Rng) {
        let catalog = generate_authors(&mut rng, 20);
        assert_eq!(catalog.authors.len(), 20);
        let ids: HashSet<_> = catalog.authors.iter().map(|author| author.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[rstest]
    fn authors_start_without_relations(mut rng: ChaCha8Rng) {
        let catalog = generate_authors(&mut rng, 5);
        let unlinked = catalog
            .authors
            .iter()
            .all(|author| author.content == AuthorLinks::default());
        assert!(unlinked);
    }

    #[rstest]
    fn medias_carry_their_own_id_in_the_url(mut rng: ChaCha8Rng) {
        let catalog = generate_medias(&mut rng, 10);
        for media in &catalog.medias {
            assert!(media.url.contains(&media.id.simple().to_string()));
        }
    }

    #[rstest]
    fn modules_have_unique_ids(mut rng: ChaCha8Rng) {
        let catalog = generate_modules(&mut rng, 10);
        let ids: HashSet<_> = catalog.modules.iter().map(|module| module.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[rstest]
    fn page_slugs_are_valid(mut rng: ChaCha8Rng) {
        let pages = generate_pages(&mut rng, 25);
        for page in &pages {
            assert!(
                is_valid_slug(&page.slug),
                "invalid slug '{}' from title '{}'",
                page.slug,
                page.title
            );
        }
    }

    #[rstest]
    fn tags_have_nonempty_labels(mut rng: ChaCha8Rng) {
        let tags = generate_tags(&mut rng, 20);
        assert_eq!(tags.len(), 20);
        assert!(tags.iter().all(|tag| !tag.label.is_empty()));
    }

    #[rstest]
    fn catalogs_carry_headline_metadata(mut rng: ChaCha8Rng) {
        let catalog = generate_modules(&mut rng, 3);
        assert!(!catalog.headline.is_empty());
    }

    #[rstest]
    fn zero_counts_yield_empty_collections(mut rng: ChaCha8Rng) {
        assert!(generate_authors(&mut rng, 0).authors.is_empty());
        assert!(generate_pages(&mut rng, 0).is_empty());
        assert!(generate_tags(&mut rng, 0).is_empty());
    }

    #[rstest]
    fn same_seed_produces_identical_leaves(mut rng: ChaCha8Rng) {
        let mut other = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(generate_medias(&mut rng, 10), generate_medias(&mut other, 10));
    }
}
