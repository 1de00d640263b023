//! Author deduplication and bio fetching

use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::{join_origin, parse_author};
use crate::crawler::records::{Author, Quote};
use std::collections::HashSet;

/// Authors collected from a quote list
#[derive(Debug, Clone, Default)]
pub struct AuthorPass {
    /// One record per distinct display name, first-seen order
    pub authors: Vec<Author>,

    /// Bio pages requested
    pub fetches: usize,

    /// Bios replaced by the empty placeholder
    pub failures: usize,
}

/// Derives the site's URL slug from an author display name
///
/// Whitespace-separated tokens are kept when entirely alphabetic; any other
/// token loses its last character. Tokens are joined with `-`. This matches
/// the site for names like `"Jane Austen"` and `"J.K. Rowling"` only by
/// accident of their punctuation, and `"O'Brien"` becomes `"O'Brie"`.
pub fn author_slug(name: &str) -> String {
    name.split_whitespace()
        .map(|token| {
            if token.chars().all(char::is_alphabetic) {
                token
            } else {
                let end = token.char_indices().last().map_or(0, |(i, _)| i);
                &token[..end]
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// URL of an author's bio page
pub fn author_url(origin: &str, name: &str) -> String {
    join_origin(origin, &format!("/author/{}/", author_slug(name)))
}

/// Fetches one bio per distinct author name
///
/// Names are compared as exact strings. A failed fetch or parse stores
/// `Author::default()` for that name and is never retried.
pub async fn collect_authors(fetcher: &Fetcher, origin: &str, quotes: &[Quote]) -> AuthorPass {
    let mut pass = AuthorPass::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for quote in quotes {
        if seen.contains(quote.author.as_str()) {
            continue;
        }

        let url = author_url(origin, &quote.author);
        tracing::debug!("Fetching bio for {}: {}", quote.author, url);
        pass.fetches += 1;

        let result = match fetcher.fetch(&url).await {
            Ok(body) => parse_author(&body).map_err(|e| e.at(&url)),
            Err(e) => Err(e),
        };

        let author = result.unwrap_or_else(|e| {
            tracing::warn!("{}; writing empty record for {}", e, quote.author);
            pass.failures += 1;
            Author::default()
        });

        seen.insert(quote.author.as_str());
        pass.authors.push(author);
    }

    tracing::info!(
        "Author pass finished: {} distinct authors, {} bio failures",
        pass.authors.len(),
        pass.failures
    );

    pass
}
