//! Pagination walker
//!
//! Follows the "next" link from the origin until a page has none, collecting
//! quotes in page-then-in-page order. Every failure degrades to a default and
//! is logged; nothing here aborts the run.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::ListingPage;
use crate::crawler::records::Quote;
use std::collections::HashSet;
use url::Url;

/// Walker state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkState {
    /// About to request this listing page
    Fetching(String),

    /// Markup received, quotes and next link not yet extracted
    Parsing { url: String, body: String },

    /// The page just parsed links to this one
    HasNext(String),

    /// No further pages
    Done,
}

/// Result of walking every listing page
#[derive(Debug, Clone, Default)]
pub struct Walk {
    /// All quotes, page order then document order
    pub quotes: Vec<Quote>,

    /// Listing pages requested, successful or not
    pub pages_fetched: usize,

    /// Fetch and parse failures that were replaced by defaults
    pub failures: usize,
}

/// Walks listing pages starting at `origin`
///
/// `max_pages` bounds the number of listing fetches. A next link pointing at
/// an already-visited page also ends the walk.
pub async fn walk_pages(fetcher: &Fetcher, origin: &str, max_pages: Option<u32>) -> Walk {
    let mut walk = Walk::default();
    let mut visited: HashSet<String> = HashSet::new();
    let mut state = WalkState::Fetching(origin.to_string());

    loop {
        state = match state {
            WalkState::Fetching(url) => {
                visited.insert(visit_key(&url));
                walk.pages_fetched += 1;
                tracing::debug!("Fetching listing page {}: {}", walk.pages_fetched, url);

                match fetcher.fetch(&url).await {
                    Ok(body) => WalkState::Parsing { url, body },
                    Err(e) => {
                        tracing::warn!("{}; stopping pagination", e);
                        walk.failures += 1;
                        WalkState::Done
                    }
                }
            }

            WalkState::Parsing { url, body } => {
                let page = ListingPage::parse(&body, origin);

                match page.quotes {
                    Ok(quotes) => {
                        tracing::debug!("{} quotes on {}", quotes.len(), url);
                        walk.quotes.extend(quotes);
                    }
                    Err(e) => {
                        tracing::warn!("{}; page contributes no quotes", e.at(&url));
                        walk.failures += 1;
                    }
                }

                match page.next {
                    Ok(Some(next)) => WalkState::HasNext(next),
                    Ok(None) => WalkState::Done,
                    Err(e) => {
                        tracing::warn!("{}; treating as last page", e.at(&url));
                        walk.failures += 1;
                        WalkState::Done
                    }
                }
            }

            WalkState::HasNext(next) => {
                if visited.contains(&visit_key(&next)) {
                    tracing::warn!("Next link {} was already visited; stopping pagination", next);
                    WalkState::Done
                } else if max_pages.is_some_and(|max| walk.pages_fetched >= max as usize) {
                    tracing::warn!(
                        "Reached max_pages limit ({}); not following {}",
                        walk.pages_fetched,
                        next
                    );
                    WalkState::Done
                } else {
                    WalkState::Fetching(next)
                }
            }

            WalkState::Done => break,
        };
    }

    tracing::info!(
        "Pagination finished: {} quotes from {} pages",
        walk.quotes.len(),
        walk.pages_fetched
    );

    walk
}

/// Key for the visited set; `http://host` and `http://host/` are the same page
fn visit_key(url: &str) -> String {
    Url::parse(url)
        .map(|parsed| parsed.to_string())
        .unwrap_or_else(|_| url.to_string())
}
