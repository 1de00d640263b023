//! HTML parser for quote listings and author bios
//!
//! Everything here is pure: markup in, records out. A missing required
//! element or attribute is reported as [`ScrapeError::MalformedPage`] without
//! a URL; callers attach one with [`ScrapeError::at`].

use crate::crawler::records::{Author, Quote};
use crate::{ScrapeError, ScrapeResult};
use scraper::{ElementRef, Html, Selector};

/// Number of leading characters removed from the born-location field
///
/// The site renders locations as `"in Ulm, Germany"`. The trim is a fixed
/// offset, so a location without that prefix loses real characters.
pub const BORN_LOCATION_PREFIX_LEN: usize = 3;

/// Quotes and next link extracted from one listing page
#[derive(Debug)]
pub struct ListingPage {
    pub quotes: ScrapeResult<Vec<Quote>>,
    pub next: ScrapeResult<Option<String>>,
}

impl ListingPage {
    /// Parses a listing page once and extracts both results
    ///
    /// The two results fail independently: a page with a broken quote still
    /// yields its next link.
    pub fn parse(html: &str, origin: &str) -> Self {
        let document = Html::parse_document(html);
        Self {
            quotes: quotes_in(&document),
            next: next_link_in(&document, origin),
        }
    }
}

/// Parses every quote on a listing page, in document order
///
/// # Example
///
/// ```
/// use quote_harvest::crawler::parse_quotes;
///
/// let html = r#"<div class="quote">
///     <span class="text">“Hello.”</span>
///     <small class="author">Someone</small>
///     <meta class="keywords" content="greeting">
/// </div>"#;
/// let quotes = parse_quotes(html).unwrap();
/// assert_eq!(quotes[0].tags, vec!["greeting".to_string()]);
/// ```
pub fn parse_quotes(html: &str) -> ScrapeResult<Vec<Quote>> {
    quotes_in(&Html::parse_document(html))
}

/// Parses a single quote fragment
pub fn parse_quote(fragment: &str) -> ScrapeResult<Quote> {
    let document = Html::parse_fragment(fragment);
    quote_from_element(document.root_element())
}

/// Parses the details block of an author bio page
pub fn parse_author(html: &str) -> ScrapeResult<Author> {
    let document = Html::parse_document(html);
    let details_selector = selector(".author-details")?;
    let details = document
        .select(&details_selector)
        .next()
        .ok_or_else(|| ScrapeError::malformed("missing .author-details block"))?;

    let born_location: String = required_text(&details, ".author-born-location")?
        .chars()
        .skip(BORN_LOCATION_PREFIX_LEN)
        .collect();

    Ok(Author {
        name: required_text(&details, ".author-title")?.trim().to_string(),
        born_date: required_text(&details, ".author-born-date")?,
        born_location,
        description: required_text(&details, ".author-description")?
            .trim()
            .to_string(),
    })
}

/// Finds the next listing page, if the page links to one
///
/// # Returns
///
/// * `Ok(None)` - No `li.next a` anchor on the page
/// * `Ok(Some(url))` - `origin` and the anchor's `href` joined by exactly one slash
/// * `Err(ScrapeError)` - The anchor exists but has no `href`
pub fn find_next_link(html: &str, origin: &str) -> ScrapeResult<Option<String>> {
    next_link_in(&Html::parse_document(html), origin)
}

/// Joins a site-relative path onto the origin with a single slash at the seam
pub fn join_origin(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn quotes_in(document: &Html) -> ScrapeResult<Vec<Quote>> {
    let quote_selector = selector(".quote")?;
    document
        .select(&quote_selector)
        .map(quote_from_element)
        .collect()
}

fn next_link_in(document: &Html, origin: &str) -> ScrapeResult<Option<String>> {
    let next_selector = selector("li.next a")?;
    let Some(anchor) = document.select(&next_selector).next() else {
        return Ok(None);
    };

    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| ScrapeError::malformed("next-page anchor has no href"))?;

    Ok(Some(join_origin(origin, href)))
}

fn quote_from_element(element: ElementRef) -> ScrapeResult<Quote> {
    let keywords_selector = selector(".keywords")?;
    let keywords = element
        .select(&keywords_selector)
        .next()
        .ok_or_else(|| ScrapeError::malformed("quote has no .keywords element"))?;
    let content = keywords
        .value()
        .attr("content")
        .ok_or_else(|| ScrapeError::malformed("quote .keywords has no content attribute"))?;

    Ok(Quote {
        text: required_text(&element, ".text")?,
        author: required_text(&element, ".author")?,
        tags: split_tags(content),
    })
}

/// Splits a comma-separated tag attribute; empty input gives no tags
fn split_tags(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    content.split(',').map(str::to_string).collect()
}

fn required_text(element: &ElementRef, css: &str) -> ScrapeResult<String> {
    let sel = selector(css)?;
    element
        .select(&sel)
        .next()
        .map(|found| found.text().collect::<String>())
        .ok_or_else(|| ScrapeError::malformed(format!("missing {}", css)))
}

fn selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::malformed(format!("invalid selector {}: {:?}", css, e)))
}
