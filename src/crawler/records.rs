//! Records extracted from the site

/// One quote from a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Quote text exactly as rendered, curly quotes included
    pub text: String,

    /// Author display name; also the deduplication key for bio fetches
    pub author: String,

    /// Tags in page order, empty when the quote has none
    pub tags: Vec<String>,
}

/// One author bio
///
/// A failed bio fetch is recorded as `Author::default()`, every field empty.
/// Nothing marks such a record as degraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub born_date: String,
    pub born_location: String,
    pub description: String,
}

impl Author {
    /// True for the placeholder stored when a bio could not be fetched or parsed
    pub fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }
}
