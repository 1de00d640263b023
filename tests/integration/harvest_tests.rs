use quote_harvest::config::Config;
use quote_harvest::crawler::{collect_authors, harvest, walk_pages, Fetcher, Quote};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Renders a listing page with the given (text, author, tags) quotes
fn listing_page(quotes: &[(&str, &str, &str)], next_href: Option<&str>) -> String {
    let body: String = quotes
        .iter()
        .map(|(text, author, tags)| {
            format!(
                r#"<div class="quote" itemscope>
                    <span class="text" itemprop="text">{}</span>
                    <span>by <small class="author" itemprop="author">{}</small></span>
                    <div class="tags">Tags:
                        <meta class="keywords" itemprop="keywords" content="{}" />
                    </div>
                </div>"#,
                text, author, tags
            )
        })
        .collect();

    let pager = next_href
        .map(|href| {
            format!(
                r#"<nav><ul class="pager"><li class="next"><a href="{}">Next <span aria-hidden="true">&rarr;</span></a></li></ul></nav>"#,
                href
            )
        })
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html><html><head><title>Quotes</title></head><body><div class=\"container\">{}{}</div></body></html>",
        body, pager
    )
}

fn author_page(name: &str, born_date: &str, born_location: &str, description: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><div class="container"><div class="author-details">
            <h3 class="author-title">{}
            </h3>
            <p><strong>Born:</strong> <span class="author-born-date">{}</span>
            <span class="author-born-location">{}</span></p>
            <strong>Description:</strong>
            <div class="author-description">
                {}
            </div>
        </div></div></body></html>"#,
        name, born_date, born_location, description
    )
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, page_path: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(body))
        .expect(times)
        .mount(server)
        .await;
}

fn test_config(origin: &str, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.site.origin = origin.to_string();
    config.output.quotes_path = dir.path().join("quotes.csv").display().to_string();
    config.output.authors_path = dir.path().join("authors.csv").display().to_string();
    config
}

fn read_rows(file: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(Path::new(file)).expect("Failed to open CSV");
    let header = reader
        .headers()
        .expect("Failed to read header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.expect("Bad CSV row").iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

fn fetcher() -> Fetcher {
    Fetcher::with_default_client().expect("Failed to build client")
}

#[tokio::test]
async fn test_three_page_site_end_to_end() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(
            &[
                ("one", "Jane Austen", "love,life"),
                ("two", "Mark Twain", ""),
            ],
            Some("/page/2/"),
        ),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(
            &[
                ("three", "Jane Austen", "books"),
                ("four", "Albert Einstein", "science"),
            ],
            Some("/page/3/"),
        ),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/3/",
        listing_page(&[("five", "Mark Twain", "humor,travel")], None),
        1,
    )
    .await;

    mount_page(
        &mock_server,
        "/author/Jane-Austen/",
        author_page("Jane Austen", "December 16, 1775", "in Steventon Rectory, Hampshire, The United Kingdom", "English novelist."),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/author/Mark-Twain/",
        author_page("Mark Twain", "November 30, 1835", "in Florida, Missouri, The United States", "American writer."),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/author/Albert-Einstein/",
        author_page("Albert Einstein", "March 14, 1879", "in Ulm, Germany", "Physicist."),
        1,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&mock_server.uri(), &dir);

    let stats = harvest(&config).await.expect("Harvest failed");
    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.quotes, 5);
    assert_eq!(stats.authors, 3);
    assert_eq!(stats.bio_fetches, 3);
    assert_eq!(stats.total_failures(), 0);

    let (header, rows) = read_rows(&config.output.quotes_path);
    assert_eq!(header, vec!["text", "author", "tags"]);
    let texts: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three", "four", "five"]);
    assert_eq!(rows[0][2], "love;life");
    assert_eq!(rows[1][2], "");
    assert_eq!(rows[4][2], "humor;travel");

    let (header, rows) = read_rows(&config.output.authors_path);
    assert_eq!(header, vec!["name", "born_date", "born_location", "description"]);
    assert_eq!(
        rows,
        vec![
            vec!["Jane Austen", "December 16, 1775", "Steventon Rectory, Hampshire, The United Kingdom", "English novelist."],
            vec!["Mark Twain", "November 30, 1835", "Florida, Missouri, The United States", "American writer."],
            vec!["Albert Einstein", "March 14, 1879", "Ulm, Germany", "Physicist."],
        ]
    );

    // Wiremock verifies the expect(1) counts when mock_server drops
}

#[tokio::test]
async fn test_duplicate_authors_fetch_one_bio_each() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/author/Jane-Austen/",
        author_page("Jane Austen", "d1", "in A", "x"),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/author/Mark-Twain/",
        author_page("Mark Twain", "d2", "in B", "y"),
        1,
    )
    .await;

    let quotes: Vec<Quote> = ["Jane Austen", "Jane Austen", "Mark Twain"]
        .iter()
        .enumerate()
        .map(|(i, author)| Quote {
            text: format!("q{}", i),
            author: author.to_string(),
            tags: vec![],
        })
        .collect();

    let pass = collect_authors(&fetcher(), &mock_server.uri(), &quotes).await;

    assert_eq!(pass.fetches, 2);
    assert_eq!(pass.failures, 0);
    assert!(pass.authors.iter().all(|a| !a.is_placeholder()));
    let names: Vec<&str> = pass.authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Austen", "Mark Twain"]);
}

#[tokio::test]
async fn test_second_page_failure_keeps_first_page_quotes() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("first", "Jane Austen", "a"), ("second", "Jane Austen", "b")], Some("/page/2/")),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    // Never reached: the dead page has no next link to follow
    mount_page(&mock_server, "/page/3/", listing_page(&[], None), 0).await;
    mount_page(
        &mock_server,
        "/author/Jane-Austen/",
        author_page("Jane Austen", "d", "in X", "y"),
        1,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&mock_server.uri(), &dir);

    let stats = harvest(&config).await.expect("Harvest failed");
    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.listing_failures, 1);

    let (_, rows) = read_rows(&config.output.quotes_path);
    let texts: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);

    let (_, rows) = read_rows(&config.output.authors_path);
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_failed_bios_write_empty_rows() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("a", "Jane Austen", ""), ("b", "Nobody Known", "")], None),
        1,
    )
    .await;
    // Bio page that is reachable but has no details block
    mount_page(
        &mock_server,
        "/author/Jane-Austen/",
        "<html><body><p>Moved</p></body></html>".to_string(),
        1,
    )
    .await;
    // /author/Nobody-Known/ is not mounted: wiremock answers 404

    let dir = TempDir::new().unwrap();
    let config = test_config(&mock_server.uri(), &dir);

    let stats = harvest(&config).await.expect("Harvest must not abort on bio failures");
    assert_eq!(stats.bio_fetches, 2);
    assert_eq!(stats.bio_failures, 2);

    let (_, rows) = read_rows(&config.output.authors_path);
    assert_eq!(rows, vec![vec!["", "", "", ""], vec!["", "", "", ""]]);
}

#[tokio::test]
async fn test_unreachable_origin_still_writes_both_files() {
    let dir = TempDir::new().unwrap();
    let config = test_config("http://127.0.0.1:9", &dir);

    let stats = harvest(&config).await.expect("Harvest must not abort");
    assert_eq!(stats.pages_fetched, 1);
    assert_eq!(stats.quotes, 0);
    assert_eq!(stats.authors, 0);

    let (header, rows) = read_rows(&config.output.quotes_path);
    assert_eq!(header, vec!["text", "author", "tags"]);
    assert!(rows.is_empty());

    let (header, rows) = read_rows(&config.output.authors_path);
    assert_eq!(header.len(), 4);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_malformed_listing_page_still_follows_next_link() {
    let mock_server = MockServer::start().await;

    let broken = r#"<html><body>
        <div class="quote"><span class="text">no author here</span></div>
        <ul class="pager"><li class="next"><a href="/page/2/">Next</a></li></ul>
        </body></html>"#;
    mount_page(&mock_server, "/", broken.to_string(), 1).await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(&[("kept", "Mark Twain", "x")], None),
        1,
    )
    .await;

    let walk = walk_pages(&fetcher(), &mock_server.uri(), None).await;

    assert_eq!(walk.pages_fetched, 2);
    assert_eq!(walk.failures, 1);
    assert_eq!(walk.quotes.len(), 1);
    assert_eq!(walk.quotes[0].text, "kept");
}

#[tokio::test]
async fn test_next_link_back_to_origin_stops() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("a", "A", "")], Some("/page/2/")),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(&[("b", "B", "")], Some("/")),
        1,
    )
    .await;

    // Origin has no trailing slash; the link back resolves to "{uri}/"
    let walk = walk_pages(&fetcher(), &mock_server.uri(), None).await;

    assert_eq!(walk.pages_fetched, 2);
    assert_eq!(walk.failures, 0);
    let texts: Vec<&str> = walk.quotes.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[tokio::test]
async fn test_next_link_back_to_earlier_page_stops() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("a", "A", "")], Some("/page/2/")),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(&[("b", "B", "")], Some("/page/3/")),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/3/",
        listing_page(&[("c", "C", "")], Some("/page/2/")),
        1,
    )
    .await;

    let walk = walk_pages(&fetcher(), &mock_server.uri(), None).await;

    assert_eq!(walk.pages_fetched, 3);
    let texts: Vec<&str> = walk.quotes.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_max_pages_limit() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("a", "A", "")], Some("/page/2/")),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(&[("b", "B", "")], Some("/page/3/")),
        1,
    )
    .await;
    mount_page(&mock_server, "/page/3/", listing_page(&[], None), 0).await;

    let walk = walk_pages(&fetcher(), &mock_server.uri(), Some(2)).await;

    assert_eq!(walk.pages_fetched, 2);
    let texts: Vec<&str> = walk.quotes.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[tokio::test]
async fn test_skip_authors_writes_header_only() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("a", "Jane Austen", "x")], None),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/author/.*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = test_config(&mock_server.uri(), &dir);
    config.crawler.skip_authors = true;

    let stats = harvest(&config).await.expect("Harvest failed");
    assert_eq!(stats.quotes, 1);
    assert_eq!(stats.bio_fetches, 0);

    assert_eq!(
        std::fs::read_to_string(&config.output.authors_path).unwrap(),
        "name,born_date,born_location,description\n"
    );
}

#[tokio::test]
async fn test_trailing_slash_origin() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        listing_page(&[("a", "A", "")], Some("/page/2/")),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(&[("b", "B", "")], None),
        1,
    )
    .await;

    let origin = format!("{}/", mock_server.uri());
    let walk = walk_pages(&fetcher(), &origin, None).await;

    assert_eq!(walk.pages_fetched, 2);
    assert_eq!(walk.failures, 0);
}
