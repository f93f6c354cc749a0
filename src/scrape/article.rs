use chrono::{DateTime, Duration, Utc};
use scraper::{Html, Selector};
use serde::Serialize;

/// How much of an article survived extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeStatus {
    Scraped,
    PartiallyScraped,
}

/// One article, flattened for CSV.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRow {
    pub data_id: String,
    pub url: String,
    pub title: String,
    pub date_published: String,
    pub author: String,
    pub coins: String,
    pub content: String,
    pub source_link: String,
    pub status: ScrapeStatus,
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Pull article path ids (`data-id` attributes) off a listing page, in page
/// order.
pub fn listing_article_ids(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let items = selector("div.news-item[data-id]");
    doc.select(&items)
        .filter_map(|el| el.value().attr("data-id"))
        .map(str::to_string)
        .collect()
}

/// Parse one article page. Articles missing both a title and body are not
/// worth a row; ones missing only secondary fields are kept and tagged
/// partially scraped.
pub fn parse_article(
    html: &str,
    url: &str,
    data_id: &str,
    now: DateTime<Utc>,
) -> Option<ArticleRow> {
    let doc = Html::parse_document(html);

    let title = text_of(&doc, "h1.article-title").or_else(|| text_of(&doc, "h1.article_title"));
    let content = text_of(&doc, "div.article-content").or_else(|| text_of(&doc, "div.cn-content"));
    let author = text_of(&doc, "span.author-name");
    let source_link = attr_of(&doc, "a.source-host", "href");

    let coins: Vec<String> = {
        let sel = selector("span.coin-name");
        doc.select(&sel)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    };

    // Prefer the meta publish time; fall back to the relative "21 m ago"
    // badge next to the headline.
    let date_published = attr_of(&doc, r#"meta[property="article:published_time"]"#, "content")
        .or_else(|| {
            text_of(&doc, "span.datetime")
                .and_then(|ago| parse_time_ago(&ago))
                .map(|delta| (now - delta).to_rfc3339())
        });

    let (title, content) = match (title, content) {
        (Some(t), Some(c)) => (t, c),
        _ => return None,
    };

    let complete =
        author.is_some() && source_link.is_some() && date_published.is_some() && !coins.is_empty();

    Some(ArticleRow {
        data_id: data_id.to_string(),
        url: url.to_string(),
        title,
        date_published: date_published.unwrap_or_default(),
        author: author.unwrap_or_default(),
        coins: coins.join("; "),
        content,
        source_link: source_link.unwrap_or_default(),
        status: if complete {
            ScrapeStatus::Scraped
        } else {
            ScrapeStatus::PartiallyScraped
        },
    })
}

/// "21 m" / "3 h" / "2 d" → how long ago that was.
pub fn parse_time_ago(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    let n: i64 = digits.parse().ok()?;
    match raw[digits.len()..].trim().chars().next()? {
        'm' => Some(Duration::minutes(n)),
        'h' => Some(Duration::hours(n)),
        'd' => Some(Duration::days(n)),
        _ => None,
    }
}

fn text_of(doc: &Html, css: &'static str) -> Option<String> {
    let sel = selector(css);
    let text: String = doc.select(&sel).next()?.text().collect::<String>().trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

fn attr_of(doc: &Html, css: &'static str, attr: &str) -> Option<String> {
    let sel = selector(css);
    doc.select(&sel)
        .next()?
        .value()
        .attr(attr)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_listing_ids_in_order() {
        let html = r#"
            <div class="row news-item start-xs" data-id="/news/finance/101/"></div>
            <div class="row news-item start-xs" data-id="/news/finance/102/"></div>
            <div class="row news-item">no id</div>
        "#;
        assert_eq!(
            listing_article_ids(html),
            vec!["/news/finance/101/", "/news/finance/102/"]
        );
    }

    #[test]
    fn full_article_is_scraped() {
        let html = r#"
            <html><head>
              <meta property="article:published_time" content="2024-05-01T10:00:00Z">
            </head><body>
              <h1 class="article-title"> Bitcoin climbs </h1>
              <span class="author-name">Jo Writer</span>
              <span class="coin-name">BTC</span><span class="coin-name">ETH</span>
              <a class="source-host" href="https://example.com/a">src</a>
              <div class="article-content">Markets moved today.</div>
            </body></html>
        "#;
        let row = parse_article(html, "u", "/news/1/", Utc::now()).unwrap();
        assert_eq!(row.status, ScrapeStatus::Scraped);
        assert_eq!(row.title, "Bitcoin climbs");
        assert_eq!(row.coins, "BTC; ETH");
        assert_eq!(row.date_published, "2024-05-01T10:00:00Z");
        assert_eq!(row.source_link, "https://example.com/a");
    }

    #[test]
    fn partial_article_keeps_row_with_status() {
        let html = r#"
            <h1 class="article-title">Headline</h1>
            <div class="cn-content">Body only.</div>
        "#;
        let row = parse_article(html, "u", "/news/2/", Utc::now()).unwrap();
        assert_eq!(row.status, ScrapeStatus::PartiallyScraped);
        assert_eq!(row.author, "");
        assert_eq!(row.content, "Body only.");
    }

    #[test]
    fn article_without_title_or_body_is_skipped() {
        let html = r#"<span class="author-name">Jo</span>"#;
        assert!(parse_article(html, "u", "/news/3/", Utc::now()).is_none());
    }

    #[test]
    fn relative_times_parse() {
        assert_eq!(parse_time_ago("21 m"), Some(Duration::minutes(21)));
        assert_eq!(parse_time_ago("3h"), Some(Duration::hours(3)));
        assert_eq!(parse_time_ago(" 2 d "), Some(Duration::days(2)));
        assert_eq!(parse_time_ago("soon"), None);
    }

    #[test]
    fn relative_time_fallback_fills_publish_date() {
        let now = Utc::now();
        let html = r#"
            <h1 class="article-title">T</h1>
            <span class="datetime flex middle-xs">30 m</span>
            <div class="article-content">C</div>
        "#;
        let row = parse_article(html, "u", "/news/4/", now).unwrap();
        assert_eq!(row.date_published, (now - Duration::minutes(30)).to_rfc3339());
    }
}
