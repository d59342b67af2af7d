//! RSS and Atom sources and item normalisation.

use chrono::{DateTime, Utc};

use crate::server::{
    error::AppError,
    model::news::{NewsItem, Platform},
    util::text::{strip_html, truncate_chars},
};

const SNIPPET_CHARS: usize = 200;

/// Items kept from each keyword-specific Google News search.
pub const TARGETED_ITEMS: usize = 20;

pub struct FeedSource {
    pub name: &'static str,
    pub url: &'static str,
    pub platform: Platform,
}

const fn news(name: &'static str, url: &'static str) -> FeedSource {
    FeedSource {
        name,
        url,
        platform: Platform::News,
    }
}

const fn reddit(name: &'static str, url: &'static str) -> FeedSource {
    FeedSource {
        name,
        url,
        platform: Platform::Reddit,
    }
}

/// General feeds scanned on every dashboard load.
pub const FEEDS: [FeedSource; 18] = [
    news("Times of India", "https://timesofindia.indiatimes.com/rssfeedstopstories.cms"),
    news("NDTV", "https://feeds.feedburner.com/ndtvnews-top-stories"),
    news("India Today", "https://www.indiatoday.in/rss/home"),
    news("Hindustan Times", "https://www.hindustantimes.com/feeds/rss/india-news/rssfeed.xml"),
    news("Google News India", "https://news.google.com/rss?hl=en-IN&gl=IN&ceid=IN:en"),
    news("Economic Times Markets", "https://economictimes.indiatimes.com/markets/rssfeeds/1977021501.cms"),
    news("Economic Times Stocks", "https://economictimes.indiatimes.com/markets/stocks/rssfeeds/2146842.cms"),
    news("Moneycontrol News", "https://www.moneycontrol.com/rss/latestnews.xml"),
    news("Livemint", "https://www.livemint.com/rss/markets"),
    news("Business Standard", "https://www.business-standard.com/rss/markets-106.rss"),
    news("Economic Times Gold", "https://economictimes.indiatimes.com/commoditysummary/symbol-GOLD.cms"),
    news("Investing.com Gold", "https://www.investing.com/rss/news_301.rss"),
    news("Reuters Business", "https://feeds.reuters.com/reuters/businessNews"),
    news("BBC Business", "https://feeds.bbci.co.uk/news/business/rss.xml"),
    reddit("Reddit India", "https://www.reddit.com/r/india/.rss"),
    reddit("Reddit IndiaSocial", "https://www.reddit.com/r/indiasocial/.rss"),
    reddit("Reddit IndiaInvestments", "https://www.reddit.com/r/IndiaInvestments/.rss"),
    reddit("Reddit IndianStockMarket", "https://www.reddit.com/r/IndianStockMarket/.rss"),
];

/// Google News search feed for a keyword, without its leading `#`.
pub fn google_news_search_url(keyword: &str) -> String {
    let query = keyword.strip_prefix('#').unwrap_or(keyword);
    format!(
        "https://news.google.com/rss/search?q={}&hl=en-IN&gl=IN&ceid=IN:en",
        urlencoding::encode(query)
    )
}

/// A parsed feed. Reddit serves Atom; every other source serves RSS 2.0.
#[derive(Debug)]
pub enum FeedDocument {
    Rss(rss::Channel),
    Atom(atom_syndication::Feed),
}

/// Parses `body` as RSS, falling back to Atom.
///
/// When neither format matches, the RSS error is returned.
pub fn parse_document(body: &[u8]) -> Result<FeedDocument, AppError> {
    match rss::Channel::read_from(body) {
        Ok(channel) => Ok(FeedDocument::Rss(channel)),
        Err(rss_err) => match atom_syndication::Feed::read_from(body) {
            Ok(feed) => Ok(FeedDocument::Atom(feed)),
            Err(_) => Err(rss_err.into()),
        },
    }
}

/// Downloads and parses an RSS or Atom document.
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
) -> Result<FeedDocument, AppError> {
    let body = client
        .get(url)
        .header(
            reqwest::header::ACCEPT,
            "application/rss+xml, application/atom+xml, application/xml, text/xml, */*",
        )
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    parse_document(&body[..])
}

/// Converts a parsed document into news items attributed to `source`.
pub fn items_from_document(
    document: &FeedDocument,
    source: &str,
    platform: Platform,
    now: DateTime<Utc>,
) -> Vec<NewsItem> {
    match document {
        FeedDocument::Rss(channel) => items_from_channel(channel, source, platform, now),
        FeedDocument::Atom(feed) => items_from_atom(feed, source, platform),
    }
}

/// Snippet from the plain text of `body`, or the title when the body is empty.
fn snippet_text(body: Option<&str>, title: &str) -> String {
    let text = body.map(strip_html).unwrap_or_default();
    let snippet_source = if text.is_empty() { title } else { text.as_str() };
    truncate_chars(snippet_source, SNIPPET_CHARS).to_string()
}

/// Converts channel items into news items attributed to `source`.
///
/// Items without a parseable `pubDate` are treated as published at `now`.
pub fn items_from_channel(
    channel: &rss::Channel,
    source: &str,
    platform: Platform,
    now: DateTime<Utc>,
) -> Vec<NewsItem> {
    channel
        .items()
        .iter()
        .map(|item| {
            let title = item.title().unwrap_or_default().trim().to_string();
            let published_at = item
                .pub_date()
                .and_then(|date| DateTime::parse_from_rfc2822(date.trim()).ok())
                .map(|date| date.with_timezone(&Utc))
                .unwrap_or(now);

            let snippet = snippet_text(item.description(), &title);

            NewsItem {
                link: item.link().unwrap_or_default().trim().to_string(),
                source: source.to_string(),
                platform,
                published_at,
                snippet,
                title,
            }
        })
        .collect()
}

/// Converts Atom entries into news items attributed to `source`.
///
/// The publish time is `published`, else the mandatory `updated` stamp. The snippet
/// comes from `summary`, else the entry's HTML `content`.
pub fn items_from_atom(
    feed: &atom_syndication::Feed,
    source: &str,
    platform: Platform,
) -> Vec<NewsItem> {
    feed.entries()
        .iter()
        .map(|entry| {
            let title = entry.title().value.trim().to_string();
            let published_at = entry
                .published()
                .unwrap_or_else(|| entry.updated())
                .with_timezone(&Utc);

            let body = entry
                .summary()
                .map(|summary| summary.value.as_str())
                .filter(|summary| !summary.trim().is_empty())
                .or_else(|| entry.content().and_then(|content| content.value()));
            let snippet = snippet_text(body, &title);

            NewsItem {
                link: entry
                    .links()
                    .first()
                    .map(|link| link.href().trim().to_string())
                    .unwrap_or_default(),
                source: source.to_string(),
                platform,
                published_at,
                snippet,
                title,
            }
        })
        .collect()
}
