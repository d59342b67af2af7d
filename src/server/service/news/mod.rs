//! Live news coverage for tracked keywords.
//!
//! General RSS feeds and one Google News search per keyword are fetched concurrently,
//! merged by link and handed to [`digest::build`].

pub mod digest;
pub mod feed;
pub mod sentiment;

use chrono::Utc;
use futures::future::join_all;

use crate::server::model::news::{NewsDigest, NewsItem, Platform};

use self::feed::{FeedSource, FEEDS, TARGETED_ITEMS};

pub struct NewsService<'a> {
    feed_client: &'a reqwest::Client,
}

impl<'a> NewsService<'a> {
    pub fn new(feed_client: &'a reqwest::Client) -> Self {
        Self { feed_client }
    }

    /// Builds the dashboard news digest for `keywords`.
    ///
    /// Feeds that fail to load are skipped. With no keywords nothing is fetched.
    pub async fn digest(&self, keywords: &[String]) -> NewsDigest {
        let now = Utc::now();

        if keywords.is_empty() {
            return digest::build(keywords, &[], now);
        }

        let (general, targeted) = futures::join!(self.general_items(), self.targeted_items(keywords));

        let items = digest::merge(general, targeted);
        tracing::debug!(
            "Collected {} news items for {} keywords",
            items.len(),
            keywords.len()
        );

        digest::build(keywords, &items, now)
    }

    /// Items from every general feed, newest first.
    async fn general_items(&self) -> Vec<NewsItem> {
        let results = join_all(FEEDS.iter().map(|source| self.fetch_source(source))).await;

        let mut items: Vec<NewsItem> = results.into_iter().flatten().collect();
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        items
    }

    async fn fetch_source(&self, source: &FeedSource) -> Vec<NewsItem> {
        match feed::fetch_document(self.feed_client, source.url).await {
            Ok(document) => {
                feed::items_from_document(&document, source.name, source.platform, Utc::now())
            }
            Err(e) => {
                tracing::debug!("Skipping feed {}: {}", source.name, e);
                Vec::new()
            }
        }
    }

    /// Up to twenty Google News results per keyword.
    async fn targeted_items(&self, keywords: &[String]) -> Vec<NewsItem> {
        let searches = keywords.iter().map(|keyword| async move {
            let url = feed::google_news_search_url(keyword);

            match feed::fetch_document(self.feed_client, &url).await {
                Ok(document) => {
                    let mut items = feed::items_from_document(
                        &document,
                        "Google News",
                        Platform::News,
                        Utc::now(),
                    );
                    items.truncate(TARGETED_ITEMS);
                    items
                }
                Err(e) => {
                    tracing::warn!("Google News search for \"{}\" failed: {}", keyword, e);
                    Vec::new()
                }
            }
        });

        join_all(searches).await.into_iter().flatten().collect()
    }
}
