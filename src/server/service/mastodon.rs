//! Minimal Mastodon REST client.

use serde::Deserialize;

use crate::server::error::AppError;

/// Hashtags requested from the trends endpoint.
const TRENDING_TAG_LIMIT: u32 = 20;

#[derive(Deserialize)]
struct TagResponse {
    name: String,
}

pub struct MastodonClient<'a> {
    http_client: &'a reqwest::Client,
    instance: &'a str,
}

impl<'a> MastodonClient<'a> {
    /// `instance` is a base URL such as `https://mastodon.social`, without trailing slash.
    pub fn new(http_client: &'a reqwest::Client, instance: &'a str) -> Self {
        Self {
            http_client,
            instance,
        }
    }

    /// Names of the hashtags currently trending on the instance.
    pub async fn trending_tags(&self) -> Result<Vec<String>, AppError> {
        let tags: Vec<TagResponse> = self
            .http_client
            .get(format!("{}/api/v1/trends/tags", self.instance))
            .query(&[("limit", TRENDING_TAG_LIMIT)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(tags
            .into_iter()
            .map(|tag| tag.name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect())
    }

    /// Public tag page for `keyword` on the instance.
    pub fn tag_url(&self, keyword: &str) -> String {
        format!("{}/tags/{}", self.instance, tag_slug(keyword))
    }
}

/// Lowercase ASCII letters and digits only, e.g. `Climate Action!` becomes `climateaction`.
pub fn tag_slug(keyword: &str) -> String {
    keyword
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
