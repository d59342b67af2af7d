use serde::Serialize;
use utoipa::ToSchema;

use crate::model::sentiment::Sentiment;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendsDto {
    pub trending: Vec<TrendingTopicDto>,
    pub top_subreddits: Vec<InstanceActivityDto>,
    pub top_posts: Vec<TopPostDto>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopicDto {
    pub keyword: String,
    pub mentions: u32,
    pub sentiment: Sentiment,
    pub top_subreddit: String,
    pub mastodon_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstanceActivityDto {
    pub subreddit: String,
    pub count: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopPostDto {
    pub id: String,
    pub title: String,
    pub subreddit: String,
    pub upvotes: u32,
    pub comments: u32,
    pub url: String,
    pub sentiment: Sentiment,
}
