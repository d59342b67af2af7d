//! Trending topic models.

use crate::model::{
    sentiment::Sentiment,
    trends::{InstanceActivityDto, TopPostDto, TrendingTopicDto, TrendsDto},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingTopic {
    pub keyword: String,
    pub mentions: u32,
    pub sentiment: Sentiment,
    pub top_instance: String,
    /// Tag page on the configured Mastodon instance.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceActivity {
    pub instance: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopPost {
    pub id: String,
    pub text: String,
    pub instance: String,
    pub boosts: u32,
    pub replies: u32,
    pub url: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendsReport {
    pub trending: Vec<TrendingTopic>,
    pub instances: Vec<InstanceActivity>,
    pub top_posts: Vec<TopPost>,
}

impl TrendsReport {
    pub fn into_dto(self) -> TrendsDto {
        TrendsDto {
            trending: self
                .trending
                .into_iter()
                .map(|topic| TrendingTopicDto {
                    keyword: topic.keyword,
                    mentions: topic.mentions,
                    sentiment: topic.sentiment,
                    top_subreddit: topic.top_instance,
                    mastodon_url: topic.url,
                })
                .collect(),
            top_subreddits: self
                .instances
                .into_iter()
                .map(|activity| InstanceActivityDto {
                    subreddit: activity.instance,
                    count: activity.count,
                })
                .collect(),
            top_posts: self
                .top_posts
                .into_iter()
                .map(|post| TopPostDto {
                    id: post.id,
                    title: post.text,
                    subreddit: post.instance,
                    upvotes: post.boosts,
                    comments: post.replies,
                    url: post.url,
                    sentiment: post.sentiment,
                })
                .collect(),
        }
    }
}
