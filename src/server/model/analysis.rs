//! AI topic analysis models.

use crate::model::{
    analysis::{AnalysisDto, AnalysisUsageDto, ExamplePostDto, SentimentAnalysisDto},
    sentiment::Sentiment,
};
use crate::server::model::{news::SentimentBreakdown, user::User};

/// How fast a conversation is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscussionTrend {
    Rising,
    Stable,
    Cooling,
}

impl DiscussionTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Cooling => "cooling",
        }
    }

    /// Unknown labels read as `Stable`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "rising" => Self::Rising,
            "cooling" => Self::Cooling,
            _ => Self::Stable,
        }
    }
}

/// Example post backing an analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamplePost {
    pub username: String,
    /// Mastodon instance, e.g. `mastodon.social`.
    pub instance: String,
    pub text: String,
    pub sentiment: Sentiment,
}

impl ExamplePost {
    pub fn into_dto(self) -> ExamplePostDto {
        ExamplePostDto {
            username: self.username,
            subreddit: self.instance,
            text: self.text,
            sentiment: self.sentiment,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicAnalysis {
    pub overall: Sentiment,
    pub breakdown: SentimentBreakdown,
    pub summary: String,
    pub topics: Vec<String>,
    pub volume: u32,
    pub trend: DiscussionTrend,
    pub examples: Vec<ExamplePost>,
}

impl TopicAnalysis {
    /// Instance of the first example, used as the "top community" of a search.
    pub fn top_instance(&self) -> &str {
        self.examples
            .first()
            .map(|example| example.instance.as_str())
            .filter(|instance| !instance.is_empty())
            .unwrap_or("mastodon.social")
    }

    /// Converts to the response body, attaching the caller's usage after consumption.
    pub fn into_dto(self, user: &User) -> AnalysisDto {
        AnalysisDto {
            sentiment: SentimentAnalysisDto {
                overall: self.overall,
                breakdown: self.breakdown.into_dto(),
                summary: self.summary.clone(),
                topics: self.topics.clone(),
            },
            summary: self.summary,
            topics: self.topics,
            volume: self.volume,
            trend: self.trend.as_str().to_string(),
            examples: self
                .examples
                .into_iter()
                .map(ExamplePost::into_dto)
                .collect(),
            usage: AnalysisUsageDto {
                queries_used: user.queries_used,
                limit: user.plan.query_limit(),
                plan: user.plan.as_str().to_string(),
                remaining: user.remaining_queries(),
            },
        }
    }
}
