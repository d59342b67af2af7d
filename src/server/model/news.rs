//! News aggregation models.
//!
//! Headlines pulled from RSS feeds are normalised into `NewsItem`s, matched against
//! tracked keywords and summarised into the dashboard widgets.

use chrono::{DateTime, Utc};

use crate::model::{
    dashboard::{AlertDto, PlatformStatDto, SentimentBreakdownDto, TimelineSlotDto},
    sentiment::Sentiment,
};

/// Platform a headline is attributed to on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Twitter,
    Reddit,
    News,
}

impl Platform {
    /// Display order of the platform breakdown.
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::Reddit, Platform::News];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Reddit => "Reddit",
            Self::News => "News",
        }
    }
}

/// Direction of coverage for a keyword over the last few hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    /// Publisher name, e.g. `BBC News`.
    pub source: String,
    pub platform: Platform,
    pub published_at: DateTime<Utc>,
    /// Plain-text excerpt, at most 200 characters.
    pub snippet: String,
}

/// Coverage for one tracked keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordNews {
    pub keyword: String,
    /// Newest matches first, at most ten.
    pub items: Vec<NewsItem>,
    /// Matches before truncation.
    pub mention_count: usize,
    pub sentiment: Sentiment,
    pub trend: Trend,
}

/// Percentages that add up to 100, or all zero when nothing matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentBreakdown {
    pub fn into_dto(self) -> SentimentBreakdownDto {
        SentimentBreakdownDto {
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSlot {
    pub label: &'static str,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl TimelineSlot {
    pub fn into_dto(self) -> TimelineSlotDto {
        TimelineSlotDto {
            time: self.label.to_string(),
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformStat {
    pub platform: Platform,
    pub mentions: u32,
    /// 0-100 score where neutral counts half.
    pub sentiment: u32,
    pub change: i32,
}

impl PlatformStat {
    pub fn into_dto(self) -> PlatformStatDto {
        PlatformStatDto {
            name: self.platform.name().to_string(),
            mentions: self.mentions,
            sentiment: self.sentiment,
            change: self.change,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub time: String,
    pub link: Option<String>,
}

impl Alert {
    pub fn into_dto(self) -> AlertDto {
        AlertDto {
            message: self.message,
            time: self.time,
            link: self.link,
        }
    }
}

/// Everything the dashboard needs from the news pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsDigest {
    pub keywords: Vec<KeywordNews>,
    pub sentiment: SentimentBreakdown,
    pub timeline: Vec<TimelineSlot>,
    pub platforms: Vec<PlatformStat>,
    pub alerts: Vec<Alert>,
}
