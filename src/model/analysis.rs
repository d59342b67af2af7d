use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{dashboard::SentimentBreakdownDto, sentiment::Sentiment};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyzeQuery {
    /// Topic or hashtag to analyse.
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SentimentAnalysisDto {
    pub overall: Sentiment,
    pub breakdown: SentimentBreakdownDto,
    pub summary: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExamplePostDto {
    pub username: String,
    /// Mastodon instance the post came from.
    pub subreddit: String,
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisUsageDto {
    pub queries_used: i32,
    pub limit: i32,
    pub plan: String,
    pub remaining: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisDto {
    pub sentiment: SentimentAnalysisDto,
    pub summary: String,
    pub topics: Vec<String>,
    pub volume: u32,
    /// `rising`, `stable` or `cooling`.
    pub trend: String,
    pub examples: Vec<ExamplePostDto>,
    pub usage: AnalysisUsageDto,
}
