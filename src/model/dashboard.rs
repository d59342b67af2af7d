use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub user: DashboardUserDto,
    pub usage: DashboardUsageDto,
    pub keywords: Vec<DashboardKeywordDto>,
    pub stats: DashboardStatsDto,
    pub sentiment: SentimentBreakdownDto,
    pub timeline: Vec<TimelineSlotDto>,
    pub platforms: Vec<PlatformStatDto>,
    pub alerts: Vec<AlertDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardUserDto {
    pub email: String,
    pub plan: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardUsageDto {
    pub queries_used: i32,
    pub limit: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardKeywordDto {
    pub id: i32,
    pub keyword: String,
    /// Percentage of matched headlines that read positive; `null` when nothing matched.
    pub sentiment: Option<u32>,
    /// `up`, `down`, `stable`, or `none` when nothing matched.
    pub trend: String,
    pub mentions: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub active_keywords: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SentimentBreakdownDto {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TimelineSlotDto {
    pub time: String,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlatformStatDto {
    pub name: String,
    pub mentions: u32,
    pub sentiment: u32,
    pub change: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlertDto {
    pub message: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
