//! Keyword matching and dashboard aggregates over a batch of news items.
//!
//! Everything here is pure so it can be tested against fixed timestamps.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::server::{
    model::news::{
        Alert, KeywordNews, NewsDigest, NewsItem, Platform, PlatformStat, SentimentBreakdown,
        TimelineSlot, Trend,
    },
    service::news::sentiment::{self, SentimentTally},
    util::text::truncate_chars,
};

/// Matches kept per keyword for display and aggregates.
const RETAINED_MATCHES: usize = 10;
const MAX_ALERTS: usize = 6;
const ALERT_TITLE_CHARS: usize = 80;

/// Timeline buckets as (label, start hours ago, end hours ago).
const TIMELINE_SLOTS: [(&str, f64, f64); 7] = [
    ("6h ago", 6.0, 5.0),
    ("5h ago", 5.0, 4.0),
    ("4h ago", 4.0, 3.0),
    ("3h ago", 3.0, 2.0),
    ("2h ago", 2.0, 1.0),
    ("1h ago", 1.0, 0.5),
    ("Now", 0.5, 0.0),
];

/// Appends `targeted` to `general` and drops repeated links, keeping the first occurrence.
pub fn merge(general: Vec<NewsItem>, targeted: Vec<NewsItem>) -> Vec<NewsItem> {
    let mut seen = HashSet::new();

    general
        .into_iter()
        .chain(targeted)
        .filter(|item| seen.insert(item.link.clone()))
        .collect()
}

/// An item matches when every word of the keyword appears in its title or snippet.
pub fn matches_keyword(keyword: &str, item: &NewsItem) -> bool {
    let cleaned = keyword.strip_prefix('#').unwrap_or(keyword).to_lowercase();
    let text = format!("{} {}", item.title, item.snippet).to_lowercase();

    cleaned.split_whitespace().all(|word| text.contains(word))
}

/// Compares coverage in the last hour with the five hours before it.
pub fn trend(items: &[&NewsItem], now: DateTime<Utc>) -> Trend {
    let one_hour_ago = now - Duration::hours(1);
    let six_hours_ago = now - Duration::hours(6);

    let recent = items
        .iter()
        .filter(|item| item.published_at > one_hour_ago)
        .count();
    let older = items
        .iter()
        .filter(|item| item.published_at > six_hours_ago && item.published_at <= one_hour_ago)
        .count();

    match recent.cmp(&older) {
        std::cmp::Ordering::Greater => Trend::Up,
        std::cmp::Ordering::Less => Trend::Down,
        std::cmp::Ordering::Equal => Trend::Stable,
    }
}

pub fn keyword_news(keyword: &str, items: &[NewsItem], now: DateTime<Utc>) -> KeywordNews {
    let matches: Vec<&NewsItem> = items
        .iter()
        .filter(|item| matches_keyword(keyword, item))
        .collect();

    let mut tally = SentimentTally::default();
    for item in &matches {
        tally.add(sentiment::detect(&format!("{} {}", item.title, item.snippet)));
    }

    KeywordNews {
        keyword: keyword.to_string(),
        mention_count: matches.len(),
        sentiment: tally.dominant(),
        trend: trend(&matches, now),
        items: matches
            .into_iter()
            .take(RETAINED_MATCHES)
            .cloned()
            .collect(),
    }
}

/// Mentions and title sentiment per platform over retained matches.
///
/// Always returns Twitter, Reddit and News in that order.
pub fn platform_breakdown(keywords: &[KeywordNews]) -> Vec<PlatformStat> {
    Platform::ALL
        .iter()
        .map(|&platform| {
            let mut tally = SentimentTally::default();
            for item in keywords
                .iter()
                .flat_map(|k| &k.items)
                .filter(|item| item.platform == platform)
            {
                tally.add(sentiment::detect(&item.title));
            }

            PlatformStat {
                platform,
                mentions: tally.total(),
                sentiment: tally.score(),
                change: 0,
            }
        })
        .collect()
}

fn hours_before(now: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    now - Duration::milliseconds((hours * 3_600_000.0) as i64)
}

/// Title sentiment counts over the last six hours, oldest slot first.
pub fn timeline(keywords: &[KeywordNews], now: DateTime<Utc>) -> Vec<TimelineSlot> {
    TIMELINE_SLOTS
        .iter()
        .map(|&(label, start, end)| {
            let slot_start = hours_before(now, start);
            let slot_end = hours_before(now, end);

            let mut tally = SentimentTally::default();
            for item in keywords.iter().flat_map(|k| &k.items).filter(|item| {
                item.published_at >= slot_start && item.published_at < slot_end
            }) {
                tally.add(sentiment::detect(&item.title));
            }

            TimelineSlot {
                label,
                positive: tally.positive,
                neutral: tally.neutral,
                negative: tally.negative,
            }
        })
        .collect()
}

/// Relative age of a headline, e.g. `12m ago`.
pub fn time_ago(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - published_at).num_minutes();
    let hours = (now - published_at).num_hours();

    if minutes < 5 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Trending and latest-headline alerts per keyword, capped at six.
pub fn alerts(keywords: &[KeywordNews], now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for keyword in keywords {
        let Some(latest) = keyword.items.first() else {
            alerts.push(Alert {
                message: format!("No recent news found for \"{}\"", keyword.keyword),
                time: "Now".to_string(),
                link: None,
            });
            continue;
        };

        if keyword.trend == Trend::Up {
            alerts.push(Alert {
                message: format!(
                    "\"{}\" is trending with {} mentions",
                    keyword.keyword, keyword.mention_count
                ),
                time: "Just now".to_string(),
                link: None,
            });
        }

        alerts.push(Alert {
            message: format!(
                "{}: {}...",
                latest.source,
                truncate_chars(&latest.title, ALERT_TITLE_CHARS)
            ),
            time: time_ago(latest.published_at, now),
            link: Some(latest.link.clone()),
        });
    }

    alerts.truncate(MAX_ALERTS);
    alerts
}

/// Share of each label over retained matches.
///
/// Rounding slack goes to neutral so a non-empty breakdown sums to 100.
pub fn overall_sentiment(keywords: &[KeywordNews]) -> SentimentBreakdown {
    let mut tally = SentimentTally::default();
    for item in keywords.iter().flat_map(|k| &k.items) {
        tally.add(sentiment::detect(&format!("{} {}", item.title, item.snippet)));
    }

    let total = tally.total().max(1) as f64;
    let percent = |count: u32| ((count as f64 / total) * 100.0).round() as i64;

    let mut positive = percent(tally.positive);
    let mut negative = percent(tally.negative);
    let mut neutral = percent(tally.neutral);

    let sum = positive + neutral + negative;
    if sum != 100 && sum > 0 {
        neutral += 100 - sum;
    }

    // Neutral cannot absorb an overshoot when it is already zero.
    if neutral < 0 {
        let excess = -neutral;
        neutral = 0;
        if positive >= negative {
            positive -= excess;
        } else {
            negative -= excess;
        }
    }

    SentimentBreakdown {
        positive: positive as u32,
        neutral: neutral as u32,
        negative: negative as u32,
    }
}

/// Builds the full digest for `keywords` from an already merged item list.
pub fn build(keywords: &[String], items: &[NewsItem], now: DateTime<Utc>) -> NewsDigest {
    let keywords: Vec<KeywordNews> = keywords
        .iter()
        .map(|keyword| keyword_news(keyword, items, now))
        .collect();

    NewsDigest {
        sentiment: overall_sentiment(&keywords),
        timeline: timeline(&keywords, now),
        platforms: platform_breakdown(&keywords),
        alerts: alerts(&keywords, now),
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sentiment::Sentiment;

    fn item(title: &str, link: &str, minutes_ago: i64, now: DateTime<Utc>) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            link: link.to_string(),
            source: "Test Wire".to_string(),
            platform: Platform::News,
            published_at: now - Duration::minutes(minutes_ago),
            snippet: String::new(),
        }
    }

    #[test]
    fn merge_keeps_first_occurrence_of_link() {
        let now = Utc::now();
        let general = vec![item("A", "https://x/1", 0, now), item("B", "https://x/2", 0, now)];
        let targeted = vec![item("A again", "https://x/1", 0, now), item("C", "https://x/3", 0, now)];

        let merged = merge(general, targeted);

        let titles: Vec<_> = merged.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn matching_requires_every_word() {
        let now = Utc::now();
        let news = item("Gold prices climb in Mumbai", "l", 0, now);

        assert!(matches_keyword("#gold", &news));
        assert!(matches_keyword("Gold Mumbai", &news));
        assert!(!matches_keyword("gold delhi", &news));
    }

    #[test]
    fn matching_reads_snippet_too() {
        let now = Utc::now();
        let mut news = item("Markets today", "l", 0, now);
        news.snippet = "Silver rallies on strong demand".to_string();

        assert!(matches_keyword("silver", &news));
    }

    #[test]
    fn trend_compares_last_hour_to_previous_five() {
        let now = Utc::now();
        let recent = item("r", "1", 10, now);
        let older = item("o", "2", 120, now);
        let stale = item("s", "3", 600, now);

        assert_eq!(trend(&[&recent, &stale], now), Trend::Up);
        assert_eq!(trend(&[&older, &stale], now), Trend::Down);
        assert_eq!(trend(&[&recent, &older], now), Trend::Stable);
        assert_eq!(trend(&[], now), Trend::Stable);
    }

    #[test]
    fn keyword_news_retains_ten_but_counts_all() {
        let now = Utc::now();
        let items: Vec<_> = (0..15)
            .map(|i| item("Cricket team wins again", &format!("l{}", i), i, now))
            .collect();

        let result = keyword_news("cricket", &items, now);

        assert_eq!(result.mention_count, 15);
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn platform_breakdown_lists_all_platforms() {
        let now = Utc::now();
        let mut reddit = item("Great win", "r", 0, now);
        reddit.platform = Platform::Reddit;
        let digest = build(
            &["win".to_string()],
            &[reddit, item("Win or loss", "n", 0, now)],
            now,
        );

        let names: Vec<_> = digest.platforms.iter().map(|p| p.platform.name()).collect();
        assert_eq!(names, vec!["Twitter", "Reddit", "News"]);
        assert_eq!(digest.platforms[0].mentions, 0);
        assert_eq!(digest.platforms[1].mentions, 1);
        assert_eq!(digest.platforms[1].sentiment, 100);
        assert_eq!(digest.platforms[2].sentiment, 50);
        assert!(digest.platforms.iter().all(|p| p.change == 0));
    }

    #[test]
    fn timeline_buckets_by_age() {
        let now = Utc::now();
        let items = vec![
            item("alpha good", "1", 10, now),
            item("alpha crash", "2", 45, now),
            item("alpha", "3", 330, now),
            item("alpha", "4", 500, now),
        ];
        let digest = build(&["alpha".to_string()], &items, now);

        let labels: Vec<_> = digest.timeline.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["6h ago", "5h ago", "4h ago", "3h ago", "2h ago", "1h ago", "Now"]
        );
        assert_eq!(digest.timeline[6].positive, 1);
        assert_eq!(digest.timeline[5].negative, 1);
        assert_eq!(digest.timeline[0].neutral, 1);
        let counted: u32 = digest
            .timeline
            .iter()
            .map(|s| s.positive + s.neutral + s.negative)
            .sum();
        assert_eq!(counted, 3);
    }

    #[test]
    fn time_ago_formats() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::minutes(2), now), "Just now");
        assert_eq!(time_ago(now - Duration::minutes(42), now), "42m ago");
        assert_eq!(time_ago(now - Duration::hours(5), now), "5h ago");
        assert_eq!(time_ago(now - Duration::hours(50), now), "2d ago");
    }

    #[test]
    fn alerts_cover_trending_latest_and_missing() {
        let now = Utc::now();
        let long_title = format!("Rally {}", "x".repeat(100));
        let items = vec![item(&long_title, "https://x/rally", 1, now)];

        let digest = build(&["rally".to_string(), "quiet".to_string()], &items, now);

        assert_eq!(digest.alerts.len(), 3);
        assert_eq!(digest.alerts[0].message, "\"rally\" is trending with 1 mentions");
        assert!(digest.alerts[1].message.starts_with("Test Wire: Rally "));
        assert!(digest.alerts[1].message.ends_with("..."));
        assert_eq!(
            digest.alerts[1].message.chars().count(),
            "Test Wire: ".len() + 80 + 3
        );
        assert_eq!(digest.alerts[1].link.as_deref(), Some("https://x/rally"));
        assert_eq!(digest.alerts[2].message, "No recent news found for \"quiet\"");
        assert_eq!(digest.alerts[2].time, "Now");
    }

    #[test]
    fn alerts_are_capped_at_six() {
        let now = Utc::now();
        let keywords: Vec<String> = (0..8).map(|i| format!("missing{}", i)).collect();

        let digest = build(&keywords, &[], now);

        assert_eq!(digest.alerts.len(), 6);
    }

    #[test]
    fn overall_sentiment_sums_to_hundred() {
        let now = Utc::now();
        let items = vec![
            item("topic good", "1", 0, now),
            item("topic crash", "2", 0, now),
            item("topic", "3", 0, now),
        ];

        let digest = build(&["topic".to_string()], &items, now);

        assert_eq!(
            digest.sentiment,
            SentimentBreakdown {
                positive: 33,
                neutral: 34,
                negative: 33
            }
        );
    }

    /// Expected: 12.5% and 87.5% both round up, and the extra point comes off the larger share
    #[test]
    fn overall_sentiment_sums_to_hundred_without_neutral() {
        let now = Utc::now();
        let mut items = vec![item("topic good", "p", 0, now)];
        for i in 0..7 {
            items.push(item("topic crash", &format!("n{}", i), 0, now));
        }

        let digest = build(&["topic".to_string()], &items, now);

        assert_eq!(
            digest.sentiment,
            SentimentBreakdown {
                positive: 13,
                neutral: 0,
                negative: 87
            }
        );
    }

    #[test]
    fn no_keywords_yields_empty_digest() {
        let digest = build(&[], &[], Utc::now());

        assert!(digest.keywords.is_empty());
        assert!(digest.alerts.is_empty());
        assert_eq!(digest.sentiment, SentimentBreakdown::default());
        assert_eq!(digest.timeline.len(), 7);
        assert_eq!(digest.platforms.len(), 3);
    }
}
