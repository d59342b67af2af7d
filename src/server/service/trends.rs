//! Trending topics across the fediverse.
//!
//! Topics come from the configured instance's trending hashtags, each analysed with
//! [`GroqClient`]. Instance activity and engagement numbers are illustrative and
//! randomised on every call.

use std::collections::HashSet;

use futures::future::join_all;
use rand::{seq::SliceRandom, Rng};

use crate::server::{
    config::Config,
    model::{
        analysis::TopicAnalysis,
        trends::{InstanceActivity, TopPost, TrendingTopic, TrendsReport},
    },
    service::{groq::GroqClient, mastodon::MastodonClient},
};

/// Used when the instance reports no trending tags.
const FALLBACK_TOPICS: [&str; 10] = [
    "AI",
    "Bitcoin",
    "Climate",
    "Election",
    "Gaming",
    "Technology",
    "Music",
    "Sports",
    "Politics",
    "Science",
];

const TOPICS_PER_REPORT: usize = 5;
/// Analyses whose examples are surfaced as top posts.
const POST_SOURCES: usize = 3;
const POSTS_PER_TOPIC: usize = 2;
const MAX_TOP_POSTS: usize = 6;

/// Well-known instances with the base and spread of their illustrative counts.
const INSTANCES: [(&str, u32, u32); 5] = [
    ("mastodon.social", 400, 200),
    ("mstdn.social", 250, 150),
    ("fosstodon.org", 200, 120),
    ("techhub.social", 150, 100),
    ("infosec.exchange", 120, 80),
];

pub struct TrendsService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> TrendsService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub async fn trending(&self) -> TrendsReport {
        let mastodon = MastodonClient::new(self.http_client, &self.config.mastodon_instance);

        let candidates = match mastodon.trending_tags().await {
            Ok(tags) if !tags.is_empty() => tags,
            Ok(_) => {
                tracing::debug!("No trending tags reported, using fallback topics");
                fallback_topics()
            }
            Err(e) => {
                tracing::warn!("Failed to fetch trending tags: {}", e);
                fallback_topics()
            }
        };
        let topics = pick_topics(candidates, &mut rand::rng());

        let groq = GroqClient::new(self.http_client, self.config);
        let analyses = join_all(topics.iter().map(|topic| groq.analyze(topic))).await;

        let analysed: Vec<(String, TopicAnalysis)> = topics.into_iter().zip(analyses).collect();

        build_report(analysed, &mastodon, &mut rand::rng())
    }
}

fn fallback_topics() -> Vec<String> {
    FALLBACK_TOPICS.iter().map(|topic| topic.to_string()).collect()
}

/// Chooses up to five distinct candidates at random.
///
/// Candidates differing only in case count as one; the first spelling is kept.
fn pick_topics<R: Rng + ?Sized>(mut candidates: Vec<String>, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates.retain(|topic| seen.insert(topic.to_lowercase()));
    candidates.shuffle(rng);
    candidates.truncate(TOPICS_PER_REPORT);
    candidates
}

fn build_report<R: Rng + ?Sized>(
    analysed: Vec<(String, TopicAnalysis)>,
    mastodon: &MastodonClient<'_>,
    rng: &mut R,
) -> TrendsReport {
    let mut top_posts = Vec::new();

    for (i, (keyword, analysis)) in analysed.iter().take(POST_SOURCES).enumerate() {
        for (j, example) in analysis.examples.iter().take(POSTS_PER_TOPIC).enumerate() {
            top_posts.push(TopPost {
                id: format!("{}-{}", i, j),
                text: example.text.clone(),
                instance: example.instance.clone(),
                boosts: rng.random_range(100..400),
                replies: rng.random_range(20..170),
                url: mastodon.tag_url(keyword),
                sentiment: example.sentiment,
            });
        }
    }
    top_posts.truncate(MAX_TOP_POSTS);

    let instances = INSTANCES
        .iter()
        .map(|&(instance, base, spread)| InstanceActivity {
            instance: instance.to_string(),
            count: base + rng.random_range(0..spread),
        })
        .collect();

    let trending = analysed
        .into_iter()
        .map(|(keyword, analysis)| TrendingTopic {
            url: mastodon.tag_url(&keyword),
            mentions: analysis.volume,
            sentiment: analysis.overall,
            top_instance: analysis.top_instance().to_string(),
            keyword,
        })
        .collect();

    TrendsReport {
        trending,
        instances,
        top_posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::groq::fallback_analysis;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn picks_five_distinct_topics() {
        let mut rng = StdRng::seed_from_u64(7);

        let topics = pick_topics(fallback_topics(), &mut rng);

        assert_eq!(topics.len(), 5);
        let mut unique = topics.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
        assert!(topics.iter().all(|t| FALLBACK_TOPICS.contains(&t.as_str())));
    }

    #[test]
    fn picks_all_when_fewer_than_five() {
        let mut rng = StdRng::seed_from_u64(7);

        let topics = pick_topics(vec!["rust".to_string(), "go".to_string()], &mut rng);

        assert_eq!(topics.len(), 2);
    }

    /// Expected: repeated tags are picked once even when not adjacent
    #[test]
    fn drops_repeated_candidates() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidates = ["rust", "go", "Rust", "go", "zig"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        let mut topics = pick_topics(candidates, &mut rng);
        topics.sort();

        assert_eq!(topics, vec!["go", "rust", "zig"]);
    }

    #[test]
    fn report_takes_two_posts_from_first_three_topics() {
        let client = reqwest::Client::new();
        let mastodon = MastodonClient::new(&client, "https://mastodon.social");
        let mut rng = StdRng::seed_from_u64(1);
        let analysed: Vec<_> = ["AI", "Music", "Gaming", "Sports"]
            .iter()
            .map(|topic| (topic.to_string(), fallback_analysis(topic)))
            .collect();

        let report = build_report(analysed, &mastodon, &mut rng);

        assert_eq!(report.trending.len(), 4);
        assert_eq!(report.trending[0].mentions, 125);
        assert_eq!(report.trending[0].url, "https://mastodon.social/tags/ai");
        assert_eq!(report.trending[0].top_instance, "mastodon.social");

        assert_eq!(report.top_posts.len(), 6);
        assert_eq!(report.top_posts[0].id, "0-0");
        assert_eq!(report.top_posts[5].id, "2-1");
        assert_eq!(report.top_posts[2].url, "https://mastodon.social/tags/music");
        assert!(report
            .top_posts
            .iter()
            .all(|p| (100..400).contains(&p.boosts) && (20..170).contains(&p.replies)));

        let names: Vec<_> = report.instances.iter().map(|i| i.instance.as_str()).collect();
        assert_eq!(names[0], "mastodon.social");
        assert_eq!(report.instances.len(), 5);
        assert!((400..600).contains(&report.instances[0].count));
    }
}
