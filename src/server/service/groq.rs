//! Topic analysis through Groq's OpenAI-compatible chat completions API.
//!
//! The model is asked for a JSON document describing the discussion around a topic. Any
//! failure along the way (no API key, transport error, unparseable reply) produces a
//! deterministic fallback analysis instead of an error, so callers always get a result.

use serde::{Deserialize, Serialize};

use crate::{
    model::sentiment::Sentiment,
    server::{
        config::Config,
        error::{internal::InternalError, AppError},
        model::{
            analysis::{DiscussionTrend, ExamplePost, TopicAnalysis},
            news::SentimentBreakdown,
        },
    },
};

const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1500;
const DEFAULT_VOLUME: u32 = 150;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Shape of the JSON document the model is asked to produce.
#[derive(Deserialize)]
struct RawAnalysis {
    sentiment_summary: Option<String>,
    positive_percentage: Option<f64>,
    neutral_percentage: Option<f64>,
    negative_percentage: Option<f64>,
    #[serde(default)]
    topics: Vec<String>,
    discussion_volume: Option<f64>,
    trend: Option<String>,
    example_posts: Option<Vec<RawExample>>,
}

#[derive(Deserialize)]
struct RawExample {
    #[serde(default)]
    username: String,
    #[serde(default)]
    instance: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    sentiment: String,
}

pub struct GroqClient<'a> {
    http_client: &'a reqwest::Client,
    api_key: Option<&'a str>,
    model: &'a str,
}

impl<'a> GroqClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            api_key: config.groq_api_key.as_deref(),
            model: &config.groq_model,
        }
    }

    /// Analyses the public discussion around `keyword`.
    ///
    /// Never fails; see the module docs for the fallback behaviour.
    pub async fn analyze(&self, keyword: &str) -> TopicAnalysis {
        let Some(api_key) = self.api_key else {
            tracing::debug!("GROQ_API_KEY not set, using fallback analysis for {}", keyword);
            return fallback_analysis(keyword);
        };

        match self.request(api_key, keyword).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::error!("Groq analysis for \"{}\" failed: {}", keyword, e);
                fallback_analysis(keyword)
            }
        }
    }

    async fn request(&self, api_key: &str, keyword: &str) -> Result<TopicAnalysis, AppError> {
        let body = ChatRequest {
            model: self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt(keyword),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response: ChatResponse = self
            .http_client
            .post(GROQ_CHAT_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_else(|| "{}".to_string());

        parse_analysis(&content)
    }
}

fn prompt(keyword: &str) -> String {
    format!(
        r#"You are analyzing social media discussions about "{keyword}". Generate realistic data that reflects current public sentiment and discussions.

Respond with this exact JSON structure and nothing else (no markdown, no code fences):
{{
  "sentiment_summary": "<2-3 sentence analysis of overall sentiment>",
  "positive_percentage": <number 0-100>,
  "neutral_percentage": <number 0-100>,
  "negative_percentage": <number 0-100>,
  "topics": ["<topic1>", "<topic2>", "<topic3>", "<topic4>", "<topic5>"],
  "discussion_volume": <number between 50 and 500>,
  "trend": "<rising|stable|cooling>",
  "example_posts": [
    {{
      "username": "<realistic username>",
      "instance": "<mastodon.social or another instance>",
      "text": "<realistic 1-2 sentence post about the topic>",
      "sentiment": "<positive|neutral|negative>"
    }}
  ]
}}

Rules:
- Include five example posts from different users and instances
- Percentages must add up to 100
- Usernames should look real, not user1 or user2
- Posts should reflect opinions people might actually hold about "{keyword}"
- Return only valid JSON"#
    )
}

/// Removes a surrounding markdown code fence, if any.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Clamps each percentage to 0..=100 and rescales so they sum to exactly 100.
///
/// Positive and neutral are floored and negative takes the remainder. All zero
/// becomes 40/40/20.
pub fn normalize_breakdown(positive: f64, neutral: f64, negative: f64) -> SentimentBreakdown {
    let clamp = |value: f64| {
        if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        }
    };
    let (positive, neutral, negative) = (clamp(positive), clamp(neutral), clamp(negative));

    let total = positive + neutral + negative;
    if total == 0.0 {
        return SentimentBreakdown {
            positive: 40,
            neutral: 40,
            negative: 20,
        };
    }

    let positive = ((positive / total) * 100.0).floor() as u32;
    let neutral = ((neutral / total) * 100.0).floor() as u32;

    SentimentBreakdown {
        positive,
        neutral,
        negative: 100 - positive - neutral,
    }
}

/// Positive or negative when that share is a strict majority, otherwise neutral.
pub fn overall_sentiment(breakdown: &SentimentBreakdown) -> Sentiment {
    if breakdown.positive > 50 {
        Sentiment::Positive
    } else if breakdown.negative > 50 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn parse_analysis(content: &str) -> Result<TopicAnalysis, AppError> {
    let raw: RawAnalysis = serde_json::from_str(strip_code_fence(content))?;

    let summary = raw
        .sentiment_summary
        .ok_or_else(|| InternalError::MalformedAnalysis("missing sentiment_summary".to_string()))?;
    let examples = raw
        .example_posts
        .ok_or_else(|| InternalError::MalformedAnalysis("missing example_posts".to_string()))?;

    let breakdown = normalize_breakdown(
        raw.positive_percentage.unwrap_or_default(),
        raw.neutral_percentage.unwrap_or_default(),
        raw.negative_percentage.unwrap_or_default(),
    );

    let volume = raw
        .discussion_volume
        .filter(|volume| volume.is_finite() && *volume >= 1.0)
        .map(|volume| volume.round() as u32)
        .unwrap_or(DEFAULT_VOLUME);

    Ok(TopicAnalysis {
        overall: overall_sentiment(&breakdown),
        breakdown,
        summary,
        topics: raw.topics,
        volume,
        trend: raw
            .trend
            .as_deref()
            .map(DiscussionTrend::parse_lenient)
            .unwrap_or(DiscussionTrend::Stable),
        examples: examples
            .into_iter()
            .map(|example| ExamplePost {
                username: example.username,
                instance: example.instance,
                text: example.text,
                sentiment: example.sentiment.parse().unwrap_or(Sentiment::Neutral),
            })
            .collect(),
    })
}

/// Analysis returned whenever the model cannot be used.
pub fn fallback_analysis(keyword: &str) -> TopicAnalysis {
    let example = |username: &str, instance: &str, text: String, sentiment| ExamplePost {
        username: username.to_string(),
        instance: instance.to_string(),
        text,
        sentiment,
    };

    TopicAnalysis {
        overall: Sentiment::Neutral,
        breakdown: SentimentBreakdown {
            positive: 40,
            neutral: 40,
            negative: 20,
        },
        summary: format!(
            "Discussion about {} shows mixed reactions across social media communities.",
            keyword
        ),
        topics: vec![
            keyword.to_string(),
            "discussion".to_string(),
            "community".to_string(),
            "social media".to_string(),
            "trending".to_string(),
        ],
        volume: 125,
        trend: DiscussionTrend::Stable,
        examples: vec![
            example(
                "tech_enthusiast",
                "mastodon.social",
                format!(
                    "Interesting developments around {} lately. Worth keeping an eye on.",
                    keyword
                ),
                Sentiment::Positive,
            ),
            example(
                "daily_observer",
                "mstdn.social",
                format!("Not sure what to make of {} yet. Need more information.", keyword),
                Sentiment::Neutral,
            ),
            example(
                "skeptical_user",
                "fosstodon.org",
                format!(
                    "I have some concerns about {}. Let's see how this plays out.",
                    keyword
                ),
                Sentiment::Negative,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "sentiment_summary": "Mostly upbeat.",
        "positive_percentage": 60,
        "neutral_percentage": 30,
        "negative_percentage": 10,
        "topics": ["launch", "pricing"],
        "discussion_volume": 320,
        "trend": "rising",
        "example_posts": [
            {"username": "ana_codes", "instance": "fosstodon.org", "text": "Love it", "sentiment": "positive"},
            {"username": "bob", "instance": "mstdn.social", "text": "Meh", "sentiment": "sarcastic"}
        ]
    }"#;

    #[test]
    fn parses_model_reply() {
        let analysis = parse_analysis(REPLY).unwrap();

        assert_eq!(analysis.overall, Sentiment::Positive);
        assert_eq!(
            analysis.breakdown,
            SentimentBreakdown {
                positive: 60,
                neutral: 30,
                negative: 10
            }
        );
        assert_eq!(analysis.volume, 320);
        assert_eq!(analysis.trend, DiscussionTrend::Rising);
        assert_eq!(analysis.topics, vec!["launch", "pricing"]);
        assert_eq!(analysis.top_instance(), "fosstodon.org");
        assert_eq!(analysis.examples[1].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn parses_fenced_reply() {
        let fenced = format!("```json\n{}\n```", REPLY);

        assert!(parse_analysis(&fenced).is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let reply = r#"{"sentiment_summary": "Quiet.", "example_posts": []}"#;

        let analysis = parse_analysis(reply).unwrap();

        assert_eq!(analysis.volume, 150);
        assert_eq!(analysis.trend, DiscussionTrend::Stable);
        assert_eq!(analysis.breakdown.positive, 40);
        assert_eq!(analysis.top_instance(), "mastodon.social");
    }

    #[test]
    fn rejects_reply_without_examples() {
        let reply = r#"{"sentiment_summary": "Quiet."}"#;

        assert!(matches!(
            parse_analysis(reply),
            Err(AppError::InternalErr(InternalError::MalformedAnalysis(_)))
        ));
    }

    #[test]
    fn rejects_non_json_reply() {
        assert!(matches!(
            parse_analysis("I cannot help with that."),
            Err(AppError::JsonErr(_))
        ));
    }

    #[test]
    fn breakdown_is_normalised_to_hundred() {
        let breakdown = normalize_breakdown(50.0, 50.0, 50.0);
        assert_eq!(
            breakdown,
            SentimentBreakdown {
                positive: 33,
                neutral: 33,
                negative: 34
            }
        );

        let clamped = normalize_breakdown(250.0, -10.0, 0.0);
        assert_eq!(clamped.positive, 100);
        assert_eq!(clamped.negative, 0);
    }

    #[test]
    fn overall_needs_strict_majority() {
        let split = SentimentBreakdown {
            positive: 50,
            neutral: 0,
            negative: 50,
        };
        assert_eq!(overall_sentiment(&split), Sentiment::Neutral);

        let negative = SentimentBreakdown {
            positive: 20,
            neutral: 20,
            negative: 60,
        };
        assert_eq!(overall_sentiment(&negative), Sentiment::Negative);
    }

    #[test]
    fn fallback_is_deterministic() {
        let analysis = fallback_analysis("rust");

        assert_eq!(analysis.volume, 125);
        assert_eq!(analysis.examples.len(), 3);
        assert_eq!(analysis.overall, Sentiment::Neutral);
        assert_eq!(analysis.topics[0], "rust");
        assert_eq!(analysis, fallback_analysis("rust"));
    }
}
