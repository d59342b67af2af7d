//! Word-list sentiment for headlines.

use crate::model::sentiment::Sentiment;

const POSITIVE_WORDS: [&str; 28] = [
    "success", "win", "victory", "growth", "boost", "rise", "gain", "profit",
    "celebrate", "achievement", "breakthrough", "launch", "inaugurat", "develop",
    "progress", "improve", "best", "great", "good", "happy", "joy", "award",
    "record", "historic", "amazing", "wonderful", "excellent", "proud",
];

const NEGATIVE_WORDS: [&str; 30] = [
    "death", "dead", "kill", "murder", "accident", "crash", "fail", "loss",
    "crisis", "scandal", "arrest", "protest", "violence", "attack", "threat",
    "decline", "drop", "fall", "worst", "bad", "tragic", "disaster", "flood",
    "earthquake", "fire", "explosion", "corruption", "scam", "fraud", "warning",
];

/// Shorter list used for the per-keyword positivity score on the dashboard.
const UPBEAT_WORDS: [&str; 12] = [
    "success", "win", "victory", "growth", "boost", "rise", "gain", "profit",
    "record", "best", "great", "good",
];

/// Classifies text by counting which listed words occur in it as substrings.
pub fn detect(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Whether the text mentions any upbeat word.
pub fn is_upbeat(text: &str) -> bool {
    let lower = text.to_lowercase();
    UPBEAT_WORDS.iter().any(|w| lower.contains(w))
}

/// Running tally of sentiment labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentTally {
    pub fn add(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }

    /// Most common label; ties go to positive, then negative.
    pub fn dominant(&self) -> Sentiment {
        if self.positive >= self.negative && self.positive >= self.neutral {
            Sentiment::Positive
        } else if self.negative >= self.positive && self.negative >= self.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// 0-100 score where positives count fully and neutrals half.
    pub fn score(&self) -> u32 {
        let total = self.total().max(1) as f64;
        ((self.positive as f64 * 100.0 + self.neutral as f64 * 50.0) / total).round() as u32
    }
}
