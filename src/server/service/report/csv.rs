use crate::server::model::search_history::SearchHistoryEntry;

const HEADER: &str = "Keyword,Sentiment,Volume,Top Subreddit,Date";

/// Renders history rows as CSV with a header line.
///
/// Text columns are always quoted; embedded quotes are doubled.
pub fn render(entries: &[SearchHistoryEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADER.to_string());

    for entry in entries {
        lines.push(format!(
            "{},{},{},{},{}",
            quote(&entry.keyword),
            quote(entry.sentiment.as_str()),
            entry.volume,
            quote(&entry.top_subreddit),
            quote(&entry.created_at.to_rfc3339()),
        ));
    }

    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sentiment::Sentiment;
    use chrono::{TimeZone, Utc};

    #[test]
    fn header_only_when_empty() {
        assert_eq!(render(&[]), HEADER);
    }

    #[test]
    fn quotes_text_columns() {
        let entry = SearchHistoryEntry {
            id: 1,
            keyword: "the \"big\" launch".to_string(),
            sentiment: Sentiment::Positive,
            volume: 210,
            top_subreddit: "fosstodon.org".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        };

        let csv = render(&[entry]);

        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"the \"\"big\"\" launch\",\"positive\",210,\"fosstodon.org\",\"2025-03-01T12:00:00+00:00\""
        );
    }
}
