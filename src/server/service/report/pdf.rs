//! Minimal PDF writer for search history exports.
//!
//! Produces a PDF 1.4 document with US Letter pages and a single Helvetica font.
//! Text outside printable ASCII is replaced with `?` since only the standard
//! encoding is available.

use chrono::{DateTime, Utc};

use crate::server::model::search_history::SearchHistoryEntry;

const PAGE_WIDTH: u32 = 612;
const PAGE_HEIGHT: u32 = 792;
const MARGIN: u32 = 50;
const FONT_SIZE: u32 = 10;
const LEADING: u32 = 14;
const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;

/// Catalog, page tree and font come first; each page adds a page and a content object.
const FIXED_OBJECTS: usize = 3;

pub fn render(entries: &[SearchHistoryEntry], generated_at: DateTime<Utc>) -> Vec<u8> {
    let lines = report_lines(entries, generated_at);
    let pages: Vec<&[String]> = lines.chunks(LINES_PER_PAGE).collect();

    let page_ids: Vec<usize> = (0..pages.len())
        .map(|i| FIXED_OBJECTS + 1 + i * 2)
        .collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    for (page, &page_id) in pages.iter().zip(&page_ids) {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH,
            PAGE_HEIGHT,
            page_id + 1
        ));

        let stream = content_stream(page);
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());

    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        out.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));

    out.into_bytes()
}

fn report_lines(entries: &[SearchHistoryEntry], generated_at: DateTime<Utc>) -> Vec<String> {
    let mut lines = vec![
        "SEARCH HISTORY REPORT".to_string(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        String::new(),
    ];

    if entries.is_empty() {
        lines.push("No searches yet.".to_string());
    }

    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, entry.keyword));
        lines.push(format!("   Sentiment: {}", entry.sentiment));
        lines.push(format!("   Volume: {}", entry.volume));
        lines.push(format!("   Top instance: {}", entry.top_subreddit));
        lines.push(format!(
            "   Date: {}",
            entry.created_at.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(String::new());
    }

    lines
}

fn content_stream(lines: &[String]) -> String {
    let mut stream = format!(
        "BT\n/F1 {} Tf\n{} TL\n{} {} Td\n",
        FONT_SIZE,
        LEADING,
        MARGIN,
        PAGE_HEIGHT - MARGIN
    );

    for line in lines {
        stream.push_str(&format!("({}) Tj T*\n", escape(line)));
    }
    stream.push_str("ET");

    stream
}

/// Escapes a string for a PDF literal.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }

    escaped
}
