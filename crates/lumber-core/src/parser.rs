//! Shared line-oriented decoder for archived chunks and temp buffers.
//!
//! Two encodings per line: a JSON object carrying the full record shape
//! (primary), or `RFC3339<space>message` (fallback for plain writers).
//! A line that decodes as neither is skipped and counted; a body whose
//! every line fails still decodes to success with zero records.

use chrono::{DateTime, Utc};

use crate::record::LogRecord;

/// Outcome of decoding one raw body: records in file order plus the
/// number of lines that failed to decode. Blank lines are ignored and
/// not counted.
#[derive(Clone, Debug, Default)]
pub struct ParsedContent {
    pub records: Vec<LogRecord>,
    pub skipped: usize,
}

/// Decodes a single line, or None when it matches neither encoding.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with('{') {
        if let Ok(record) = serde_json::from_str::<LogRecord>(line) {
            return Some(record);
        }
    }
    let (prefix, message) = line.split_once(' ')?;
    let timestamp = DateTime::parse_from_rfc3339(prefix)
        .ok()?
        .with_timezone(&Utc);
    Some(LogRecord::new(timestamp, message))
}

/// Decodes a whole body line by line, preserving file order.
pub fn parse_content(content: &str) -> ParsedContent {
    let mut parsed = ParsedContent::default();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(record) => parsed.records.push(record),
            None => parsed.skipped += 1,
        }
    }
    if parsed.skipped > 0 {
        tracing::debug!(skipped = parsed.skipped, "skipped undecodable log lines");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn json_line_carries_metadata() {
        let line = r#"{"timestamp":"2024-05-01T10:00:00Z","message":"booting","node":"node-1","container":"main"}"#;
        let record = parse_line(line).unwrap();
        assert_eq!(record.message, "booting");
        assert_eq!(record.node.as_deref(), Some("node-1"));
        assert_eq!(record.container.as_deref(), Some("main"));
        assert_eq!(record.timestamp, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn plain_line_parses_timestamp_prefix() {
        let record = parse_line("2024-05-01T10:00:01+00:00 epoch 3 started").unwrap();
        assert_eq!(record.message, "epoch 3 started");
        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 1).unwrap()
        );
        assert_eq!(record.node, None);
    }

    #[test]
    fn garbage_line_is_none() {
        assert!(parse_line("not a log line").is_none());
        assert!(parse_line("{\"message\":\"missing timestamp\"}").is_none());
    }

    #[test]
    fn content_keeps_file_order_and_counts_skips() {
        let content = "\
2024-05-01T10:00:00Z first
garbage

2024-05-01T10:00:02Z third
{\"timestamp\":\"2024-05-01T10:00:01Z\",\"message\":\"second\"}
";
        let parsed = parse_content(content);
        assert_eq!(parsed.skipped, 1);
        let messages: Vec<&str> = parsed.records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "third", "second"]);
    }

    #[test]
    fn fully_corrupt_body_is_zero_records() {
        let parsed = parse_content("one\ntwo\nthree\n");
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped, 3);
    }
}
