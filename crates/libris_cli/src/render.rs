//! Report structures and text rendering shared by the commands.

use chrono::{DateTime, Utc};
use libris_core::{Field, QueryLogEntry, Record, SearchComparison, StatsSnapshot};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const RULE: &str = "──────────────────────────────";

/// A printable view of one record.
#[derive(Debug, Serialize)]
pub struct RecordView {
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
    /// ISBN.
    pub isbn: String,
    /// Content reference.
    pub content_reference: String,
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        Self {
            title: record.title().to_string(),
            author: record.author().to_string(),
            isbn: record.isbn().to_string(),
            content_reference: record.content_reference().to_string(),
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Serialize)]
pub struct StrategyRow {
    /// Display name of the strategy.
    pub method: &'static str,
    /// Elapsed time in milliseconds.
    pub time_ms: f64,
    /// Number of records returned.
    pub hits: usize,
    /// The records themselves.
    pub records: Vec<RecordView>,
}

/// Result of one search, ready for output.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    /// Field searched.
    pub field: Field,
    /// Raw query text.
    pub query: String,
    /// Whether the strategies agreed.
    pub agrees: bool,
    /// Per-strategy rows in presentation order.
    pub rows: Vec<StrategyRow>,
}

impl SearchReport {
    /// Builds a report from a comparison.
    pub fn new(query: &str, comparison: &SearchComparison) -> Self {
        let rows = match comparison {
            SearchComparison::Key(key) => vec![
                row(key.tree.strategy.name(), key.tree.elapsed, key.tree.value.iter()),
                row(key.hash.strategy.name(), key.hash.elapsed, key.hash.value.iter()),
            ],
            SearchComparison::Author(author) => vec![
                row(
                    author.grouped.strategy.name(),
                    author.grouped.elapsed,
                    author.grouped.value.iter(),
                ),
                row(
                    author.linear.strategy.name(),
                    author.linear.elapsed,
                    author.linear.value.iter(),
                ),
            ],
        };
        Self {
            field: comparison.field(),
            query: query.to_string(),
            agrees: comparison.agrees(),
            rows,
        }
    }

    /// Renders the comparison table followed by the result details.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let heading = match self.field {
            Field::Author => "Number of Books",
            Field::Title | Field::Isbn => "Search Result",
        };

        out.push_str(&format!(
            "{:<20} | {:>15} | {}\n",
            "Search Method", "Time Taken (ms)", heading
        ));
        for row in &self.rows {
            let result = match (self.field, row.hits) {
                (Field::Author, hits) => hits.to_string(),
                (_, 0) => "Not Found".to_string(),
                _ => "Found".to_string(),
            };
            out.push_str(&format!(
                "{:<20} | {:>15.2} | {}\n",
                row.method, row.time_ms, result
            ));
        }

        for row in &self.rows {
            out.push('\n');
            out.push_str(&format!("{} Result Details:\n", row.method));
            if row.records.is_empty() {
                out.push_str("  No book found\n");
            }
            for record in &row.records {
                match self.field {
                    Field::Author => {
                        out.push_str(&format!("  {} - {}\n", record.title, record.author));
                    }
                    Field::Title | Field::Isbn => {
                        out.push_str(&format!("  Title: {}\n", record.title));
                        out.push_str(&format!("  Author: {}\n", record.author));
                        out.push_str(&format!("  ISBN: {}\n", record.isbn));
                        out.push_str(&format!("  Content: {}\n", record.content_reference));
                    }
                }
            }
        }
        out
    }
}

fn row<'a>(
    method: &'static str,
    elapsed: Duration,
    records: impl Iterator<Item = &'a Arc<Record>>,
) -> StrategyRow {
    let records: Vec<RecordView> = records.map(|r| RecordView::from(r.as_ref())).collect();
    StrategyRow {
        method,
        time_ms: millis(elapsed),
        hits: records.len(),
        records,
    }
}

/// Converts a duration to fractional milliseconds.
pub fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Formats a log timestamp.
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// A printable view of one log entry.
#[derive(Debug, Serialize)]
pub struct LogView {
    /// Requester ID.
    pub user_id: String,
    /// Requester name.
    pub user_name: String,
    /// Raw query text.
    pub query: String,
    /// Field searched.
    pub field: Field,
    /// Formatted timestamp.
    pub time: String,
}

impl From<&QueryLogEntry> for LogView {
    fn from(entry: &QueryLogEntry) -> Self {
        Self {
            user_id: entry.requester.id.clone(),
            user_name: entry.requester.name.clone(),
            query: entry.query_text.clone(),
            field: entry.field,
            time: timestamp(&entry.timestamp),
        }
    }
}

/// Renders the full query log.
pub fn log_text(entries: &[QueryLogEntry]) -> String {
    if entries.is_empty() {
        return "No searches recorded\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("User: {}\n", entry.requester));
        out.push_str(&format!("Query: {} ({})\n", entry.query_text, entry.field));
        out.push_str(&format!("Time: {}\n", timestamp(&entry.timestamp)));
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// Renders one requester's search history.
pub fn history_text(entries: &[QueryLogEntry]) -> String {
    if entries.is_empty() {
        return "No search history\n".to_string();
    }
    entries
        .iter()
        .map(|e| format!("{} - {} ({})\n", timestamp(&e.timestamp), e.query_text, e.field))
        .collect()
}

/// Renders catalog counters.
pub fn stats_text(records: usize, stats: &StatsSnapshot) -> String {
    format!(
        "Books:             {records}\n\
         Searches:          {}\n\
         \x20 title:           {}\n\
         \x20 isbn:            {}\n\
         \x20 author:          {}\n\
         Rejected queries:  {}\n\
         Inconsistencies:   {}\n",
        stats.searches,
        stats.title_searches,
        stats.isbn_searches,
        stats.author_searches,
        stats.rejected_queries,
        stats.inconsistencies,
    )
}
