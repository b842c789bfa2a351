//! Structured record of algorithm steps.
//!
//! Entries are kept newest first. The trace does not filter anything, every
//! entry carries a [`Level`] so the reader can decide what to show.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;


/// Summary entries are milestones, detail entries are per-edge checks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Summary,
    Detail,
}

impl Level {
    pub fn is_summary(self) -> bool {
        self == Level::Summary
    }

    pub fn is_detail(self) -> bool {
        self == Level::Detail
    }
}


#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub text: String,
    /// JSON payload of the step. Costs that are still +inf (node not reached
    /// yet) are written as `null`, JSON has no infinity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}


/// Append-only event log scoped to one search run
#[derive(Clone, Debug, Default)]
pub struct EventTrace {
    events: VecDeque<Event>,
}

impl EventTrace {

    pub fn new() -> Self {
        Self::default()
    }

    /// Push an entry to the front, it is visible immediately
    /// The entry is mirrored to `tracing` (summary -> debug, detail -> trace)
    pub fn record(&mut self, level: Level, text: impl Into<String>, meta: Option<Value>) {
        let text = text.into();

        match level {
            Level::Summary => tracing::debug!(meta = ?meta, "{text}"),
            Level::Detail => tracing::trace!(meta = ?meta, "{text}"),
        }

        self.events.push_front(Event {
            timestamp: Utc::now(),
            level,
            text,
            meta,
        });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Newest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Event> {
        self.events.iter()
    }

    /// Oldest first, for replaying a run
    pub fn chronological(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().rev()
    }

    pub fn latest(&self) -> Option<&Event> {
        self.events.front()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_is_newest_first() {
        let mut trace = EventTrace::new();
        trace.record(Level::Summary, "first", None);
        trace.record(Level::Detail, "second", Some(json!({"n": 2})));

        let texts: Vec<&str> = trace.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);

        let texts: Vec<&str> = trace.chronological().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);

        assert_eq!(trace.latest().map(|e| e.level), Some(Level::Detail));
        assert!(trace.iter().last().map(|e| e.timestamp) <= trace.latest().map(|e| e.timestamp));
    }

    #[test]
    fn test_consumer_filtering() {
        let mut trace = EventTrace::new();
        trace.record(Level::Summary, "a", None);
        trace.record(Level::Detail, "b", None);
        trace.record(Level::Summary, "c", None);

        let summaries = trace.iter().filter(|e| e.level.is_summary()).count();
        let details = trace.iter().filter(|e| e.level.is_detail()).count();
        assert_eq!((summaries, details), (2, 1));
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut trace = EventTrace::new();
        trace.record(Level::Summary, "a", None);
        trace.clear();
        assert!(trace.is_empty());
        assert!(trace.latest().is_none());
    }

    #[test]
    fn test_event_serializes() {
        let mut trace = EventTrace::new();
        trace.record(Level::Detail, "check", Some(json!({"from": "A"})));
        trace.record(Level::Summary, "done", None);

        let value = serde_json::to_value(trace.iter().collect::<Vec<_>>()).unwrap();
        assert_eq!(value[0]["level"], "summary");
        assert!(value[0].get("meta").is_none());
        assert_eq!(value[1]["level"], "detail");
        assert_eq!(value[1]["meta"]["from"], "A");
    }
}
