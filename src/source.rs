//! Data-source lifecycle: progress tracking, completion callbacks, and
//! the descriptive surface a host application uses to wire a source up.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Default SVG icon bundled with the crate.
pub const DEFAULT_ICON: &str = include_str!("../assets/icon.svg");

/// Progress callback: `(source name, total to process, total processed,
/// estimated remaining seconds)`.
pub type ProgressCallback = Box<dyn Fn(&str, u32, u32, Option<f64>) + Send + Sync>;

/// Status callback: `(source name, human-readable message)`.
pub type StatusCallback = Box<dyn Fn(&str, &str) + Send + Sync>;

/// Tracks how far a fetch has progressed.
///
/// `set_total_items` starts the clock; remaining-time estimates
/// extrapolate from the average time per processed item since then.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    total_items: u32,
    processed_items: u32,
    total_processing_time: f64,
    fetch_completed: bool,
    started_at: Option<Instant>,
}

impl ProgressTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the number of items the fetch will process and mark the
    /// start of the run. Resets any previous progress.
    pub fn set_total_items(&mut self, total: u32) {
        self.total_items = total;
        self.processed_items = 0;
        self.fetch_completed = false;
        self.started_at = Some(Instant::now());
    }

    /// Record one more processed item.
    pub fn increment_processed_items(&mut self) {
        self.processed_items += 1;
    }

    /// Total number of items in the current run.
    pub fn total_to_process(&self) -> u32 {
        self.total_items
    }

    /// Items processed so far.
    pub fn total_processed(&self) -> u32 {
        self.processed_items
    }

    /// Record the wall-clock duration of the completed fetch, in seconds.
    pub fn set_total_processing_time(&mut self, seconds: f64) {
        self.total_processing_time = seconds;
    }

    /// Wall-clock duration of the last completed fetch, in seconds.
    pub fn total_processing_time(&self) -> f64 {
        self.total_processing_time
    }

    /// Mark the fetch as completed (or not).
    pub fn set_fetch_completed(&mut self, completed: bool) {
        self.fetch_completed = completed;
    }

    /// Whether the last fetch ran to completion.
    pub fn is_fetch_completed(&self) -> bool {
        self.fetch_completed
    }

    /// Estimate the remaining time in seconds.
    ///
    /// Returns `Some(0.0)` once the fetch has completed and `None` until
    /// the first item has been processed.
    pub fn estimated_remaining_time(&self) -> Option<f64> {
        if self.fetch_completed {
            return Some(0.0);
        }
        let started = self.started_at?;
        if self.processed_items == 0 || self.total_items == 0 {
            return None;
        }

        let elapsed = started.elapsed().as_secs_f64();
        let per_item = elapsed / f64::from(self.processed_items);
        let remaining = self.total_items.saturating_sub(self.processed_items);
        Some(per_item * f64::from(remaining))
    }
}

/// Describes how a host application connects a source to its inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionSchema {
    /// Kind of backing store the source reads from
    pub connection_type: String,

    /// Parameters the source accepts
    pub fields: Vec<FieldSpec>,
}

impl ConnectionSchema {
    /// Create a schema for the given connection type.
    pub fn new(connection_type: impl Into<String>) -> Self {
        Self {
            connection_type: connection_type.into(),
            fields: Vec::new(),
        }
    }

    /// Add a parameter to the schema.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }
}

/// A single connection parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Parameter name
    pub name: String,

    /// Value type ("string", "bool")
    #[serde(rename = "type")]
    pub field_type: String,

    /// Whether the parameter must be provided
    pub required: bool,

    /// Default value when the parameter is omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// Whether the value should be masked in UIs and logs
    pub sensitive: bool,

    /// Human-readable description
    pub description: String,
}

impl FieldSpec {
    /// Describe a required string parameter.
    pub fn required_string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: "string".to_string(),
            required: true,
            default: None,
            sensitive: false,
            description: description.into(),
        }
    }

    /// Describe an optional string parameter.
    pub fn optional_string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: "string".to_string(),
            required: false,
            default: None,
            sensitive: false,
            description: description.into(),
        }
    }

    /// Describe an optional boolean parameter with a default value.
    pub fn optional_bool(
        name: impl Into<String>,
        default: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: "bool".to_string(),
            required: false,
            default: Some(serde_json::Value::Bool(default)),
            sensitive: false,
            description: description.into(),
        }
    }
}

/// A batch data source.
///
/// `fetch` produces documents; `progress` reports how far the run has
/// come. The descriptive methods let a host application present the
/// source without instantiating a run.
pub trait DataSource {
    /// Short name identifying the source.
    fn name(&self) -> &str;

    /// Run the fetch and return the produced documents.
    ///
    /// Implementations absorb their own failures: a failed run returns an
    /// empty vec and logs why, so a host can poll many sources without
    /// handling per-source error types.
    fn fetch(&mut self) -> Vec<serde_json::Value>;

    /// Progress of the current or most recent fetch.
    fn progress(&self) -> &ProgressTracker;

    /// Connection parameters this source understands.
    fn connection_schema(&self) -> ConnectionSchema {
        ConnectionSchema::default()
    }

    /// SVG icon for UIs.
    fn icon(&self) -> &str {
        DEFAULT_ICON
    }
}
