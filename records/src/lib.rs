//! Shared wire records for the job-monitor console.
//!
//! This crate owns the JSON shapes exchanged with the monitoring backend and
//! is used by `console`, `client` and `cli`. Identity fields are required;
//! everything the backend may omit or grow later is optional or defaulted so
//! decoding stays lenient.
//!
//! Records are read-only from the console's point of view. Views never edit
//! a `Job`, `Run` or `Score` in place; they refetch the whole list.

use serde::{Deserialize, Serialize};
use serde_json::Value;


// =============================================================================
// SCORE
// =============================================================================

/// Categorical output of the external scorer.
///
/// Unknown strings are preserved verbatim so a new backend decision never
/// fails decoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Decision {
    High,
    Low,
    Other(String),
}

impl Decision {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<String> for Decision {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Other(raw),
        }
    }
}

impl From<Decision> for String {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score attached to a job by the external scorer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub total_score: f64,
    pub decision: Decision,
    #[serde(default)]
    pub keyword_score: Option<f64>,
    #[serde(default)]
    pub seniority_score: Option<f64>,
    #[serde(default)]
    pub remote_bonus: Option<f64>,
    #[serde(default)]
    pub region_bonus: Option<f64>,
    #[serde(default)]
    pub scored_at: Option<String>,
}

// =============================================================================
// JOB
// =============================================================================

/// A scraped job posting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub canonical_url: String,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default)]
    pub source_id: Option<i64>,
    #[serde(default)]
    pub source_job_id: Option<String>,
    #[serde(default)]
    pub remote_type: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub collected_at: Option<String>,
    #[serde(default)]
    pub is_new: Option<bool>,
}

impl Job {
    /// Score cell text, e.g. `"82 (high)"`, or `"-"` when unscored.
    #[must_use]
    pub fn score_text(&self) -> String {
        match &self.score {
            Some(score) => format!("{} ({})", score.total_score, score.decision),
            None => "-".to_owned(),
        }
    }

    /// Whether the scorer flagged this job as high priority.
    #[must_use]
    pub fn is_high_priority(&self) -> bool {
        self.score.as_ref().is_some_and(|s| s.decision.is_high())
    }
}

// =============================================================================
// RUN
// =============================================================================

/// One execution record of the external crawler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: i64,
    pub source_id: i64,
    pub status: String,
    #[serde(default)]
    pub fetched_count: u64,
    #[serde(default)]
    pub new_count: u64,
    #[serde(default)]
    pub high_priority_count: u64,
    #[serde(default)]
    pub error_summary: String,
    #[serde(default)]
    pub blocked_count: Option<u64>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
}

// =============================================================================
// SOURCE
// =============================================================================

/// A configured origin the crawler polls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub name: String,
    pub base_url: String,
    pub enabled: bool,
    #[serde(default)]
    pub crawl_config: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Source {
    /// Patch body that flips this row's `enabled` flag.
    #[must_use]
    pub fn toggled(&self) -> SourcePatch {
        SourcePatch { enabled: !self.enabled }
    }

    /// Label for the row action button.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.enabled { "Disable" } else { "Enable" }
    }
}

/// Body of `PATCH /sources/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePatch {
    pub enabled: bool,
}

// =============================================================================
// AUTH + CRAWL
// =============================================================================

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Summary returned by `POST /crawl/trigger`. Only logged, never acted on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlTrigger {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub new_jobs: u64,
    #[serde(default)]
    pub high_priority_jobs: u64,
}

// =============================================================================
// CONFIG BLOBS
// =============================================================================

/// Unvalidated JSON document controlling scoring or notification behavior.
pub type ConfigBlob = Value;

/// Render a config blob as human-editable text (two-space indent).
#[must_use]
pub fn config_to_text(config: &ConfigBlob) -> String {
    // Serializing a `Value` cannot fail: keys are always strings.
    serde_json::to_string_pretty(config).unwrap_or_default()
}

/// Parse edited text back into a config blob.
///
/// # Errors
///
/// Returns the parser error when `text` is not valid JSON.
pub fn config_from_text(text: &str) -> Result<ConfigBlob, serde_json::Error> {
    serde_json::from_str(text)
}
