//! Domain types for nyan-statusline.
//!
//! Wire shapes for the two JSON inputs (session snapshot on stdin, stats
//! cache on disk) plus the derived summaries the renderer consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION SNAPSHOT (stdin)
// ============================================================================

/// Everything the assistant pipes to us on each status-line refresh.
///
/// Every field defaults when absent: older hosts omit whole sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionData {
    pub model: ModelInfo,
    pub workspace: WorkspaceInfo,
    pub cost: CostInfo,
    pub context_window: ContextWindow,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkspaceInfo {
    pub current_dir: String,
}

/// Spend and churn for the current session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CostInfo {
    pub total_cost_usd: f64,
    pub total_lines_added: i64,
    pub total_lines_removed: i64,
    pub total_duration_ms: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContextWindow {
    pub context_window_size: i64,
    pub total_input_tokens: i64,
    pub total_output_tokens: i64,
    /// Absent until the first model turn completes.
    pub current_usage: Option<UsageDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UsageDetail {
    pub input_tokens: i64,
    pub cache_creation_input_tokens: i64,
    pub cache_read_input_tokens: i64,
}

impl SessionData {
    /// Share of the context window in use, as a percentage.
    ///
    /// Zero when the window size is unknown or no turn has run yet.
    pub fn context_percent(&self) -> f64 {
        let window = &self.context_window;
        match &window.current_usage {
            Some(usage) if window.context_window_size > 0 => {
                let used = usage
                    .input_tokens
                    .saturating_add(usage.cache_creation_input_tokens)
                    .saturating_add(usage.cache_read_input_tokens);
                used as f64 / window.context_window_size as f64 * 100.0
            }
            _ => 0.0,
        }
    }
}

// ============================================================================
// STATS CACHE (stats-cache.json)
// ============================================================================

/// Usage history maintained by the assistant itself. Read-only for us.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsCache {
    /// RFC 3339 timestamp of the very first session.
    pub first_session_date: String,
    pub total_sessions: u64,
    pub total_messages: u64,
    pub daily_activity: Vec<DailyActivity>,
    /// Hour of day ("0".."23") → message count.
    pub hour_counts: BTreeMap<String, u64>,
}

/// One day of activity, keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyActivity {
    pub date: String,
    pub message_count: u64,
    pub session_count: u64,
}

/// Summary derived from a [`StatsCache`] relative to a given day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsInfo {
    pub coding_days: u64,
    pub active_days: u64,
    pub streak: u64,
    pub total_sessions: u64,
    pub total_messages: u64,
    pub today_messages: u64,
    pub today_sessions: u64,
    /// Busiest hour of day and its count, if any hour has activity.
    pub peak_hour: Option<(u32, u64)>,
}

// ============================================================================
// REPOSITORY STATE
// ============================================================================

/// Branch (or short commit on a detached HEAD) and worktree cleanliness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    pub branch: String,
    pub has_changes: bool,
}

// ============================================================================
// TESTS
// ============================================================================
