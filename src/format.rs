//! Number formatting for status-line segments.
//!
//! Pure functions: value in, short display string out.

/// Dollar amount with precision that grows as the amount shrinks.
pub fn format_cost(cost: f64) -> String {
    if cost <= 0.0 {
        "$0.0000".to_string()
    } else if cost < 0.01 {
        format!("${:.4}", cost)
    } else if cost < 1.0 {
        format!("${:.3}", cost)
    } else {
        format!("${:.2}", cost)
    }
}

/// Compact session length: `42s`, `2m30s`, `1h5m`.
pub fn format_duration(ms: i64) -> String {
    if ms <= 0 {
        return "0s".to_string();
    }
    let seconds = ms / 1000;
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m{}s", seconds / 60, seconds % 60)
    } else {
        format!("{}h{}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Token count: exact below 1000, one decimal below 10k, then whole k.
pub fn format_tokens(tokens: i64) -> String {
    if tokens <= 0 {
        "0".to_string()
    } else if tokens < 1000 {
        tokens.to_string()
    } else if tokens < 10_000 {
        format!("{:.1}k", tokens as f64 / 1000.0)
    } else {
        format!("{}k", tokens / 1000)
    }
}

// ============================================================================
// TESTS
// ============================================================================
