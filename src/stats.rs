//! Usage statistics: read the assistant's stats cache and summarize it.
//!
//! Structure:
//! - Pure functions: summary arithmetic relative to a given day
//! - Effect functions: cache file I/O

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use tracing::{debug, warn};

use crate::platform::stats_path;
use crate::types::{DailyActivity, StatsCache, StatsInfo};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Summarize `cache` as seen on `today`.
pub fn compute_stats_info(cache: &StatsCache, today: NaiveDate) -> StatsInfo {
    let today_key = today.format(DATE_FORMAT).to_string();
    let today_entry = cache.daily_activity.iter().find(|d| d.date == today_key);

    StatsInfo {
        coding_days: coding_days(&cache.first_session_date, today),
        active_days: cache.daily_activity.len() as u64,
        streak: streak(&cache.daily_activity, today),
        total_sessions: cache.total_sessions,
        total_messages: cache.total_messages,
        today_messages: today_entry.map_or(0, |d| d.message_count),
        today_sessions: today_entry.map_or(0, |d| d.session_count),
        peak_hour: peak_hour(cache.hour_counts.iter()),
    }
}

/// Calendar days since the first session, counting the first day.
///
/// Zero when the date is missing or unparseable.
fn coding_days(first_session: &str, today: NaiveDate) -> u64 {
    let Ok(first) = DateTime::parse_from_rfc3339(first_session) else {
        return 0;
    };
    let days = (today - first.date_naive()).num_days() + 1;
    days.max(1) as u64
}

/// Consecutive active days ending today or yesterday.
fn streak(activity: &[DailyActivity], today: NaiveDate) -> u64 {
    let dates: BTreeSet<NaiveDate> = activity
        .iter()
        .filter_map(|d| NaiveDate::parse_from_str(&d.date, DATE_FORMAT).ok())
        .collect();

    let Some(&latest) = dates.iter().next_back() else {
        return 0;
    };
    if latest != today && Some(latest) != today.pred_opt() {
        return 0;
    }

    let mut count = 0;
    let mut expected = Some(latest);
    for &date in dates.iter().rev() {
        if Some(date) != expected {
            break;
        }
        count += 1;
        expected = date.pred_opt();
    }
    count
}

/// Busiest hour; ties go to the earlier hour. None if nothing counted.
fn peak_hour<'a>(counts: impl Iterator<Item = (&'a String, &'a u64)>) -> Option<(u32, u64)> {
    counts
        .filter_map(|(hour, &count)| hour.parse::<u32>().ok().map(|h| (h, count)))
        .filter(|&(_, count)| count > 0)
        .min_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
}

/// Badge earned by the summary, highest tier first.
///
/// Message milestones beat session milestones, which beat streaks, which
/// beat long-term activity.
pub fn achievement(info: &StatsInfo) -> Option<&'static str> {
    let badge = match info.total_messages {
        1000.. => "🏆 Wordsmith",
        500.. => "🥇 Chatterbox",
        100.. => "🥈 Rising talker",
        _ => match info.total_sessions {
            100.. => "👑 Session royalty",
            50.. => "⭐ Session expert",
            _ => match info.streak {
                30.. => "🔥 Month-long streak",
                7.. => "💪 Week-long streak",
                3.. => "✊ Hat trick",
                _ if info.active_days >= 30 => "🎖️ Veteran",
                _ => return None,
            },
        },
    };
    Some(badge)
}

/// Emoji for the time of day an hour falls in.
pub fn hour_emoji(hour: u32) -> &'static str {
    match hour {
        22.. | 0..5 => "🌙",
        18.. => "🌆",
        12.. => "☀️",
        _ => "🌅",
    }
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Load and summarize the stats cache in `dir` relative to `today`.
///
/// None when the file is absent or unreadable; the second line simply
/// disappears in that case.
pub fn load_stats(dir: &Path, today: NaiveDate) -> Option<StatsInfo> {
    let path = stats_path(dir);
    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no stats cache");
            return None;
        }
    };

    match serde_json::from_str::<StatsCache>(&contents) {
        Ok(cache) => Some(compute_stats_info(&cache, today)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable stats cache");
            None
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
