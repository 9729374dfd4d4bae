//! Status-line rendering.
//!
//! Structure:
//! - Types: everything rendering needs besides the session snapshot
//! - Pure functions: snapshot + preferences + context → text
//! - Effect functions: gather the context from git, the stats cache, and
//!   the processing state file

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::animation::{heartbeat, nyan_frame, rainbow_progress_bar, random_status};
use crate::format::{format_cost, format_duration, format_tokens};
use crate::git::git_info;
use crate::preferences::Preferences;
use crate::processing::is_processing;
use crate::stats::{achievement, hour_emoji, load_stats};
use crate::theme::{Theme, paint};
use crate::types::{GitInfo, SessionData, StatsInfo};

const SEPARATOR: &str = " │ ";
const CONTEXT_BAR_WIDTH: i32 = 10;

// ============================================================================
// TYPES
// ============================================================================

/// Environment state read alongside the session snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    /// None outside a repository or when the git field is hidden.
    pub git: Option<GitInfo>,
    /// None when the stats cache is missing or the second line is off.
    pub stats: Option<StatsInfo>,
    pub processing: bool,
    /// Wall clock driving the animations.
    pub now_millis: i64,
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Render one or two lines, without a trailing newline.
pub fn render(
    session: &SessionData,
    prefs: &Preferences,
    ctx: &RenderContext,
    theme: &Theme,
) -> String {
    let line1 = render_line1(session, prefs, ctx, theme);
    let line2 = match &ctx.stats {
        Some(stats) if prefs.line2_enabled => render_line2(stats, prefs, ctx.now_millis, theme),
        _ => String::new(),
    };

    if line2.is_empty() {
        line1
    } else {
        format!("{}\n{}", line1, line2)
    }
}

fn join(parts: &[String], theme: &Theme) -> String {
    parts.join(&paint(theme.separator, SEPARATOR).to_string())
}

fn render_line1(
    session: &SessionData,
    prefs: &Preferences,
    ctx: &RenderContext,
    theme: &Theme,
) -> String {
    let mut parts = Vec::new();
    let cost = &session.cost;
    let window = &session.context_window;

    if prefs.line1_field("model") {
        let name = match session.model.display_name.as_str() {
            "" => "Unknown",
            name => name,
        };
        parts.push(paint(theme.model, format!("👾 {}", name)).to_string());
    }

    if prefs.line1_field("dir") {
        let dir = dir_label(&session.workspace.current_dir);
        parts.push(paint(theme.directory, format!("🗂️ {}", dir)).to_string());
    }

    if let Some(git) = ctx.git.as_ref().filter(|_| prefs.line1_field("git")) {
        let (style, mark) = if git.has_changes {
            (theme.git_dirty, "*")
        } else {
            (theme.git_clean, "")
        };
        parts.push(paint(style, format!("🌿 {}{}", git.branch, mark)).to_string());
    }

    if prefs.line1_field("context") {
        let percent = session.context_percent();
        let bar = rainbow_progress_bar(percent, CONTEXT_BAR_WIDTH, theme);
        let label = paint(theme.context(percent), format!("{:.1}%", percent));
        parts.push(format!("{} {}", bar, label));
    }

    if prefs.line1_field("cost") && cost.total_cost_usd > 0.0 {
        parts.push(paint(theme.cost, format!("💰 {}", format_cost(cost.total_cost_usd))).to_string());
    }

    if prefs.line1_field("changes") && (cost.total_lines_added > 0 || cost.total_lines_removed > 0) {
        let mut changes = Vec::new();
        if cost.total_lines_added > 0 {
            changes.push(paint(theme.added, format!("+{}", cost.total_lines_added)).to_string());
        }
        if cost.total_lines_removed > 0 {
            changes.push(paint(theme.removed, format!("-{}", cost.total_lines_removed)).to_string());
        }
        parts.push(changes.join(" "));
    }

    if prefs.line1_field("duration") && cost.total_duration_ms > 0 {
        let text = format!("⏱️ {}", format_duration(cost.total_duration_ms));
        parts.push(paint(theme.duration, text).to_string());
    }

    if prefs.line1_field("tokens") && (window.total_input_tokens > 0 || window.total_output_tokens > 0) {
        let text = format!(
            "📥{} 📤{}",
            format_tokens(window.total_input_tokens),
            format_tokens(window.total_output_tokens)
        );
        parts.push(paint(theme.tokens, text).to_string());
    }

    if prefs.line1_field("nyan") {
        let indicator = if ctx.processing { "⏳" } else { "⌛💯" };
        parts.push(format!("{}{}", nyan_frame(ctx.now_millis, theme), indicator));
    }

    if prefs.line1_field("heartbeat") {
        parts.push(paint(theme.heartbeat, heartbeat(ctx.now_millis)).to_string());
    }

    join(&parts, theme)
}

/// Last path component; `.` for an empty path and `/` for the root.
fn dir_label(path: &str) -> String {
    match Path::new(path).file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None if path.is_empty() => ".".to_string(),
        None if path.trim_end_matches('/').is_empty() => "/".to_string(),
        None => path.to_string(),
    }
}

/// Statistics line. Zero-valued statistics are left out; empty when
/// nothing remains.
fn render_line2(stats: &StatsInfo, prefs: &Preferences, now_millis: i64, theme: &Theme) -> String {
    // (key, value, style, emoji, unit)
    let counters = [
        ("codingDays", stats.coding_days, theme.coding_days, "📅", "days"),
        ("activeDays", stats.active_days, theme.active_days, "🔥", "active"),
        ("streak", stats.streak, theme.streak, "⚡", "streak"),
        ("sessions", stats.total_sessions, theme.sessions, "💬", "sessions"),
        ("messages", stats.total_messages, theme.messages, "🗣️", "msgs"),
        ("todayMessages", stats.today_messages, theme.messages, "📈", "today"),
    ];

    let mut parts: Vec<String> = counters
        .into_iter()
        .filter(|&(key, value, ..)| value > 0 && prefs.shows_line2_field(key))
        .map(|(_, value, style, emoji, unit)| {
            paint(style, format!("{} {} {}", emoji, value, unit)).to_string()
        })
        .collect();

    if let Some((hour, _)) = stats.peak_hour.filter(|_| prefs.shows_line2_field("peakHour")) {
        let text = format!("{} {}:00", hour_emoji(hour), hour);
        parts.push(paint(theme.peak_hour, text).to_string());
    }

    if prefs.shows_line2_field("achievement") {
        if let Some(badge) = achievement(stats) {
            parts.push(paint(theme.achievement, badge).to_string());
        }
    }

    if prefs.shows_line2_field("randomStatus") {
        parts.push(paint(theme.mood, random_status(now_millis)).to_string());
    }

    join(&parts, theme)
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Collect the render context for `session`.
///
/// `dir` holds the state and stats files. Sources for hidden fields are
/// not consulted.
pub fn gather(
    dir: &Path,
    session: &SessionData,
    prefs: &Preferences,
    now: DateTime<Local>,
) -> RenderContext {
    let git = if prefs.line1_field("git") {
        let workdir = match session.workspace.current_dir.as_str() {
            "" => Path::new("."),
            d => Path::new(d),
        };
        git_info(workdir)
    } else {
        None
    };

    let stats = if prefs.line2_enabled {
        load_stats(dir, now.date_naive())
    } else {
        None
    };

    let ctx = RenderContext {
        git,
        stats,
        processing: is_processing(dir),
        now_millis: now.timestamp_millis(),
    };
    debug!(
        git = ctx.git.is_some(),
        stats = ctx.stats.is_some(),
        processing = ctx.processing,
        "gathered render context"
    );
    ctx
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::LINE2_FIELDS;
    use crate::types::{ContextWindow, CostInfo, ModelInfo, UsageDetail, WorkspaceInfo};
    use std::fs;
    use tempfile::TempDir;

    fn session() -> SessionData {
        SessionData {
            model: ModelInfo {
                display_name: "Opus".into(),
            },
            workspace: WorkspaceInfo {
                current_dir: "/home/me/nyan".into(),
            },
            cost: CostInfo {
                total_cost_usd: 0.5,
                total_lines_added: 10,
                total_lines_removed: 2,
                total_duration_ms: 90_000,
            },
            context_window: ContextWindow {
                context_window_size: 100_000,
                total_input_tokens: 2_000,
                total_output_tokens: 500,
                current_usage: Some(UsageDetail {
                    input_tokens: 20_000,
                    cache_creation_input_tokens: 0,
                    cache_read_input_tokens: 5_000,
                }),
            },
        }
    }

    fn stats() -> StatsInfo {
        StatsInfo {
            coding_days: 12,
            active_days: 8,
            streak: 3,
            total_sessions: 20,
            total_messages: 80,
            today_messages: 6,
            today_sessions: 1,
            peak_hour: Some((14, 9)),
        }
    }

    fn ctx() -> RenderContext {
        RenderContext {
            git: Some(GitInfo {
                branch: "main".into(),
                has_changes: true,
            }),
            stats: Some(stats()),
            processing: true,
            now_millis: 0,
        }
    }

    fn render_default(session: &SessionData, ctx: &RenderContext) -> String {
        render(session, &Preferences::default(), ctx, &Theme::default())
    }

    // -- line 1 --

    #[test]
    fn line1_shows_every_segment() {
        let out = render_default(&session(), &ctx());
        let line1 = out.lines().next().unwrap();
        for needle in [
            "👾 Opus", "🗂️ nyan", "🌿 main*", "25.0%", "💰 $0.500", "+10", "-2", "⏱️ 1m30s",
            "📥2.0k 📤500", "⏳",
        ] {
            assert!(line1.contains(needle), "missing {:?} in {:?}", needle, line1);
        }
        assert!(line1.contains(heartbeat(0)));
        assert_eq!(line1.matches(SEPARATOR).count(), 9);
    }

    #[test]
    fn empty_model_name_is_unknown() {
        let mut s = session();
        s.model.display_name.clear();
        assert!(render_default(&s, &ctx()).contains("👾 Unknown"));
    }

    #[test]
    fn zero_values_are_left_out() {
        let s = SessionData {
            model: ModelInfo {
                display_name: "M".into(),
            },
            ..Default::default()
        };
        let out = render_default(&s, &RenderContext::default());
        assert!(!out.contains("💰"));
        assert!(!out.contains("⏱️"));
        assert!(!out.contains("📥"));
        assert!(out.contains("🗂️ ."));
        assert!(!out.contains("🌿"));
        assert!(out.contains("0.0%"));
    }

    #[test]
    fn directory_label_edge_cases() {
        assert_eq!(dir_label("/home/me/nyan"), "nyan");
        assert_eq!(dir_label("/home/me/nyan/"), "nyan");
        assert_eq!(dir_label(""), ".");
        assert_eq!(dir_label("/"), "/");
        assert_eq!(dir_label(".."), "..");
    }

    #[test]
    fn negative_line_counts_are_hidden() {
        let mut s = session();
        s.cost.total_lines_added = -5;
        s.cost.total_lines_removed = 0;
        let out = render_default(&s, &ctx());
        assert!(!out.contains("+-5"));
        assert!(!out.contains("-5"));
    }

    #[test]
    fn only_removals_shows_minus_only() {
        let mut s = session();
        s.cost.total_lines_added = 0;
        let out = render_default(&s, &ctx());
        assert!(out.contains("-2"));
        assert!(!out.contains("+0"));
    }

    #[test]
    fn clean_tree_has_no_dirty_mark() {
        let mut c = ctx();
        c.git = Some(GitInfo {
            branch: "dev".into(),
            has_changes: false,
        });
        let out = render_default(&session(), &c);
        assert!(out.contains("🌿 dev"));
        assert!(!out.contains("dev*"));
    }

    #[test]
    fn completed_indicator() {
        let mut c = ctx();
        c.processing = false;
        let out = render_default(&session(), &c);
        assert!(out.contains("⌛💯"));
        assert!(!out.contains("⏳"));
    }

    #[test]
    fn disabled_line1_fields_are_hidden() {
        let mut prefs = Preferences::default();
        prefs.line1.insert("model".into(), false);
        prefs.line1.insert("cost".into(), false);
        let out = render(&session(), &prefs, &ctx(), &Theme::default());
        assert!(!out.contains("👾"));
        assert!(!out.contains("💰"));
        assert!(out.contains("🗂️ nyan"));
    }

    // -- line 2 --

    #[test]
    fn line2_lists_statistics() {
        let out = render_default(&session(), &ctx());
        let line2 = out.lines().nth(1).unwrap();
        for needle in [
            "📅 12 days", "🔥 8 active", "⚡ 3 streak", "💬 20 sessions", "🗣️ 80 msgs",
            "📈 6 today", "☀️ 14:00", "✊ Hat trick",
        ] {
            assert!(line2.contains(needle), "missing {:?} in {:?}", needle, line2);
        }
        assert!(line2.contains(random_status(0)));
    }

    #[test]
    fn master_switch_hides_line2() {
        let mut prefs = Preferences::default();
        prefs.line2_enabled = false;
        let out = render(&session(), &prefs, &ctx(), &Theme::default());
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn missing_stats_hides_line2() {
        let mut c = ctx();
        c.stats = None;
        assert_eq!(render_default(&session(), &c).lines().count(), 1);
    }

    #[test]
    fn all_line2_fields_off_omits_line() {
        let mut prefs = Preferences::default();
        for f in &LINE2_FIELDS {
            prefs.line2.insert(f.key.to_string(), false);
        }
        let out = render(&session(), &prefs, &ctx(), &Theme::default());
        assert!(!out.contains('\n'));
    }

    #[test]
    fn zero_statistics_are_skipped() {
        let mut c = ctx();
        c.stats = Some(StatsInfo::default());
        let out = render_default(&session(), &c);
        let line2 = out.lines().nth(1).unwrap();
        assert!(!line2.contains("📅"));
        assert!(!line2.contains("🔥"));
        assert_eq!(line2, paint(Theme::default().mood, random_status(0)).to_string());
    }

    // -- gather --

    #[test]
    fn gather_skips_hidden_sources() {
        let temp = TempDir::new().unwrap();
        fs::write(
            crate::platform::stats_path(temp.path()),
            r#"{"totalMessages": 5}"#,
        )
        .unwrap();

        let mut prefs = Preferences::default();
        prefs.line1.insert("git".into(), false);
        prefs.line2_enabled = false;

        let c = gather(temp.path(), &SessionData::default(), &prefs, Local::now());
        assert_eq!(c.git, None);
        assert_eq!(c.stats, None);
        assert!(c.processing);
    }

    #[test]
    fn gather_reads_stats_and_state() {
        let temp = TempDir::new().unwrap();
        fs::write(
            crate::platform::stats_path(temp.path()),
            r#"{"totalMessages": 5}"#,
        )
        .unwrap();
        crate::processing::set_status(temp.path(), crate::processing::ProcessingState::Completed)
            .unwrap();

        let mut prefs = Preferences::default();
        prefs.line1.insert("git".into(), false);

        let now = Local::now();
        let c = gather(temp.path(), &SessionData::default(), &prefs, now);
        assert_eq!(c.stats.map(|s| s.total_messages), Some(5));
        assert!(!c.processing);
        assert_eq!(c.now_millis, now.timestamp_millis());
    }
}
