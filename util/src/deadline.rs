//! Assignment deadline evaluation.
//!
//! A folder is *active* while `now < due_date`. The instant the clock reaches the due
//! date the folder is expired, so a submission stamped exactly at the deadline is late.
//! Both instants are UTC; no local-time conversion happens here.

use chrono::{DateTime, Utc};
use serde::Serialize;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Result of evaluating a due date against the current instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    pub is_expired: bool,
    /// Human-readable remaining time, only present while active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<String>,
    pub due_date: DateTime<Utc>,
}

/// Returns whether the deadline is still open at `now`.
pub fn is_active(due_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now < due_date
}

/// Evaluates `due_date` against `now`.
pub fn evaluate(due_date: DateTime<Utc>, now: DateTime<Utc>) -> DeadlineStatus {
    if !is_active(due_date, now) {
        return DeadlineStatus {
            is_expired: true,
            time_remaining: None,
            due_date,
        };
    }

    let remaining_ms = (due_date - now).num_milliseconds();
    DeadlineStatus {
        is_expired: false,
        time_remaining: Some(format_remaining(remaining_ms)),
        due_date,
    }
}

/// Renders a positive millisecond span using the coarsest non-zero unit pair:
/// days + hours, else hours + minutes, else minutes alone.
pub fn format_remaining(remaining_ms: i64) -> String {
    let days = remaining_ms / DAY_MS;
    let hours = (remaining_ms % DAY_MS) / HOUR_MS;
    let minutes = (remaining_ms % HOUR_MS) / MINUTE_MS;

    if days > 0 {
        format!("{days} hari {hours} jam")
    } else if hours > 0 {
        format!("{hours} jam {minutes} menit")
    } else {
        format!("{minutes} menit")
    }
}
