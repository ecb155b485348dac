//! Admin login attempt audit model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded admin login attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAttempt {
    pub id: Uuid,
    pub username: String,
    pub ip_address: Option<String>,
    pub success: bool,
    pub attempted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLoginAttempt {
    pub username: String,
    pub ip_address: Option<String>,
    pub success: bool,
}

/// Counts failed attempts in a slice of recent attempts.
pub fn count_failures(attempts: &[LoginAttempt]) -> usize {
    attempts.iter().filter(|a| !a.success).count()
}

/// Start of a `minutes`-long lookback window ending at `now`.
///
/// Windows too large to represent start at the Unix epoch; windows too far
/// in the negative direction collapse to `now`.
pub fn window_start(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    Duration::try_minutes(minutes)
        .and_then(|window| now.checked_sub_signed(window))
        .map(|start| start.max(DateTime::UNIX_EPOCH))
        .unwrap_or(if minutes > 0 { DateTime::UNIX_EPOCH } else { now })
}
