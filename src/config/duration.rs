//! Duration parsing utilities.

use crate::error::ConfigError;
use std::time::Duration;

/// Parse a duration string like "1h", "30m", "300s", "300".
/// Supports:
/// - Plain numbers (interpreted as seconds): "300"
/// - Seconds suffix: "300s"
/// - Minutes suffix: "30m"
/// - Hours suffix: "1h"
pub fn parse_duration(s: &str) -> Result<Duration, ConfigError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ConfigError::InvalidTimeout("empty duration string".to_string()));
    }

    let (num_str, unit) = if let Some(n) = s.strip_suffix('h') {
        (n, 3600)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: u64 = num_str
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(format!("invalid duration value: {s}")))?;
    value
        .checked_mul(unit)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout(format!("duration out of range: {s}")))
}
