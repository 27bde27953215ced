//! Configuration for the attendance module

use chrono::NaiveTime;
use serde::Deserialize;

/// Attendance configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttendanceConfig {
    /// Workday start, "HH:MM"
    #[serde(default = "default_workday_start")]
    pub workday_start: String,

    /// Check-ins within this many minutes of the start still count on-time
    #[serde(default = "default_late_grace_minutes")]
    pub late_grace_minutes: u32,
}

impl AttendanceConfig {
    /// Parse the configured workday start
    pub fn workday_start_time(&self) -> anyhow::Result<NaiveTime> {
        NaiveTime::parse_from_str(&self.workday_start, "%H:%M")
            .map_err(|e| anyhow::anyhow!("invalid workday_start '{}': {}", self.workday_start, e))
    }
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            workday_start: default_workday_start(),
            late_grace_minutes: default_late_grace_minutes(),
        }
    }
}

fn default_workday_start() -> String {
    "08:00".to_string()
}

fn default_late_grace_minutes() -> u32 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_start_parses() {
        let cfg = AttendanceConfig::default();
        assert!(cfg.workday_start_time().is_ok());
    }

    #[test]
    fn garbage_start_is_rejected() {
        let cfg = AttendanceConfig {
            workday_start: "around nine".to_string(),
            ..Default::default()
        };
        assert!(cfg.workday_start_time().is_err());
    }
}
