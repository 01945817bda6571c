use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A single CPAP usage event. Both fields are stored as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub date: String,
    pub time: String,
}

impl UsageRecord {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    pub fn now() -> Self {
        Self::at(Local::now())
    }

    pub fn at(ts: DateTime<Local>) -> Self {
        Self {
            date: ts.format(DATE_FORMAT).to_string(),
            time: ts.format(TIME_FORMAT).to_string(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_at_formats_date_and_time() {
        let ts = Local.with_ymd_and_hms(2024, 1, 2, 23, 15, 42).unwrap();
        let record = UsageRecord::at(ts);
        assert_eq!(record.date(), "2024-01-02");
        assert_eq!(record.time(), "23:15");
    }

    #[test]
    fn test_fields_are_opaque() {
        let record = UsageRecord::new("last tuesday", "late");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"last tuesday","time":"late"}"#);
    }
}
