use crate::error::{BetError, Result};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// chrono pattern for the record timestamp (yyyyMMddHHmm)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Number of characters in a formatted timestamp
pub const TIMESTAMP_LEN: usize = 12;

/// Columns per stored line: timestamp, sport, event, bet type, odds, amount
pub const FIELD_COUNT: usize = 6;

/// A single wager as stored in the bets file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    pub timestamp: String,
    pub sport: String,
    pub event: String,
    pub bet_type: String,
    pub odds: f64,
    pub amount: f64,
}

impl BetRecord {
    /// Build a record stamped with the current local time
    ///
    /// Every failing field is named in the returned error, e.g.
    /// `invalid bet fields: event (empty), odds (must be positive)`.
    pub fn new(sport: &str, event: &str, bet_type: &str, odds: f64, amount: f64) -> Result<Self> {
        let mut problems = Vec::new();

        for (name, value) in [("sport", sport), ("event", event), ("bet type", bet_type)] {
            if value.is_empty() {
                problems.push(format!("{} (empty)", name));
            } else if value.contains(['\n', '\r']) {
                problems.push(format!("{} (contains a line break)", name));
            }
        }

        for (name, value) in [("odds", odds), ("amount", amount)] {
            if !is_positive(value) {
                problems.push(format!("{} (must be positive)", name));
            }
        }

        if !problems.is_empty() {
            return Err(BetError::InvalidArgument(format!(
                "invalid bet fields: {}",
                problems.join(", ")
            )));
        }

        Ok(Self {
            timestamp: current_timestamp(),
            sport: sport.to_string(),
            event: event.to_string(),
            bet_type: bet_type.to_string(),
            odds,
            amount,
        })
    }

    /// Encode as a single CSV line without the trailing newline
    pub fn to_line(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.serialize(self)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| BetError::Csv(e.into_error().into()))?;
        let line = String::from_utf8(bytes)
            .map_err(|e| BetError::InvalidArgument(format!("record is not valid UTF-8: {}", e)))?;
        Ok(line.trim_end_matches('\n').to_string())
    }

    /// Decode one stored line, or `None` when it is malformed
    ///
    /// A line is usable when it has exactly six fields and both odds and
    /// amount parse as numbers.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::Fields)
            .from_reader(line.as_bytes());
        let record = reader.records().next()?.ok()?;

        if record.len() != FIELD_COUNT {
            return None;
        }

        record.deserialize::<BetRecord>(None).ok()
    }

    /// Timestamp as `yyyy-mm-dd HH:MM` when it is well formed, verbatim otherwise
    pub fn display_timestamp(&self) -> String {
        if !is_valid_timestamp(&self.timestamp) {
            return self.timestamp.clone();
        }
        match NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT) {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{:<16} | {:<12} | {:<24} | {:<10} | {:>8.2} | {:>10.2}",
            self.display_timestamp(),
            self.sport,
            self.event,
            self.bet_type,
            self.odds,
            self.amount
        )
    }
}

/// Current local time in the stored timestamp format
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// True for a 12 character, digits-only timestamp
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    timestamp.len() == TIMESTAMP_LEN && timestamp.chars().all(|c| c.is_ascii_digit())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bet_is_stamped() {
        let bet = BetRecord::new("Football", "TeamA vs TeamB", "WIN", 1.8, 75.5).unwrap();
        assert!(is_valid_timestamp(&bet.timestamp));
        assert_eq!(bet.sport, "Football");
        assert_eq!(bet.bet_type, "WIN");
    }

    #[test]
    fn test_new_bet_names_every_failing_field() {
        let err = BetRecord::new("", "Match", "", 0.0, -3.0).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, BetError::InvalidArgument(_)));
        assert!(message.contains("sport"));
        assert!(message.contains("bet type"));
        assert!(message.contains("odds"));
        assert!(message.contains("amount"));
        assert!(!message.contains("event"));
    }

    #[test]
    fn test_new_bet_rejects_nan_and_line_breaks() {
        assert!(BetRecord::new("Football", "Match", "WIN", f64::NAN, 10.0).is_err());
        assert!(BetRecord::new("Football", "Match", "WIN", 1.5, f64::INFINITY).is_err());
        assert!(BetRecord::new("Football", "Line 1\nLine 2", "WIN", 1.5, 10.0).is_err());
    }

    #[test]
    fn test_to_line_keeps_field_order() {
        let bet = BetRecord::new("Football", "TeamA vs TeamB", "WIN", 1.8, 75.5).unwrap();
        let line = bet.to_line().unwrap();
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), FIELD_COUNT);
        assert_eq!(fields[0], bet.timestamp);
        assert_eq!(&fields[1..], &["Football", "TeamA vs TeamB", "WIN", "1.8", "75.5"]);
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_comma_in_event_survives_decoding() {
        let bet = BetRecord::new("Tennis", "Nadal, Rafael vs Federer", "WIN", 2.1, 40.0).unwrap();
        let decoded = BetRecord::from_line(&bet.to_line().unwrap()).unwrap();
        assert_eq!(decoded.event, "Nadal, Rafael vs Federer");
    }

    #[test]
    fn test_from_line_rejects_malformed_rows() {
        assert!(BetRecord::from_line("InvalidDataWithoutCommas").is_none());
        assert!(BetRecord::from_line("20231201,John,Doe,1.8,75.5").is_none());
        assert!(BetRecord::from_line("20231201,John,Doe,X,1.8,75.5,extra").is_none());
        assert!(BetRecord::from_line("20231201,John,Doe,X,invalid_odds,75.5").is_none());
        assert!(BetRecord::from_line("20231201,John,Doe,X,1.8,invalid_amount").is_none());
        let padded = BetRecord::from_line("20231201,John,Doe,X, 1.8 ,75").unwrap();
        assert_eq!(padded.odds, 1.8);
        assert_eq!(padded.amount, 75.0);
    }

    #[test]
    fn test_display_timestamp() {
        let mut bet = BetRecord::from_line("202312011830,John,Doe,X,1.8,75.5").unwrap();
        assert_eq!(bet.display_timestamp(), "2023-12-01 18:30");
        bet.timestamp = "20231201".to_string();
        assert_eq!(bet.display_timestamp(), "20231201");
    }

    #[test]
    fn test_format_uses_two_decimals() {
        let bet = BetRecord::from_line("20231201,John,Doe,12345678A,1.8,75.5").unwrap();
        let row = bet.format();
        assert!(row.contains("1.80"));
        assert!(row.contains("75.50"));
        assert!(row.contains("John"));
    }
}
