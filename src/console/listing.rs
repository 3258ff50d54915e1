use crate::error::{BetError, Result};
use crate::models::BetRecord;
use std::io::Write;
use tracing::debug;

/// Parse every line of `raw` and keep the well-formed bets in file order
pub fn parse_bets(raw: &str) -> Vec<BetRecord> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| {
            let bet = BetRecord::from_line(line);
            if bet.is_none() {
                debug!(line = index + 1, "Skipping malformed bet row");
            }
            bet
        })
        .collect()
}

/// Write the bets stored in `raw` as a table and return how many rows were shown
///
/// Rows with the wrong number of columns, or whose odds or amount are not
/// numbers, are left out without raising an error.
pub fn render_bets<W: Write>(raw: &str, out: &mut W) -> Result<usize> {
    if raw.is_empty() {
        return Err(BetError::InvalidArgument(
            "bet list must not be empty".to_string(),
        ));
    }

    let bets = parse_bets(raw);

    writeln!(
        out,
        "{:<16} | {:<12} | {:<24} | {:<10} | {:>8} | {:>10}",
        "Date", "Sport", "Event", "Bet type", "Odds", "Amount"
    )?;
    for bet in &bets {
        writeln!(out, "{}", bet.format())?;
    }

    Ok(bets.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(raw: &str) -> (usize, String) {
        let mut out = Vec::new();
        let shown = render_bets(raw, &mut out).unwrap();
        (shown, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_render_valid_rows() {
        let (shown, text) = render(
            "20231201,John,Doe,12345678A,1.8,75.5\n20231202,Jane,Smith,87654321B,2.1,65.2",
        );
        assert_eq!(shown, 2);
        assert!(text.contains("John"));
        assert!(text.contains("Jane"));
        assert!(text.contains("1.8"));
        assert!(text.contains("75.50"));
        assert!(text.contains("65.20"));

        let john = text.find("John").unwrap();
        let jane = text.find("Jane").unwrap();
        assert!(john < jane);
    }

    #[test]
    fn test_render_rejects_empty_input() {
        let mut out = Vec::new();
        assert!(matches!(
            render_bets("", &mut out),
            Err(BetError::InvalidArgument(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_skips_bad_odds_and_amount() {
        let (shown, text) = render(
            "20231201,John,Doe,12345678A,invalid_odds,75.5\n20231202,Jane,Smith,87654321B,2.0,65.2",
        );
        assert_eq!(shown, 1);
        assert!(text.contains("Jane"));
        assert!(!text.contains("John"));

        let (shown, text) = render(
            "20231201,John,Doe,12345678A,1.8,invalid_amount\n20231202,Jane,Smith,87654321B,2.0,65.2",
        );
        assert_eq!(shown, 1);
        assert!(!text.contains("John"));
    }

    #[test]
    fn test_render_mixed_rows() {
        let raw = "20231201,John,Doe,12345678A,1.8,75.5\n\
                   InvalidDataWithoutCommas\n\
                   20231202,Jane,Smith,87654321B,2.0,65.2\n\
                   20231203,Bob,Johnson,11111111C,invalid_odds,80.0\n\
                   20231204,Alice,Brown,22222222D,2.5,60.5\n\
                   20231205,Carol,White,2.5\n";
        let (shown, text) = render(raw);
        assert_eq!(shown, 3);
        assert!(text.contains("John"));
        assert!(text.contains("Jane"));
        assert!(text.contains("Alice"));
        assert!(!text.contains("Bob"));
        assert!(!text.contains("Carol"));
    }

    #[test]
    fn test_render_only_malformed_rows_shows_header() {
        let (shown, text) = render("This is a random String without data");
        assert_eq!(shown, 0);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("Sport"));
    }

    #[test]
    fn test_parse_bets_ignores_blank_lines() {
        let bets = parse_bets("\n202401011200,Football,Match,WIN,1.5,10\n\n");
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].amount, 10.0);
    }
}
