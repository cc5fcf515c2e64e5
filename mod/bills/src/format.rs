//! French display formatting for bill dates and statuses.

use billed_store::Status;
use chrono::{Datelike, NaiveDate};

/// Abbreviated French month names, capitalized the way the UI shows them.
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format a canonical `YYYY-MM-DD` date for display: `2004-04-04` → `4 Avr. 04`.
pub fn format_date(date: &str) -> Result<String, chrono::format::ParseError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    Ok(format!(
        "{} {}. {:02}",
        parsed.day(),
        MONTHS[parsed.month0() as usize],
        parsed.year().rem_euclid(100),
    ))
}

/// Localized label for a bill status. Unknown raw labels pass through.
pub fn format_status(status: &Status) -> String {
    match status {
        Status::Pending => "En attente".to_string(),
        Status::Accepted => "Accepté".to_string(),
        Status::Refused => "Refusé".to_string(),
        Status::Other(raw) => raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_without_leading_zero() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01").unwrap(), "1 Jan. 01");
        assert_eq!(format_date("2023-12-25").unwrap(), "25 Déc. 23");
    }

    #[test]
    fn pads_two_digit_year() {
        assert_eq!(format_date("2003-03-03").unwrap(), "3 Mar. 03");
        assert_eq!(format_date("2010-11-30").unwrap(), "30 Nov. 10");
    }

    #[test]
    fn rejects_non_canonical_dates() {
        assert!(format_date("04/04/2004").is_err());
        assert!(format_date("not a date").is_err());
        assert!(format_date("2004-13-01").is_err());
    }

    #[test]
    fn status_labels() {
        assert_eq!(format_status(&Status::Pending), "En attente");
        assert_eq!(format_status(&Status::Accepted), "Accepté");
        assert_eq!(format_status(&Status::Refused), "Refusé");
    }

    #[test]
    fn unknown_status_passes_through() {
        assert_eq!(format_status(&Status::Other("archived".into())), "archived");
    }
}
