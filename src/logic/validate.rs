use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would admit other Unicode digits
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").expect("date pattern compiles")
    })
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
        )
        .expect("identifier pattern compiles")
    })
}

/// Parse a `day/month/year` date typed by a user.
///
/// Day and month take one or two digits, the year exactly four. Returns
/// `None` for anything that does not match the grammar or does not name a
/// real calendar day (30/02, 29/02 outside leap years, 31/04...).
pub fn validate_date(text: &str) -> Option<NaiveDate> {
    let captures = date_pattern().captures(text)?;

    let day: u32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    // from_ymd_opt rejects impossible days instead of rolling them over
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    if date.year() != year || date.month() != month || date.day() != day {
        return None;
    }

    Some(date)
}

/// Check that `text` is a hyphenated 8-4-4-4-12 hexadecimal identifier.
pub fn validate_identifier(text: &str) -> bool {
    identifier_pattern().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let date = validate_date("25/12/2023").unwrap();
        assert_eq!(date.day(), 25);
        assert_eq!(date.month(), 12);
        assert_eq!(date.year(), 2023);
    }

    #[test]
    fn test_single_digit_day_and_month() {
        assert_eq!(
            validate_date("1/1/2023"),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        assert!(validate_date("01/01/2023").is_some());
    }

    #[test]
    fn test_malformed_dates() {
        for text in [
            "25-12-2023",
            "25/12/23",
            "2023/12/25",
            "",
            "25/12/2023 ",
            " 25/12/2023",
            "125/12/2023",
            "25/12/20231",
            "25/12",
            "a5/12/2023",
            "٢٥/12/2023",
        ] {
            assert!(validate_date(text).is_none(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_out_of_range_dates() {
        assert!(validate_date("32/12/2023").is_none());
        assert!(validate_date("25/13/2023").is_none());
        assert!(validate_date("0/12/2023").is_none());
        assert!(validate_date("25/0/2023").is_none());
        assert!(validate_date("31/04/2023").is_none());
    }

    #[test]
    fn test_february() {
        assert!(validate_date("30/02/2023").is_none());
        assert!(validate_date("29/02/2023").is_none());
        assert!(validate_date("28/02/2023").is_some());
        assert!(validate_date("29/02/2024").is_some());
        assert!(validate_date("29/02/1900").is_none());
        assert!(validate_date("29/02/2000").is_some());
    }

    #[test]
    fn test_valid_identifier() {
        assert!(validate_identifier("12345678-1234-1234-1234-123456789012"));
        assert!(validate_identifier("ABCDEF01-abcd-EF23-4567-89abcdefABCD"));
    }

    #[test]
    fn test_generated_uuids_are_accepted() {
        for _ in 0..16 {
            let id = uuid::Uuid::new_v4();
            assert!(validate_identifier(&id.to_string()));
            assert!(validate_identifier(&id.to_string().to_uppercase()));
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        let valid = "12345678-1234-1234-1234-123456789012";

        // one character removed, one added, one non-hex substituted
        assert!(!validate_identifier(&valid[1..]));
        assert!(!validate_identifier(&format!("{valid}0")));
        assert!(!validate_identifier("12345678-1234-1234-1234-12345678901g"));

        assert!(!validate_identifier("12345678-1234-1234-1234"));
        assert!(!validate_identifier("gggggggg-gggg-gggg-gggg-gggggggggggg"));
        assert!(!validate_identifier("12345678-ABCD-EFGH-IJKL-123456789012"));
        assert!(!validate_identifier("123456781234-1234-1234-123456789012-"));
        assert!(!validate_identifier("12345678123412341234123456789012"));
        assert!(!validate_identifier("{12345678-1234-1234-1234-123456789012}"));
        assert!(!validate_identifier(""));
    }
}
