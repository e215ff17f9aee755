use super::*;

fn test_parser() -> TimestampParser {
    let today = NaiveDate::from_ymd_opt(2025, 5, 24).unwrap();
    TimestampParser::new(today)
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

// clock
#[test]
fn test_parse_clock() {
    let parser = test_parser();
    assert_eq!(parser.parse("[00:02:15]"), Some(at(2025, 5, 24, 0, 2, 15)));
    assert_eq!(
        parser.parse("[18:40:05.250] trailing text"),
        NaiveDate::from_ymd_opt(2025, 5, 24)
            .unwrap()
            .and_hms_milli_opt(18, 40, 5, 250)
    );
}

#[test]
fn test_parse_clock_rejects_out_of_range() {
    let parser = test_parser();
    assert_eq!(parser.parse("[24:00:00]"), None);
    assert_eq!(parser.parse("[12:60:00]"), None);
    assert_eq!(parser.parse("[12:00:61]"), None);
    assert_eq!(parser.parse("[12:00:00.12]"), None);
    assert_eq!(parser.parse("[1:00:00]"), None);
    assert_eq!(parser.parse("note [12:00:00]"), None);
}

// calendar
#[test]
fn test_parse_calendar() {
    let parser = test_parser();
    assert_eq!(
        parser.parse("5/24/2025 6:40 PM"),
        Some(at(2025, 5, 24, 18, 40, 0))
    );
    assert_eq!(
        parser.parse("12/1/2024 at 12:05AM"),
        Some(at(2024, 12, 1, 0, 5, 0))
    );
    assert_eq!(
        parser.parse("1/2/2025 12:30 PM"),
        Some(at(2025, 1, 2, 12, 30, 0))
    );
}

#[test]
fn test_parse_calendar_rejects_invalid_dates() {
    let parser = test_parser();
    assert_eq!(parser.parse("13/40/2025 6:40 PM"), None);
    assert_eq!(parser.parse("2/30/2025 6:40 PM"), None);
    assert_eq!(parser.parse("5/24/2025 13:40 PM"), None);
    assert_eq!(parser.parse("5/24/2025 0:40 AM"), None);
    assert_eq!(parser.parse("5/24/2025 6:75 PM"), None);
    assert_eq!(parser.parse("5/24/20256 6:40 PM"), None);
    assert_eq!(parser.parse("5/24/2025 6:40"), None);
}

// relative
#[test]
fn test_parse_relative() {
    let parser = test_parser();
    assert_eq!(
        parser.parse("Today at 6:40 PM"),
        Some(at(2025, 5, 24, 18, 40, 0))
    );
    assert_eq!(
        parser.parse("Yesterday at 11:59 PM"),
        Some(at(2025, 5, 23, 23, 59, 0))
    );
    assert_eq!(parser.parse("Today at 13:00 PM"), None);
    assert_eq!(parser.parse("today at 6:40 PM"), None);
}

#[test]
fn test_formats_are_mutually_comparable() {
    let parser = test_parser();
    let clock = parser.parse("[00:02:15]").unwrap();
    let calendar = parser.parse("5/24/2025 6:40 PM").unwrap();
    let relative = parser.parse("Today at 6:40 PM").unwrap();

    assert!(clock < calendar);
    assert_eq!(calendar, relative);
}

#[test]
fn test_restricted_formats() {
    let today = NaiveDate::from_ymd_opt(2025, 5, 24).unwrap();
    let parser = TimestampParser::with_formats(today, vec![TimestampFormat::Calendar]);
    assert!(parser.is_timestamp("5/24/2025 6:40 PM"));
    assert!(!parser.is_timestamp("[00:02:15]"));
    assert!(!parser.is_timestamp("Today at 6:40 PM"));
}

#[test]
fn test_non_timestamps() {
    let parser = test_parser();
    assert!(!parser.is_timestamp("Alice died to Fire (0:45)"));
    assert!(!parser.is_timestamp("Nexus-King #3   (4:33)"));
    assert!(!parser.is_timestamp(""));
}

#[test]
fn test_format_from_str() {
    assert_eq!("Clock".parse::<TimestampFormat>(), Ok(TimestampFormat::Clock));
    assert!("iso".parse::<TimestampFormat>().is_err());
}
