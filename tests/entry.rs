#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempi::libs::entry::{Hours, LogEntry, RemoteId};
    use tempi::libs::error::TempiError;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_hours_display() {
        let cases = [
            ("8", "8.0"),
            ("8.0", "8.0"),
            ("10", "10.0"),
            ("1.5", "1.5"),
            ("0.25", "0.25"),
            ("2.10", "2.1"),
            ("0.1", "0.1"),
        ];
        for (input, shown) in cases {
            assert_eq!(Hours::parse(input).unwrap().to_string(), shown, "displaying {}", input);
        }
        assert_eq!(Hours::from_seconds(60).to_string(), "0.02");
        assert_eq!(Hours::from_seconds(5400).to_string(), "1.5");
    }

    #[test]
    fn test_hours_are_rounded_to_seconds() {
        assert_eq!(Hours::parse("1.5").unwrap().seconds(), 5400);
        assert_eq!(Hours::parse("0.3333").unwrap().seconds(), 1200);
        assert_eq!(Hours::parse("1.5").unwrap(), Hours::parse("1.50").unwrap());
        assert!(Hours::parse("0.0001").is_err());
    }

    #[test]
    fn test_description_round_trip() {
        let with_comment = LogEntry::new(date("2023-02-21"), "MEET-1", "", Hours::parse("1").unwrap(), "Meetings", "stupid dumb meeting");
        assert_eq!(with_comment.description(), "Meetings\nstupid dumb meeting");
        assert_eq!(
            LogEntry::split_description(&with_comment.description()),
            ("Meetings".to_string(), "stupid dumb meeting".to_string())
        );

        let plain = LogEntry::new(date("2023-02-21"), "FOO-1", "", Hours::parse("5").unwrap(), "implementing feature", "");
        assert_eq!(plain.description(), "implementing feature");
        assert_eq!(
            LogEntry::split_description(&plain.description()),
            ("implementing feature".to_string(), String::new())
        );
    }

    #[test]
    fn test_equality_ignores_remote_id() {
        let entry = LogEntry::new(date("2023-02-21"), "FOO-1", "dev", Hours::parse("5").unwrap(), "x", "");
        assert_eq!(entry.clone().with_remote_id(RemoteId(7)), entry);
        assert_eq!(RemoteId(7).to_string(), "7");
    }

    #[test]
    fn test_remote_validation() {
        let entry = LogEntry::new(date("2023-02-21"), "", "", Hours::parse("5").unwrap(), "x", "");
        assert!(matches!(entry.validate_for_remote().unwrap_err(), TempiError::Validation { .. }));

        let empty = LogEntry::new(date("2023-02-21"), "FOO-1", "", Hours::from_seconds(0), "x", "");
        assert!(empty.validate_for_remote().is_err());
    }
}
