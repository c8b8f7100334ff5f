//! JSON snapshot repository tests.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use payments_types::{PaymentRepository, RepoError};
    use rust_decimal::Decimal;

    use crate::{JsonSnapshotRepo, load_snapshot};

    const SNAPSHOT: &str = r#"{
        "payments": [
            {
                "id": "00000000-0000-0000-0000-000000000001",
                "payment_date": "2024-03-05T10:00:00+01:00",
                "user": { "email": "alice@example.com", "name": "Alice" },
                "items": [
                    { "name": "Book", "regular_price": "10.00", "final_price": "8.00" },
                    { "name": "Lamp", "regular_price": 12, "final_price": 10 }
                ]
            },
            {
                "payment_date": "2024-04-02T09:30:00+02:00",
                "user": { "email": "bob@example.com" },
                "items": [
                    { "name": "Mug", "regular_price": "5.00", "final_price": "5.00" }
                ]
            }
        ]
    }"#;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_open_snapshot_file() {
        let file = write_snapshot(SNAPSHOT);

        let repo = load_snapshot(file.path()).unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.source(), Some(file.path()));
        let payments = repo.find_all();
        assert_eq!(
            payments[0].id.to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
        assert_eq!(payments[0].user.name.as_deref(), Some("Alice"));
        assert_eq!(payments[1].user.email, "bob@example.com");
    }

    #[test]
    fn test_numeric_and_string_prices_parse_exactly() {
        let repo = JsonSnapshotRepo::from_json(SNAPSHOT).unwrap();
        let payments = repo.find_all();

        assert_eq!(payments[0].total_final_price(), Decimal::new(1800, 2));
        assert_eq!(payments[0].total_regular_price(), Decimal::from(22));
    }

    #[test]
    fn test_ids_generated_once_at_load() {
        let repo = JsonSnapshotRepo::from_json(SNAPSHOT).unwrap();
        assert_eq!(repo.find_all()[1].id, repo.find_all()[1].id);
    }

    #[test]
    fn test_snapshot_not_reread_after_open() {
        let file = write_snapshot(SNAPSHOT);
        let repo = JsonSnapshotRepo::open(file.path()).unwrap();

        std::fs::write(file.path(), "[]").unwrap();

        assert_eq!(repo.find_all().len(), 2);
    }

    #[test]
    fn test_bare_array_snapshot() {
        let repo = JsonSnapshotRepo::from_json("[]").unwrap();
        assert!(repo.is_empty());
        assert!(repo.source().is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = JsonSnapshotRepo::open(&missing).unwrap_err();

        assert!(matches!(err, RepoError::Io { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_malformed_snapshot_is_parse_error() {
        let file = write_snapshot(r#"{ "payments": [ { "payment_date": "not a date" } ] }"#);

        let err = JsonSnapshotRepo::open(file.path()).unwrap_err();

        assert!(matches!(err, RepoError::Parse(_)));
    }

    #[test]
    fn test_parse_error_points_at_bad_field() {
        let raw = r#"{
            "payments": [
                {
                    "payment_date": "2024-13-01T00:00:00Z",
                    "user": { "email": "alice@example.com" },
                    "items": []
                }
            ]
        }"#;

        let err = JsonSnapshotRepo::from_json(raw).unwrap_err();

        let RepoError::Parse(ref cause) = err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert_eq!(cause.line(), 4);
        let message = err.to_string();
        assert!(message.contains("line 4"), "{message}");
        assert!(!message.contains("untagged"), "{message}");
    }

    #[test]
    fn test_parse_error_in_bare_array_keeps_position() {
        let raw = "[\n  { \"payment_date\": \"2024-03-01T00:00:00Z\", \"user\": {} }\n]";

        let err = JsonSnapshotRepo::from_json(raw).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("missing field `email`"), "{message}");
        assert!(message.contains("line 2"), "{message}");
    }
}
