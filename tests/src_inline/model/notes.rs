use super::*;

#[test]
fn test_add_and_replace() {
    let mut notes = Notes::new();
    assert!(notes.add("2024-01-10", "late dinner"));
    assert!(notes.add("2024-01-10", "  travel day "));
    let d = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    assert_eq!(notes.get(d), Some("travel day"));
    assert_eq!(notes.len(), 1);
}

#[test]
fn test_blank_text_and_bad_key_ignored() {
    let mut notes = Notes::new();
    assert!(!notes.add("2024-01-10", "   "));
    assert!(!notes.add("yesterday", "ran 5k"));
    assert!(notes.is_empty());
}

#[test]
fn test_iter_in_date_order() {
    let mut notes = Notes::new();
    notes.add("2024-02-01", "b");
    notes.add("2024-01-01", "a");
    let keys: Vec<String> = notes.iter().map(|(d, _)| d.to_string()).collect();
    assert_eq!(keys, vec!["2024-01-01", "2024-02-01"]);
}
