// tests/observation_store.rs
//
// Tests for the CSV observation store: header creation, append order,
// sentinel and quoting round-trips.
//
use btcwatch::data_store::ObservationStore;
use btcwatch::models::observation::{ObservationRecord, NOT_AVAILABLE};
use tempfile::tempdir;

fn sample_record(timestamp: &str, price: &str) -> ObservationRecord {
    ObservationRecord {
        timestamp: timestamp.to_string(),
        price: price.to_string(),
        market_cap: "$1.25T".to_string(),
        volume_24h: "$38.1B".to_string(),
        circulating_supply: "19.7M BTC".to_string(),
        price_change_24h: "2.35% (1d)".to_string(),
        bullish_sentiment: "78%".to_string(),
        bearish_sentiment: "22%".to_string(),
    }
}

#[test]
fn creates_store_with_header_when_absent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("observations.csv");
    let store = ObservationStore::new(path.clone());

    store
        .append(&sample_record("2025-08-06 10:00:00", "$63,245.10"))
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header, ObservationRecord::COLUMNS.join(","));
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn load_on_missing_file_returns_empty_and_creates_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("observations.csv");
    let store = ObservationStore::new(path.clone());

    assert!(store.load().unwrap().is_empty());
    assert!(!path.exists());
}

#[test]
fn append_preserves_insertion_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("observations.csv");
    let store = ObservationStore::new(path.clone());

    let first = sample_record("2025-08-06 10:00:00", "$63,245.10");
    let second = sample_record("2025-08-06 11:00:00", "$63,410.55");
    let third = sample_record("2025-08-06 12:00:00", "$62,998.00");

    store.append(&first).unwrap();
    store.append(&second).unwrap();
    store.append(&third).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records, vec![first, second, third]);

    // One header line plus one line per record
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 4);
}

#[test]
fn sentinel_fields_round_trip_unchanged() {
    let dir = tempdir().unwrap();
    let store = ObservationStore::new(dir.path().join("observations.csv"));

    let mut record = sample_record("2025-08-06 10:00:00", "$63,245.10");
    record.market_cap = NOT_AVAILABLE.to_string();
    record.bullish_sentiment = NOT_AVAILABLE.to_string();
    record.bearish_sentiment = NOT_AVAILABLE.to_string();

    store.append(&record).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].market_cap, "N/A");
    assert_eq!(records[0].bullish_sentiment, "N/A");
    assert_eq!(records[0].bearish_sentiment, "N/A");
    // Untouched fields are unaffected
    assert_eq!(records[0].price, "$63,245.10");
}

#[test]
fn fields_containing_commas_survive_rewrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("observations.csv");
    let store = ObservationStore::new(path.clone());

    let record = sample_record("2025-08-06 10:00:00", "$63,245.10");
    store.append(&record).unwrap();
    // Second append forces a full read of the quoted first row
    store
        .append(&sample_record("2025-08-06 11:00:00", "$1,000,000.00"))
        .unwrap();

    let records = store.load().unwrap();
    assert_eq!(records[0].price, "$63,245.10");
    assert_eq!(records[1].price, "$1,000,000.00");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"$63,245.10\""));
}
