use std::fs;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use jobby_core::Credential;
use jobby_engine::{Clock, FileSessionStore, MemorySessionStore, SessionStore};
use tempfile::TempDir;

fn fixed_clock(start: DateTime<Utc>) -> (Clock, Arc<Mutex<DateTime<Utc>>>) {
    let now = Arc::new(Mutex::new(start));
    let handle = now.clone();
    let clock: Clock = Arc::new(move || *handle.lock().unwrap());
    (clock, now)
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

#[test]
fn file_store_round_trips_until_expiry() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state").join("session.ron");
    let (clock, now) = fixed_clock(start());
    let mut store = FileSessionStore::with_clock(path.clone(), clock);

    assert_eq!(store.get(), None);

    store
        .set(&Credential::new("abc123"), start() + Duration::days(5))
        .unwrap();
    assert!(path.exists());
    assert_eq!(store.get(), Some(Credential::new("abc123")));

    *now.lock().unwrap() = start() + Duration::days(5);
    assert_eq!(store.get(), None);
}

#[test]
fn file_store_survives_reopen_and_clear_removes_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.ron");
    let (clock, _) = fixed_clock(start());

    let mut first = FileSessionStore::with_clock(path.clone(), clock.clone());
    first
        .set(&Credential::new("tok-1"), start() + Duration::hours(1))
        .unwrap();

    let mut second = FileSessionStore::with_clock(path.clone(), clock);
    assert_eq!(second.get(), Some(Credential::new("tok-1")));

    second.clear().unwrap();
    assert!(!path.exists());
    assert_eq!(first.get(), None);
    // Clearing twice is fine.
    second.clear().unwrap();
}

#[test]
fn corrupt_session_file_reads_as_absent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.ron");
    fs::write(&path, "not ron at all (").unwrap();

    let store = FileSessionStore::new(path);
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_honours_expiry() {
    let (clock, now) = fixed_clock(start());
    let mut store = MemorySessionStore::with_clock(clock);
    store
        .set(&Credential::new("abc123"), start() + Duration::minutes(10))
        .unwrap();
    assert_eq!(store.get(), Some(Credential::new("abc123")));

    *now.lock().unwrap() = start() + Duration::minutes(11);
    assert_eq!(store.get(), None);

    store.clear().unwrap();
    assert_eq!(store.get(), None);
}
