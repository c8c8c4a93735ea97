// Record services wired to in-memory infrastructure for tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use rstest::fixture;

use crate::modules::records::adapters::outbound::dataset_store_in_memory::InMemoryDatasetStore;
use crate::modules::records::application::record_service::RecordService;
use crate::shared::core::clock::FixedClock;
use crate::shell::state::AppState;

pub type BeforeEachReturn = (Arc<InMemoryDatasetStore>, Arc<FixedClock>, RecordService);

/// 2026-10-18 10:00 in the local time zone.
pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 18, 10, 0, 0).unwrap()
}

pub fn make_service() -> BeforeEachReturn {
    let store = Arc::new(InMemoryDatasetStore::new());
    let clock = Arc::new(FixedClock::new(fixed_now()));
    let service = RecordService::new(store.clone(), clock.clone());
    (store, clock, service)
}

#[fixture]
pub fn before_each() -> BeforeEachReturn {
    make_service()
}

pub fn read_only_service() -> RecordService {
    let mut store = InMemoryDatasetStore::new();
    store.toggle_read_only();
    RecordService::new(Arc::new(store), Arc::new(FixedClock::new(fixed_now())))
}

pub fn make_test_state() -> AppState {
    let (_, _, service) = make_service();
    AppState {
        record_service: Arc::new(service),
    }
}

pub fn make_read_only_state() -> AppState {
    AppState {
        record_service: Arc::new(read_only_service()),
    }
}
