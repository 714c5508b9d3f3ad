//! Common test utilities for directory testing
//!
//! Provides a scripted search service client and helpers for building wire
//! records and a fully wired interactor with a pinned clock.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use employee_directory::directory::wire;
use employee_directory::directory::{
    date_to_timestamp, Clock, DirectoryRepository, FixedClock, SearchInteractor,
    SearchServiceClient,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::{Context, Layer};
use tonic::Status;

/// In-memory search service that replays canned responses and records requests
#[derive(Default)]
pub struct ScriptedSearchService {
    search_response: Mutex<Option<Result<wire::SearchResponse, Status>>>,
    aggregations_response: Mutex<Option<Result<wire::AggregationsResponse, Status>>>,
    pub search_requests: Mutex<Vec<wire::SearchRequest>>,
    pub aggregations_requests: Mutex<Vec<wire::AggregationsRequest>>,
}

impl ScriptedSearchService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_response(self, response: wire::SearchResponse) -> Self {
        *self.search_response.lock().unwrap() = Some(Ok(response));
        self
    }

    pub fn with_aggregations_response(self, response: wire::AggregationsResponse) -> Self {
        *self.aggregations_response.lock().unwrap() = Some(Ok(response));
        self
    }

    pub fn failing_with(self, status: Status) -> Self {
        *self.search_response.lock().unwrap() = Some(Err(status.clone()));
        *self.aggregations_response.lock().unwrap() = Some(Err(status));
        self
    }

    pub fn last_search_request(&self) -> wire::SearchRequest {
        self.search_requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no search request was sent")
    }

    pub fn last_aggregations_request(&self) -> wire::AggregationsRequest {
        self.aggregations_requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no aggregations request was sent")
    }

    pub fn calls(&self) -> usize {
        self.search_requests.lock().unwrap().len()
            + self.aggregations_requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchServiceClient for ScriptedSearchService {
    async fn search(&self, request: wire::SearchRequest) -> Result<wire::SearchResponse, Status> {
        self.search_requests.lock().unwrap().push(request);
        self.search_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(wire::SearchResponse::default()))
    }

    async fn aggregations(
        &self,
        request: wire::AggregationsRequest,
    ) -> Result<wire::AggregationsResponse, Status> {
        self.aggregations_requests.lock().unwrap().push(request);
        self.aggregations_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(wire::AggregationsResponse::default()))
    }
}

/// Clock that moves one second forward on every read
pub struct TickingClock {
    start: DateTime<Utc>,
    reads: AtomicUsize,
}

impl TickingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let read = self.reads.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(read as i64)
    }
}

/// Tracing layer counting events at WARN or above
#[derive(Clone, Default)]
pub struct WarningCounter {
    count: Arc<AtomicUsize>,
}

impl WarningCounter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: tracing::Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() <= tracing::Level::WARN {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// 2024-03-08 12:00 Moscow time
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 8, 9, 0, 0).unwrap()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn moscow_midnight(date: NaiveDate) -> Option<prost_types::Timestamp> {
    Some(date_to_timestamp(date, chrono_tz::Europe::Moscow))
}

/// Interactor over the real repository, backed by `service`
pub fn create_test_interactor(service: Arc<ScriptedSearchService>) -> SearchInteractor {
    let clock = Arc::new(FixedClock::new(test_now()));
    let time_zone = chrono_tz::Europe::Moscow;
    let repository = DirectoryRepository::new(service, time_zone);
    SearchInteractor::new(Arc::new(repository), clock, time_zone)
}

pub fn create_test_repository(service: Arc<ScriptedSearchService>) -> DirectoryRepository {
    DirectoryRepository::new(service, chrono_tz::Europe::Moscow)
}

pub fn unit(id: &str, name: &str) -> Option<wire::Unit> {
    Some(wire::Unit {
        id: id.to_string(),
        name: name.to_string(),
    })
}

pub fn create_test_person(
    id: &str,
    last_name: &str,
    first_name: &str,
    middle_name: Option<&str>,
) -> wire::Person {
    wire::Person {
        id: id.to_string(),
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        middle_name: middle_name.map(str::to_string),
        gender: wire::WireGender::Male as i32,
        ..Default::default()
    }
}

pub fn bucket(id: &str, name: &str, count: u64) -> wire::Bucket {
    wire::Bucket {
        id: id.to_string(),
        name: name.to_string(),
        employees_count: count,
    }
}

pub fn absence_bucket(name: &str, count: u64) -> wire::AbsenceBucket {
    wire::AbsenceBucket {
        name: name.to_string(),
        employees_count: count,
    }
}
