//! Messages exchanged with the external search service
//!
//! Mirrors `directory.search.v1`. Identifiers are carried as strings and are
//! not guaranteed to be well-formed UUIDs.

use prost::{Enumeration, Message};
use prost_types::Timestamp;

/// Full method path for `Search`
pub const SEARCH_PATH: &str = "/directory.search.v1.SearchService/Search";

/// Full method path for `Aggregations`
pub const AGGREGATIONS_PATH: &str = "/directory.search.v1.SearchService/Aggregations";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum WireGender {
    Invalid = 0,
    Male = 1,
    Female = 2,
}

#[derive(Clone, PartialEq, Message)]
pub struct AbsenceFilter {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub from: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub to: Option<Timestamp>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Filters {
    #[prost(string, repeated, tag = "1")]
    pub oiv_ids: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub organization_ids: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub product_ids: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub subdivision_ids: Vec<String>,
    #[prost(string, repeated, tag = "5")]
    pub position_names: Vec<String>,
    #[prost(enumeration = "WireGender", repeated, tag = "6")]
    pub genders: Vec<i32>,
    /// `MM-DD`
    #[prost(string, optional, tag = "7")]
    pub birth_day: Option<String>,
    #[prost(message, repeated, tag = "8")]
    pub absences: Vec<AbsenceFilter>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Options {
    #[prost(message, optional, tag = "1")]
    pub fired_from: Option<Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub fired_to: Option<Timestamp>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SearchRequest {
    #[prost(string, tag = "1")]
    pub query: String,
    #[prost(uint32, tag = "2")]
    pub size: u32,
    #[prost(message, optional, tag = "3")]
    pub filters: Option<Filters>,
    #[prost(message, optional, tag = "4")]
    pub options: Option<Options>,
    #[prost(string, optional, tag = "5")]
    pub after: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Unit {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct Employment {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub position: Option<Unit>,
    #[prost(message, optional, tag = "3")]
    pub oiv: Option<Unit>,
    #[prost(message, optional, tag = "4")]
    pub product: Option<Unit>,
    #[prost(message, optional, tag = "5")]
    pub organization: Option<Unit>,
    #[prost(message, optional, tag = "6")]
    pub subdivision: Option<Unit>,
    #[prost(bool, tag = "7")]
    pub is_fired: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct PersonAbsence {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub start: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub end: Option<Timestamp>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Person {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub last_name: String,
    #[prost(string, tag = "3")]
    pub first_name: String,
    #[prost(string, optional, tag = "4")]
    pub middle_name: Option<String>,
    #[prost(enumeration = "WireGender", tag = "5")]
    pub gender: i32,
    #[prost(string, optional, tag = "6")]
    pub image_id: Option<String>,
    /// `MM-DD`
    #[prost(string, optional, tag = "7")]
    pub birth_day: Option<String>,
    #[prost(message, repeated, tag = "8")]
    pub employments: Vec<Employment>,
    #[prost(message, repeated, tag = "9")]
    pub absences: Vec<PersonAbsence>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Pagination {
    #[prost(uint64, tag = "1")]
    pub total: u64,
    #[prost(string, optional, tag = "2")]
    pub after: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SearchResponse {
    #[prost(message, repeated, tag = "1")]
    pub persons: Vec<Person>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<Pagination>,
}

#[derive(Clone, PartialEq, Message)]
pub struct AbsenceAggregationParams {
    #[prost(string, repeated, tag = "1")]
    pub names: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub from: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub to: Option<Timestamp>,
}

#[derive(Clone, PartialEq, Message)]
pub struct AggregationsRequest {
    #[prost(message, optional, tag = "1")]
    pub filters: Option<Filters>,
    #[prost(message, optional, tag = "2")]
    pub options: Option<Options>,
    #[prost(message, optional, tag = "3")]
    pub absences: Option<AbsenceAggregationParams>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Bucket {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(uint64, tag = "3")]
    pub employees_count: u64,
}

#[derive(Clone, PartialEq, Message)]
pub struct GenderBucket {
    #[prost(enumeration = "WireGender", tag = "1")]
    pub gender: i32,
    #[prost(uint64, tag = "2")]
    pub employees_count: u64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AbsenceBucket {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(uint64, tag = "2")]
    pub employees_count: u64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AggregationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub oivs: Vec<Bucket>,
    #[prost(message, repeated, tag = "2")]
    pub organizations: Vec<Bucket>,
    #[prost(message, repeated, tag = "3")]
    pub products: Vec<Bucket>,
    #[prost(message, repeated, tag = "4")]
    pub subdivisions: Vec<Bucket>,
    #[prost(message, repeated, tag = "5")]
    pub positions: Vec<Bucket>,
    #[prost(message, repeated, tag = "6")]
    pub genders: Vec<GenderBucket>,
    #[prost(message, repeated, tag = "7")]
    pub absences: Vec<AbsenceBucket>,
}
