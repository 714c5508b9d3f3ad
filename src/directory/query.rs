//! Search parameters and the requests derived from them

use crate::directory::models::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status flags a caller can filter on
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterStatuses {
    /// Only employees whose birthday is today
    pub is_birthday: bool,

    /// Employees on vacation now or within the look-ahead window
    pub is_vacation: bool,

    /// Employees on maternity leave now or within the look-ahead window
    pub is_maternity_leave: bool,
}

/// Organizational and status filters supplied by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FiltersParams {
    pub oiv_ids: Vec<Uuid>,
    pub organization_ids: Vec<Uuid>,
    pub product_ids: Vec<Uuid>,
    pub subdivision_ids: Vec<Uuid>,
    pub position_names: Vec<String>,
    pub genders: Vec<Gender>,
    pub statuses: FilterStatuses,
}

/// Search options
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionsParams {
    /// Include employees fired on or after this date
    pub fired_from: Option<NaiveDate>,

    /// Include employees fired on or before this date
    pub fired_to: Option<NaiveDate>,
}

/// Caller-level search intent
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchParams {
    /// Free-text query
    pub query: String,

    pub filters: Option<FiltersParams>,

    pub options: Option<OptionsParams>,

    /// Page size
    pub limit: u32,

    /// Opaque cursor returned by the previous page
    pub after_id: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_after_id(mut self, after_id: impl Into<String>) -> Self {
        self.after_id = Some(after_id.into());
        self
    }

    pub fn with_filters(mut self, filters: FiltersParams) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_options(mut self, options: OptionsParams) -> Self {
        self.options = Some(options);
        self
    }

    /// Set status flags, creating empty filters if needed
    pub fn with_statuses(mut self, statuses: FilterStatuses) -> Self {
        self.filters.get_or_insert_with(FiltersParams::default).statuses = statuses;
        self
    }
}

/// Absence window the search service should match against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchAbsence {
    pub name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Filters with status flags resolved to concrete values
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filters {
    pub oiv_ids: Vec<Uuid>,
    pub organization_ids: Vec<Uuid>,
    pub product_ids: Vec<Uuid>,
    pub subdivision_ids: Vec<Uuid>,
    pub position_names: Vec<String>,
    pub genders: Vec<Gender>,

    /// Birthday to match, formatted `MM-DD`
    pub birth_day: Option<String>,

    /// Absence windows; an employee matching any of them is included
    pub absences: Vec<SearchAbsence>,
}

/// Request for one page of employees
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
    pub after_id: Option<String>,
    pub filters: Option<Filters>,
    pub options: Option<OptionsParams>,

    /// Date birthdays are evaluated against
    pub today: NaiveDate,
}

/// Absence names to count inside a date window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbsenceAggregation {
    pub names: Vec<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Request for facet counts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FiltersRequest {
    pub filters: Option<Filters>,
    pub options: Option<OptionsParams>,
    pub absence_aggregation: Option<AbsenceAggregation>,
}
