//! Search interactor: business policy on top of the directory repository
//!
//! The repository knows nothing about "today", birthdays or what counts as a
//! vacation. The interactor resolves caller status flags into concrete
//! birthday and absence-window filters, and prunes empty absence facets from
//! aggregation results.

use crate::config::Config;
use crate::directory::client::GrpcSearchClient;
use crate::directory::clock::{self, Clock, SystemClock};
use crate::directory::error::{InteractorError, InteractorResult};
use crate::directory::models::{AbsenceKind, FiltersResponse, SearchResponse};
use crate::directory::query::{
    AbsenceAggregation, FilterStatuses, Filters, FiltersParams, FiltersRequest, SearchAbsence,
    SearchParams, SearchRequest,
};
use crate::directory::repository::{DirectoryRepository, EmployeeDirectory};
use crate::error::{AppError, Result};
use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::debug;

/// Length of the rolling window used to find current or upcoming absences
pub const LOOKAHEAD_WINDOW: Days = Days::new(14);

/// Page size used when the caller leaves `limit` unset
pub const DEFAULT_LIMIT: u32 = 20;

/// Absence kinds whose counts are always aggregated for the filter panel
pub const AGGREGATED_ABSENCES: [AbsenceKind; 3] = [
    AbsenceKind::Vacation,
    AbsenceKind::Decree,
    AbsenceKind::Medical,
];

type StatusPredicate = fn(&FilterStatuses) -> bool;

/// Status flags that expand into absence filters, in request order
const STATUS_ABSENCES: [(StatusPredicate, AbsenceKind); 2] = [
    (wants_vacation, AbsenceKind::Vacation),
    (wants_maternity_leave, AbsenceKind::Decree),
];

fn wants_vacation(statuses: &FilterStatuses) -> bool {
    statuses.is_vacation
}

fn wants_maternity_leave(statuses: &FilterStatuses) -> bool {
    statuses.is_maternity_leave
}

/// Dates derived from a single clock reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    today: NaiveDate,
    to: NaiveDate,
}

impl Window {
    fn starting(today: NaiveDate) -> Self {
        let to = today
            .checked_add_days(LOOKAHEAD_WINDOW)
            .unwrap_or(NaiveDate::MAX);
        Self { today, to }
    }

    fn absence(&self, kind: AbsenceKind) -> SearchAbsence {
        SearchAbsence {
            name: kind.name().to_string(),
            from: self.today,
            to: self.to,
        }
    }

    fn resolve(&self, params: &FiltersParams) -> Filters {
        let statuses = &params.statuses;

        let birth_day = statuses
            .is_birthday
            .then(|| clock::month_day(self.today));

        let absences = STATUS_ABSENCES
            .iter()
            .filter(|(wanted, _)| wanted(statuses))
            .map(|(_, kind)| self.absence(*kind))
            .collect();

        Filters {
            oiv_ids: params.oiv_ids.clone(),
            organization_ids: params.organization_ids.clone(),
            product_ids: params.product_ids.clone(),
            subdivision_ids: params.subdivision_ids.clone(),
            position_names: params.position_names.clone(),
            genders: params.genders.clone(),
            birth_day,
            absences,
        }
    }
}

/// Directory search entry point for presenters
#[derive(Clone)]
pub struct SearchInteractor {
    directory: Arc<dyn EmployeeDirectory>,
    clock: Arc<dyn Clock>,
    time_zone: Tz,
    default_limit: u32,
}

impl SearchInteractor {
    pub fn new(directory: Arc<dyn EmployeeDirectory>, clock: Arc<dyn Clock>, time_zone: Tz) -> Self {
        Self {
            directory,
            clock,
            time_zone,
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Override the page size applied to requests with `limit == 0`
    pub fn with_default_limit(mut self, default_limit: u32) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Wire the interactor to the configured search service
    pub async fn connect(config: &Config) -> Result<Self> {
        let time_zone = config.time_zone()?;
        let client = GrpcSearchClient::connect(&config.search_service)
            .await
            .map_err(|e| AppError::Integration {
                integration_source: "search-service".to_string(),
                message: e.to_string(),
            })?;

        let repository = DirectoryRepository::new(Arc::new(client), time_zone);

        Ok(Self::new(Arc::new(repository), Arc::new(SystemClock), time_zone)
            .with_default_limit(config.directory.default_limit))
    }

    fn window(&self) -> Window {
        Window::starting(clock::today(self.clock.as_ref(), self.time_zone))
    }

    /// Search employees
    pub async fn search(&self, params: Option<SearchParams>) -> InteractorResult<SearchResponse> {
        let params = params.ok_or_else(|| {
            debug!("Rejecting search without params");
            InteractorError::Validation("search params are required".to_string())
        })?;

        let window = self.window();
        let limit = match params.limit {
            0 => self.default_limit,
            limit => limit,
        };
        let request = SearchRequest {
            query: params.query,
            limit,
            after_id: params.after_id,
            filters: params.filters.as_ref().map(|f| window.resolve(f)),
            options: params.options,
            today: window.today,
        };

        debug!(
            today = %window.today,
            birth_day = ?request.filters.as_ref().and_then(|f| f.birth_day.as_deref()),
            absences = request.filters.as_ref().map_or(0, |f| f.absences.len()),
            "Resolved search filters"
        );

        Ok(self.directory.search(Some(request)).await?)
    }

    /// Facet counts for the filter panel, without empty absence facets
    pub async fn filters(&self, params: Option<SearchParams>) -> InteractorResult<FiltersResponse> {
        let params = params.ok_or_else(|| {
            debug!("Rejecting filters without params");
            InteractorError::Validation("filters params are required".to_string())
        })?;

        let window = self.window();
        let request = FiltersRequest {
            filters: params.filters.as_ref().map(|f| window.resolve(f)),
            options: params.options,
            absence_aggregation: Some(AbsenceAggregation {
                names: AGGREGATED_ABSENCES
                    .iter()
                    .map(|kind| kind.name().to_string())
                    .collect(),
                from: window.today,
                to: window.to,
            }),
        };

        let mut response = self.directory.filters(Some(request)).await?;

        let before = response.absences.len();
        response.absences.retain(|absence| absence.count > 0);
        debug!(
            pruned = before - response.absences.len(),
            "Removed empty absence facets"
        );

        Ok(response)
    }
}
