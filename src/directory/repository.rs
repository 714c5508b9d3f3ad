//! Directory repository backed by the external search service
//!
//! The repository is the only component that knows the wire shapes. It turns
//! resolved requests into `Search`/`Aggregations` calls and normalizes the
//! nested person → employment → structure → absence records into directory
//! entities. It mirrors the service faithfully: no facet pruning happens here.

use crate::directory::client::SearchServiceClient;
use crate::directory::clock;
use crate::directory::conversions::{
    date_to_timestamp, gender_from_wire, gender_to_wire, parse_id_lenient, timestamp_to_date,
};
use crate::directory::error::{RepositoryError, RepositoryResult};
use crate::directory::models::{
    full_name, Absence, Employee, FilterAbsence, FilterFacet, FilterGender, FiltersResponse, Oiv,
    Organization, Position, Product, SearchResponse, Statuses, Structure, Subdivision,
};
use crate::directory::query::{
    AbsenceAggregation, Filters, FiltersRequest, OptionsParams, SearchRequest,
};
use crate::directory::wire;
use async_trait::async_trait;
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Search capability the interactor depends on
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Fetch one page of employees
    async fn search(&self, request: Option<SearchRequest>) -> RepositoryResult<SearchResponse>;

    /// Fetch facet counts
    async fn filters(&self, request: Option<FiltersRequest>) -> RepositoryResult<FiltersResponse>;
}

/// Repository adapter over a [`SearchServiceClient`]
#[derive(Clone)]
pub struct DirectoryRepository {
    client: Arc<dyn SearchServiceClient>,
    time_zone: Tz,
}

impl DirectoryRepository {
    pub fn new(client: Arc<dyn SearchServiceClient>, time_zone: Tz) -> Self {
        Self { client, time_zone }
    }

    fn wire_filters(&self, filters: &Filters) -> wire::Filters {
        wire::Filters {
            oiv_ids: ids_to_wire(&filters.oiv_ids),
            organization_ids: ids_to_wire(&filters.organization_ids),
            product_ids: ids_to_wire(&filters.product_ids),
            subdivision_ids: ids_to_wire(&filters.subdivision_ids),
            position_names: filters.position_names.clone(),
            genders: filters.genders.iter().copied().map(gender_to_wire).collect(),
            birth_day: filters.birth_day.clone(),
            absences: filters
                .absences
                .iter()
                .map(|absence| wire::AbsenceFilter {
                    name: absence.name.clone(),
                    from: Some(date_to_timestamp(absence.from, self.time_zone)),
                    to: Some(date_to_timestamp(absence.to, self.time_zone)),
                })
                .collect(),
        }
    }

    fn wire_options(&self, options: &OptionsParams) -> wire::Options {
        wire::Options {
            fired_from: options
                .fired_from
                .map(|date| date_to_timestamp(date, self.time_zone)),
            fired_to: options
                .fired_to
                .map(|date| date_to_timestamp(date, self.time_zone)),
        }
    }

    fn wire_absence_aggregation(
        &self,
        aggregation: &AbsenceAggregation,
    ) -> wire::AbsenceAggregationParams {
        wire::AbsenceAggregationParams {
            names: aggregation.names.clone(),
            from: Some(date_to_timestamp(aggregation.from, self.time_zone)),
            to: Some(date_to_timestamp(aggregation.to, self.time_zone)),
        }
    }

    /// Expand one person record into an employee per employment
    fn person_to_employees(&self, person: wire::Person, today: &str) -> Vec<Employee> {
        let id = parse_id_lenient(&person.id, "persons");
        let gender = gender_from_wire(person.gender);
        let middle_name = person.middle_name.filter(|m| !m.is_empty());
        let full_name = full_name(&person.last_name, &person.first_name, middle_name.as_deref());
        let is_birthday = person
            .birth_day
            .as_deref()
            .is_some_and(|birth_day| birth_day == today);
        let absences = self.person_absences(&person.id, person.absences);

        let employee = |structure: Option<Structure>, is_fired: bool| Employee {
            id,
            last_name: person.last_name.clone(),
            first_name: person.first_name.clone(),
            middle_name: middle_name.clone(),
            full_name: full_name.clone(),
            gender,
            image_id: person.image_id.clone(),
            structure,
            statuses: Statuses {
                is_fired,
                is_birthday,
                absences: absences.clone(),
            },
        };

        if person.employments.is_empty() {
            return vec![employee(None, false)];
        }

        person
            .employments
            .iter()
            .map(|employment| employee(employment_structure(employment), employment.is_fired))
            .collect()
    }

    fn person_absences(&self, person_id: &str, records: Vec<wire::PersonAbsence>) -> Vec<Absence> {
        records
            .into_iter()
            .filter_map(|record| {
                let start_date = record
                    .start
                    .as_ref()
                    .and_then(|ts| timestamp_to_date(ts, self.time_zone));
                let end_date = record
                    .end
                    .as_ref()
                    .and_then(|ts| timestamp_to_date(ts, self.time_zone));

                let Some(start_date) = start_date else {
                    warn!(
                        person_id,
                        absence = %record.name,
                        "Skipping absence without start date"
                    );
                    return None;
                };

                Some(Absence {
                    name: record.name,
                    start_date,
                    end_date,
                })
            })
            .collect()
    }
}

#[async_trait]
impl EmployeeDirectory for DirectoryRepository {
    async fn search(&self, request: Option<SearchRequest>) -> RepositoryResult<SearchResponse> {
        let request = request.ok_or_else(|| {
            RepositoryError::Validation("search request is required".to_string())
        })?;

        let wire_request = wire::SearchRequest {
            query: request.query,
            size: request.limit,
            filters: request.filters.as_ref().map(|f| self.wire_filters(f)),
            options: request.options.as_ref().map(|o| self.wire_options(o)),
            after: request.after_id,
        };

        debug!(
            query = %wire_request.query,
            size = wire_request.size,
            has_filters = wire_request.filters.is_some(),
            "Sending directory search request"
        );

        let response = self.client.search(wire_request).await.map_err(|status| {
            error!(operation = "search", error = %status, "Search service call failed");
            RepositoryError::transport("search", status)
        })?;

        let today = clock::month_day(request.today);
        let (total, after_id) = response
            .pagination
            .map(|p| (p.total, p.after))
            .unwrap_or_default();

        let employees: Vec<Employee> = response
            .persons
            .into_iter()
            .flat_map(|person| self.person_to_employees(person, &today))
            .collect();

        debug!(employees = employees.len(), total, "Directory search completed");

        Ok(SearchResponse {
            employees,
            total,
            after_id,
        })
    }

    async fn filters(&self, request: Option<FiltersRequest>) -> RepositoryResult<FiltersResponse> {
        let request = request.ok_or_else(|| {
            RepositoryError::Validation("filters request is required".to_string())
        })?;

        let wire_request = wire::AggregationsRequest {
            filters: request.filters.as_ref().map(|f| self.wire_filters(f)),
            options: request.options.as_ref().map(|o| self.wire_options(o)),
            absences: request
                .absence_aggregation
                .as_ref()
                .map(|a| self.wire_absence_aggregation(a)),
        };

        debug!(
            has_filters = wire_request.filters.is_some(),
            has_absences = wire_request.absences.is_some(),
            "Sending directory aggregations request"
        );

        let response = self
            .client
            .aggregations(wire_request)
            .await
            .map_err(|status| {
                error!(operation = "aggregations", error = %status, "Search service call failed");
                RepositoryError::transport("aggregations", status)
            })?;

        Ok(FiltersResponse {
            oivs: buckets_to_facets(response.oivs, "oivs"),
            organizations: buckets_to_facets(response.organizations, "organizations"),
            products: buckets_to_facets(response.products, "products"),
            subdivisions: buckets_to_facets(response.subdivisions, "subdivisions"),
            positions: buckets_to_facets(response.positions, "positions"),
            genders: response
                .genders
                .into_iter()
                .map(|bucket| FilterGender {
                    gender: gender_from_wire(bucket.gender),
                    count: bucket.employees_count,
                    is_disabled: bucket.employees_count == 0,
                })
                .collect(),
            absences: response
                .absences
                .into_iter()
                .map(|bucket| FilterAbsence::new(bucket.name, bucket.employees_count))
                .collect(),
        })
    }
}

fn ids_to_wire(ids: &[Uuid]) -> Vec<String> {
    ids.iter().map(Uuid::to_string).collect()
}

fn buckets_to_facets(buckets: Vec<wire::Bucket>, facet: &'static str) -> Vec<FilterFacet> {
    buckets
        .into_iter()
        .map(|bucket| FilterFacet {
            id: parse_id_lenient(&bucket.id, facet),
            name: bucket.name,
            count: bucket.employees_count,
        })
        .collect()
}

fn employment_structure(employment: &wire::Employment) -> Option<Structure> {
    let position = employment.position.as_ref().map(|unit| Position {
        id: parse_id_lenient(&unit.id, "position"),
        name: unit.name.clone(),
    });
    let oiv = employment.oiv.as_ref().map(|unit| Oiv {
        id: parse_id_lenient(&unit.id, "oiv"),
        name: unit.name.clone(),
    });
    let product = employment.product.as_ref().map(|unit| Product {
        id: parse_id_lenient(&unit.id, "product"),
        name: unit.name.clone(),
    });
    let organization = employment.organization.as_ref().map(|unit| Organization {
        id: parse_id_lenient(&unit.id, "organization"),
        name: unit.name.clone(),
    });
    let subdivision = employment.subdivision.as_ref().map(|unit| Subdivision {
        id: parse_id_lenient(&unit.id, "subdivision"),
        name: unit.name.clone(),
    });

    Structure::assemble(position, oiv, product, organization, subdivision)
}
