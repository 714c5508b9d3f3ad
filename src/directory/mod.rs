//! Employee directory search and facet aggregation
//!
//! Two layers, built bottom-up:
//!
//! - **Repository**: the only code that knows the search service wire shapes.
//!   Builds `Search`/`Aggregations` requests and normalizes nested
//!   person → employment → structure → absence records.
//! - **Interactor**: business policy. Resolves "today" in the server time
//!   zone, expands status flags into birthday and absence-window filters,
//!   and drops empty absence facets.
//!
//! ```text
//! caller ─▶ SearchInteractor ─▶ EmployeeDirectory (DirectoryRepository)
//!                │                        │
//!              Clock              SearchServiceClient ─▶ search service
//! ```
//!
//! # Example
//!
//! ```no_run
//! use employee_directory::config::Config;
//! use employee_directory::directory::{FilterStatuses, SearchInteractor, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load()?;
//!     let interactor = SearchInteractor::connect(&config).await?;
//!
//!     let params = SearchParams::new("Иванов")
//!         .with_limit(20)
//!         .with_statuses(FilterStatuses {
//!             is_vacation: true,
//!             ..Default::default()
//!         });
//!
//!     let page = interactor.search(Some(params)).await?;
//!     println!("Found {} employees", page.total);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod clock;
mod conversions;
mod error;
mod interactor;
mod models;
mod query;
mod repository;
pub mod wire;

pub use client::{GrpcSearchClient, SearchServiceClient};
pub use clock::{month_day, today, Clock, FixedClock, SystemClock, MONTH_DAY_FORMAT};
pub use conversions::{
    date_to_timestamp, gender_from_wire, gender_to_wire, parse_id_lenient, timestamp_to_date,
};
pub use error::{InteractorError, InteractorResult, RepositoryError, RepositoryResult};
pub use interactor::{SearchInteractor, AGGREGATED_ABSENCES, DEFAULT_LIMIT, LOOKAHEAD_WINDOW};
pub use models::{
    full_name, Absence, AbsenceKind, Employee, FilterAbsence, FilterFacet, FilterGender,
    FiltersResponse, Gender, Oiv, Organization, Position, Product, SearchResponse, Statuses,
    Structure, Subdivision,
};
pub use query::{
    AbsenceAggregation, FilterStatuses, Filters, FiltersParams, FiltersRequest, OptionsParams,
    SearchAbsence, SearchParams, SearchRequest,
};
pub use repository::{DirectoryRepository, EmployeeDirectory};
