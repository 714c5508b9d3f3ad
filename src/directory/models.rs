//! Directory entities produced by response normalization

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use uuid::Uuid;

/// Employee gender as seen by directory callers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Not set or not recognized
    #[default]
    Unspecified,
    Male,
    Female,
}

/// Known reasons an employee is away from work
///
/// The string form is the canonical name used by the search service.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceKind {
    #[strum(serialize = "Отпуск")]
    Vacation,

    /// Maternity leave
    #[strum(serialize = "Декрет")]
    Decree,

    #[strum(serialize = "Командировка")]
    BusinessTrip,

    /// Sick leave
    #[strum(serialize = "Больничный")]
    Medical,

    /// Working while formally on maternity leave
    #[strum(serialize = "Работа в декрете")]
    WorkingDecree,
}

impl AbsenceKind {
    /// Canonical absence name
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Classify a free-form absence name, ignoring case and surrounding whitespace
    pub fn classify(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        AbsenceKind::iter().find(|kind| kind.name().to_lowercase() == normalized)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub id: Uuid,
    pub name: String,
}

/// Government body (OIV) an employee belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Oiv {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subdivision {
    pub id: Uuid,
    pub name: String,
}

/// Organizational placement of an employee
///
/// Only exists when at least one member is known; see [`Structure::assemble`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Structure {
    pub position: Option<Position>,
    pub oiv: Option<Oiv>,
    pub product: Option<Product>,
    pub organization: Option<Organization>,
    pub subdivision: Option<Subdivision>,
}

impl Structure {
    /// Bundle already-built members, returning `None` when all of them are missing
    pub fn assemble(
        position: Option<Position>,
        oiv: Option<Oiv>,
        product: Option<Product>,
        organization: Option<Organization>,
        subdivision: Option<Subdivision>,
    ) -> Option<Self> {
        let any_present = position.is_some()
            || oiv.is_some()
            || product.is_some()
            || organization.is_some()
            || subdivision.is_some();

        any_present.then_some(Self {
            position,
            oiv,
            product,
            organization,
            subdivision,
        })
    }
}

/// A period of absence, in calendar dates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Absence {
    pub name: String,
    pub start_date: NaiveDate,

    /// `None` for an open-ended absence
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statuses {
    pub is_fired: bool,
    pub is_birthday: bool,
    pub absences: Vec<Absence>,
}

/// Directory entry for a single employment of a person
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    /// Person ID
    pub id: Uuid,

    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,

    /// "Last First [Middle]"
    pub full_name: String,

    pub gender: Gender,

    /// Avatar image reference
    pub image_id: Option<String>,

    pub structure: Option<Structure>,

    pub statuses: Statuses,
}

impl Employee {
    pub fn position(&self) -> Option<&Position> {
        self.structure.as_ref().and_then(|s| s.position.as_ref())
    }

    pub fn oiv(&self) -> Option<&Oiv> {
        self.structure.as_ref().and_then(|s| s.oiv.as_ref())
    }

    pub fn product(&self) -> Option<&Product> {
        self.structure.as_ref().and_then(|s| s.product.as_ref())
    }

    pub fn organization(&self) -> Option<&Organization> {
        self.structure.as_ref().and_then(|s| s.organization.as_ref())
    }

    pub fn subdivision(&self) -> Option<&Subdivision> {
        self.structure.as_ref().and_then(|s| s.subdivision.as_ref())
    }
}

/// Join name parts as "Last First [Middle]", skipping an empty middle name
pub fn full_name(last_name: &str, first_name: &str, middle_name: Option<&str>) -> String {
    let mut parts = vec![last_name, first_name];
    if let Some(middle) = middle_name.filter(|m| !m.is_empty()) {
        parts.push(middle);
    }
    parts.join(" ")
}

/// One page of search results
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub employees: Vec<Employee>,

    /// Total number of matches across all pages
    pub total: u64,

    /// Cursor for the next page, echoed back as `after_id`
    pub after_id: Option<String>,
}

/// Aggregation bucket for an identifier-bearing facet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterFacet {
    pub id: Uuid,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterGender {
    pub gender: Gender,
    pub count: u64,

    /// No employees match this gender; the facet is shown greyed out
    pub is_disabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterAbsence {
    pub name: String,

    /// `None` when the name is not one of the known kinds
    pub kind: Option<AbsenceKind>,

    pub count: u64,
}

impl FilterAbsence {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        let name = name.into();
        let kind = AbsenceKind::classify(&name);
        Self { name, kind, count }
    }
}

/// Facet counts for the directory filter panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FiltersResponse {
    pub oivs: Vec<FilterFacet>,
    pub organizations: Vec<FilterFacet>,
    pub products: Vec<FilterFacet>,
    pub subdivisions: Vec<FilterFacet>,
    pub positions: Vec<FilterFacet>,
    pub genders: Vec<FilterGender>,
    pub absences: Vec<FilterAbsence>,
}
