use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One production process a project requires, assignable to a staff member.
///
/// The process code is an opaque tag from the workshop's process dictionary;
/// the engine only carries it for bookkeeping and never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessAssignment {
    pub code: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_staff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
}

impl ProcessAssignment {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            required: false,
            estimated_hours: None,
            assigned_staff: None,
            completed_at: None,
        }
    }
}

/// A made-to-order job moving through the workshop.
///
/// Every date and numeric field is optional: absence is data, and each
/// calculation documents its own fallback. A project missing either
/// manufacturing date simply drops out of date-driven figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Order value. Absent means there is nothing to allocate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_hours: Option<f64>,
    /// Hours actually booked against the project so far; stands in for
    /// `expected_hours` when that was never estimated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_hours: Option<f64>,
    #[serde(default)]
    pub processes: Vec<ProcessAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: None,
            manufacturing_start: None,
            manufacturing_end: None,
            installation_start: None,
            installation_end: None,
            expected_hours: None,
            logged_hours: None,
            processes: Vec::new(),
            group_id: None,
            group_name: None,
        }
    }

    /// Expected effort in hours: falls back to logged hours, then to zero.
    /// Non-finite figures count as absent.
    pub fn effort_hours(&self) -> f64 {
        for candidate in [self.expected_hours, self.logged_hours] {
            if let Some(hours) = candidate {
                if hours.is_finite() {
                    return hours;
                }
            }
        }
        0.0
    }

    /// Manufacturing span, both endpoints inclusive. `None` unless both
    /// dates are present. An end date before the start clamps to the
    /// single-day span at the start rather than being rejected.
    pub fn manufacturing_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.manufacturing_start?;
        let end = self.manufacturing_end?;
        Some((start, end.max(start)))
    }

    /// Installation span, with the same clamping rule as
    /// `manufacturing_span`. Independent of the manufacturing dates.
    pub fn installation_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.installation_start?;
        let end = self.installation_end?;
        Some((start, end.max(start)))
    }
}
