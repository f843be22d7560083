use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A workshop staff member available for production work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Identifier for the member. Any stable string: a user id, initials, a payroll code.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hours of production work available per workday. 8 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_hour_capacity: Option<f64>,
    /// Display colour for calendar rendering. The engine never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StaffMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            daily_hour_capacity: None,
            color: None,
        }
    }

    /// Daily capacity in hours, defaulting to the standard 8-hour day.
    pub fn daily_hours(&self) -> f64 {
        match self.daily_hour_capacity {
            Some(hours) if hours.is_finite() => hours,
            _ => 8.0,
        }
    }
}

/// An inclusive holiday booking for one staff member.
///
/// Intervals for a member may arrive unsorted, contiguous, or overlapping
/// each other; a workday covered by several intervals is still only one
/// lost day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayInterval {
    pub staff_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl HolidayInterval {
    pub fn new(staff_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            staff_id: staff_id.into(),
            start,
            end,
            note: None,
        }
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
