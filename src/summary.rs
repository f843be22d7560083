use serde::{Deserialize, Serialize};

use crate::calculations::capacity::{capacity, holiday_days};
use crate::calculations::demand::demand;
use crate::calculations::value::total_value;
use crate::calendar::Window;
use crate::project::Project;
use crate::staff::{HolidayInterval, StaffMember};

/// Per-window rollup of the engine's headline figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSummary {
    pub window: Window,
    pub capacity_hours: f64,
    pub demand_hours: f64,
    /// Capacity minus demand; negative means the window is overbooked.
    pub free_hours: f64,
    pub holiday_days: i64,
    pub total_value: f64,
}

impl WindowSummary {
    /// Runs every per-window query over the same snapshot. Collapse grouped
    /// projects first (`grouping::collapse`) when group rollup is wanted.
    pub fn compute(
        window: Window,
        staff: &[StaffMember],
        holidays: &[HolidayInterval],
        projects: &[Project],
    ) -> Self {
        let capacity_hours = capacity(window, staff, holidays);
        let demand_hours = demand(window, projects);
        Self {
            window,
            capacity_hours,
            demand_hours,
            free_hours: capacity_hours - demand_hours,
            holiday_days: holiday_days(window, staff, holidays),
            total_value: total_value(window, projects),
        }
    }

    pub fn is_overbooked(&self) -> bool {
        self.free_hours < 0.0
    }

    pub fn to_report_line(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("window={}..{}", self.window.start, self.window.end));
        parts.push(format!("capacity={}", self.capacity_hours));
        parts.push(format!("demand={}", self.demand_hours));
        parts.push(format!("free={}", self.free_hours));
        if self.holiday_days > 0 {
            parts.push(format!("holiday_days={}", self.holiday_days));
        }
        if self.total_value != 0.0 {
            parts.push(format!("value={}", self.total_value));
        }
        parts.join(", ")
    }
}
