use chrono::NaiveDate;

use crate::calendar::{Window, overlap};
use crate::project::Project;

/// The slice of a project's order value attributable to
/// `range_start..=range_end`.
///
/// The value is spread evenly over every calendar day of the manufacturing
/// span, weekends included — deliberately a different day basis from the
/// demand projection, which uses workdays only. Returns 0 when the value or
/// either manufacturing date is absent, when the value is exactly 0, or
/// when the range misses the span entirely.
pub fn proportional_value(project: &Project, range_start: NaiveDate, range_end: NaiveDate) -> f64 {
    let value = match project.value {
        Some(value) if value.is_finite() && value != 0.0 => value,
        _ => return 0.0,
    };
    let Some((start, end)) = project.manufacturing_span() else {
        return 0.0;
    };
    let Some((overlap_start, overlap_end)) = overlap((start, end), (range_start, range_end)) else {
        return 0.0;
    };
    let span_days = (end - start).num_days() + 1;
    let overlap_days = (overlap_end - overlap_start).num_days() + 1;
    value * overlap_days as f64 / span_days as f64
}

/// Sum of `proportional_value` over every project for the window. No
/// rounding here; formatting belongs to the display layer.
pub fn total_value(window: Window, projects: &[Project]) -> f64 {
    projects
        .iter()
        .map(|project| proportional_value(project, window.start, window.end))
        .sum::<f64>()
        // An empty sum is IEEE -0.0; +0.0 keeps it a plain zero.
        + 0.0
}
