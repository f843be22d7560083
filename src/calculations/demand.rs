use crate::calendar::{Window, count_workdays};
use crate::project::Project;

/// Staff-hours of expected work falling inside the window, proportionally
/// projected from each project's manufacturing span. Rounded to the nearest
/// whole hour once, after summing, so sub-hour shares from several projects
/// still add up.
pub fn demand(window: Window, projects: &[Project]) -> f64 {
    // An empty sum is IEEE -0.0; +0.0 keeps it a plain zero.
    (projects
        .iter()
        .map(|project| project_demand(window, project))
        .sum::<f64>()
        + 0.0)
        .round()
}

/// Unrounded share of one project's effort that falls inside the window.
///
/// The effort is spread evenly over the weekdays of the manufacturing span.
/// A project with no manufacturing dates, no window overlap, or zero effort
/// contributes nothing.
pub fn project_demand(window: Window, project: &Project) -> f64 {
    let Some((start, end)) = project.manufacturing_span() else {
        return 0.0;
    };
    // max(1) keeps a weekend-only span from dividing by zero.
    let span_workdays = count_workdays(start, end).max(1);
    let Some((overlap_start, overlap_end)) = window.overlap(start, end) else {
        return 0.0;
    };
    let overlap_workdays = count_workdays(overlap_start, overlap_end);
    project.effort_hours() * overlap_workdays as f64 / span_workdays as f64
}
