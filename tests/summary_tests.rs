use chrono::NaiveDate;
use workshop_planner::calendar::Window;
use workshop_planner::grouping::collapse;
use workshop_planner::project::Project;
use workshop_planner::staff::{HolidayInterval, StaffMember};
use workshop_planner::summary::WindowSummary;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// Monday 2025-01-06 through Friday 2025-01-10
fn workweek() -> Window {
    Window::new(d(2025, 1, 6), d(2025, 1, 10))
}

fn forty_hour_project() -> Project {
    let mut project = Project::new("p1", "Garden office");
    project.expected_hours = Some(40.0);
    project.value = Some(1000.0);
    project.manufacturing_start = Some(d(2025, 1, 6));
    project.manufacturing_end = Some(d(2025, 1, 10));
    project
}

#[test]
fn fully_booked_week_has_no_free_hours() {
    let staff = vec![StaffMember::new("amy", "Amy")];
    let summary = WindowSummary::compute(workweek(), &staff, &[], &[forty_hour_project()]);
    assert_eq!(summary.capacity_hours, 40.0);
    assert_eq!(summary.demand_hours, 40.0);
    assert_eq!(summary.free_hours, 0.0);
    assert_eq!(summary.holiday_days, 0);
    assert!((summary.total_value - 1000.0).abs() < 1e-9);
    assert!(!summary.is_overbooked());
}

#[test]
fn holidays_tip_the_week_into_overbooking() {
    let staff = vec![StaffMember::new("amy", "Amy")];
    // Tuesday and Wednesday off
    let holidays = vec![HolidayInterval::new("amy", d(2025, 1, 7), d(2025, 1, 8))];
    let summary = WindowSummary::compute(workweek(), &staff, &holidays, &[forty_hour_project()]);
    assert_eq!(summary.capacity_hours, 24.0);
    assert_eq!(summary.demand_hours, 40.0);
    assert_eq!(summary.free_hours, -16.0);
    assert_eq!(summary.holiday_days, 2);
    assert!(summary.is_overbooked());
}

#[test]
fn report_line_carries_the_headline_figures() {
    let staff = vec![StaffMember::new("amy", "Amy")];
    let summary = WindowSummary::compute(workweek(), &staff, &[], &[]);
    let line = summary.to_report_line();
    assert!(line.contains("window=2025-01-06..2025-01-10"));
    assert!(line.contains("capacity=40"));
    assert!(line.contains("demand=0"));
    assert!(line.contains("free=40"));
    // Zero figures stay out of the line
    assert!(!line.contains("holiday_days"));
    assert!(!line.contains("value"));
}

#[test]
fn empty_snapshot_never_renders_negative_zero() {
    let summary = WindowSummary::compute(workweek(), &[], &[], &[]);
    assert!(summary.capacity_hours.is_sign_positive());
    assert!(summary.demand_hours.is_sign_positive());
    let line = summary.to_report_line();
    assert!(line.contains("capacity=0, demand=0, free=0"));
    assert!(!line.contains("-0"));
}

#[test]
fn collapsed_groups_feed_the_summary_like_any_project() {
    let mut first = forty_hour_project();
    first.group_id = Some("job-1".to_string());
    first.expected_hours = Some(24.0);
    let mut second = forty_hour_project();
    second.id = "p2".to_string();
    second.group_id = Some("job-1".to_string());
    second.expected_hours = Some(16.0);
    second.value = Some(500.0);

    let staff = vec![StaffMember::new("amy", "Amy")];
    let combined = collapse(&[first, second]).into_combined();
    let summary = WindowSummary::compute(workweek(), &staff, &[], &combined);
    assert_eq!(summary.demand_hours, 40.0);
    assert!((summary.total_value - 1500.0).abs() < 1e-9);
}

#[test]
fn summary_serializes_round_trip() {
    let staff = vec![StaffMember::new("amy", "Amy")];
    let summary = WindowSummary::compute(workweek(), &staff, &[], &[forty_hour_project()]);
    let json = serde_json::to_string(&summary).unwrap();
    let back: WindowSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back.capacity_hours, summary.capacity_hours);
    assert_eq!(back.window, summary.window);
}
