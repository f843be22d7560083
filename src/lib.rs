pub mod calculations;
pub mod calendar;
pub mod grouping;
pub mod packing;
pub mod project;
pub mod staff;
pub mod summary;

pub use calculations::capacity::{capacity, holiday_days};
pub use calculations::demand::{demand, project_demand};
pub use calculations::value::{proportional_value, total_value};
pub use calendar::{
    Days, Window, count_workdays, days_in_range, is_workday, iso_week_number, month_boundaries,
    overlap, week_boundaries,
};
pub use grouping::{CollapseResult, GROUP_ID_PREFIX, collapse};
pub use packing::{pack, pack_installation};
pub use project::{ProcessAssignment, Project};
pub use staff::{HolidayInterval, StaffMember};
pub use summary::WindowSummary;
