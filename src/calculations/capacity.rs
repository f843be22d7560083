use chrono::NaiveDate;

use crate::calendar::{Window, is_workday};
use crate::staff::{HolidayInterval, StaffMember};

/// Total staff-hours available in the window.
///
/// For each member, every workday in the window not covered by one of that
/// member's holiday intervals earns `daily_hours()`. A day covered by
/// several intervals is suppressed once, and a member on holiday for the
/// whole window contributes 0, never a negative figure.
pub fn capacity(window: Window, staff: &[StaffMember], holidays: &[HolidayInterval]) -> f64 {
    staff
        .iter()
        .map(|member| {
            let open_days = window
                .days()
                .filter(|day| is_workday(*day))
                .filter(|day| !on_holiday(member, *day, holidays))
                .count();
            open_days as f64 * member.daily_hours()
        })
        .sum::<f64>()
        // An empty sum is IEEE -0.0; +0.0 keeps it a plain zero.
        + 0.0
}

/// Count of (member, workday) pairs suppressed by a holiday inside the
/// window. Reporting companion to `capacity`: the figure is already
/// reflected there and must not be subtracted again.
pub fn holiday_days(window: Window, staff: &[StaffMember], holidays: &[HolidayInterval]) -> i64 {
    staff
        .iter()
        .map(|member| {
            window
                .days()
                .filter(|day| is_workday(*day))
                .filter(|day| on_holiday(member, *day, holidays))
                .count() as i64
        })
        .sum()
}

fn on_holiday(member: &StaffMember, day: NaiveDate, holidays: &[HolidayInterval]) -> bool {
    holidays
        .iter()
        .any(|interval| interval.staff_id == member.id && interval.covers(day))
}
