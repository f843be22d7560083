use std::collections::HashMap;

use crate::project::Project;

/// Prefix for the synthetic identifier of a collapsed group. Deterministic
/// in the group id, so repeated collapses of the same input stay
/// referentially stable.
pub const GROUP_ID_PREFIX: &str = "group:";

/// Result of collapsing a project list by commercial group.
#[derive(Debug, Clone, Default)]
pub struct CollapseResult {
    /// Projects with no group id, in input order, untouched.
    pub ungrouped: Vec<Project>,
    /// One synthetic project per group, in first-appearance order.
    pub grouped: Vec<Project>,
}

impl CollapseResult {
    /// Single list for the downstream calculators and the row packer:
    /// ungrouped projects first, then the synthetic group projects.
    pub fn into_combined(self) -> Vec<Project> {
        let mut combined = self.ungrouped;
        combined.extend(self.grouped);
        combined
    }
}

/// Merges projects sharing a non-empty `group_id` into one synthetic
/// project per group; everything else passes through untouched.
///
/// Merge rules: date bounds are the min start / max end over the members
/// that have the date (absent dates are ignored, not zeroed); value is the
/// sum of finite member values; expected hours is the sum of each member's
/// `effort_hours()`, so a member estimated only through logged hours still
/// counts; process assignments are concatenated with duplicates preserved,
/// since each member's assignment is independently meaningful. Collapsing
/// an already-collapsed list again reproduces the same figures.
pub fn collapse(projects: &[Project]) -> CollapseResult {
    let mut ungrouped = Vec::new();
    let mut group_order: Vec<&str> = Vec::new();
    let mut members: HashMap<&str, Vec<&Project>> = HashMap::new();

    for project in projects {
        match project.group_id.as_deref() {
            Some(group_id) if !group_id.is_empty() => {
                let entry = members.entry(group_id).or_default();
                if entry.is_empty() {
                    group_order.push(group_id);
                }
                entry.push(project);
            }
            _ => ungrouped.push(project.clone()),
        }
    }

    let grouped = group_order
        .iter()
        .map(|group_id| merge_group(group_id, &members[group_id]))
        .collect();

    CollapseResult { ungrouped, grouped }
}

fn merge_group(group_id: &str, members: &[&Project]) -> Project {
    let group_name = members
        .iter()
        .filter_map(|member| member.group_name.clone())
        .find(|name| !name.is_empty());
    let display_name = group_name.clone().unwrap_or_else(|| "Group".to_string());

    let mut merged = Project::new(format!("{GROUP_ID_PREFIX}{group_id}"), display_name);
    merged.group_id = Some(group_id.to_string());
    merged.group_name = group_name;

    merged.manufacturing_start = members.iter().filter_map(|m| m.manufacturing_start).min();
    merged.manufacturing_end = members.iter().filter_map(|m| m.manufacturing_end).max();
    merged.installation_start = members.iter().filter_map(|m| m.installation_start).min();
    merged.installation_end = members.iter().filter_map(|m| m.installation_end).max();

    merged.value = Some(members.iter().map(|m| finite_or_zero(m.value)).sum());
    merged.expected_hours = Some(members.iter().map(|m| m.effort_hours()).sum());

    merged.processes = members
        .iter()
        .flat_map(|m| m.processes.iter().cloned())
        .collect();

    merged
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
