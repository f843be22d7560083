use chrono::NaiveDate;

use crate::calendar::{Window, overlap};
use crate::project::Project;

type Span = (NaiveDate, NaiveDate);

/// Packs projects into non-overlapping display rows by manufacturing span.
///
/// Greedy and input-order stable: each project lands in the first existing
/// row where it overlaps nothing already placed, else a new row opens. This
/// is not guaranteed optimal for every ordering, but it is deterministic
/// for a fixed input order, which stable re-rendering relies on. Projects
/// without manufacturing dates, or whose span misses the window, are left
/// out entirely.
pub fn pack<'a>(projects: &'a [Project], window: Window) -> Vec<Vec<&'a Project>> {
    pack_spans(projects, window, Project::manufacturing_span)
}

/// Same packing over installation spans. Computed independently of `pack`;
/// the two results never share row indices.
pub fn pack_installation<'a>(projects: &'a [Project], window: Window) -> Vec<Vec<&'a Project>> {
    pack_spans(projects, window, Project::installation_span)
}

fn pack_spans<'a>(
    projects: &'a [Project],
    window: Window,
    span_of: fn(&Project) -> Option<Span>,
) -> Vec<Vec<&'a Project>> {
    let mut rows: Vec<Vec<&Project>> = Vec::new();

    for project in projects {
        let Some(span) = span_of(project) else {
            continue;
        };
        if window.overlap(span.0, span.1).is_none() {
            continue;
        }

        let free_row = rows.iter_mut().find(|row| {
            row.iter()
                .all(|placed| span_of(placed).is_none_or(|other| overlap(span, other).is_none()))
        });
        match free_row {
            Some(row) => row.push(project),
            None => rows.push(vec![project]),
        }
    }

    rows
}
