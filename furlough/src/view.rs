use chrono::NaiveDate;
use serde::Serialize;

use crate::directory::UserDirectory;
use crate::leave::Leave;

/// Length of an inclusive date range, in days.
///
/// A single-day leave counts as one day. Total over any pair of decoded
/// dates; an inverted range yields a non-positive count, which validation
/// keeps out of stored records.
pub fn number_of_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// A leave enriched with the fields the tables display.
///
/// Derived, never persisted: the extra fields are recomputed from the raw
/// records and the user directory on every projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveView {
    #[serde(flatten)]
    pub leave: Leave,
    pub number_of_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Derives the display fields for every record.
///
/// Pure and stateless. A `user_id` that does not resolve leaves `user_name`
/// unset rather than failing the projection.
pub fn project(leaves: &[Leave], directory: &UserDirectory) -> Vec<LeaveView> {
    leaves
        .iter()
        .map(|leave| LeaveView {
            number_of_days: number_of_days(leave.start_date, leave.end_date),
            user_name: directory.resolve(&leave.user_id).map(|user| user.name.clone()),
            leave: leave.clone(),
        })
        .collect()
}

/// Anything attributable to a single user.
pub trait OwnedBy {
    fn user_id(&self) -> &str;
}

impl OwnedBy for Leave {
    fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl OwnedBy for LeaveView {
    fn user_id(&self) -> &str {
        &self.leave.user_id
    }
}

/// Partitions records by user.
///
/// Groups appear in first-seen order of their user id, and records keep
/// their relative order within each group.
pub fn group_by_user<T: OwnedBy>(items: &[T]) -> Vec<(&str, Vec<&T>)> {
    let mut groups: Vec<(&str, Vec<&T>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(id, _)| *id == item.user_id()) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.user_id(), vec![item])),
        }
    }
    groups
}
