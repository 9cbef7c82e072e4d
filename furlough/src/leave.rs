use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Longest reason a record may carry, in characters.
pub const REASON_MAX_LEN: usize = 50;

/// A directory entry: someone a leave can be recorded for.
///
/// Reference data, loaded once at startup and never mutated by this library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "canonical_id")]
    pub id: String,
    pub name: String,
}

/// Category of a requested absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Personal,
    Sick,
    Vacation,
    Bereavement,
}

impl LeaveType {
    /// Human-readable label, as shown in table cells.
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Sick => "Sick",
            Self::Vacation => "Vacation",
            Self::Bereavement => "Bereavement",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A persisted absence record for one user spanning an inclusive date range.
///
/// The wire form is camelCase JSON with the category under `type`, the layout
/// of the stored document. Ids are canonical strings; numeric ids found in
/// older documents are normalized while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    #[serde(deserialize_with = "canonical_id")]
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: LeaveType,
    pub reason: String,
    #[serde(deserialize_with = "canonical_id")]
    pub user_id: String,
}

impl Leave {
    /// Checks the record invariants, see [`ValidationError`].
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_fields(self.start_date, self.end_date, &self.reason, &self.user_id)
    }
}

/// A leave that has not been persisted yet.
///
/// Drafts carry no id; the repository assigns one on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: LeaveType,
    pub reason: String,
    #[serde(deserialize_with = "canonical_id")]
    pub user_id: String,
}

impl LeaveDraft {
    /// Checks the record invariants, see [`ValidationError`].
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_fields(self.start_date, self.end_date, &self.reason, &self.user_id)
    }

    pub(crate) fn into_leave(self, id: String) -> Leave {
        Leave {
            id,
            start_date: self.start_date,
            end_date: self.end_date,
            kind: self.kind,
            reason: self.reason,
            user_id: self.user_id,
        }
    }
}

/// Violation of one of the record invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("end date {end} must not be before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("a reason is required")]
    MissingReason,
    #[error("reason cannot be longer than 50 characters (got {0})")]
    ReasonTooLong(usize),
    #[error("a user is required")]
    MissingUser,
}

fn check_fields(
    start: NaiveDate,
    end: NaiveDate,
    reason: &str,
    user_id: &str,
) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::EndBeforeStart { start, end });
    }
    if reason.trim().is_empty() {
        return Err(ValidationError::MissingReason);
    }
    let len = reason.chars().count();
    if len > REASON_MAX_LEN {
        return Err(ValidationError::ReasonTooLong(len));
    }
    if user_id.is_empty() {
        return Err(ValidationError::MissingUser);
    }
    Ok(())
}

/// Accepts both string and numeric ids, normalizing to the canonical string
/// form at the decoding boundary.
fn canonical_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Leave {
        Leave {
            id: "l1".into(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 3),
            kind: LeaveType::Sick,
            reason: "flu".into(),
            user_id: "u1".into(),
        }
    }

    #[test]
    fn wire_form_matches_the_stored_document() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "l1",
                "startDate": "2024-01-01",
                "endDate": "2024-01-03",
                "type": "sick",
                "reason": "flu",
                "userId": "u1",
            })
        );

        let decoded: Leave = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn numeric_ids_decode_to_canonical_strings() {
        let user: User = serde_json::from_value(json!({"id": 7, "name": "Grace"})).unwrap();
        assert_eq!(user.id, "7");

        let leave: Leave = serde_json::from_value(json!({
            "id": 12,
            "startDate": "2024-01-01",
            "endDate": "2024-01-01",
            "type": "personal",
            "reason": "errand",
            "userId": 7,
        }))
        .unwrap();
        assert_eq!(leave.id, "12");
        assert_eq!(leave.user_id, "7");
    }

    #[test]
    fn malformed_dates_do_not_decode() {
        let result: Result<Leave, _> = serde_json::from_value(json!({
            "id": "l1",
            "startDate": "not-a-date",
            "endDate": "2024-01-03",
            "type": "sick",
            "reason": "flu",
            "userId": "u1",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn date_range_must_not_be_inverted() {
        let mut leave = sample();
        leave.end_date = date(2023, 12, 31);
        assert_eq!(
            leave.validate(),
            Err(ValidationError::EndBeforeStart {
                start: date(2024, 1, 1),
                end: date(2023, 12, 31),
            })
        );

        // One-day leaves are fine.
        leave.end_date = leave.start_date;
        assert_eq!(leave.validate(), Ok(()));
    }

    #[test]
    fn reason_is_required_and_bounded() {
        let mut leave = sample();
        leave.reason = "  ".into();
        assert_eq!(leave.validate(), Err(ValidationError::MissingReason));

        leave.reason = "x".repeat(REASON_MAX_LEN + 1);
        assert_eq!(
            leave.validate(),
            Err(ValidationError::ReasonTooLong(REASON_MAX_LEN + 1))
        );

        leave.reason = "x".repeat(REASON_MAX_LEN);
        assert_eq!(leave.validate(), Ok(()));
    }

    #[test]
    fn a_user_is_required() {
        let mut leave = sample();
        leave.user_id.clear();
        assert_eq!(leave.validate(), Err(ValidationError::MissingUser));
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(LeaveType::Personal.label(), "Personal");
        assert_eq!(LeaveType::Bereavement.to_string(), "Bereavement");
        assert_eq!(
            serde_json::to_value(LeaveType::Vacation).unwrap(),
            json!("vacation")
        );
    }
}
