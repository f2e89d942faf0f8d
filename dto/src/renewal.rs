use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How the new end date of a membership is anchored.
/// The custom date is kept as text so that a malformed date
/// can be reported as an invalid request rather than a malformed body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(tag = "anchor", rename_all = "snake_case")]
pub enum RenewalOption {
    FromEnd,
    FromToday,
    Custom { custom_date: Option<String> },
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct RenewalPreview {
    months_paid: i64,
    renewal: RenewalOption,
}

impl RenewalPreview {
    pub fn new(months_paid: i64, renewal: RenewalOption) -> Self {
        Self {
            months_paid,
            renewal,
        }
    }
}

/// Outcome of a renewal, as returned to API clients.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct RenewalSummary {
    effective_start_date: NaiveDate,
    new_end_date: NaiveDate,
    notification_date: NaiveDate,
    reactivated: bool,
}

impl RenewalSummary {
    pub fn new(
        effective_start_date: NaiveDate,
        new_end_date: NaiveDate,
        notification_date: NaiveDate,
        reactivated: bool,
    ) -> Self {
        Self {
            effective_start_date,
            new_end_date,
            notification_date,
            reactivated,
        }
    }
}
