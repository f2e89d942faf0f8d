use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of a member creation or update.
/// When no end date is given, it is derived from the plan, if any.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MemberToSave {
    last_name: String,
    first_name: String,
    email_address: String,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    plan_id: Option<i32>,
    start_date: NaiveDate,
    #[serde(default)]
    end_date: Option<NaiveDate>,
}

impl MemberToSave {
    pub fn new(
        last_name: String,
        first_name: String,
        email_address: String,
        phone_number: Option<String>,
        plan_id: Option<i32>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            last_name,
            first_name,
            email_address,
            phone_number,
            plan_id,
            start_date,
            end_date,
        }
    }
}
