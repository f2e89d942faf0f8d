use crate::membership_status::MembershipStatus;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
pub struct Member {
    id: i32,
    last_name: String,
    first_name: String,
    email_address: String,
    phone_number: Option<String>,
    plan_id: Option<i32>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: MembershipStatus,
    last_payment_date: Option<NaiveDate>,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        last_name: String,
        first_name: String,
        email_address: String,
        phone_number: Option<String>,
        plan_id: Option<i32>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        status: MembershipStatus,
        last_payment_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            last_name,
            first_name,
            email_address,
            phone_number,
            plan_id,
            start_date,
            end_date,
            status,
            last_payment_date,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn jon_doe() -> Member {
        Member::new(
            1,
            "Doe".to_owned(),
            "Jon".to_owned(),
            "jon.doe@email.com".to_owned(),
            Some("+33 6 12 34 56 78".to_owned()),
            None,
            NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 15),
            MembershipStatus::Expired,
            NaiveDate::from_ymd_opt(2024, 10, 15),
        )
    }

    pub fn jonette_snow() -> Member {
        Member::new(
            2,
            "Snow".to_owned(),
            "Jonette".to_owned(),
            "jonette.snow@email.com".to_owned(),
            None,
            None,
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 1),
            MembershipStatus::Active,
            NaiveDate::from_ymd_opt(2025, 9, 1),
        )
    }

    pub fn eloise_leveque() -> Member {
        Member::new(
            3,
            "Lévêque".to_owned(),
            "Éloïse".to_owned(),
            "eloise.leveque@email.com".to_owned(),
            None,
            None,
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            None,
            MembershipStatus::Expired,
            None,
        )
    }
}
