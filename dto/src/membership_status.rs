use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Expired,
}

impl MembershipStatus {
    /// A membership stays active up to and including its end date.
    /// A membership without any end date has never been paid for.
    pub fn compute(end_date: Option<&NaiveDate>, today: &NaiveDate) -> Self {
        match end_date {
            Some(end_date) if today <= end_date => MembershipStatus::Active,
            _ => MembershipStatus::Expired,
        }
    }
}

impl Display for MembershipStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipStatus::Active => write!(f, "active"),
            MembershipStatus::Expired => write!(f, "expired"),
        }
    }
}

impl FromStr for MembershipStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(MembershipStatus::Active),
            "expired" => Ok(MembershipStatus::Expired),
            _ => Err(format!("Unknown membership status [{value}]")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        end_date = {
            NaiveDate::from_ymd_opt(2025, 10, 16),
            NaiveDate::from_ymd_opt(2025, 10, 15),
            NaiveDate::from_ymd_opt(2025, 10, 14),
            None,
        },
        expected_status = {
            MembershipStatus::Active,
            MembershipStatus::Active,
            MembershipStatus::Expired,
            MembershipStatus::Expired,
        }
    )]
    fn should_compute_status(end_date: Option<NaiveDate>, expected_status: MembershipStatus) {
        let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        assert_eq!(
            expected_status,
            MembershipStatus::compute(end_date.as_ref(), &today)
        );
    }

    #[test]
    fn should_parse_displayed_status() {
        for status in [MembershipStatus::Active, MembershipStatus::Expired] {
            assert_eq!(Ok(status), MembershipStatus::from_str(&status.to_string()));
        }
    }

    #[test]
    fn should_fail_to_parse_unknown_status() {
        assert!(MembershipStatus::from_str("frozen").is_err());
    }
}
