use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    RenewalReminder,
    MembershipExpired,
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::RenewalReminder => write!(f, "renewal_reminder"),
            NotificationKind::MembershipExpired => write!(f, "membership_expired"),
        }
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "renewal_reminder" => Ok(NotificationKind::RenewalReminder),
            "membership_expired" => Ok(NotificationKind::MembershipExpired),
            _ => Err(format!("Unknown notification kind [{value}]")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
pub struct Notification {
    id: i32,
    member_id: i32,
    kind: NotificationKind,
    scheduled_date: NaiveDate,
    sent: bool,
}

impl Notification {
    pub fn new(
        id: i32,
        member_id: i32,
        kind: NotificationKind,
        scheduled_date: NaiveDate,
        sent: bool,
    ) -> Self {
        Self {
            id,
            member_id,
            kind,
            scheduled_date,
            sent,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Default, Clone)]
pub struct DispatchReport {
    sent: usize,
    failed: usize,
}

impl DispatchReport {
    pub fn new(sent: usize, failed: usize) -> Self {
        Self { sent, failed }
    }

    pub fn add_sent(&mut self) {
        self.sent += 1;
    }

    pub fn add_failed(&mut self) {
        self.failed += 1;
    }
}
