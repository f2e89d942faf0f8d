use crate::renewal::{RenewalOption, RenewalSummary};
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Other,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let method = match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Other => "other",
        };
        write!(f, "{method}")
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "transfer" => Ok(PaymentMethod::Transfer),
            "other" => Ok(PaymentMethod::Other),
            _ => Err(format!("Unknown payment method [{value}]")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
pub struct Payment {
    id: i32,
    member_id: i32,
    amount_in_cents: i64,
    payment_method: PaymentMethod,
    payment_date: NaiveDate,
    months_paid: u32,
    new_end_date: NaiveDate,
}

impl Payment {
    pub fn new(
        id: i32,
        member_id: i32,
        amount_in_cents: i64,
        payment_method: PaymentMethod,
        payment_date: NaiveDate,
        months_paid: u32,
        new_end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            member_id,
            amount_in_cents,
            payment_method,
            payment_date,
            months_paid,
            new_end_date,
        }
    }
}

/// Body of a payment recording request.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct PaymentToRecord {
    amount_in_cents: i64,
    payment_method: PaymentMethod,
    months_paid: i64,
    renewal: RenewalOption,
}

impl PaymentToRecord {
    pub fn new(
        amount_in_cents: i64,
        payment_method: PaymentMethod,
        months_paid: i64,
        renewal: RenewalOption,
    ) -> Self {
        Self {
            amount_in_cents,
            payment_method,
            months_paid,
            renewal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct RecordedPayment {
    payment: Payment,
    renewal: RenewalSummary,
}

impl RecordedPayment {
    pub fn new(payment: Payment, renewal: RenewalSummary) -> Self {
        Self { payment, renewal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_displayed_payment_method() {
        for method in [
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::Transfer,
            PaymentMethod::Other,
        ] {
            assert_eq!(Ok(method), PaymentMethod::from_str(&method.to_string()));
        }
    }

    #[test]
    fn should_fail_to_parse_unknown_payment_method() {
        assert!(PaymentMethod::from_str("cheque").is_err());
    }
}
