use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
pub struct MembershipPlan {
    id: i32,
    name: String,
    duration_in_months: u32,
    price_in_cents: i64,
    description: Option<String>,
    active: bool,
}

impl MembershipPlan {
    pub fn new(
        id: i32,
        name: String,
        duration_in_months: u32,
        price_in_cents: i64,
        description: Option<String>,
        active: bool,
    ) -> Self {
        Self {
            id,
            name,
            duration_in_months,
            price_in_cents,
            description,
            active,
        }
    }
}
