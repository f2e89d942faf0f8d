use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct PlanToSave {
    name: String,
    duration_in_months: u32,
    price_in_cents: i64,
    #[serde(default)]
    description: Option<String>,
}

impl PlanToSave {
    pub fn new(
        name: String,
        duration_in_months: u32,
        price_in_cents: i64,
        description: Option<String>,
    ) -> Self {
        Self {
            name,
            duration_in_months,
            price_in_cents,
            description,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn monthly_plan() -> PlanToSave {
        PlanToSave::new("Monthly".to_owned(), 1, 3_500, None)
    }

    pub fn yearly_plan() -> PlanToSave {
        PlanToSave::new(
            "Yearly".to_owned(),
            12,
            35_000,
            Some("Two months offered".to_owned()),
        )
    }
}
