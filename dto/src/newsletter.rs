use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which members a newsletter is sent to.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    All,
    Active,
    Expired,
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Newsletter {
    subject: String,
    body: String,
    #[serde(default)]
    audience: Audience,
}

impl Newsletter {
    pub fn new(subject: String, body: String, audience: Audience) -> Self {
        Self {
            subject,
            body,
            audience,
        }
    }
}
