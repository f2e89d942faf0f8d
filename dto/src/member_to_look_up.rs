use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Getters, Debug, Serialize, Deserialize)]
pub struct MemberToLookUp {
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    email_address: Option<String>,
}

impl MemberToLookUp {
    pub fn new(
        last_name: Option<String>,
        first_name: Option<String>,
        email_address: Option<String>,
    ) -> Self {
        Self {
            last_name,
            first_name,
            email_address,
        }
    }

    pub fn is_empty(&self) -> bool {
        [&self.last_name, &self.first_name, &self.email_address]
            .iter()
            .all(|field| field.as_deref().is_none_or(|value| value.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_empty() {
        assert!(MemberToLookUp::new(None, None, None).is_empty());
        assert!(MemberToLookUp::new(Some("  ".to_owned()), None, None).is_empty());
    }

    #[test]
    fn should_not_be_empty() {
        assert!(!MemberToLookUp::new(None, Some("Jon".to_owned()), None).is_empty());
    }
}
