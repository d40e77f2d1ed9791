use crate::settings::{default_driving_ages, StorefrontSettings};
use log::warn;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrivingError {
    #[error("Invalid country code: {what:?}")]
    InvalidCountryCode { what: String },
}

/// Legal driving age per country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrivingRules {
    legal_ages: BTreeMap<String, u32>,
}

impl Default for DrivingRules {
    fn default() -> Self {
        Self { legal_ages: default_driving_ages() }
    }
}

impl DrivingRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_settings(settings: &StorefrontSettings) -> Self {
        Self { legal_ages: settings.legal_driving_ages.clone() }
    }

    #[must_use]
    pub fn legal_age(&self, country_code: &str) -> Option<u32> {
        self.legal_ages.get(country_code).copied()
    }

    pub fn can_drive(&self, age: u32, country_code: &str) -> Result<bool, DrivingError> {
        match self.legal_age(country_code) {
            Some(legal_age) => Ok(age >= legal_age),
            None => {
                warn!("no driving rules for country {country_code:?}");
                Err(DrivingError::InvalidCountryCode { what: country_code.to_string() })
            }
        }
    }
}

pub fn can_drive(age: u32, country_code: &str) -> Result<bool, DrivingError> {
    DrivingRules::default().can_drive(age, country_code)
}
