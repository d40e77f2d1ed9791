use crate::pricing::coupon::Coupon;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

const HOURS_IN_DAY: u32 = 24;

pub const DEFAULT_OPENING_HOUR: u32 = 8;
pub const DEFAULT_CLOSING_HOUR: u32 = 20;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("io problem while loading settings: {what:?}")]
    IoError { what: String },
    #[error("format problem while loading settings: {what:?}")]
    FormatError { what: String },
    #[error("invalid settings content: {what:?}")]
    ContentError { what: String },
}

/// Half-open `[open, close)` interval of hours of the day.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub open: u32,
    pub close: u32,
}

impl OpeningHours {
    #[must_use]
    pub const fn new(open: u32, close: u32) -> Self {
        Self { open, close }
    }

    #[must_use]
    pub fn contains(&self, hour: u32) -> bool {
        self.open <= hour && hour < self.close
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self::new(DEFAULT_OPENING_HOUR, DEFAULT_CLOSING_HOUR)
    }
}

#[must_use]
pub(crate) fn default_driving_ages() -> BTreeMap<String, u32> {
    BTreeMap::from([("US".to_string(), 16), ("UK".to_string(), 17)])
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorefrontSettings {
    pub opening_hours: OpeningHours,
    pub legal_driving_ages: BTreeMap<String, u32>,
    pub coupons: Vec<Coupon>,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            opening_hours: OpeningHours::default(),
            legal_driving_ages: default_driving_ages(),
            coupons: Coupon::default_catalogue(),
        }
    }
}

impl StorefrontSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_opening_hours(mut self, open: u32, close: u32) -> Self {
        self.opening_hours = OpeningHours::new(open, close);
        self
    }

    #[must_use]
    pub fn with_driving_age(mut self, country_code: impl Into<String>, age: u32) -> Self {
        self.legal_driving_ages.insert(country_code.into(), age);
        self
    }

    #[must_use]
    pub fn with_coupons(mut self, coupons: Vec<Coupon>) -> Self {
        self.coupons = coupons;
        self
    }

    pub fn load(source_file: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(source_file)
            .map_err(|e| SettingsError::IoError { what: e.to_string() })?;
        let settings = Self::from_json(&content)?;
        info!("settings loaded from {source_file:?}");
        Ok(settings)
    }

    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        let settings: StorefrontSettings = serde_json::from_str(content)
            .map_err(|e| SettingsError::FormatError { what: e.to_string() })?;
        settings.validate()?;
        debug!("parsed settings: {settings:?}");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let hours = self.opening_hours;
        if hours.close > HOURS_IN_DAY || hours.open >= hours.close {
            let (open, close) = (hours.open, hours.close);
            let what = format!("opening hours {open}..{close} are not a day interval");
            return Err(SettingsError::ContentError { what });
        }

        if let Some(blank) = self.legal_driving_ages.keys().find(|code| code.trim().is_empty()) {
            let what = format!("blank country code {blank:?}");
            return Err(SettingsError::ContentError { what });
        }

        for coupon in self.coupons.iter() {
            if false == coupon.is_valid() {
                let what = format!("malformed coupon {coupon:?}");
                return Err(SettingsError::ContentError { what });
            }
        }

        Ok(())
    }
}
