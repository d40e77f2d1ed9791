#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]

pub mod clock;
pub mod collections;
pub mod data_feed;
pub mod driving;
pub mod intro;
pub mod pricing;
pub mod services;
pub mod settings;

use crate::clock::Clock;
use crate::driving::{DrivingError, DrivingRules};
use crate::pricing::coupon::Coupon;
use crate::settings::{SettingsError, StorefrontSettings};
use log::info;

pub use crate::collections::stack::{EmptyStackError, Stack};

/// Settings-driven entry point for the rules that depend on configuration.
pub struct Storefront {
    settings: StorefrontSettings,
    driving_rules: DrivingRules,
}

impl Storefront {
    #[must_use]
    pub fn reasonable_log_filter() -> &'static str {
        "storefront=info"
    }

    pub fn new(settings: StorefrontSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        info!(
            "storefront opens {}..{}, {} coupons, driving rules for {} countries",
            settings.opening_hours.open,
            settings.opening_hours.close,
            settings.coupons.len(),
            settings.legal_driving_ages.len(),
        );
        Ok(Self::assemble(settings))
    }

    #[must_use]
    fn assemble(settings: StorefrontSettings) -> Self {
        let driving_rules = DrivingRules::from_settings(&settings);
        Self { settings, driving_rules }
    }

    #[must_use]
    pub fn settings(&self) -> &StorefrontSettings {
        &self.settings
    }

    #[must_use]
    pub fn coupons(&self) -> &[Coupon] {
        &self.settings.coupons
    }

    pub fn can_drive(&self, age: u32, country_code: &str) -> Result<bool, DrivingError> {
        self.driving_rules.can_drive(age, country_code)
    }

    #[must_use]
    pub fn is_online<C: Clock>(&self, clock: &C) -> bool {
        services::availability::is_online(clock, &self.settings.opening_hours)
    }
}

impl Default for Storefront {
    /// Default settings are always valid.
    fn default() -> Self {
        Self::assemble(StorefrontSettings::default())
    }
}
