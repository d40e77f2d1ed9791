#![allow(async_fn_in_trait)]

use crate::services::ServiceError;
use derive_more::Display;

pub const BASE_CURRENCY: &str = "USD";

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCard {
    pub number: String,
}

impl CreditCard {
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: number.into() }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Order {
    pub total_amount: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChargeStatus {
    Success,
    Failed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

impl ChargeResult {
    #[must_use]
    pub const fn new(status: ChargeStatus) -> Self {
        Self { status }
    }
}

#[derive(Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SecurityCode(pub u32);

pub trait ExchangeRateProvider {
    #[must_use]
    fn get_rate(&self, from: &str, to: &str) -> f64;
}

pub trait ShippingQuoteProvider {
    #[must_use]
    fn get_shipping_quote(&self, destination: &str) -> Option<ShippingQuote>;
}

pub trait AnalyticsTracker {
    fn track_page_view(&self, path: &str);
}

pub trait PaymentProcessor {
    async fn charge(&self, card: &CreditCard, amount: f64) -> ChargeResult;
}

pub trait EmailSender {
    async fn send_email(&self, to: &str, message: &str) -> Result<(), ServiceError>;
}

pub trait SecurityCodeGenerator {
    #[must_use]
    fn generate_code(&self) -> SecurityCode;
}
