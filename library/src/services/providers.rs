use crate::services::capabilities::{
    AnalyticsTracker, ChargeResult, ChargeStatus, CreditCard, EmailSender, ExchangeRateProvider,
    PaymentProcessor, SecurityCode, SecurityCodeGenerator, ShippingQuote, ShippingQuoteProvider,
};
use crate::services::ServiceError;
use log::{info, warn};
use rand::Rng;
use std::collections::HashMap;

const SECURITY_CODE_UPPER_BOUND: u32 = 1_000_000;

/// Rates are quoted against a single base currency.
pub struct FixedRateTable {
    base: String,
    rates: HashMap<String, f64>,
}

impl FixedRateTable {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into(), rates: HashMap::new() }
    }

    #[must_use]
    pub fn with_rate(mut self, currency: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(currency.into(), rate);
        self
    }

    #[must_use]
    fn rate_from_base(&self, currency: &str) -> Option<f64> {
        if currency == self.base {
            return Some(1.0);
        }
        self.rates.get(currency).copied()
    }
}

impl ExchangeRateProvider for FixedRateTable {
    fn get_rate(&self, from: &str, to: &str) -> f64 {
        match (self.rate_from_base(from), self.rate_from_base(to)) {
            (Some(from_rate), Some(to_rate)) => to_rate / from_rate,
            _ => {
                warn!("no exchange rate for {from} -> {to}, falling back to parity");
                1.0
            }
        }
    }
}

pub struct FlatRateShipping {
    quote: ShippingQuote,
}

impl FlatRateShipping {
    #[must_use]
    pub fn new(cost: f64, estimated_days: u32) -> Self {
        Self { quote: ShippingQuote { cost, estimated_days } }
    }
}

impl ShippingQuoteProvider for FlatRateShipping {
    fn get_shipping_quote(&self, destination: &str) -> Option<ShippingQuote> {
        if destination.trim().is_empty() {
            return None;
        }
        Some(self.quote)
    }
}

#[derive(Default)]
pub struct LoggingAnalytics;

impl AnalyticsTracker for LoggingAnalytics {
    fn track_page_view(&self, path: &str) {
        info!("page view: {path}");
    }
}

/// Declines blank cards and non-positive amounts, accepts everything else.
#[derive(Default)]
pub struct AcceptingPaymentGateway;

impl PaymentProcessor for AcceptingPaymentGateway {
    async fn charge(&self, card: &CreditCard, amount: f64) -> ChargeResult {
        if card.number.trim().is_empty() || false == (amount > 0.0) {
            warn!("declined charge of {amount}");
            return ChargeResult::new(ChargeStatus::Failed);
        }
        info!("charged {amount}");
        ChargeResult::new(ChargeStatus::Success)
    }
}

#[derive(Default)]
pub struct LoggingMailer;

impl EmailSender for LoggingMailer {
    async fn send_email(&self, to: &str, message: &str) -> Result<(), ServiceError> {
        if to.trim().is_empty() {
            return Err(ServiceError::EmailDeliveryError { what: "blank recipient".to_string() });
        }
        info!("email to {to}: {message}");
        Ok(())
    }
}

#[derive(Default)]
pub struct RandomCodeGenerator;

impl SecurityCodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> SecurityCode {
        SecurityCode(rand::thread_rng().gen_range(0..SECURITY_CODE_UPPER_BOUND))
    }
}
