use crate::services::capabilities::{ExchangeRateProvider, BASE_CURRENCY};

#[must_use]
pub fn get_price_in_currency<R>(rates: &R, price: f64, currency: &str) -> f64
where
    R: ExchangeRateProvider,
{
    let rate = rates.get_rate(BASE_CURRENCY, currency);
    price * rate
}
