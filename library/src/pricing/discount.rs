use log::debug;
use thiserror::Error;

const DISCOUNT_CODES: [(&str, f64); 2] = [
    ("SAVE10", 0.1),
    ("SAVE20", 0.2),
];

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid price")]
    InvalidPrice,
    #[error("Invalid discount code")]
    InvalidDiscountCode,
}

/// Unknown codes, whitespace included, leave the price untouched.
pub fn calculate_discount(price: f64, discount_code: &str) -> Result<f64, PricingError> {
    if false == price.is_finite() || price <= 0.0 {
        return Err(PricingError::InvalidPrice);
    }
    if discount_code.is_empty() {
        return Err(PricingError::InvalidDiscountCode);
    }

    let discount = DISCOUNT_CODES
        .iter()
        .find(|(code, _)| *code == discount_code)
        .map_or(0.0, |(_, discount)| *discount);
    debug!("discount {discount} applied for code {discount_code:?}");

    Ok(price - price * discount)
}

#[must_use]
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}
