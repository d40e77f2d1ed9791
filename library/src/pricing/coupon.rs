use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Coupon {
    pub code: String,
    pub discount: f64,
}

impl Coupon {
    #[must_use]
    pub fn new(code: impl Into<String>, discount: f64) -> Self {
        Self { code: code.into(), discount }
    }

    /// Non-blank code and a discount strictly between zero and one.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        false == self.code.trim().is_empty() && self.discount > 0.0 && self.discount < 1.0
    }

    #[must_use]
    pub(crate) fn default_catalogue() -> Vec<Coupon> {
        vec![
            Coupon::new("SAVE20NOW", 0.2),
            Coupon::new("DISCOUNT50OFF", 0.5),
        ]
    }
}

#[must_use]
pub fn get_coupons() -> Vec<Coupon> {
    Coupon::default_catalogue()
}
