pub mod coupon;
pub mod discount;
