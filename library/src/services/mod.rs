pub mod accounts;
pub mod availability;
pub mod capabilities;
pub mod currency;
pub mod orders;
pub mod pages;
pub mod providers;
pub mod shipping;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("email delivery failed: {what:?}")]
    EmailDeliveryError {
        what: String,
    },
}
