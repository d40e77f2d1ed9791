use crate::services::capabilities::{ChargeStatus, CreditCard, Order, PaymentProcessor};
use log::{info, warn};

pub const PAYMENT_ERROR: &str = "payment_error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl OrderOutcome {
    #[must_use]
    pub fn succeeded() -> Self {
        Self { success: true, error: None }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()) }
    }
}

pub async fn submit_order<P>(payments: &P, order: &Order, card: &CreditCard) -> OrderOutcome
where
    P: PaymentProcessor,
{
    let charge = payments.charge(card, order.total_amount).await;
    match charge.status {
        ChargeStatus::Success => {
            info!("order of {} charged", order.total_amount);
            OrderOutcome::succeeded()
        }
        ChargeStatus::Failed => {
            warn!("payment of {} declined", order.total_amount);
            OrderOutcome::failed(PAYMENT_ERROR)
        }
    }
}
