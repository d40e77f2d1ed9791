use crate::services::capabilities::ShippingQuoteProvider;
use log::debug;

pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";

#[must_use]
pub fn get_shipping_info<Q: ShippingQuoteProvider>(quotes: &Q, destination: &str) -> String {
    match quotes.get_shipping_quote(destination) {
        Some(quote) => format!("Shipping Cost: ${} ({} Days)", quote.cost, quote.estimated_days),
        None => {
            debug!("no shipping quote for {destination:?}");
            SHIPPING_UNAVAILABLE.to_string()
        }
    }
}
