#[cfg(test)]
pub(crate) mod tests {
    use crate::services::capabilities::{AnalyticsTracker, ChargeResult, CreditCard, EmailSender, ExchangeRateProvider, PaymentProcessor, SecurityCode, SecurityCodeGenerator, ShippingQuote, ShippingQuoteProvider};
    use crate::services::providers::RandomCodeGenerator;
    use crate::services::ServiceError;
    use crate::tests::scaffolding::call_recorder::tests::CallRecorder;
    use test_context::TestContext;

    pub(crate) struct MockExchangeRates {
        pub(crate) get_rate: CallRecorder<(String, String), f64>,
    }

    impl ExchangeRateProvider for MockExchangeRates {
        fn get_rate(&self, from: &str, to: &str) -> f64 {
            self.get_rate.record((from.to_string(), to.to_string())).unwrap_or_default()
        }
    }

    pub(crate) struct MockShippingQuotes {
        pub(crate) get_shipping_quote: CallRecorder<String, Option<ShippingQuote>>,
    }

    impl ShippingQuoteProvider for MockShippingQuotes {
        fn get_shipping_quote(&self, destination: &str) -> Option<ShippingQuote> {
            self.get_shipping_quote.record(destination.to_string()).flatten()
        }
    }

    pub(crate) struct MockAnalytics {
        pub(crate) track_page_view: CallRecorder<String, ()>,
    }

    impl AnalyticsTracker for MockAnalytics {
        fn track_page_view(&self, path: &str) {
            _ = self.track_page_view.record(path.to_string());
        }
    }

    pub(crate) struct MockPayments {
        pub(crate) charge: CallRecorder<(CreditCard, f64), ChargeResult>,
    }

    impl PaymentProcessor for MockPayments {
        async fn charge(&self, card: &CreditCard, amount: f64) -> ChargeResult {
            self.charge
                .record((card.clone(), amount))
                .unwrap_or_else(|| panic!("charge of {amount} was not scripted"))
        }
    }

    /// Delivers successfully unless scripted otherwise.
    pub(crate) struct MockMailer {
        pub(crate) send_email: CallRecorder<(String, String), Result<(), ServiceError>>,
    }

    impl EmailSender for MockMailer {
        async fn send_email(&self, to: &str, message: &str) -> Result<(), ServiceError> {
            self.send_email.record((to.to_string(), message.to_string())).unwrap_or(Ok(()))
        }
    }

    /// Passes through to the wrapped generator and remembers what it produced.
    pub(crate) struct SpyCodeGenerator<G: SecurityCodeGenerator> {
        inner: G,
        pub(crate) generate_code: CallRecorder<(), SecurityCode>,
    }

    impl<G: SecurityCodeGenerator> SpyCodeGenerator<G> {
        #[must_use]
        pub(crate) fn on(inner: G) -> Self {
            Self { inner, generate_code: CallRecorder::new() }
        }
    }

    impl<G: SecurityCodeGenerator> SecurityCodeGenerator for SpyCodeGenerator<G> {
        fn generate_code(&self) -> SecurityCode {
            let code = self.inner.generate_code();
            self.generate_code.record_result((), code);
            code
        }
    }

    pub(crate) struct ServiceDoubles {
        pub(crate) rates: MockExchangeRates,
        pub(crate) quotes: MockShippingQuotes,
        pub(crate) analytics: MockAnalytics,
        pub(crate) payments: MockPayments,
        pub(crate) mailer: MockMailer,
        pub(crate) codes: SpyCodeGenerator<RandomCodeGenerator>,
    }

    impl ServiceDoubles {
        #[must_use]
        pub(crate) fn new() -> Self {
            Self {
                rates: MockExchangeRates { get_rate: CallRecorder::new() },
                quotes: MockShippingQuotes { get_shipping_quote: CallRecorder::new() },
                analytics: MockAnalytics { track_page_view: CallRecorder::new() },
                payments: MockPayments { charge: CallRecorder::new() },
                mailer: MockMailer { send_email: CallRecorder::new() },
                codes: SpyCodeGenerator::on(RandomCodeGenerator),
            }
        }

        pub(crate) fn clear_all(&self) {
            self.rates.get_rate.clear();
            self.quotes.get_shipping_quote.clear();
            self.analytics.track_page_view.clear();
            self.payments.charge.clear();
            self.mailer.send_email.clear();
            self.codes.generate_code.clear();
        }
    }

    impl TestContext for ServiceDoubles {
        fn setup() -> ServiceDoubles {
            ServiceDoubles::new()
        }

        fn teardown(self) {
            self.clear_all();
        }
    }
}
