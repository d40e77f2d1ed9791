use anyhow::Context;
use log::{error, info, warn};
use std::env;
use std::path::Path;

use storefront::clock::SystemClock;
use storefront::data_feed::fetch_data;
use storefront::intro::fizz_buzz;
use storefront::pricing::discount::calculate_discount;
use storefront::services::accounts::{login, sign_up};
use storefront::services::capabilities::{CreditCard, Order};
use storefront::services::currency::get_price_in_currency;
use storefront::services::orders::submit_order;
use storefront::services::pages::render_page;
use storefront::services::providers::{
    AcceptingPaymentGateway, FixedRateTable, FlatRateShipping, LoggingAnalytics, LoggingMailer,
    RandomCodeGenerator,
};
use storefront::services::shipping::get_shipping_info;
use storefront::settings::StorefrontSettings;
use storefront::{Stack, Storefront};

const DEMO_EMAIL: &str = "name@gmail.com";

fn main() -> anyhow::Result<()> {
    let log_environment =
        env_logger::Env::default().default_filter_or(Storefront::reasonable_log_filter());
    env_logger::Builder::from_env(log_environment).init();

    let settings = match env::args().nth(1) {
        Some(path) => StorefrontSettings::load(Path::new(&path))
            .with_context(|| format!("failed to load settings from {path}"))?,
        None => StorefrontSettings::default(),
    };
    let storefront = Storefront::new(settings).context("settings were rejected")?;

    pollster::block_on(run(&storefront))
}

async fn run(storefront: &Storefront) -> anyhow::Result<()> {
    info!("store online: {}", storefront.is_online(&SystemClock));
    info!("fizz buzz of 15: {}", fizz_buzz(15));

    for coupon in storefront.coupons() {
        info!("coupon {} gives {}% off", coupon.code, coupon.discount * 100.0);
    }
    info!("SAVE10 on 10: {}", calculate_discount(10.0, "SAVE10")?);

    match storefront.can_drive(16, "UK") {
        Ok(allowed) => info!("16 year old may drive in the UK: {allowed}"),
        Err(e) => warn!("{e}"),
    }

    let mut history = Stack::new();
    for page in ["/home", "/catalogue", "/checkout"] {
        history.push(page);
    }
    info!("last visited page: {}", history.peek()?);

    let rates = FixedRateTable::new("USD").with_rate("AUD", 1.5);
    info!("10 USD in AUD: {}", get_price_in_currency(&rates, 10.0, "AUD"));
    info!("{}", get_shipping_info(&FlatRateShipping::new(10.0, 2), "London"));

    info!("rendered: {}", render_page(&LoggingAnalytics).await);

    let order = Order { total_amount: 10.0 };
    let outcome = submit_order(&AcceptingPaymentGateway, &order, &CreditCard::new("1234")).await;
    info!("order outcome: {outcome:?}");

    let mailer = LoggingMailer;
    if false == sign_up(&mailer, DEMO_EMAIL).await? {
        error!("sign up of {DEMO_EMAIL} was rejected");
    }
    login(&RandomCodeGenerator, &mailer, DEMO_EMAIL).await?;

    match fetch_data().await {
        Ok(data) => info!("fetched {data:?}"),
        Err(e) => error!("{e}"),
    }

    Ok(())
}
