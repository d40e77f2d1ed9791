pub(crate) mod fake_clock;
pub(crate) mod service_doubles;
