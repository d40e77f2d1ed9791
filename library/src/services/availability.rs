use crate::clock::Clock;
use crate::settings::OpeningHours;
use chrono::Timelike;

#[must_use]
pub fn is_online<C: Clock>(clock: &C, hours: &OpeningHours) -> bool {
    hours.contains(clock.now().hour())
}
