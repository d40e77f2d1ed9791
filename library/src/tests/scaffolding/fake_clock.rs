#[cfg(test)]
pub(crate) mod tests {
    use crate::clock::Clock;
    use chrono::NaiveDateTime;
    use std::cell::Cell;

    const SYSTEM_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Stands still until told otherwise.
    pub(crate) struct FakeClock {
        now: Cell<NaiveDateTime>,
    }

    impl FakeClock {
        #[must_use]
        pub(crate) fn at(moment: &str) -> Self {
            Self { now: Cell::new(parse_moment(moment)) }
        }

        pub(crate) fn set_system_time(&self, moment: &str) {
            self.now.set(parse_moment(moment));
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> NaiveDateTime {
            self.now.get()
        }
    }

    #[must_use]
    fn parse_moment(moment: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(moment, SYSTEM_TIME_FORMAT)
            .unwrap_or_else(|e| panic!("malformed moment {moment:?}: {e}"))
    }

    #[test]
    fn test_fake_clock_stands_still() {
        let system_under_test = FakeClock::at("2024-09-10 07:59");

        assert_eq!(system_under_test.now(), system_under_test.now());
        assert_eq!(system_under_test.now().format(SYSTEM_TIME_FORMAT).to_string(), "2024-09-10 07:59");
    }

    #[test]
    fn test_fake_clock_moves_on_demand() {
        let system_under_test = FakeClock::at("2024-09-10 07:59");

        system_under_test.set_system_time("2024-09-10 20:01");

        assert_eq!(system_under_test.now().format(SYSTEM_TIME_FORMAT).to_string(), "2024-09-10 20:01");
    }

    #[test]
    #[should_panic]
    fn test_malformed_moment() {
        _ = FakeClock::at("yesterday");
    }
}
