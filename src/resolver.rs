// Copyright (C) 2017 Hove and/or its affiliates.
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by the
// Free Software Foundation, version 3.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more
// details.

// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>

//! Determination of the services running at a given time. The service
//! identifiers designate which block assignments are currently active.

use crate::calendar_dates::apply_calendar_dates;
use crate::calendars::{select_active_calendars, ActiveCalendars};
use crate::configuration::Configuration;
use crate::objects::{Calendar, ValidityPeriod};
use crate::report::report_expired_calendars;
use crate::store::CalendarStore;
use crate::utils::{from_epoch_millis, local_date};
use crate::validity_period::get_validity_period;
use chrono::{DateTime, Datelike, Utc, Weekday};
use chrono_tz::Tz;
use tracing::{debug, warn};

/// Resolves the services of one agency.
///
/// The resolver holds no mutable state: it can be shared between threads
/// as long as its store can.
#[derive(Debug, Clone)]
pub struct ServiceResolver<S> {
    store: S,
    timezone: Tz,
}

impl<S: CalendarStore> ServiceResolver<S> {
    /// Creates a resolver for an agency whose days are expressed in
    /// `timezone`.
    pub fn new(store: S, timezone: Tz) -> Self {
        ServiceResolver { store, timezone }
    }

    /// Creates a resolver for the agency of `config`.
    pub fn from_config(store: S, config: &Configuration) -> Self {
        Self::new(store, config.timezone())
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Time zone of the agency.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Agency local day of the week of `instant`.
    pub fn day_of_week(&self, instant: DateTime<Utc>) -> Weekday {
        local_date(instant, self.timezone).weekday()
    }

    /// Calendars applying on the agency local day of `instant`.
    ///
    /// No error is logged here when the calendars have expired, see
    /// [`ActiveCalendars::is_error_worthy`].
    pub fn active_calendars(&self, instant: DateTime<Utc>) -> ActiveCalendars<'_> {
        select_active_calendars(self.store.calendars(), local_date(instant, self.timezone))
    }

    /// Service identifiers active at `instant`.
    ///
    /// The services of the calendars running on that day of the week come
    /// first, in store order, then the calendar dates of the day are applied.
    /// A service can appear several times if added several times.
    ///
    /// If every calendar has expired, the ones ending the latest are used and
    /// an error is logged.
    pub fn service_ids(&self, instant: DateTime<Utc>) -> Vec<String> {
        let date = local_date(instant, self.timezone);
        let weekday = date.weekday();
        let active = select_active_calendars(self.store.calendars(), date);
        if active.is_error_worthy() {
            report_expired_calendars(&active.calendars);
        }

        let service_ids: Vec<String> = active
            .calendars
            .iter()
            .filter(|c| c.runs_on(weekday))
            .map(|c| c.service_id().to_string())
            .collect();
        debug!(
            "For {} services from calendar.txt that are active are {:?}",
            instant, service_ids
        );

        apply_calendar_dates(service_ids, self.store.calendar_dates(), date)
    }

    /// Calendars of the services active at `instant`, see
    /// [`ServiceResolver::service_ids`].
    ///
    /// For each service, the first calendar with that identifier is
    /// returned. Services without a calendar, only added by a calendar date,
    /// are skipped.
    pub fn calendars(&self, instant: DateTime<Utc>) -> Vec<&Calendar> {
        let calendars = self.store.calendars();
        self.service_ids(instant)
            .iter()
            .filter_map(|service_id| calendars.iter().find(|c| c.service_id() == service_id))
            .collect()
    }

    /// Same as [`ServiceResolver::service_ids`] for a number of milliseconds
    /// since the epoch.
    pub fn current_service_ids(&self, epoch_millis: i64) -> Vec<String> {
        match from_epoch_millis(epoch_millis) {
            Some(instant) => self.service_ids(instant),
            None => {
                warn!("{} is not a valid epoch time in milliseconds", epoch_millis);
                vec![]
            }
        }
    }

    /// Same as [`ServiceResolver::calendars`] for a number of milliseconds
    /// since the epoch.
    pub fn current_calendars(&self, epoch_millis: i64) -> Vec<&Calendar> {
        match from_epoch_millis(epoch_millis) {
            Some(instant) => self.calendars(instant),
            None => {
                warn!("{} is not a valid epoch time in milliseconds", epoch_millis);
                vec![]
            }
        }
    }

    /// Period covered by the calendars of the store.
    pub fn validity_period(&self) -> Option<ValidityPeriod> {
        get_validity_period(self.store.calendars())
    }

    /// Returns true if no calendar covers the agency local day of `instant`
    /// while the store has some.
    pub fn is_expired(&self, instant: DateTime<Utc>) -> bool {
        self.active_calendars(instant).fallback.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{CalendarDate, Date};
    use crate::store::InMemoryCalendarStore;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tracing::log::Level;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekdays() -> Vec<Weekday> {
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]
    }

    fn resolver(
        calendars: Vec<Calendar>,
        calendar_dates: Vec<CalendarDate>,
    ) -> ServiceResolver<InMemoryCalendarStore> {
        ServiceResolver::new(
            InMemoryCalendarStore::new(calendars, calendar_dates),
            chrono_tz::America::Los_Angeles,
        )
    }

    #[test]
    fn local_day_is_used() {
        let resolver = resolver(
            vec![Calendar::new("wkdy", date(2023, 1, 1), date(2023, 12, 31), weekdays()).unwrap()],
            vec![],
        );
        // Saturday in UTC, still Friday in Los Angeles
        let instant = Utc.with_ymd_and_hms(2023, 6, 17, 5, 0, 0).unwrap();
        assert_eq!(Weekday::Fri, resolver.day_of_week(instant));
        assert_eq!(vec!["wkdy".to_string()], resolver.service_ids(instant));
    }

    #[test]
    fn timezone_from_configuration() {
        let resolver = ServiceResolver::from_config(
            InMemoryCalendarStore::default(),
            &Configuration::default(),
        );
        assert_eq!(chrono_tz::UTC, resolver.timezone());
        let instant = Utc.with_ymd_and_hms(2023, 6, 17, 5, 0, 0).unwrap();
        assert_eq!(Weekday::Sat, resolver.day_of_week(instant));
        assert!(resolver.store().calendars().is_empty());
    }

    #[test]
    fn calendar_dates_of_local_day() {
        let resolver = resolver(
            vec![],
            vec![
                CalendarDate::added("friday", date(2023, 6, 16)),
                CalendarDate::added("saturday", date(2023, 6, 17)),
            ],
        );
        let instant = Utc.with_ymd_and_hms(2023, 6, 17, 5, 0, 0).unwrap();
        assert_eq!(vec!["friday".to_string()], resolver.service_ids(instant));
    }

    #[test]
    fn calendars_of_added_services() {
        let resolver = resolver(
            vec![
                Calendar::new("wkdy", date(2023, 1, 1), date(2023, 12, 31), weekdays()).unwrap(),
                Calendar::new("wkdy", date(2020, 1, 1), date(2020, 12, 31), weekdays()).unwrap(),
            ],
            vec![
                CalendarDate::added("no_calendar", date(2023, 6, 14)),
                CalendarDate::added("wkdy", date(2023, 6, 14)),
            ],
        );
        let instant = Utc.with_ymd_and_hms(2023, 6, 14, 18, 0, 0).unwrap();
        assert_eq!(
            vec![
                "wkdy".to_string(),
                "no_calendar".to_string(),
                "wkdy".to_string()
            ],
            resolver.service_ids(instant)
        );
        let calendars = resolver.calendars(instant);
        assert_eq!(2, calendars.len());
        assert!(calendars
            .iter()
            .all(|c| c.service_id() == "wkdy" && c.start_date() == date(2023, 1, 1)));
    }

    #[test]
    fn epoch_millis() {
        let resolver = resolver(
            vec![Calendar::new("wkdy", date(2023, 1, 1), date(2023, 12, 31), weekdays()).unwrap()],
            vec![],
        );
        // 2023-06-14T12:00:00Z
        assert_eq!(
            vec!["wkdy".to_string()],
            resolver.current_service_ids(1_686_744_000_000)
        );
        assert_eq!(1, resolver.current_calendars(1_686_744_000_000).len());
        assert!(resolver.current_service_ids(i64::MAX).is_empty());
        assert!(resolver.current_calendars(i64::MIN).is_empty());
    }

    #[test]
    fn expiration() {
        let resolver = resolver(
            vec![
                Calendar::new("c1", date(2022, 1, 1), date(2022, 6, 30), weekdays()).unwrap(),
                Calendar::new("c2", date(2022, 7, 1), date(2022, 12, 31), weekdays()).unwrap(),
            ],
            vec![],
        );
        assert_eq!(
            Some(ValidityPeriod {
                start_date: date(2022, 1, 1),
                end_date: date(2022, 12, 31),
            }),
            resolver.validity_period()
        );
        assert!(!resolver.is_expired(Utc.with_ymd_and_hms(2022, 12, 31, 20, 0, 0).unwrap()));
        assert!(resolver.is_expired(Utc.with_ymd_and_hms(2023, 1, 1, 20, 0, 0).unwrap()));
        let empty = self::resolver(vec![], vec![]);
        assert_eq!(None, empty.validity_period());
        assert!(!empty.is_expired(Utc.with_ymd_and_hms(2023, 1, 1, 20, 0, 0).unwrap()));
    }

    #[test]
    fn expired_calendars_are_reported_once() {
        testing_logger::setup();
        let resolver = resolver(
            vec![
                Calendar::new("c1", date(2022, 1, 1), date(2022, 12, 31), weekdays()).unwrap(),
                Calendar::new("c2", date(2022, 1, 1), date(2022, 12, 31), weekdays()).unwrap(),
            ],
            vec![],
        );
        let instant = Utc.with_ymd_and_hms(2023, 6, 14, 18, 0, 0).unwrap();

        assert_eq!(
            vec!["c1".to_string(), "c2".to_string()],
            resolver.service_ids(instant)
        );
        testing_logger::validate(|captured_logs| {
            let errors = captured_logs
                .iter()
                .filter(|captured_log| captured_log.level == Level::Error)
                .count();
            assert_eq!(1, errors);
        });
    }

    #[test]
    fn inspecting_active_calendars_does_not_report() {
        testing_logger::setup();
        let resolver = resolver(
            vec![Calendar::new("c1", date(2022, 1, 1), date(2022, 12, 31), weekdays()).unwrap()],
            vec![],
        );
        let instant = Utc.with_ymd_and_hms(2023, 6, 14, 18, 0, 0).unwrap();

        assert!(resolver.active_calendars(instant).is_error_worthy());
        testing_logger::validate(|captured_logs| {
            assert!(captured_logs
                .iter()
                .all(|captured_log| captured_log.level != Level::Error));
        });
    }
}
