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

//! Definition of the calendar objects handled by the crate.

use chrono::{NaiveDate, Weekday};
use std::fmt;

/// Agency local date, at the day granularity.
pub type Date = NaiveDate;

/// Errors raised when building calendar objects.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CalendarError {
    /// The service identifier of a calendar is empty.
    #[error("a calendar must have a non empty service_id")]
    EmptyServiceId,
    /// The start date of a calendar is after its end date.
    #[error("calendar '{service_id}' starts on {start_date} which is after its end date {end_date}")]
    InvalidValidityPeriod {
        /// Identifier of the faulty calendar
        service_id: String,
        /// First day of the calendar
        start_date: Date,
        /// Last day of the calendar
        end_date: Date,
    },
}

/// Inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityPeriod {
    /// First day of the period
    pub start_date: Date,
    /// Last day of the period
    pub end_date: Date,
}

impl ValidityPeriod {
    /// Returns true if `date` is within the period, bounds included.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A weekly recurring service pattern, as found in `calendar.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    service_id: String,
    monday: bool,
    tuesday: bool,
    wednesday: bool,
    thursday: bool,
    friday: bool,
    saturday: bool,
    sunday: bool,
    start_date: Date,
    end_date: Date,
}

impl Calendar {
    /// Creates a calendar running on `operating_days` from `start_date` to
    /// `end_date` (both included).
    ///
    /// ```
    /// # use chrono::{NaiveDate, Weekday};
    /// # use service_calendar::Calendar;
    /// let calendar = Calendar::new(
    ///     "WE",
    ///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
    ///     vec![Weekday::Sat, Weekday::Sun],
    /// )
    /// .unwrap();
    /// assert!(calendar.runs_on(Weekday::Sun));
    /// assert!(!calendar.runs_on(Weekday::Mon));
    /// ```
    pub fn new<S, I>(
        service_id: S,
        start_date: Date,
        end_date: Date,
        operating_days: I,
    ) -> Result<Self, CalendarError>
    where
        S: Into<String>,
        I: IntoIterator<Item = Weekday>,
    {
        let service_id = service_id.into();
        if service_id.is_empty() {
            return Err(CalendarError::EmptyServiceId);
        }
        if start_date > end_date {
            return Err(CalendarError::InvalidValidityPeriod {
                service_id,
                start_date,
                end_date,
            });
        }
        let mut calendar = Calendar {
            service_id,
            monday: false,
            tuesday: false,
            wednesday: false,
            thursday: false,
            friday: false,
            saturday: false,
            sunday: false,
            start_date,
            end_date,
        };
        for weekday in operating_days {
            *calendar.flag_mut(weekday) = true;
        }
        Ok(calendar)
    }

    fn flag_mut(&mut self, weekday: Weekday) -> &mut bool {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Identifier of the service.
    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// First day the pattern applies.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last day the pattern applies.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Days covered by the calendar.
    pub fn validity_period(&self) -> ValidityPeriod {
        ValidityPeriod {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Returns true if the service runs on `weekday`, whatever the date
    /// range.
    pub fn runs_on(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Week days on which the service runs, starting from Monday.
    pub fn operating_days(&self) -> Vec<Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .iter()
        .copied()
        .filter(|weekday| self.runs_on(*weekday))
        .collect()
    }

    /// Returns true if `date` is between the start and end dates, both
    /// included.
    pub fn covers(&self, date: Date) -> bool {
        self.validity_period().contains(date)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<String> = self
            .operating_days()
            .iter()
            .map(ToString::to_string)
            .collect();
        write!(
            f,
            "{} [{} - {}] ({})",
            self.service_id,
            self.start_date,
            self.end_date,
            days.join(",")
        )
    }
}

/// Is the service added or removed on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionType {
    /// The service runs on the date.
    Add,
    /// The service does not run on the date.
    Remove,
}

/// A single date override of a service, as found in `calendar_dates.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDate {
    /// Identifier of the service, not necessarily backed by a `Calendar`
    pub service_id: String,
    /// Date at which the exception applies
    pub date: Date,
    /// Is the service added or removed
    pub exception_type: ExceptionType,
}

impl CalendarDate {
    /// Creates an exception adding `service_id` on `date`.
    pub fn added<S: Into<String>>(service_id: S, date: Date) -> Self {
        CalendarDate {
            service_id: service_id.into(),
            date,
            exception_type: ExceptionType::Add,
        }
    }

    /// Creates an exception removing `service_id` on `date`.
    pub fn removed<S: Into<String>>(service_id: S, date: Date) -> Self {
        CalendarDate {
            service_id: service_id.into(),
            date,
            exception_type: ExceptionType::Remove,
        }
    }
}
