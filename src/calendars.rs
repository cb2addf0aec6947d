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

//! Selection of the weekly recurring calendars (`calendar.txt`) applying to a
//! day.
//!
//! Calendars are commonly left to expire: nobody updates the feed, or the new
//! one is not processed in time. Instead of running without any service, the
//! calendars ending the latest are used when no calendar covers the day.

use crate::objects::{Calendar, Date};
use crate::utils::local_weekday;
use crate::validity_period::latest_end_date;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Calendars used when none covers the requested day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    /// End date shared by all the fallback calendars
    pub latest_end_date: Date,
    /// Earliest start date of the fallback calendars
    pub earliest_start_date: Date,
    /// False when the fallback calendars have not started yet. It happens
    /// around midnight, when the service of the previous day is looked for
    /// and the calendars start on the current day. That's not worth an
    /// alarm.
    pub is_error_worthy: bool,
}

/// Calendars selected for a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCalendars<'a> {
    /// Selected calendars, in store order
    pub calendars: Vec<&'a Calendar>,
    /// Set when no calendar covers the day
    pub fallback: Option<Fallback>,
}

impl<'a> ActiveCalendars<'a> {
    /// Returns true if the calendars have expired and must be updated.
    pub fn is_error_worthy(&self) -> bool {
        self.fallback
            .map(|fallback| fallback.is_error_worthy)
            .unwrap_or(false)
    }
}

/// Selects the calendars covering `date`, bounds included.
///
/// If none does, every calendar ending on the latest end date is selected
/// instead, see [`Fallback`].
pub fn select_active_calendars(calendars: &[Calendar], date: Date) -> ActiveCalendars<'_> {
    let active: Vec<&Calendar> = calendars.iter().filter(|c| c.covers(date)).collect();
    if !active.is_empty() {
        return ActiveCalendars {
            calendars: active,
            fallback: None,
        };
    }

    let latest_end_date = match latest_end_date(calendars) {
        Some(end_date) => end_date,
        None => {
            return ActiveCalendars {
                calendars: vec![],
                fallback: None,
            }
        }
    };
    let fallback_calendars: Vec<&Calendar> = calendars
        .iter()
        .filter(|c| c.end_date() == latest_end_date)
        .collect();
    // never empty, the latest end date comes from one of the calendars
    let earliest_start_date = fallback_calendars
        .iter()
        .map(|c| c.start_date())
        .min()
        .unwrap_or(latest_end_date);
    ActiveCalendars {
        calendars: fallback_calendars,
        fallback: Some(Fallback {
            latest_end_date,
            earliest_start_date,
            is_error_worthy: earliest_start_date <= date,
        }),
    }
}

/// Returns true if `calendar` runs on the agency local week day of
/// `instant`. The date range of the calendar is not checked.
///
/// [`ServiceResolver`](crate::resolver::ServiceResolver) computes the local
/// week day once per query and calls [`Calendar::runs_on`] on each calendar,
/// which gives the same result.
pub fn matches_weekday(calendar: &Calendar, instant: DateTime<Utc>, timezone: Tz) -> bool {
    calendar.runs_on(local_weekday(instant, timezone))
}
