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

//! Special service of a day (`calendar_dates.txt`), applied on top of the
//! weekly calendars.

use crate::objects::{CalendarDate, Date, ExceptionType};

/// Applies the calendar dates of `date` to `service_ids`, in the order of
/// `calendar_dates`.
///
/// - `Add` appends the service, even if already there.
/// - `Remove` removes the first occurrence of the service, if any.
///
/// Several calendar dates for the same service and day are all applied, so
/// the last one wins. Calendar dates of other days are ignored.
pub fn apply_calendar_dates(
    mut service_ids: Vec<String>,
    calendar_dates: &[CalendarDate],
    date: Date,
) -> Vec<String> {
    for calendar_date in calendar_dates.iter().filter(|cd| cd.date == date) {
        match calendar_date.exception_type {
            ExceptionType::Add => service_ids.push(calendar_date.service_id.clone()),
            ExceptionType::Remove => {
                if let Some(position) = service_ids
                    .iter()
                    .position(|id| *id == calendar_date.service_id)
                {
                    service_ids.remove(position);
                }
            }
        }
    }
    service_ids
}
