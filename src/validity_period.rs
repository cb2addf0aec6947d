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

//! Some utilities to calculate validity periods.
use crate::objects::{Calendar, Date, ValidityPeriod};

/// Period covered by all the calendars, from the earliest start date to the
/// latest end date. `None` if there is no calendar.
pub fn get_validity_period(calendars: &[Calendar]) -> Option<ValidityPeriod> {
    let start_date = calendars.iter().map(Calendar::start_date).min()?;
    let end_date = latest_end_date(calendars)?;
    Some(ValidityPeriod {
        start_date,
        end_date,
    })
}

/// Latest end date of the calendars.
pub fn latest_end_date(calendars: &[Calendar]) -> Option<Date> {
    calendars.iter().map(Calendar::end_date).max()
}
