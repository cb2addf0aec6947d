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

use crate::objects::Date;
use chrono::{DateTime, Datelike, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// Day of the agency at `instant`.
pub(crate) fn local_date(instant: DateTime<Utc>, timezone: Tz) -> Date {
    instant.with_timezone(&timezone).date_naive()
}

pub(crate) fn local_weekday(instant: DateTime<Utc>, timezone: Tz) -> Weekday {
    local_date(instant, timezone).weekday()
}

/// `None` when the value cannot be represented by chrono.
pub(crate) fn from_epoch_millis(epoch_millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(epoch_millis).single()
}
