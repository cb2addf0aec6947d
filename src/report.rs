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

//! Reporting of expired calendars.
use crate::objects::Calendar;
use tracing::{debug, error};

/// Logs that every calendar has expired.
///
/// A single error is logged so that it can be alerted on. The calendars used
/// in place of the expired ones can be numerous, they are only listed at the
/// debug level.
pub fn report_expired_calendars(fallback_calendars: &[&Calendar]) {
    error!("All calendars are expired, update them!");
    debug!(
        "So that the system keeps running, the {} old calendars will be used: {}",
        fallback_calendars.len(),
        fallback_calendars
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
}
