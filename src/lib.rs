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

//! The `service_calendar` crate resolves which transit services are running
//! at a given instant.
//!
//! It works on already loaded [GTFS](http://gtfs.org/) like data: weekly
//! recurring calendars (`calendar.txt`) and date exceptions
//! (`calendar_dates.txt`). When every calendar has expired, the calendars
//! ending the latest are still used so that a live system keeps running, and
//! an error is logged so that someone refreshes the data.

#![deny(missing_docs)]

pub mod calendar_dates;
pub mod calendars;
pub mod configuration;
pub mod objects;
pub mod report;
pub mod resolver;
pub mod store;
pub(crate) mod utils;
pub mod validity_period;

/// The error type used by the crate.
pub type Error = anyhow::Error;

/// The corresponding result type used by the crate.
pub type Result<T> = std::result::Result<T, Error>;

pub use crate::objects::{Calendar, CalendarDate, CalendarError, Date, ExceptionType};
pub use crate::resolver::ServiceResolver;
pub use crate::store::{CalendarStore, InMemoryCalendarStore};
