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

//! Read access to the calendars of one agency.

use crate::objects::{Calendar, CalendarDate};
use std::{rc::Rc, sync::Arc};

/// Provides the calendars and calendar dates of one agency.
///
/// Both lists must be returned in load order, and that order must be the
/// same from one call to the next: calendar dates are applied in that order,
/// so when two of them concern the same service on the same day, the last
/// one wins.
pub trait CalendarStore {
    /// All the weekly recurring calendars.
    fn calendars(&self) -> &[Calendar];
    /// The calendar dates in effect around now. They may cover more days
    /// than needed, only the ones matching the requested day are used.
    fn calendar_dates(&self) -> &[CalendarDate];
}

impl<S: CalendarStore + ?Sized> CalendarStore for &S {
    fn calendars(&self) -> &[Calendar] {
        (**self).calendars()
    }
    fn calendar_dates(&self) -> &[CalendarDate] {
        (**self).calendar_dates()
    }
}

impl<S: CalendarStore + ?Sized> CalendarStore for Box<S> {
    fn calendars(&self) -> &[Calendar] {
        (**self).calendars()
    }
    fn calendar_dates(&self) -> &[CalendarDate] {
        (**self).calendar_dates()
    }
}

impl<S: CalendarStore + ?Sized> CalendarStore for Rc<S> {
    fn calendars(&self) -> &[Calendar] {
        (**self).calendars()
    }
    fn calendar_dates(&self) -> &[CalendarDate] {
        (**self).calendar_dates()
    }
}

impl<S: CalendarStore + ?Sized> CalendarStore for Arc<S> {
    fn calendars(&self) -> &[Calendar] {
        (**self).calendars()
    }
    fn calendar_dates(&self) -> &[CalendarDate] {
        (**self).calendar_dates()
    }
}

/// A `CalendarStore` keeping everything in memory, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCalendarStore {
    calendars: Vec<Calendar>,
    calendar_dates: Vec<CalendarDate>,
}

impl InMemoryCalendarStore {
    /// Creates a store from already loaded objects.
    pub fn new(calendars: Vec<Calendar>, calendar_dates: Vec<CalendarDate>) -> Self {
        InMemoryCalendarStore {
            calendars,
            calendar_dates,
        }
    }

    /// Appends a calendar after the existing ones.
    pub fn push_calendar(&mut self, calendar: Calendar) {
        self.calendars.push(calendar);
    }

    /// Appends a calendar date after the existing ones.
    pub fn push_calendar_date(&mut self, calendar_date: CalendarDate) {
        self.calendar_dates.push(calendar_date);
    }
}

impl CalendarStore for InMemoryCalendarStore {
    fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }
    fn calendar_dates(&self) -> &[CalendarDate] {
        &self.calendar_dates
    }
}
