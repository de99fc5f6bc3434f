//! Calendar domain logic for the workout schedule.
//!
//! Date arithmetic for the displayed month and the 6×7 grid layout. The
//! grid is pure data; rendering and click handling belong to the frontend.

use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use shared::{ScheduleCell, ScheduleGrid, SCHEDULE_COLUMNS, SCHEDULE_ROWS};

use super::day_ids::DayIdList;

/// Calendar service that handles schedule grid computations
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Year and month (1-12) of today's date on the local clock
    pub fn current_month(&self) -> (i32, u32) {
        let now = Local::now();
        (now.year(), now.month())
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, year: i32, month: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Weekday of the 1st (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, year: i32, month: u32) -> u32 {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => date.weekday().num_days_from_sunday(),
            None => 0,
        }
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Lay out the month the identifier list was generated for.
    ///
    /// Cells are filled row-major: the first `first_day_of_month` cells of
    /// row 0 are padding, then one cell per day, then padding to the end of
    /// the sixth row.
    pub fn build_grid(&self, day_ids: &DayIdList) -> ScheduleGrid {
        let (year, month) = (day_ids.year(), day_ids.month());
        let days_in_month = self.days_in_month(year, month);
        let first_day = self.first_day_of_month(year, month);
        let ids = day_ids.ids();

        let mut rows = vec![[ScheduleCell::PaddingBefore; SCHEDULE_COLUMNS]; SCHEDULE_ROWS];
        let mut day_counter = 0u32;

        for (row_index, row) in rows.iter_mut().enumerate() {
            for (column, cell) in row.iter_mut().enumerate() {
                if row_index == 0 && (column as u32) < first_day {
                    *cell = ScheduleCell::PaddingBefore;
                } else if day_counter >= days_in_month {
                    *cell = ScheduleCell::PaddingAfter;
                } else {
                    day_counter += 1;
                    match ids.get(day_counter as usize - 1) {
                        Some(&day_id) => {
                            *cell = ScheduleCell::MonthDay {
                                day: day_counter,
                                day_id,
                            }
                        }
                        None => *cell = ScheduleCell::PaddingAfter,
                    }
                }
            }
        }

        debug!(
            "Built schedule grid for {} {}: {} days starting on weekday {}",
            self.month_name(month),
            year,
            days_in_month,
            first_day
        );

        ScheduleGrid {
            year,
            month,
            first_day_of_week: first_day,
            days_in_month,
            rows,
        }
    }
}
